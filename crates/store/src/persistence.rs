//! Persistence adapter: entities to and from the durable medium.
//!
//! Loading never fails the caller. A missing key, an unreadable medium, or a
//! value that does not parse all resolve to the caller-supplied default. The
//! two entities live under independent keys, so damage to one never affects
//! the other.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use standings_model::{default_teams, default_tournament_info, Team, TournamentInfo};

use crate::error::{ParseError, StorageError, StorageResult};
use crate::storage::{KeyValueStorage, MemoryStorage};

/// The durable keys owned by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKey {
    /// The team roster (`Vec<Team>`).
    Teams,
    /// The tournament configuration record.
    TournamentInfo,
}

impl StorageKey {
    pub const ALL: [StorageKey; 2] = [StorageKey::Teams, StorageKey::TournamentInfo];

    pub fn as_str(&self) -> &'static str {
        match self {
            StorageKey::Teams => "teams",
            StorageKey::TournamentInfo => "tournamentInfo",
        }
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse a persisted roster. Rejects rosters whose ids are not unique.
pub fn parse_teams(raw: &str) -> Result<Vec<Team>, ParseError> {
    let teams: Vec<Team> = serde_json::from_str(raw)?;

    let mut seen = HashSet::with_capacity(teams.len());
    for team in &teams {
        if !seen.insert(team.id.as_str()) {
            return Err(ParseError::DuplicateTeamId {
                id: team.id.clone(),
            });
        }
    }

    Ok(teams)
}

/// Parse a persisted tournament configuration.
pub fn parse_tournament_info(raw: &str) -> Result<TournamentInfo, ParseError> {
    Ok(serde_json::from_str(raw)?)
}

/// Serializes entities into a [`KeyValueStorage`] and rehydrates them.
#[derive(Clone)]
pub struct PersistenceAdapter {
    storage: Arc<dyn KeyValueStorage>,
}

impl fmt::Debug for PersistenceAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PersistenceAdapter").finish_non_exhaustive()
    }
}

impl PersistenceAdapter {
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self { storage }
    }

    /// Adapter over a fresh [`MemoryStorage`].
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStorage::new()))
    }

    /// The underlying medium.
    pub fn storage(&self) -> &Arc<dyn KeyValueStorage> {
        &self.storage
    }

    /// Load any deserializable value, falling back to `default`.
    pub fn load<T: DeserializeOwned>(&self, key: StorageKey, default: impl FnOnce() -> T) -> T {
        self.load_with(key, |raw| Ok(serde_json::from_str(raw)?), default)
    }

    /// Load the roster, falling back to the default roster.
    pub fn load_teams(&self) -> Vec<Team> {
        self.load_with(StorageKey::Teams, parse_teams, default_teams)
    }

    /// Load the configuration, falling back to the default configuration.
    pub fn load_tournament_info(&self) -> TournamentInfo {
        self.load_with(
            StorageKey::TournamentInfo,
            parse_tournament_info,
            default_tournament_info,
        )
    }

    /// Read `key`, run `parse`, and map every failure to `default()`.
    pub fn load_with<T>(
        &self,
        key: StorageKey,
        parse: impl FnOnce(&str) -> Result<T, ParseError>,
        default: impl FnOnce() -> T,
    ) -> T {
        let raw = match self.storage.get(key.as_str()) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                tracing::debug!(%key, "No persisted value, using defaults");
                return default();
            }
            Err(e) => {
                tracing::warn!(%key, error = %e, "Failed to read persisted value, using defaults");
                return default();
            }
        };

        match parse(&raw) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(%key, error = %e, "Discarding unparseable persisted value, using defaults");
                default()
            }
        }
    }

    /// Serialize `value` and overwrite `key` with it.
    pub fn save<T: Serialize + ?Sized>(&self, key: StorageKey, value: &T) -> StorageResult<()> {
        let payload = encode(key, value)?;
        self.write_raw(key, &payload)
    }

    /// Overwrite `key` with an already-encoded payload.
    pub fn write_raw(&self, key: StorageKey, payload: &str) -> StorageResult<()> {
        self.storage.set(key.as_str(), payload)
    }
}

/// Encode a value the way the adapter stores it.
pub fn encode<T: Serialize + ?Sized>(key: StorageKey, value: &T) -> StorageResult<String> {
    serde_json::to_string(value).map_err(|e| StorageError::Encode {
        key: key.to_string(),
        source: e,
    })
}
