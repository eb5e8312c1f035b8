//! The tournament state store.

use std::path::Path;
use std::sync::Arc;

use serde::Serialize;

use standings_common::error::StandingsResult;
use standings_model::{
    default_teams, default_tournament_info, Standing, Team, TeamPatch, TournamentInfo,
    TournamentInfoPatch,
};

use crate::persistence::{encode, PersistenceAdapter, StorageKey};
use crate::ranking::rank;
use crate::storage::FileStorage;
use crate::writer::{InlineWriter, PendingWrite, WriteSink};

/// Sole mutable owner of the roster and the tournament configuration.
///
/// Reads are served from memory. Every mutation updates memory first and then
/// submits the affected entity to the [`WriteSink`]; a read right after a
/// mutation always observes the new value, whether or not the write has
/// reached durable storage yet.
pub struct TournamentStore {
    teams: Vec<Team>,
    info: TournamentInfo,
    sink: Box<dyn WriteSink>,
}

/// An owned, consistent copy of both entities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreSnapshot {
    pub teams: Vec<Team>,
    pub tournament_info: TournamentInfo,
}

impl StoreSnapshot {
    /// Ranked view of the snapshot's roster.
    pub fn ranked_teams(&self) -> Vec<Standing> {
        rank(&self.teams)
    }
}

impl std::fmt::Debug for TournamentStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TournamentStore")
            .field("teams", &self.teams.len())
            .field("host_name", &self.info.host_name)
            .finish_non_exhaustive()
    }
}

impl TournamentStore {
    /// Rehydrate both entities through `adapter`, each falling back to its
    /// defaults independently, and route future writes to `sink`.
    pub fn open(adapter: &PersistenceAdapter, sink: Box<dyn WriteSink>) -> Self {
        let teams = adapter.load_teams();
        let info = adapter.load_tournament_info();
        tracing::info!(
            teams = teams.len(),
            host = %info.host_name,
            "Tournament store opened"
        );
        Self { teams, info, sink }
    }

    /// Open a store over a storage directory with synchronous writes.
    pub fn open_dir(dir: impl AsRef<Path>) -> StandingsResult<Self> {
        let storage = FileStorage::open(dir)?;
        let adapter = PersistenceAdapter::new(Arc::new(storage));
        let sink = Box::new(InlineWriter::new(adapter.clone()));
        Ok(Self::open(&adapter, sink))
    }

    /// A store over fresh in-memory storage.
    pub fn in_memory() -> Self {
        let adapter = PersistenceAdapter::in_memory();
        let sink = Box::new(InlineWriter::new(adapter.clone()));
        Self::open(&adapter, sink)
    }

    /// Current roster in insertion order, unranked.
    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    /// Look up a team by id.
    pub fn team(&self, id: &str) -> Option<&Team> {
        self.teams.iter().find(|team| team.id == id)
    }

    /// Freshly ranked view of the current roster.
    pub fn ranked_teams(&self) -> Vec<Standing> {
        rank(&self.teams)
    }

    /// Current configuration.
    pub fn tournament_info(&self) -> &TournamentInfo {
        &self.info
    }

    /// Owned copy of both entities, for consumers that work asynchronously.
    pub fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            teams: self.teams.clone(),
            tournament_info: self.info.clone(),
        }
    }

    /// Merge `patch` into the team with `id`.
    ///
    /// Returns `false` if no team has that id; the roster is then left
    /// unchanged and nothing is persisted.
    pub fn update_team(&mut self, id: &str, patch: TeamPatch) -> bool {
        let Some(team) = self.teams.iter_mut().find(|team| team.id == id) else {
            tracing::warn!(team_id = id, "Ignoring update for unknown team");
            return false;
        };

        team.apply(patch);
        tracing::debug!(team_id = id, "Team updated");
        self.persist(StorageKey::Teams);
        true
    }

    /// Merge `patch` into the configuration.
    pub fn update_tournament_info(&mut self, patch: TournamentInfoPatch) {
        self.info.apply(patch);
        tracing::debug!("Tournament info updated");
        self.persist(StorageKey::TournamentInfo);
    }

    /// Replace both entities with the canonical defaults.
    pub fn reset_to_default(&mut self) {
        self.teams = default_teams();
        self.info = default_tournament_info();
        tracing::info!("Tournament store reset to defaults");
        for key in StorageKey::ALL {
            self.persist(key);
        }
    }

    fn persist(&mut self, key: StorageKey) {
        let encoded = match key {
            StorageKey::Teams => encode(key, &self.teams),
            StorageKey::TournamentInfo => encode(key, &self.info),
        };

        match encoded {
            Ok(payload) => self.sink.submit(PendingWrite { key, payload }),
            Err(e) => tracing::error!(%key, error = %e, "Failed to encode entity for persistence"),
        }
    }
}
