//! Roster entries and their derived standings rows.

use serde::{Deserialize, Serialize};

/// Opaque, stable team identifier (e.g. `team-3`).
pub type TeamId = String;

/// One team on the roster.
///
/// Only the editable fields are stored. `total` and `rank` are derived on
/// demand by the ranking engine and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    /// Unique within the roster, assigned at creation, never reassigned.
    pub id: TeamId,

    /// Display name.
    pub name: String,

    /// Image reference for the team logo (may be empty).
    #[serde(default)]
    pub logo: String,

    /// Match wins.
    #[serde(default)]
    pub wins: u32,

    /// Placement points.
    #[serde(default)]
    pub pp: u32,

    /// Kill points.
    #[serde(default)]
    pub kp: u32,
}

impl Team {
    /// Create a team with zeroed counters and no logo.
    pub fn new(id: impl Into<TeamId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            logo: String::new(),
            wins: 0,
            pp: 0,
            kp: 0,
        }
    }

    /// Placement points plus kill points.
    pub fn total(&self) -> u64 {
        u64::from(self.pp) + u64::from(self.kp)
    }

    /// Merge a patch into this team. Fields absent from the patch are kept.
    pub fn apply(&mut self, patch: TeamPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(logo) = patch.logo {
            self.logo = logo;
        }
        if let Some(wins) = patch.wins {
            self.wins = wins;
        }
        if let Some(pp) = patch.pp {
            self.pp = pp;
        }
        if let Some(kp) = patch.kp {
            self.kp = kp;
        }
    }
}

/// Partial update for a [`Team`].
///
/// There is deliberately no `id` field: an update can never re-key a team.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TeamPatch {
    pub name: Option<String>,
    pub logo: Option<String>,
    pub wins: Option<u32>,
    pub pp: Option<u32>,
    pub kp: Option<u32>,
}

impl TeamPatch {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn logo(mut self, logo: impl Into<String>) -> Self {
        self.logo = Some(logo.into());
        self
    }

    pub fn wins(mut self, wins: u32) -> Self {
        self.wins = Some(wins);
        self
    }

    pub fn pp(mut self, pp: u32) -> Self {
        self.pp = Some(pp);
        self
    }

    pub fn kp(mut self, kp: u32) -> Self {
        self.kp = Some(kp);
        self
    }

    /// True when the patch carries no field at all.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// A ranked row: the team plus its derived total and 1-based rank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    #[serde(flatten)]
    pub team: Team,

    /// `pp + kp` at ranking time.
    pub total: u64,

    /// 1-based position in the ranked output.
    pub rank: usize,
}
