//! Tournament State Engine
//!
//! The single source of truth for the team roster and the tournament
//! configuration:
//!
//! ```text
//!  KeyValueStorage (memory | files)
//!          ▲
//!          │ get/set
//!  PersistenceAdapter ◄──── WriteSink (inline | background task)
//!          │ load                ▲ PendingWrite after every mutation
//!          ▼                     │
//!   TournamentStore ─────────────┘
//!          │ rank()
//!          ▼
//!   Vec<Standing>  ──► header / point table / editor / exporter
//! ```
//!
//! Consumers only talk to [`TournamentStore`] (usually through a
//! [`StoreContext`]); they never touch durable storage directly.

pub mod context;
pub mod error;
pub mod persistence;
pub mod ranking;
pub mod storage;
pub mod store;
pub mod writer;

pub use context::StoreContext;
pub use error::*;
pub use persistence::{parse_teams, parse_tournament_info, PersistenceAdapter, StorageKey};
pub use ranking::rank;
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage};
pub use store::{StoreSnapshot, TournamentStore};
pub use writer::{BackgroundWriter, InlineWriter, PendingWrite, WriteSink, WriterHandle, WriterStats};
