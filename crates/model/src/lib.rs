//! Standings Overlay Data Model
//!
//! Defines the data contracts shared by every surface of the overlay:
//! - **Team:** one roster entry with its editable point counters
//! - **TournamentInfo:** flat record of branding, counters, and styling
//! - **TextStyle:** solid/gradient descriptor for a styled text element
//! - **Patches:** partial updates merged field-by-field into the records
//! - **Defaults:** the canonical first-run and reset values
//!
//! Everything here is pure data. Persistence and ranking live in
//! `standings-store`; rendering concerns live in `standings-render`.

pub mod defaults;
pub mod style;
pub mod team;
pub mod tournament;

pub use defaults::*;
pub use style::*;
pub use team::*;
pub use tournament::*;
