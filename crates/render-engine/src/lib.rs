//! Standings Overlay Render Engine
//!
//! Consumers of the tournament state engine that turn a store snapshot into
//! something visible:
//!
//! ```text
//! StoreSnapshot ──► OverlayView ──► header / point table / footer markup
//!       │
//!       └──► ScreenshotExporter
//!                 background skin ──┐
//!                                   ├── composite ──► tournament-screenshot.png
//!                 content layer ────┘
//! ```

pub mod compositor;
pub mod export;
pub mod overlay;

pub use export::*;
pub use overlay::*;
