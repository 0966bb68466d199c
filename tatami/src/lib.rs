//! Tatami - a tiling window manager engine.
//!
//! This crate tracks a set of on-screen windows per tiling target and
//! computes their positions and sizes with a pluggable layout algorithm,
//! reacting to window lifecycle and user-input events. It is host-agnostic:
//! everything the engine needs from a real window system (stacking order,
//! working areas, visibility, geometry commands, focus) comes through the
//! [`driver::WindowDriver`] trait, which a host binding implements.
//!
//! # Architecture
//!
//! ```text
//! host binding ──events──▶ EventDispatcher ──▶ TilingEngine ──▶ layout
//!      ▲                                            │
//!      └──────────── WindowDriver calls ────────────┘
//! ```
//!
//! The engine owns the ordered tile list and the screen set; `arrange`
//! filters tiles by visibility per screen, runs the screen's layout, and
//! pushes the resulting geometry back through the driver.

pub mod config;
pub mod dispatch;
pub mod driver;
pub mod engine;
pub mod error;
pub mod layout;
pub mod state;

pub use config::{LayoutConfig, MasterStackOptions};
pub use dispatch::{DriverEvent, EventDispatcher};
pub use driver::{ScreenId, WindowDriver, WindowId};
pub use engine::{TilingEngine, UserInput};
pub use error::{DriverError, DriverResult};
pub use layout::{LAYOUT_INLINE_CAP, LayoutResult};
pub use state::{Area, Rect, Screen, Tile};
