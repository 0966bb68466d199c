//! The driver seam between the engine and the host window system.
//!
//! Everything the engine needs from the outside world comes through
//! [`WindowDriver`]: reading the stacking order, querying working areas and
//! window visibility, and committing geometry. The engine never reaches for
//! ambient compositor state; a driver is injected at construction and every
//! query goes through it, which is also what makes the engine testable with
//! a scripted fake.

use crate::error::DriverResult;
use crate::state::{Area, Rect};

/// Opaque handle identifying a window. Assigned by the host window system;
/// the engine only ever compares it for identity.
pub type WindowId = u32;

/// Stable identifier for one driver-level output.
pub type ScreenId = u32;

/// Capabilities the engine requires from its host binding.
pub trait WindowDriver {
    /// Current windows in stacking order. Consulted once, at startup, to
    /// adopt windows that already exist.
    fn stacking_order(&self) -> Vec<WindowId>;

    /// Usable extent of a screen (excluding panels, docks and the like).
    fn working_area(&self, screen: ScreenId) -> Area;

    /// Whether a window is visible on the given screen.
    ///
    /// Fails with [`crate::error::DriverError::StaleWindow`] when the
    /// window vanished concurrently.
    fn is_visible(&self, window: WindowId, screen: ScreenId) -> DriverResult<bool>;

    /// Current geometry of a window, as the host sees it.
    fn window_geometry(&self, window: WindowId) -> DriverResult<Rect>;

    /// Command a window to adopt a new geometry.
    fn set_window_geometry(&mut self, window: WindowId, geometry: Rect) -> DriverResult<()>;

    /// The window holding input focus, if any.
    fn active_window(&self) -> Option<WindowId>;

    /// Give input focus to a window.
    fn activate_window(&mut self, window: WindowId);
}
