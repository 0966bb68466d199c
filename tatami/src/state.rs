//! Core state types for the tiling engine.
//!
//! These types form a relational structure:
//! - `Tile` represents one managed window's placement record
//! - `Screen` represents one tiling target (display/desktop combination)
//!
//! Relations:
//! - `Tile.window` → a window handle owned by the compositor, never by us
//! - `Screen.id` → a driver-level output identifier
//!
//! The engine owns the `Tile` and `Screen` collections exclusively; window
//! handles are borrowed identities looked up through the driver.

use serde::{Deserialize, Serialize};

use crate::config::LayoutConfig;
use crate::driver::{ScreenId, WindowId};

// ============================================================================
// Geometry Types
// ============================================================================

/// An axis-aligned rectangle in integer pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// Create a new rectangle.
    #[must_use]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// Create a zero-sized rectangle at origin.
    #[must_use]
    pub const fn zero() -> Self { Self::new(0, 0, 0, 0) }

    /// Check if this rectangle has non-negative extents.
    ///
    /// A layout producing negative extents is a defect, not a valid state.
    #[must_use]
    pub const fn is_valid(&self) -> bool { self.width >= 0 && self.height >= 0 }
}

/// The usable extent of a screen, as reported by the driver.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Area {
    pub width: i32,
    pub height: i32,
}

impl Area {
    /// Create a new area.
    #[must_use]
    pub const fn new(width: i32, height: i32) -> Self { Self { width, height } }
}

// ============================================================================
// Tile
// ============================================================================

/// Placement record for one managed window.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tile {
    /// Handle of the underlying window. The engine tracks it by identity
    /// and never constructs or destroys the window itself.
    pub window: WindowId,

    /// Last geometry computed by the engine for this tile.
    pub geometry: Rect,

    /// True until the tile has been placed at least once. Informs layouts
    /// about first-placement policy; master-stack ignores it.
    pub is_new: bool,

    /// Set when a driver query or command against the window fails. An
    /// errored tile is excluded from every later arrangement and purged on
    /// the next unmanage sweep.
    pub is_error: bool,
}

impl Tile {
    /// Create a tile for a freshly managed window.
    #[must_use]
    pub const fn new(window: WindowId) -> Self {
        Self {
            window,
            geometry: Rect::zero(),
            is_new: true,
            is_error: false,
        }
    }
}

// ============================================================================
// Screen
// ============================================================================

/// One tiling target.
///
/// Screens hold no tile references; tiles are filtered into a screen's
/// context at arrange time by visibility, so removing a screen cannot leave
/// anything dangling.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Screen {
    /// Stable identifier correlating to a driver-level output.
    pub id: ScreenId,

    /// Active layout for this screen, with its options resolved at creation
    /// time. `None` means the screen is explicitly floated and `arrange`
    /// skips it entirely.
    pub layout: Option<LayoutConfig>,
}

impl Screen {
    /// Create a screen tiled with the default layout.
    #[must_use]
    pub fn new(id: ScreenId) -> Self {
        Self {
            id,
            layout: Some(LayoutConfig::default()),
        }
    }

    /// Create a screen with no layout assigned (floating).
    #[must_use]
    pub const fn floating(id: ScreenId) -> Self { Self { id, layout: None } }
}

// ============================================================================
// Tests
// ============================================================================
