//! Layout algorithms for arranging tiles on a screen.
//!
//! Each layout takes an ordered list of visible windows, the usable area of
//! a screen, and its typed options, and returns the calculated geometry for
//! each window. Layouts are pure: the engine writes the results back into
//! its tiles and pushes them to the driver.
//!
//! # Supported layouts
//!
//! - **Master-stack**: up to `master_count` tiles in a full-height master
//!   column, overflow stacked in a second column
//!
//! # Performance
//!
//! Layout results use `SmallVec` to avoid heap allocations for screens with
//! up to 16 visible windows (the common case).

mod master_stack;

use smallvec::SmallVec;

use crate::config::LayoutConfig;
use crate::driver::WindowId;
use crate::state::{Area, Rect};

// ============================================================================
// Layout Result
// ============================================================================

/// Inline capacity for layout results.
pub const LAYOUT_INLINE_CAP: usize = 16;

/// Result of a layout calculation: (window, geometry) pairs in tile order.
pub type LayoutResult = SmallVec<[(WindowId, Rect); LAYOUT_INLINE_CAP]>;

// ============================================================================
// Dispatch
// ============================================================================

/// Calculates geometries for the given layout variant.
///
/// `windows` is the ordered sequence of visible windows on the screen; the
/// result preserves that order. An empty input produces an empty result
/// without touching the driver.
#[must_use]
pub fn apply(config: LayoutConfig, windows: &[WindowId], area: Area) -> LayoutResult {
    if windows.is_empty() {
        return SmallVec::new();
    }

    match config {
        LayoutConfig::MasterStack(opts) => master_stack::layout(windows, area, &opts),
    }
}

// ============================================================================
// Tests
// ============================================================================
