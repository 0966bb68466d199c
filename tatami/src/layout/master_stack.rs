//! Master-stack layout - a master column with overflow in a stack column.
//!
//! The first `master_count` tiles share a full-height master column on the
//! left; remaining tiles share a stack column on the right.
//!
//! ```text
//! n <= master_count:     n > master_count:
//! ┌─────────────────┐    ┌──────────┬──────┐
//! │        1        │    │          │  2   │
//! ├─────────────────┤    │    1     ├──────┤
//! │        2        │    │          │  3   │
//! └─────────────────┘    └──────────┴──────┘
//! ```
//!
//! All divisions truncate toward zero, so each column may leave up to
//! `count - 1` pixels of vertical space unassigned at the bottom. That slack
//! is deliberate and tested; it is not redistributed.

use super::LayoutResult;
use crate::config::MasterStackOptions;
use crate::driver::WindowId;
use crate::state::{Area, Rect};

/// Master-stack layout.
///
/// # Arguments
///
/// * `windows` - ordered visible windows; the first `master_count` become
///   the master column
/// * `area` - usable extent of the screen
/// * `opts` - resolved options (`ratio` is the stack column's width share)
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)] // Pixel counts fit i32
pub fn layout(windows: &[WindowId], area: Area, opts: &MasterStackOptions) -> LayoutResult {
    let mut result = LayoutResult::new();
    let count = windows.len();
    if count == 0 {
        return result;
    }

    let master_count;
    let master_width;
    let master_height;
    let stack_width;
    let stack_height;
    let stack_x;

    if count <= opts.master_count {
        // Single full-width column; the stack is fully suppressed.
        master_count = count;
        master_width = area.width;
        master_height = area.height / count as i32;

        stack_width = 0;
        stack_height = 0;
        stack_x = 0;
    } else {
        master_count = opts.master_count;
        master_width = (f64::from(area.width) * (1.0 - opts.ratio)).floor() as i32;
        // master_count of zero is legal and means a stack-only layout.
        master_height = if master_count == 0 {
            0
        } else {
            area.height / master_count as i32
        };

        let stack_count = (count - master_count) as i32;
        stack_width = area.width - master_width;
        stack_height = area.height / stack_count;
        stack_x = master_width + 1;
    }

    for (i, &window) in windows.iter().take(master_count).enumerate() {
        let geometry = Rect::new(0, master_height * i as i32, master_width, master_height);
        result.push((window, geometry));
    }

    for (i, &window) in windows.iter().skip(master_count).enumerate() {
        let geometry = Rect::new(stack_x, stack_height * i as i32, stack_width, stack_height);
        result.push((window, geometry));
    }

    result
}

// ============================================================================
// Tests
// ============================================================================
