//! Error types for driver interactions.
//!
//! The engine never lets an error cross its public boundary: a failed
//! driver call is recorded on the affected tile (`Tile::is_error`) and the
//! rest of the operation continues. The variants here exist so the driver
//! can report *why* a call failed and so tests can assert on it.

use thiserror::Error;

use crate::driver::{ScreenId, WindowId};

/// Result type alias for driver calls.
pub type DriverResult<T> = Result<T, DriverError>;

/// Errors reported by a [`crate::driver::WindowDriver`] implementation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DriverError {
    /// A query or command targeted a window that no longer exists.
    ///
    /// Windows can vanish between the event that triggered an arrangement
    /// and the arrangement itself. The engine treats this as routine: the
    /// tile is flagged and excluded rather than the pass aborted.
    #[error("window {0} no longer exists")]
    StaleWindow(WindowId),

    /// A query targeted a screen the compositor does not know about.
    #[error("screen {0} is not a known output")]
    UnknownScreen(ScreenId),
}

impl DriverError {
    /// Returns `true` if the error means the window vanished concurrently.
    #[must_use]
    pub const fn is_stale(&self) -> bool { matches!(self, Self::StaleWindow(_)) }
}

// ============================================================================
// Tests
// ============================================================================
