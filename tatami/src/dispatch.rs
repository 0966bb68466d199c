//! Event plumbing between a host binding and the engine.
//!
//! Hosts emit events as soon as window states change, including states the
//! engine itself just modified, so a handler can easily trigger another
//! handler while the first is still executing. [`EventDispatcher`] is the
//! protective boundary: it serializes events into the engine and drops any
//! event that arrives while one is already being handled, so the engine can
//! stay free of re-entrancy guards.

use parking_lot::{Mutex, MutexGuard};

use crate::driver::{ScreenId, WindowDriver, WindowId};
use crate::engine::{TilingEngine, UserInput};

// ============================================================================
// Events
// ============================================================================

/// Discrete notifications a host binding feeds into the dispatcher.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DriverEvent {
    /// A window appeared and should be managed.
    WindowAdded(WindowId),
    /// A managed window went away.
    WindowRemoved(WindowId),
    /// A window's geometry changed outside the engine (user drag, app
    /// resize); triggers reconciliation, not a full re-layout.
    WindowGeometryChanged(WindowId),
    /// An output appeared.
    ScreenAdded(ScreenId),
    /// An output went away.
    ScreenRemoved(ScreenId),
    /// Output geometry changed without adding or removing screens
    /// (resolution change, panel moved); re-arranges everything.
    ScreensChanged,
    /// A user shortcut fired.
    Input(UserInput),
}

// ============================================================================
// Dispatcher
// ============================================================================

/// Non-reentrant event entry point around a [`TilingEngine`].
///
/// The guard uses try-lock semantics, not blocking: a nested event is
/// dropped rather than queued, mirroring what a well-behaved host binding
/// does with its own re-entry flag. Dropped events are safe to lose because
/// every arrangement recomputes from current state.
#[derive(Debug)]
pub struct EventDispatcher<D> {
    engine: Mutex<TilingEngine<D>>,
}

impl<D: WindowDriver> EventDispatcher<D> {
    /// Wrap an engine for event dispatch.
    #[must_use]
    pub const fn new(engine: TilingEngine<D>) -> Self {
        Self { engine: Mutex::new(engine) }
    }

    /// Handle one event. Returns `false` if the event was dropped because
    /// another event is still being handled.
    pub fn dispatch(&self, event: DriverEvent) -> bool {
        let Some(mut engine) = self.engine.try_lock() else {
            tracing::trace!(?event, "dropping re-entrant event");
            return false;
        };

        match event {
            DriverEvent::WindowAdded(window) => engine.manage_window(window),
            DriverEvent::WindowRemoved(window) => engine.unmanage_window(window),
            DriverEvent::WindowGeometryChanged(window) => engine.reconcile_window(window),
            DriverEvent::ScreenAdded(screen) => {
                engine.add_screen(screen);
                engine.arrange();
            }
            DriverEvent::ScreenRemoved(screen) => {
                engine.remove_screen(screen);
                engine.arrange();
            }
            DriverEvent::ScreensChanged => engine.arrange(),
            DriverEvent::Input(input) => engine.handle_input(input),
        }
        true
    }

    /// Direct access to the engine, outside event handling (startup,
    /// queries). Blocks until no event is in flight.
    pub fn engine(&self) -> MutexGuard<'_, TilingEngine<D>> { self.engine.lock() }

    /// Unwrap the engine.
    #[must_use]
    pub fn into_engine(self) -> TilingEngine<D> { self.engine.into_inner() }
}
