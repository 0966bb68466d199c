//! The tiling engine.
//!
//! [`TilingEngine`] owns the authoritative tile order and the screen set,
//! orchestrates arrangement, and interprets user-input commands by mutating
//! the tile ordering. It is single-threaded and event-driven: every public
//! operation runs to completion before the next event is processed, and the
//! surrounding dispatch layer guarantees the engine is never re-entered.
//!
//! Tile order is the user-visible ordering used for master/stack placement.
//! It changes only through explicit add/remove and move commands; `arrange`
//! reads it but never reorders.

use serde::{Deserialize, Serialize};

use crate::config::LayoutConfig;
use crate::driver::{ScreenId, WindowDriver, WindowId};
use crate::layout;
use crate::state::{Screen, Tile};

// ============================================================================
// User Input
// ============================================================================

/// Directional commands bound to user shortcuts.
///
/// These are the concrete ±1 bindings; [`TilingEngine::move_focus`] and
/// [`TilingEngine::move_tile`] accept arbitrary integer steps.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UserInput {
    /// Focus the next tile in order.
    FocusNext,
    /// Focus the previous tile in order.
    FocusPrev,
    /// Swap the focused tile with its successor.
    MoveNext,
    /// Swap the focused tile with its predecessor.
    MovePrev,
}

// ============================================================================
// Tiling Engine
// ============================================================================

/// The central tiling engine.
///
/// Owns the tile and screen collections exclusively. Window handles are
/// borrowed identities: the engine tracks and compares them but never
/// creates or destroys the underlying windows.
#[derive(Debug)]
pub struct TilingEngine<D> {
    /// Injected host binding; the engine's only view of the outside world.
    driver: D,
    /// Managed tiles in user-visible order.
    tiles: Vec<Tile>,
    /// Known tiling targets, keyed by id.
    screens: Vec<Screen>,
}

impl<D: WindowDriver> TilingEngine<D> {
    /// Create an engine around a driver, with no tiles or screens yet.
    #[must_use]
    pub const fn new(driver: D) -> Self {
        Self {
            driver,
            tiles: Vec::new(),
            screens: Vec::new(),
        }
    }

    /// Read access to the driver.
    pub const fn driver(&self) -> &D { &self.driver }

    /// Mutable access to the driver.
    pub const fn driver_mut(&mut self) -> &mut D { &mut self.driver }

    /// Managed tiles in their current order.
    #[must_use]
    pub fn tiles(&self) -> &[Tile] { &self.tiles }

    /// Known screens.
    #[must_use]
    pub fn screens(&self) -> &[Screen] { &self.screens }

    // ========================================================================
    // Window Lifecycle
    // ========================================================================

    /// Adopt every window the driver already knows about, in stacking
    /// order, then arrange once.
    ///
    /// Called at startup; later windows arrive one at a time through
    /// [`Self::manage_window`].
    pub fn adopt_existing_windows(&mut self) {
        let order = self.driver.stacking_order();
        tracing::debug!(count = order.len(), "adopting existing windows");
        for window in order {
            self.tiles.push(Tile::new(window));
        }
        self.arrange();
    }

    /// Start managing a window: appends a tile at the end of the order and
    /// re-arranges.
    ///
    /// The caller is responsible for managing each window exactly once per
    /// lifetime; duplicates are not filtered here.
    pub fn manage_window(&mut self, window: WindowId) {
        tracing::debug!(window, "managing window");
        self.tiles.push(Tile::new(window));
        self.arrange();
    }

    /// Stop managing a window and re-arrange.
    ///
    /// Also purges every tile flagged errored, wherever it came from: a
    /// removal is the natural moment to sweep out entries that went stale
    /// during earlier arrangements. Removing an unknown window is a no-op.
    pub fn unmanage_window(&mut self, window: WindowId) {
        let before = self.tiles.len();
        self.tiles.retain(|tile| tile.window != window && !tile.is_error);
        let removed = before - self.tiles.len();
        if removed > 0 {
            tracing::debug!(window, removed, "unmanaged window");
        }
        self.arrange();
    }

    // ========================================================================
    // Screen Lifecycle
    // ========================================================================

    /// Register a tiling target with the default layout. Adding an already
    /// known id is a no-op.
    pub fn add_screen(&mut self, screen: ScreenId) {
        if self.screens.iter().any(|s| s.id == screen) {
            return;
        }
        tracing::debug!(screen, "adding screen");
        self.screens.push(Screen::new(screen));
    }

    /// Remove a tiling target. Removing an unknown id is a no-op. Tiles are
    /// untouched; they simply stop being visible anywhere until another
    /// screen claims them.
    pub fn remove_screen(&mut self, screen: ScreenId) {
        self.screens.retain(|s| s.id != screen);
    }

    /// Swap the layout on a screen (or float it with `None`), then
    /// re-arrange. Unknown ids are no-ops.
    pub fn set_screen_layout(&mut self, screen: ScreenId, config: Option<LayoutConfig>) {
        let Some(entry) = self.screens.iter_mut().find(|s| s.id == screen) else {
            return;
        };
        entry.layout = config;
        self.arrange();
    }

    // ========================================================================
    // Arrangement
    // ========================================================================

    /// Recompute and commit geometry for every visible tile on every
    /// screen.
    ///
    /// Screens are independent; iteration order only affects the order of
    /// driver writes. A tile whose visibility check fails is flagged
    /// errored and skipped without aborting the pass. Geometry is always
    /// re-submitted to the driver, even when unchanged; drift suppression
    /// happens in [`Self::reconcile_window`].
    pub fn arrange(&mut self) {
        for i in 0..self.screens.len() {
            let screen = self.screens[i];
            let Some(config) = screen.layout else {
                continue;
            };

            let area = self.driver.working_area(screen.id);
            let visible = self.visible_tiles(screen.id);
            let windows: Vec<WindowId> =
                visible.iter().map(|&idx| self.tiles[idx].window).collect();

            let placements = layout::apply(config, &windows, area);
            tracing::trace!(
                screen = screen.id,
                tiles = placements.len(),
                "arranged screen"
            );

            for (&idx, &(window, geometry)) in visible.iter().zip(placements.iter()) {
                let tile = &mut self.tiles[idx];
                debug_assert_eq!(tile.window, window);
                tile.geometry = geometry;
                tile.is_new = false;
                if let Err(err) = self.driver.set_window_geometry(window, geometry) {
                    tracing::warn!(window, %err, "geometry commit failed");
                    tile.is_error = true;
                }
            }
        }
    }

    /// Restore the engine's geometry for a single window after an external
    /// geometry change was observed.
    ///
    /// The engine's layout is authoritative: if the driver reports a
    /// geometry differing in any field from the tile's computed one, the
    /// computed geometry is re-commanded. Matching geometry is left alone.
    pub fn reconcile_window(&mut self, window: WindowId) {
        for tile in self.tiles.iter_mut().filter(|t| t.window == window) {
            let current = match self.driver.window_geometry(window) {
                Ok(geometry) => geometry,
                Err(err) => {
                    tracing::warn!(window, %err, "geometry query failed");
                    tile.is_error = true;
                    continue;
                }
            };

            if current == tile.geometry {
                continue;
            }

            tracing::trace!(window, "restoring drifted geometry");
            if let Err(err) = self.driver.set_window_geometry(window, tile.geometry) {
                tracing::warn!(window, %err, "geometry restore failed");
                tile.is_error = true;
            }
        }
    }

    // ========================================================================
    // User Input
    // ========================================================================

    /// Interpret a directional command.
    pub fn handle_input(&mut self, input: UserInput) {
        match input {
            UserInput::FocusNext => self.move_focus(1),
            UserInput::FocusPrev => self.move_focus(-1),
            UserInput::MoveNext => self.move_tile(1),
            UserInput::MovePrev => self.move_tile(-1),
        }
    }

    /// Move focus by `step` tiles in the current order, clamped at both
    /// ends (no wrap-around). Never changes tile order or geometry; the
    /// only effect is the driver's active-window pointer. A no-op when
    /// `step` is zero or no tile matches the active window.
    pub fn move_focus(&mut self, step: i32) {
        if step == 0 {
            return;
        }
        let Some(index) = self.current_tile_index() else {
            return;
        };

        let last = self.tiles.len() as i64 - 1;
        let target = (index as i64 + i64::from(step)).clamp(0, last) as usize;
        self.driver.activate_window(self.tiles[target].window);
    }

    /// Move the focused tile by `step` positions via adjacent swaps,
    /// stopping early at either boundary, then re-arrange. Requesting a
    /// larger move than is available is legal. A no-op when `step` is zero
    /// or no tile matches the active window.
    pub fn move_tile(&mut self, step: i32) {
        if step == 0 {
            return;
        }
        let Some(mut index) = self.current_tile_index() else {
            return;
        };

        let mut remaining = step;
        while remaining > 0 && index + 1 < self.tiles.len() {
            self.tiles.swap(index, index + 1);
            index += 1;
            remaining -= 1;
        }
        while remaining < 0 && index > 0 {
            self.tiles.swap(index, index - 1);
            index -= 1;
            remaining += 1;
        }

        self.arrange();
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    /// Index of the tile matching the driver's active window, if any.
    fn current_tile_index(&self) -> Option<usize> {
        let active = self.driver.active_window()?;
        self.tiles.iter().position(|tile| tile.window == active)
    }

    /// Indices of tiles visible on a screen, in tile order.
    ///
    /// A failed visibility check flags the tile errored and treats it as
    /// not visible for this pass. Already errored tiles are excluded
    /// outright.
    fn visible_tiles(&mut self, screen: ScreenId) -> Vec<usize> {
        let mut visible = Vec::with_capacity(self.tiles.len());
        for (idx, tile) in self.tiles.iter_mut().enumerate() {
            if tile.is_error {
                continue;
            }
            match self.driver.is_visible(tile.window, screen) {
                Ok(true) => visible.push(idx),
                Ok(false) => {}
                Err(err) => {
                    tracing::warn!(window = tile.window, %err, "visibility check failed");
                    tile.is_error = true;
                }
            }
        }
        visible
    }
}

// ============================================================================
// Tests
// ============================================================================
