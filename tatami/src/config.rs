//! Typed layout configuration.
//!
//! Each layout variant carries its own options record. Options are resolved
//! to concrete values when a screen is created, so layout functions stay
//! pure and never consult or mutate a shared option bag.

use serde::{Deserialize, Serialize};

// ============================================================================
// Master-Stack Options
// ============================================================================

/// Options for the master-stack layout.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MasterStackOptions {
    /// Fraction of the area width given to the stack column once both
    /// columns exist (0.0-1.0). The master column gets the remainder.
    pub ratio: f64,

    /// Number of tiles placed in the master column before overflow goes to
    /// the stack.
    pub master_count: usize,
}

impl Default for MasterStackOptions {
    fn default() -> Self { Self { ratio: 0.45, master_count: 1 } }
}

// ============================================================================
// Layout Config
// ============================================================================

/// Layout selection for one screen, with the options for that variant.
///
/// New layouts are added here and dispatched in [`crate::layout::apply`];
/// the engine itself never needs to change.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "layout", rename_all = "kebab-case")]
pub enum LayoutConfig {
    /// A master column holding up to `master_count` tiles, with overflow in
    /// a stack column to its right.
    MasterStack(MasterStackOptions),
}

impl Default for LayoutConfig {
    fn default() -> Self { Self::MasterStack(MasterStackOptions::default()) }
}

// ============================================================================
// Tests
// ============================================================================
