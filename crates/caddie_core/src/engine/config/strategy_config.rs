//! Strategy generation and round aggregation parameters

use serde::{Deserialize, Serialize};

use crate::engine::constants::{round, strategy};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrategyConfig {
    pub bail_out_yards: f64,
    pub aggressive_shift_yards: f64,
    pub layup_gap_yards: f64,
    /// Tried in order, right side first, when an aim point sits in a hazard
    pub nudge_offsets_yards: Vec<f64>,
    pub safe_layup_fraction: f64,
    pub clearance_corridor_degrees: f64,
    pub clearance_window_yards: f64,
    /// Landing-zone ellipse multipliers (σ)
    pub inner_sigma: f64,
    pub outer_sigma: f64,
}

impl Default for StrategyConfig {
    fn default() -> Self {
        Self {
            bail_out_yards: strategy::BAIL_OUT_YARDS,
            aggressive_shift_yards: strategy::AGGRESSIVE_SHIFT_YARDS,
            layup_gap_yards: strategy::LAYUP_GAP_YARDS,
            nudge_offsets_yards: strategy::NUDGE_OFFSETS_YARDS.to_vec(),
            safe_layup_fraction: strategy::SAFE_LAYUP_FRACTION,
            clearance_corridor_degrees: strategy::CLEARANCE_CORRIDOR_DEGREES,
            clearance_window_yards: strategy::CLEARANCE_WINDOW_YARDS,
            inner_sigma: strategy::INNER_SIGMA,
            outer_sigma: strategy::OUTER_SIGMA,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoundConfig {
    /// Number of key holes surfaced in a game plan (default: 3)
    pub key_hole_count: usize,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self { key_hole_count: round::KEY_HOLE_COUNT }
    }
}
