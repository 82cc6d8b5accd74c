//! Monte Carlo and scoring parameters

use serde::{Deserialize, Serialize};

use crate::engine::constants::{scoring, simulation};

/// Trial counts and shot caps shared by both simulators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Trials per candidate before budget scaling (default: 2000)
    pub trials: usize,
    /// Floor after budget scaling (default: 500)
    pub min_trials: usize,
    /// Total simulated shots one search may spend (default: 400,000)
    pub shot_budget: usize,
    /// Full swings per hole, planned + greedy (default: 8)
    pub max_shots_per_hole: usize,
    /// Inside this, no chip is needed (yards)
    pub chip_floor_yards: f64,
    /// Chip threshold share of the shortest club's carry
    pub chip_fraction_of_shortest: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            trials: simulation::DEFAULT_TRIALS,
            min_trials: simulation::MIN_TRIALS,
            shot_budget: simulation::SHOT_BUDGET,
            max_shots_per_hole: simulation::MAX_SHOTS_PER_HOLE,
            chip_floor_yards: simulation::CHIP_FLOOR_YARDS,
            chip_fraction_of_shortest: simulation::CHIP_FRACTION_OF_SHORTEST,
        }
    }
}

impl SimulationConfig {
    /// max(floor, fraction × shortest club carry)
    pub fn chip_threshold(&self, shortest_carry: f64) -> f64 {
        self.chip_floor_yards.max(self.chip_fraction_of_shortest * shortest_carry)
    }
}

/// Putting and penalty model for the GPS simulator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub putt_base: f64,
    pub putt_log_coefficient: f64,
    pub putt_min: f64,
    pub putt_max: f64,
    /// Distance left after a chip (yards)
    pub chip_proximity_yards: f64,
    /// Drop-back distance after a hazard (yards)
    pub drop_back_yards: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            putt_base: scoring::PUTT_BASE,
            putt_log_coefficient: scoring::PUTT_LOG_COEFF,
            putt_min: scoring::PUTT_MIN,
            putt_max: scoring::PUTT_MAX,
            chip_proximity_yards: scoring::CHIP_PROXIMITY_YARDS,
            drop_back_yards: scoring::HAZARD_DROP_BACK_YARDS,
        }
    }
}
