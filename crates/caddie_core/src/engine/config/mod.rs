//! # Engine Configuration Module
//!
//! Every tunable of the shot model in one place, with presets.
//!
//! ## Usage
//! ```rust
//! use caddie_core::engine::config::EngineConfig;
//!
//! let config = EngineConfig::default();
//! let preview = EngineConfig::quick();
//! assert!(preview.simulation.trials < config.simulation.trials);
//! ```

mod approach_config;
mod simulation_config;
mod strategy_config;

pub use approach_config::ApproachConfig;
pub use simulation_config::{ScoringConfig, SimulationConfig};
pub use strategy_config::{RoundConfig, StrategyConfig};

use serde::{Deserialize, Serialize};

use crate::error::{CaddieError, Result};

/// Full engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct EngineConfig {
    #[serde(default)]
    pub simulation: SimulationConfig,
    #[serde(default)]
    pub scoring: ScoringConfig,
    #[serde(default)]
    pub approach: ApproachConfig,
    #[serde(default)]
    pub strategy: StrategyConfig,
    #[serde(default)]
    pub round: RoundConfig,
}

impl EngineConfig {
    /// Production defaults
    pub fn standard() -> Self {
        Self::default()
    }

    /// Fewer trials for interactive previews
    pub fn quick() -> Self {
        let mut cfg = Self::default();
        cfg.simulation.trials = 500;
        cfg.simulation.min_trials = 200;
        cfg.simulation.shot_budget = 100_000;
        cfg
    }

    /// More trials and a larger budget for offline game plans
    pub fn thorough() -> Self {
        let mut cfg = Self::default();
        cfg.simulation.trials = 8000;
        cfg.simulation.min_trials = 1000;
        cfg.simulation.shot_budget = 1_600_000;
        cfg
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject configurations the simulators cannot run with.
    pub fn validate(&self) -> Result<()> {
        let sim = &self.simulation;
        if sim.trials == 0 {
            return Err(invalid("simulation.trials must be > 0"));
        }
        if sim.min_trials == 0 || sim.min_trials > sim.trials {
            return Err(invalid(format!(
                "simulation.min_trials must be in 1..={}, got {}",
                sim.trials, sim.min_trials
            )));
        }
        if sim.shot_budget == 0 {
            return Err(invalid("simulation.shot_budget must be > 0"));
        }
        if sim.max_shots_per_hole == 0 {
            return Err(invalid("simulation.max_shots_per_hole must be > 0"));
        }
        if !(sim.chip_floor_yards >= 0.0) {
            return Err(invalid("simulation.chip_floor_yards must be >= 0"));
        }
        if !(sim.chip_fraction_of_shortest >= 0.0 && sim.chip_fraction_of_shortest <= 1.0) {
            return Err(invalid("simulation.chip_fraction_of_shortest must be in [0, 1]"));
        }

        let scoring = &self.scoring;
        if !(scoring.putt_min > 0.0 && scoring.putt_min <= scoring.putt_max) {
            return Err(invalid(format!(
                "scoring putt clamp must satisfy 0 < min <= max, got [{}, {}]",
                scoring.putt_min, scoring.putt_max
            )));
        }
        if !(scoring.chip_proximity_yards > 0.0) {
            return Err(invalid("scoring.chip_proximity_yards must be > 0"));
        }
        if !(scoring.drop_back_yards >= 0.0) {
            return Err(invalid("scoring.drop_back_yards must be >= 0"));
        }

        let approach = &self.approach;
        if !(approach.single_club_max_yards > 0.0
            && approach.single_club_max_yards < approach.two_club_max_yards)
        {
            return Err(invalid("approach band limits must satisfy 0 < single < two"));
        }
        if !(approach.grip_down_yards_per_inch > 0.0) {
            return Err(invalid("approach.grip_down_yards_per_inch must be > 0"));
        }
        if approach.max_recommendations == 0 {
            return Err(invalid("approach.max_recommendations must be > 0"));
        }

        let strategy = &self.strategy;
        if strategy.nudge_offsets_yards.is_empty() {
            return Err(invalid("strategy.nudge_offsets_yards must not be empty"));
        }
        if !(strategy.safe_layup_fraction > 0.0 && strategy.safe_layup_fraction <= 1.0) {
            return Err(invalid("strategy.safe_layup_fraction must be in (0, 1]"));
        }
        if !(strategy.inner_sigma > 0.0 && strategy.outer_sigma >= strategy.inner_sigma) {
            return Err(invalid("strategy sigmas must satisfy 0 < inner <= outer"));
        }
        if !(strategy.clearance_corridor_degrees > 0.0 && strategy.clearance_corridor_degrees <= 180.0) {
            return Err(invalid("strategy.clearance_corridor_degrees must be in (0, 180]"));
        }

        Ok(())
    }
}

fn invalid(msg: impl Into<String>) -> CaddieError {
    CaddieError::InvalidConfig(msg.into())
}

// ========== Tests ==========
