//! # caddie_core - Monte Carlo Golf Shot Strategy Engine
//!
//! Builds per-club carry/dispersion distributions from shot history,
//! simulates multi-shot plans over real hole geometry, and ranks them by
//! expected strokes or blow-up risk.
//!
//! ## Features
//! - Deterministic with a seeded RNG (same seed = same result)
//! - 1-D club-sequence search for a bare distance
//! - 2-D geodetic simulation with hazards and bias compensation
//! - JSON API for UI hosts

// `!(x > 0.0)` deliberately rejects NaN
#![allow(clippy::neg_cmp_op_on_partial_ord)]
// Simulation entry points thread plan, geometry, config, budget and RNG
#![allow(clippy::too_many_arguments)]
// Configs are built from defaults and then tweaked
#![allow(clippy::field_reassign_with_default)]

pub mod api;
pub mod engine;
pub mod error;
pub mod geo;
pub mod models;

pub use api::{find_best_approaches_json, optimize_hole_json, optimize_round_json, SCHEMA_VERSION};
pub use engine::{
    build_distributions, find_best_approaches, generate_strategies, optimize_hole, optimize_round,
    optimize_round_parallel, simulate_strategy, EngineConfig,
};
pub use error::{CaddieError, Result};
pub use models::{
    ApproachRecommendation, ClubDistribution, GamePlan, GeoPoint, HazardFeature, HazardKind, HoleGeometry,
    OptimizeMode, OptimizedStrategy, ShotGroup, ShotSample,
};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
        assert_eq!(SCHEMA_VERSION, 1);
    }

    #[test]
    fn test_determinism() {
        let request = json!({
            "schema_version": 1,
            "seed": 999,
            "distance_yards": 310.0,
            "shot_groups": [
                {"club_id": "dr", "club_name": "Driver", "shots": [
                    {"carry": 240.0}, {"carry": 250.0}, {"carry": 255.0}
                ]},
                {"club_id": "9i", "club_name": "9 Iron", "shots": [
                    {"carry": 128.0}, {"carry": 132.0}, {"carry": 135.0}
                ]},
                {"club_id": "sw", "club_name": "SW", "shots": [
                    {"carry": 78.0}, {"carry": 80.0}, {"carry": 83.0}
                ]}
            ],
            "config": EngineConfig::quick()
        });

        let request_str = request.to_string();
        let result1 = find_best_approaches_json(&request_str).unwrap();
        let result2 = find_best_approaches_json(&request_str).unwrap();
        assert_eq!(result1, result2, "Same seed should produce same result");

        let parsed: serde_json::Value = serde_json::from_str(&result1).unwrap();
        assert_eq!(parsed["schema_version"], 1);
        assert!(parsed["recommendations"].as_array().is_some_and(|r| !r.is_empty()));
    }
}
