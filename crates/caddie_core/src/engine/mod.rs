//! Simulation engine
//!
//! - `distributions`: shot history → per-club distributions
//! - `distance_sim`: 1-D club-sequence search for a scalar distance
//! - `strategy_gen`: named plans over real hole geometry
//! - `gps_sim`: 2-D Monte Carlo with hazards and bias compensation
//! - `optimizer`: per-hole ranking and round planning
//!
//! Every sampling function takes `&mut R: Rng`, so a seeded `ChaCha8Rng`
//! makes any result reproducible.

pub mod budget;
pub mod config;
pub mod constants;
pub mod distance_sim;
pub mod distributions;
pub mod gps_sim;
pub mod optimizer;
pub mod sampling;
pub mod scoring;
pub mod strategy_gen;

pub use budget::TrialBudget;
pub use config::{ApproachConfig, EngineConfig, RoundConfig, ScoringConfig, SimulationConfig, StrategyConfig};
pub use distance_sim::find_best_approaches;
pub use distributions::{build_distributions, linear_regression, LinearFit};
pub use gps_sim::simulate_strategy;
pub use optimizer::{optimize_hole, optimize_round, optimize_round_parallel};
pub use scoring::expected_putts;
pub use strategy_gen::generate_strategies;
