//! Optimizer / Orchestrator
//!
//! One hole: generate plans, simulate each, rank by the chosen objective.
//! A round: repeat per hole, then surface the holes where the choice of
//! strategy moves the expected score the most.

use std::sync::atomic::{AtomicUsize, Ordering};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use tracing::{info, warn};

use super::budget::TrialBudget;
use super::config::EngineConfig;
use super::gps_sim::simulate_strategy;
use super::strategy_gen::generate_strategies;
use crate::models::{ClubDistribution, GamePlan, HoleGeometry, HolePlan, KeyHole, OptimizeMode, OptimizedStrategy};

/// Sequential progress callback: `(holes_completed, total_holes)`.
pub type ProgressFn<'a> = &'a mut dyn FnMut(usize, usize);

/// Progress callback usable from the rayon pool.
pub type SyncProgressFn<'a> = &'a (dyn Fn(usize, usize) + Sync);

fn rank(strategies: &mut [OptimizedStrategy], mode: OptimizeMode) {
    match mode {
        OptimizeMode::Scoring => {
            strategies.sort_by(|a, b| a.expected_strokes.total_cmp(&b.expected_strokes));
        }
        OptimizeMode::Safe => strategies.sort_by(|a, b| {
            a.blowup_risk
                .total_cmp(&b.blowup_risk)
                .then(a.expected_strokes.total_cmp(&b.expected_strokes))
        }),
    }
}

/// Ranked strategies for one hole, best first. Empty when no plan can be built.
pub fn optimize_hole<R: Rng + ?Sized>(
    hole: &HoleGeometry,
    clubs: &[ClubDistribution],
    mode: OptimizeMode,
    config: &EngineConfig,
    rng: &mut R,
) -> Vec<OptimizedStrategy> {
    let plans = generate_strategies(hole, clubs, &config.strategy);
    if plans.is_empty() {
        warn!(hole = hole.number, clubs = clubs.len(), "no strategies generated");
        return Vec::new();
    }
    let skipped = hole.hazards.iter().filter(|h| !h.is_active()).count();
    if skipped > 0 {
        warn!(hole = hole.number, skipped, "ignoring hazard polygons with fewer than 3 vertices");
    }

    let mut budget = TrialBudget::from_config(&config.simulation);
    let trials = budget.trials_per_candidate(plans.len());

    let mut strategies: Vec<OptimizedStrategy> = plans
        .iter()
        .map(|plan| simulate_strategy(plan, hole, clubs, trials, config, &mut budget, rng))
        .collect();
    rank(&mut strategies, mode);

    let (trials_done, shots_done, elapsed_ms) = budget.get_progress();
    info!(
        hole = hole.number,
        par = hole.par,
        strategies = strategies.len(),
        best = strategies.first().map(|s| s.expected_strokes),
        trials_done,
        shots_done,
        elapsed_ms,
        "hole optimized"
    );
    if budget.is_exceeded() {
        warn!(hole = hole.number, shots_done, "shot budget exceeded by trial floor");
    }

    strategies
}

fn hole_plan(hole: &HoleGeometry, strategies: Vec<OptimizedStrategy>) -> HolePlan {
    let (lo, hi) = strategies
        .iter()
        .map(|s| s.expected_strokes)
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), x| (lo.min(x), hi.max(x)));
    let stroke_spread = if strategies.is_empty() { 0.0 } else { hi - lo };
    HolePlan { hole_number: hole.number, par: hole.par, strategies, stroke_spread }
}

/// Holes with the widest best-to-worst spread, widest first.
fn key_holes(holes: &[HolePlan], count: usize) -> Vec<KeyHole> {
    let mut ranked: Vec<&HolePlan> = holes.iter().filter(|h| h.strategies.len() > 1).collect();
    ranked.sort_by(|a, b| b.stroke_spread.total_cmp(&a.stroke_spread).then(a.hole_number.cmp(&b.hole_number)));
    ranked
        .into_iter()
        .take(count)
        .filter_map(|h| {
            Some(KeyHole {
                hole_number: h.hole_number,
                stroke_spread: h.stroke_spread,
                recommended: h.best()?.strategy_name.clone(),
            })
        })
        .collect()
}

fn assemble(holes: Vec<HolePlan>, mode: OptimizeMode, config: &EngineConfig) -> GamePlan {
    let total_par = holes.iter().map(|h| h.par as u32).sum();
    let expected_total = holes.iter().filter_map(|h| h.best()).map(|s| s.expected_strokes).sum();
    let key_holes = key_holes(&holes, config.round.key_hole_count);
    info!(
        holes = holes.len(),
        total_par,
        expected_total,
        key_holes = key_holes.len(),
        "round optimized"
    );
    GamePlan { mode, holes, key_holes, total_par, expected_total }
}

/// Plan a whole round, one hole at a time on the caller's thread.
///
/// `progress` is called after each hole with `(completed, total)`.
pub fn optimize_round<R: Rng + ?Sized>(
    holes: &[HoleGeometry],
    clubs: &[ClubDistribution],
    mode: OptimizeMode,
    config: &EngineConfig,
    rng: &mut R,
    mut progress: Option<ProgressFn<'_>>,
) -> GamePlan {
    let total = holes.len();
    let mut plans = Vec::with_capacity(total);
    for (i, hole) in holes.iter().enumerate() {
        let strategies = optimize_hole(hole, clubs, mode, config, rng);
        plans.push(hole_plan(hole, strategies));
        if let Some(cb) = progress.as_mut() {
            cb(i + 1, total);
        }
    }
    assemble(plans, mode, config)
}

/// Independent RNG stream for hole `index` of a round seeded with `base_seed`.
pub fn hole_seed(base_seed: u64, index: usize) -> u64 {
    base_seed ^ (index as u64 + 1).wrapping_mul(0x9E37_79B9_7F4A_7C15)
}

/// Plan a whole round with holes spread over the rayon pool.
///
/// Each hole draws from its own `ChaCha8Rng`, so the result depends only on
/// `base_seed`, never on scheduling. `progress` sees an atomically increasing
/// completed count, not necessarily in hole order.
pub fn optimize_round_parallel(
    holes: &[HoleGeometry],
    clubs: &[ClubDistribution],
    mode: OptimizeMode,
    config: &EngineConfig,
    base_seed: u64,
    progress: Option<SyncProgressFn<'_>>,
) -> GamePlan {
    let total = holes.len();
    let completed = AtomicUsize::new(0);

    let plans: Vec<HolePlan> = holes
        .par_iter()
        .enumerate()
        .map(|(i, hole)| {
            let mut rng = ChaCha8Rng::seed_from_u64(hole_seed(base_seed, i));
            let strategies = optimize_hole(hole, clubs, mode, config, &mut rng);
            let done = completed.fetch_add(1, Ordering::SeqCst) + 1;
            if let Some(cb) = progress {
                cb(done, total);
            }
            hole_plan(hole, strategies)
        })
        .collect();

    assemble(plans, mode, config)
}
