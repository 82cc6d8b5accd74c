//! Distance-Model Simulator (1-D)
//!
//! Recommends club sequences for a scalar remaining distance, with no course
//! geometry. Each trial tracks the true geometric remaining distance
//! `sqrt((remaining - carry)² + offline²)` after every swing.

use rand::Rng;
use tracing::debug;

use super::budget::TrialBudget;
use super::config::{ApproachConfig, EngineConfig, SimulationConfig};
use super::constants::simulation::FLAT_PUTTS;
use super::sampling::sample_shot;
use crate::models::{closest_club, shortest_club, ApproachRecommendation, ClubDistribution, GripDown};

/// Enumerate candidate club sequences for `distance`.
///
/// `clubs` must be sorted longest first; each candidate lists its clubs in
/// non-increasing carry order.
fn enumerate_candidates<'a>(
    distance: f64,
    clubs: &[&'a ClubDistribution],
    config: &ApproachConfig,
) -> Vec<Vec<&'a ClubDistribution>> {
    let mut out = Vec::new();
    let n = clubs.len();

    if distance <= config.single_club_max_yards {
        for club in clubs {
            if (club.mean_carry - distance).abs() <= config.single_club_tolerance {
                out.push(vec![*club]);
            }
        }
        return out;
    }

    let two_tolerance = if distance <= config.two_club_max_yards {
        config.two_club_tolerance
    } else {
        config.long_hole_tolerance
    };
    for i in 0..n {
        for j in i..n {
            let total = clubs[i].mean_carry + clubs[j].mean_carry;
            if (total - distance).abs() <= two_tolerance {
                out.push(vec![clubs[i], clubs[j]]);
            }
        }
    }

    if distance > config.two_club_max_yards {
        for i in 0..n {
            for j in i..n {
                let first_two = clubs[i].mean_carry + clubs[j].mean_carry;
                if first_two >= distance {
                    continue;
                }
                for k in j..n {
                    let total = first_two + clubs[k].mean_carry;
                    if (total - distance).abs() <= config.long_hole_tolerance {
                        out.push(vec![clubs[i], clubs[j], clubs[k]]);
                    }
                }
            }
        }
    }

    out
}

/// Remaining distance after one sampled swing.
#[inline]
fn advance<R: Rng + ?Sized>(remaining: f64, club: &ClubDistribution, rng: &mut R) -> f64 {
    let shot = sample_shot(rng, club);
    (remaining - shot.carry).hypot(shot.offline)
}

/// One trial: returns (total strokes, full swings fired).
fn simulate_trial<R: Rng + ?Sized>(
    plan: &[&ClubDistribution],
    distance: f64,
    clubs: &[ClubDistribution],
    chip_threshold: f64,
    sim: &SimulationConfig,
    rng: &mut R,
) -> (f64, usize) {
    let mut remaining = distance;
    let mut shots = 0usize;

    // Every planned club fires, even once inside the chip threshold
    for club in plan {
        if shots >= sim.max_shots_per_hole {
            break;
        }
        remaining = advance(remaining, club, rng);
        shots += 1;
    }

    // Greedy finish: nearest-carry club until inside the chip threshold
    while remaining > chip_threshold && shots < sim.max_shots_per_hole {
        let Some(club) = closest_club(clubs, remaining) else {
            break;
        };
        remaining = advance(remaining, club, rng);
        shots += 1;
    }

    let chip = if remaining > sim.chip_floor_yards && remaining <= chip_threshold { 1.0 } else { 0.0 };
    (shots as f64 + chip + FLAT_PUTTS, shots)
}

/// Grip-down advice for the club that finishes the plan, if it carries past its leg.
fn grip_down_for(plan: &[&ClubDistribution], distance: f64, config: &ApproachConfig) -> Option<GripDown> {
    let (last, before) = plan.split_last()?;
    let leg_target = distance - before.iter().map(|c| c.mean_carry).sum::<f64>();
    let overshoot = last.mean_carry - leg_target;
    let increment = config.grip_down_yards_per_inch;
    if overshoot < increment / 2.0 {
        return None;
    }

    let inches = ((overshoot / increment).round() as u8).clamp(1, config.grip_down_max_inches.max(1));
    Some(GripDown {
        club_name: last.club_name.clone(),
        inches,
        effective_carry: last.mean_carry - inches as f64 * increment,
    })
}

fn approach_label(plan: &[&ClubDistribution], grip: Option<&GripDown>) -> String {
    let names = plan.iter().map(|c| c.club_name.as_str()).collect::<Vec<_>>().join(" → ");
    match grip {
        Some(g) => format!("{} (grip down {}\", ~{:.0}y)", names, g.inches, g.effective_carry),
        None => names,
    }
}

/// Best club sequences for `distance` yards, lowest expected strokes first.
///
/// Empty when there are no clubs, no distance, or no candidate within tolerance.
pub fn find_best_approaches<R: Rng + ?Sized>(
    distance: f64,
    clubs: &[ClubDistribution],
    config: &EngineConfig,
    rng: &mut R,
) -> Vec<ApproachRecommendation> {
    if clubs.is_empty() || !(distance > 0.0) {
        return Vec::new();
    }

    let mut sorted: Vec<&ClubDistribution> = clubs.iter().collect();
    sorted.sort_by(|a, b| b.mean_carry.total_cmp(&a.mean_carry));

    let candidates = enumerate_candidates(distance, &sorted, &config.approach);
    if candidates.is_empty() {
        debug!(distance, "no approach candidate within tolerance");
        return Vec::new();
    }

    let shortest = shortest_club(clubs).map(|c| c.mean_carry).unwrap_or(0.0);
    let chip_threshold = config.simulation.chip_threshold(shortest);
    let mut budget = TrialBudget::from_config(&config.simulation);
    let trials = budget.trials_per_candidate(candidates.len());

    let mut results: Vec<ApproachRecommendation> = candidates
        .iter()
        .map(|plan| {
            let mut total = 0.0;
            for _ in 0..trials {
                let (strokes, shots) =
                    simulate_trial(plan, distance, clubs, chip_threshold, &config.simulation, rng);
                total += strokes;
                budget.record_trial(shots);
            }
            let grip_down = grip_down_for(plan, distance, &config.approach);
            ApproachRecommendation {
                clubs: plan.iter().map(|c| (*c).clone()).collect(),
                expected_strokes: total / trials as f64,
                label: approach_label(plan, grip_down.as_ref()),
                grip_down,
            }
        })
        .collect();

    let (trials_done, shots_done, elapsed_ms) = budget.get_progress();
    debug!(
        distance,
        candidates = candidates.len(),
        trials_per_candidate = trials,
        trials_done,
        shots_done,
        elapsed_ms,
        "approach search finished"
    );

    results.sort_by(|a, b| a.expected_strokes.total_cmp(&b.expected_strokes));
    results.truncate(config.approach.max_recommendations);
    results
}
