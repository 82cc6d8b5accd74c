//! GPS-Aware Simulator (2-D)
//!
//! Walks a plan shot by shot over real hole geometry:
//! 1. Aim is shifted opposite the club's mean lateral bias (bias compensation)
//! 2. Sampled carry is projected along the compensated bearing, then the
//!    sampled offline is applied perpendicular to it
//! 3. Landing inside a hazard adds its penalty and drops back toward the
//!    previous lie
//! 4. Once the plan runs out, a greedy nearest-carry policy finishes the hole
//!
//! Trials end inside the chip threshold or at the shot cap, then the putting
//! model adds the finish.

use rand::Rng;
use tracing::debug;

use super::budget::TrialBudget;
use super::config::{EngineConfig, StrategyConfig};
use super::sampling::sample_shot;
use super::scoring::{expected_putts, ScoreTally};
use crate::geo::{
    bearing_between, bearing_difference, ellipse_boundary_default, haversine_distance,
    offset_perpendicular, point_in_polygon, polygon_centroid, project_point,
};
use crate::models::{
    closest_club, shortest_club, AimPoint, ClubDistribution, GeoPoint, HoleGeometry, LandingZone,
    NamedStrategyPlan, OptimizedStrategy,
};

/// Compensated aim point and the bearing to it.
///
/// A player who misses right by `mean_offline` aims left by the same amount.
pub fn compensated_aim(from: GeoPoint, aim: GeoPoint, club: &ClubDistribution) -> (GeoPoint, f64) {
    let raw_bearing = bearing_between(from, aim);
    let compensated = offset_perpendicular(aim, raw_bearing, -club.mean_offline);
    (compensated, bearing_between(from, compensated))
}

/// Sample one swing from `from` toward `aim`.
fn fire<R: Rng + ?Sized>(from: GeoPoint, aim: GeoPoint, club: &ClubDistribution, rng: &mut R) -> GeoPoint {
    let (_, bearing) = compensated_aim(from, aim, club);
    let shot = sample_shot(rng, club);
    let carried = project_point(from, bearing, shot.carry);
    offset_perpendicular(carried, bearing, shot.offline)
}

/// Penalty and drop for a landing inside a hazard; first matching hazard wins.
fn resolve_hazards(
    landing: GeoPoint,
    previous: GeoPoint,
    hole: &HoleGeometry,
    drop_back_yards: f64,
) -> (GeoPoint, f64) {
    match hole.active_hazards().find(|h| point_in_polygon(landing, &h.polygon)) {
        Some(hazard) => {
            let back = bearing_between(landing, previous);
            (project_point(landing, back, drop_back_yards), hazard.penalty)
        }
        None => (landing, 0.0),
    }
}

/// Outcome of one simulated play of a hole.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrialOutcome {
    pub strokes: f64,
    pub shots: usize,
    pub final_distance: f64,
}

/// Simulate one play of `plan`. `bag` feeds the greedy finish.
pub fn simulate_trial<R: Rng + ?Sized>(
    plan: &NamedStrategyPlan,
    hole: &HoleGeometry,
    bag: &[ClubDistribution],
    chip_threshold: f64,
    config: &EngineConfig,
    rng: &mut R,
) -> TrialOutcome {
    let sim = &config.simulation;
    let pin = hole.pin.point();
    let mut pos = hole.tee.point();
    let mut strokes = 0.0;
    let mut shots = 0usize;

    let swing = |pos: &mut GeoPoint, aim: GeoPoint, club: &ClubDistribution, rng: &mut R| -> f64 {
        let landing = fire(*pos, aim, club, rng);
        let (landing, penalty) = resolve_hazards(landing, *pos, hole, config.scoring.drop_back_yards);
        *pos = landing;
        1.0 + penalty
    };

    for shot in &plan.shots {
        if haversine_distance(pos, pin) <= chip_threshold || shots >= sim.max_shots_per_hole {
            break;
        }
        strokes += swing(&mut pos, shot.aim_point, &shot.club, &mut *rng);
        shots += 1;
    }

    loop {
        let remaining = haversine_distance(pos, pin);
        if remaining <= chip_threshold || shots >= sim.max_shots_per_hole {
            break;
        }
        let Some(club) = closest_club(bag, remaining) else {
            break;
        };
        strokes += swing(&mut pos, pin, club, &mut *rng);
        shots += 1;
    }

    let final_distance = haversine_distance(pos, pin);
    strokes += if final_distance > sim.chip_floor_yards && final_distance <= chip_threshold {
        1.0 + expected_putts(config.scoring.chip_proximity_yards, &config.scoring)
    } else {
        expected_putts(final_distance, &config.scoring)
    };

    TrialOutcome { strokes, shots, final_distance }
}

/// Nearest in-path hazard relative to where the shot lands.
///
/// Only hazards whose centroid sits within the angular corridor of the shot
/// and whose depth overlaps the carry window are considered.
pub fn clearance_note(
    origin: GeoPoint,
    bearing: f64,
    carry: f64,
    hole: &HoleGeometry,
    config: &StrategyConfig,
) -> String {
    let window = config.clearance_window_yards;
    let mut best: Option<(f64, String)> = None;

    for hazard in hole.active_hazards() {
        let Some(center) = polygon_centroid(&hazard.polygon) else {
            continue;
        };
        let off_axis = bearing_difference(bearing, bearing_between(origin, center)).abs();
        if off_axis > config.clearance_corridor_degrees {
            continue;
        }

        let (near, far) = hazard
            .polygon
            .iter()
            .map(|v| haversine_distance(origin, *v))
            .fold((f64::INFINITY, 0.0f64), |(lo, hi), d| (lo.min(d), hi.max(d)));
        if near > carry + window || far < carry - window {
            continue;
        }

        let note = if carry >= far {
            format!("+{:.0}y past {}", carry - far, hazard.kind)
        } else if carry <= near {
            format!("-{:.0}y short of {}", near - carry, hazard.kind)
        } else {
            format!("alongside {}", hazard.kind)
        };
        let score = (haversine_distance(origin, center) - carry).abs();
        if best.as_ref().map_or(true, |(s, _)| score < *s) {
            best = Some((score, note));
        }
    }

    best.map(|(_, note)| note).unwrap_or_else(|| "clear".to_string())
}

/// Compensated aim points with clearance notes and landing zones, one per planned shot.
pub fn describe_aim_points(plan: &NamedStrategyPlan, hole: &HoleGeometry, config: &StrategyConfig) -> Vec<AimPoint> {
    let mut origin = hole.tee.point();
    plan.shots
        .iter()
        .map(|shot| {
            let club = &shot.club;
            let (point, bearing) = compensated_aim(origin, shot.aim_point, club);
            let carry = haversine_distance(origin, point);
            let note = clearance_note(origin, bearing, carry, hole, config);
            let landing_zone = LandingZone {
                inner: ellipse_boundary_default(
                    shot.aim_point,
                    bearing,
                    config.inner_sigma * club.std_carry,
                    config.inner_sigma * club.std_offline,
                ),
                outer: ellipse_boundary_default(
                    shot.aim_point,
                    bearing,
                    config.outer_sigma * club.std_carry,
                    config.outer_sigma * club.std_offline,
                ),
            };
            origin = shot.aim_point;
            AimPoint { point, club_name: club.club_name.clone(), note, landing_zone }
        })
        .collect()
}

/// Run `trials` trials of `plan` and summarize, charging every trial to `budget`.
pub fn simulate_strategy<R: Rng + ?Sized>(
    plan: &NamedStrategyPlan,
    hole: &HoleGeometry,
    bag: &[ClubDistribution],
    trials: usize,
    config: &EngineConfig,
    budget: &mut TrialBudget,
    rng: &mut R,
) -> OptimizedStrategy {
    let shortest = shortest_club(bag)
        .or_else(|| plan.shots.iter().map(|s| &s.club).min_by(|a, b| a.mean_carry.total_cmp(&b.mean_carry)))
        .map(|c| c.mean_carry)
        .unwrap_or(0.0);
    let chip_threshold = config.simulation.chip_threshold(shortest);
    let trials = trials.max(1);

    let mut tally = ScoreTally::default();
    let mut total = 0.0;
    for _ in 0..trials {
        let outcome = simulate_trial(plan, hole, bag, chip_threshold, config, rng);
        total += outcome.strokes;
        budget.record_trial(outcome.shots);
        tally.record(outcome.strokes, hole.par);
    }

    let score_distribution = tally.distribution();
    let expected_strokes = total / f64::from(tally.trials());
    debug!(
        hole = hole.number,
        strategy = %plan.name,
        trials = tally.trials(),
        expected_strokes,
        blowup_risk = score_distribution.blowup_risk(),
        "strategy simulated"
    );

    OptimizedStrategy {
        clubs: plan.shots.iter().map(|s| s.club.clone()).collect(),
        expected_strokes,
        label: plan.label(),
        strategy_name: plan.name.clone(),
        strategy_type: plan.strategy_type,
        blowup_risk: score_distribution.blowup_risk(),
        score_distribution,
        aim_points: describe_aim_points(plan, hole, &config.strategy),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{HazardFeature, HazardKind, StrategyType};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    const TEE: GeoPoint = GeoPoint::new(36.5000, -121.9500);

    fn driver() -> ClubDistribution {
        ClubDistribution::new("dr", "Driver", 275.0, 12.0, 0.0, 8.0)
    }

    fn seven() -> ClubDistribution {
        ClubDistribution::new("7i", "7 Iron", 165.0, 6.0, 0.0, 5.0)
    }

    fn wedge() -> ClubDistribution {
        ClubDistribution::new("sw", "SW", 85.0, 3.0, 0.0, 3.0)
    }

    fn bag() -> Vec<ClubDistribution> {
        vec![driver(), seven(), wedge()]
    }

    fn hole(par: u8, yards: f64) -> HoleGeometry {
        HoleGeometry::new(1, par, TEE, project_point(TEE, 0.0, yards))
    }

    fn square(center: GeoPoint, half: f64) -> Vec<GeoPoint> {
        vec![
            project_point(project_point(center, 0.0, half), 90.0, half),
            project_point(project_point(center, 0.0, half), 270.0, half),
            project_point(project_point(center, 180.0, half), 270.0, half),
            project_point(project_point(center, 180.0, half), 90.0, half),
        ]
    }

    fn driver_then_iron(h: &HoleGeometry) -> NamedStrategyPlan {
        let mut plan = NamedStrategyPlan::new("Conservative", StrategyType::Safe);
        plan.push(&driver(), project_point(TEE, 0.0, 275.0));
        plan.push(&seven(), h.pin.point());
        plan
    }

    #[test]
    fn test_compensation_aims_opposite_bias() {
        let mut club = driver();
        club.mean_offline = 10.0; // misses right
        let aim = project_point(TEE, 0.0, 275.0);
        let (comp, bearing) = compensated_aim(TEE, aim, &club);
        assert!(comp.lng < aim.lng, "should aim left");
        assert!((haversine_distance(comp, aim) - 10.0).abs() <= 1.0);
        assert!(bearing > 350.0);
    }

    #[test]
    fn test_compensated_expected_landing_converges_on_target() {
        let mut club = driver();
        club.mean_offline = 15.0;
        club.std_carry = 1.0;
        club.std_offline = 1.0;
        let aim = project_point(TEE, 0.0, 275.0);
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let n = 400;
        let (mut lat, mut lng) = (0.0, 0.0);
        for _ in 0..n {
            let p = fire(TEE, aim, &club, &mut rng);
            lat += p.lat;
            lng += p.lng;
        }
        let mean = GeoPoint::new(lat / n as f64, lng / n as f64);
        assert!(haversine_distance(mean, aim) <= 2.0);
    }

    #[test]
    fn test_hazard_penalty_and_drop() {
        let landing = project_point(TEE, 0.0, 200.0);
        let h = hole(4, 400.0)
            .with_hazard(HazardFeature::new(HazardKind::Water, square(landing, 10.0)));
        let (dropped, penalty) = resolve_hazards(landing, TEE, &h, 5.0);
        assert_eq!(penalty, 1.0);
        assert!((haversine_distance(TEE, dropped) - 195.0).abs() <= 1.0);

        let dry = project_point(TEE, 0.0, 250.0);
        let (same, none) = resolve_hazards(dry, TEE, &h, 5.0);
        assert_eq!(same, dry);
        assert_eq!(none, 0.0);
    }

    #[test]
    fn test_degenerate_hazard_is_inert() {
        let landing = project_point(TEE, 0.0, 200.0);
        let mut poly = square(landing, 10.0);
        poly.truncate(2);
        let h = hole(4, 400.0).with_hazard(HazardFeature::new(HazardKind::Water, poly));
        let (_, penalty) = resolve_hazards(landing, TEE, &h, 5.0);
        assert_eq!(penalty, 0.0);
    }

    #[test]
    fn test_strategy_summary_shape() {
        let cfg = EngineConfig::quick();
        let h = hole(4, 400.0);
        let plan = driver_then_iron(&h);
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let mut budget = TrialBudget::from_config(&cfg.simulation);
        let result = simulate_strategy(&plan, &h, &bag(), 500, &cfg, &mut budget, &mut rng);
        assert_eq!(budget.get_progress().0, 500);

        assert_eq!(result.aim_points.len(), result.clubs.len());
        assert_eq!(result.label, "Driver → 7 Iron");
        assert!((result.score_distribution.total() - 1.0).abs() < 1e-6);
        assert!((result.blowup_risk - (result.score_distribution.double + result.score_distribution.worse)).abs() < 1e-12);
        assert!(result.expected_strokes > 3.5 && result.expected_strokes < 5.5, "{}", result.expected_strokes);
    }

    #[test]
    fn test_hazard_in_landing_zone_costs_strokes() {
        let cfg = EngineConfig::quick();
        let clean = hole(4, 400.0);
        let landing = project_point(TEE, 0.0, 275.0);
        let wet = hole(4, 400.0)
            .with_hazard(HazardFeature::new(HazardKind::Water, square(landing, 25.0)));
        let plan = driver_then_iron(&clean);

        let mut budget = TrialBudget::from_config(&cfg.simulation);
        let dry_result =
            simulate_strategy(&plan, &clean, &bag(), 500, &cfg, &mut budget, &mut ChaCha8Rng::seed_from_u64(5));
        let wet_result =
            simulate_strategy(&plan, &wet, &bag(), 500, &cfg, &mut budget, &mut ChaCha8Rng::seed_from_u64(5));
        assert!(
            wet_result.expected_strokes > dry_result.expected_strokes,
            "wet {} vs dry {}",
            wet_result.expected_strokes,
            dry_result.expected_strokes
        );
    }

    #[test]
    fn test_trial_respects_shot_cap() {
        let cfg = EngineConfig::default();
        // Wedge-only bag on a 1000-yard hole never reaches the green
        let h = hole(5, 1000.0);
        let bag = vec![wedge()];
        let plan = NamedStrategyPlan::new("Empty", StrategyType::Safe);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let outcome = simulate_trial(&plan, &h, &bag, 42.5, &cfg, &mut rng);
        assert_eq!(outcome.shots, 8);
        assert!(outcome.final_distance > 42.5);
        assert_eq!(outcome.strokes, 8.0 + 3.0);
    }

    #[test]
    fn test_trial_chip_band_and_short_putt() {
        let cfg = EngineConfig::default();
        let tight = ClubDistribution::new("sw", "SW", 85.0, 0.5, 0.0, 0.5);
        let bag = vec![tight.clone()];
        let mut rng = ChaCha8Rng::seed_from_u64(9);

        let chip_hole = hole(3, 115.0);
        let mut plan = NamedStrategyPlan::new("Center Green", StrategyType::Scoring);
        plan.push(&tight, chip_hole.pin.point());
        for _ in 0..50 {
            // ~30y left: one swing, a chip to 3y, then putts from there
            let outcome = simulate_trial(&plan, &chip_hole, &bag, 42.5, &cfg, &mut rng);
            assert_eq!(outcome.shots, 1);
            assert!(outcome.final_distance > 10.0 && outcome.final_distance <= 42.5);
            let expected = 2.0 + expected_putts(3.0, &cfg.scoring);
            assert!((outcome.strokes - expected).abs() < 1e-9, "{}", outcome.strokes);
        }

        let putt_hole = hole(3, 90.0);
        let mut plan = NamedStrategyPlan::new("Center Green", StrategyType::Scoring);
        plan.push(&tight, putt_hole.pin.point());
        for _ in 0..50 {
            // ~5y left: no chip
            let outcome = simulate_trial(&plan, &putt_hole, &bag, 42.5, &cfg, &mut rng);
            assert_eq!(outcome.shots, 1);
            assert!(outcome.final_distance <= 10.0);
            let expected = 1.0 + expected_putts(outcome.final_distance, &cfg.scoring);
            assert!((outcome.strokes - expected).abs() < 1e-9, "{}", outcome.strokes);
        }
    }

    #[test]
    fn test_strategy_average_uses_every_trial() {
        let cfg = EngineConfig::default();
        let tight = ClubDistribution::new("sw", "SW", 85.0, 0.5, 0.0, 0.5);
        let h = hole(3, 115.0);
        let mut plan = NamedStrategyPlan::new("Center Green", StrategyType::Scoring);
        plan.push(&tight, h.pin.point());
        let mut budget = TrialBudget::from_config(&cfg.simulation);
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let result = simulate_strategy(&plan, &h, &[tight], 40, &cfg, &mut budget, &mut rng);
        assert_eq!(budget.get_progress().0, 40);
        let expected = 2.0 + expected_putts(3.0, &cfg.scoring);
        assert!((result.expected_strokes - expected).abs() < 1e-9);
    }

    #[test]
    fn test_clearance_notes() {
        let cfg = StrategyConfig::default();
        let bunker_center = project_point(TEE, 0.0, 250.0);
        let h = hole(4, 400.0)
            .with_hazard(HazardFeature::new(HazardKind::Bunker, square(bunker_center, 5.0)));

        // Carry 275: bunker far edge at ~255 → +20y past
        assert_eq!(clearance_note(TEE, 0.0, 275.0, &h, &cfg), "+20y past bunker");
        // Carry 240: bunker near edge at ~245 → -5y short
        assert_eq!(clearance_note(TEE, 0.0, 240.0, &h, &cfg), "-5y short of bunker");
        // Shot heading due east never sees it
        assert_eq!(clearance_note(TEE, 90.0, 275.0, &h, &cfg), "clear");
        // Far beyond the window
        assert_eq!(clearance_note(TEE, 0.0, 120.0, &h, &cfg), "clear");
    }

    #[test]
    fn test_aim_points_are_compensated() {
        let cfg = StrategyConfig::default();
        let h = hole(4, 400.0);
        let mut plan = NamedStrategyPlan::new("Conservative", StrategyType::Safe);
        let mut slicer = driver();
        slicer.mean_offline = 12.0;
        let target = project_point(TEE, 0.0, 275.0);
        plan.push(&slicer, target);
        plan.push(&seven(), h.pin.point());

        let aims = describe_aim_points(&plan, &h, &cfg);
        assert_eq!(aims.len(), 2);
        assert!(aims[0].point.lng < target.lng);
        assert_eq!(aims[0].club_name, "Driver");
        // Inner zone is half the size of the outer
        let max_from = |ring: &[GeoPoint]| ring.iter().map(|p| haversine_distance(target, *p)).fold(0.0, f64::max);
        let ratio = max_from(&aims[0].landing_zone.outer) / max_from(&aims[0].landing_zone.inner);
        assert!((ratio - 2.0).abs() < 0.1);
    }
}
