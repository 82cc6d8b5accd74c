//! Strategy Generator
//!
//! Produces 2-3 named plans per hole, branching on par. Aim points are the
//! intended targets and never include the player's lateral bias; the GPS
//! simulator applies bias compensation at fire time.
//!
//! The tee-to-pin bearing is always recomputed from live positions. The
//! hole's stored `heading` is never read here.

use tracing::debug;

use super::config::StrategyConfig;
use crate::geo::{
    bearing_between, haversine_distance, offset_perpendicular, point_in_polygon, polygon_centroid,
    project_point,
};
use crate::models::{longest_club, ClubDistribution, GeoPoint, HoleGeometry, NamedStrategyPlan, StrategyType};

/// Shared geometry for one hole.
struct HoleFrame<'a> {
    hole: &'a HoleGeometry,
    clubs: Vec<&'a ClubDistribution>,
    longest: &'a ClubDistribution,
    config: &'a StrategyConfig,
    tee: GeoPoint,
    pin: GeoPoint,
    bearing: f64,
    total: f64,
}

impl<'a> HoleFrame<'a> {
    fn new(
        hole: &'a HoleGeometry,
        clubs: &'a [ClubDistribution],
        config: &'a StrategyConfig,
    ) -> Option<Self> {
        let longest = longest_club(clubs)?;
        let mut sorted: Vec<&ClubDistribution> = clubs.iter().collect();
        sorted.sort_by(|a, b| b.mean_carry.total_cmp(&a.mean_carry));

        let tee = hole.tee.point();
        let pin = hole.pin.point();
        Some(Self {
            hole,
            clubs: sorted,
            longest,
            config,
            tee,
            pin,
            bearing: bearing_between(tee, pin),
            total: haversine_distance(tee, pin),
        })
    }

    fn longest(&self) -> &'a ClubDistribution {
        self.longest
    }

    /// Club whose mean carry is nearest `distance`. Ties go to the longer club.
    fn closest(&self, distance: f64) -> &'a ClubDistribution {
        self.clubs
            .iter()
            .copied()
            .fold(self.clubs[0], |best, club| {
                if (club.mean_carry - distance).abs() < (best.mean_carry - distance).abs() {
                    club
                } else {
                    best
                }
            })
    }

    /// Point `yards` down the tee-to-pin line, never past the pin.
    fn along_line(&self, yards: f64) -> GeoPoint {
        project_point(self.tee, self.bearing, yards.min(self.total))
    }

    fn in_hazard(&self, point: GeoPoint) -> bool {
        self.hole.active_hazards().any(|h| point_in_polygon(point, &h.polygon))
    }

    /// Slide an aim point sideways out of any hazard it sits in.
    ///
    /// Tries each configured offset right then left; leaves the point
    /// unchanged if every candidate is also in a hazard.
    fn nudge_off_hazards(&self, from: GeoPoint, aim: GeoPoint) -> GeoPoint {
        if !self.in_hazard(aim) {
            return aim;
        }
        let shot_bearing = bearing_between(from, aim);
        for offset in &self.config.nudge_offsets_yards {
            for side in [1.0, -1.0] {
                let candidate = offset_perpendicular(aim, shot_bearing, side * offset);
                if !self.in_hazard(candidate) {
                    return candidate;
                }
            }
        }
        aim
    }

    /// Target carry toward `aim`, shifted by the club's mean lateral bias.
    fn expected_landing(&self, from: GeoPoint, aim: GeoPoint, club: &ClubDistribution) -> GeoPoint {
        let shot_bearing = bearing_between(from, aim);
        let carry = haversine_distance(from, aim);
        let target = project_point(from, shot_bearing, carry);
        offset_perpendicular(target, shot_bearing, club.mean_offline)
    }

    /// Finish a plan from `from`: one more club, aimed at the pin.
    fn push_approach(&self, plan: &mut NamedStrategyPlan, from: GeoPoint) {
        let remaining = haversine_distance(from, self.pin);
        plan.push(self.closest(remaining), self.pin);
    }

    /// Plan with one intermediate aim point followed by an approach.
    fn two_leg_plan(
        &self,
        name: &str,
        strategy_type: StrategyType,
        club: &ClubDistribution,
        raw_aim: GeoPoint,
    ) -> NamedStrategyPlan {
        let mut plan = NamedStrategyPlan::new(name, strategy_type);
        let aim = self.nudge_off_hazards(self.tee, raw_aim);
        plan.push(club, aim);
        let landing = self.expected_landing(self.tee, aim, club);
        self.push_approach(&mut plan, landing);
        plan
    }

    // ========================================================================
    // Par 3
    // ========================================================================

    fn par3(&self) -> Vec<NamedStrategyPlan> {
        let mut plans = Vec::with_capacity(3);

        let mut pin_hunting = NamedStrategyPlan::new("Pin Hunting", StrategyType::Scoring);
        pin_hunting.push(self.closest(self.total), self.pin);
        plans.push(pin_hunting);

        let center = polygon_centroid(&self.hole.green)
            .filter(|_| self.hole.green.len() >= 3)
            .or_else(|| polygon_centroid(&self.hole.fairway).filter(|_| self.hole.fairway.len() >= 3))
            .unwrap_or_else(|| self.along_line(self.total));
        let mut center_green = NamedStrategyPlan::new("Center Green", StrategyType::Balanced);
        center_green.push(self.closest(haversine_distance(self.tee, center)), center);
        plans.push(center_green);

        if let Some(hazard_center) = self.nearest_hazard_to_pin() {
            let away = bearing_between(hazard_center, self.pin);
            let aim = project_point(self.pin, away, self.config.bail_out_yards);
            let mut bail_out = NamedStrategyPlan::new("Bail Out", StrategyType::Safe);
            bail_out.push(self.closest(haversine_distance(self.tee, aim)), aim);
            plans.push(bail_out);
        }

        plans
    }

    fn nearest_hazard_to_pin(&self) -> Option<GeoPoint> {
        self.hole
            .active_hazards()
            .filter_map(|h| polygon_centroid(&h.polygon))
            .map(|c| (haversine_distance(c, self.pin), c))
            .min_by(|a, b| a.0.total_cmp(&b.0))
            .map(|(_, c)| c)
    }

    // ========================================================================
    // Par 4
    // ========================================================================

    fn par4(&self) -> Vec<NamedStrategyPlan> {
        let longest = self.longest();
        let base_aim = self
            .hole
            .targets
            .first()
            .map(|t| t.point)
            .unwrap_or_else(|| self.along_line(longest.mean_carry));

        let mut plans = Vec::with_capacity(3);

        let conservative_club = self.closest(haversine_distance(self.tee, base_aim));
        plans.push(self.two_leg_plan("Conservative", StrategyType::Safe, conservative_club, base_aim));

        let shift = self.config.aggressive_shift_yards;
        let aggressive_aim = if haversine_distance(base_aim, self.pin) <= shift {
            self.pin
        } else {
            project_point(base_aim, bearing_between(base_aim, self.pin), shift)
        };
        let aggressive_club = self.closest(haversine_distance(self.tee, aggressive_aim));
        plans.push(self.two_leg_plan("Aggressive", StrategyType::Scoring, aggressive_club, aggressive_aim));

        let layup_max = longest.mean_carry - self.config.layup_gap_yards;
        if let Some(layup_club) = self.clubs.iter().copied().find(|c| c.mean_carry <= layup_max) {
            let aim = self.along_line(layup_club.mean_carry);
            plans.push(self.two_leg_plan("Layup", StrategyType::Balanced, layup_club, aim));
        }

        plans
    }

    // ========================================================================
    // Par 5
    // ========================================================================

    fn par5(&self) -> Vec<NamedStrategyPlan> {
        let longest = self.longest();
        let mut plans = Vec::with_capacity(3);

        // Conservative 3-Shot: course waypoints, else equal thirds
        let (raw1, raw2) = match self.hole.targets.as_slice() {
            [first, second, ..] => (first.point, second.point),
            _ => (self.along_line(self.total / 3.0), self.along_line(2.0 * self.total / 3.0)),
        };
        let mut three_shot = NamedStrategyPlan::new("Conservative 3-Shot", StrategyType::Safe);
        let aim1 = self.nudge_off_hazards(self.tee, raw1);
        let club1 = self.closest(haversine_distance(self.tee, aim1));
        three_shot.push(club1, aim1);
        let landing1 = self.expected_landing(self.tee, aim1, club1);
        let aim2 = self.nudge_off_hazards(landing1, raw2);
        let club2 = self.closest(haversine_distance(landing1, aim2));
        three_shot.push(club2, aim2);
        let landing2 = self.expected_landing(landing1, aim2, club2);
        self.push_approach(&mut three_shot, landing2);
        plans.push(three_shot);

        // Go-For-It: longest club, then at the green
        let tee_aim = self.along_line(longest.mean_carry);
        plans.push(self.two_leg_plan("Go-For-It", StrategyType::Scoring, longest, tee_aim));

        // Safe Layup: longest club, mid-iron to 55% of what is left, approach
        let mut safe_layup = NamedStrategyPlan::new("Safe Layup", StrategyType::Balanced);
        let aim1 = self.nudge_off_hazards(self.tee, tee_aim);
        safe_layup.push(longest, aim1);
        let landing1 = self.expected_landing(self.tee, aim1, longest);
        let remaining = haversine_distance(landing1, self.pin);
        let layup_target = remaining * self.config.safe_layup_fraction;
        let mid = self.closest(layup_target);
        let raw2 = project_point(landing1, bearing_between(landing1, self.pin), layup_target);
        let aim2 = self.nudge_off_hazards(landing1, raw2);
        safe_layup.push(mid, aim2);
        let landing2 = self.expected_landing(landing1, aim2, mid);
        self.push_approach(&mut safe_layup, landing2);
        plans.push(safe_layup);

        plans
    }
}

/// Candidate plans for a hole. Empty when no clubs are available.
pub fn generate_strategies(
    hole: &HoleGeometry,
    clubs: &[ClubDistribution],
    config: &StrategyConfig,
) -> Vec<NamedStrategyPlan> {
    let Some(frame) = HoleFrame::new(hole, clubs, config) else {
        return Vec::new();
    };

    let plans = match hole.par {
        0..=3 => frame.par3(),
        4 => frame.par4(),
        _ => frame.par5(),
    };

    debug!(
        hole = hole.number,
        par = hole.par,
        yards = frame.total,
        plans = plans.len(),
        "strategies generated"
    );
    plans
}
