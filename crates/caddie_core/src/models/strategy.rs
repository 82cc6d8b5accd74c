//! Strategy plans (engine-internal) and ranked results (engine output).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::club::ClubDistribution;
use super::course::GeoPoint;

/// Qualitative flavour of a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyType {
    Scoring,
    Safe,
    Balanced,
}

impl fmt::Display for StrategyType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Scoring => f.write_str("scoring"),
            Self::Safe => f.write_str("safe"),
            Self::Balanced => f.write_str("balanced"),
        }
    }
}

/// Ranking objective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptimizeMode {
    /// Lowest expected strokes
    #[default]
    Scoring,
    /// Lowest blow-up risk
    Safe,
}

/// One leg of a plan: which club and where to aim.
///
/// `aim_point` is the intended target, independent of any lateral bias.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedShot {
    pub club: ClubDistribution,
    pub aim_point: GeoPoint,
}

/// Candidate multi-shot plan for a hole.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedStrategyPlan {
    pub name: String,
    pub strategy_type: StrategyType,
    pub shots: Vec<PlannedShot>,
}

impl NamedStrategyPlan {
    pub fn new(name: impl Into<String>, strategy_type: StrategyType) -> Self {
        Self { name: name.into(), strategy_type, shots: Vec::new() }
    }

    pub fn push(&mut self, club: &ClubDistribution, aim_point: GeoPoint) {
        self.shots.push(PlannedShot { club: club.clone(), aim_point });
    }

    /// "Driver → 7 Iron" style summary.
    pub fn label(&self) -> String {
        self.shots.iter().map(|s| s.club.club_name.as_str()).collect::<Vec<_>>().join(" → ")
    }
}

/// Probability mass over score relative to par.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScoreDistribution {
    pub eagle: f64,
    pub birdie: f64,
    pub par: f64,
    pub bogey: f64,
    pub double: f64,
    pub worse: f64,
}

impl ScoreDistribution {
    /// P(double bogey) + P(worse)
    #[inline]
    pub fn blowup_risk(&self) -> f64 {
        self.double + self.worse
    }

    pub fn total(&self) -> f64 {
        self.eagle + self.birdie + self.par + self.bogey + self.double + self.worse
    }
}

/// 1.5σ / 3σ landing ellipses around an aim point.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LandingZone {
    pub inner: Vec<GeoPoint>,
    pub outer: Vec<GeoPoint>,
}

/// Where to actually aim (bias-compensated) for one planned shot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AimPoint {
    pub point: GeoPoint,
    pub club_name: String,
    /// e.g. "+20y past bunker" or "-5y short of water"
    pub note: String,
    #[serde(default)]
    pub landing_zone: LandingZone,
}

/// A simulated, rankable strategy for one hole.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizedStrategy {
    pub clubs: Vec<ClubDistribution>,
    pub expected_strokes: f64,
    pub label: String,
    pub strategy_name: String,
    pub strategy_type: StrategyType,
    pub score_distribution: ScoreDistribution,
    pub blowup_risk: f64,
    pub aim_points: Vec<AimPoint>,
}

/// Grip-down guidance for a club that would overshoot its target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GripDown {
    pub club_name: String,
    pub inches: u8,
    pub effective_carry: f64,
}

/// Result of the distance-only simulator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApproachRecommendation {
    pub clubs: Vec<ClubDistribution>,
    pub expected_strokes: f64,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grip_down: Option<GripDown>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_label_joins_club_names() {
        let mut plan = NamedStrategyPlan::new("Conservative", StrategyType::Safe);
        let driver = ClubDistribution::new("dr", "Driver", 250.0, 10.0, 0.0, 8.0);
        let iron = ClubDistribution::new("7i", "7 Iron", 160.0, 6.0, 0.0, 5.0);
        plan.push(&driver, GeoPoint::new(0.0, 0.0));
        plan.push(&iron, GeoPoint::new(0.001, 0.0));
        assert_eq!(plan.label(), "Driver → 7 Iron");
    }

    #[test]
    fn test_blowup_risk_is_double_plus_worse() {
        let dist = ScoreDistribution {
            eagle: 0.0,
            birdie: 0.1,
            par: 0.4,
            bogey: 0.3,
            double: 0.15,
            worse: 0.05,
        };
        assert!((dist.blowup_risk() - 0.2).abs() < 1e-12);
        assert!((dist.total() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_mode_serde() {
        let mode: OptimizeMode = serde_json::from_str("\"safe\"").unwrap();
        assert_eq!(mode, OptimizeMode::Safe);
        assert_eq!(OptimizeMode::default(), OptimizeMode::Scoring);
    }
}
