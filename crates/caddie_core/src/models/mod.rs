pub mod club;
pub mod course;
pub mod game_plan;
pub mod strategy;

pub use club::{closest_club, longest_club, shortest_club, ClubDistribution, ShotGroup, ShotSample};
pub use course::{ElevatedPoint, GeoPoint, HazardFeature, HazardKind, HoleGeometry, Target};
pub use game_plan::{GamePlan, HolePlan, KeyHole};
pub use strategy::{
    AimPoint, ApproachRecommendation, GripDown, LandingZone, NamedStrategyPlan, OptimizeMode,
    OptimizedStrategy, PlannedShot, ScoreDistribution, StrategyType,
};
