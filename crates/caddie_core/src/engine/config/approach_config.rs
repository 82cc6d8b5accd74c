//! Distance-only approach search parameters

use serde::{Deserialize, Serialize};

use crate::engine::constants::approach;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApproachConfig {
    /// Up to this distance, single-club plans only (default: 225)
    pub single_club_max_yards: f64,
    /// Up to this distance, two-club plans only (default: 425)
    pub two_club_max_yards: f64,
    pub single_club_tolerance: f64,
    pub two_club_tolerance: f64,
    /// Tolerance for both two- and three-club plans beyond `two_club_max_yards`
    pub long_hole_tolerance: f64,
    pub grip_down_yards_per_inch: f64,
    pub grip_down_max_inches: u8,
    pub max_recommendations: usize,
}

impl Default for ApproachConfig {
    fn default() -> Self {
        Self {
            single_club_max_yards: approach::SINGLE_CLUB_MAX_YARDS,
            two_club_max_yards: approach::TWO_CLUB_MAX_YARDS,
            single_club_tolerance: approach::SINGLE_CLUB_TOLERANCE,
            two_club_tolerance: approach::TWO_CLUB_TOLERANCE,
            long_hole_tolerance: approach::LONG_HOLE_TOLERANCE,
            grip_down_yards_per_inch: approach::GRIP_DOWN_YARDS_PER_INCH,
            grip_down_max_inches: approach::GRIP_DOWN_MAX_INCHES,
            max_recommendations: approach::MAX_RECOMMENDATIONS,
        }
    }
}
