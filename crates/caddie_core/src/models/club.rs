//! Club shot history and the statistical profile built from it.

use serde::{Deserialize, Serialize};

/// One recorded (or estimated) shot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShotSample {
    /// Carry in yards
    pub carry: f64,
    /// Signed lateral miss in yards (+right / -left), when the source recorded it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offline: Option<f64>,
}

impl ShotSample {
    pub const fn new(carry: f64, offline: Option<f64>) -> Self {
        Self { carry, offline }
    }
}

/// Shot history for a single club, as supplied by the yardage aggregation.
///
/// A real group needs at least 3 shots to be usable. An imputed group holds a
/// single estimated carry and no dispersion data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShotGroup {
    pub club_id: String,
    pub club_name: String,
    #[serde(default)]
    pub shots: Vec<ShotSample>,
    #[serde(default)]
    pub imputed: bool,
}

impl ShotGroup {
    pub fn real(club_id: impl Into<String>, club_name: impl Into<String>, shots: Vec<ShotSample>) -> Self {
        Self { club_id: club_id.into(), club_name: club_name.into(), shots, imputed: false }
    }

    pub fn imputed(club_id: impl Into<String>, club_name: impl Into<String>, carry: f64) -> Self {
        Self {
            club_id: club_id.into(),
            club_name: club_name.into(),
            shots: vec![ShotSample::new(carry, None)],
            imputed: true,
        }
    }
}

/// Per-club carry and lateral-miss distribution (yards).
///
/// Standard deviations are always strictly positive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClubDistribution {
    pub club_id: String,
    pub club_name: String,
    pub mean_carry: f64,
    pub std_carry: f64,
    /// Signed lateral bias (+right / -left)
    pub mean_offline: f64,
    pub std_offline: f64,
    /// True when the profile was extrapolated rather than measured
    #[serde(default)]
    pub imputed: bool,
}

impl ClubDistribution {
    pub fn new(
        club_id: impl Into<String>,
        club_name: impl Into<String>,
        mean_carry: f64,
        std_carry: f64,
        mean_offline: f64,
        std_offline: f64,
    ) -> Self {
        Self {
            club_id: club_id.into(),
            club_name: club_name.into(),
            mean_carry,
            std_carry,
            mean_offline,
            std_offline,
            imputed: false,
        }
    }
}

/// Club whose mean carry is closest to `distance`. Ties go to the earlier club.
pub fn closest_club(clubs: &[ClubDistribution], distance: f64) -> Option<&ClubDistribution> {
    clubs.iter().fold(None, |best: Option<&ClubDistribution>, club| match best {
        Some(b) if (b.mean_carry - distance).abs() <= (club.mean_carry - distance).abs() => Some(b),
        _ => Some(club),
    })
}

/// Club with the longest mean carry.
pub fn longest_club(clubs: &[ClubDistribution]) -> Option<&ClubDistribution> {
    clubs.iter().max_by(|a, b| a.mean_carry.total_cmp(&b.mean_carry))
}

/// Club with the shortest mean carry.
pub fn shortest_club(clubs: &[ClubDistribution]) -> Option<&ClubDistribution> {
    clubs.iter().min_by(|a, b| a.mean_carry.total_cmp(&b.mean_carry))
}
