//! Distribution Builder
//!
//! Turns grouped shot history into per-club `ClubDistribution`s.
//!
//! - Real groups (3+ shots): sample mean/std of carry and offline.
//! - Imputed groups (one estimated carry): dispersion extrapolated by linear
//!   regression across the real clubs, or a fixed coefficient of variation
//!   when fewer than 2 real clubs exist.
//!
//! Output is sorted longest club first.

use tracing::{debug, warn};

use super::constants::dispersion::*;
use crate::models::{ClubDistribution, ShotGroup};

/// Ordinary least-squares line `y = slope·x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearFit {
    #[inline]
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Fit a line through `points`.
///
/// One point predicts that point's y everywhere; a near-zero denominator
/// (all x equal) falls back to mean(y). `None` only for empty input.
pub fn linear_regression(points: &[(f64, f64)]) -> Option<LinearFit> {
    let n = points.len();
    if n == 0 {
        return None;
    }
    let mean_y = points.iter().map(|p| p.1).sum::<f64>() / n as f64;
    if n == 1 {
        return Some(LinearFit { slope: 0.0, intercept: points[0].1 });
    }

    let nf = n as f64;
    let sum_x: f64 = points.iter().map(|p| p.0).sum();
    let sum_y: f64 = points.iter().map(|p| p.1).sum();
    let sum_xy: f64 = points.iter().map(|p| p.0 * p.1).sum();
    let sum_xx: f64 = points.iter().map(|p| p.0 * p.0).sum();

    let denom = nf * sum_xx - sum_x * sum_x;
    if denom.abs() < REGRESSION_EPSILON {
        return Some(LinearFit { slope: 0.0, intercept: mean_y });
    }

    let slope = (nf * sum_xy - sum_x * sum_y) / denom;
    let intercept = (sum_y - slope * sum_x) / nf;
    Some(LinearFit { slope, intercept })
}

/// Sample mean and (n-1) standard deviation. `None` for fewer than 2 values.
fn mean_std(values: &[f64]) -> Option<(f64, f64)> {
    if values.len() < 2 {
        return None;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let var = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0);
    Some((mean, var.sqrt()))
}

fn build_real(group: &ShotGroup) -> Option<ClubDistribution> {
    if group.shots.len() < MIN_REAL_SHOTS {
        return None;
    }
    let carries: Vec<f64> = group.shots.iter().map(|s| s.carry).collect();
    let (mean_carry, std_carry) = mean_std(&carries)?;

    let offlines: Vec<f64> = group.shots.iter().filter_map(|s| s.offline).collect();
    let (mean_offline, std_offline) = if offlines.len() >= MIN_OFFLINE_SAMPLES {
        mean_std(&offlines).unwrap_or((0.0, FALLBACK_STD_OFFLINE))
    } else {
        (0.0, FALLBACK_STD_OFFLINE)
    };

    Some(ClubDistribution {
        club_id: group.club_id.clone(),
        club_name: group.club_name.clone(),
        mean_carry,
        std_carry: std_carry.max(MEASURED_STD_FLOOR),
        mean_offline,
        std_offline: std_offline.max(MEASURED_STD_FLOOR),
        imputed: false,
    })
}

/// Regression lines fitted across the real clubs.
struct DispersionTrend {
    std_carry: LinearFit,
    std_offline: LinearFit,
    mean_offline: LinearFit,
}

impl DispersionTrend {
    fn fit(real: &[ClubDistribution]) -> Option<Self> {
        if real.len() < 2 {
            return None;
        }
        let line = |f: fn(&ClubDistribution) -> f64| {
            let pts: Vec<(f64, f64)> = real.iter().map(|c| (c.mean_carry, f(c))).collect();
            linear_regression(&pts)
        };
        Some(Self {
            std_carry: line(|c| c.std_carry)?,
            std_offline: line(|c| c.std_offline)?,
            mean_offline: line(|c| c.mean_offline)?,
        })
    }
}

fn build_imputed(group: &ShotGroup, trend: Option<&DispersionTrend>) -> Option<ClubDistribution> {
    let carry = group.shots.first()?.carry;
    if !(carry > 0.0) {
        return None;
    }

    let (std_carry, mean_offline, std_offline) = match trend {
        Some(t) => (
            t.std_carry.predict(carry),
            t.mean_offline.predict(carry),
            t.std_offline.predict(carry),
        ),
        None => (FALLBACK_CARRY_CV * carry, 0.0, FALLBACK_OFFLINE_CV * carry),
    };

    Some(ClubDistribution {
        club_id: group.club_id.clone(),
        club_name: group.club_name.clone(),
        mean_carry: carry,
        std_carry: std_carry.max(IMPUTED_STD_FLOOR),
        mean_offline,
        std_offline: std_offline.max(IMPUTED_STD_FLOOR),
        imputed: true,
    })
}

/// Build club distributions from the caller's current shot history.
///
/// Real groups with fewer than 3 shots and imputed groups with no shots or
/// zero carry are left out.
pub fn build_distributions(groups: &[ShotGroup]) -> Vec<ClubDistribution> {
    let mut real: Vec<ClubDistribution> = Vec::new();
    for group in groups.iter().filter(|g| !g.imputed) {
        match build_real(group) {
            Some(dist) => real.push(dist),
            None => debug!(
                club = %group.club_name,
                shots = group.shots.len(),
                "skipping club with too few shots"
            ),
        }
    }

    let trend = DispersionTrend::fit(&real);
    let mut out = real;
    for group in groups.iter().filter(|g| g.imputed) {
        match build_imputed(group, trend.as_ref()) {
            Some(dist) => out.push(dist),
            None => warn!(club = %group.club_name, "skipping imputed club without a usable carry"),
        }
    }

    out.sort_by(|a, b| b.mean_carry.total_cmp(&a.mean_carry));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ShotSample;

    fn group(id: &str, carries: &[f64], offlines: Option<&[f64]>) -> ShotGroup {
        let shots = carries
            .iter()
            .enumerate()
            .map(|(i, c)| ShotSample::new(*c, offlines.map(|o| o[i])))
            .collect();
        ShotGroup::real(id, id, shots)
    }

    #[test]
    fn test_regression_exact_line() {
        let fit = linear_regression(&[(1.0, 3.0), (2.0, 5.0), (3.0, 7.0)]).unwrap();
        assert!((fit.slope - 2.0).abs() < 1e-12);
        assert!((fit.intercept - 1.0).abs() < 1e-12);
        assert!((fit.predict(10.0) - 21.0).abs() < 1e-9);
    }

    #[test]
    fn test_regression_single_point_is_constant() {
        let fit = linear_regression(&[(150.0, 6.0)]).unwrap();
        assert_eq!(fit.predict(0.0), 6.0);
        assert_eq!(fit.predict(300.0), 6.0);
    }

    #[test]
    fn test_regression_identical_x_uses_mean() {
        let fit = linear_regression(&[(100.0, 4.0), (100.0, 8.0)]).unwrap();
        assert_eq!(fit.predict(250.0), 6.0);
        assert!(linear_regression(&[]).is_none());
    }

    #[test]
    fn test_real_group_stats() {
        let groups = vec![group("7i", &[160.0, 165.0, 170.0], Some(&[-4.0, 2.0, 5.0]))];
        let dists = build_distributions(&groups);
        assert_eq!(dists.len(), 1);
        let d = &dists[0];
        assert!((d.mean_carry - 165.0).abs() < 1e-9);
        assert!((d.std_carry - 5.0).abs() < 1e-9);
        assert!((d.mean_offline - 1.0).abs() < 1e-9);
        assert!(d.std_offline > 0.0);
        assert!(!d.imputed);
    }

    #[test]
    fn test_missing_offline_uses_fallback() {
        let groups = vec![group("pw", &[120.0, 122.0, 118.0], None)];
        let d = &build_distributions(&groups)[0];
        assert_eq!(d.mean_offline, 0.0);
        assert_eq!(d.std_offline, 5.0);
    }

    #[test]
    fn test_identical_carries_floored() {
        let groups = vec![group("sw", &[85.0, 85.0, 85.0], None)];
        let d = &build_distributions(&groups)[0];
        assert!(d.std_carry > 0.0);
    }

    #[test]
    fn test_excludes_small_and_empty_groups() {
        let mut empty_imputed = ShotGroup::imputed("5w", "5 Wood", 0.0);
        empty_imputed.shots.clear();
        let groups = vec![
            group("dr", &[250.0, 260.0], None),
            ShotGroup::imputed("3w", "3 Wood", 0.0),
            empty_imputed,
        ];
        assert!(build_distributions(&groups).is_empty());
    }

    #[test]
    fn test_imputed_with_regression() {
        let groups = vec![
            group("dr", &[240.0, 250.0, 260.0], Some(&[-10.0, 0.0, 16.0])),
            group("7i", &[160.0, 165.0, 170.0], Some(&[-4.0, 2.0, 5.0])),
            group("pw", &[115.0, 120.0, 125.0], Some(&[-2.0, 0.0, 2.0])),
            ShotGroup::imputed("4h", "4 Hybrid", 200.0),
        ];
        let dists = build_distributions(&groups);
        assert_eq!(dists.len(), 4);
        // Sorted longest first
        assert_eq!(dists[0].club_id, "dr");
        assert_eq!(dists[1].club_id, "4h");

        let hybrid = &dists[1];
        assert!(hybrid.imputed);
        assert_eq!(hybrid.mean_carry, 200.0);
        assert!(hybrid.std_carry >= 2.0);
        assert!(hybrid.std_offline >= 2.0);
        // Between the 7-iron and driver dispersion
        assert!(hybrid.std_offline > dists[2].std_offline && hybrid.std_offline < dists[0].std_offline);
    }

    #[test]
    fn test_imputed_without_enough_real_clubs_uses_cv() {
        let groups = vec![
            group("7i", &[160.0, 165.0, 170.0], None),
            ShotGroup::imputed("3w", "3 Wood", 225.0),
        ];
        let dists = build_distributions(&groups);
        let wood = dists.iter().find(|d| d.club_id == "3w").unwrap();
        assert!((wood.std_carry - 9.0).abs() < 1e-9);
        assert!((wood.std_offline - 11.25).abs() < 1e-9);
        assert_eq!(wood.mean_offline, 0.0);
    }

    #[test]
    fn test_regression_floor_applies() {
        // Dispersion shrinks fast with carry; extrapolating to a short club goes negative
        let groups = vec![
            group("dr", &[240.0, 250.0, 260.0], Some(&[-20.0, 0.0, 20.0])),
            group("5i", &[175.0, 180.0, 185.0], Some(&[-1.0, 0.0, 1.0])),
            ShotGroup::imputed("lw", "Lob Wedge", 60.0),
        ];
        let dists = build_distributions(&groups);
        let lob = dists.iter().find(|d| d.club_id == "lw").unwrap();
        assert_eq!(lob.std_carry, 2.0);
        assert_eq!(lob.std_offline, 2.0);
    }
}
