//! Putting model and score bucketing
//!
//! All functions are pure.

use super::config::ScoringConfig;
use crate::models::ScoreDistribution;

/// Expected putts from `distance_yards`: base + k·ln(d), clamped.
///
/// Exactly the lower clamp for d <= 1.
pub fn expected_putts(distance_yards: f64, config: &ScoringConfig) -> f64 {
    if distance_yards <= 1.0 {
        return config.putt_min;
    }
    (config.putt_base + config.putt_log_coefficient * distance_yards.ln())
        .clamp(config.putt_min, config.putt_max)
}

/// Counts of trial outcomes relative to par.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScoreTally {
    eagle: u32,
    birdie: u32,
    par: u32,
    bogey: u32,
    double: u32,
    worse: u32,
    trials: u32,
}

impl ScoreTally {
    /// Bucket one trial by rounded `strokes - par`.
    pub fn record(&mut self, strokes: f64, par: u8) {
        let rel = (strokes - par as f64).round() as i64;
        match rel {
            i64::MIN..=-2 => self.eagle += 1,
            -1 => self.birdie += 1,
            0 => self.par += 1,
            1 => self.bogey += 1,
            2 => self.double += 1,
            _ => self.worse += 1,
        }
        self.trials += 1;
    }

    pub fn trials(&self) -> u32 {
        self.trials
    }

    /// Normalized distribution (sums to 1.0 when any trial was recorded).
    pub fn distribution(&self) -> ScoreDistribution {
        if self.trials == 0 {
            return ScoreDistribution::default();
        }
        let n = self.trials as f64;
        ScoreDistribution {
            eagle: self.eagle as f64 / n,
            birdie: self.birdie as f64 / n,
            par: self.par as f64 / n,
            bogey: self.bogey as f64 / n,
            double: self.double as f64 / n,
            worse: self.worse as f64 / n,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expected_putts_anchor_points() {
        let cfg = ScoringConfig::default();
        assert_eq!(expected_putts(0.0, &cfg), 1.0);
        assert_eq!(expected_putts(1.0, &cfg), 1.0);
        assert_eq!(expected_putts(1000.0, &cfg), 3.0);
        let three = expected_putts(3.0, &cfg);
        assert!((three - (1.0 + 0.42 * 3.0f64.ln())).abs() < 1e-12);
    }

    #[test]
    fn test_expected_putts_monotone() {
        let cfg = ScoringConfig::default();
        let mut prev = 0.0;
        for i in 0..500 {
            let d = i as f64 * 0.25;
            let p = expected_putts(d, &cfg);
            assert!(p >= prev, "not monotone at {}", d);
            assert!((1.0..=3.0).contains(&p));
            prev = p;
        }
    }

    #[test]
    fn test_tally_buckets() {
        let mut tally = ScoreTally::default();
        tally.record(2.0, 4); // eagle
        tally.record(1.2, 4); // albatross-ish counts as eagle
        tally.record(3.4, 4); // birdie
        tally.record(4.4, 4); // par
        tally.record(4.6, 4); // bogey
        tally.record(6.0, 4); // double
        tally.record(9.0, 4); // worse
        tally.record(5.5, 4); // rounds to 6 → double
        let dist = tally.distribution();
        assert_eq!(tally.trials(), 8);
        assert!((dist.eagle - 2.0 / 8.0).abs() < 1e-12);
        assert!((dist.double - 2.0 / 8.0).abs() < 1e-12);
        assert!((dist.total() - 1.0).abs() < 1e-9);
        assert!((dist.blowup_risk() - 3.0 / 8.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_tally() {
        assert_eq!(ScoreTally::default().distribution(), ScoreDistribution::default());
    }

    #[cfg(all(test, feature = "proptest"))]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: expected putts never decrease with distance
            #[test]
            fn prop_putts_monotone(a in 0.0f64..500.0, b in 0.0f64..500.0) {
                let cfg = ScoringConfig::default();
                let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
                prop_assert!(expected_putts(lo, &cfg) <= expected_putts(hi, &cfg));
            }

            /// Property: any tally normalizes to 1.0
            #[test]
            fn prop_tally_sums_to_one(strokes in prop::collection::vec(1.0f64..12.0, 1..200), par in 3u8..6) {
                let mut tally = ScoreTally::default();
                for s in &strokes {
                    tally.record(*s, par);
                }
                prop_assert!((tally.distribution().total() - 1.0).abs() < 1e-6);
            }
        }
    }
}
