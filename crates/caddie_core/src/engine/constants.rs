//! Policy constants for the shot model
//!
//! These are deliberate simplifications; tests are calibrated against the
//! exact values. `EngineConfig` defaults are drawn from here.

// ============================================================
// Geodesy
// ============================================================
pub mod geodesy {
    /// Mean Earth radius (m)
    pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

    /// 1 yard = 0.9144 m
    pub const METERS_PER_YARD: f64 = 0.9144;

    /// Mean Earth radius in yards
    pub const EARTH_RADIUS_YARDS: f64 = EARTH_RADIUS_M / METERS_PER_YARD;

    /// Default vertex count for dispersion ellipses
    pub const ELLIPSE_POINTS: usize = 36;
}

// ============================================================
// Club distributions
// ============================================================
pub mod dispersion {
    /// Minimum shots for a real (measured) club group
    pub const MIN_REAL_SHOTS: usize = 3;

    /// Minimum lateral samples before offline stats are trusted
    pub const MIN_OFFLINE_SAMPLES: usize = 2;

    /// Lateral std used when a club has no usable offline data (yards)
    pub const FALLBACK_STD_OFFLINE: f64 = 5.0;

    /// Coefficient of variation for carry when nothing can be regressed
    pub const FALLBACK_CARRY_CV: f64 = 0.04;

    /// Coefficient of variation for offline when nothing can be regressed
    pub const FALLBACK_OFFLINE_CV: f64 = 0.05;

    /// Floor for extrapolated dispersion (yards)
    pub const IMPUTED_STD_FLOOR: f64 = 2.0;

    /// Floor for measured dispersion (yards), keeps sampling well-defined
    pub const MEASURED_STD_FLOOR: f64 = 0.5;

    /// Below this |denominator| a regression falls back to mean(y)
    pub const REGRESSION_EPSILON: f64 = 1e-9;
}

// ============================================================
// Simulation
// ============================================================
pub mod simulation {
    /// Default Monte Carlo trials per candidate
    pub const DEFAULT_TRIALS: usize = 2000;

    /// Trial floor after budget scaling
    pub const MIN_TRIALS: usize = 500;

    /// Total simulated shots the 1-D search may spend
    pub const SHOT_BUDGET: usize = 400_000;

    /// Hard cap on full swings per hole, planned + greedy
    pub const MAX_SHOTS_PER_HOLE: usize = 8;

    /// Inside this distance no chip is needed (yards)
    pub const CHIP_FLOOR_YARDS: f64 = 10.0;

    /// Chip threshold = max(floor, fraction × shortest club carry)
    pub const CHIP_FRACTION_OF_SHORTEST: f64 = 0.5;

    /// Putts added by the distance-only model
    pub const FLAT_PUTTS: f64 = 2.0;
}

// ============================================================
// Scoring (GPS model)
// ============================================================
pub mod scoring {
    /// expected_putts(d) = BASE + LOG_COEFF · ln(d)
    pub const PUTT_BASE: f64 = 1.0;
    pub const PUTT_LOG_COEFF: f64 = 0.42;
    pub const PUTT_MIN: f64 = 1.0;
    pub const PUTT_MAX: f64 = 3.0;

    /// Proximity assumed after a chip (yards)
    pub const CHIP_PROXIMITY_YARDS: f64 = 3.0;

    /// Drop distance back toward the previous lie after a hazard (yards)
    pub const HAZARD_DROP_BACK_YARDS: f64 = 5.0;
}

// ============================================================
// 1-D approach search
// ============================================================
pub mod approach {
    pub const SINGLE_CLUB_MAX_YARDS: f64 = 225.0;
    pub const TWO_CLUB_MAX_YARDS: f64 = 425.0;

    pub const SINGLE_CLUB_TOLERANCE: f64 = 40.0;
    pub const TWO_CLUB_TOLERANCE: f64 = 60.0;
    pub const LONG_HOLE_TOLERANCE: f64 = 80.0;

    /// Carry lost per inch of grip-down (yards)
    pub const GRIP_DOWN_YARDS_PER_INCH: f64 = 5.0;
    pub const GRIP_DOWN_MAX_INCHES: u8 = 3;

    pub const MAX_RECOMMENDATIONS: usize = 3;
}

// ============================================================
// Strategy generation
// ============================================================
pub mod strategy {
    /// Par-3 bail-out distance away from the nearest hazard (yards)
    pub const BAIL_OUT_YARDS: f64 = 15.0;

    /// Aggressive tee shot shift toward the pin (yards)
    pub const AGGRESSIVE_SHIFT_YARDS: f64 = 12.0;

    /// Layup club must be at least this much shorter than the longest (yards)
    pub const LAYUP_GAP_YARDS: f64 = 20.0;

    /// Perpendicular offsets tried when an aim point sits in a hazard
    pub const NUDGE_OFFSETS_YARDS: [f64; 3] = [10.0, 20.0, 30.0];

    /// Par-5 safe layup targets this share of the remaining distance
    pub const SAFE_LAYUP_FRACTION: f64 = 0.55;

    /// Half-width of the corridor scanned for clearance notes (degrees)
    pub const CLEARANCE_CORRIDOR_DEGREES: f64 = 35.0;

    /// Hazards this far beyond the aim point still get a note (yards)
    pub const CLEARANCE_WINDOW_YARDS: f64 = 40.0;

    pub const INNER_SIGMA: f64 = 1.5;
    pub const OUTER_SIGMA: f64 = 3.0;
}

// ============================================================
// Round
// ============================================================
pub mod round {
    /// Holes surfaced as most strategically consequential
    pub const KEY_HOLE_COUNT: usize = 3;
}
