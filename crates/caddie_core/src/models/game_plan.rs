//! Round-level output of the optimizer.

use serde::{Deserialize, Serialize};

use super::strategy::{OptimizeMode, OptimizedStrategy};

/// Ranked strategies for one hole.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HolePlan {
    pub hole_number: u8,
    pub par: u8,
    /// Ranked best-first by the round's objective
    pub strategies: Vec<OptimizedStrategy>,
    /// Expected-stroke gap between the best and worst strategy
    pub stroke_spread: f64,
}

impl HolePlan {
    pub fn best(&self) -> Option<&OptimizedStrategy> {
        self.strategies.first()
    }
}

/// A hole whose strategy choice matters most.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyHole {
    pub hole_number: u8,
    pub stroke_spread: f64,
    pub recommended: String,
}

/// Course-level plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GamePlan {
    pub mode: OptimizeMode,
    pub holes: Vec<HolePlan>,
    pub key_holes: Vec<KeyHole>,
    pub total_par: u32,
    /// Sum of each hole's best expected strokes
    pub expected_total: f64,
}
