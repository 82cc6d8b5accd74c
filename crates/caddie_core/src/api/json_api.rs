use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::engine::distance_sim::find_best_approaches;
use crate::engine::distributions::build_distributions;
use crate::engine::optimizer::{optimize_hole, optimize_round};
use crate::engine::EngineConfig;
use crate::error::{CaddieError, Result};
use crate::models::{
    ApproachRecommendation, ClubDistribution, GamePlan, GeoPoint, HoleGeometry, OptimizeMode, OptimizedStrategy,
    ShotGroup,
};

/// Request/response schema understood by this build.
pub const SCHEMA_VERSION: u8 = 1;

// ============================================================
// Requests
// ============================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HoleRequest {
    pub schema_version: u8,
    /// Fixed seed for reproducible output; entropy when absent
    #[serde(default)]
    pub seed: Option<u64>,
    pub shot_groups: Vec<ShotGroup>,
    pub hole: HoleGeometry,
    #[serde(default)]
    pub mode: OptimizeMode,
    #[serde(default)]
    pub config: Option<EngineConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundRequest {
    pub schema_version: u8,
    #[serde(default)]
    pub seed: Option<u64>,
    pub shot_groups: Vec<ShotGroup>,
    pub holes: Vec<HoleGeometry>,
    #[serde(default)]
    pub mode: OptimizeMode,
    #[serde(default)]
    pub config: Option<EngineConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApproachRequest {
    pub schema_version: u8,
    #[serde(default)]
    pub seed: Option<u64>,
    pub shot_groups: Vec<ShotGroup>,
    pub distance_yards: f64,
    #[serde(default)]
    pub config: Option<EngineConfig>,
}

// ============================================================
// Responses
// ============================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoleResponse {
    pub schema_version: u8,
    pub distributions: Vec<ClubDistribution>,
    pub strategies: Vec<OptimizedStrategy>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundResponse {
    pub schema_version: u8,
    pub distributions: Vec<ClubDistribution>,
    pub plan: GamePlan,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApproachResponse {
    pub schema_version: u8,
    pub distributions: Vec<ClubDistribution>,
    pub recommendations: Vec<ApproachRecommendation>,
}

// ============================================================
// Validation helpers
// ============================================================

fn check_schema(found: u8) -> Result<()> {
    if found != SCHEMA_VERSION {
        return Err(CaddieError::UnsupportedSchema { found, expected: SCHEMA_VERSION });
    }
    Ok(())
}

fn resolve_config(config: Option<EngineConfig>) -> Result<EngineConfig> {
    let config = config.unwrap_or_default();
    config.validate()?;
    Ok(config)
}

fn make_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    }
}

fn check_point(label: &str, p: GeoPoint) -> Result<()> {
    if !((-90.0..=90.0).contains(&p.lat) && (-180.0..=180.0).contains(&p.lng)) {
        return Err(CaddieError::InvalidRequest(format!(
            "{label} is not a valid coordinate: ({}, {})",
            p.lat, p.lng
        )));
    }
    Ok(())
}

fn check_hole(hole: &HoleGeometry) -> Result<()> {
    if hole.par == 0 {
        return Err(CaddieError::InvalidRequest(format!("hole {}: par must be > 0", hole.number)));
    }
    check_point(&format!("hole {} tee", hole.number), hole.tee.point())?;
    check_point(&format!("hole {} pin", hole.number), hole.pin.point())?;
    for hazard in &hole.hazards {
        if !(hazard.penalty >= 0.0) {
            return Err(CaddieError::InvalidRequest(format!(
                "hole {}: {} penalty must be >= 0",
                hole.number, hazard.kind
            )));
        }
    }
    Ok(())
}

// ============================================================
// Entry points
// ============================================================

/// Rank strategies for one hole.
pub fn optimize_hole_json(request_json: &str) -> Result<String> {
    let request: HoleRequest = serde_json::from_str(request_json)?;
    check_schema(request.schema_version)?;
    check_hole(&request.hole)?;
    let config = resolve_config(request.config)?;

    let distributions = build_distributions(&request.shot_groups);
    let mut rng = make_rng(request.seed);
    let strategies = optimize_hole(&request.hole, &distributions, request.mode, &config, &mut rng);
    debug!(hole = request.hole.number, strategies = strategies.len(), "optimize_hole_json");

    let response = HoleResponse { schema_version: SCHEMA_VERSION, distributions, strategies };
    Ok(serde_json::to_string(&response)?)
}

/// Plan a full round. Holes run in order on the calling thread.
pub fn optimize_round_json(request_json: &str) -> Result<String> {
    let request: RoundRequest = serde_json::from_str(request_json)?;
    check_schema(request.schema_version)?;
    if request.holes.is_empty() {
        return Err(CaddieError::InvalidRequest("round has no holes".to_string()));
    }
    for hole in &request.holes {
        check_hole(hole)?;
    }
    let config = resolve_config(request.config)?;

    let distributions = build_distributions(&request.shot_groups);
    let mut rng = make_rng(request.seed);
    let plan = optimize_round(&request.holes, &distributions, request.mode, &config, &mut rng, None);

    let response = RoundResponse { schema_version: SCHEMA_VERSION, distributions, plan };
    Ok(serde_json::to_string(&response)?)
}

/// Club sequences for a scalar distance, no geometry.
pub fn find_best_approaches_json(request_json: &str) -> Result<String> {
    let request: ApproachRequest = serde_json::from_str(request_json)?;
    check_schema(request.schema_version)?;
    if !request.distance_yards.is_finite() {
        return Err(CaddieError::InvalidRequest("distance_yards must be finite".to_string()));
    }
    let config = resolve_config(request.config)?;

    let distributions = build_distributions(&request.shot_groups);
    let mut rng = make_rng(request.seed);
    let recommendations = find_best_approaches(request.distance_yards, &distributions, &config, &mut rng);

    let response = ApproachResponse { schema_version: SCHEMA_VERSION, distributions, recommendations };
    Ok(serde_json::to_string(&response)?)
}
