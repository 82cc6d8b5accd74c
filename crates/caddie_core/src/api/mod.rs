//! JSON entry points for UI hosts.
//!
//! Each call decodes a versioned request, builds club distributions from the
//! raw shot groups, runs the engine and encodes the response.

pub mod json_api;

pub use json_api::{
    find_best_approaches_json, optimize_hole_json, optimize_round_json, ApproachRequest, ApproachResponse,
    HoleRequest, HoleResponse, RoundRequest, RoundResponse, SCHEMA_VERSION,
};
