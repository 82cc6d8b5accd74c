//! Caddie CLI library
//!
//! File and environment I/O for the `caddie` binary: shot groups, hole and
//! course geometry, and engine config resolution.

use anyhow::{Context, Result};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::{env, fs};
use tracing::{debug, info};

use caddie_core::models::{HoleGeometry, ShotGroup};
use caddie_core::EngineConfig;

/// Environment variable naming a JSON engine config file.
pub const CONFIG_PATH_ENV: &str = "CADDIE_ENGINE_CONFIG";

/// Read and decode a JSON file.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("Failed to parse JSON from {}", path.display()))
}

pub fn load_shot_groups(path: &Path) -> Result<Vec<ShotGroup>> {
    let groups: Vec<ShotGroup> = read_json(path)?;
    debug!(path = %path.display(), groups = groups.len(), "shot groups loaded");
    Ok(groups)
}

pub fn load_hole(path: &Path) -> Result<HoleGeometry> {
    read_json(path)
}

/// A course file is a JSON array of holes.
pub fn load_course(path: &Path) -> Result<Vec<HoleGeometry>> {
    let holes: Vec<HoleGeometry> = read_json(path)?;
    if holes.is_empty() {
        anyhow::bail!("Course file {} has no holes", path.display());
    }
    Ok(holes)
}

fn load_config_file(path: &Path, source: &str) -> Result<EngineConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read engine config from {source}='{}'", path.display()))?;
    let config = EngineConfig::from_json(&content)
        .with_context(|| format!("Failed to parse engine config JSON from {source}='{}'", path.display()))?;
    config
        .validate()
        .with_context(|| format!("Invalid engine config from {source}='{}'", path.display()))?;
    Ok(config)
}

/// Resolve the engine config: explicit path, then `env_path`, then defaults.
pub fn resolve_engine_config(flag: Option<&Path>, env_path: Option<String>) -> Result<EngineConfig> {
    if let Some(path) = flag {
        info!(path = %path.display(), "engine config from --config");
        return load_config_file(path, "--config");
    }

    let env_path = env_path.map(|p| p.trim().to_string()).filter(|p| !p.is_empty());
    if let Some(path) = env_path {
        info!(path = %path, "engine config from {}", CONFIG_PATH_ENV);
        return load_config_file(&PathBuf::from(path), CONFIG_PATH_ENV);
    }

    Ok(EngineConfig::default())
}

/// `resolve_engine_config` with the path taken from `CADDIE_ENGINE_CONFIG`.
pub fn load_engine_config(flag: Option<&Path>) -> Result<EngineConfig> {
    resolve_engine_config(flag, env::var(CONFIG_PATH_ENV).ok())
}

/// Seeded generator when a seed is given, otherwise one seeded from entropy.
pub fn make_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    }
}

pub fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    let out = if pretty { serde_json::to_string_pretty(value) } else { serde_json::to_string(value) };
    out.context("Failed to encode output JSON")
}
