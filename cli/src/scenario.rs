//! Saved decision points

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use foresight_battle::{ActionSet, BattleSnapshot};
use foresight_engine::EngineConfig;

/// A snapshot, the candidates offered for it, and optionally the engine
/// config to decide with
#[derive(Debug, Deserialize)]
pub struct Scenario {
    pub snapshot: BattleSnapshot,
    pub candidates: Vec<ActionSet>,
    #[serde(default)]
    pub config: Option<EngineConfig>,
}

impl Scenario {
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read scenario {}", path.display()))?;
        let scenario = Self::from_json(&json)
            .with_context(|| format!("Invalid scenario {}", path.display()))?;
        tracing::debug!(
            path = %path.display(),
            turn = scenario.snapshot.turn,
            candidates = scenario.candidates.len(),
            "Loaded scenario"
        );
        Ok(scenario)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let scenario = serde_json::from_str(json).context("Failed to parse scenario JSON")?;
        Ok(scenario)
    }
}

pub fn load_config(path: &Path) -> Result<EngineConfig> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    EngineConfig::from_json(&json).with_context(|| format!("Invalid config {}", path.display()))
}
