//! Engine tunables
//!
//! Every field is optional in JSON; missing fields take the defaults below.

use serde::{Deserialize, Serialize};

use foresight_battle::SideCondition;

use crate::error::ConfigError;

/// Main engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Candidates scoring at least this fraction of the best score stay in the draw
    pub filter_threshold: f32,
    /// Exponent applied to normalized scores before sampling
    pub weight_exponent: f32,
    /// Number of recent actions remembered
    pub history_capacity: usize,
    /// Number of most recent history entries inspected for repeats
    pub repetition_window: usize,
    /// Penalty multiplier by repeat count: index 0 is one repeat, the last
    /// entry covers every larger count
    pub repetition_penalties: Vec<f32>,
    /// Base speed above which a Pokemon counts as a win condition
    pub win_condition_speed: u32,
    pub hazard_weights: HazardWeights,
    /// Fixed RNG seed for reproducible decisions
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            filter_threshold: 0.9,
            weight_exponent: 3.0,
            history_capacity: 5,
            repetition_window: 4,
            repetition_penalties: vec![0.5, 0.2, 0.1],
            win_condition_speed: 110,
            hazard_weights: HazardWeights::default(),
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Parse a JSON config and validate it
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.filter_threshold > 0.0 && self.filter_threshold <= 1.0) {
            return Err(ConfigError::InvalidThreshold(self.filter_threshold));
        }
        if !(self.weight_exponent > 0.0 && self.weight_exponent.is_finite()) {
            return Err(ConfigError::InvalidExponent(self.weight_exponent));
        }
        if !(4..=6).contains(&self.history_capacity) {
            return Err(ConfigError::InvalidCapacity(self.history_capacity));
        }
        if !(3..=4).contains(&self.repetition_window)
            || self.repetition_window > self.history_capacity
        {
            return Err(ConfigError::InvalidWindow(self.repetition_window));
        }

        let penalties = &self.repetition_penalties;
        let in_range = penalties.iter().all(|p| *p > 0.0 && *p <= 1.0);
        let non_increasing = penalties.windows(2).all(|w| w[1] <= w[0]);
        if penalties.is_empty() || !in_range || !non_increasing {
            return Err(ConfigError::InvalidPenaltyCurve);
        }

        Ok(())
    }
}

/// Pressure contributed by each entry hazard on a side
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HazardWeights {
    pub stealth_rock: f32,
    /// Per layer
    pub spikes: f32,
    /// Per layer
    pub toxic_spikes: f32,
    pub sticky_web: f32,
}

impl Default for HazardWeights {
    fn default() -> Self {
        Self {
            stealth_rock: 30.0,
            spikes: 20.0,
            toxic_spikes: 15.0,
            sticky_web: 15.0,
        }
    }
}

impl HazardWeights {
    pub fn weight(&self, condition: SideCondition, layers: u8) -> f32 {
        let layers = f32::from(layers);
        match condition {
            SideCondition::StealthRock => self.stealth_rock,
            SideCondition::Spikes => self.spikes * layers,
            SideCondition::ToxicSpikes => self.toxic_spikes * layers,
            SideCondition::StickyWeb => self.sticky_web,
            _ => 0.0,
        }
    }
}
