//! Rolling history of chosen actions and the anti-repetition penalty

use std::collections::VecDeque;

use crate::config::EngineConfig;

/// Bounded FIFO of recently chosen action identifiers
#[derive(Debug, Clone)]
pub struct RepetitionTracker {
    history: VecDeque<String>,
    capacity: usize,
    window: usize,
    penalties: Vec<f32>,
}

impl RepetitionTracker {
    pub fn new(capacity: usize, window: usize, penalties: Vec<f32>) -> Self {
        Self {
            history: VecDeque::with_capacity(capacity + 1),
            capacity,
            window,
            penalties,
        }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(
            config.history_capacity,
            config.repetition_window,
            config.repetition_penalties.clone(),
        )
    }

    /// Multiplier in (0, 1] for an action seen `n` times in the recent window
    pub fn penalty_for(&self, identifier: &str) -> f32 {
        let occurrences = self
            .history
            .iter()
            .rev()
            .take(self.window)
            .filter(|id| *id == identifier)
            .count();

        match occurrences {
            0 => 1.0,
            n => self
                .penalties
                .get(n - 1)
                .or(self.penalties.last())
                .copied()
                .unwrap_or(1.0),
        }
    }

    /// Record a chosen action, evicting the oldest entry when full
    pub fn update(&mut self, identifier: impl Into<String>) {
        self.history.push_back(identifier.into());
        while self.history.len() > self.capacity {
            self.history.pop_front();
        }
    }

    /// Oldest first
    pub fn history(&self) -> impl Iterator<Item = &str> {
        self.history.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }
}

impl Default for RepetitionTracker {
    fn default() -> Self {
        Self::from_config(&EngineConfig::default())
    }
}
