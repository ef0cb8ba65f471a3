//! Pluggable decision policies

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use foresight_battle::{ActionSet, BattleSnapshot};

use crate::selector::Engine;

/// Anything that can pick one of the offered action sets for a turn
pub trait Policy {
    /// Pick a candidate, or `None` when `candidates` is empty
    fn choose<'a>(
        &mut self,
        snapshot: &BattleSnapshot,
        candidates: &'a [ActionSet],
    ) -> Option<&'a ActionSet>;
}

impl Policy for Engine {
    fn choose<'a>(
        &mut self,
        snapshot: &BattleSnapshot,
        candidates: &'a [ActionSet],
    ) -> Option<&'a ActionSet> {
        self.decide(snapshot, candidates)
    }
}

/// Uniformly random choice, ignoring the battle entirely
#[derive(Debug)]
pub struct RandomPolicy {
    rng: StdRng,
}

impl RandomPolicy {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl Policy for RandomPolicy {
    fn choose<'a>(
        &mut self,
        _snapshot: &BattleSnapshot,
        candidates: &'a [ActionSet],
    ) -> Option<&'a ActionSet> {
        candidates.choose(&mut self.rng)
    }
}
