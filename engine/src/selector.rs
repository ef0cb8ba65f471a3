//! Candidate scoring and weighted random selection

use rand::SeedableRng;
use rand::distributions::{Distribution, WeightedIndex};
use rand::rngs::StdRng;

use foresight_battle::{Action, ActionSet, BattleSnapshot, Combatant};

use crate::config::EngineConfig;
use crate::error::ConfigError;
use crate::repetition::RepetitionTracker;
use crate::scorer::{ActionScorer, MIN_SCORE, repetition_key, resolve_move};
use crate::situation::GamePhase;

/// Damaging moves get a slight bump once the game is late
const LATE_AGGRESSION: f32 = 1.1;

/// A candidate's position in the input and its aggregate score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredCandidate {
    pub index: usize,
    pub score: f32,
}

/// Decision engine for one battle.
///
/// Owns the repetition history and RNG, so every concurrent battle needs its
/// own instance.
#[derive(Debug)]
pub struct Engine {
    config: EngineConfig,
    tracker: RepetitionTracker,
    rng: StdRng,
    decisions: u64,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::with_valid_config(config))
    }

    fn with_valid_config(config: EngineConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            tracker: RepetitionTracker::from_config(&config),
            config,
            rng,
            decisions: 0,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Recently chosen action identifiers, oldest first
    pub fn history(&self) -> impl Iterator<Item = &str> {
        self.tracker.history()
    }

    /// Number of decisions made so far
    pub fn decisions(&self) -> u64 {
        self.decisions
    }

    /// Score every candidate without choosing or touching the history
    pub fn score_candidates(
        &self,
        snapshot: &BattleSnapshot,
        candidates: &[ActionSet],
    ) -> Vec<ScoredCandidate> {
        let scorer = ActionScorer::new(snapshot, &self.config, &self.tracker);
        let game = scorer.game();
        tracing::debug!(
            phase = ?game.phase,
            team_balance = game.team_balance,
            win_conditions = ?game.win_conditions,
            offensive_hazards = scorer.offensive_hazards(),
            defensive_hazards = scorer.defensive_hazards(),
            "Analyzed game state"
        );

        candidates
            .iter()
            .enumerate()
            .map(|(index, set)| {
                let score = score_set(&scorer, snapshot, set);
                tracing::debug!(index, score, choice = %set.to_choice(), "Scored candidate");
                ScoredCandidate { index, score }
            })
            .collect()
    }

    /// Choose one of `candidates`, or `None` when there are none.
    ///
    /// The returned reference always points into `candidates`.
    pub fn decide<'a>(
        &mut self,
        snapshot: &BattleSnapshot,
        candidates: &'a [ActionSet],
    ) -> Option<&'a ActionSet> {
        if candidates.is_empty() {
            tracing::debug!(turn = snapshot.turn, "No candidates offered");
            return None;
        }

        let scored = self.score_candidates(snapshot, candidates);
        let (chosen, serious) = self.choose_index(&scored);
        let set = candidates.get(chosen)?;

        if let Some(key) = set.primary().and_then(|action| repetition_key(action, snapshot, 0)) {
            self.tracker.update(key);
        }
        self.decisions += 1;

        tracing::info!(
            turn = snapshot.turn,
            choice = %set.to_choice(),
            candidates = candidates.len(),
            serious,
            "Chose action"
        );
        Some(set)
    }

    /// Index of the drawn candidate and the size of the pool it was drawn from
    fn choose_index(&mut self, scored: &[ScoredCandidate]) -> (usize, usize) {
        let max = scored.iter().map(|c| c.score).fold(MIN_SCORE, f32::max);
        let serious = serious_subset(scored, max, self.config.filter_threshold);

        let chosen = match serious.as_slice() {
            [] => scored.first().map_or(0, |c| c.index),
            [only] => only.index,
            pool => {
                let weights = selection_weights(pool, max, self.config.weight_exponent);
                match WeightedIndex::new(&weights) {
                    Ok(dist) => pool[dist.sample(&mut self.rng)].index,
                    Err(e) => {
                        tracing::warn!(error = %e, "Invalid selection weights, taking the top candidate");
                        pool.iter()
                            .max_by(|a, b| a.score.total_cmp(&b.score))
                            .map_or(pool[0].index, |c| c.index)
                    }
                }
            }
        };
        (chosen, serious.len())
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::with_valid_config(EngineConfig::default())
    }
}

/// Candidates scoring at least `threshold * max`.
///
/// Falls back to the exact maxima if nothing clears the bar.
pub fn serious_subset(scored: &[ScoredCandidate], max: f32, threshold: f32) -> Vec<ScoredCandidate> {
    let cutoff = max * threshold;
    let serious: Vec<_> = scored.iter().filter(|c| c.score >= cutoff).copied().collect();
    if !serious.is_empty() {
        return serious;
    }
    scored.iter().filter(|c| c.score == max).copied().collect()
}

/// Sampling weights: each score normalized by `max`, raised to `exponent`
pub fn selection_weights(pool: &[ScoredCandidate], max: f32, exponent: f32) -> Vec<f32> {
    let max = max.max(MIN_SCORE);
    pool.iter().map(|c| (c.score / max).powf(exponent)).collect()
}

/// Sum of the set's action scores with phase adjustments, floored
fn score_set(scorer: &ActionScorer<'_>, snapshot: &BattleSnapshot, set: &ActionSet) -> f32 {
    let phase = scorer.game().phase;
    let total: f32 = set
        .iter()
        .enumerate()
        .map(|(slot, action)| {
            let acting = snapshot.my_active(slot);
            let opponent = target_of(snapshot, action, slot);
            scorer.score(action, acting, opponent) * phase_multiplier(phase, action, acting)
        })
        .sum();
    total.max(MIN_SCORE)
}

/// The opposing Pokemon an action from `slot` is aimed at.
///
/// Positive targets are 1-indexed opposing slots; anything else faces the
/// opponent across from the acting slot.
fn target_of<'s>(snapshot: &'s BattleSnapshot, action: &Action, slot: usize) -> Option<&'s Combatant> {
    match action {
        Action::Move {
            target: Some(target),
            ..
        } if *target > 0 => snapshot.opposing_active(*target as usize - 1),
        _ => snapshot.opposing_active(slot),
    }
}

fn phase_multiplier(phase: GamePhase, action: &Action, acting: Option<&Combatant>) -> f32 {
    let Some(mv) = acting.and_then(|a| resolve_move(action, a)) else {
        return 1.0;
    };
    match phase {
        GamePhase::Late if mv.is_damaging() => LATE_AGGRESSION,
        // Misses are hard to recover from with one Pokemon left
        GamePhase::Endgame if mv.hit_chance() < 1.0 => mv.hit_chance(),
        _ => 1.0,
    }
}
