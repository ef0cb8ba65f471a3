//! Coarse game-state signals derived from a snapshot

use foresight_battle::{BattleSnapshot, Combatant, Player};

use crate::config::{EngineConfig, HazardWeights};

/// Speed-boosting abilities that turn a Pokemon into a sweeper
const SPEED_ABILITIES: &[&str] = &[
    "speedboost",
    "swiftswim",
    "chlorophyll",
    "sandrush",
    "slushrush",
    "unburden",
    "surgesurfer",
    "quickfeet",
];

/// Game phase, ordered from least to most severe
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GamePhase {
    Early,
    Mid,
    Late,
    Endgame,
}

impl GamePhase {
    /// Phase implied by the smaller of the two remaining team sizes
    pub fn from_remaining(mine: usize, theirs: usize) -> Self {
        match mine.min(theirs) {
            0 | 1 => GamePhase::Endgame,
            2 => GamePhase::Late,
            3 => GamePhase::Mid,
            _ => GamePhase::Early,
        }
    }

    /// Late or endgame
    pub fn is_closing(&self) -> bool {
        *self >= GamePhase::Late
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub phase: GamePhase,
    /// Party indices of our Pokemon flagged as win conditions
    pub win_conditions: Vec<usize>,
    /// Our remaining Pokemon minus theirs
    pub team_balance: i32,
}

impl GameState {
    pub fn is_win_condition(&self, index: usize) -> bool {
        self.win_conditions.contains(&index)
    }
}

pub fn analyze_game_state(snapshot: &BattleSnapshot, side: Player, config: &EngineConfig) -> GameState {
    let mine = snapshot.side(side);
    let theirs = snapshot.side(side.opponent());
    let my_remaining = mine.alive_count();
    let their_remaining = theirs.alive_count();

    let win_conditions = mine
        .pokemon
        .iter()
        .enumerate()
        .filter(|(_, mon)| mon.is_alive() && is_win_condition(mon, config.win_condition_speed))
        .map(|(idx, _)| idx)
        .collect();

    GameState {
        phase: GamePhase::from_remaining(my_remaining, their_remaining),
        win_conditions,
        team_balance: my_remaining as i32 - their_remaining as i32,
    }
}

/// A sweeper: speed-boosting ability, a stat-boosting move, or high base speed
pub fn is_win_condition(mon: &Combatant, speed_threshold: u32) -> bool {
    let speed_ability = mon.ability.as_deref().is_some_and(|ability| {
        let id = to_id(ability);
        SPEED_ABILITIES.contains(&id.as_str())
    });
    speed_ability || mon.has_setup_move() || mon.stats.spe > speed_threshold
}

/// Weighted sum of the entry hazards on the side opposing `side`.
///
/// From our perspective this is the pressure we have built up on the
/// opponent; evaluated for the opponent it is the pressure on our own side.
pub fn evaluate_hazard_pressure(snapshot: &BattleSnapshot, side: Player, weights: &HazardWeights) -> f32 {
    snapshot
        .side(side.opponent())
        .hazards()
        .map(|(condition, layers)| weights.weight(condition, layers))
        .sum()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PredictedAction {
    Switch,
    Recovery,
    ContinueSetup,
    /// Repeat the named move from their recent history
    RepeatMove,
}

/// A heuristic guess at the opponent's next action.
///
/// `probability` is a signal strength in 0.0..=1.0; predictions are scored
/// independently and do not sum to one.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub kind: PredictedAction,
    pub probability: f32,
    pub reason: &'static str,
}

pub fn predict_opponent_actions(opponent: &Combatant, recent_moves: &[String]) -> Vec<Prediction> {
    let mut predictions = Vec::new();
    let hp = opponent.hp_fraction();
    let has_recovery = opponent.moves.iter().any(|m| m.is_recovery());

    if hp < 0.25 {
        predictions.push(Prediction {
            kind: PredictedAction::Switch,
            probability: 0.6,
            reason: "critically low health",
        });
    } else if hp < 0.5 {
        predictions.push(Prediction {
            kind: PredictedAction::Switch,
            probability: 0.3,
            reason: "low health",
        });
    }

    if hp < 0.5 {
        predictions.push(Prediction {
            kind: PredictedAction::Recovery,
            probability: if has_recovery { 0.7 } else { 0.2 },
            reason: "low health",
        });
    }

    let last_was_setup = recent_moves
        .last()
        .and_then(|id| opponent.find_move(id))
        .is_some_and(|m| m.is_setup());
    if opponent.setting_up || last_was_setup {
        predictions.push(Prediction {
            kind: PredictedAction::ContinueSetup,
            probability: if hp > 0.5 { 0.7 } else { 0.4 },
            reason: "mid setup",
        });
    } else if opponent.boosts.any_positive() && hp > 0.5 {
        predictions.push(Prediction {
            kind: PredictedAction::ContinueSetup,
            probability: 0.3,
            reason: "already boosted",
        });
    }

    if let [.., a, b] = recent_moves
        && a == b
    {
        predictions.push(Prediction {
            kind: PredictedAction::RepeatMove,
            probability: 0.5,
            reason: "repeated last move",
        });
    }

    predictions
}

/// Strongest signal for a given prediction kind, 0.0 if absent
pub fn signal(predictions: &[Prediction], kind: PredictedAction) -> f32 {
    predictions
        .iter()
        .filter(|p| p.kind == kind)
        .map(|p| p.probability)
        .fold(0.0, f32::max)
}

/// Showdown id form: lowercase alphanumerics only
fn to_id(name: &str) -> String {
    name.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
