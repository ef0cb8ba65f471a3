//! Move scoring and weighted action selection for Pokemon Showdown bots.
//!
//! # Overview
//!
//! Given a [`BattleSnapshot`] and the candidate [`ActionSet`]s offered for a
//! turn, the [`Engine`] picks one the way a reasonable player would, with
//! enough randomness that it cannot be read turn for turn:
//!
//! ```text
//! snapshot ──► situation (phase, hazards, win conditions, predictions)
//!                 │
//! candidates ──► scorer (damage estimate + heuristics × repetition penalty)
//!                 │
//!                 ▼
//!              selector (near-best subset ─► cubed weights ─► weighted draw)
//!                 │
//!                 ▼
//!           chosen &ActionSet, history updated
//! ```
//!
//! # Example
//!
//! ```
//! use foresight_battle::{
//!     Action, ActionSet, BattleSnapshot, Combatant, MoveCategory, MoveData, Player, SideState,
//!     Type,
//! };
//! use foresight_engine::{Engine, EngineConfig};
//!
//! let starmie = Combatant::new("Starmie", vec![Type::Water]).with_moves(vec![
//!     MoveData::attack("surf", MoveCategory::Special, Type::Water, 90),
//!     MoveData::attack("tackle", MoveCategory::Physical, Type::Normal, 40),
//! ]);
//! let mut me = SideState::new(Player::P1, vec![starmie]);
//! me.set_active(0);
//! let mut them = SideState::new(Player::P2, vec![Combatant::new("Camerupt", vec![Type::Fire, Type::Ground])]);
//! them.set_active(0);
//! let snapshot = BattleSnapshot::new(Player::P1, me, them);
//!
//! let candidates = vec![
//!     ActionSet::single(Action::move_slot(0, "surf")),
//!     ActionSet::single(Action::move_slot(1, "tackle")),
//! ];
//!
//! let mut engine = Engine::new(EngineConfig::default().with_seed(7)).unwrap();
//! let choice = engine.decide(&snapshot, &candidates).unwrap();
//! assert_eq!(choice.to_choice(), "move 1");
//! ```
//!
//! [`BattleSnapshot`]: foresight_battle::BattleSnapshot
//! [`ActionSet`]: foresight_battle::ActionSet

pub mod config;
pub mod damage;
pub mod error;
pub mod policy;
pub mod repetition;
pub mod scorer;
pub mod selector;
pub mod situation;

pub use config::{EngineConfig, HazardWeights};
pub use damage::DamageEstimate;
pub use error::ConfigError;
pub use policy::{Policy, RandomPolicy};
pub use repetition::RepetitionTracker;
pub use scorer::{ActionScorer, MIN_SCORE, TEAM_PICK_SCORE};
pub use selector::{Engine, ScoredCandidate};
pub use situation::{GamePhase, GameState, PredictedAction, Prediction};
