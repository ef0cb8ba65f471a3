//! Battle snapshot and domain types for the foresight decision engine.
//!
//! # Overview
//!
//! `foresight-battle` is the data-model boundary between the protocol client
//! and the decision engine:
//!
//! ```text
//! protocol client (tracks the battle, builds snapshots)
//!        │
//!        ▼
//! foresight-battle (snapshot + domain types) ← THIS CRATE
//!        │
//!        ▼
//! foresight-engine (scoring and selection)
//! ```
//!
//! Every field is either required or has a neutral default resolved here, so
//! the engine never has to guess about missing data.
//!
//! # Main Types
//!
//! - [`Type`] and [`effectiveness`] - type chart lookups
//! - [`Combatant`] - one Pokemon as seen at decision time
//! - [`MoveData`] - a known move
//! - [`SideState`] - one player's roster, active slots and side conditions
//! - [`BattleSnapshot`] - both sides plus the perspective being decided for
//! - [`Action`] / [`ActionSet`] - the candidate choices for a turn
//!
//! # Example Usage
//!
//! ```
//! use foresight_battle::{Action, ActionSet, Combatant, Player, SideState, Type, effectiveness};
//!
//! assert_eq!(effectiveness(Some(Type::Water), &[Type::Fire, Type::Ground]), 4.0);
//!
//! let mut me = SideState::new(Player::P1, vec![Combatant::new("Vaporeon", vec![Type::Water])]);
//! me.set_active(0);
//!
//! let choice = ActionSet::single(Action::move_slot(0, "scald"));
//! assert_eq!(choice.to_choice(), "move 1");
//! ```

pub mod action;
pub mod query;
pub mod snapshot;
pub mod types;

// Re-export main types at crate root for convenience
pub use action::{Action, ActionSet};
pub use snapshot::{BattleSnapshot, player_to_index};
pub use types::{
    BaseStats, Combatant, MoveCategory, MoveData, NEUTRAL_STAT, Player, SideCondition, SideState,
    Stat, StatStages, Status, TYPE_CHART, Type, effectiveness,
};
