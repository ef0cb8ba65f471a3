//! Domain types making up a battle snapshot

mod conditions;
mod moves;
mod pokemon;
mod pokemon_type;
mod side;
mod stats;
mod status;

pub use conditions::SideCondition;
pub use moves::{MoveCategory, MoveData};
pub use pokemon::Combatant;
pub use pokemon_type::{TYPE_CHART, Type, effectiveness};
pub use side::{Player, SideState};
pub use stats::{BaseStats, NEUTRAL_STAT, Stat, StatStages};
pub use status::Status;
