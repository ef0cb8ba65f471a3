//! BattleSnapshot - the immutable view of a battle handed to the engine

use crate::types::{Combatant, Player, SideState};

/// Both sides of a battle at the moment a decision is requested.
///
/// Built by the protocol client from tracked state and never mutated by the
/// engine. `perspective` is the side awaiting an action.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleSnapshot {
    /// Which player we are deciding for
    pub perspective: Player,

    /// Player sides, indexed by [`player_to_index`]
    pub sides: [SideState; 2],

    /// Current turn number (0 = team preview)
    #[cfg_attr(feature = "serde", serde(default))]
    pub turn: u32,
}

impl BattleSnapshot {
    /// Build a snapshot from two sides in any order
    pub fn new(perspective: Player, a: SideState, b: SideState) -> Self {
        let sides = if a.player == Player::P1 { [a, b] } else { [b, a] };
        Self {
            perspective,
            sides,
            turn: 0,
        }
    }

    pub fn side(&self, player: Player) -> &SideState {
        &self.sides[player_to_index(player)]
    }

    /// Our side (based on perspective)
    pub fn me(&self) -> &SideState {
        self.side(self.perspective)
    }

    pub fn opponent(&self) -> &SideState {
        self.side(self.perspective.opponent())
    }

    /// Our active Pokemon in the given slot
    pub fn my_active(&self, slot: usize) -> Option<&Combatant> {
        self.me().active(slot)
    }

    /// The opponent's active Pokemon in a slot, falling back to their first active
    pub fn opposing_active(&self, slot: usize) -> Option<&Combatant> {
        let opp = self.opponent();
        opp.active(slot).or_else(|| opp.active_pokemon())
    }
}

/// Convert Player enum to array index
pub fn player_to_index(player: Player) -> usize {
    match player {
        Player::P1 => 0,
        Player::P2 => 1,
    }
}
