//! Per-player state: roster, active slots, side conditions

use std::collections::HashMap;

use super::conditions::SideCondition;
use super::pokemon::Combatant;

/// Player slot on the battle field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Player {
    P1,
    P2,
}

impl Player {
    pub fn as_str(&self) -> &'static str {
        match self {
            Player::P1 => "p1",
            Player::P2 => "p2",
        }
    }

    pub fn opponent(&self) -> Player {
        match self {
            Player::P1 => Player::P2,
            Player::P2 => Player::P1,
        }
    }
}

/// Everything known about one player's half of the field
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SideState {
    pub player: Player,

    #[cfg_attr(feature = "serde", serde(default))]
    pub username: String,

    /// Roster in team order
    pub pokemon: Vec<Combatant>,

    /// Currently active Pokemon indices, one entry per slot
    #[cfg_attr(feature = "serde", serde(default = "default_active"))]
    pub active_indices: Vec<Option<usize>>,

    /// Side conditions and their layer counts
    #[cfg_attr(feature = "serde", serde(default))]
    pub conditions: HashMap<SideCondition, u8>,

    /// Moves this side has used, oldest first
    #[cfg_attr(feature = "serde", serde(default))]
    pub recent_moves: Vec<String>,
}

#[cfg(feature = "serde")]
fn default_active() -> Vec<Option<usize>> {
    vec![None]
}

impl SideState {
    pub fn new(player: Player, pokemon: Vec<Combatant>) -> Self {
        Self {
            player,
            username: String::new(),
            pokemon,
            active_indices: vec![None],
            conditions: HashMap::new(),
            recent_moves: Vec::new(),
        }
    }

    /// Pokemon in a field slot, if one is out
    pub fn active(&self, slot: usize) -> Option<&Combatant> {
        self.active_indices
            .get(slot)
            .and_then(|idx| idx.as_ref())
            .and_then(|&idx| self.pokemon.get(idx))
    }

    pub fn active_pokemon(&self) -> Option<&Combatant> {
        self.active(0)
    }

    /// Pokemon that can still battle
    pub fn alive_count(&self) -> usize {
        self.pokemon.iter().filter(|p| p.is_alive()).count()
    }

    /// Roster index by nickname or species
    pub fn find_pokemon(&self, name: &str) -> Option<usize> {
        self.pokemon
            .iter()
            .position(|p| p.name == name || p.species == name)
    }

    pub fn get_pokemon(&self, index: usize) -> Option<&Combatant> {
        self.pokemon.get(index)
    }

    /// Layers of `cond`, zero when absent
    pub fn condition_layers(&self, cond: SideCondition) -> u8 {
        self.conditions.get(&cond).copied().unwrap_or(0)
    }

    /// Add a layer of a side condition.
    /// Returns false if the condition was already at max layers.
    pub fn add_condition(&mut self, cond: SideCondition) -> bool {
        let layers = self.conditions.entry(cond).or_insert(0);
        if *layers < cond.max_layers() {
            *layers += 1;
            true
        } else {
            false
        }
    }

    /// Entry hazards currently present, with their layers
    pub fn hazards(&self) -> impl Iterator<Item = (SideCondition, u8)> + '_ {
        self.conditions
            .iter()
            .filter(|(cond, layers)| cond.is_hazard() && **layers > 0)
            .map(|(cond, layers)| (*cond, *layers))
    }

    /// Set the active Pokemon in slot 0, updating `active` flags
    pub fn set_active(&mut self, pokemon_index: usize) {
        for (idx, poke) in self.pokemon.iter_mut().enumerate() {
            poke.active = idx == pokemon_index;
        }
        self.active_indices = vec![Some(pokemon_index)];
    }
}
