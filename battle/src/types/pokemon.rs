//! Combatant snapshot

use super::moves::MoveData;
use super::pokemon_type::Type;
use super::stats::{BaseStats, Stat, StatStages};
use super::status::Status;

#[cfg(feature = "serde")]
fn default_level() -> u8 {
    100
}

#[cfg(feature = "serde")]
fn default_hp() -> u32 {
    100
}

/// One Pokemon as seen at decision time.
///
/// The snapshot is read-only for the engine. Fields that the protocol client
/// could not fill in keep neutral defaults: level 100, full HP, base stats of
/// 100, no types.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Combatant {
    /// Display name (nickname if set, otherwise species)
    pub name: String,

    #[cfg_attr(feature = "serde", serde(default))]
    pub species: String,

    #[cfg_attr(feature = "serde", serde(default = "default_level"))]
    pub level: u8,

    // === HP ===
    /// Current HP (percentage for opponent, exact value for our Pokemon)
    #[cfg_attr(feature = "serde", serde(default = "default_hp"))]
    pub hp_current: u32,

    /// Maximum HP (only known for our Pokemon)
    #[cfg_attr(feature = "serde", serde(default))]
    pub hp_max: Option<u32>,

    /// Types in order, primary first
    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "super::pokemon_type::lenient_types")
    )]
    pub types: Vec<Type>,

    #[cfg_attr(feature = "serde", serde(default))]
    pub stats: BaseStats,

    #[cfg_attr(feature = "serde", serde(default))]
    pub status: Option<Status>,

    #[cfg_attr(feature = "serde", serde(default))]
    pub fainted: bool,

    /// Whether this Pokemon is currently active on the field
    #[cfg_attr(feature = "serde", serde(default))]
    pub active: bool,

    #[cfg_attr(feature = "serde", serde(default))]
    pub moves: Vec<MoveData>,

    #[cfg_attr(feature = "serde", serde(default))]
    pub ability: Option<String>,

    #[cfg_attr(feature = "serde", serde(default))]
    pub boosts: StatStages,

    /// Used a boosting move last turn and is expected to keep boosting
    #[cfg_attr(feature = "serde", serde(default))]
    pub setting_up: bool,
}

impl Combatant {
    pub fn new(name: impl Into<String>, types: Vec<Type>) -> Self {
        let name = name.into();
        Self {
            species: name.clone(),
            name,
            level: 100,
            hp_current: 100,
            hp_max: None,
            types,
            stats: BaseStats::default(),
            status: None,
            fainted: false,
            active: false,
            moves: Vec::new(),
            ability: None,
            boosts: StatStages::new(),
            setting_up: false,
        }
    }

    /// Remaining HP as a fraction in 0.0..=1.0
    pub fn hp_fraction(&self) -> f32 {
        if self.fainted {
            return 0.0;
        }
        let fraction = match self.hp_max {
            Some(0) => 0.0,
            Some(max) => self.hp_current as f32 / max as f32,
            None => self.hp_current as f32 / 100.0,
        };
        fraction.clamp(0.0, 1.0)
    }

    /// Max HP, estimated from base HP and level when not revealed
    pub fn max_hp(&self) -> f32 {
        match self.hp_max {
            Some(max) if max > 0 => max as f32,
            _ => {
                let level = u32::from(self.level.max(1));
                ((2 * self.stats.hp * level) / 100 + level + 10) as f32
            }
        }
    }

    /// Current HP in absolute points (estimated when only a percentage is known)
    pub fn current_hp(&self) -> f32 {
        match self.hp_max {
            Some(max) if max > 0 => self.hp_current.min(max) as f32,
            _ => self.max_hp() * self.hp_fraction(),
        }
    }

    /// Base stat scaled by the current stage
    pub fn effective_stat(&self, stat: Stat) -> f32 {
        self.stats.get(stat) as f32 * StatStages::multiplier(self.boosts.get(stat))
    }

    pub fn is_alive(&self) -> bool {
        !self.fainted && self.hp_current > 0
    }

    /// Check if Pokemon can be switched to
    pub fn can_switch_to(&self) -> bool {
        self.is_alive() && !self.active
    }

    pub fn primary_type(&self) -> Option<Type> {
        self.types.first().copied()
    }

    pub fn has_type(&self, t: Type) -> bool {
        self.types.contains(&t)
    }

    pub fn has_setup_move(&self) -> bool {
        self.moves.iter().any(MoveData::is_setup)
    }

    pub fn find_move(&self, id: &str) -> Option<&MoveData> {
        self.moves.iter().find(|m| m.id == id)
    }

    pub fn with_moves(mut self, moves: Vec<MoveData>) -> Self {
        self.moves = moves;
        self
    }

    pub fn with_stats(mut self, stats: BaseStats) -> Self {
        self.stats = stats;
        self
    }

    /// Set HP as a percentage of max
    pub fn with_hp_percent(mut self, percent: u32) -> Self {
        self.hp_max = None;
        self.hp_current = percent.min(100);
        self
    }
}

impl Default for Combatant {
    fn default() -> Self {
        Self::new("Unknown", Vec::new())
    }
}
