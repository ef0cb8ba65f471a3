//! Move data as offered to the decision engine

use super::conditions::SideCondition;
use super::pokemon_type::Type;
use super::stats::StatStages;
use super::status::Status;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveCategory {
    Physical,
    Special,
    Status,
}

/// A move known by a combatant.
///
/// Optional fields carry their meaning when absent: no `base_power` means the
/// move deals no direct damage, no `accuracy` means it always hits.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveData {
    /// Showdown move id ("hydropump"); also the repetition identifier
    pub id: String,

    /// Display name
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,

    pub category: MoveCategory,

    #[cfg_attr(
        feature = "serde",
        serde(rename = "type", default, deserialize_with = "super::pokemon_type::lenient_type")
    )]
    pub move_type: Option<Type>,

    #[cfg_attr(feature = "serde", serde(default))]
    pub base_power: Option<u32>,

    /// Accuracy 0-100
    #[cfg_attr(feature = "serde", serde(default))]
    pub accuracy: Option<u8>,

    #[cfg_attr(feature = "serde", serde(default))]
    pub priority: i8,

    /// Status inflicted on the target
    #[cfg_attr(feature = "serde", serde(default))]
    pub inflicts: Option<Status>,

    #[cfg_attr(feature = "serde", serde(default))]
    pub self_boosts: Option<StatStages>,

    /// Fraction of the user's max HP restored
    #[cfg_attr(feature = "serde", serde(default))]
    pub heal: Option<f32>,

    /// Side condition placed on the opponent's side
    #[cfg_attr(feature = "serde", serde(default))]
    pub sets_condition: Option<SideCondition>,
}

impl MoveData {
    pub fn new(id: impl Into<String>, category: MoveCategory, move_type: Option<Type>) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            category,
            move_type,
            base_power: None,
            accuracy: None,
            priority: 0,
            inflicts: None,
            self_boosts: None,
            heal: None,
            sets_condition: None,
        }
    }

    /// A damaging move with the given base power and 100% accuracy
    pub fn attack(
        id: impl Into<String>,
        category: MoveCategory,
        move_type: Type,
        base_power: u32,
    ) -> Self {
        Self::new(id, category, Some(move_type))
            .with_base_power(base_power)
            .with_accuracy(100)
    }

    pub fn with_base_power(mut self, base_power: u32) -> Self {
        self.base_power = Some(base_power);
        self
    }

    pub fn with_accuracy(mut self, accuracy: u8) -> Self {
        self.accuracy = Some(accuracy.min(100));
        self
    }

    pub fn with_priority(mut self, priority: i8) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_status(mut self, status: Status) -> Self {
        self.inflicts = Some(status);
        self
    }

    pub fn with_boosts(mut self, boosts: StatStages) -> Self {
        self.self_boosts = Some(boosts);
        self
    }

    pub fn with_heal(mut self, fraction: f32) -> Self {
        self.heal = Some(fraction);
        self
    }

    pub fn with_condition(mut self, condition: SideCondition) -> Self {
        self.sets_condition = Some(condition);
        self
    }

    /// Physical or special with a non-zero base power
    pub fn is_damaging(&self) -> bool {
        self.category != MoveCategory::Status && self.base_power.unwrap_or(0) > 0
    }

    /// Chance to hit as a 0.0-1.0 factor (always-hit moves are 1.0)
    pub fn hit_chance(&self) -> f32 {
        self.accuracy.map_or(1.0, |acc| f32::from(acc.min(100)) / 100.0)
    }

    /// Raises at least one of the user's stats
    pub fn is_setup(&self) -> bool {
        self.self_boosts.as_ref().is_some_and(|b| b.any_positive())
    }

    /// Places an entry hazard on the opponent's side
    pub fn sets_hazard(&self) -> bool {
        self.sets_condition.is_some_and(|c| c.is_hazard())
    }

    pub fn is_recovery(&self) -> bool {
        self.heal.is_some_and(|h| h > 0.0)
    }
}
