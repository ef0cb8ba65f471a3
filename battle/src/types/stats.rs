//! Base stats and stat stages

/// Battle stats that can be boosted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stat {
    Atk,
    Def,
    Spa,
    Spd,
    Spe,
}

impl Stat {
    pub const ALL: [Stat; 5] = [Stat::Atk, Stat::Def, Stat::Spa, Stat::Spd, Stat::Spe];
}

/// Stat value used whenever a base stat is not known
pub const NEUTRAL_STAT: u32 = 100;

/// Species base stats.
///
/// Every field falls back to [`NEUTRAL_STAT`] when absent from the snapshot,
/// so scoring code can read them without checking for missing data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BaseStats {
    pub hp: u32,
    pub atk: u32,
    pub def: u32,
    pub spa: u32,
    pub spd: u32,
    pub spe: u32,
}

impl BaseStats {
    pub fn new(hp: u32, atk: u32, def: u32, spa: u32, spd: u32, spe: u32) -> Self {
        Self {
            hp,
            atk,
            def,
            spa,
            spd,
            spe,
        }
    }

    pub fn get(&self, stat: Stat) -> u32 {
        match stat {
            Stat::Atk => self.atk,
            Stat::Def => self.def,
            Stat::Spa => self.spa,
            Stat::Spd => self.spd,
            Stat::Spe => self.spe,
        }
    }
}

impl Default for BaseStats {
    fn default() -> Self {
        Self::new(
            NEUTRAL_STAT,
            NEUTRAL_STAT,
            NEUTRAL_STAT,
            NEUTRAL_STAT,
            NEUTRAL_STAT,
            NEUTRAL_STAT,
        )
    }
}

/// Stat stages (-6 to +6)
///
/// Used both for a combatant's current boosts and for the self-boosts a move
/// grants.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StatStages {
    pub atk: i8,
    pub def: i8,
    pub spa: i8,
    pub spd: i8,
    pub spe: i8,
}

impl StatStages {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, stat: Stat) -> i8 {
        match stat {
            Stat::Atk => self.atk,
            Stat::Def => self.def,
            Stat::Spa => self.spa,
            Stat::Spd => self.spd,
            Stat::Spe => self.spe,
        }
    }

    /// Sum of all positive stages
    pub fn total_positive(&self) -> i32 {
        Stat::ALL
            .iter()
            .map(|s| i32::from(self.get(*s).max(0)))
            .sum()
    }

    pub fn any_positive(&self) -> bool {
        self.total_positive() > 0
    }

    /// Multiplier a stage applies to a stat: (2 + n) / 2 when raised, 2 / (2 - n) when lowered
    pub fn multiplier(stage: i8) -> f32 {
        let stage = f32::from(stage.clamp(-6, 6));
        if stage >= 0.0 {
            (2.0 + stage) / 2.0
        } else {
            2.0 / (2.0 - stage)
        }
    }
}
