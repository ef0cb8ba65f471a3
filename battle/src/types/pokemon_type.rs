//! Elemental types and the attack-vs-defender effectiveness table

/// Pokemon types (18 types as of Gen 6+)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Type {
    Normal,
    Fire,
    Water,
    Electric,
    Grass,
    Ice,
    Fighting,
    Poison,
    Ground,
    Flying,
    Psychic,
    Bug,
    Rock,
    Ghost,
    Dragon,
    Dark,
    Steel,
    Fairy,
}

impl Type {
    pub const ALL: [Type; 18] = [
        Type::Normal,
        Type::Fire,
        Type::Water,
        Type::Electric,
        Type::Grass,
        Type::Ice,
        Type::Fighting,
        Type::Poison,
        Type::Ground,
        Type::Flying,
        Type::Psychic,
        Type::Bug,
        Type::Rock,
        Type::Ghost,
        Type::Dragon,
        Type::Dark,
        Type::Steel,
        Type::Fairy,
    ];

    /// Multiplier of this attacking type against a single defending type
    pub fn effectiveness(&self, defender: Type) -> f32 {
        TYPE_CHART[*self as usize][defender as usize]
    }

    /// Product of the per-type multipliers against every defending type
    pub fn effectiveness_multi(&self, defenders: &[Type]) -> f32 {
        defenders
            .iter()
            .map(|t| self.effectiveness(*t))
            .product()
    }

    /// Parse a type name, ignoring case ("fire", "Fire", "FIRE")
    pub fn from_protocol(s: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Type::Normal => "Normal",
            Type::Fire => "Fire",
            Type::Water => "Water",
            Type::Electric => "Electric",
            Type::Grass => "Grass",
            Type::Ice => "Ice",
            Type::Fighting => "Fighting",
            Type::Poison => "Poison",
            Type::Ground => "Ground",
            Type::Flying => "Flying",
            Type::Psychic => "Psychic",
            Type::Bug => "Bug",
            Type::Rock => "Rock",
            Type::Ghost => "Ghost",
            Type::Dragon => "Dragon",
            Type::Dark => "Dark",
            Type::Steel => "Steel",
            Type::Fairy => "Fairy",
        }
    }
}

impl std::fmt::Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Damage multiplier of an attack against a defender's type list.
///
/// An attack with no known type (typeless moves, unrecognised type names) is
/// neutral against everything. An empty defender list is also neutral. The
/// result is always one of 0, 0.25, 0.5, 1, 2 or 4 for one or two defending
/// types.
pub fn effectiveness(attack: Option<Type>, defenders: &[Type]) -> f32 {
    match attack {
        Some(attack) => attack.effectiveness_multi(defenders),
        None => 1.0,
    }
}

/// Non-neutral matchups for one attacking type
struct Matchup {
    attack: Type,
    strong: &'static [Type],
    weak: &'static [Type],
    immune: &'static [Type],
}

impl Matchup {
    const fn new(
        attack: Type,
        strong: &'static [Type],
        weak: &'static [Type],
        immune: &'static [Type],
    ) -> Self {
        Self {
            attack,
            strong,
            weak,
            immune,
        }
    }
}

/// Super effective, not very effective and no-effect lists per attacking type
/// (Gen 6+). Anything unlisted is neutral.
#[rustfmt::skip]
const MATCHUPS: [Matchup; 18] = {
    use Type::*;
    [
        //           attacking super effective against                      not very effective against                                   no effect on
        Matchup::new(Normal,   &[],                                         &[Rock, Steel],                                              &[Ghost]),
        Matchup::new(Fire,     &[Grass, Ice, Bug, Steel],                   &[Fire, Water, Rock, Dragon],                                &[]),
        Matchup::new(Water,    &[Fire, Ground, Rock],                       &[Water, Grass, Dragon],                                     &[]),
        Matchup::new(Electric, &[Water, Flying],                            &[Electric, Grass, Dragon],                                  &[Ground]),
        Matchup::new(Grass,    &[Water, Ground, Rock],                      &[Fire, Grass, Poison, Flying, Bug, Dragon, Steel],          &[]),
        Matchup::new(Ice,      &[Grass, Ground, Flying, Dragon],            &[Fire, Water, Ice, Steel],                                  &[]),
        Matchup::new(Fighting, &[Normal, Ice, Rock, Dark, Steel],           &[Poison, Flying, Psychic, Bug, Fairy],                      &[Ghost]),
        Matchup::new(Poison,   &[Grass, Fairy],                             &[Poison, Ground, Rock, Ghost],                              &[Steel]),
        Matchup::new(Ground,   &[Fire, Electric, Poison, Rock, Steel],      &[Grass, Bug],                                               &[Flying]),
        Matchup::new(Flying,   &[Grass, Fighting, Bug],                     &[Electric, Rock, Steel],                                    &[]),
        Matchup::new(Psychic,  &[Fighting, Poison],                         &[Psychic, Steel],                                           &[Dark]),
        Matchup::new(Bug,      &[Grass, Psychic, Dark],                     &[Fire, Fighting, Poison, Flying, Ghost, Steel, Fairy],      &[]),
        Matchup::new(Rock,     &[Fire, Ice, Flying, Bug],                   &[Fighting, Ground, Steel],                                  &[]),
        Matchup::new(Ghost,    &[Psychic, Ghost],                           &[Dark],                                                     &[Normal]),
        Matchup::new(Dragon,   &[Dragon],                                   &[Steel],                                                    &[Fairy]),
        Matchup::new(Dark,     &[Psychic, Ghost],                           &[Fighting, Dark, Fairy],                                    &[]),
        Matchup::new(Steel,    &[Ice, Rock, Fairy],                         &[Fire, Water, Electric, Steel],                             &[]),
        Matchup::new(Fairy,    &[Fighting, Dragon, Dark],                   &[Fire, Poison, Steel],                                      &[]),
    ]
};

/// 18x18 effectiveness table, expanded from the matchup lists at compile time.
///
/// Row = attacking type, column = defending type, both in [`Type::ALL`] order.
pub static TYPE_CHART: [[f32; 18]; 18] = expand(&MATCHUPS);

const fn expand(matchups: &[Matchup]) -> [[f32; 18]; 18] {
    let mut chart = [[1.0; 18]; 18];
    let mut i = 0;
    while i < matchups.len() {
        let row = &mut chart[matchups[i].attack as usize];
        fill(row, matchups[i].strong, 2.0);
        fill(row, matchups[i].weak, 0.5);
        fill(row, matchups[i].immune, 0.0);
        i += 1;
    }
    chart
}

const fn fill(row: &mut [f32; 18], defenders: &[Type], factor: f32) {
    let mut j = 0;
    while j < defenders.len() {
        row[defenders[j] as usize] = factor;
        j += 1;
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use serde::de::{Deserializer, Error};
    use serde::{Deserialize, Serialize, Serializer};

    use super::Type;

    impl Serialize for Type {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_str(self.as_str())
        }
    }

    impl<'de> Deserialize<'de> for Type {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let s = String::deserialize(deserializer)?;
            Type::from_protocol(&s).ok_or_else(|| D::Error::custom(format!("unknown type `{s}`")))
        }
    }

    /// Deserialize a type list, dropping names that are not one of the 18 types
    pub fn lenient_types<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Type>, D::Error> {
        let names = Vec::<String>::deserialize(deserializer)?;
        Ok(names.iter().filter_map(|s| Type::from_protocol(s)).collect())
    }

    /// Deserialize an optional type, mapping unknown names to `None`
    pub fn lenient_type<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Type>, D::Error> {
        let name = Option::<String>::deserialize(deserializer)?;
        Ok(name.and_then(|s| Type::from_protocol(&s)))
    }
}

#[cfg(feature = "serde")]
pub(crate) use serde_impl::{lenient_type, lenient_types};
