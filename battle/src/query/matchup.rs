//! Type matchup helpers for decision making

use crate::types::{Type, effectiveness};

/// Check if defender is weak (>1x effectiveness) to any of the attacking types
pub fn is_weak_to_any(defender_types: &[Type], attacking_types: &[Type]) -> bool {
    attacking_types
        .iter()
        .any(|t| t.effectiveness_multi(defender_types) > 1.0)
}

/// Check if defender takes less than neutral damage from an attack type.
/// Typeless attacks are never resisted.
pub fn resists(defender_types: &[Type], attacking_type: Option<Type>) -> bool {
    effectiveness(attacking_type, defender_types) < 1.0
}

/// Check if defender resists (<1x effectiveness) all of the attacking types
pub fn resists_all(defender_types: &[Type], attacking_types: &[Type]) -> bool {
    if attacking_types.is_empty() {
        return false;
    }
    attacking_types
        .iter()
        .all(|t| resists(defender_types, Some(*t)))
}

pub fn is_immune_to(defender_types: &[Type], attacking_type: Type) -> bool {
    attacking_type.effectiveness_multi(defender_types) == 0.0
}

/// Whether a move of `move_type` lands at least neutral damage on a defender
/// that resists (or is immune to) the attacker's primary type.
pub fn is_coverage_hit(
    attacker_primary: Option<Type>,
    move_type: Option<Type>,
    defender_types: &[Type],
) -> bool {
    let Some(primary) = attacker_primary else {
        return false;
    };
    if move_type == Some(primary) {
        return false;
    }
    primary.effectiveness_multi(defender_types) < 1.0
        && effectiveness(move_type, defender_types) >= 1.0
}
