//! Approximate damage estimation
//!
//! Good enough to rank moves against each other and to flag likely knockouts.
//! Random rolls, crits, items, abilities and weather are ignored.

use foresight_battle::{Combatant, MoveCategory, MoveData, Stat, effectiveness};

const STAB: f32 = 1.5;

/// Result of estimating one attack
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DamageEstimate {
    /// Estimated HP removed, in absolute points
    pub damage: f32,
    /// Damage as a fraction (0.0-1.0) of the defender's current HP
    pub fraction: f32,
    pub is_ohko: bool,
    pub is_2hko: bool,
}

impl DamageEstimate {
    fn against(defender: &Combatant, damage: f32) -> Self {
        let hp = defender.current_hp();
        if hp <= 0.0 {
            return Self {
                damage,
                ..Default::default()
            };
        }
        Self {
            damage,
            fraction: (damage / hp).min(1.0),
            is_ohko: damage >= hp,
            is_2hko: damage >= hp / 2.0,
        }
    }
}

/// Estimate the damage `attacker` deals to `defender` with `mv`
pub fn estimate(attacker: &Combatant, defender: &Combatant, mv: &MoveData) -> DamageEstimate {
    if !mv.is_damaging() {
        return DamageEstimate::against(defender, 0.0);
    }

    let (atk_stat, def_stat) = match mv.category {
        MoveCategory::Special => (Stat::Spa, Stat::Spd),
        _ => (Stat::Atk, Stat::Def),
    };
    let attack = attacker.effective_stat(atk_stat).max(1.0);
    let defense = defender.effective_stat(def_stat).max(1.0);
    let level = f32::from(attacker.level.max(1));
    let power = mv.base_power.unwrap_or(0) as f32;

    let base = ((2.0 * level / 5.0).floor() + 2.0) * power * attack / defense;
    let base = (base / 50.0).floor() + 2.0;

    let stab = match mv.move_type {
        Some(t) if attacker.has_type(t) => STAB,
        _ => 1.0,
    };
    let type_factor = effectiveness(mv.move_type, &defender.types);

    let damage = (base * stab * type_factor).floor();
    DamageEstimate::against(defender, damage)
}

/// The strongest estimate among `moves`, or a zero estimate when none deal damage
pub fn best_case_for(attacker: &Combatant, defender: &Combatant, moves: &[MoveData]) -> DamageEstimate {
    moves
        .iter()
        .map(|mv| estimate(attacker, defender, mv))
        .max_by(|a, b| a.damage.total_cmp(&b.damage))
        .unwrap_or_else(|| DamageEstimate::against(defender, 0.0))
}

/// The move behind [`best_case_for`], if any deals damage
pub fn best_move<'a>(
    attacker: &Combatant,
    defender: &Combatant,
    moves: &'a [MoveData],
) -> Option<(&'a MoveData, DamageEstimate)> {
    moves
        .iter()
        .map(|mv| (mv, estimate(attacker, defender, mv)))
        .filter(|(_, est)| est.damage > 0.0)
        .max_by(|(_, a), (_, b)| a.damage.total_cmp(&b.damage))
}

#[cfg(test)]
mod tests {
    use super::*;
    use foresight_battle::{BaseStats, Status, Type};

    fn mon(types: Vec<Type>) -> Combatant {
        Combatant::new("Test", types)
    }

    #[test]
    fn test_status_move_deals_nothing() {
        let attacker = mon(vec![Type::Electric]);
        let defender = mon(vec![Type::Water]);
        let wave = MoveData::new("thunderwave", MoveCategory::Status, Some(Type::Electric))
            .with_status(Status::Paralysis);

        let est = estimate(&attacker, &defender, &wave);
        assert_eq!(est.damage, 0.0);
        assert!(!est.is_ohko);
        assert!(!est.is_2hko);
    }

    #[test]
    fn test_water_stab_into_fire_ground_is_ohko() {
        let attacker = mon(vec![Type::Water]);
        let defender = mon(vec![Type::Fire, Type::Ground]).with_hp_percent(100);
        let surf = MoveData::attack("surf", MoveCategory::Special, Type::Water, 90);

        let est = estimate(&attacker, &defender, &surf);
        // floor(floor(42 * 90 * 100 / 100) / 50) + 2 = 77, then 1.5 STAB and 4x
        assert_eq!(est.damage, 462.0);
        assert!(est.damage >= defender.current_hp());
        assert!(est.is_ohko);
        assert!(est.is_2hko);
        assert_eq!(est.fraction, 1.0);
    }

    #[test]
    fn test_ohko_against_exact_hp() {
        let attacker = mon(vec![Type::Water]);
        let mut defender = mon(vec![Type::Fire, Type::Ground]);
        defender.hp_current = 100;
        defender.hp_max = Some(100);
        let surf = MoveData::attack("surf", MoveCategory::Special, Type::Water, 90);

        assert!(estimate(&attacker, &defender, &surf).is_ohko);
    }

    #[test]
    fn test_stab_and_category_stats() {
        let attacker = mon(vec![Type::Fighting]).with_stats(BaseStats::new(100, 150, 100, 50, 100, 100));
        let defender = mon(vec![Type::Normal]);

        let physical = MoveData::attack("closecombat", MoveCategory::Physical, Type::Fighting, 120);
        let special = MoveData::attack("aurasphere", MoveCategory::Special, Type::Fighting, 120);
        let off_type = MoveData::attack("return", MoveCategory::Physical, Type::Normal, 120);

        let phys = estimate(&attacker, &defender, &physical).damage;
        let special_damage = estimate(&attacker, &defender, &special).damage;
        let plain = estimate(&attacker, &defender, &off_type).damage;
        assert!(phys > special_damage);
        assert!(phys > plain);
    }

    #[test]
    fn test_immune_defender_takes_nothing() {
        let attacker = mon(vec![Type::Normal]);
        let defender = mon(vec![Type::Ghost]);
        let tackle = MoveData::attack("tackle", MoveCategory::Physical, Type::Normal, 40);
        assert_eq!(estimate(&attacker, &defender, &tackle).damage, 0.0);
    }

    #[test]
    fn test_ohko_implies_2hko() {
        let attacker = mon(vec![Type::Fire]);
        let moves = [
            MoveData::attack("ember", MoveCategory::Special, Type::Fire, 40),
            MoveData::attack("flamethrower", MoveCategory::Special, Type::Fire, 90),
            MoveData::attack("overheat", MoveCategory::Special, Type::Fire, 130),
        ];
        for hp in [1, 10, 35, 60, 100] {
            let defender = mon(vec![Type::Grass]).with_hp_percent(hp);
            for mv in &moves {
                let est = estimate(&attacker, &defender, mv);
                assert!(est.damage >= 0.0);
                if est.is_ohko {
                    assert!(est.is_2hko);
                }
            }
        }
    }

    #[test]
    fn test_fainted_defender_has_no_ko_flags() {
        let attacker = mon(vec![Type::Fire]);
        let mut defender = mon(vec![Type::Grass]);
        defender.fainted = true;
        let flamethrower = MoveData::attack("flamethrower", MoveCategory::Special, Type::Fire, 90);

        let est = estimate(&attacker, &defender, &flamethrower);
        assert!(est.damage > 0.0);
        assert!(!est.is_ohko);
        assert!(!est.is_2hko);
    }

    #[test]
    fn test_best_case_picks_strongest() {
        let attacker = mon(vec![Type::Electric]);
        let defender = mon(vec![Type::Water, Type::Flying]);
        let moves = vec![
            MoveData::attack("thunderbolt", MoveCategory::Special, Type::Electric, 90),
            MoveData::attack("quickattack", MoveCategory::Physical, Type::Normal, 40),
        ];

        let best = best_case_for(&attacker, &defender, &moves);
        assert_eq!(best, estimate(&attacker, &defender, &moves[0]));
        assert!(best.is_ohko);

        let (mv, _) = best_move(&attacker, &defender, &moves).unwrap();
        assert_eq!(mv.id, "thunderbolt");

        let none = best_case_for(&attacker, &defender, &[]);
        assert_eq!(none.damage, 0.0);
        assert!(best_move(&attacker, &defender, &[]).is_none());
    }
}
