//! Per-action desirability scores

use foresight_battle::query::{is_coverage_hit, is_immune_to, resists};
use foresight_battle::{
    Action, BattleSnapshot, Combatant, MoveCategory, MoveData, Player, SideState, Stat, Status,
};

use crate::config::EngineConfig;
use crate::damage::{self, best_case_for, best_move};
use crate::repetition::RepetitionTracker;
use crate::situation::{
    GamePhase, GameState, PredictedAction, analyze_game_state, evaluate_hazard_pressure,
    predict_opponent_actions, signal,
};

/// Lowest score a valid action can receive
pub const MIN_SCORE: f32 = 1.0;

/// Team preview picks beat everything else offered alongside them
pub const TEAM_PICK_SCORE: f32 = 10_000.0;
pub const PASS_SCORE: f32 = 5.0;

// Damaging moves
const KO_BONUS: f32 = 150.0;
const TWO_HIT_KO_BONUS: f32 = 60.0;
const COVERAGE_BONUS: f32 = 20.0;
const PREDICTED_SWITCH_BONUS: f32 = 40.0;
const PRIORITY_BONUS: f32 = 30.0;
const PRIORITY_KO_BONUS: f32 = 30.0;

// Status moves
const STATUS_BASE: f32 = 5.0;
const HAZARD_BONUS: f32 = 60.0;
const HAZARD_PRESSURE_SCALE: f32 = 30.0;
const SETUP_BONUS: f32 = 60.0;
const MAX_USEFUL_BOOSTS: i32 = 6;
const HEAL_BONUS: f32 = 40.0;
const HEAL_THRESHOLD: f32 = 0.6;

// Switches
const SWITCH_HEALTH_WEIGHT: f32 = 40.0;
const SWITCH_STATUS_PENALTY: f32 = 15.0;
const KO_PREVENTION_BONUS: f32 = 80.0;
const COUNTER_KO_BONUS: f32 = 50.0;
const COUNTER_2HKO_BONUS: f32 = 20.0;
const EMERGENCY_SWITCH_BONUS: f32 = 30.0;
const EMERGENCY_HP: f32 = 0.3;
const SPEED_BONUS: f32 = 15.0;
const WIN_CONDITION_BONUS: f32 = 25.0;
const SWITCH_HAZARD_FACTOR: f32 = 0.5;
const LATE_SWITCH_PENALTY: f32 = 20.0;

/// Base power assumed for an opponent's unrevealed STAB attacks
const ASSUMED_STAB_POWER: u32 = 80;

/// Scores actions against one snapshot.
///
/// Game state and hazard pressure are analyzed once on construction and
/// shared by every action scored afterwards.
#[derive(Debug)]
pub struct ActionScorer<'a> {
    snapshot: &'a BattleSnapshot,
    side: Player,
    game: GameState,
    /// Hazards we have laid on the opponent's side
    offensive_hazards: f32,
    /// Hazards waiting on our own side
    defensive_hazards: f32,
    tracker: &'a RepetitionTracker,
}

impl<'a> ActionScorer<'a> {
    pub fn new(snapshot: &'a BattleSnapshot, config: &EngineConfig, tracker: &'a RepetitionTracker) -> Self {
        let side = snapshot.perspective;
        Self {
            snapshot,
            side,
            game: analyze_game_state(snapshot, side, config),
            offensive_hazards: evaluate_hazard_pressure(snapshot, side, &config.hazard_weights),
            defensive_hazards: evaluate_hazard_pressure(
                snapshot,
                side.opponent(),
                &config.hazard_weights,
            ),
            tracker,
        }
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn offensive_hazards(&self) -> f32 {
        self.offensive_hazards
    }

    pub fn defensive_hazards(&self) -> f32 {
        self.defensive_hazards
    }

    /// Score one action taken by `acting` against `opponent`.
    ///
    /// Never below [`MIN_SCORE`], except for invalid switch targets which
    /// score 0.
    pub fn score(&self, action: &Action, acting: Option<&Combatant>, opponent: Option<&Combatant>) -> f32 {
        match action {
            Action::TeamPick { .. } => TEAM_PICK_SCORE,
            Action::Pass => PASS_SCORE,
            Action::Move { .. } => {
                let Some(acting) = acting else {
                    return MIN_SCORE;
                };
                match resolve_move(action, acting) {
                    Some(mv) => self.score_move(mv, acting, opponent).max(MIN_SCORE),
                    None => MIN_SCORE,
                }
            }
            Action::Switch { index, name } => self.score_switch(*index, name, acting, opponent),
        }
    }

    fn score_move(&self, mv: &MoveData, acting: &Combatant, opponent: Option<&Combatant>) -> f32 {
        let score = if mv.is_damaging() {
            match opponent {
                Some(opponent) => self.score_attack(mv, acting, opponent),
                None => 0.0,
            }
        } else {
            self.score_status(mv, acting, opponent)
        };
        score * self.tracker.penalty_for(&mv.id)
    }

    fn score_attack(&self, mv: &MoveData, acting: &Combatant, opponent: &Combatant) -> f32 {
        let est = damage::estimate(acting, opponent, mv);
        if est.damage <= 0.0 {
            return 0.0;
        }

        let mut score = est.fraction * 100.0;
        if est.is_ohko {
            score += KO_BONUS;
        } else if est.is_2hko {
            score += TWO_HIT_KO_BONUS;
        }

        if is_coverage_hit(acting.primary_type(), mv.move_type, &opponent.types) {
            score += COVERAGE_BONUS;
        }

        let recent = &self.snapshot.side(self.side.opponent()).recent_moves;
        let predictions = predict_opponent_actions(opponent, recent);
        score += PREDICTED_SWITCH_BONUS * signal(&predictions, PredictedAction::Switch);

        // Revenge kills: priority matters once the game is closing or we are hurt
        if mv.priority > 0 && (self.game.phase.is_closing() || acting.hp_fraction() < 0.5) {
            score += PRIORITY_BONUS;
            if est.is_ohko {
                score += PRIORITY_KO_BONUS;
            }
        }

        score * mv.hit_chance()
    }

    fn score_status(&self, mv: &MoveData, acting: &Combatant, opponent: Option<&Combatant>) -> f32 {
        let mut score = STATUS_BASE;
        let hp = acting.hp_fraction();

        if mv.sets_hazard()
            && let Some(condition) = mv.sets_condition
        {
            let their_side = self.snapshot.side(self.side.opponent());
            let room = their_side.condition_layers(condition) < condition.max_layers();
            // Hazards only pay off while they still have Pokemon to switch in
            if room && their_side.alive_count() > 1 {
                score += HAZARD_BONUS / (1.0 + self.offensive_hazards / HAZARD_PRESSURE_SCALE);
            }
        }

        if mv.is_setup() {
            let boosted = acting.boosts.total_positive();
            let base = if self.game.phase == GamePhase::Early && hp > 0.8 {
                SETUP_BONUS
            } else if hp > 0.8 {
                SETUP_BONUS * 0.5
            } else if hp > 0.5 {
                SETUP_BONUS * 0.25
            } else {
                0.0
            };
            let headroom = (MAX_USEFUL_BOOSTS - boosted).max(0) as f32 / MAX_USEFUL_BOOSTS as f32;
            score += base * headroom;
        }

        if let (Some(status), Some(target)) = (mv.inflicts, opponent)
            && target.is_alive()
            && target.status.is_none()
            && !status_immune(status, mv, target)
        {
            score += status_value(status) * mv.hit_chance();
        }

        if let Some(heal) = mv.heal.filter(|h| *h > 0.0)
            && hp < HEAL_THRESHOLD
        {
            let restored = heal.min(1.0 - hp);
            score += HEAL_BONUS + restored * 100.0;
        }

        score
    }

    fn score_switch(
        &self,
        index: usize,
        name: &str,
        acting: Option<&Combatant>,
        opponent: Option<&Combatant>,
    ) -> f32 {
        let Some((index, target)) = switch_target(self.snapshot.side(self.side), index, name) else {
            return 0.0;
        };
        let is_current = acting.is_some_and(|a| std::ptr::eq(a, target) || a.name == target.name);
        if !target.can_switch_to() || is_current {
            return 0.0;
        }

        let mut score = target.hp_fraction() * SWITCH_HEALTH_WEIGHT;
        if target.status.is_some() {
            score -= SWITCH_STATUS_PENALTY;
        }

        if let Some(opponent) = opponent {
            let threats = threat_moves(opponent);
            if let Some(active) = acting
                && let Some((mv, est)) = best_move(opponent, active, &threats)
                && est.is_ohko
                && resists(&target.types, mv.move_type)
            {
                score += KO_PREVENTION_BONUS;
            }

            let counter = best_case_for(target, opponent, &target.moves);
            if counter.is_ohko {
                score += COUNTER_KO_BONUS;
            } else if counter.is_2hko {
                score += COUNTER_2HKO_BONUS;
            }

            if target.effective_stat(Stat::Spe) > opponent.effective_stat(Stat::Spe) {
                score += SPEED_BONUS;
            }
        }

        if acting.is_some_and(|a| a.hp_fraction() < EMERGENCY_HP) {
            score += EMERGENCY_SWITCH_BONUS;
        }
        if self.game.is_win_condition(index) {
            score += WIN_CONDITION_BONUS;
        }

        score -= self.defensive_hazards * SWITCH_HAZARD_FACTOR;
        if self.game.phase.is_closing() {
            score -= LATE_SWITCH_PENALTY;
        }

        (score * self.tracker.penalty_for(&switch_key(target))).max(MIN_SCORE)
    }
}

/// Key an action is recorded under in the repetition history.
///
/// Resolves the action the way scoring does, so a slot-only move is keyed by
/// the move in that slot and a switch by the roster name of its target.
/// Team picks and passes are not tracked.
pub fn repetition_key(action: &Action, snapshot: &BattleSnapshot, slot: usize) -> Option<String> {
    let key = match action {
        Action::Move { .. } => snapshot
            .my_active(slot)
            .and_then(|acting| resolve_move(action, acting))
            .map(|mv| mv.id.clone())
            .or_else(|| action.identifier()),
        Action::Switch { index, name } => switch_target(snapshot.me(), *index, name)
            .map(|(_, target)| switch_key(target))
            .or_else(|| action.identifier()),
        Action::TeamPick { .. } | Action::Pass => None,
    };
    key.filter(|k| !k.is_empty())
}

fn switch_key(target: &Combatant) -> String {
    format!("switch-{}", target.name)
}

/// Roster entry a switch refers to, with its party index.
///
/// The entry at `index` wins when `name` matches its nickname or species (or
/// is blank); otherwise the roster is searched by name.
pub fn switch_target<'s>(side: &'s SideState, index: usize, name: &str) -> Option<(usize, &'s Combatant)> {
    if let Some(mon) = side
        .get_pokemon(index)
        .filter(|m| name.is_empty() || m.name == name || m.species == name)
    {
        return Some((index, mon));
    }
    let found = side.find_pokemon(name)?;
    side.get_pokemon(found).map(|mon| (found, mon))
}

/// The move a `Move` action refers to, looked up by id (or by slot when the
/// id is blank)
pub fn resolve_move<'c>(action: &Action, acting: &'c Combatant) -> Option<&'c MoveData> {
    match action {
        Action::Move { slot, id, .. } if id.is_empty() => acting.moves.get(*slot),
        Action::Move { id, .. } => acting.find_move(id),
        _ => None,
    }
}

/// Ranking of ailments: incapacitating ones first
fn status_value(status: Status) -> f32 {
    match status {
        Status::Sleep => 50.0,
        Status::Paralysis => 45.0,
        Status::Freeze => 40.0,
        Status::BadPoison => 35.0,
        Status::Burn => 30.0,
        Status::Poison => 25.0,
    }
}

fn status_immune(status: Status, mv: &MoveData, target: &Combatant) -> bool {
    use foresight_battle::Type;

    if mv.move_type.is_some_and(|t| is_immune_to(&target.types, t)) {
        return true;
    }
    match status {
        Status::Burn => target.has_type(Type::Fire),
        Status::Paralysis => target.has_type(Type::Electric),
        Status::Poison | Status::BadPoison => {
            target.has_type(Type::Poison) || target.has_type(Type::Steel)
        }
        Status::Freeze => target.has_type(Type::Ice),
        Status::Sleep => false,
    }
}

/// Attacks the opponent is known or assumed to have.
///
/// Revealed damaging moves when there are any, otherwise one STAB attack per
/// type using their stronger attacking stat.
fn threat_moves(opponent: &Combatant) -> Vec<MoveData> {
    let known: Vec<MoveData> = opponent
        .moves
        .iter()
        .filter(|m| m.is_damaging())
        .cloned()
        .collect();
    if !known.is_empty() {
        return known;
    }

    let category = if opponent.stats.atk >= opponent.stats.spa {
        MoveCategory::Physical
    } else {
        MoveCategory::Special
    };
    opponent
        .types
        .iter()
        .map(|t| {
            let id = format!("{}stab", t.as_str().to_lowercase());
            MoveData::attack(id, category, *t, ASSUMED_STAB_POWER)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use foresight_battle::{SideCondition, SideState, StatStages, Type};

    fn side(player: Player, pokemon: Vec<Combatant>) -> SideState {
        let mut side = SideState::new(player, pokemon);
        side.set_active(0);
        side
    }

    fn battle(mine: Vec<Combatant>, theirs: Vec<Combatant>) -> BattleSnapshot {
        BattleSnapshot::new(Player::P1, side(Player::P1, mine), side(Player::P2, theirs))
    }

    fn filler(n: usize) -> Vec<Combatant> {
        (0..n)
            .map(|i| Combatant::new(format!("Filler{i}"), vec![Type::Normal]))
            .collect()
    }

    fn with_filler(lead: Combatant, n: usize) -> Vec<Combatant> {
        let mut team = vec![lead];
        team.extend(filler(n));
        team
    }

    fn score_of(snapshot: &BattleSnapshot, tracker: &RepetitionTracker, action: &Action) -> f32 {
        let config = EngineConfig::default();
        let scorer = ActionScorer::new(snapshot, &config, tracker);
        scorer.score(action, snapshot.my_active(0), snapshot.opposing_active(0))
    }

    fn attacker() -> Combatant {
        Combatant::new("Starmie", vec![Type::Water]).with_moves(vec![
            MoveData::attack("surf", MoveCategory::Special, Type::Water, 90),
            MoveData::attack("thunderbolt", MoveCategory::Special, Type::Electric, 90),
            MoveData::attack("hydropump", MoveCategory::Special, Type::Water, 110).with_accuracy(80),
            MoveData::attack("tackle", MoveCategory::Physical, Type::Normal, 40),
        ])
    }

    #[test]
    fn test_team_pick_dominates() {
        let snapshot = battle(with_filler(attacker(), 5), filler(6));
        let tracker = RepetitionTracker::default();
        let pick = score_of(&snapshot, &tracker, &Action::TeamPick { order: vec![0] });
        let surf = score_of(&snapshot, &tracker, &Action::move_slot(0, "surf"));
        assert_eq!(pick, TEAM_PICK_SCORE);
        assert!(pick > surf * 10.0);
        assert_eq!(score_of(&snapshot, &tracker, &Action::Pass), PASS_SCORE);
    }

    #[test]
    fn test_super_effective_ko_beats_resisted_move() {
        let target = Combatant::new("Charizard", vec![Type::Fire, Type::Flying]).with_hp_percent(60);
        let snapshot = battle(with_filler(attacker(), 5), with_filler(target, 5));
        let tracker = RepetitionTracker::default();

        let surf = score_of(&snapshot, &tracker, &Action::move_slot(0, "surf"));
        let tackle = score_of(&snapshot, &tracker, &Action::move_slot(3, "tackle"));
        assert!(surf > tackle);
        assert!(surf >= KO_BONUS);
    }

    #[test]
    fn test_low_accuracy_is_scaled_down() {
        // Bulky target so neither move KOs
        let target = Combatant::new("Snorlax", vec![Type::Normal])
            .with_stats(foresight_battle::BaseStats::new(255, 100, 200, 100, 250, 30));
        let snapshot = battle(with_filler(attacker(), 5), with_filler(target, 5));
        let tracker = RepetitionTracker::default();

        let surf = score_of(&snapshot, &tracker, &Action::move_slot(0, "surf"));
        let pump = score_of(&snapshot, &tracker, &Action::move_slot(2, "hydropump"));
        let raw_pump_ratio = 110.0 / 90.0;
        assert!(pump < surf * raw_pump_ratio);
    }

    #[test]
    fn test_repetition_penalty_applies_to_moves() {
        let snapshot = battle(with_filler(attacker(), 5), filler(6));
        let mut tracker = RepetitionTracker::default();
        let fresh = score_of(&snapshot, &tracker, &Action::move_slot(0, "surf"));

        tracker.update("surf");
        let once = score_of(&snapshot, &tracker, &Action::move_slot(0, "surf"));
        assert!((once - fresh * 0.5).abs() < 1e-3 || once == MIN_SCORE);
        assert!(once < fresh);
    }

    #[test]
    fn test_immune_target_scores_floor() {
        let ghost = Combatant::new("Gengar", vec![Type::Ghost, Type::Poison]);
        let snapshot = battle(with_filler(attacker(), 5), with_filler(ghost, 5));
        let tracker = RepetitionTracker::default();
        assert_eq!(
            score_of(&snapshot, &tracker, &Action::move_slot(3, "tackle")),
            MIN_SCORE
        );
    }

    #[test]
    fn test_unknown_move_scores_floor() {
        let snapshot = battle(with_filler(attacker(), 5), filler(6));
        let tracker = RepetitionTracker::default();
        assert_eq!(
            score_of(&snapshot, &tracker, &Action::move_slot(3, "hyperbeam")),
            MIN_SCORE
        );
    }

    #[test]
    fn test_coverage_bonus() {
        // Fire attacker vs Water target: Grass coverage should clearly beat Fire STAB
        let fire = Combatant::new("Arcanine", vec![Type::Fire]).with_moves(vec![
            MoveData::attack("flareblitz", MoveCategory::Physical, Type::Fire, 120),
            MoveData::attack("solarblade", MoveCategory::Physical, Type::Grass, 60),
        ]);
        let water = Combatant::new("Milotic", vec![Type::Water])
            .with_stats(foresight_battle::BaseStats::new(255, 100, 250, 100, 250, 80));
        let snapshot = battle(with_filler(fire, 5), with_filler(water, 5));
        let tracker = RepetitionTracker::default();

        let stab = score_of(&snapshot, &tracker, &Action::move_slot(0, "flareblitz"));
        let coverage = score_of(&snapshot, &tracker, &Action::move_slot(1, "solarblade"));
        assert!(coverage > stab + COVERAGE_BONUS * 0.5);
    }

    #[test]
    fn test_priority_bonus_when_hurt() {
        let quick = |hp: u32| {
            Combatant::new("Scizor", vec![Type::Bug, Type::Steel])
                .with_hp_percent(hp)
                .with_moves(vec![
                    MoveData::attack("bulletpunch", MoveCategory::Physical, Type::Steel, 40)
                        .with_priority(1),
                ])
        };
        let target = || {
            Combatant::new("Blissey", vec![Type::Normal])
                .with_stats(foresight_battle::BaseStats::new(255, 10, 250, 75, 135, 55))
        };
        let tracker = RepetitionTracker::default();

        let healthy = battle(with_filler(quick(100), 5), with_filler(target(), 5));
        let hurt = battle(with_filler(quick(40), 5), with_filler(target(), 5));
        let healthy_score = score_of(&healthy, &tracker, &Action::move_slot(0, "bulletpunch"));
        let hurt_score = score_of(&hurt, &tracker, &Action::move_slot(0, "bulletpunch"));
        assert!((hurt_score - healthy_score - PRIORITY_BONUS).abs() < 1e-3);
    }

    #[test]
    fn test_hazard_value_drops_with_existing_pressure() {
        let setter = Combatant::new("Skarmory", vec![Type::Steel, Type::Flying]).with_moves(vec![
            MoveData::new("spikes", MoveCategory::Status, Some(Type::Ground))
                .with_condition(SideCondition::Spikes),
        ]);
        let tracker = RepetitionTracker::default();

        let clean = battle(with_filler(setter.clone(), 5), filler(6));
        let mut layered = clean.clone();
        layered.sides[1].add_condition(SideCondition::StealthRock);
        layered.sides[1].add_condition(SideCondition::Spikes);
        let mut full = clean.clone();
        for _ in 0..3 {
            full.sides[1].add_condition(SideCondition::Spikes);
        }

        let fresh = score_of(&clean, &tracker, &Action::move_slot(0, "spikes"));
        let reduced = score_of(&layered, &tracker, &Action::move_slot(0, "spikes"));
        let maxed = score_of(&full, &tracker, &Action::move_slot(0, "spikes"));
        assert_eq!(fresh, STATUS_BASE + HAZARD_BONUS);
        assert!(reduced < fresh);
        assert!(reduced > maxed);
        assert_eq!(maxed, STATUS_BASE);
    }

    #[test]
    fn test_setup_favored_early_and_healthy() {
        let dancer = |hp: u32| {
            Combatant::new("Volcarona", vec![Type::Bug, Type::Fire])
                .with_hp_percent(hp)
                .with_moves(vec![
                    MoveData::new("quiverdance", MoveCategory::Status, Some(Type::Bug)).with_boosts(
                        StatStages {
                            spa: 1,
                            spd: 1,
                            spe: 1,
                            ..Default::default()
                        },
                    ),
                ])
        };
        let tracker = RepetitionTracker::default();

        let early = battle(with_filler(dancer(100), 5), filler(6));
        let hurt = battle(with_filler(dancer(40), 5), filler(6));
        let late = battle(with_filler(dancer(100), 1), filler(6));

        let early_score = score_of(&early, &tracker, &Action::move_slot(0, "quiverdance"));
        assert_eq!(early_score, STATUS_BASE + SETUP_BONUS);
        assert_eq!(
            score_of(&hurt, &tracker, &Action::move_slot(0, "quiverdance")),
            STATUS_BASE
        );
        assert!(score_of(&late, &tracker, &Action::move_slot(0, "quiverdance")) < early_score);
    }

    #[test]
    fn test_status_ailments_ranked_and_not_stacked() {
        let user = Combatant::new("Breloom", vec![Type::Grass, Type::Fighting]).with_moves(vec![
            MoveData::new("spore", MoveCategory::Status, Some(Type::Grass)).with_status(Status::Sleep),
            MoveData::new("willowisp", MoveCategory::Status, Some(Type::Fire))
                .with_status(Status::Burn)
                .with_accuracy(85),
            MoveData::new("thunderwave", MoveCategory::Status, Some(Type::Electric))
                .with_status(Status::Paralysis)
                .with_accuracy(90),
        ]);
        let tracker = RepetitionTracker::default();

        let snapshot = battle(with_filler(user.clone(), 5), filler(6));
        let spore = score_of(&snapshot, &tracker, &Action::move_slot(0, "spore"));
        let wisp = score_of(&snapshot, &tracker, &Action::move_slot(1, "willowisp"));
        assert!(spore > wisp);

        let mut statused = snapshot.clone();
        statused.sides[1].pokemon[0].status = Some(Status::Poison);
        assert_eq!(
            score_of(&statused, &tracker, &Action::move_slot(0, "spore")),
            STATUS_BASE
        );

        let ground = Combatant::new("Garchomp", vec![Type::Dragon, Type::Ground]);
        let immune = battle(with_filler(user, 5), with_filler(ground, 5));
        assert_eq!(
            score_of(&immune, &tracker, &Action::move_slot(2, "thunderwave")),
            STATUS_BASE
        );
    }

    #[test]
    fn test_recovery_only_when_hurt() {
        let healer = |hp: u32| {
            Combatant::new("Slowbro", vec![Type::Water, Type::Psychic])
                .with_hp_percent(hp)
                .with_moves(vec![
                    MoveData::new("slackoff", MoveCategory::Status, Some(Type::Normal)).with_heal(0.5),
                ])
        };
        let tracker = RepetitionTracker::default();

        let healthy = battle(with_filler(healer(90), 5), filler(6));
        let hurt = battle(with_filler(healer(30), 5), filler(6));
        assert_eq!(
            score_of(&healthy, &tracker, &Action::move_slot(0, "slackoff")),
            STATUS_BASE
        );
        assert!(score_of(&hurt, &tracker, &Action::move_slot(0, "slackoff")) > STATUS_BASE + HEAL_BONUS);
    }

    #[test]
    fn test_invalid_switch_targets_score_zero() {
        let mut fainted = Combatant::new("Fainted", vec![Type::Water]);
        fainted.fainted = true;
        fainted.hp_current = 0;
        let team = vec![attacker(), fainted, Combatant::new("Bench", vec![Type::Grass])];
        let snapshot = battle(team, filler(6));
        let tracker = RepetitionTracker::default();

        assert_eq!(score_of(&snapshot, &tracker, &Action::switch(1, "Fainted")), 0.0);
        assert_eq!(score_of(&snapshot, &tracker, &Action::switch(0, "Starmie")), 0.0);
        assert_eq!(score_of(&snapshot, &tracker, &Action::switch(9, "Nobody")), 0.0);
        assert!(score_of(&snapshot, &tracker, &Action::switch(2, "Bench")) >= MIN_SCORE);
    }

    #[test]
    fn test_switch_into_resist_beats_neutral() {
        // Active Grass type faces a Fire attacker that OHKOs it
        let mut lead = Combatant::new("Venusaur", vec![Type::Grass, Type::Poison]).with_hp_percent(30);
        lead.moves = vec![MoveData::attack("gigadrain", MoveCategory::Special, Type::Grass, 75)];
        let resist = Combatant::new("Blastoise", vec![Type::Water]);
        let neutral = Combatant::new("Snorlax", vec![Type::Normal]);
        let threat = Combatant::new("Arcanine", vec![Type::Fire])
            .with_moves(vec![MoveData::attack("flareblitz", MoveCategory::Physical, Type::Fire, 120)]);

        let snapshot = battle(vec![lead, resist, neutral], with_filler(threat, 5));
        let tracker = RepetitionTracker::default();

        let into_resist = score_of(&snapshot, &tracker, &Action::switch(1, "Blastoise"));
        let into_neutral = score_of(&snapshot, &tracker, &Action::switch(2, "Snorlax"));
        assert!(into_resist >= into_neutral + KO_PREVENTION_BONUS - 1e-3);
    }

    #[test]
    fn test_switch_penalized_by_hazards_and_status() {
        let lead = attacker();
        let bench = Combatant::new("Bench", vec![Type::Grass]);
        let clean = battle(vec![lead, bench], filler(6));
        let tracker = RepetitionTracker::default();
        let base = score_of(&clean, &tracker, &Action::switch(1, "Bench"));

        let mut hazards = clean.clone();
        hazards.sides[0].add_condition(SideCondition::StealthRock);
        let with_rocks = score_of(&hazards, &tracker, &Action::switch(1, "Bench"));
        assert!((base - with_rocks - 30.0 * SWITCH_HAZARD_FACTOR).abs() < 1e-3);

        let mut statused = clean.clone();
        statused.sides[0].pokemon[1].status = Some(Status::Burn);
        assert!(score_of(&statused, &tracker, &Action::switch(1, "Bench")) < base);
    }

    /// Score of switching from a full-health Starmie into `bench` (party
    /// index 1) against `foe`, with fillers keeping the game early
    fn switch_into(lead: Combatant, bench: Combatant, foe: Combatant) -> f32 {
        let mut mine = vec![lead, bench];
        mine.extend(filler(4));
        let snapshot = battle(mine, with_filler(foe, 5));
        score_of(&snapshot, &RepetitionTracker::default(), &Action::switch(1, "Bench"))
    }

    fn bench() -> Combatant {
        Combatant::new("Bench", vec![Type::Grass])
    }

    fn foe() -> Combatant {
        Combatant::new("Foe", vec![Type::Normal])
    }

    #[test]
    fn test_plain_switch_scores_health_only() {
        assert!((switch_into(attacker(), bench(), foe()) - SWITCH_HEALTH_WEIGHT).abs() < 1e-3);
    }

    #[test]
    fn test_emergency_switch_bonus() {
        let base = switch_into(attacker(), bench(), foe());
        let hurt = switch_into(attacker().with_hp_percent(20), bench(), foe());
        assert!((hurt - base - EMERGENCY_SWITCH_BONUS).abs() < 1e-3);
    }

    #[test]
    fn test_faster_switch_in_bonus() {
        let base = switch_into(attacker(), bench(), foe());
        let quick = bench().with_stats(foresight_battle::BaseStats {
            spe: 105,
            ..Default::default()
        });
        let faster = switch_into(attacker(), quick, foe());
        assert!((faster - base - SPEED_BONUS).abs() < 1e-3);
    }

    #[test]
    fn test_win_condition_switch_bonus() {
        let base = switch_into(attacker(), bench(), foe());
        let sweeper = bench().with_moves(vec![
            MoveData::new("swordsdance", MoveCategory::Status, Some(Type::Normal)).with_boosts(
                StatStages {
                    atk: 2,
                    ..Default::default()
                },
            ),
        ]);
        let with_setup = switch_into(attacker(), sweeper, foe());
        assert!((with_setup - base - WIN_CONDITION_BONUS).abs() < 1e-3);
    }

    #[test]
    fn test_counter_threat_bonus() {
        let base = switch_into(attacker(), bench(), foe());
        // 204 damage: half of a full 310 HP Normal type, all of it at 50%
        let fighter = || {
            bench().with_moves(vec![MoveData::attack(
                "closecombat",
                MoveCategory::Physical,
                Type::Fighting,
                120,
            )])
        };

        let two_hits = switch_into(attacker(), fighter(), foe());
        assert!((two_hits - base - COUNTER_2HKO_BONUS).abs() < 1e-3);

        let one_hit = switch_into(attacker(), fighter(), foe().with_hp_percent(50));
        assert!((one_hit - base - COUNTER_KO_BONUS).abs() < 1e-3);
    }

    #[test]
    fn test_switching_penalized_once_game_is_closing() {
        let tracker = RepetitionTracker::default();
        let score = |mine: Vec<Combatant>| {
            let snapshot = battle(mine, with_filler(foe(), 5));
            score_of(&snapshot, &tracker, &Action::switch(1, "Bench"))
        };

        let mid = score(vec![attacker(), bench(), Combatant::new("Filler", vec![Type::Normal])]);
        let late = score(vec![attacker(), bench()]);
        assert!((mid - SWITCH_HEALTH_WEIGHT).abs() < 1e-3);
        assert!((mid - late - LATE_SWITCH_PENALTY).abs() < 1e-3);
    }

    #[test]
    fn test_predicted_switch_raises_attack_score() {
        // 192 damage knocks the target out from 60% or below, so only the
        // switch signal differs between these
        let cannon = Combatant::new("Starmie", vec![Type::Water]).with_moves(vec![
            MoveData::attack("hydrocannon", MoveCategory::Special, Type::Water, 150),
        ]);
        let tracker = RepetitionTracker::default();
        let score = |hp: u32| {
            let target = foe().with_hp_percent(hp);
            let snapshot = battle(with_filler(cannon.clone(), 5), with_filler(target, 5));
            score_of(&snapshot, &tracker, &Action::move_slot(0, "hydrocannon"))
        };

        let steady = score(60);
        assert!((steady - (100.0 + KO_BONUS)).abs() < 1e-3);
        assert!((score(40) - steady - PREDICTED_SWITCH_BONUS * 0.3).abs() < 1e-3);
        assert!((score(20) - steady - PREDICTED_SWITCH_BONUS * 0.6).abs() < 1e-3);
    }

    #[test]
    fn test_repetition_key_resolves_slot_only_moves() {
        let snapshot = battle(with_filler(attacker(), 5), filler(6));
        let key = |action: &Action| repetition_key(action, &snapshot, 0);

        assert_eq!(key(&Action::move_slot(0, "")).as_deref(), Some("surf"));
        assert_eq!(key(&Action::move_slot(3, "tackle")).as_deref(), Some("tackle"));
        // Unknown moves keep their own id
        assert_eq!(key(&Action::move_slot(3, "hyperbeam")).as_deref(), Some("hyperbeam"));
        assert_eq!(key(&Action::move_slot(9, "")), None);
        assert_eq!(key(&Action::TeamPick { order: vec![0] }), None);
        assert_eq!(key(&Action::Pass), None);
    }

    #[test]
    fn test_repetition_key_names_switches_by_roster_name() {
        let mut ghost = Combatant::new("Ghosty", vec![Type::Ghost, Type::Poison]);
        ghost.species = "Gengar".to_string();
        let snapshot = battle(vec![attacker(), ghost, bench()], filler(6));
        let key = |action: &Action| repetition_key(action, &snapshot, 0);

        assert_eq!(key(&Action::switch(1, "Gengar")).as_deref(), Some("switch-Ghosty"));
        assert_eq!(key(&Action::switch(1, "")).as_deref(), Some("switch-Ghosty"));
        // Stale index, found by name
        assert_eq!(key(&Action::switch(1, "Bench")).as_deref(), Some("switch-Bench"));
    }

    #[test]
    fn test_penalty_follows_the_recorded_key() {
        let mut ghost = Combatant::new("Ghosty", vec![Type::Ghost, Type::Poison]);
        ghost.species = "Gengar".to_string();
        let snapshot = battle(vec![attacker(), ghost], filler(6));
        let mut tracker = RepetitionTracker::default();

        let blank_surf = Action::move_slot(0, "");
        let by_species = Action::switch(1, "Gengar");
        let fresh_surf = score_of(&snapshot, &tracker, &blank_surf);
        let fresh_switch = score_of(&snapshot, &tracker, &by_species);

        for action in [&blank_surf, &by_species] {
            tracker.update(repetition_key(action, &snapshot, 0).unwrap());
        }
        let surf = score_of(&snapshot, &tracker, &blank_surf);
        let switch = score_of(&snapshot, &tracker, &by_species);
        assert!((surf - fresh_surf * 0.5).abs() < 1e-3);
        assert!((switch - fresh_switch * 0.5).abs() < 1e-3);
    }

    #[test]
    fn test_threat_moves_fall_back_to_stab() {
        let unknown = Combatant::new("Mystery", vec![Type::Dragon, Type::Ground]);
        let threats = threat_moves(&unknown);
        assert_eq!(threats.len(), 2);
        assert_eq!(threats[0].move_type, Some(Type::Dragon));
        assert!(threats.iter().all(MoveData::is_damaging));
    }
}
