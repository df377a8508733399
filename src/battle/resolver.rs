use crate::battle::state::{BattleRng, Side};
use serde::{Deserialize, Serialize};

/// Buckets (out of ten) in which the computer picks its special move.
/// Observed behavior is 2-in-10, despite older docs claiming 1-in-10.
const SPECIAL_BUCKETS_IN_TEN: u32 = 2;

/// Experience granted to the lead creature per opponent level on victory.
pub const EXP_PER_OPPONENT_LEVEL: u32 = 15;

/// Currency granted per opponent level on victory.
pub const MONEY_PER_OPPONENT_LEVEL: u32 = 200;

/// Currency lost per opponent level on defeat (clamped at a zero balance).
pub const PENALTY_PER_OPPONENT_LEVEL: u32 = 25;

/// Which of a species' two moves an attack uses. Doubles as the move-name
/// index into the species definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveKind {
    Normal,
    Special,
}

impl MoveKind {
    /// Slot of this move in [`schema::SpeciesDefinition::moves`].
    pub fn slot(self) -> usize {
        match self {
            MoveKind::Normal => 0,
            MoveKind::Special => 1,
        }
    }
}

/// A fully-rolled attack: which move was used and how hard it landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttackRoll {
    pub kind: MoveKind,
    pub power: u32,
}

/// The computer's move-choice coin: special in 2 of 10 buckets.
pub fn roll_move_kind(rng: &mut BattleRng) -> MoveKind {
    if rng.roll(10, "move choice") >= 10 - SPECIAL_BUCKETS_IN_TEN {
        MoveKind::Special
    } else {
        MoveKind::Normal
    }
}

/// Roll attack power for a move. The attacker's own level scales the power:
/// special is `[0,9) * level / 4`, normal is `([0,5) + 3) * level / 4`,
/// both truncated. Low rolls and low levels can truncate to zero, which
/// the damage step reports as a miss.
pub fn roll_attack_power(kind: MoveKind, attacker_level: u32, rng: &mut BattleRng) -> u32 {
    match kind {
        MoveKind::Special => rng.roll(9, "special attack power") * attacker_level / 4,
        MoveKind::Normal => (rng.roll(5, "normal attack power") + 3) * attacker_level / 4,
    }
}

/// Roll a full computer attack: move choice first, then power.
pub fn roll_computer_attack(attacker_level: u32, rng: &mut BattleRng) -> AttackRoll {
    let kind = roll_move_kind(rng);
    let power = roll_attack_power(kind, attacker_level, rng);
    AttackRoll { kind, power }
}

/// Capture attempt: fixed 1-in-10 success, independent of the opponent's
/// remaining health or level.
pub fn roll_capture(rng: &mut BattleRng) -> bool {
    rng.roll(10, "capture roll") == 0
}

/// Flee attempt: fixed coin flip, independent of any creature stats.
pub fn roll_flee(rng: &mut BattleRng) -> bool {
    rng.roll(2, "flee roll") == 0
}

/// Pick which side acts first for the whole encounter.
pub fn roll_first_mover(rng: &mut BattleRng) -> Side {
    if rng.roll(2, "first mover") == 0 {
        Side::Computer
    } else {
        Side::Player
    }
}

pub fn victory_experience(opponent_level: u32) -> u32 {
    opponent_level * EXP_PER_OPPONENT_LEVEL
}

pub fn victory_money(opponent_level: u32) -> u32 {
    opponent_level * MONEY_PER_OPPONENT_LEVEL
}

pub fn defeat_penalty(opponent_level: u32) -> u32 {
    opponent_level * PENALTY_PER_OPPONENT_LEVEL
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, MoveKind::Normal)]
    #[case(7, MoveKind::Normal)]
    #[case(8, MoveKind::Special)]
    #[case(9, MoveKind::Special)]
    fn move_choice_uses_two_special_buckets(#[case] outcome: u32, #[case] expected: MoveKind) {
        let mut rng = BattleRng::scripted(vec![outcome]);
        assert_eq!(roll_move_kind(&mut rng), expected);
    }

    #[rstest]
    // normal: (roll + 3) * level / 4, truncated
    #[case(MoveKind::Normal, 0, 5, 3)] // 3 * 5 / 4 = 3.75 -> 3
    #[case(MoveKind::Normal, 4, 5, 8)] // 7 * 5 / 4 = 8.75 -> 8
    #[case(MoveKind::Normal, 0, 1, 0)] // 3 * 1 / 4 -> 0: low levels can whiff
    // special: roll * level / 4, truncated
    #[case(MoveKind::Special, 0, 9, 0)]
    #[case(MoveKind::Special, 8, 9, 18)]
    #[case(MoveKind::Special, 3, 5, 3)] // 3 * 5 / 4 = 3.75 -> 3
    fn attack_power_formulas_truncate(
        #[case] kind: MoveKind,
        #[case] outcome: u32,
        #[case] level: u32,
        #[case] expected: u32,
    ) {
        let mut rng = BattleRng::scripted(vec![outcome]);
        assert_eq!(roll_attack_power(kind, level, &mut rng), expected);
    }

    #[test]
    fn capture_succeeds_only_in_the_zero_bucket() {
        let mut rng = BattleRng::scripted(vec![0, 1, 9]);
        assert!(roll_capture(&mut rng));
        assert!(!roll_capture(&mut rng));
        assert!(!roll_capture(&mut rng));
    }

    #[test]
    fn flee_is_a_coin_flip() {
        let mut rng = BattleRng::scripted(vec![0, 1]);
        assert!(roll_flee(&mut rng));
        assert!(!roll_flee(&mut rng));
    }

    #[test]
    fn first_mover_zero_bucket_is_the_computer() {
        let mut rng = BattleRng::scripted(vec![0, 1]);
        assert_eq!(roll_first_mover(&mut rng), Side::Computer);
        assert_eq!(roll_first_mover(&mut rng), Side::Player);
    }

    #[test]
    fn reward_and_penalty_scale_with_opponent_level() {
        assert_eq!(victory_experience(7), 105);
        assert_eq!(victory_money(7), 1400);
        assert_eq!(defeat_penalty(7), 175);
    }
}
