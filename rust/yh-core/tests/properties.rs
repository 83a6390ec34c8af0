//! Property-based tests for rule evaluation.

use proptest::prelude::*;

use yh_core::{Hand, RuleId, RuleSet, ScoringError, ScoringRule};

/// Strategy: a valid hand (each die 1-6).
fn dice_strategy() -> impl Strategy<Value = [u8; 5]> {
    prop::array::uniform5(1..=6u8)
}

fn rule_strategy() -> impl Strategy<Value = RuleId> {
    (0..RuleId::ALL.len()).prop_map(|i| RuleId::ALL[i])
}

fn rule(id: RuleId) -> &'static ScoringRule {
    RuleSet::standard().get(id)
}

proptest! {
    // 1. Evaluation is deterministic
    #[test]
    fn score_deterministic(dice in dice_strategy(), id in rule_strategy()) {
        let a = rule(id).evaluate(&dice);
        let b = rule(id).evaluate(&dice);
        prop_assert_eq!(a, b);
    }

    // 2. Order of the dice never matters
    #[test]
    fn score_order_independent(dice in dice_strategy(), id in rule_strategy()) {
        let mut sorted = dice;
        sorted.sort_unstable();
        let mut reversed = sorted;
        reversed.reverse();
        let s = rule(id).evaluate(&dice).unwrap();
        prop_assert_eq!(s, rule(id).evaluate(&sorted).unwrap());
        prop_assert_eq!(s, rule(id).evaluate(&reversed).unwrap());
    }

    // 3. Upper section: face * count
    #[test]
    fn upper_is_face_times_count(dice in dice_strategy(), face in 1..=6u8) {
        let id = RuleId::ALL[(face - 1) as usize];
        let count = dice.iter().filter(|&&d| d == face).count() as u32;
        prop_assert_eq!(rule(id).evaluate(&dice).unwrap(), u32::from(face) * count);
    }

    // 4. Chance always equals the dice sum
    #[test]
    fn chance_is_sum(dice in dice_strategy()) {
        let sum: u32 = dice.iter().map(|&d| u32::from(d)).sum();
        prop_assert_eq!(rule(RuleId::Chance).evaluate(&dice).unwrap(), sum);
    }

    // 5. Of-a-kind is either 0 or the dice sum
    #[test]
    fn of_a_kind_zero_or_sum(dice in dice_strategy()) {
        let hand = Hand::new(&dice).unwrap();
        for id in [RuleId::ThreeOfKind, RuleId::FourOfKind] {
            let s = rule(id).score(&hand);
            prop_assert!(s == 0 || s == hand.sum(), "{} scored {} on {:?}", id, s, dice);
        }
    }

    // 6. A qualifying four of a kind always qualifies as three of a kind
    #[test]
    fn four_of_kind_implies_three(dice in dice_strategy()) {
        if rule(RuleId::FourOfKind).evaluate(&dice).unwrap() > 0 {
            prop_assert!(rule(RuleId::ThreeOfKind).evaluate(&dice).unwrap() > 0);
        }
    }

    // 7. A large straight is always a small straight
    #[test]
    fn large_implies_small(dice in dice_strategy()) {
        if rule(RuleId::LargeStraight).evaluate(&dice).unwrap() > 0 {
            prop_assert_eq!(rule(RuleId::SmallStraight).evaluate(&dice).unwrap(), 30);
        }
    }

    // 8. Any die outside 1..=6 is rejected by every rule
    #[test]
    fn out_of_range_rejected(
        dice in dice_strategy(),
        pos in 0..5usize,
        bad in prop_oneof![Just(0u8), 7..=u8::MAX],
        id in rule_strategy(),
    ) {
        let mut dice = dice;
        dice[pos] = bad;
        prop_assert!(matches!(rule(id).evaluate(&dice), Err(ScoringError::InvalidHand(_))));
    }

    // 9. Any length other than 5 is rejected by every rule
    #[test]
    fn wrong_length_rejected(
        dice in prop::collection::vec(1..=6u8, 0..12),
        id in rule_strategy(),
    ) {
        prop_assume!(dice.len() != 5);
        prop_assert!(rule(id).evaluate(&dice).is_err());
    }
}
