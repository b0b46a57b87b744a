use dice_stats::parse::ast::{DiceTerm, Modifier, Token};
use dice_stats::parse::{ModifierError, ParseError};
use dice_stats::roll::{ArithmeticError, Number, RangeError, Value};
use dice_stats::{eval::Step, Pick, RollConfig, RollError};
use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};

fn seeded() -> RollConfig {
    RollConfig::default().with_seed(2024)
}

fn only_term(body: &str) -> DiceTerm {
    match dice_stats::parse(body).unwrap().tokens() {
        [Token::Term(term)] => *term,
        other => panic!("expected a single dice term, got {:?}", other),
    }
}

fn rolled_faces(body: &str, seed: u64) -> (Vec<u32>, Vec<u32>) {
    let roll = dice_stats::roll_with(body, &RollConfig::default(), SmallRng::seed_from_u64(seed))
        .unwrap();
    match roll.steps() {
        [Step::Value(Value::Vector(dice))] => (dice.kept.clone(), dice.dropped.clone()),
        other => panic!("expected a single dice value, got {:?}", other),
    }
}

#[test]
fn parse_terms() {
    let term = only_term("3d6");
    assert_eq!((term.count.get(), term.sides.get(), term.modifier), (3, 6, None));

    let term = only_term("d20");
    assert_eq!((term.count.get(), term.sides.get()), (1, 20));

    let term = only_term("4d6kh3");
    assert_eq!(term.modifier, Some(Modifier::KeepHighest(3)));
    let (kept, dropped) = rolled_faces("4d6kh3", 1);
    assert_eq!((kept.len(), dropped.len()), (3, 1));
}

#[test]
fn parse_errors() {
    let config = RollConfig::default();
    assert_eq!(
        dice_stats::roll("", &config).unwrap_err(),
        RollError::Parse(ParseError::NoTerms)
    );
    assert_eq!(
        dice_stats::roll("3d6 + foo", &config).unwrap_err(),
        RollError::Parse(ParseError::InvalidRoll("foo".into()))
    );
    assert!(matches!(
        dice_stats::roll("3d6xx", &config).unwrap_err(),
        RollError::Parse(ParseError::InvalidSides { .. })
    ));
    assert!(matches!(
        dice_stats::roll("3d6khz", &config).unwrap_err(),
        RollError::Modifier(ModifierError { .. })
    ));
    assert_eq!(
        dice_stats::roll("0d6", &config).unwrap_err(),
        RollError::Range(RangeError::ZeroCount)
    );
    assert_eq!(
        dice_stats::roll("2d0", &config).unwrap_err(),
        RollError::Range(RangeError::ZeroSides)
    );
}

#[test]
fn left_to_right_evaluation() {
    let config = RollConfig::default();
    let roll = dice_stats::roll("2 + 3 * 2", &config).unwrap();
    assert_eq!(roll.outcome(), Number::Int(10));
    assert_eq!(roll.trace(), "2 + 3 * 2 -> [2, +, 3, *, 2] = 10");

    assert_eq!(
        dice_stats::roll("10 / 0", &config).unwrap_err(),
        RollError::Arithmetic(ArithmeticError::ZeroDivision)
    );
}

#[test]
fn keep_highest_keeps_the_top() {
    for seed in 0..200 {
        let (kept, dropped) = rolled_faces("6d10kh2", seed);
        assert_eq!(kept.len(), 2);
        let lowest_kept = kept.iter().min().unwrap();
        assert!(dropped.iter().all(|x| x <= lowest_kept));
    }
    let (kept, dropped) = rolled_faces("2d10kh5", 0);
    assert_eq!((kept.len(), dropped.len()), (2, 0));
}

#[test]
fn roll_limits_depend_only_on_the_term() {
    let config = RollConfig::default();
    for seed in 0..50 {
        let (kept, _) = rolled_faces("8580d6rr1", seed);
        assert_eq!(kept.len(), 8580);
        let (kept, _) = rolled_faces("10000d6rr1", seed);
        assert_eq!(kept.len(), 10_000);
    }
    for seed in 0..5 {
        let config = config.clone().with_seed(seed);
        assert_eq!(
            dice_stats::roll_stats("8580d6rr1", Some(1), &config).unwrap().trials(),
            100
        );
    }

    assert_eq!(
        dice_stats::roll("10001d6", &config).unwrap_err(),
        RollError::Range(RangeError::TooManyRolls { limit: 10_000 })
    );
    assert_eq!(
        dice_stats::roll("1000d1rr1001", &config).unwrap_err(),
        RollError::Range(RangeError::TooManyRerolls { limit: 1_000_000 })
    );
}

#[test]
fn stats_accuracy_levels() {
    let config = seeded();
    assert_eq!(dice_stats::roll_stats("1d6", None, &config).unwrap().trials(), 1000);
    assert_eq!(dice_stats::roll_stats("1d6", Some(1), &config).unwrap().trials(), 100);
    assert_eq!(dice_stats::roll_stats("-a3 1d6", Some(1), &config).unwrap().trials(), 10_000);
    assert_eq!(
        dice_stats::roll_stats("-a7 1d6", None, &config).unwrap_err(),
        RollError::Range(RangeError::UnknownAccuracy("7".into()))
    );
    assert_eq!(
        dice_stats::roll_stats("-a99999999999 1d6", None, &config).unwrap_err(),
        RollError::Range(RangeError::UnknownAccuracy("99999999999".into()))
    );
    assert_eq!(
        dice_stats::roll_stats("-a2", None, &config).unwrap_err(),
        RollError::Parse(ParseError::NoTerms)
    );
}

#[test]
fn stats_d6_mean() {
    let d = dice_stats::roll_stats("-a4 1d6", None, &seeded()).unwrap();
    assert_eq!(d.trials(), 50_000);
    assert!((d.mean() - 3.5).abs() < 0.05);
    assert_eq!(d.title(), "50000 Simulations of: 1d6");
}

#[test]
fn expected_values() {
    assert_eq!(dice_stats::expected_value(1, 6, Pick::Highest), Ok(3.5));
    assert_eq!(dice_stats::expected_value(2, 6, Pick::Highest), Ok(4.5));
    assert_eq!(dice_stats::expected_value(2, 6, Pick::Lowest), Ok(2.5));
}

proptest! {
    #[test]
    fn faces_stay_within_sides(count in 1usize..30, sides in 1u32..50, seed: u64) {
        let (kept, _) = rolled_faces(&format!("{}d{}", count, sides), seed);
        prop_assert_eq!(kept.len(), count);
        prop_assert!(kept.iter().all(|&x| 1 <= x && x <= sides));
    }

    #[test]
    fn keep_highest_length(count in 1usize..30, n in 0usize..40, seed: u64) {
        let (kept, dropped) = rolled_faces(&format!("{}d20kh{}", count, n), seed);
        prop_assert_eq!(kept.len(), n.min(count));
        prop_assert_eq!(kept.len() + dropped.len(), count);
    }

    #[test]
    fn clamps_bound_faces(count in 1usize..20, v in 1u32..12, seed: u64) {
        let (kept, _) = rolled_faces(&format!("{}d10mi{}", count, v), seed);
        prop_assert!(kept.iter().all(|&x| x >= v));
        let (kept, _) = rolled_faces(&format!("{}d10ma{}", count, v), seed);
        prop_assert!(kept.iter().all(|&x| x <= v));
    }
}
