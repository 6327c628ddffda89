//! Property-based tests for the generation and evaluation engine.

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use rust_passforge::generators::CharacterUniverse;
use rust_passforge::{
    evaluate, generate, CharacterClass, Check, GenerationConfig, GeneratorError,
    PasswordGenerator, StrengthTier,
};

fn arb_classes() -> impl Strategy<Value = Vec<CharacterClass>> {
    prop::sample::subsequence(CharacterClass::ALL.to_vec(), 0..=4)
}

fn arb_config() -> impl Strategy<Value = GenerationConfig> {
    (
        GenerationConfig::MIN_LENGTH..=GenerationConfig::MAX_LENGTH,
        arb_classes(),
        any::<bool>(),
    )
        .prop_map(|(length, classes, exclude)| {
            GenerationConfig::only(length, classes).exclude_ambiguous(exclude)
        })
}

proptest! {
    #[test]
    fn generated_length_matches_config(config in arb_config(), seed in any::<u64>()) {
        let mut generator = PasswordGenerator::with_rng(ChaCha20Rng::seed_from_u64(seed));
        match generator.generate(&config) {
            Ok(password) => {
                prop_assert_eq!(password.chars().count(), config.length);
            }
            Err(GeneratorError::EmptyUniverse) => {
                prop_assert!(config.classes.is_empty());
            }
        }
    }

    #[test]
    fn generated_chars_come_from_universe(config in arb_config(), seed in any::<u64>()) {
        prop_assume!(!config.classes.is_empty());
        let universe = CharacterUniverse::build(&config).unwrap();
        let mut generator = PasswordGenerator::with_rng(ChaCha20Rng::seed_from_u64(seed));
        let password = generator.generate(&config).unwrap();
        for c in password.chars() {
            prop_assert!(universe.contains(c), "{:?} not in universe", c);
            if config.exclude_ambiguous {
                prop_assert!(!"il1Lo0O".contains(c));
            }
        }
    }

    #[test]
    fn universe_is_deterministic(config in arb_config()) {
        prop_assert_eq!(CharacterUniverse::build(&config), CharacterUniverse::build(&config));
    }

    #[test]
    fn evaluator_is_total_and_consistent(password in any::<String>()) {
        let report = evaluate(&password);
        prop_assert_eq!(report.checks.len(), 8);
        let passed = report.checks.iter().filter(|o| o.passed).count();
        prop_assert_eq!(usize::from(report.score), passed);
        prop_assert_eq!(report.feedback.len(), 8 - passed);
        let expected = (f64::from(report.score) * 100.0 / 8.0).round() as u8;
        prop_assert_eq!(report.percentage, expected);
        prop_assert_eq!(report.tier, StrengthTier::from_percentage(report.percentage));
    }

    #[test]
    fn feedback_follows_check_order(password in "[a-zA-Z0-9!@#]{0,20}") {
        let report = evaluate(&password);
        let expected: Vec<String> = report
            .checks
            .iter()
            .filter(|o| !o.passed)
            .map(|o| o.check.remediation().to_string())
            .collect();
        prop_assert_eq!(report.feedback, expected);
    }

    #[test]
    fn longer_suffix_never_lowers_length_checks(password in "[a-z]{0,16}", extra in "[a-z]{1,8}") {
        let before = evaluate(&password);
        let after = evaluate(&format!("{password}{extra}"));
        for check in [Check::Length, Check::MinLength] {
            prop_assert!(!before.passed(check) || after.passed(check));
        }
    }
}

#[test]
fn empty_universe_is_the_only_failure() {
    let config = GenerationConfig::only(10, []);
    assert_eq!(generate(&config), Err(GeneratorError::EmptyUniverse));

    let config = GenerationConfig::only(10, []).exclude_ambiguous(true);
    assert_eq!(generate(&config), Err(GeneratorError::EmptyUniverse));
}

#[test]
fn one_char_digit_password_still_succeeds() {
    let config = GenerationConfig::only(1, [CharacterClass::Digits]).exclude_ambiguous(true);
    let password = generate(&config).unwrap();
    assert_eq!(password.len(), 1);
    assert!(('2'..='9').contains(&password.chars().next().unwrap()));
}

#[test]
fn known_vectors() {
    let report = evaluate("Password123!");
    assert_eq!((report.score, report.percentage, report.tier), (8, 100, StrengthTier::VeryStrong));

    assert!(!evaluate("PASSWORD").passed(Check::NoCommon));
    assert!(evaluate("PasswordXYZ").passed(Check::NoCommon));

    let report = evaluate("aaaBB11!!");
    assert!(!report.passed(Check::NoRepeated));
    assert!(report.feedback.iter().any(|f| f == "Avoid repeated character patterns"));
}

#[test]
fn evaluator_is_safe_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let password = generate(&GenerationConfig::new(32)).unwrap();
                (evaluate(&password).max_score(), evaluate(&"x".repeat(i + 3)).passed(Check::NoRepeated))
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), (8, false));
    }
}
