// src/generators/password.rs
use rand::distributions::{Distribution, Uniform};
use rand::rngs::ThreadRng;
use rand::Rng;

use crate::generators::{CharacterUniverse, Result};
use crate::models::{GeneratedStrength, GenerationConfig};

/// Random password generator over an injectable RNG.
///
/// `PasswordGenerator::new()` draws from `rand::thread_rng()`, a ChaCha-based
/// CSPRNG seeded from the OS. It is thread-local, so each thread owns its own
/// generator and no locking is involved. Tests can supply a seeded RNG through
/// [`PasswordGenerator::with_rng`].
pub struct PasswordGenerator<R = ThreadRng> {
    rng: R,
}

impl PasswordGenerator<ThreadRng> {
    pub fn new() -> Self {
        PasswordGenerator {
            rng: rand::thread_rng(),
        }
    }
}

impl Default for PasswordGenerator<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> PasswordGenerator<R> {
    pub fn with_rng(rng: R) -> Self {
        PasswordGenerator { rng }
    }

    /// Draw `config.length` characters independently and uniformly from the
    /// configured universe.
    ///
    /// The only failure is an empty universe, detected before any sampling.
    pub fn generate(&mut self, config: &GenerationConfig) -> Result<String> {
        let universe = CharacterUniverse::build(config)?;
        let chars = universe.as_bytes();
        log::debug!(
            "Generating {} characters from a universe of {}",
            config.length,
            chars.len()
        );

        let dist = Uniform::from(0..chars.len());
        let password: String = (0..config.length)
            .map(|_| chars[dist.sample(&mut self.rng)] as char)
            .collect();

        Ok(password)
    }

    pub fn into_inner(self) -> R {
        self.rng
    }
}

/// Raw 0..=7 score behind [`quick_strength`].
pub fn quick_strength_score(password: &str) -> u8 {
    let length = password.chars().count();
    let rules = [
        length >= 8,
        length >= 12,
        length >= 16,
        password.chars().any(|c| c.is_ascii_lowercase()),
        password.chars().any(|c| c.is_ascii_uppercase()),
        password.chars().any(|c| c.is_ascii_digit()),
        password.chars().any(|c| !c.is_ascii_alphanumeric()),
    ];

    rules.iter().filter(|&&passed| passed).count() as u8
}

/// The lightweight indicator shown next to a freshly generated password.
///
/// Independent of the evaluator's report: it rewards length up to 16 and
/// ignores common words and repetition.
pub fn quick_strength(password: &str) -> GeneratedStrength {
    GeneratedStrength::from_score(quick_strength_score(password))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::GeneratorError;
    use crate::models::{CharacterClass, SYMBOLS};
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn seeded(seed: u64) -> PasswordGenerator<ChaCha20Rng> {
        PasswordGenerator::with_rng(ChaCha20Rng::seed_from_u64(seed))
    }

    #[test]
    fn test_length_is_exact() {
        let mut generator = seeded(7);
        for length in [1, 4, 16, 33, 64] {
            let password = generator.generate(&GenerationConfig::new(length)).unwrap();
            assert_eq!(password.chars().count(), length);
        }
    }

    #[test]
    fn test_same_seed_same_password() {
        let config = GenerationConfig::default();
        let a = seeded(42).generate(&config).unwrap();
        let b = seeded(42).generate(&config).unwrap();
        let c = seeded(43).generate(&config).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_digits_only_excluding_ambiguous() {
        let config = GenerationConfig::only(64, [CharacterClass::Digits]).exclude_ambiguous(true);
        let password = seeded(1).generate(&config).unwrap();
        assert!(password.chars().all(|c| ('2'..='9').contains(&c)));
    }

    #[test]
    fn test_single_char_still_generates() {
        let config = GenerationConfig::only(1, [CharacterClass::Digits]).exclude_ambiguous(true);
        let password = seeded(3).generate(&config).unwrap();
        assert_eq!(password.len(), 1);
    }

    #[test]
    fn test_symbols_only() {
        let config = GenerationConfig::only(40, [CharacterClass::Symbols]);
        let password = seeded(9).generate(&config).unwrap();
        assert!(password.bytes().all(|b| SYMBOLS.contains(&b)));
    }

    #[test]
    fn test_empty_universe_fails() {
        let config = GenerationConfig::only(10, []);
        assert_eq!(
            PasswordGenerator::new().generate(&config),
            Err(GeneratorError::EmptyUniverse)
        );
    }

    #[test]
    fn test_quick_strength_scores() {
        assert_eq!(quick_strength_score(""), 0);
        assert_eq!(quick_strength_score("abc"), 1);
        assert_eq!(quick_strength(""), GeneratedStrength::Weak);
        // length>=8, lower, digit
        assert_eq!(quick_strength("abcdef12"), GeneratedStrength::Medium);
        // length>=8, >=12, lower, upper, digit, symbol
        assert_eq!(quick_strength("Password123!"), GeneratedStrength::Strong);
        assert_eq!(quick_strength("Password123!abcd"), GeneratedStrength::VeryStrong);
    }

    #[test]
    fn test_quick_strength_ignores_common_words() {
        // The evaluator flags this as repeated, the indicator does not care
        assert_eq!(quick_strength_score("AAAAaaaa1111!!!!"), 7);
    }
}
