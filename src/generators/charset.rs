// src/generators/charset.rs
use crate::generators::{GeneratorError, Result};
use crate::models::{CharacterClass, GenerationConfig, AMBIGUOUS};

/// The characters eligible for sampling under a given configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterUniverse {
    chars: Vec<u8>,
}

impl CharacterUniverse {
    /// Assemble the universe for `config`.
    ///
    /// Classes are concatenated in [`CharacterClass::ALL`] order, so the
    /// result is the same for equal configurations. Ambiguous glyphs are
    /// removed regardless of which class contributed them.
    pub fn build(config: &GenerationConfig) -> Result<Self> {
        let mut chars: Vec<u8> = Vec::new();

        for class in CharacterClass::ALL {
            if !config.includes(class) {
                continue;
            }
            for &c in class.charset() {
                if !chars.contains(&c) {
                    chars.push(c);
                }
            }
        }

        if config.exclude_ambiguous {
            chars.retain(|c| !AMBIGUOUS.contains(c));
        }

        if chars.is_empty() {
            return Err(GeneratorError::EmptyUniverse);
        }

        Ok(Self { chars })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.chars
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    // Never true for a built universe
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn contains(&self, c: char) -> bool {
        c.is_ascii() && self.chars.contains(&(c as u8))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_universe_order_and_size() {
        let universe = CharacterUniverse::build(&GenerationConfig::default()).unwrap();
        assert_eq!(universe.len(), 26 + 26 + 10 + 26);
        assert_eq!(&universe.as_bytes()[..3], b"ABC");
        assert_eq!(&universe.as_bytes()[26..29], b"abc");
        assert_eq!(&universe.as_bytes()[52..62], b"0123456789");
        assert_eq!(universe.as_bytes().last(), Some(&b'?'));
    }

    #[test]
    fn test_universe_is_deterministic() {
        let config = GenerationConfig::new(12).exclude_ambiguous(true);
        let first = CharacterUniverse::build(&config).unwrap();
        let second = CharacterUniverse::build(&config).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_ambiguous_removed_across_classes() {
        let config = GenerationConfig::default().exclude_ambiguous(true);
        let universe = CharacterUniverse::build(&config).unwrap();
        for c in "il1Lo0O".chars() {
            assert!(!universe.contains(c), "{c} should be excluded");
        }
        // Capital I is not in the ambiguous set
        assert!(universe.contains('I'));
        assert_eq!(universe.len(), 88 - 7);
    }

    #[test]
    fn test_digits_only_without_ambiguous() {
        let config = GenerationConfig::only(8, [CharacterClass::Digits]).exclude_ambiguous(true);
        let universe = CharacterUniverse::build(&config).unwrap();
        assert_eq!(universe.as_bytes(), b"23456789");
    }

    #[test]
    fn test_no_classes_is_empty_universe() {
        let config = GenerationConfig::only(10, []);
        assert_eq!(
            CharacterUniverse::build(&config),
            Err(GeneratorError::EmptyUniverse)
        );
    }

    #[test]
    fn test_non_ascii_never_contained() {
        let universe = CharacterUniverse::build(&GenerationConfig::default()).unwrap();
        assert!(!universe.contains('é'));
        assert!(!universe.contains(' '));
        assert!(!universe.contains('~'));
    }
}
