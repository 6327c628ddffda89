// src/models.rs
use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::evaluator::Check;

pub const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &[u8] = b"0123456789";
pub const SYMBOLS: &[u8] = b"!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Glyphs that are easy to confuse with one another when read back.
pub const AMBIGUOUS: &[u8] = b"il1Lo0O";

/// A character class that can be enabled for generation.
///
/// Variant order is the order the universe is assembled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharacterClass {
    Uppercase,
    Lowercase,
    Digits,
    Symbols,
}

impl CharacterClass {
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Uppercase,
        CharacterClass::Lowercase,
        CharacterClass::Digits,
        CharacterClass::Symbols,
    ];

    pub fn charset(&self) -> &'static [u8] {
        match self {
            CharacterClass::Uppercase => UPPERCASE,
            CharacterClass::Lowercase => LOWERCASE,
            CharacterClass::Digits => DIGITS,
            CharacterClass::Symbols => SYMBOLS,
        }
    }
}

// Password generation options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationConfig {
    pub length: usize,
    pub classes: BTreeSet<CharacterClass>,
    pub exclude_ambiguous: bool,
}

impl GenerationConfig {
    pub const MIN_LENGTH: usize = 4;
    pub const MAX_LENGTH: usize = 64;
    pub const DEFAULT_LENGTH: usize = 16;

    /// All classes enabled, ambiguous glyphs kept.
    pub fn new(length: usize) -> Self {
        Self {
            length,
            classes: CharacterClass::ALL.into_iter().collect(),
            exclude_ambiguous: false,
        }
    }

    /// Only the given classes enabled.
    pub fn only<I>(length: usize, classes: I) -> Self
    where
        I: IntoIterator<Item = CharacterClass>,
    {
        Self {
            length,
            classes: classes.into_iter().collect(),
            exclude_ambiguous: false,
        }
    }

    pub fn with_class(mut self, class: CharacterClass) -> Self {
        self.classes.insert(class);
        self
    }

    pub fn without_class(mut self, class: CharacterClass) -> Self {
        self.classes.remove(&class);
        self
    }

    pub fn exclude_ambiguous(mut self, exclude: bool) -> Self {
        self.exclude_ambiguous = exclude;
        self
    }

    pub fn includes(&self, class: CharacterClass) -> bool {
        self.classes.contains(&class)
    }

    pub fn is_length_in_range(&self) -> bool {
        (Self::MIN_LENGTH..=Self::MAX_LENGTH).contains(&self.length)
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_LENGTH)
    }
}

/// Strength tier reported by the evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StrengthTier {
    VeryWeak,
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl StrengthTier {
    // Thresholds are checked top-down, first match wins
    pub fn from_percentage(percentage: u8) -> Self {
        match percentage {
            p if p >= 90 => StrengthTier::VeryStrong,
            p if p >= 70 => StrengthTier::Strong,
            p if p >= 50 => StrengthTier::Medium,
            p if p >= 30 => StrengthTier::Weak,
            _ => StrengthTier::VeryWeak,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StrengthTier::VeryWeak => "Very Weak",
            StrengthTier::Weak => "Weak",
            StrengthTier::Medium => "Medium",
            StrengthTier::Strong => "Strong",
            StrengthTier::VeryStrong => "Very Strong",
        }
    }
}

impl fmt::Display for StrengthTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Indicator shown next to a freshly generated password.
///
/// This is deliberately a separate scale from [`StrengthTier`]; the two are
/// computed by different rules and need not agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum GeneratedStrength {
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl GeneratedStrength {
    pub const MAX_SCORE: u8 = 7;

    pub fn from_score(score: u8) -> Self {
        match score {
            0..=2 => GeneratedStrength::Weak,
            3..=4 => GeneratedStrength::Medium,
            5..=6 => GeneratedStrength::Strong,
            _ => GeneratedStrength::VeryStrong,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GeneratedStrength::Weak => "Weak",
            GeneratedStrength::Medium => "Medium",
            GeneratedStrength::Strong => "Strong",
            GeneratedStrength::VeryStrong => "Very Strong",
        }
    }
}

impl fmt::Display for GeneratedStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckOutcome {
    pub check: Check,
    pub passed: bool,
}

/// Result of evaluating one candidate password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrengthReport {
    /// One entry per check, in fixed check order.
    pub checks: Vec<CheckOutcome>,
    pub score: u8,
    pub percentage: u8,
    pub tier: StrengthTier,
    pub feedback: Vec<String>,
}

impl StrengthReport {
    pub fn passed(&self, check: Check) -> bool {
        self.checks
            .iter()
            .any(|outcome| outcome.check == check && outcome.passed)
    }

    pub fn max_score(&self) -> usize {
        self.checks.len()
    }

    pub fn failed(&self) -> impl Iterator<Item = Check> + '_ {
        self.checks
            .iter()
            .filter(|outcome| !outcome.passed)
            .map(|outcome| outcome.check)
    }
}
