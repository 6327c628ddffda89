// src/generators/mod.rs
use thiserror::Error;

use crate::models::GenerationConfig;

mod charset;
mod password;

pub use charset::CharacterUniverse;
pub use password::{quick_strength, quick_strength_score, PasswordGenerator};

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("no characters available: enable at least one character class")]
    EmptyUniverse,
}

pub type Result<T> = std::result::Result<T, GeneratorError>;

/// Generate a password with the thread-local CSPRNG.
pub fn generate(config: &GenerationConfig) -> Result<String> {
    PasswordGenerator::new().generate(config)
}
