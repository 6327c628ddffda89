//! Password generation and strength evaluation.
//!
//! The engine is two independent pure operations:
//!
//! - [`generate`] builds a character universe from a [`GenerationConfig`]
//!   and samples a password from it.
//! - [`evaluate`] runs a fixed battery of checks over any string and
//!   returns a [`StrengthReport`].
//!
//! ```
//! use rust_passforge::{evaluate, generate, GenerationConfig, StrengthTier};
//!
//! let password = generate(&GenerationConfig::new(20)).unwrap();
//! assert_eq!(password.len(), 20);
//!
//! let report = evaluate("Password123!");
//! assert_eq!(report.tier, StrengthTier::VeryStrong);
//! ```
pub mod cli;
pub mod core;
pub mod evaluator;
pub mod generators;
pub mod logging;
pub mod models;
pub mod utils;

pub use crate::evaluator::{evaluate, Check, DenyList, Evaluator};
pub use crate::generators::{generate, quick_strength, GeneratorError, PasswordGenerator};
pub use crate::models::{
    CharacterClass, CheckOutcome, GeneratedStrength, GenerationConfig, StrengthReport,
    StrengthTier,
};
