// src/cli/commands.rs
use clap::Subcommand;

use crate::models::{CharacterClass, GenerationConfig};

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Generate a random password
    Generate(GenerateArgs),

    /// Check the strength of a password
    Check {
        /// Password to check (prompted for when omitted)
        #[arg(allow_hyphen_values = true)]
        password: Option<String>,
    },

    /// Open the interactive menu
    Menu,
}

#[derive(clap::Args, Debug, Clone, Default)]
pub struct GenerateArgs {
    /// Password length
    #[arg(long, short, value_parser = clap::value_parser!(u8).range(4..=64))]
    pub length: Option<u8>,

    /// Leave out uppercase letters (A-Z)
    #[arg(long)]
    pub no_uppercase: bool,

    /// Leave out lowercase letters (a-z)
    #[arg(long)]
    pub no_lowercase: bool,

    /// Leave out numbers (0-9)
    #[arg(long)]
    pub no_numbers: bool,

    /// Leave out symbols (!@#$...)
    #[arg(long)]
    pub no_symbols: bool,

    /// Exclude similar characters (il1Lo0O)
    #[arg(long)]
    pub exclude_ambiguous: bool,
}

impl GenerateArgs {
    /// Apply the flags on top of the configured defaults.
    pub fn to_config(&self, defaults: &GenerationConfig) -> GenerationConfig {
        let mut config = defaults.clone();

        if let Some(length) = self.length {
            config.length = usize::from(length);
        }

        let disabled = [
            (self.no_uppercase, CharacterClass::Uppercase),
            (self.no_lowercase, CharacterClass::Lowercase),
            (self.no_numbers, CharacterClass::Digits),
            (self.no_symbols, CharacterClass::Symbols),
        ];
        for (off, class) in disabled {
            if off {
                config = config.without_class(class);
            }
        }

        if self.exclude_ambiguous {
            config = config.exclude_ambiguous(true);
        }

        config
    }
}
