// src/cli/menu.rs
use anyhow::Result;
use inquire::{Confirm, InquireError, Password, PasswordDisplayMode, Select, Text};

use crate::cli::handlers::{render_generated, render_report, EMPTY_INPUT_MESSAGE, EMPTY_UNIVERSE_MESSAGE};
use crate::core::Config;
use crate::evaluator::Evaluator;
use crate::generators::{GeneratorError, PasswordGenerator};
use crate::models::{CharacterClass, GenerationConfig};

const GENERATE: &str = "🔐  Generate secure password";
const CHECK: &str = "🛡️  Check password strength";
const EXIT: &str = "❌  Exit";

pub fn run_cli_menu(config: &Config, evaluator: &Evaluator) -> Result<()> {
    println!("🦀🔐 Welcome to");
    println!("╔══════════════════════════════════════╗");
    println!("║        🦀 RUST PASSFORGE TOOLS       ║");
    println!("╚══════════════════════════════════════╝");

    let mut password_generator = PasswordGenerator::new();
    let mut defaults = config.generation_defaults();

    loop {
        let selection = Select::new("Choose an option:", vec![GENERATE, CHECK, EXIT])
            .with_help_message("Use arrow keys to navigate, Enter to select. Ctrl+C to exit.")
            .prompt_skippable();

        let outcome = match selection {
            Ok(Some(GENERATE)) => generate_flow(&mut password_generator, &mut defaults, evaluator),
            Ok(Some(CHECK)) => check_flow(evaluator),
            Ok(_) => break,
            Err(e) => Err(e),
        };

        match outcome {
            Ok(()) => {}
            Err(InquireError::OperationInterrupted) | Err(InquireError::OperationCanceled) => break,
            Err(e) => return Err(e.into()),
        }
    }

    log::info!("Interactive session finished");
    println!("👋 Goodbye!");
    Ok(())
}

fn generate_flow(
    password_generator: &mut PasswordGenerator,
    defaults: &mut GenerationConfig,
    evaluator: &Evaluator,
) -> Result<(), InquireError> {
    let answer = Text::new("Password length (4-64):")
        .with_default(&defaults.length.to_string())
        .prompt()?;

    let length = match parse_length(&answer) {
        Ok(length) => length,
        Err(message) => {
            println!("❌ {}", message);
            return Ok(());
        }
    };

    let prompts = [
        (CharacterClass::Uppercase, "Include uppercase letters (A-Z)?"),
        (CharacterClass::Lowercase, "Include lowercase letters (a-z)?"),
        (CharacterClass::Digits, "Include numbers (0-9)?"),
        (CharacterClass::Symbols, "Include symbols (!@#$)?"),
    ];

    let mut options = GenerationConfig::only(length, []);
    for (class, message) in prompts {
        let include = Confirm::new(message)
            .with_default(defaults.includes(class))
            .prompt()?;
        if include {
            options = options.with_class(class);
        }
    }

    let exclude_ambiguous = Confirm::new("Exclude similar characters (il1Lo0O)?")
        .with_default(defaults.exclude_ambiguous)
        .prompt()?;
    options = options.exclude_ambiguous(exclude_ambiguous);

    // Remember the choices for the next round
    *defaults = options.clone();

    match password_generator.generate(&options) {
        Ok(generated) => {
            println!("\n{}\n", render_generated(&generated));

            let analyze = Confirm::new("Run a full strength check on it?")
                .with_default(false)
                .prompt()?;
            if analyze {
                println!("\n{}", render_report(&evaluator.evaluate(&generated)));
            }
        }
        Err(GeneratorError::EmptyUniverse) => {
            eprintln!("❌ {}", EMPTY_UNIVERSE_MESSAGE);
        }
    }

    Ok(())
}

/// Parse the length answer, keeping it within the generator's range.
fn parse_length(answer: &str) -> Result<usize, String> {
    let length: usize = answer
        .trim()
        .parse()
        .map_err(|_| format!("Invalid number '{}'", answer.trim()))?;

    if !(GenerationConfig::MIN_LENGTH..=GenerationConfig::MAX_LENGTH).contains(&length) {
        return Err(format!(
            "Length must be between {} and {}",
            GenerationConfig::MIN_LENGTH,
            GenerationConfig::MAX_LENGTH
        ));
    }

    Ok(length)
}

fn check_flow(evaluator: &Evaluator) -> Result<(), InquireError> {
    let password = Password::new("Enter password to check:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .with_display_toggle_enabled()
        .without_confirmation()
        .prompt()?;

    if password.is_empty() {
        println!("{}", EMPTY_INPUT_MESSAGE);
    } else {
        println!("\n{}", render_report(&evaluator.evaluate(&password)));
    }

    Ok(())
}
