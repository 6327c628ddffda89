// src/cli/handlers.rs
use std::fmt;
use std::io::{self, BufRead};

use anyhow::{Context, Result};
use inquire::{Password, PasswordDisplayMode};
use serde_json::{json, Value};

use crate::cli::GenerateArgs;
use crate::core::Config;
use crate::evaluator::Evaluator;
use crate::generators::{quick_strength, quick_strength_score, GeneratorError, PasswordGenerator};
use crate::models::StrengthReport;
use crate::utils::{check_glyph, generated_style, percentage_bar, tier_style};

pub const EMPTY_UNIVERSE_MESSAGE: &str = "Please select at least one character type";
pub const EMPTY_INPUT_MESSAGE: &str = "Enter a password to check its security level";

const BAR_WIDTH: usize = 32;

// Handlers for CLI commands

pub fn handle_generate(args: &GenerateArgs, config: &Config, json: bool) -> Result<()> {
    let options = args.to_config(&config.generation_defaults());
    let result = PasswordGenerator::new().generate(&options);

    if json {
        println!("{}", generation_json(&result));
    }

    match result {
        Ok(password) => {
            log::info!("Generated a {}-character password", options.length);
            if !json {
                println!("{}", render_generated(&password));
            }
            Ok(())
        }
        Err(GeneratorError::EmptyUniverse) => {
            log::warn!("Generation refused: no character classes left");
            if !json {
                eprintln!("❌ {}", EMPTY_UNIVERSE_MESSAGE);
            }
            Err(GeneratorError::EmptyUniverse.into())
        }
    }
}

pub fn handle_check(password: Option<String>, evaluator: &Evaluator, json: bool) -> Result<()> {
    let password = match password {
        Some(password) => password,
        None if json => read_stdin_line()?,
        None => Password::new("Enter password to check:")
            .with_display_mode(PasswordDisplayMode::Masked)
            .with_display_toggle_enabled()
            .without_confirmation()
            .with_help_message("Ctrl+R toggles visibility")
            .prompt()?,
    };

    if json {
        let report = evaluator.evaluate(&password);
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if password.is_empty() {
        println!("{}", EMPTY_INPUT_MESSAGE);
        return Ok(());
    }

    let report = evaluator.evaluate(&password);
    log::info!("Checked a password: {} ({}%)", report.tier, report.percentage);
    print!("{}", render_report(&report));
    Ok(())
}

fn read_stdin_line() -> Result<String> {
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read password from stdin")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// JSON document describing a generation attempt.
pub fn generation_json(result: &std::result::Result<String, GeneratorError>) -> Value {
    match result {
        Ok(password) => json!({
            "success": true,
            "password": password,
            "strength": quick_strength(password),
            "score": quick_strength_score(password),
        }),
        Err(e) => json!({
            "success": false,
            "error": e.to_string(),
        }),
    }
}

pub fn render_generated(password: &str) -> String {
    let strength = quick_strength(password);
    format!(
        "Generated Password: {}\nStrength: {}",
        password,
        generated_style(strength).apply_to(strength.label())
    )
}

/// Text view of a report, written straight to any formatter.
pub struct ReportView<'a>(pub &'a StrengthReport);

impl fmt::Display for ReportView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.0;

        writeln!(
            f,
            "Password Strength: {}",
            tier_style(report.tier).apply_to(report.tier.label())
        )?;
        writeln!(f, "{}", percentage_bar(report.percentage, BAR_WIDTH))?;
        writeln!(
            f,
            "Score: {}/{} ({}%)",
            report.score,
            report.max_score(),
            report.percentage
        )?;

        writeln!(f, "\n🛡  Security Checks")?;
        for outcome in &report.checks {
            writeln!(
                f,
                "  {:<24} {}",
                outcome.check.label(),
                check_glyph(outcome.passed)
            )?;
        }

        if !report.feedback.is_empty() {
            writeln!(f, "\nSuggestions:")?;
            for tip in &report.feedback {
                writeln!(f, "  • {}", tip)?;
            }
        }

        Ok(())
    }
}

pub fn render_report(report: &StrengthReport) -> String {
    ReportView(report).to_string()
}
