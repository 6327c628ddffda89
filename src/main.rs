use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;

use rust_passforge::cli::{self, Args, CliCommand};
use rust_passforge::core::Config;
use rust_passforge::logging;

fn main() -> Result<()> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();

    let mut config = Config::load();
    if let Some(path) = &args.deny_list {
        config.deny_list_path = Some(path.clone());
    }

    logging::init(&config).context("Failed to initialize logging")?;
    config.log_warnings();
    log::debug!("Loaded config: {:?}", config);

    let evaluator = config.evaluator()?;
    log::debug!("Deny-list holds {} entries", evaluator.deny_list().len());

    match args.command {
        Some(CliCommand::Generate(generate)) => {
            cli::handlers::handle_generate(&generate, &config, args.json)
        }
        Some(CliCommand::Check { password }) => {
            cli::handlers::handle_check(password, &evaluator, args.json)
        }
        Some(CliCommand::Menu) | None => cli::menu::run_cli_menu(&config, &evaluator),
    }
}
