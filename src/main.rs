//! wikiterm - Entry Point

use clap::Parser;
use std::process::ExitCode;
use tracing::{error, info};
use wikiterm::model::AppError;

/// wikiterm - search and read MediaWiki articles in the terminal
#[derive(Parser, Debug)]
#[command(name = "wikiterm")]
#[command(version)]
#[command(about = "Search Wikipedia or the Arch wiki and read articles in the terminal")]
pub struct Args {}

fn main() -> ExitCode {
    let _args = Args::parse();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "Exiting with error");
            eprintln!("wikiterm: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), AppError> {
    // Defaults → Config File
    let config_file = wikiterm::config::load_config()?;
    let config = wikiterm::config::merge_config(config_file)?;

    wikiterm::logging::init(&config.log_file_path)?;

    info!(config = ?config, "Configuration loaded and resolved");

    wikiterm::view::run(&config)
}
