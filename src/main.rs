//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `ip_reputation` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use ip_reputation::config::Opt;
use ip_reputation::initialization::init_logger_with;
use ip_reputation::{run_check, Config, RunError};

#[tokio::main]
async fn main() -> Result<()> {
    // ABUSEIPDB_API_KEY may live in a .env file, either in the current
    // directory or next to the executable
    if dotenvy::dotenv().is_err() {
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let env_path = exe_dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                }
            }
        }
    }

    let config = Config::from(Opt::parse());

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    match run_check(config).await {
        Ok(_) => Ok(()),
        Err(RunError::InputMissing(path)) => {
            log::debug!("Input file not found: {}", path.display());
            println!("[!] CSV path not set or file missing.");
            Ok(())
        }
        Err(e) => {
            eprintln!("ip_reputation error: {:#}", e);
            process::exit(1);
        }
    }
}
