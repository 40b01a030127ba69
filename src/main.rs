//! Command line front end.
//! Validates a JSON input record against a YAML rule file and prints the
//! collected errors as JSON.
//!
//! Usage: `formcheck [RULES_FILE] [INPUT_FILE]`. Without arguments, the paths
//! come from `FORMCHECK_RULES` and `FORMCHECK_INPUT` (a `.env` file is read
//! first), then from the defaults in [`formcheck::consts`].

use std::{env, process::ExitCode};

use anyhow::{Context, Result};
use dotenv::dotenv;
use log::{error, info, warn};

use formcheck::{
    config::{load_record, FormConfig},
    consts::{DEFAULT_INPUT_PATH, DEFAULT_RULES_PATH, INPUT_PATH_VAR, RULES_PATH_VAR},
    Validator,
};

const EXIT_INVALID_INPUT: u8 = 1;
const EXIT_CONFIG_ERROR: u8 = 2;

fn main() -> ExitCode {
    // Load .env before reading any setting
    dotenv().ok();
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    match run() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(EXIT_INVALID_INPUT),
        Err(e) => {
            error!("{:#}", e);
            ExitCode::from(EXIT_CONFIG_ERROR)
        }
    }
}

/// Returns whether the input record passed validation
fn run() -> Result<bool> {
    let mut args = env::args().skip(1);
    let rules_path = path_setting(args.next(), RULES_PATH_VAR, DEFAULT_RULES_PATH);
    let input_path = path_setting(args.next(), INPUT_PATH_VAR, DEFAULT_INPUT_PATH);

    let config = FormConfig::load(&rules_path)
        .with_context(|| format!("Failed to load rules from {}", rules_path))?;
    let mut validator = Validator::from_config(&config).context("Invalid rule declaration")?;

    let record = load_record(&input_path)
        .with_context(|| format!("Failed to load input record from {}", input_path))?;
    validator.make(&record);

    let report = serde_json::to_string_pretty(validator.errors())
        .context("Failed to serialize validation errors")?;
    println!("{}", report);

    if validator.passes() {
        info!("{} passed validation", input_path);
    } else {
        warn!(
            "{} failed validation on {} field(s)",
            input_path,
            validator.errors().len()
        );
    }
    Ok(validator.passes())
}

/// Command line argument first, then environment, then default
fn path_setting(argument: Option<String>, variable: &str, default: &str) -> String {
    argument
        .or_else(|| env::var(variable).ok())
        .unwrap_or_else(|| default.to_string())
}
