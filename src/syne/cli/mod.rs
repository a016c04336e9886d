//! # CLI Layer
//!
//! The only place that parses arguments, writes to the terminal and decides
//! exit codes. Everything it needs from the library goes through
//! [`SyneApi`].
//!
//! - `setup.rs`: clap definitions
//! - `print.rs`: terminal output for `CmdResult`s
//! - `run()`: logging, config loading and dispatch

mod print;
mod setup;

use clap::Parser;
use print::{print_messages, print_notes, print_settings};
use setup::Cli;
use syne::api::SyneApi;
use syne::config::{SyneConfig, default_config_file};
use syne::editor::SystemEditor;
use syne::error::{Result, SyneError};
use tracing_subscriber::EnvFilter;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config_file = cli.config.clone().or_else(default_config_file);
    let config = match &config_file {
        Some(file) => SyneConfig::load(file)?,
        None => SyneConfig::default().normalized()?,
    };
    let api = SyneApi::new(config, config_file, SystemEditor);

    let raw = cli.raw_request();
    if raw.show_defaults {
        let result = api.show_defaults();
        print_settings(&result);
        print_messages(&result.messages);
        Ok(())
    } else if raw.list_notes {
        let result = api.list_notes()?;
        print_notes(&result.listed_notes);
        print_messages(&result.messages);
        Ok(())
    } else if raw.filename.is_some() {
        let result = api.open_note(&raw)?;
        print_messages(&result.messages);
        Ok(())
    } else {
        Err(SyneError::Usage("Please enter a valid filename.".to_string()))
    }
}

/// Diagnostics go to stderr: warnings by default, debug with `--verbose`,
/// and `RUST_LOG` overrides both.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "syne=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}
