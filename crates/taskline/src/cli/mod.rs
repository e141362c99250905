//! # CLI Layer
//!
//! This module is the only place that knows about terminal I/O, argument parsing and
//! exit status. It opens the config store for the current user, dispatches to
//! `tasklineapp::commands` and prints the structured result.

mod render;
mod setup;

use anyhow::Context;
use clap::Parser;
use render::{print_messages, render_config, render_value};
use setup::{Cli, Commands, ConfigCommand};
use tasklineapp::commands::config::{self, ConfigAction};
use tasklineapp::config::ConfigStore;
use tracing_subscriber::EnvFilter;

/// Returns `Ok(false)` when the command ran but reported an error to the user.
pub fn run() -> anyhow::Result<bool> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let store = ConfigStore::for_current_user().context("failed to open configuration")?;

    match cli.command {
        Commands::Config { action } => handle_config(&store, action),
    }
}

fn handle_config(store: &ConfigStore, command: Option<ConfigCommand>) -> anyhow::Result<bool> {
    let action = match command {
        None | Some(ConfigCommand::Show) => ConfigAction::ShowAll,
        Some(ConfigCommand::Get { key }) => ConfigAction::ShowKey(key),
        Some(ConfigCommand::Set { key, value, strict }) => ConfigAction::Set { key, value, strict },
        Some(ConfigCommand::Path) => ConfigAction::Path,
        Some(ConfigCommand::Reset) => ConfigAction::Reset,
    };
    tracing::debug!(?action, "running config command");

    let result = config::run(store, action)?;
    if let Some(document) = &result.config {
        print!("{}", render_config(document));
    }
    if let Some(value) = &result.value {
        print!("{}", render_value(value));
    }
    print_messages(&result.messages);
    Ok(!result.has_errors())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
