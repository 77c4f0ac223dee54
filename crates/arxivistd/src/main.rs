//! Command line front end for inserting arXiv paper extracts.
//!
//! This crate wraps the `arxivist` library in a small CLI. It covers the parts the library
//! leaves to its caller:
//! - Asking for a paper identifier when none is given
//! - Delivering the rendered extract to stdout or into a document at a cursor offset
//! - Editing the persisted template
//! - Reporting failures as readable notices
//!
//! # Usage
//!
//! ```bash
//! # Print the extract for a paper using the configured template
//! arxivist get 1706.03762
//!
//! # Insert it into a note at byte offset 120
//! arxivist get 1706.03762 --insert notes.md --at 120
//!
//! # Change the template
//! arxivist template set '## {{title}}\n{{authors}}\n\n{{summary}}'
//!
//! # List the placeholders a template can use
//! arxivist template vars
//! ```
//!
//! Logging goes to stderr and is controlled with `-v` (repeatable) or `RUST_LOG`.

#![warn(missing_docs, clippy::missing_docs_in_private_items)]

use std::{
  path::{Path, PathBuf},
  process::ExitCode,
};

use arxivist::{
  error::{ArxivistError, RetrievalError},
  record::PaperRecord,
  settings::Settings,
  template::{Placeholder, Template},
};
use clap::{builder::ArgAction, Args, Parser, Subcommand};
use console::style;
use tracing::{debug, trace};
use tracing_subscriber::EnvFilter;

pub mod commands;
pub mod document;
pub mod error;
pub mod interaction;

use crate::{commands::*, document::*, error::*, interaction::*};

/// Command line interface configuration and argument parsing
#[derive(Parser)]
#[command(author, version, about = "Fetch arXiv papers and render them through a template")]
pub struct Cli {
  /// Verbose mode (-v, -vv, -vvv) for different levels of logging detail
  #[arg(
        short,
        long,
        action = ArgAction::Count,
        global = true,
        help = "Increase logging verbosity"
    )]
  verbose: u8,

  /// Path to the settings file. If not specified, uses the default platform-specific
  /// configuration directory.
  #[arg(long, short, global = true)]
  config: Option<PathBuf>,

  /// Catalog query prefix to use instead of the configured one for this invocation
  #[arg(long, global = true)]
  endpoint: Option<String>,

  /// The subcommand to execute
  #[command(subcommand)]
  command: Commands,
}

/// Configures the logging system based on the verbosity level
///
/// # Arguments
///
/// * `verbosity` - Number of times the verbose flag was used
///
/// The verbosity levels are:
/// - 0: error (default)
/// - 1: warn
/// - 2: info
/// - 3: debug
/// - 4+: trace
fn setup_logging(verbosity: u8) {
  let filter = match verbosity {
    0 => "error",
    1 => "warn",
    2 => "info",
    3 => "debug",
    _ => "trace",
  };

  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .with_file(true)
    .with_line_number(true)
    .with_target(true)
    .init();
}

/// Entry point for the arxivist CLI application
///
/// Parses arguments, sets up logging and runs the requested command. A failed command is
/// reported as a notice on stderr and turns into a failing exit status; it never panics.
#[tokio::main]
async fn main() -> ExitCode {
  let cli = Cli::parse();
  setup_logging(cli.verbose);

  let terminal = Terminal;
  match run(&terminal, cli).await {
    Ok(()) => ExitCode::SUCCESS,
    Err(e) => {
      debug!("Command failed: {e:?}");
      if terminal.reply(ResponseContent::Error(&e)).is_err() {
        eprintln!("{e}");
      }
      ExitCode::FAILURE
    },
  }
}

/// Loads settings and dispatches to the command handlers.
async fn run<I: UserInteraction>(interaction: &I, cli: Cli) -> Result<()> {
  let Cli { config: config_override, endpoint, command, .. } = cli;
  let config_path = match config_override {
    Some(path) => path,
    None => Settings::default_path()?,
  };
  trace!("Using settings at: {}", config_path.display());

  match command {
    Commands::Get(get_args) => {
      let mut settings = Settings::load(&config_path).await?;
      if let Some(endpoint) = endpoint {
        settings.endpoint = endpoint;
        settings.validate()?;
      }
      get(interaction, &settings, get_args).await
    },
    Commands::Template { cmd } => template(interaction, &config_path, cmd).await,
    Commands::Config { cmd } => config(interaction, &config_path, cmd).await,
  }
}
