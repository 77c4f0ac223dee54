//! How commands talk to the user.
//!
//! Commands never print directly. They go through a [`UserInteraction`] so the same command
//! code can drive a terminal or a test double. Rendered content goes to stdout; notices go to
//! stderr so that `arxivist get 1706.03762 > note.md` captures only the extract.

use dialoguer::Input;

use super::*;

/// Prefix for information messages
pub static INFO_PREFIX: &str = "ℹ ";
/// Prefix for in-progress messages
pub static WORKING_PREFIX: &str = "» ";
/// Prefix for success messages
pub static SUCCESS_PREFIX: &str = "✓ ";
/// Prefix for error messages
pub static ERROR_PREFIX: &str = "✗ ";
/// Prefix for warning messages
pub static WARNING_PREFIX: &str = "! ";
/// Prefix for user prompts
pub static PROMPT_PREFIX: &str = "❯ ";

/// Something a command wants to show the user.
#[derive(Debug)]
pub enum ResponseContent<'a> {
  /// Output proper, printed verbatim to stdout
  Extract(&'a str),
  /// Progress of a slow step
  Working(&'a str),
  /// Neutral information
  Info(&'a str),
  /// A step finished
  Success(&'a str),
  /// Something looks off but the command carries on
  Warning(&'a str),
  /// The command failed
  Error(&'a ArxivistdError),
}

/// The user-facing side of a command.
pub trait UserInteraction {
  /// Asks for a line of text.
  fn prompt(&self, message: &str) -> Result<String>;
  /// Shows `content` to the user.
  fn reply(&self, content: ResponseContent) -> Result<()>;
}

/// [`UserInteraction`] on the process terminal.
pub struct Terminal;

impl UserInteraction for Terminal {
  fn prompt(&self, message: &str) -> Result<String> {
    Ok(
      Input::<String>::new()
        .with_prompt(format!("{}{}", style(PROMPT_PREFIX).cyan(), message))
        .allow_empty(true)
        .interact_text()?,
    )
  }

  fn reply(&self, content: ResponseContent) -> Result<()> {
    match content {
      ResponseContent::Extract(text) => println!("{text}"),
      ResponseContent::Working(message) =>
        eprintln!("{}{}", style(WORKING_PREFIX).cyan(), style(message).dim()),
      ResponseContent::Info(message) => eprintln!("{}{}", style(INFO_PREFIX).cyan(), message),
      ResponseContent::Success(message) =>
        eprintln!("{}{}", style(SUCCESS_PREFIX).green(), style(message).green()),
      ResponseContent::Warning(message) =>
        eprintln!("{}{}", style(WARNING_PREFIX).yellow(), style(message).yellow()),
      ResponseContent::Error(error) =>
        eprintln!("{}{}", style(ERROR_PREFIX).red(), style(error).red()),
    }
    Ok(())
  }
}
