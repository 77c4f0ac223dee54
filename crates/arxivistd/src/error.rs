//! Error types for the arxivist CLI.

use thiserror::Error;

use super::*;

/// Error type alias used for the CLI.
pub type Result<T> = core::result::Result<T, ArxivistdError>;

/// Errors that can end a CLI command.
///
/// The `Display` text of each variant is what the user sees as the failure notice.
#[derive(Error, Debug)]
pub enum ArxivistdError {
  /// A lookup failed; the message is the library's notice for it.
  #[error(transparent)]
  Retrieval(#[from] RetrievalError),

  /// Loading or saving settings failed.
  #[error(transparent)]
  Arxivist(#[from] ArxivistError),

  /// Prompting the user failed, e.g. because stdin is not a terminal.
  #[error(transparent)]
  Dialog(#[from] dialoguer::Error),

  /// Reading or writing the target document failed.
  #[error(transparent)]
  Path(#[from] std::io::Error),

  /// The record could not be printed as JSON.
  #[error(transparent)]
  Json(#[from] serde_json::Error),

  /// The requested insertion point is not usable in the target document.
  #[error("{0}")]
  Cursor(String),
}
