//! Error types for the arxivist library.
//!
//! Each stage of a lookup has its own narrow error so that callers only ever match on the
//! outcomes that stage can actually produce:
//! - [`TransportError`] from the [`CatalogClient`](crate::client::CatalogClient)
//! - [`MarkupError`] from building the response tree
//! - [`EntryError`] from projecting the tree into a record
//!
//! The [`RetrievalPipeline`](crate::pipeline::RetrievalPipeline) folds these into a single
//! [`RetrievalError`], whose `Display` text is the notice shown to a user.
//!
//! # Examples
//!
//! ```no_run
//! use arxivist::{error::RetrievalError, pipeline::RetrievalPipeline};
//!
//! # async fn example() {
//! match RetrievalPipeline::new().lookup("nonexistent.0000").await {
//!   Ok(record) => println!("Found: {}", record.title),
//!   Err(e @ RetrievalError::NotFound { .. }) => println!("{e}"),
//!   Err(e) => println!("Lookup failed: {e}"),
//! }
//! # }
//! ```

use thiserror::Error;

/// Error type alias used for the [`arxivist`](crate) crate.
pub type Result<T, E = ArxivistError> = core::result::Result<T, E>;

/// The outbound request for a paper could not be completed.
///
/// Network level failures and non-success statuses are both terminal for a lookup and are not
/// retried.
#[derive(Error, Debug)]
pub enum TransportError {
  /// The request could not be sent or its body could not be read.
  ///
  /// This covers DNS failures, refused or reset connections, timeouts and TLS errors.
  #[error(transparent)]
  Request(#[from] reqwest::Error),

  /// The catalog answered with a non-success status.
  #[error("catalog responded with status {status} for {url}")]
  Status {
    /// HTTP status code returned by the catalog
    status: u16,
    /// The query URL that was requested
    url:    String,
  },

  /// The query URL built from the endpoint and identifier is not a valid URL.
  #[error(transparent)]
  InvalidUrl(#[from] url::ParseError),
}

/// A response body could not be read as a markup document.
#[derive(Error, Debug)]
pub enum MarkupError {
  /// The underlying reader rejected the document.
  #[error(transparent)]
  Xml(#[from] quick_xml::Error),

  /// The document ended while an element was still open.
  #[error("element <{0}> is never closed")]
  Unclosed(String),

  /// The document contains no element at all.
  #[error("document has no root element")]
  NoRoot,

  /// A second top-level element follows the root.
  #[error("unexpected top-level element <{0}> after the root")]
  TrailingRoot(String),
}

/// The response could not be projected into a single record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EntryError {
  /// The response holds no usable entry.
  ///
  /// Malformed documents, empty feeds and the catalog's own error entries all end up here.
  #[error("no entry found in catalog response")]
  NotFound,

  /// The response holds several entries and the parser is configured to reject them.
  ///
  /// Carries the `id` of every candidate entry in document order.
  #[error("catalog response contains {} candidate entries", .0.len())]
  Ambiguous(Vec<String>),
}

/// Terminal outcome of a failed lookup.
///
/// Every variant keeps the identifier exactly as the user supplied it. The `Display` output is
/// meant to be shown to the user as is.
#[derive(Error, Debug)]
pub enum RetrievalError {
  /// The catalog could not be reached or answered with an error status.
  #[error("Failed to get arXiv. Check your internet connection.")]
  TransportFailure {
    /// Identifier the lookup was made for
    identifier: String,
    /// What went wrong on the wire
    #[source]
    source:     TransportError,
  },

  /// The catalog answered but no paper matches the identifier.
  #[error("{identifier} not found on arXiv.")]
  NotFound {
    /// Identifier the lookup was made for
    identifier: String,
  },

  /// Several entries matched and the configured policy refuses to pick one.
  #[error("Could not automatically resolve disambiguation.")]
  DisambiguationUnresolved {
    /// Identifier the lookup was made for
    identifier: String,
    /// The `id` of each candidate entry
    candidates: Vec<String>,
  },
}

impl RetrievalError {
  /// The identifier the failed lookup was made for.
  pub fn identifier(&self) -> &str {
    match self {
      Self::TransportFailure { identifier, .. }
      | Self::NotFound { identifier }
      | Self::DisambiguationUnresolved { identifier, .. } => identifier,
    }
  }
}

/// Errors that can occur anywhere in the arxivist library.
#[derive(Error, Debug)]
pub enum ArxivistError {
  /// A lookup failed.
  #[error(transparent)]
  Retrieval(#[from] RetrievalError),

  /// Reading or writing the settings file failed.
  #[error(transparent)]
  Path(#[from] std::io::Error),

  /// The settings file is not valid TOML or has fields of the wrong type.
  #[error(transparent)]
  TomlDe(#[from] toml::de::Error),

  /// The settings could not be written as TOML.
  #[error(transparent)]
  TomlSer(#[from] toml::ser::Error),

  /// The configured catalog endpoint is not a valid URL.
  #[error("invalid catalog endpoint: {0}")]
  Endpoint(#[from] url::ParseError),

  /// Any other configuration problem.
  #[error("{0}")]
  Config(String),
}
