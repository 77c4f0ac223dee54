//! Paper metadata retrieval and templated extracts for arXiv.
//!
//! `arxivist` looks up a single paper on the arXiv catalog by identifier, projects the Atom
//! feed the catalog answers with into a typed [`PaperRecord`](record::PaperRecord), and renders
//! that record through a user-supplied text template so it can be dropped into a document.
//!
//! # Features
//!
//! - **Identifier escaping**: raw identifiers (new-style `1706.03762`, old-style
//!   `math.GT/0309136`, version suffixes) are percent-encoded for the query URL without ever
//!   being encoded twice
//! - **Explicit outcomes**: a lookup either yields a fully populated record or a typed
//!   [`RetrievalError`](error::RetrievalError) that tells transport failures apart from papers
//!   that do not exist
//! - **Templates**: `{{title}}`, `{{id}}`, `{{summary}}`, `{{authors}}`, `{{updated}}` and
//!   `{{published}}` are substituted everywhere they occur; everything else is left alone
//! - **Settings**: the template and catalog endpoint persist as TOML, merged over defaults
//!
//! # Getting Started
//!
//! ```no_run
//! use arxivist::{pipeline::RetrievalPipeline, template::Template};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!   let pipeline = RetrievalPipeline::new();
//!   let extract = pipeline.retrieve("1706.03762", &Template::default()).await?;
//!   println!("{extract}");
//!   Ok(())
//! }
//! ```
//!
//! # Module Organization
//!
//! - [`encode`]: identifier escaping for the query URL
//! - [`client`]: the catalog client and the text transport it sits on
//! - [`response`]: markup tree construction and projection into records
//! - [`record`]: the [`PaperRecord`](record::PaperRecord) type
//! - [`template`]: placeholder vocabulary and rendering
//! - [`pipeline`]: encode, request, parse and render in one call
//! - [`settings`]: persisted user settings
//! - [`error`]: error types for every stage

#![warn(missing_docs, clippy::missing_docs_in_private_items)]

use std::{
  borrow::Cow,
  fmt::Display,
  path::{Path, PathBuf},
};

use async_trait::async_trait;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace, warn};
#[cfg(test)] use tracing_test::traced_test;
use url::Url;

pub mod client;
pub mod encode;
pub mod error;
pub mod pipeline;
pub mod record;
pub mod response;
pub mod settings;
pub mod template;

use crate::{client::*, encode::*, error::*, pipeline::*, record::*, response::*, template::*};

/// Common traits and types for ergonomic imports.
///
/// ```no_run
/// use arxivist::{pipeline::RetrievalPipeline, prelude::*, template::Template};
///
/// async fn example() -> Result<(), RetrievalError> {
///   let extract = RetrievalPipeline::new().retrieve("1706.03762", &Template::default()).await?;
///   println!("{extract}");
///   Ok(())
/// }
/// ```
pub mod prelude {
  pub use crate::{
    client::FetchText,
    error::{ArxivistError, RetrievalError},
  };
}
