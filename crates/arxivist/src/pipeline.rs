//! One-shot retrieval: identifier in, rendered extract out.
//!
//! A [`RetrievalPipeline`] runs the stages strictly in order and stops at the first failure:
//!
//! ```text
//! encode ─▶ request ─▶ parse ─▶ render
//!              │          │
//!              ▼          ▼
//!      TransportFailure  NotFound / DisambiguationUnresolved
//! ```
//!
//! Nothing is cached and nothing is retried. A pipeline holds no mutable state, so one value
//! can serve any number of concurrent lookups.

use super::*;

/// Runs lookups against the catalog and renders the results.
#[derive(Debug, Clone)]
pub struct RetrievalPipeline<T = HttpTransport> {
  /// Issues the catalog query
  client: CatalogClient<T>,
  /// Turns the response into a record
  parser: ResponseParser,
}

impl RetrievalPipeline {
  /// Creates a pipeline for the public arXiv endpoint that takes the first of several entries.
  pub fn new() -> Self { Self::from_parts(CatalogClient::new(), ResponseParser::new()) }
}

impl Default for RetrievalPipeline {
  fn default() -> Self { Self::new() }
}

impl<T: FetchText> RetrievalPipeline<T> {
  /// Assembles a pipeline from an already configured client and parser.
  pub fn from_parts(client: CatalogClient<T>, parser: ResponseParser) -> Self {
    Self { client, parser }
  }

  /// The catalog client this pipeline queries through.
  pub fn client(&self) -> &CatalogClient<T> { &self.client }

  /// The parser this pipeline projects responses with.
  pub fn parser(&self) -> &ResponseParser { &self.parser }

  /// Fetches and parses the catalog entry for `identifier`.
  ///
  /// # Errors
  ///
  /// - [`RetrievalError::TransportFailure`] if the request fails or is answered with an error
  ///   status
  /// - [`RetrievalError::NotFound`] if the catalog has no entry for the identifier or its answer
  ///   cannot be read
  /// - [`RetrievalError::DisambiguationUnresolved`] if several entries match and the parser's
  ///   policy is [`EntryPolicy::Reject`]
  #[instrument(skip(self), level = "debug")]
  pub async fn lookup(&self, identifier: &str) -> Result<PaperRecord, RetrievalError> {
    let body = self.client.fetch(identifier).await.map_err(|source| {
      debug!("Request failed: {source}");
      RetrievalError::TransportFailure { identifier: identifier.to_string(), source }
    })?;

    let record = self.parser.parse(&body).map_err(|e| match e {
      EntryError::NotFound => RetrievalError::NotFound { identifier: identifier.to_string() },
      EntryError::Ambiguous(candidates) =>
        RetrievalError::DisambiguationUnresolved { identifier: identifier.to_string(), candidates },
    })?;

    debug!("Found paper: {record}");
    Ok(record)
  }

  /// Looks up `identifier` and renders the result through `template`.
  ///
  /// # Errors
  ///
  /// Fails exactly when [`lookup`](Self::lookup) does; rendering itself cannot fail.
  pub async fn retrieve(
    &self,
    identifier: &str,
    template: &Template,
  ) -> Result<String, RetrievalError> {
    let record = self.lookup(identifier).await?;
    Ok(template.render(&record))
  }
}
