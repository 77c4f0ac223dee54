//! Client for querying the arXiv catalog by identifier.
//!
//! The [`CatalogClient`] builds the query URL by appending the escaped identifier to a fixed
//! endpoint prefix and hands it to a [`FetchText`] transport. It makes exactly one request per
//! call, never retries, and does not look at the body it gets back.
//!
//! The default transport is [`HttpTransport`], a thin wrapper around [`reqwest::Client`]. Any
//! other "fetch text from a URL" primitive can be plugged in by implementing [`FetchText`].
//!
//! # Examples
//!
//! ```no_run
//! use arxivist::client::CatalogClient;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = CatalogClient::new();
//! let body = client.fetch("1706.03762").await?;
//! println!("{body}");
//! # Ok(())
//! # }
//! ```

use super::*;

/// Query prefix of the public arXiv export API.
pub const ARXIV_QUERY_ENDPOINT: &str = "https://export.arxiv.org/api/query?id_list=";

/// A primitive that fetches the body of a URL as text.
///
/// A call either yields the complete body of a successful response or a [`TransportError`].
#[async_trait]
pub trait FetchText: Send + Sync {
  /// Fetches `url` and returns its body.
  async fn fetch_text(&self, url: &str) -> Result<String, TransportError>;
}

/// [`FetchText`] over HTTP(S).
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
  /// Internal web client, reused for every request.
  client: reqwest::Client,
}

impl HttpTransport {
  /// Creates a transport with a default [`reqwest::Client`].
  pub fn new() -> Self { Self::default() }

  /// Creates a transport on top of an existing client, e.g. one with a timeout configured.
  pub fn with_client(client: reqwest::Client) -> Self { Self { client } }
}

#[async_trait]
impl FetchText for HttpTransport {
  async fn fetch_text(&self, url: &str) -> Result<String, TransportError> {
    let url = Url::parse(url)?;
    let response = self.client.get(url.as_str()).send().await?;

    let status = response.status();
    if !status.is_success() {
      return Err(TransportError::Status { status: status.as_u16(), url: url.into() });
    }

    Ok(response.text().await?)
  }
}

/// Issues one catalog query per identifier.
#[derive(Debug, Clone)]
pub struct CatalogClient<T = HttpTransport> {
  /// Prefix the escaped identifier is appended to
  endpoint:  String,
  /// Where requests are sent
  transport: T,
}

impl CatalogClient {
  /// Creates a client for the public arXiv endpoint over HTTP.
  pub fn new() -> Self { Self::with_transport(HttpTransport::new()) }
}

impl Default for CatalogClient {
  fn default() -> Self { Self::new() }
}

impl<T: FetchText> CatalogClient<T> {
  /// Creates a client for the public arXiv endpoint on top of `transport`.
  pub fn with_transport(transport: T) -> Self {
    Self { endpoint: ARXIV_QUERY_ENDPOINT.to_string(), transport }
  }

  /// Replaces the query prefix, e.g. to point at a mirror or a local test server.
  pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
    self.endpoint = endpoint.into();
    self
  }

  /// The query prefix in use.
  pub fn endpoint(&self) -> &str { &self.endpoint }

  /// The URL that [`fetch`](Self::fetch) requests for `identifier`.
  pub fn query_url(&self, identifier: &str) -> String {
    format!("{}{}", self.endpoint, encode_identifier(identifier))
  }

  /// Requests the catalog entry for `identifier` and returns the raw response body.
  ///
  /// # Errors
  ///
  /// Returns a [`TransportError`] when the request cannot be completed or the catalog answers
  /// with a non-success status.
  #[instrument(skip(self), level = "debug")]
  pub async fn fetch(&self, identifier: &str) -> Result<String, TransportError> {
    let url = self.query_url(identifier);
    debug!("Fetching from arXiv via: {url}");

    let body = self.transport.fetch_text(&url).await?;
    trace!("arXiv response: {body}");
    Ok(body)
  }
}
