//! Persisted user settings.
//!
//! Settings live in a small TOML file:
//!
//! ```toml
//! template = "{{title}}\n{{authors}}\n{{summary}}"
//! endpoint = "https://export.arxiv.org/api/query?id_list="
//! entry_policy = "first"
//! ```
//!
//! Every key is optional. Whatever the file leaves out, and the whole file if it does not
//! exist, falls back to [`Settings::default`]. The library never reads settings on its own; the
//! caller loads them and passes the values to the pipeline it builds.

use super::*;

/// User settings for rendering and retrieval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
  /// Template extracts are rendered with
  pub template:     Template,
  /// Catalog query prefix the escaped identifier is appended to
  pub endpoint:     String,
  /// What to do when the catalog returns several entries
  pub entry_policy: EntryPolicy,
}

impl Default for Settings {
  fn default() -> Self {
    Self {
      template:     Template::default(),
      endpoint:     ARXIV_QUERY_ENDPOINT.to_string(),
      entry_policy: EntryPolicy::default(),
    }
  }
}

impl Settings {
  /// Platform specific location of the settings file, e.g.
  /// `~/.config/arxivist/settings.toml` on Linux.
  ///
  /// # Errors
  ///
  /// Fails if the platform has no notion of a configuration directory.
  pub fn default_path() -> Result<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("arxivist").join("settings.toml")).ok_or_else(|| {
      ArxivistError::Config("Could not determine a configuration directory".to_string())
    })
  }

  /// Parses settings from TOML, filling in defaults for missing keys.
  ///
  /// # Errors
  ///
  /// Fails on malformed TOML, values of the wrong type, or an endpoint that is not a URL.
  pub fn from_toml(content: &str) -> Result<Self> {
    let settings: Self = toml::from_str(content)?;
    settings.validate()?;
    Ok(settings)
  }

  /// Serializes these settings as TOML.
  pub fn to_toml(&self) -> Result<String> { Ok(toml::to_string_pretty(self)?) }

  /// Checks that the endpoint is an absolute URL.
  pub fn validate(&self) -> Result<()> {
    Url::parse(&self.endpoint)?;
    Ok(())
  }

  /// Loads settings from `path`, merged over the defaults.
  ///
  /// A missing file is not an error and yields the defaults.
  pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    match tokio::fs::read_to_string(path).await {
      Ok(content) => {
        trace!("Loaded settings from {}", path.display());
        Self::from_toml(&content)
      },
      Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
        debug!("No settings at {}, using defaults", path.display());
        Ok(Self::default())
      },
      Err(e) => Err(e.into()),
    }
  }

  /// Writes settings to `path`, creating parent directories as needed.
  pub async fn save(&self, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    self.validate()?;
    if let Some(parent) = path.parent() {
      tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(path, self.to_toml()?).await?;
    debug!("Saved settings to {}", path.display());
    Ok(())
  }

  /// Builds an HTTP pipeline configured by these settings.
  pub fn pipeline(&self) -> RetrievalPipeline {
    RetrievalPipeline::from_parts(
      CatalogClient::new().with_endpoint(self.endpoint.clone()),
      ResponseParser::new().with_policy(self.entry_policy),
    )
  }
}
