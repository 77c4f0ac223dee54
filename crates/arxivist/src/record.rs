//! The typed result of a successful lookup.

use super::*;

/// Metadata for one paper, projected from a catalog entry.
///
/// A record only exists for a lookup that succeeded, and then every field is populated. Fields
/// the catalog left out are empty strings, never absent. Dates are kept exactly as the catalog
/// wrote them.
///
/// # Examples
///
/// ```
/// use arxivist::record::PaperRecord;
///
/// let record = PaperRecord {
///   title: "Attention Is All You Need".into(),
///   authors: vec!["Ashish Vaswani".into(), "Noam Shazeer".into()],
///   ..PaperRecord::default()
/// };
/// assert_eq!(record.authors_joined(), "Ashish Vaswani, Noam Shazeer");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaperRecord {
  /// Canonical identifier URL returned by the catalog, e.g. `http://arxiv.org/abs/1706.03762v7`
  pub id:        String,
  /// Paper title, possibly spanning several lines
  pub title:     String,
  /// Abstract text with its original whitespace
  pub summary:   String,
  /// Timestamp of the first version
  pub published: String,
  /// Timestamp of the latest version
  pub updated:   String,
  /// Author names in the order the catalog lists them
  pub authors:   Vec<String>,
}

impl PaperRecord {
  /// Author names joined with `", "`; empty when there are no authors.
  pub fn authors_joined(&self) -> String { self.authors.join(", ") }
}

impl Display for PaperRecord {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{} ({})", self.title.trim(), self.id)
  }
}
