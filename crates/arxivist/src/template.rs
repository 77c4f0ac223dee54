//! Rendering paper records through user templates.
//!
//! A template is plain text with placeholder tokens drawn from a fixed, case-sensitive
//! vocabulary:
//!
//! | token           | value                               |
//! |-----------------|-------------------------------------|
//! | `{{title}}`     | [`PaperRecord::title`]              |
//! | `{{id}}`        | [`PaperRecord::id`]                 |
//! | `{{summary}}`   | [`PaperRecord::summary`]            |
//! | `{{authors}}`   | [`PaperRecord::authors`] joined by `", "` |
//! | `{{updated}}`   | [`PaperRecord::updated`]            |
//! | `{{published}}` | [`PaperRecord::published`]          |
//!
//! Every occurrence of a token is replaced in a single left-to-right pass, so text coming from
//! the record is never itself searched for tokens. Unknown tokens and ordinary text are copied
//! unchanged.
//!
//! ```
//! use arxivist::{record::PaperRecord, template::Template};
//!
//! let record = PaperRecord {
//!   title: "T".into(),
//!   authors: vec!["A".into(), "B".into()],
//!   summary: "S".into(),
//!   ..PaperRecord::default()
//! };
//! assert_eq!(Template::default().render(&record), "T\nA, B\nS");
//! ```

use super::*;

/// Template used until the user configures their own.
pub const DEFAULT_TEMPLATE: &str = "{{title}}\n{{authors}}\n{{summary}}";

lazy_static! {
  /// Anything shaped like a placeholder: `{{` then a run without braces then `}}`.
  static ref PLACEHOLDER: Regex = Regex::new(r"\{\{([^{}]*)\}\}").unwrap();
}

/// A recognised placeholder token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placeholder {
  /// `{{title}}`
  Title,
  /// `{{id}}`
  Id,
  /// `{{summary}}`
  Summary,
  /// `{{authors}}`
  Authors,
  /// `{{updated}}`
  Updated,
  /// `{{published}}`
  Published,
}

impl Placeholder {
  /// The whole vocabulary, in the order it is usually listed.
  pub const ALL: [Placeholder; 6] =
    [Self::Title, Self::Id, Self::Summary, Self::Authors, Self::Updated, Self::Published];

  /// Name between the braces.
  pub fn name(self) -> &'static str {
    match self {
      Self::Title => "title",
      Self::Id => "id",
      Self::Summary => "summary",
      Self::Authors => "authors",
      Self::Updated => "updated",
      Self::Published => "published",
    }
  }

  /// Looks up a placeholder by the name between the braces.
  pub fn from_name(name: &str) -> Option<Self> {
    Self::ALL.into_iter().find(|placeholder| placeholder.name() == name)
  }

  /// The string this placeholder stands for in `record`.
  pub fn value(self, record: &PaperRecord) -> Cow<'_, str> {
    match self {
      Self::Title => Cow::Borrowed(&record.title),
      Self::Id => Cow::Borrowed(&record.id),
      Self::Summary => Cow::Borrowed(&record.summary),
      Self::Authors => Cow::Owned(record.authors_joined()),
      Self::Updated => Cow::Borrowed(&record.updated),
      Self::Published => Cow::Borrowed(&record.published),
    }
  }
}

impl Display for Placeholder {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{{{{{}}}}}", self.name())
  }
}

/// Substitutes every recognised placeholder in `template` with the matching field of `record`.
///
/// Never fails. Rendering the same inputs twice gives the same output.
pub fn render(template: &str, record: &PaperRecord) -> String {
  PLACEHOLDER
    .replace_all(template, |captures: &regex::Captures| match Placeholder::from_name(&captures[1]) {
      Some(placeholder) => placeholder.value(record).into_owned(),
      None => captures[0].to_string(),
    })
    .into_owned()
}

/// A user template string.
///
/// Serializes as a bare string so it can sit directly in the settings file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Template(String);

impl Template {
  /// Wraps a template string.
  pub fn new(template: impl Into<String>) -> Self { Self(template.into()) }

  /// The raw template text.
  pub fn as_str(&self) -> &str { &self.0 }

  /// Renders `record` through this template. See [`render`].
  pub fn render(&self, record: &PaperRecord) -> String { render(&self.0, record) }

  /// Recognised placeholders used by this template, each listed once in order of first use.
  pub fn placeholders(&self) -> Vec<Placeholder> {
    let mut found = Vec::new();
    for placeholder in
      PLACEHOLDER.captures_iter(&self.0).filter_map(|captures| Placeholder::from_name(&captures[1]))
    {
      if !found.contains(&placeholder) {
        found.push(placeholder);
      }
    }
    found
  }

  /// Placeholder-shaped tokens outside the vocabulary, e.g. `{{Title}}` or `{{doi}}`.
  ///
  /// These are rendered verbatim, which is usually a typo worth pointing out.
  pub fn unknown_placeholders(&self) -> Vec<String> {
    PLACEHOLDER
      .captures_iter(&self.0)
      .filter(|captures| Placeholder::from_name(&captures[1]).is_none())
      .map(|captures| captures[0].to_string())
      .collect()
  }
}

impl Default for Template {
  fn default() -> Self { Self::new(DEFAULT_TEMPLATE) }
}

impl Display for Template {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { f.write_str(&self.0) }
}

impl From<String> for Template {
  fn from(template: String) -> Self { Self(template) }
}

impl From<&str> for Template {
  fn from(template: &str) -> Self { Self::new(template) }
}
