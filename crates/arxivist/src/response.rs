//! Reading the catalog's Atom feed into a [`PaperRecord`].
//!
//! Parsing happens in two steps. The raw body is first read into a generic tree of [`Node`]s,
//! with element names reduced to their local part so namespace prefixes never get in the way.
//! The [`ResponseParser`] then finds the feed's `entry` children and projects one of them into
//! a record by tag name.
//!
//! Anything that keeps a record from being built (a body that is not markup, a feed without
//! entries, or the catalog's own error entry) is reported as [`EntryError::NotFound`].
//!
//! # Examples
//!
//! ```
//! use arxivist::response::ResponseParser;
//!
//! let body = r#"<feed xmlns="http://www.w3.org/2005/Atom">
//!   <entry>
//!     <id>http://arxiv.org/abs/1706.03762v7</id>
//!     <title>Attention Is All You Need</title>
//!     <author><name>Ashish Vaswani</name></author>
//!   </entry>
//! </feed>"#;
//!
//! let record = ResponseParser::new().parse(body).unwrap();
//! assert_eq!(record.title, "Attention Is All You Need");
//! assert_eq!(record.authors, vec!["Ashish Vaswani"]);
//! assert_eq!(record.summary, "");
//! ```

use quick_xml::{
  events::{BytesStart, Event},
  Reader,
};

use super::*;

/// Prefix of the `id` the catalog gives to the entry it returns in place of an error.
pub const CATALOG_ERROR_ID_PREFIX: &str = "http://arxiv.org/api/errors";

/// One element of a parsed markup document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Node {
  /// Local name of the element, without any namespace prefix
  pub name:     String,
  /// Text content of this element and all its descendants in document order, unescaped and
  /// untrimmed
  pub text:     String,
  /// Child elements in document order
  pub children: Vec<Node>,
}

impl Node {
  /// Reads a whole document and returns its root element.
  ///
  /// # Errors
  ///
  /// Fails on syntax errors, mismatched or unclosed tags, and documents with zero or several
  /// top-level elements.
  pub fn parse(document: &str) -> Result<Node, MarkupError> {
    let mut reader = Reader::from_str(document);
    let mut open: Vec<Node> = Vec::new();
    let mut root = None;

    loop {
      match reader.read_event()? {
        Event::Start(start) => open.push(Node::from_start(&start)),
        Event::Empty(start) => attach(&mut open, &mut root, Node::from_start(&start))?,
        Event::End(_) =>
          if let Some(node) = open.pop() {
            attach(&mut open, &mut root, node)?;
          },
        Event::Text(text) => append_text(&mut open, &text.unescape()?),
        Event::CData(data) => append_text(&mut open, &String::from_utf8_lossy(&data)),
        Event::Eof => break,
        _ => (),
      }
    }

    if let Some(node) = open.pop() {
      return Err(MarkupError::Unclosed(node.name));
    }
    root.ok_or(MarkupError::NoRoot)
  }

  /// Builds an empty node named after the local part of `start`.
  fn from_start(start: &BytesStart) -> Self {
    Self {
      name: String::from_utf8_lossy(start.local_name().as_ref()).into_owned(),
      ..Self::default()
    }
  }

  /// First child with the given local name.
  pub fn child(&self, name: &str) -> Option<&Node> {
    self.children.iter().find(|child| child.name == name)
  }

  /// All children with the given local name, in document order.
  pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Node> + 'a {
    self.children.iter().filter(move |child| child.name == name)
  }

  /// Text of the first child with the given local name, or an empty string.
  pub fn child_text(&self, name: &str) -> String {
    self.child(name).map(|child| child.text.clone()).unwrap_or_default()
  }
}

/// Adds a run of character data to every element that is still open, so markup nested inside
/// a field does not hide its words.
fn append_text(open: &mut [Node], text: &str) {
  for node in open {
    node.text.push_str(text);
  }
}

/// Hands a finished element to its parent, or makes it the document root.
fn attach(open: &mut [Node], root: &mut Option<Node>, node: Node) -> Result<(), MarkupError> {
  match open.last_mut() {
    Some(parent) => parent.children.push(node),
    None if root.is_none() => *root = Some(node),
    None => return Err(MarkupError::TrailingRoot(node.name)),
  }
  Ok(())
}

/// What to do when a feed holds more than one entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryPolicy {
  /// Take the first entry in document order.
  #[default]
  First,
  /// Refuse to choose and report [`EntryError::Ambiguous`].
  Reject,
}

impl Display for EntryPolicy {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::First => write!(f, "first"),
      Self::Reject => write!(f, "reject"),
    }
  }
}

/// Projects catalog responses into [`PaperRecord`]s.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResponseParser {
  /// How a feed with several entries is handled
  policy: EntryPolicy,
}

impl ResponseParser {
  /// Creates a parser that takes the first of several entries.
  pub fn new() -> Self { Self::default() }

  /// Sets the policy for feeds holding several entries.
  pub fn with_policy(mut self, policy: EntryPolicy) -> Self {
    self.policy = policy;
    self
  }

  /// The configured multiple-entry policy.
  pub fn policy(&self) -> EntryPolicy { self.policy }

  /// Parses a raw response body into a record.
  ///
  /// Individual fields missing from the entry become empty strings; only the absence of any
  /// usable entry fails the parse.
  ///
  /// # Errors
  ///
  /// - [`EntryError::NotFound`] if the body is not well-formed markup, the feed holds no
  ///   entries, or the chosen entry is the catalog's error entry
  /// - [`EntryError::Ambiguous`] if the feed holds several entries under
  ///   [`EntryPolicy::Reject`]
  pub fn parse(&self, body: &str) -> Result<PaperRecord, EntryError> {
    let feed = Node::parse(body).map_err(|e| {
      debug!("Catalog response is not a readable document: {e}");
      EntryError::NotFound
    })?;

    let entries: Vec<&Node> = feed.children_named("entry").collect();
    let entry = match (entries.as_slice(), self.policy) {
      ([], _) => return Err(EntryError::NotFound),
      ([only], _) => *only,
      ([first, ..], EntryPolicy::First) => {
        warn!("Catalog returned {} entries, using the first", entries.len());
        *first
      },
      (_, EntryPolicy::Reject) =>
        return Err(EntryError::Ambiguous(
          entries.iter().map(|entry| entry.child_text("id")).collect(),
        )),
    };

    if is_catalog_error(entry) {
      debug!("Catalog answered with an error entry: {}", entry.child_text("summary").trim());
      return Err(EntryError::NotFound);
    }

    Ok(project_entry(entry))
  }
}

/// Whether `entry` is the stand-in the catalog returns for a rejected query.
fn is_catalog_error(entry: &Node) -> bool {
  entry.child("id").is_some_and(|id| id.text.trim().starts_with(CATALOG_ERROR_ID_PREFIX))
}

/// Maps the children of an `entry` onto record fields by tag name.
fn project_entry(entry: &Node) -> PaperRecord {
  PaperRecord {
    id:        entry.child_text("id"),
    title:     entry.child_text("title"),
    summary:   entry.child_text("summary"),
    published: entry.child_text("published"),
    updated:   entry.child_text("updated"),
    authors:   entry
      .children_named("author")
      .filter_map(|author| author.child("name"))
      .map(|name| name.text.clone())
      .collect(),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  /// Trimmed down copy of a real catalog answer for `1706.03762`.
  const SINGLE_ENTRY: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<feed xmlns="http://www.w3.org/2005/Atom">
  <link href="http://arxiv.org/api/query?search_query%3D%26id_list%3D1706.03762" rel="self" type="application/atom+xml"/>
  <title type="html">ArXiv Query: search_query=&amp;id_list=1706.03762&amp;start=0&amp;max_results=10</title>
  <id>http://arxiv.org/api/cHxbiOdZaP56ODnBPIenZhzg5f8</id>
  <updated>2023-08-03T00:00:00-04:00</updated>
  <opensearch:totalResults xmlns:opensearch="http://a9.com/-/spec/opensearch/1.1/">1</opensearch:totalResults>
  <entry>
    <id>http://arxiv.org/abs/1706.03762v7</id>
    <updated>2023-08-02T00:41:18Z</updated>
    <published>2017-06-12T17:57:34Z</published>
    <title>Attention Is All You Need</title>
    <summary>  The dominant sequence transduction models are based on complex recurrent or
convolutional neural networks &amp; attention.
</summary>
    <author>
      <name>Ashish Vaswani</name>
    </author>
    <author>
      <name>Noam Shazeer</name>
      <arxiv:affiliation xmlns:arxiv="http://arxiv.org/schemas/atom">Google Brain</arxiv:affiliation>
    </author>
    <arxiv:comment xmlns:arxiv="http://arxiv.org/schemas/atom">15 pages, 5 figures</arxiv:comment>
    <link href="http://arxiv.org/abs/1706.03762v7" rel="alternate" type="text/html"/>
    <arxiv:primary_category xmlns:arxiv="http://arxiv.org/schemas/atom" term="cs.CL" scheme="http://arxiv.org/schemas/atom"/>
  </entry>
</feed>
"#;

  const EMPTY_FEED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<feed xmlns="http://www.w3.org/2005/Atom">
  <title type="html">ArXiv Query: search_query=&amp;id_list=nonexistent.0000</title>
  <opensearch:totalResults xmlns:opensearch="http://a9.com/-/spec/opensearch/1.1/">0</opensearch:totalResults>
</feed>
"#;

  const ERROR_ENTRY: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<feed xmlns="http://www.w3.org/2005/Atom">
  <entry>
    <id>http://arxiv.org/api/errors#incorrect_id_format_for_not-an-id</id>
    <title>Error</title>
    <summary>incorrect id format for not-an-id</summary>
    <updated>2023-08-03T00:00:00-04:00</updated>
    <author>
      <name>arXiv api core</name>
    </author>
  </entry>
</feed>
"#;

  #[test]
  fn test_single_entry_projection() {
    let record = ResponseParser::new().parse(SINGLE_ENTRY).unwrap();

    assert_eq!(record.id, "http://arxiv.org/abs/1706.03762v7");
    assert_eq!(record.title, "Attention Is All You Need");
    assert_eq!(record.published, "2017-06-12T17:57:34Z");
    assert_eq!(record.updated, "2023-08-02T00:41:18Z");
    assert_eq!(record.authors, vec!["Ashish Vaswani", "Noam Shazeer"]);
    assert_eq!(
      record.summary,
      "  The dominant sequence transduction models are based on complex recurrent or\nconvolutional \
       neural networks & attention.\n"
    );
  }

  #[test]
  fn test_empty_feed_is_not_found() {
    assert_eq!(ResponseParser::new().parse(EMPTY_FEED), Err(EntryError::NotFound));
  }

  #[test]
  fn test_catalog_error_entry_is_not_found() {
    assert_eq!(ResponseParser::new().parse(ERROR_ENTRY), Err(EntryError::NotFound));
  }

  #[test]
  fn test_paper_titled_error_is_legitimate() {
    let body = r#"<feed><entry>
      <id>http://arxiv.org/abs/1234.5678v1</id>
      <title>Error</title>
    </entry></feed>"#;
    let record = ResponseParser::new().parse(body).unwrap();
    assert_eq!(record.title, "Error");
    assert_eq!(record.id, "http://arxiv.org/abs/1234.5678v1");
  }

  #[test]
  fn test_malformed_documents_are_not_found() {
    let parser = ResponseParser::new();
    for body in [
      "",
      "Service Unavailable",
      "<feed><entry><title>Unclosed</title></entry>",
      "<feed><entry></feed>",
      "<feed/><feed/>",
      "<feed><entry><title>&bogus;</title></entry></feed>",
    ] {
      assert_eq!(parser.parse(body), Err(EntryError::NotFound), "body: {body:?}");
    }
  }

  #[test]
  fn test_missing_fields_degrade_to_empty() {
    let body = "<feed><entry><title>Only a title</title></entry></feed>";
    let record = ResponseParser::new().parse(body).unwrap();
    assert_eq!(record, PaperRecord { title: "Only a title".into(), ..PaperRecord::default() });
  }

  #[test]
  fn test_no_authors() {
    let body = "<feed><entry><id>x</id><title>T</title><summary/></entry></feed>";
    let record = ResponseParser::new().parse(body).unwrap();
    assert!(record.authors.is_empty());
    assert_eq!(record.summary, "");
  }

  #[test]
  fn test_author_without_name_is_skipped() {
    let body = "<feed><entry><author><name>A</name></author><author/><author><name>B</name></author>\
                </entry></feed>";
    let record = ResponseParser::new().parse(body).unwrap();
    assert_eq!(record.authors, vec!["A", "B"]);
  }

  #[test]
  fn test_first_field_occurrence_wins() {
    let body = "<feed><entry><title>First</title><title>Second</title></entry></feed>";
    assert_eq!(ResponseParser::new().parse(body).unwrap().title, "First");
  }

  #[test]
  fn test_prefixed_elements_match_by_local_name() {
    let body = r#"<atom:feed xmlns:atom="http://www.w3.org/2005/Atom">
      <atom:entry><atom:title>Prefixed</atom:title>
        <atom:author><atom:name>A</atom:name></atom:author>
      </atom:entry>
    </atom:feed>"#;
    let record = ResponseParser::new().parse(body).unwrap();
    assert_eq!(record.title, "Prefixed");
    assert_eq!(record.authors, vec!["A"]);
  }

  #[test]
  fn test_cdata_text() {
    let body = "<feed><entry><summary><![CDATA[a < b]]></summary></entry></feed>";
    assert_eq!(ResponseParser::new().parse(body).unwrap().summary, "a < b");
  }

  #[test]
  fn test_nested_markup_text() {
    let body = "<feed><entry><title type=\"xhtml\">Attention <i>Is</i> All</title><summary \
                type=\"xhtml\"><div xmlns=\"http://www.w3.org/1999/xhtml\"><p>One</p> \
                <p>two <b>three</b></p></div></summary></entry></feed>";
    let record = ResponseParser::new().parse(body).unwrap();
    assert_eq!(record.title, "Attention Is All");
    assert_eq!(record.summary, "One two three");
  }

  #[traced_test]
  #[test]
  fn test_multiple_entries_take_first() {
    let body = "<feed><entry><id>a</id><title>A</title></entry><entry><id>b</id><title>B</title>\
                </entry></feed>";
    let record = ResponseParser::new().parse(body).unwrap();
    assert_eq!(record.title, "A");
    assert!(logs_contain("Catalog returned 2 entries, using the first"));
  }

  #[test]
  fn test_multiple_entries_rejected() {
    let body = "<feed><entry><id>a</id></entry><entry><id>b</id></entry></feed>";
    let parser = ResponseParser::new().with_policy(EntryPolicy::Reject);
    assert_eq!(parser.policy(), EntryPolicy::Reject);
    assert_eq!(parser.parse(body), Err(EntryError::Ambiguous(vec!["a".into(), "b".into()])));

    let single = "<feed><entry><id>a</id></entry></feed>";
    assert_eq!(parser.parse(single).unwrap().id, "a");
  }

  #[test]
  fn test_node_tree() {
    let node = Node::parse("<a x=\"1\">one<b>two</b>three<c/></a>").unwrap();
    assert_eq!(node.name, "a");
    assert_eq!(node.text, "onetwothree");
    assert_eq!(node.children.len(), 2);
    assert_eq!(node.child_text("b"), "two");
    assert_eq!(node.child_text("missing"), "");
    assert!(node.child("c").is_some_and(|c| c.children.is_empty()));
  }
}
