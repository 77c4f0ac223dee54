//! Inserting rendered extracts into a document file.

use super::*;

/// Inserts `text` into the file at `path` at byte `offset`, replacing nothing.
///
/// Without an offset the text is appended. A missing file is treated as an empty document and
/// created. Returns the cursor position right after the inserted text.
///
/// # Errors
///
/// Fails if the file cannot be read or written, or if `offset` lies past the end of the
/// document or inside a multi-byte character.
pub async fn insert_at(path: &Path, offset: Option<usize>, text: &str) -> Result<usize> {
  let mut document = match tokio::fs::read_to_string(path).await {
    Ok(content) => content,
    Err(e) if e.kind() == std::io::ErrorKind::NotFound => String::new(),
    Err(e) => return Err(e.into()),
  };

  let offset = offset.unwrap_or(document.len());
  if offset > document.len() {
    return Err(ArxivistdError::Cursor(format!(
      "Cannot insert at byte {offset}: {} is only {} bytes long",
      path.display(),
      document.len()
    )));
  }
  if !document.is_char_boundary(offset) {
    return Err(ArxivistdError::Cursor(format!(
      "Cannot insert at byte {offset}: it falls inside a character of {}",
      path.display()
    )));
  }

  document.insert_str(offset, text);
  tokio::fs::write(path, document).await?;
  debug!("Inserted {} bytes into {} at {offset}", text.len(), path.display());
  Ok(offset + text.len())
}
