//! Command handlers for the CLI.

use super::*;

pub mod config;
pub mod get;
pub mod template;

pub use config::{config, ConfigCommands};
pub use get::{get, GetArgs};
pub use template::{template, TemplateCommands};

/// Available commands for the CLI
#[derive(Subcommand, Clone)]
pub enum Commands {
  /// Fetch a paper by its arXiv identifier and render it through the template
  Get(GetArgs),

  /// Show or change the extract template
  Template {
    /// What to do with the template
    #[command(subcommand)]
    cmd: TemplateCommands,
  },

  /// Inspect the settings file
  Config {
    /// What to show
    #[command(subcommand)]
    cmd: ConfigCommands,
  },
}

/// Expands `\n`, `\t` and `\\` in a template typed on the command line.
///
/// Any other backslash is kept as it is.
pub fn unescape_template(raw: &str) -> Template {
  let mut template = String::with_capacity(raw.len());
  let mut chars = raw.chars();
  while let Some(c) = chars.next() {
    if c != '\\' {
      template.push(c);
      continue;
    }
    match chars.next() {
      Some('n') => template.push('\n'),
      Some('t') => template.push('\t'),
      Some('\\') => template.push('\\'),
      Some(other) => {
        template.push('\\');
        template.push(other);
      },
      None => template.push('\\'),
    }
  }
  Template::new(template)
}

/// Warns about placeholder-shaped tokens the renderer will not substitute.
pub fn warn_unknown_placeholders<I: UserInteraction>(
  interaction: &I,
  template: &Template,
) -> Result<()> {
  for unknown in template.unknown_placeholders() {
    interaction.reply(ResponseContent::Warning(&format!(
      "{unknown} is not a known placeholder and will be left as is (see `arxivist template vars`)"
    )))?;
  }
  Ok(())
}
