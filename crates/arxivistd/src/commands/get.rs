//! Module for the "get" command: fetch one paper and deliver its extract.

use super::*;

/// Arguments that can be used for the [`Commands::Get`]
#[derive(Args, Clone)]
pub struct GetArgs {
  /// arXiv identifier, e.g. "1706.03762" or "math.GT/0309136". Asked for when omitted.
  pub identifier: Option<String>,

  /// Template to render with instead of the configured one (`\n` and `\t` are expanded)
  #[arg(long, short)]
  pub template: Option<String>,

  /// Insert the extract into this file instead of printing it
  #[arg(long, short)]
  pub insert: Option<PathBuf>,

  /// Byte offset in the file to insert at (defaults to the end of the file)
  #[arg(long, requires = "insert")]
  pub at: Option<usize>,

  /// Print the retrieved record as JSON instead of rendering a template
  #[arg(long, conflicts_with_all = ["template", "insert"])]
  pub json: bool,
}

/// Function for the [`Commands::Get`] in the CLI.
pub async fn get<I: UserInteraction>(
  interaction: &I,
  settings: &Settings,
  get_args: GetArgs,
) -> Result<()> {
  let GetArgs { identifier, template, insert, at, json } = get_args;

  let identifier = match identifier {
    Some(identifier) => identifier,
    None => interaction.prompt("Enter Paper ID")?,
  };
  let identifier = identifier.trim();
  if identifier.is_empty() {
    return interaction.reply(ResponseContent::Info("No paper ID given, nothing to fetch."));
  }

  let pipeline = settings.pipeline();
  interaction.reply(ResponseContent::Working(&format!("Fetching {identifier} from arXiv")))?;

  if json {
    let record: PaperRecord = pipeline.lookup(identifier).await?;
    return interaction.reply(ResponseContent::Extract(&serde_json::to_string_pretty(&record)?));
  }

  let template = match template {
    Some(raw) => unescape_template(&raw),
    None => settings.template.clone(),
  };
  warn_unknown_placeholders(interaction, &template)?;

  let extract = pipeline.retrieve(identifier, &template).await?;
  debug!("Rendered extract for {identifier}");

  match insert {
    Some(path) => {
      let cursor = insert_at(&path, at, &extract).await?;
      interaction.reply(ResponseContent::Success(&format!(
        "Inserted {identifier} into {} (cursor at byte {cursor})",
        path.display()
      )))
    },
    None => interaction.reply(ResponseContent::Extract(&extract)),
  }
}
