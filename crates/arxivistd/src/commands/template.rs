//! Module for the "template" command, the settings surface for the extract template.

use super::*;

/// Subcommands of [`Commands::Template`]
#[derive(Subcommand, Clone)]
pub enum TemplateCommands {
  /// Print the current template
  Show,

  /// Replace the template
  Set {
    /// The new template; `\n` and `\t` are expanded unless --raw is given
    template: String,

    /// Store the template exactly as typed
    #[arg(long)]
    raw: bool,
  },

  /// Restore the default template
  Reset,

  /// List the placeholders a template can use
  Vars,
}

/// Function for the [`Commands::Template`] in the CLI.
pub async fn template<I: UserInteraction>(
  interaction: &I,
  config_path: &Path,
  cmd: TemplateCommands,
) -> Result<()> {
  match cmd {
    TemplateCommands::Show => {
      let settings = Settings::load(config_path).await?;
      interaction.reply(ResponseContent::Extract(settings.template.as_str()))
    },
    TemplateCommands::Set { template, raw } => {
      let template = if raw { Template::new(template) } else { unescape_template(&template) };
      warn_unknown_placeholders(interaction, &template)?;
      store(config_path, template).await?;
      interaction.reply(ResponseContent::Success(&format!(
        "Template saved to {}",
        config_path.display()
      )))
    },
    TemplateCommands::Reset => {
      store(config_path, Template::default()).await?;
      interaction.reply(ResponseContent::Success("Template reset to the default"))
    },
    TemplateCommands::Vars => {
      let vars = Placeholder::ALL
        .iter()
        .map(|placeholder| format!("{:<14}{}", placeholder.to_string(), describe(*placeholder)))
        .collect::<Vec<_>>()
        .join("\n");
      interaction.reply(ResponseContent::Extract(&vars))
    },
  }
}

/// Replaces the template in the settings file, keeping every other setting.
async fn store(config_path: &Path, template: Template) -> Result<()> {
  let mut settings = Settings::load(config_path).await?;
  settings.template = template;
  settings.save(config_path).await?;
  Ok(())
}

/// One line of help for each placeholder.
fn describe(placeholder: Placeholder) -> &'static str {
  match placeholder {
    Placeholder::Title => "paper title",
    Placeholder::Id => "canonical arXiv URL of the paper",
    Placeholder::Summary => "abstract",
    Placeholder::Authors => "author names separated by \", \"",
    Placeholder::Updated => "timestamp of the latest version",
    Placeholder::Published => "timestamp of the first version",
  }
}
