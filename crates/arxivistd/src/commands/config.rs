//! Module for the "config" command.

use super::*;

/// Subcommands of [`Commands::Config`]
#[derive(Subcommand, Clone)]
pub enum ConfigCommands {
  /// Print the effective settings as TOML, defaults included
  Show,
  /// Print the location of the settings file
  Path,
}

/// Function for the [`Commands::Config`] in the CLI.
pub async fn config<I: UserInteraction>(
  interaction: &I,
  config_path: &Path,
  cmd: ConfigCommands,
) -> Result<()> {
  match cmd {
    ConfigCommands::Show => {
      let settings = Settings::load(config_path).await?;
      interaction.reply(ResponseContent::Extract(settings.to_toml()?.trim_end()))
    },
    ConfigCommands::Path => {
      if !config_path.exists() {
        interaction.reply(ResponseContent::Info("No settings saved yet, defaults are in use"))?;
      }
      interaction.reply(ResponseContent::Extract(&config_path.display().to_string()))
    },
  }
}
