//! Print the selected provider config

use anyhow::{Context, Result};

use super::{render_diagnostic, ConfigSource};

/// Print the selected provider config as JSON
pub struct ShowCommand {
    source: ConfigSource,
}

impl ShowCommand {
    /// Create a new command instance
    #[must_use]
    pub const fn new(source: ConfigSource) -> Self {
        Self { source }
    }

    /// Render the provider config as pretty JSON
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded or the provider
    /// is missing or unsupported.
    pub fn render(&self) -> Result<String> {
        let selection = self.source.load()?.provider_selection();

        for diagnostic in selection.diagnostics() {
            eprintln!("{}", render_diagnostic(diagnostic));
        }

        let config = selection.into_config()?;
        serde_json::to_string_pretty(&config).context("Failed to serialize provider config")
    }

    /// Execute the command
    ///
    /// # Errors
    ///
    /// See [`ShowCommand::render`].
    pub fn execute(&self) -> Result<()> {
        println!("{}", self.render()?);
        Ok(())
    }
}
