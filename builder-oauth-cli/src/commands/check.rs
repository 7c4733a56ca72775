//! Configuration lint command

use anyhow::{bail, Result};
use builder_oauth::oauth2::ProviderSelection;
use console::style;

use super::{render_diagnostic, ConfigSource};

/// Lint the OAuth configuration and report every problem at once
pub struct CheckCommand {
    source: ConfigSource,
    strict: bool,
}

impl CheckCommand {
    /// Create a new command instance
    #[must_use]
    pub const fn new(source: ConfigSource) -> Self {
        Self {
            source,
            strict: false,
        }
    }

    /// Also fail on non-fatal error diagnostics
    #[must_use]
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Load the configuration and run provider selection without printing
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded.
    pub fn evaluate(&self) -> Result<ProviderSelection> {
        Ok(self.source.load()?.provider_selection())
    }

    /// Lines printed for a selection: one per diagnostic, then the provider
    /// summary when a provider config was built
    #[must_use]
    pub fn report(selection: &ProviderSelection) -> Vec<String> {
        let mut lines: Vec<String> = selection
            .diagnostics()
            .iter()
            .map(render_diagnostic)
            .collect();

        if let Some(config) = selection.config() {
            if !lines.is_empty() {
                lines.push(String::new());
            }
            lines.push(format!(
                "{} {} ({} error(s), {} warning(s))",
                style("Provider").green().bold(),
                style(config.display_name()).bold(),
                selection.errors().count(),
                selection.warnings().count()
            ));
        }

        lines
    }

    /// Execute the command
    ///
    /// Diagnostics are printed once as styled lines and are not also sent to
    /// `tracing`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded, no provider
    /// config could be built, or (with `strict`) any error was reported.
    pub fn execute(&self) -> Result<()> {
        let selection = self.evaluate()?;

        for line in Self::report(&selection) {
            println!("{line}");
        }

        if selection.config().is_none() {
            bail!("OAuth login is disabled: no usable provider is configured");
        }

        let errors = selection.errors().count();
        if self.strict && errors > 0 {
            bail!("{errors} configuration error(s) found");
        }

        Ok(())
    }
}
