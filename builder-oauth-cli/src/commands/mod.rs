//! CLI command implementations

pub mod check;
pub mod providers;
pub mod show;

pub use check::CheckCommand;
pub use providers::ProvidersCommand;
pub use show::ShowCommand;

use anyhow::{Context, Result};
use builder_oauth::config::BuilderConfig;
use builder_oauth::oauth2::{Diagnostic, Severity};
use console::style;
use std::path::PathBuf;

/// Service name used when no `--service` is given
pub const DEFAULT_SERVICE: &str = "builder-web";

/// Where a command reads its configuration from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// A single file, plus environment overrides
    File(PathBuf),
    /// The layered XDG search for a service
    Service(String),
}

impl ConfigSource {
    /// Pick the source from the `--config` / `--service` flags
    #[must_use]
    pub fn from_args(config: Option<PathBuf>, service: Option<String>) -> Self {
        config.map_or_else(
            || Self::Service(service.unwrap_or_else(|| DEFAULT_SERVICE.to_string())),
            Self::File,
        )
    }

    /// Load the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file cannot be parsed.
    pub fn load(&self) -> Result<BuilderConfig> {
        match self {
            Self::File(path) => BuilderConfig::load_from(path)
                .with_context(|| format!("Failed to load {}", path.display())),
            Self::Service(name) => BuilderConfig::load_for_service(name)
                .with_context(|| format!("Failed to load configuration for service '{name}'")),
        }
    }
}

/// Render one diagnostic as a single styled line
#[must_use]
pub fn render_diagnostic(diagnostic: &Diagnostic) -> String {
    let label = match diagnostic.severity() {
        Severity::Error => style("error").red().bold(),
        Severity::Warning => style("warning").yellow().bold(),
    };

    format!(
        "{label} {} {}",
        style(format!("[oauth.{}]", diagnostic.issue().key())).dim(),
        diagnostic.message()
    )
}
