//! List supported providers

use builder_oauth::oauth2::ProviderKind;
use console::style;

/// List the provider identifiers Builder accepts
pub struct ProvidersCommand;

impl ProvidersCommand {
    /// One line per provider: identifier, display name, state support
    #[must_use]
    pub fn lines() -> Vec<String> {
        ProviderKind::ALL
            .iter()
            .map(|kind| {
                format!(
                    "{:<10} {:<10} state={}",
                    kind.as_str(),
                    kind.display_name(),
                    kind.uses_state_param()
                )
            })
            .collect()
    }

    /// Execute the command
    pub fn execute() {
        println!("{}", style("Supported OAuth providers").cyan().bold());
        for line in Self::lines() {
            println!("  {line}");
        }
    }
}
