//! Provider config selection
//!
//! `ProviderConfigFactory` turns raw settings into a [`ProviderSelection`]:
//! the provider config when the provider identifier is usable, plus every
//! diagnostic found along the way. Missing client ID or URLs never block
//! construction; only an empty or unknown provider does.

use super::diagnostics::{ConfigIssue, Diagnostic, RecommendedField, RequiredField, Severity};
use super::types::{OAuthError, OAuthSettings, ProviderConfig, ProviderKind};

/// Selects and builds the provider config for a deployment
#[derive(Debug, Clone, Copy, Default)]
pub struct ProviderConfigFactory;

impl ProviderConfigFactory {
    /// Build a provider config from individual settings
    ///
    /// `kind` of `None` is treated the same as an empty identifier. The
    /// `state` token is only used by providers that support it.
    ///
    /// # Example
    ///
    /// ```rust
    /// use builder_oauth::oauth2::{ProviderConfigFactory, ProviderKind};
    ///
    /// let selection = ProviderConfigFactory::create(
    ///     Some("github"),
    ///     "cid",
    ///     "https://github.com/login/oauth/authorize",
    ///     "https://builder.example.com/oauth/redirect",
    ///     "https://github.com/join",
    ///     "xyz",
    /// );
    ///
    /// let config = selection.config().expect("github is supported");
    /// assert_eq!(config.kind(), ProviderKind::GitHub);
    /// assert!(selection.diagnostics().is_empty());
    /// ```
    #[must_use]
    pub fn create(
        kind: Option<&str>,
        client_id: &str,
        authorize_url: &str,
        redirect_url: &str,
        signup_url: &str,
        state: &str,
    ) -> ProviderSelection {
        Self::from_settings(&OAuthSettings {
            provider: kind.map(str::to_string),
            client_id: client_id.to_string(),
            authorize_url: authorize_url.to_string(),
            redirect_url: redirect_url.to_string(),
            signup_url: signup_url.to_string(),
            state: state.to_string(),
        })
    }

    /// Build a provider config from loaded settings
    #[must_use]
    pub fn from_settings(settings: &OAuthSettings) -> ProviderSelection {
        let mut diagnostics = Vec::new();

        let kind = match settings
            .provider
            .as_deref()
            .unwrap_or_default()
            .parse::<ProviderKind>()
        {
            Ok(kind) => Some(kind),
            Err(err) => {
                diagnostics.push(Diagnostic::from(ConfigIssue::from(err)));
                None
            }
        };

        diagnostics.extend(lint_fields(settings));

        let config = kind.map(|kind| {
            tracing::debug!(provider = %kind, "selected OAuth provider");
            ProviderConfig::new(kind, settings)
        });

        ProviderSelection {
            config,
            diagnostics,
        }
    }
}

fn required_value(field: RequiredField, settings: &OAuthSettings) -> &str {
    match field {
        RequiredField::ClientId => &settings.client_id,
        RequiredField::AuthorizeUrl => &settings.authorize_url,
        RequiredField::RedirectUrl => &settings.redirect_url,
    }
}

fn lint_fields(settings: &OAuthSettings) -> Vec<Diagnostic> {
    let mut issues: Vec<ConfigIssue> = RequiredField::ALL
        .into_iter()
        .filter(|field| required_value(*field, settings).is_empty())
        .map(ConfigIssue::MissingRequiredField)
        .collect();

    if settings.signup_url.is_empty() {
        issues.push(ConfigIssue::MissingRecommendedField(
            RecommendedField::SignupUrl,
        ));
    }

    issues.into_iter().map(Diagnostic::from).collect()
}

/// Outcome of a factory call
///
/// `config` is `None` only when the provider identifier was empty or
/// unsupported. A present config may still come with error diagnostics;
/// completing it is the deployer's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderSelection {
    config: Option<ProviderConfig>,
    diagnostics: Vec<Diagnostic>,
}

impl ProviderSelection {
    /// The selected provider config, if any
    #[must_use]
    pub const fn config(&self) -> Option<&ProviderConfig> {
        self.config.as_ref()
    }

    /// All diagnostics in the order they were found
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Error-severity diagnostics
    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.with_severity(Severity::Error)
    }

    /// Warning-severity diagnostics
    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.with_severity(Severity::Warning)
    }

    fn with_severity(&self, severity: Severity) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(move |diagnostic| diagnostic.severity() == severity)
    }

    /// Whether any error-severity diagnostic was reported
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    /// Split into the config and the diagnostics
    #[must_use]
    pub fn into_parts(self) -> (Option<ProviderConfig>, Vec<Diagnostic>) {
        (self.config, self.diagnostics)
    }

    /// Take the config, turning a missing one into the fatal provider error
    ///
    /// # Errors
    ///
    /// Returns [`OAuthError::UnsupportedProvider`] when the identifier was not
    /// recognised and [`OAuthError::MissingProvider`] when none was set.
    pub fn into_config(self) -> Result<ProviderConfig, OAuthError> {
        match self.config {
            Some(config) => Ok(config),
            None => Err(self
                .diagnostics
                .into_iter()
                .find_map(|diagnostic| match diagnostic.into_issue() {
                    ConfigIssue::UnsupportedProviderKind(value) => {
                        Some(OAuthError::UnsupportedProvider(value))
                    }
                    _ => None,
                })
                .unwrap_or(OAuthError::MissingProvider)),
        }
    }

    /// Forward every diagnostic to `tracing`
    pub fn log(&self) {
        for diagnostic in &self.diagnostics {
            let key = diagnostic.issue().key();
            match diagnostic.severity() {
                Severity::Error => {
                    tracing::error!(severity = %diagnostic.severity(), key, "{}", diagnostic.issue());
                }
                Severity::Warning => {
                    tracing::warn!(severity = %diagnostic.severity(), key, "{}", diagnostic.issue());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issues(selection: &ProviderSelection) -> Vec<ConfigIssue> {
        selection
            .diagnostics()
            .iter()
            .map(|diagnostic| diagnostic.issue().clone())
            .collect()
    }

    #[test]
    fn test_complete_github_settings_have_no_diagnostics() {
        let selection = ProviderConfigFactory::create(
            Some("github"),
            "cid",
            "https://a/authorize",
            "https://a/redirect",
            "https://a/join",
            "xyz",
        );

        assert!(selection.diagnostics().is_empty());
        assert!(!selection.has_errors());
        assert_eq!(selection.config().unwrap().kind(), ProviderKind::GitHub);
    }

    #[test]
    fn test_missing_kind_is_reported_once() {
        let selection = ProviderConfigFactory::create(
            None,
            "cid",
            "https://a/authorize",
            "https://a/redirect",
            "https://a/join",
            "xyz",
        );

        assert!(selection.config().is_none());
        assert_eq!(issues(&selection), vec![ConfigIssue::MissingProviderKind]);
    }

    #[test]
    fn test_unsupported_kind_still_lints_fields() {
        let selection = ProviderConfigFactory::create(Some("gitlab"), "", "", "", "", "");

        assert!(selection.config().is_none());
        assert_eq!(
            issues(&selection),
            vec![
                ConfigIssue::UnsupportedProviderKind("gitlab".to_string()),
                ConfigIssue::MissingRequiredField(RequiredField::ClientId),
                ConfigIssue::MissingRequiredField(RequiredField::AuthorizeUrl),
                ConfigIssue::MissingRequiredField(RequiredField::RedirectUrl),
                ConfigIssue::MissingRecommendedField(RecommendedField::SignupUrl),
            ]
        );
        assert_eq!(selection.errors().count(), 4);
        assert_eq!(selection.warnings().count(), 1);
    }

    #[test]
    fn test_whitespace_counts_as_configured() {
        let selection = ProviderConfigFactory::create(Some("bitbucket"), " ", " ", " ", " ", "");

        assert!(selection.diagnostics().is_empty());
        assert!(selection.config().is_some());
    }

    #[test]
    fn test_into_config_maps_fatal_issues() {
        let unsupported = ProviderConfigFactory::create(Some("gitlab"), "cid", "a", "r", "s", "");
        assert_eq!(
            unsupported.into_config().unwrap_err(),
            OAuthError::UnsupportedProvider("gitlab".to_string())
        );

        let missing = ProviderConfigFactory::create(Some(""), "cid", "a", "r", "s", "");
        assert_eq!(missing.into_config().unwrap_err(), OAuthError::MissingProvider);

        let present = ProviderConfigFactory::create(Some("bitbucket"), "", "a", "r", "s", "");
        assert_eq!(
            present.into_config().unwrap().kind(),
            ProviderKind::BitBucket
        );
    }

    #[test]
    fn test_into_parts() {
        let (config, diagnostics) =
            ProviderConfigFactory::create(Some("github"), "cid", "a", "r", "", "xyz").into_parts();

        assert!(config.is_some());
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].severity(), Severity::Warning);
    }
}
