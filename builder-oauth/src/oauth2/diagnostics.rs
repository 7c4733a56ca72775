//! Configuration diagnostics
//!
//! The factory reports every problem it finds as a [`Diagnostic`] instead of
//! writing to a global sink, so a deployer sees all issues in one pass and
//! the caller chooses where they go.

use std::fmt;

use super::types::{supported_providers, OAuthError};

/// How serious a configuration issue is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// The login flow is broken or disabled until this is fixed
    Error,
    /// The login flow works but is missing something users expect
    Warning,
}

impl Severity {
    /// Lowercase label
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Settings a usable login flow cannot do without
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequiredField {
    /// OAuth application client ID
    ClientId,
    /// Provider authorization endpoint
    AuthorizeUrl,
    /// Callback URL registered with the provider
    RedirectUrl,
}

impl RequiredField {
    /// Required fields in the order they are checked
    pub const ALL: [Self; 3] = [Self::ClientId, Self::AuthorizeUrl, Self::RedirectUrl];

    /// Configuration key under `[oauth]`
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::ClientId => "client_id",
            Self::AuthorizeUrl => "authorize_url",
            Self::RedirectUrl => "redirect_url",
        }
    }
}

/// Writes the guidance fragment used in deployer-facing messages.
impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::ClientId => "your OAuth application's client ID.",
            Self::AuthorizeUrl => {
                "an OAuth authorization URL. (e.g., 'https://github.com/login/oauth/authorize')"
            }
            Self::RedirectUrl => {
                "an OAuth redirect URL. (e.g., 'https://yourdomain.com/oauth/redirect')"
            }
        })
    }
}

/// Settings whose absence only degrades the sign-in page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecommendedField {
    /// Provider account-creation page
    SignupUrl,
}

impl RecommendedField {
    /// Configuration key under `[oauth]`
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::SignupUrl => "signup_url",
        }
    }
}

/// Writes the guidance fragment used in deployer-facing messages.
impl fmt::Display for RecommendedField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SignupUrl => f.write_str(
                "an OAuth signup URL for your users. (e.g., 'https://github.com/join').",
            ),
        }
    }
}

/// A single problem found in the OAuth settings
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigIssue {
    /// No provider identifier was configured
    #[error("Please configure Builder with an OAuth provider. Supported providers are {supported}.", supported = supported_providers())]
    MissingProviderKind,

    /// Provider identifier is not one of the supported set
    #[error("Unsupported OAuth provider '{0}'. Supported providers are {supported}.", supported = supported_providers())]
    UnsupportedProviderKind(String),

    /// A required setting is empty
    #[error("Please configure Builder with {0}")]
    MissingRequiredField(RequiredField),

    /// A recommended setting is empty
    #[error("Consider configuring Builder with {0}")]
    MissingRecommendedField(RecommendedField),
}

impl ConfigIssue {
    /// Severity this issue is reported at
    #[must_use]
    pub const fn severity(&self) -> Severity {
        match self {
            Self::MissingRecommendedField(_) => Severity::Warning,
            Self::MissingProviderKind
            | Self::UnsupportedProviderKind(_)
            | Self::MissingRequiredField(_) => Severity::Error,
        }
    }

    /// Whether this issue prevents a provider config from being built
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::MissingProviderKind | Self::UnsupportedProviderKind(_)
        )
    }

    /// Configuration key under `[oauth]` the issue refers to
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::MissingProviderKind | Self::UnsupportedProviderKind(_) => "provider",
            Self::MissingRequiredField(field) => field.key(),
            Self::MissingRecommendedField(field) => field.key(),
        }
    }
}

impl From<OAuthError> for ConfigIssue {
    fn from(err: OAuthError) -> Self {
        match err {
            OAuthError::MissingProvider => Self::MissingProviderKind,
            OAuthError::UnsupportedProvider(value) => Self::UnsupportedProviderKind(value),
        }
    }
}

/// Severity-tagged configuration issue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    severity: Severity,
    issue: ConfigIssue,
}

impl Diagnostic {
    /// Severity of the issue
    #[must_use]
    pub const fn severity(&self) -> Severity {
        self.severity
    }

    /// The underlying issue
    #[must_use]
    pub const fn issue(&self) -> &ConfigIssue {
        &self.issue
    }

    /// Deployer-facing message
    #[must_use]
    pub fn message(&self) -> String {
        self.issue.to_string()
    }

    pub(crate) fn into_issue(self) -> ConfigIssue {
        self.issue
    }
}

impl From<ConfigIssue> for Diagnostic {
    fn from(issue: ConfigIssue) -> Self {
        Self {
            severity: issue.severity(),
            issue,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.severity, self.issue)
    }
}
