//! Core OAuth provider types
//!
//! This module defines the closed set of supported identity providers, the
//! raw settings a deployment supplies, and the immutable `ProviderConfig`
//! record the login flow consumes when it builds the authorize redirect.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// OAuth provider identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// GitHub OAuth apps
    GitHub,
    /// BitBucket OAuth consumers
    BitBucket,
}

impl ProviderKind {
    /// Every supported provider, in the order they are listed to deployers
    pub const ALL: [Self; 2] = [Self::GitHub, Self::BitBucket];

    /// Get the provider as its external configuration identifier
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::GitHub => "github",
            Self::BitBucket => "bitbucket",
        }
    }

    /// Human-readable provider name shown on the sign-in page
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::GitHub => "GitHub",
            Self::BitBucket => "BitBucket",
        }
    }

    /// Whether the provider round-trips an anti-forgery `state` parameter
    #[must_use]
    pub const fn uses_state_param(&self) -> bool {
        match self {
            Self::GitHub => true,
            Self::BitBucket => false,
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderKind {
    type Err = OAuthError;

    /// Identifiers are matched exactly; `"GitHub"` is not `"github"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(OAuthError::MissingProvider);
        }

        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| OAuthError::UnsupportedProvider(s.to_string()))
    }
}

/// Render the supported provider identifiers for deployer-facing messages
///
/// Produces `'github', 'bitbucket'`. Derived from [`ProviderKind::ALL`] on
/// every call so the list cannot drift from the enum.
#[must_use]
pub fn supported_providers() -> String {
    ProviderKind::ALL
        .iter()
        .map(|kind| format!("'{}'", kind.as_str()))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Raw OAuth settings as supplied by deployment configuration
///
/// Every field defaults to empty so a partially written config file still
/// loads; completeness is reported by the factory, not enforced here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OAuthSettings {
    /// Provider identifier (`github` or `bitbucket`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    /// OAuth application client ID
    pub client_id: String,
    /// Provider authorization endpoint
    pub authorize_url: String,
    /// Callback URL registered with the provider
    pub redirect_url: String,
    /// Provider account-creation page
    pub signup_url: String,
    /// Anti-forgery token forwarded to providers that support it
    pub state: String,
}

/// Configuration describing how to build one provider's authorize request
///
/// Fields are only readable; the provider kind fixes the display name, the
/// state flag and the shape of the authorize parameters at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProviderConfig {
    kind: ProviderKind,
    display_name: &'static str,
    client_id: String,
    authorize_url: String,
    redirect_url: String,
    signup_url: String,
    uses_state_param: bool,
    authorize_params: BTreeMap<String, String>,
}

impl ProviderConfig {
    /// Build the config for `kind` from whatever (possibly empty) settings were supplied
    #[must_use]
    pub fn new(kind: ProviderKind, settings: &OAuthSettings) -> Self {
        let params: Vec<(&str, &str)> = match kind {
            ProviderKind::GitHub => vec![
                ("client_id", settings.client_id.as_str()),
                ("redirect_uri", settings.redirect_url.as_str()),
                ("state", settings.state.as_str()),
            ],
            // BitBucket has no state round-trip; the token is dropped.
            ProviderKind::BitBucket => vec![
                ("client_id", settings.client_id.as_str()),
                ("response_type", "code"),
            ],
        };

        Self {
            kind,
            display_name: kind.display_name(),
            client_id: settings.client_id.clone(),
            authorize_url: settings.authorize_url.clone(),
            redirect_url: settings.redirect_url.clone(),
            signup_url: settings.signup_url.clone(),
            uses_state_param: kind.uses_state_param(),
            authorize_params: params
                .into_iter()
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .collect(),
        }
    }

    /// Provider this config was built for
    #[must_use]
    pub const fn kind(&self) -> ProviderKind {
        self.kind
    }

    /// Human-readable provider name
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        self.display_name
    }

    /// OAuth application client ID
    #[must_use]
    pub const fn client_id(&self) -> &str {
        self.client_id.as_str()
    }

    /// Provider authorization endpoint
    #[must_use]
    pub const fn authorize_url(&self) -> &str {
        self.authorize_url.as_str()
    }

    /// Callback URL registered with the provider
    #[must_use]
    pub const fn redirect_url(&self) -> &str {
        self.redirect_url.as_str()
    }

    /// Provider account-creation page, empty when not configured
    #[must_use]
    pub const fn signup_url(&self) -> &str {
        self.signup_url.as_str()
    }

    /// Whether the authorize request carries a `state` parameter
    #[must_use]
    pub const fn uses_state_param(&self) -> bool {
        self.uses_state_param
    }

    /// Exact query parameters for the authorize request, ordered by key
    #[must_use]
    pub const fn authorize_params(&self) -> &BTreeMap<String, String> {
        &self.authorize_params
    }

    /// Look up a single authorize parameter
    #[must_use]
    pub fn authorize_param(&self, key: &str) -> Option<&str> {
        self.authorize_params.get(key).map(String::as_str)
    }
}

/// OAuth provider errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OAuthError {
    /// No provider identifier was configured
    #[error("OAuth provider not configured; supported providers are {supported}", supported = supported_providers())]
    MissingProvider,

    /// Provider identifier is not one of the supported set
    #[error("Unsupported OAuth provider '{0}'; supported providers are {supported}", supported = supported_providers())]
    UnsupportedProvider(String),
}
