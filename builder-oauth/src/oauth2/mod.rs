//! OAuth provider configuration
//!
//! This module shapes the parameters the login flow needs to send a user to
//! one of the supported identity providers:
//! - GitHub (with an anti-forgery `state` parameter)
//! - BitBucket (authorization code grant, no `state`)
//!
//! Token exchange, state verification and the redirect itself live with the
//! caller; this module only decides which provider is configured and what its
//! authorize request looks like.
//!
//! # Example Usage
//!
//! ```rust
//! use builder_oauth::oauth2::{OAuthSettings, ProviderConfigFactory};
//!
//! let settings = OAuthSettings {
//!     provider: Some("bitbucket".to_string()),
//!     client_id: "builder-client".to_string(),
//!     authorize_url: "https://bitbucket.org/site/oauth2/authorize".to_string(),
//!     redirect_url: "https://builder.example.com/oauth/redirect".to_string(),
//!     ..OAuthSettings::default()
//! };
//!
//! let selection = ProviderConfigFactory::from_settings(&settings);
//! selection.log();
//!
//! if let Some(config) = selection.config() {
//!     assert_eq!(config.authorize_param("response_type"), Some("code"));
//! }
//! ```
//!
//! # Configuration
//!
//! ```toml
//! [oauth]
//! provider = "github"
//! client_id = "your-github-client-id"
//! authorize_url = "https://github.com/login/oauth/authorize"
//! redirect_url = "https://builder.example.com/oauth/redirect"
//! signup_url = "https://github.com/join"
//! state = "per-deployment-anti-forgery-token"
//! ```

pub mod diagnostics;
pub mod factory;
pub mod types;

pub use diagnostics::{ConfigIssue, Diagnostic, RecommendedField, RequiredField, Severity};
pub use factory::{ProviderConfigFactory, ProviderSelection};
pub use types::{
    supported_providers, OAuthError, OAuthSettings, ProviderConfig, ProviderKind,
};
