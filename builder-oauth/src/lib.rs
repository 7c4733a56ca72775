//! builder-oauth: OAuth provider configuration for Builder
//!
//! Builder signs users in through a single, deployment-configured identity
//! provider. This crate turns the deployment's raw OAuth settings into a
//! typed provider config and a list of configuration diagnostics:
//!
//! - **oauth2**: provider kinds, provider configs, and the selection factory
//! - **config**: layered loading of the `[oauth]` settings (files + environment)
//! - **observability**: `tracing` subscriber bootstrap
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use builder_oauth::prelude::*;
//!
//! fn main() -> anyhow::Result<()> {
//!     observability::init()?;
//!
//!     let config = BuilderConfig::load_for_service("builder-web")?;
//!     let selection = config.provider_selection();
//!
//!     // Surface every problem to the deployer, then decide what to do.
//!     selection.log();
//!     let provider = selection.into_config()?;
//!
//!     tracing::info!(provider = %provider.kind(), "OAuth login enabled");
//!     Ok(())
//! }
//! ```
//!
//! # Supported Providers
//!
//! | identifier  | display name | `state` parameter |
//! |-------------|--------------|-------------------|
//! | `github`    | GitHub       | yes               |
//! | `bitbucket` | BitBucket    | no                |

pub mod config;
pub mod oauth2;
pub mod observability;

pub mod prelude {
    //! Convenience re-exports for common types
    //!
    //! # Examples
    //!
    //! ```rust
    //! use builder_oauth::prelude::*;
    //! ```

    pub use crate::config::BuilderConfig;
    pub use crate::oauth2::{
        supported_providers, ConfigIssue, Diagnostic, OAuthError, OAuthSettings, ProviderConfig,
        ProviderConfigFactory, ProviderKind, ProviderSelection, Severity,
    };
    pub use crate::observability;
}
