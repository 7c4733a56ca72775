//! Configuration management for Builder's OAuth login
//!
//! Configuration is loaded from multiple sources with clear precedence:
//!
//! 1. Environment variables (highest priority, `BUILDER_` prefix, `__` for nesting)
//! 2. `./config.toml` (development)
//! 3. `~/.config/builder/{service}/config.toml` (user config, XDG)
//! 4. `/etc/builder/{service}/config.toml` (system config)
//! 5. Hardcoded defaults (fallback, every field empty)
//!
//! # Example Configuration
//!
//! ```toml
//! # config.toml
//! [oauth]
//! provider = "github"
//! client_id = "0123abcd"
//! authorize_url = "https://github.com/login/oauth/authorize"
//! redirect_url = "https://builder.example.com/oauth/redirect"
//! signup_url = "https://github.com/join"
//! ```
//!
//! The same settings can come from the environment, e.g.
//! `BUILDER_OAUTH__PROVIDER=bitbucket`.
//!
//! # Usage
//!
//! ```rust,no_run
//! use builder_oauth::config::BuilderConfig;
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = BuilderConfig::load_for_service("builder-web")?;
//! let selection = config.provider_selection();
//! selection.log();
//! # Ok(())
//! # }
//! ```

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::oauth2::{OAuthSettings, ProviderConfigFactory, ProviderSelection};

/// Prefix for environment overrides
const ENV_PREFIX: &str = "BUILDER_";

/// Environment overrides grouped by table, e.g. `oauth -> client_id -> value`
type EnvTables = BTreeMap<String, BTreeMap<String, String>>;

/// Complete Builder OAuth configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuilderConfig {
    /// OAuth provider settings
    #[serde(default)]
    pub oauth: OAuthSettings,
}

impl BuilderConfig {
    /// Load configuration for a specific service
    ///
    /// Searches for configuration in XDG-compliant locations with precedence:
    /// 1. Environment variables (`BUILDER_*`, use `__` for nesting)
    /// 2. `./config.toml`
    /// 3. `~/.config/builder/{service_name}/config.toml`
    /// 4. `/etc/builder/{service_name}/config.toml`
    /// 5. Defaults
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Default configuration cannot be serialized to TOML
    /// - A configuration file exists but cannot be read or parsed
    /// - A value has the wrong type (e.g. `provider = ["github"]`)
    pub fn load_for_service(service_name: &str) -> anyhow::Result<Self> {
        let mut figment = Self::defaults()?;

        // 4. System config: /etc/builder/{service_name}/config.toml
        let system_config = PathBuf::from("/etc/builder")
            .join(service_name)
            .join("config.toml");
        if system_config.exists() {
            figment = figment.merge(Toml::file(&system_config));
        }

        // 3. User config: ~/.config/builder/{service_name}/config.toml
        let user_config = Self::recommended_path(service_name);
        if user_config.exists() {
            figment = figment.merge(Toml::file(&user_config));
        }

        // 2. Local config: ./config.toml
        let local_config = PathBuf::from("./config.toml");
        if local_config.exists() {
            figment = figment.merge(Toml::file(&local_config));
        }

        // 1. Environment variables (highest priority)
        let config = figment.merge(Self::env()).extract()?;
        tracing::debug!(service = service_name, "loaded OAuth configuration");
        Ok(config)
    }

    /// Load configuration from a specific file
    ///
    /// A missing file is not an error; the defaults and environment still apply.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Default configuration cannot be serialized to TOML
    /// - The file contains invalid TOML syntax
    /// - A value has the wrong type
    pub fn load_from(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let config = Self::defaults()?
            .merge(Toml::file(path))
            .merge(Self::env())
            .extract()?;

        tracing::debug!(path = %path.display(), "loaded OAuth configuration");
        Ok(config)
    }

    /// Get the recommended XDG config path for a service
    ///
    /// # Example
    ///
    /// ```rust
    /// use builder_oauth::config::BuilderConfig;
    ///
    /// let path = BuilderConfig::recommended_path("builder-web");
    /// // Returns: ~/.config/builder/builder-web/config.toml
    /// assert!(path.ends_with("config.toml"));
    /// ```
    #[must_use]
    pub fn recommended_path(service_name: &str) -> PathBuf {
        dirs::config_dir().map_or_else(
            || PathBuf::from("./config.toml"),
            |config_dir| {
                config_dir
                    .join("builder")
                    .join(service_name)
                    .join("config.toml")
            },
        )
    }

    /// Create config directory for a service
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn create_config_dir(service_name: &str) -> anyhow::Result<PathBuf> {
        let config_path = Self::recommended_path(service_name);
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        Ok(config_path)
    }

    /// Run the provider factory over the loaded OAuth settings
    #[must_use]
    pub fn provider_selection(&self) -> ProviderSelection {
        ProviderConfigFactory::from_settings(&self.oauth)
    }

    fn defaults() -> anyhow::Result<Figment> {
        Ok(Figment::new().merge(Toml::string(&toml::to_string(&Self::default())?)))
    }

    /// `BUILDER_*` overrides, kept as raw strings
    ///
    /// Figment's `Env` provider would parse `12345` or `true` into numbers and
    /// booleans, which string settings then reject. Only its key mapping is
    /// used here; keys without a table (`BUILDER_FOO`) are ignored.
    fn env() -> Serialized<EnvTables> {
        let mut tables = EnvTables::new();
        for (key, value) in Env::prefixed(ENV_PREFIX).split("__").lowercase(true).iter() {
            if let Some((table, field)) = key.as_str().split_once('.') {
                tables
                    .entry(table.to_string())
                    .or_default()
                    .insert(field.to_string(), value);
            }
        }
        Serialized::defaults(tables)
    }
}
