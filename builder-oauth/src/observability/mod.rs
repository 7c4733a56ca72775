//! Observability (logging)
//!
//! Structured logging through `tracing`. The library only emits events; an
//! application (or the `builder-oauth` CLI) installs the subscriber once at
//! startup.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the logging stack with defaults
///
/// Sets up:
/// - JSON formatting in release builds, pretty formatting in debug builds
/// - `RUST_LOG` filtering, falling back to [`ObservabilityConfig::default_filter`]
///
/// # Errors
///
/// Currently infallible; the `Result` leaves room for exporter setup.
///
/// # Example
///
/// ```rust,no_run
/// use builder_oauth::observability;
///
/// # fn main() -> anyhow::Result<()> {
/// observability::init()?;
/// tracing::info!("Builder started");
/// # Ok(())
/// # }
/// ```
pub fn init() -> anyhow::Result<()> {
    init_with(&ObservabilityConfig::default())
}

/// Initialize the logging stack from explicit settings
///
/// Installing a second global subscriber is ignored rather than treated as
/// an error, so tests and embedding applications can call this freely.
///
/// # Errors
///
/// Currently infallible; see [`init`].
pub fn init_with(config: &ObservabilityConfig) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.default_filter));

    #[cfg(debug_assertions)]
    let result = tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().pretty())
        .try_init();

    #[cfg(not(debug_assertions))]
    let result = tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().json())
        .try_init();

    if result.is_err() {
        tracing::debug!("global subscriber already installed");
    } else {
        tracing::debug!(service = %config.service_name, "observability initialized");
    }

    Ok(())
}

/// Observability configuration
#[derive(Debug, Clone)]
pub struct ObservabilityConfig {
    /// Service name attached to startup events
    pub service_name: String,

    /// Filter used when `RUST_LOG` is unset
    pub default_filter: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            service_name: "builder-oauth".to_string(),
            default_filter: if cfg!(debug_assertions) {
                "info,builder_oauth=debug".to_string()
            } else {
                "info".to_string()
            },
        }
    }
}

impl ObservabilityConfig {
    /// Create new observability config
    #[must_use]
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            ..Default::default()
        }
    }

    /// Override the fallback filter directive
    #[must_use]
    pub fn with_filter(mut self, directive: impl Into<String>) -> Self {
        self.default_filter = directive.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ObservabilityConfig::default();
        assert_eq!(config.service_name, "builder-oauth");
        assert!(config.default_filter.starts_with("info"));
    }

    #[test]
    fn test_builder() {
        let config = ObservabilityConfig::new("builder-web").with_filter("warn");

        assert_eq!(config.service_name, "builder-web");
        assert_eq!(config.default_filter, "warn");
    }

    #[test]
    fn test_init_twice_is_tolerated() {
        assert!(init_with(&ObservabilityConfig::new("first")).is_ok());
        assert!(init_with(&ObservabilityConfig::new("second")).is_ok());
    }
}
