//! Configuration loading integration tests
//!
//! Every test runs inside a `figment::Jail` with a cleared environment, so
//! neither other tests nor ambient `BUILDER_*` variables change the results.

use builder_oauth::config::BuilderConfig;
use builder_oauth::oauth2::ProviderKind;
use figment::Jail;

#[test]
fn test_load_from_file() {
    Jail::expect_with(|jail| {
        jail.clear_env();
        jail.create_file(
            "oauth.toml",
            r#"
            [oauth]
            provider = "github"
            client_id = "builder-client"
            authorize_url = "https://github.com/login/oauth/authorize"
            redirect_url = "https://builder.example.com/oauth/redirect"
            signup_url = "https://github.com/join"
            state = "xyz"
            "#,
        )?;

        let config = BuilderConfig::load_from("oauth.toml").map_err(|e| e.to_string())?;
        let selection = config.provider_selection();

        assert!(selection.diagnostics().is_empty());
        let provider = selection.into_config().map_err(|e| e.to_string())?;
        assert_eq!(provider.kind(), ProviderKind::GitHub);
        assert_eq!(provider.authorize_param("state"), Some("xyz"));
        Ok(())
    });
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    Jail::expect_with(|jail| {
        jail.clear_env();
        let config = BuilderConfig::load_from("absent.toml").map_err(|e| e.to_string())?;

        assert_eq!(config, BuilderConfig::default());
        assert!(config.provider_selection().config().is_none());
        Ok(())
    });
}

#[test]
fn test_env_overrides_file() {
    Jail::expect_with(|jail| {
        jail.clear_env();
        jail.create_file(
            "oauth.toml",
            r#"
            [oauth]
            provider = "github"
            client_id = "from-file"
            "#,
        )?;
        jail.set_env("BUILDER_OAUTH__PROVIDER", "bitbucket");
        jail.set_env("BUILDER_OAUTH__REDIRECT_URL", "https://builder.example.com/oauth/redirect");

        let config = BuilderConfig::load_from("oauth.toml").map_err(|e| e.to_string())?;

        assert_eq!(config.oauth.provider.as_deref(), Some("bitbucket"));
        assert_eq!(config.oauth.client_id, "from-file");
        assert_eq!(
            config.oauth.redirect_url,
            "https://builder.example.com/oauth/redirect"
        );
        Ok(())
    });
}

#[test]
fn test_load_for_service_reads_local_config() {
    Jail::expect_with(|jail| {
        jail.clear_env();
        jail.create_file(
            "config.toml",
            r#"
            [oauth]
            provider = "bitbucket"
            client_id = "local-client"
            "#,
        )?;

        let config = BuilderConfig::load_for_service("builder-oauth-test")
            .map_err(|e| e.to_string())?;

        assert_eq!(config.oauth.provider.as_deref(), Some("bitbucket"));
        assert_eq!(config.oauth.client_id, "local-client");
        Ok(())
    });
}

#[test]
fn test_wrong_type_is_an_error() {
    Jail::expect_with(|jail| {
        jail.clear_env();
        jail.create_file(
            "oauth.toml",
            r#"
            [oauth]
            provider = ["github", "bitbucket"]
            "#,
        )?;

        assert!(BuilderConfig::load_from("oauth.toml").is_err());
        Ok(())
    });
}

#[test]
fn test_env_values_stay_strings() {
    Jail::expect_with(|jail| {
        jail.clear_env();
        jail.set_env("BUILDER_OAUTH__PROVIDER", "github");
        jail.set_env("BUILDER_OAUTH__CLIENT_ID", "12345");
        jail.set_env("BUILDER_OAUTH__STATE", "true");
        jail.set_env("BUILDER_OAUTH__REDIRECT_URL", "0123");

        let config = BuilderConfig::load_from("absent.toml").map_err(|e| e.to_string())?;

        assert_eq!(config.oauth.client_id, "12345");
        assert_eq!(config.oauth.state, "true");
        assert_eq!(config.oauth.redirect_url, "0123");

        let provider = config
            .provider_selection()
            .into_config()
            .map_err(|e| e.to_string())?;
        assert_eq!(provider.client_id(), "12345");
        assert_eq!(provider.authorize_param("state"), Some("true"));
        Ok(())
    });
}

#[test]
fn test_env_without_table_is_ignored() {
    Jail::expect_with(|jail| {
        jail.clear_env();
        jail.set_env("BUILDER_PROVIDER", "github");

        let config = BuilderConfig::load_from("absent.toml").map_err(|e| e.to_string())?;

        assert_eq!(config, BuilderConfig::default());
        Ok(())
    });
}

#[cfg(target_os = "linux")]
#[test]
fn test_create_config_dir_under_xdg_config_home() {
    Jail::expect_with(|jail| {
        jail.clear_env();
        let config_home = jail.directory().join("xdg");
        jail.set_env("XDG_CONFIG_HOME", config_home.display().to_string());

        let path = BuilderConfig::create_config_dir("builder-web").map_err(|e| e.to_string())?;

        assert_eq!(path, config_home.join("builder/builder-web/config.toml"));
        assert!(config_home.join("builder/builder-web").is_dir());
        assert!(!path.exists());

        // Creating it again is fine
        BuilderConfig::create_config_dir("builder-web").map_err(|e| e.to_string())?;
        Ok(())
    });
}
