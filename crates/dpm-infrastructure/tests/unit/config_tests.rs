//! Configuration loading tests
//!
//! Every test runs inside `figment::Jail`: it serializes tests that touch the
//! environment or working directory and restores both afterwards.

use dpm_domain::error::Error;
use dpm_infrastructure::config::ConfigLoader;
use dpm_infrastructure::constants::{DEFAULT_LOG_LEVEL, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT};
use figment::Jail;

/// Load `contents` through an explicit path and return the error text
fn load_error(jail: &mut Jail, contents: &str) -> figment::Result<String> {
    jail.create_file("custom.toml", contents)?;
    let path = jail.directory().join("custom.toml");
    match ConfigLoader::new().with_config_path(path).load() {
        Ok(config) => Err(format!("expected an error, loaded {config:?}").into()),
        Err(error) => Ok(error.to_string()),
    }
}

#[test]
fn test_defaults_when_no_file_present() {
    Jail::expect_with(|_jail| {
        let config = ConfigLoader::new().load().map_err(|e| e.to_string())?;
        assert_eq!(config.server.host, DEFAULT_SERVER_HOST);
        assert_eq!(config.server.port, DEFAULT_SERVER_PORT);
        assert_eq!(config.logging.level, DEFAULT_LOG_LEVEL);
        assert!(config.providers.enabled.is_empty());
        Ok(())
    });
}

#[test]
fn test_default_file_in_current_dir_is_loaded() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "dpm.toml",
            r#"
            [server]
            port = 9100

            [providers]
            enabled = ["configuration", "country"]

            [providers.settings.configuration]
            stockScoreThreshold = 7.5
            "#,
        )?;

        let config = ConfigLoader::new().load().map_err(|e| e.to_string())?;
        assert_eq!(config.server.port, 9100);
        assert_eq!(config.server.host, DEFAULT_SERVER_HOST);
        assert_eq!(config.providers.enabled, vec!["configuration", "country"]);

        let registry = config.providers.registry_config("configuration");
        assert_eq!(registry.setting("stockScoreThreshold"), Some("7.5"));
        Ok(())
    });
}

#[test]
fn test_env_overrides_file() {
    Jail::expect_with(|jail| {
        jail.create_file("dpm.toml", "[server]\nport = 9100\n")?;
        jail.set_env("DPM_SERVER__PORT", "9200");
        jail.set_env("DPM_LOGGING__LEVEL", "debug");

        let config = ConfigLoader::new().load().map_err(|e| e.to_string())?;
        assert_eq!(config.server.port, 9200);
        assert_eq!(config.logging.level, "debug");
        Ok(())
    });
}

#[test]
fn test_explicit_path_is_loaded() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "custom.toml",
            "[logging]\nlevel = \"warn\"\njson_format = true\n",
        )?;
        let path = jail.directory().join("custom.toml");

        let config = ConfigLoader::new()
            .with_config_path(&path)
            .load()
            .map_err(|e| e.to_string())?;
        assert_eq!(config.logging.level, "warn");
        assert!(config.logging.json_format);
        Ok(())
    });
}

#[test]
fn test_missing_explicit_path_is_an_error() {
    Jail::expect_with(|jail| {
        let missing = jail.directory().join("absent.toml");

        let result = ConfigLoader::new().with_config_path(&missing).load();
        assert!(matches!(result, Err(Error::Configuration { .. })));
        Ok(())
    });
}

#[test]
fn test_zero_port_is_rejected() {
    Jail::expect_with(|jail| {
        let message = load_error(jail, "[server]\nport = 0\n")?;
        assert!(message.contains("port cannot be 0"), "{message}");
        Ok(())
    });
}

#[test]
fn test_invalid_host_is_rejected() {
    Jail::expect_with(|jail| {
        let message = load_error(jail, "[server]\nhost = \"localhost\"\n")?;
        assert!(message.contains("not a valid IP address"), "{message}");
        Ok(())
    });
}

#[test]
fn test_invalid_log_level_is_rejected() {
    Jail::expect_with(|jail| {
        let message = load_error(jail, "[logging]\nlevel = \"loud\"\n")?;
        assert!(message.contains("Invalid log level"), "{message}");
        Ok(())
    });
}

#[test]
fn test_duplicate_enabled_provider_is_rejected() {
    Jail::expect_with(|jail| {
        let message = load_error(jail, "[providers]\nenabled = [\"country\", \"country\"]\n")?;
        assert!(message.contains("enabled more than once"), "{message}");
        Ok(())
    });
}

#[test]
fn test_malformed_toml_is_a_configuration_error() {
    Jail::expect_with(|jail| {
        let message = load_error(jail, "[server\nport = ")?;
        assert!(message.starts_with("Configuration error"), "{message}");
        Ok(())
    });
}
