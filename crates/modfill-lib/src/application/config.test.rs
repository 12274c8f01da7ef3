use super::*;

#[test]
fn test_config_defaults() {
    let config = AppConfig::default();
    assert_eq!(config.log_level, 0);
    assert_eq!(config.net_timeout, 30);
    assert_eq!(config.target_version, "1.21");
    assert_eq!(config.game_id, 432);
    assert_eq!(config.page_size, 10);
    assert_eq!(config.request_delay_ms, 200);
    assert_eq!(config.color, ColorIntent::Auto);
    assert_eq!(config.curseforge_api_key, None);
}

#[test]
fn test_config_merging() {
    let base = AppConfig {
        curseforge_api_key: Some("from-env".to_string()),
        ..AppConfig::default()
    };
    let override_config = AppConfig {
        log_level: 4,
        color: ColorIntent::Always,
        target_version: "1.20.1".to_string(),
        page_size: 25,
        ..AppConfig::default()
    };

    let merged = base.merge_with(override_config);
    assert_eq!(merged.log_level, 4);
    assert_eq!(merged.color, ColorIntent::Always);
    assert_eq!(merged.target_version, "1.20.1");
    assert_eq!(merged.page_size, 25);
    assert_eq!(merged.net_timeout, 30);
    // None on the CLI side keeps the earlier key
    assert_eq!(merged.curseforge_api_key.as_deref(), Some("from-env"));
}

#[test]
fn test_config_deserializes_with_defaults() {
    let config: AppConfig =
        serde_json::from_str(r#"{"target_version": "1.20", "color": "never"}"#).unwrap();
    assert_eq!(config.target_version, "1.20");
    assert_eq!(config.color, ColorIntent::Never);
    assert_eq!(config.page_size, 10);
    assert_eq!(config.curseforge_base_url, defaults::CURSEFORGE_BASE_URL);
}

#[test]
fn test_validate_page_size_bounds() {
    for page_size in [0, 51] {
        let mut config = AppConfig {
            page_size,
            ..AppConfig::default()
        };
        assert!(
            matches!(config.validate(), Err(ConfigError::ValidationFailed { .. })),
            "page size {page_size}"
        );
    }

    let mut config = AppConfig {
        page_size: 50,
        ..AppConfig::default()
    };
    assert!(config.validate().is_ok());
}

#[test]
fn test_validate_target_version() {
    let mut config = AppConfig {
        target_version: "   ".to_string(),
        ..AppConfig::default()
    };
    assert!(config.validate().is_err());

    let mut config = AppConfig {
        target_version: " 1.20.1 ".to_string(),
        ..AppConfig::default()
    };
    config.validate().unwrap();
    assert_eq!(config.target_version, "1.20.1");
}

#[test]
fn test_validate_timeout_and_blank_key() {
    let mut config = AppConfig {
        net_timeout: 0,
        ..AppConfig::default()
    };
    assert!(config.validate().is_err());

    let mut config = AppConfig {
        curseforge_api_key: Some("".to_string()),
        ..AppConfig::default()
    };
    config.validate().unwrap();
    assert_eq!(config.curseforge_api_key, None);
}

#[test]
fn test_to_resolver_config() {
    let config = AppConfig {
        target_version: "1.20.1".to_string(),
        page_size: 20,
        request_delay_ms: 0,
        ..AppConfig::default()
    };

    let resolver = config.to_resolver_config();
    assert_eq!(resolver.target_version, "1.20.1");
    assert_eq!(resolver.page_size, 20);
    assert_eq!(resolver.game_id, 432);
    assert_eq!(resolver.listing_limit, 6);
    assert!(resolver.request_delay.is_zero());
}

#[test]
fn test_to_curseforge_config() {
    let config = AppConfig {
        curseforge_api_key: Some("key".to_string()),
        curseforge_base_url: "http://127.0.0.1:8080".to_string(),
        net_timeout: 5,
        ..AppConfig::default()
    };

    let curseforge = config.to_curseforge_config();
    assert_eq!(curseforge.api_key.as_deref(), Some("key"));
    assert_eq!(curseforge.base_url, "http://127.0.0.1:8080");
    assert_eq!(curseforge.networking.timeout_seconds, 5);
}

#[test]
fn test_to_logger_config() {
    let config = AppConfig {
        log_level: 3,
        log_format: LogFormat::Json,
        color: ColorIntent::Never,
        ..AppConfig::default()
    };

    let logger = config.to_logger_config();
    assert_eq!(logger.level, LogLevel::Debug);
    assert_eq!(logger.format, LogFormat::Json);
    assert_eq!(logger.output, LogOutput::Stderr);
    assert!(!logger.ansi);
}
