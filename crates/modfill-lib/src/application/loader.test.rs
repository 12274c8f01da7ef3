use super::*;
use crate::application::Commands;
use crate::primitives::ColorIntent;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("modfill").chain(args.iter().copied())).unwrap()
}

#[test]
fn test_from_cli_applies_environment_color() {
    let env_config = EnvironmentConfig {
        no_color: Some("1".to_string()),
        ..EnvironmentConfig::default()
    };

    let config = CliConfig::from_cli(parse(&["version"]), &env_config).unwrap();
    assert_eq!(config.app_config.color, ColorIntent::Never);
    assert!(matches!(config.command, Some(Commands::Version)));
}

#[test]
fn test_from_cli_flag_beats_environment() {
    let env_config = EnvironmentConfig {
        no_color: Some("1".to_string()),
        ..EnvironmentConfig::default()
    };

    let config = CliConfig::from_cli(parse(&["--color", "always"]), &env_config).unwrap();
    assert_eq!(config.app_config.color, ColorIntent::Always);
    assert!(config.command.is_none());
}

#[test]
fn test_from_cli_validates() {
    let result = CliConfig::from_cli(
        parse(&["--page-size", "0", "version"]),
        &EnvironmentConfig::default(),
    );
    assert!(matches!(result, Err(ConfigError::ValidationFailed { .. })));
}

#[test]
fn test_from_cli_default_cli() {
    let config = CliConfig::from_cli(Cli::default(), &EnvironmentConfig::default()).unwrap();
    assert_eq!(config.app_config.target_version, "1.21");
    assert!(config.command.is_none());
}

#[test]
fn test_missing_env_files_are_skipped() {
    // The test working directory carries no .env files
    assert!(load_env_files().is_ok());
}
