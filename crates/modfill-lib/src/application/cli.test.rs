use super::*;
use clap::CommandFactory;

#[test]
fn test_cli_definition_is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn test_parse_resolve() {
    let cli = Cli::try_parse_from([
        "modfill",
        "--target-version",
        "1.20.1",
        "resolve",
        "--modlist",
        "mods.json",
        "--manifest",
        "manifest.json",
        "--output",
        "out.json",
        "--non-interactive",
    ])
    .unwrap();

    assert_eq!(cli.config.target_version, "1.20.1");
    match cli.command {
        Some(Commands::Resolve {
            modlist,
            manifest,
            output,
            non_interactive,
            diagnostics,
        }) => {
            assert_eq!(modlist, PathBuf::from("mods.json"));
            assert_eq!(manifest, PathBuf::from("manifest.json"));
            assert_eq!(output, PathBuf::from("out.json"));
            assert!(non_interactive);
            assert!(diagnostics.is_none());
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn test_parse_resolve_requires_paths() {
    assert!(Cli::try_parse_from(["modfill", "resolve", "--modlist", "mods.json"]).is_err());
}

#[test]
fn test_parse_search() {
    let cli = Cli::try_parse_from(["modfill", "search", "Just Enough Items"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Search { ref name }) if name == "Just Enough Items"
    ));
}

#[test]
fn test_parse_rejects_unknown_color() {
    assert!(Cli::try_parse_from(["modfill", "--color", "sometimes"]).is_err());
}
