use super::*;

fn env(pairs: &[(&str, &str)]) -> EnvironmentConfig {
    envy::from_iter(
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string())),
    )
    .unwrap()
}

#[test]
fn test_no_color() {
    let color = env(&[("NO_COLOR", "1")]).apply_color_config(ColorIntent::Auto);
    assert_eq!(color, ColorIntent::Never);
}

#[test]
fn test_force_color() {
    let color = env(&[("FORCE_COLOR", "1")]).apply_color_config(ColorIntent::Auto);
    assert_eq!(color, ColorIntent::Always);

    let color = env(&[("FORCE_COLOR", "false")]).apply_color_config(ColorIntent::Always);
    assert_eq!(color, ColorIntent::Never);
}

#[test]
fn test_force_color_beats_no_color_and_clicolor() {
    let color = env(&[("CLICOLOR", "0"), ("NO_COLOR", "1"), ("FORCE_COLOR", "1")])
        .apply_color_config(ColorIntent::Auto);
    assert_eq!(color, ColorIntent::Always);
}

#[test]
fn test_ci_disables_color() {
    let color = env(&[("CI", "true"), ("FORCE_COLOR", "1")]).apply_color_config(ColorIntent::Auto);
    assert_eq!(color, ColorIntent::Never);
}

#[test]
fn test_clicolor_zero() {
    let color = env(&[("CLICOLOR", "0")]).apply_color_config(ColorIntent::Auto);
    assert_eq!(color, ColorIntent::Never);

    let color = env(&[("CLICOLOR", "1")]).apply_color_config(ColorIntent::Auto);
    assert_eq!(color, ColorIntent::Auto);
}

#[test]
fn test_empty_no_color_is_ignored() {
    let color = env(&[("NO_COLOR", "")]).apply_color_config(ColorIntent::Auto);
    assert_eq!(color, ColorIntent::Auto);
}

#[test]
fn test_invalid_force_color_values_ignored() {
    let color = env(&[("FORCE_COLOR", "invalid")]).apply_color_config(ColorIntent::Auto);
    assert_eq!(color, ColorIntent::Auto);
}

#[test]
fn test_unrelated_variables_ignored() {
    let config = env(&[("PATH", "/usr/bin"), ("HOME", "/root")]);
    assert!(config.no_color.is_none());
    assert!(config.ci.is_none());
    assert_eq!(config.apply_color_config(ColorIntent::Auto), ColorIntent::Auto);
}
