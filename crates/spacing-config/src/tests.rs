//! Tests for spacing configuration.

use super::*;

#[test]
fn test_toml_parsing() {
    let toml = r##"
        environment_mode = "full_assert"
        left_boundary = "reject"

        [alphabet]
        occupied = "#"
        empty = "-"
    "##;

    let config = SpacingConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.environment_mode, EnvironmentMode::FullAssert);
    assert_eq!(config.left_boundary, LeftBoundaryPolicy::Reject);
    assert_eq!(config.alphabet, Alphabet::new('#', '-'));
    assert!(config.asserts_placements());
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        environment_mode: full_assert
        left_boundary: unchecked
        alphabet:
          occupied: "o"
          empty: "_"
    "#;

    let config = SpacingConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.environment_mode, EnvironmentMode::FullAssert);
    assert_eq!(config.left_boundary, LeftBoundaryPolicy::Unchecked);
    assert_eq!(config.alphabet, Alphabet::new('o', '_'));
}

#[test]
fn test_empty_toml_uses_defaults() {
    let config = SpacingConfig::from_toml_str("").unwrap();
    assert_eq!(config, SpacingConfig::default());
    assert_eq!(config.alphabet, Alphabet::default());
    assert!(!config.asserts_placements());
}

#[test]
fn test_partial_alphabet_keeps_other_default() {
    let config = SpacingConfig::from_toml_str(
        r#"
        [alphabet]
        occupied = "O"
    "#,
    )
    .unwrap();
    assert_eq!(config.alphabet, Alphabet::new('O', '.'));
}

#[test]
fn test_ambiguous_alphabet_rejected() {
    let toml = r#"
        [alphabet]
        occupied = "x"
        empty = "x"
    "#;

    let err = SpacingConfig::from_toml_str(toml).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn test_whitespace_symbol_rejected() {
    let config = SpacingConfig::new().with_alphabet(Alphabet::new('B', ' '));
    assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
}

#[test]
fn test_unknown_mode_is_parse_error() {
    let err = SpacingConfig::from_toml_str(r#"left_boundary = "sideways""#).unwrap_err();
    assert!(matches!(err, ConfigError::Toml(_)));
}

#[test]
fn test_missing_file_is_io_error() {
    let err = SpacingConfig::load("does/not/exist/spacing.toml").unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn test_builder() {
    let config = SpacingConfig::new()
        .with_environment_mode(EnvironmentMode::FullAssert)
        .with_left_boundary(LeftBoundaryPolicy::Reject)
        .with_alphabet(Alphabet::new('*', ' '));

    assert_eq!(config.left_boundary, LeftBoundaryPolicy::Reject);
    assert!(config.asserts_placements());
    assert!(config.validate().is_err());
}
