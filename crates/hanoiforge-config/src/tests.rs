//! Tests for runner configuration.

use super::*;
use std::io::Write;

#[test]
fn test_defaults() {
    let config = RunnerConfig::default();
    assert_eq!(config.max_disks, 20);
    assert_eq!(config.significant_digits, 5);
    assert_eq!(config.environment_mode, EnvironmentMode::Fast);
    assert_eq!(config.tower_roles().unwrap(), TowerRoles::default());
}

#[test]
fn test_toml_parsing() {
    let toml = r#"
        max_disks = 10
        significant_digits = 3
        environment_mode = "full_assert"

        [roles]
        source = "C"
        auxiliary = "B"
        destination = "A"
    "#;

    let config = RunnerConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.max_disks, 10);
    assert_eq!(config.significant_digits, 3);
    assert!(config.environment_mode.is_asserted());
    assert_eq!(config.roles.source, TowerId::C);
    assert_eq!(config.roles.destination, TowerId::A);
}

#[test]
fn test_partial_toml_keeps_defaults() {
    let config = RunnerConfig::from_toml_str("max_disks = 8").unwrap();
    assert_eq!(config.max_disks, 8);
    assert_eq!(config.significant_digits, 5);
    assert_eq!(config.roles, RolesConfig::default());
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        max_disks: 15
        environment_mode: full_assert
        roles:
          destination: B
          auxiliary: C
    "#;

    let config = RunnerConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.max_disks, 15);
    assert_eq!(config.environment_mode, EnvironmentMode::FullAssert);
    assert_eq!(config.roles.source, TowerId::A);
    assert_eq!(config.tower_roles().unwrap().destination(), TowerId::B);
}

#[test]
fn test_invalid_values() {
    assert!(matches!(
        RunnerConfig::new().with_max_disks(0).validate(),
        Err(ConfigError::Invalid(_))
    ));
    assert!(matches!(
        RunnerConfig::new().with_max_disks(25).validate(),
        Err(ConfigError::Invalid(_))
    ));

    let duplicate = RunnerConfig::from_toml_str(
        r#"
        [roles]
        source = "A"
        auxiliary = "A"
        destination = "C"
    "#,
    )
    .unwrap();
    assert!(matches!(duplicate.validate(), Err(ConfigError::Invalid(_))));
}

#[test]
fn test_unknown_tower_label_fails_to_parse() {
    let result = RunnerConfig::from_toml_str(
        r#"
        [roles]
        source = "D"
    "#,
    );
    assert!(matches!(result, Err(ConfigError::Toml(_))));
}

#[test]
fn test_builder() {
    let roles = TowerRoles::new(TowerId::B, TowerId::A, TowerId::C).unwrap();
    let config = RunnerConfig::new()
        .with_max_disks(4)
        .with_significant_digits(7)
        .with_environment_mode(EnvironmentMode::FullAssert)
        .with_roles(roles);

    assert_eq!(config.max_disks, 4);
    assert_eq!(config.significant_digits, 7);
    assert_eq!(config.tower_roles().unwrap(), roles);
    assert!(config.validate().is_ok());
}

#[test]
fn test_load_by_extension() {
    let mut toml_file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(toml_file, "max_disks = 6").unwrap();
    assert_eq!(RunnerConfig::load(toml_file.path()).unwrap().max_disks, 6);

    let mut yaml_file = tempfile::Builder::new().suffix(".yml").tempfile().unwrap();
    writeln!(yaml_file, "max_disks: 7").unwrap();
    assert_eq!(RunnerConfig::load(yaml_file.path()).unwrap().max_disks, 7);
}

#[test]
fn test_load_rejects_invalid_file() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(file, "significant_digits = 0").unwrap();
    assert!(matches!(
        RunnerConfig::load(file.path()),
        Err(ConfigError::Invalid(_))
    ));
}

#[test]
fn test_load_missing_file() {
    assert!(matches!(
        RunnerConfig::load("does/not/exist.toml"),
        Err(ConfigError::Io(_))
    ));
}
