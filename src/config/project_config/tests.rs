use super::*;

#[test]
fn test_default_config() {
    let config = ProjectConfig::default();
    assert!(config.generator.seed.is_none());
    assert!(config.output.format.is_none());
    assert_eq!(config.initial_configuration(), Configuration::default());
}

#[test]
fn test_example_config_parses() {
    let config: ProjectConfig = toml::from_str(EXAMPLE_CONFIG).expect("example config");
    assert_eq!(config.defaults.scenario, Some(Scenario::Realistic));
    assert_eq!(config.output.format.as_deref(), Some("text"));
    assert_eq!(config.initial_configuration(), Configuration::default());
}

#[test]
fn test_scenario_then_overrides() {
    let toml_str = r#"
[defaults]
scenario = "worst"
users = 300
modules = ["sd", "mm"]
"#;
    let config: ProjectConfig = toml::from_str(toml_str).unwrap();
    let initial = config.initial_configuration();
    assert_eq!(initial.system_size, 10_000);
    assert_eq!(initial.object_count, 500);
    assert_eq!(initial.users, 300);
    assert_eq!(initial.modules, vec!["SD", "MM"]);
    assert_eq!(initial.complexity, ComplexityLevel::HighlyComplex);
    // users diverged from the preset
    assert_eq!(initial.scenario, None);
}

#[test]
fn test_out_of_range_defaults_are_clamped() {
    let toml_str = r#"
[defaults]
system_size = 1
object_count = -20
users = 99999
"#;
    let config: ProjectConfig = toml::from_str(toml_str).unwrap();
    let initial = config.initial_configuration();
    assert_eq!(initial.system_size, 100);
    assert_eq!(initial.object_count, 0);
    assert_eq!(initial.users, 10_000);
}

#[test]
fn test_underscore_complexity_accepted() {
    let toml_str = r#"
[defaults]
complexity = "highly_complex"
object_count = 40
"#;
    let config: ProjectConfig = toml::from_str(toml_str).unwrap();
    let initial = config.initial_configuration();
    assert_eq!(initial.complexity, ComplexityLevel::HighlyComplex);
    assert_eq!(initial.object_count, 40);

    // Discovery keeps the file instead of falling back to defaults
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("readiness.toml"), toml_str).unwrap();
    let discovered = load_project_config(dir.path()).initial_configuration();
    assert_eq!(discovered, initial);
}

#[test]
fn test_invalid_complexity_rejected() {
    let toml_str = r#"
[defaults]
complexity = "extreme"
"#;
    assert!(toml::from_str::<ProjectConfig>(toml_str).is_err());
}

#[test]
fn test_generator_seed() {
    let toml_str = r#"
[generator]
seed = 7

[defaults]
complexity = "highly-complex"
"#;
    let config: ProjectConfig = toml::from_str(toml_str).unwrap();
    assert_eq!(config.generator.seed, Some(7));
    assert_eq!(
        config.defaults.complexity,
        Some(ComplexityLevel::HighlyComplex)
    );
}

#[test]
fn test_load_project_config_discovery() {
    let dir = tempfile::tempdir().unwrap();
    assert!(load_project_config(dir.path()).generator.seed.is_none());

    std::fs::write(
        dir.path().join(".readinessrc.json"),
        r#"{"generator": {"seed": 11}}"#,
    )
    .unwrap();
    assert_eq!(load_project_config(dir.path()).generator.seed, Some(11));

    // TOML wins over JSON
    std::fs::write(dir.path().join("readiness.toml"), "[generator]\nseed = 12\n").unwrap();
    assert_eq!(load_project_config(dir.path()).generator.seed, Some(12));
}

#[test]
fn test_broken_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("readiness.toml"), "[defaults\nbroken").unwrap();
    let config = load_project_config(dir.path());
    assert_eq!(config.initial_configuration(), Configuration::default());
}

#[test]
fn test_load_config_file_reports_errors() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("custom.toml");
    assert!(load_config_file(&path).is_err());

    std::fs::write(&path, "[output]\nformat = \"json\"\n").unwrap();
    let config = load_config_file(&path).unwrap();
    assert_eq!(config.output.format.as_deref(), Some("json"));
}
