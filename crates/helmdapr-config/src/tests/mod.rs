use super::*;

#[test]
fn embedded_defaults_parse() {
    let config: AppConfig = toml::from_str(DEFAULT_CONFIG).unwrap();
    assert_eq!(config.installer.release_namespace, "dapr-system");
    assert_eq!(config.cluster.default_namespace, "default");
    assert_eq!(config.log.filter, "info");
}

#[test]
fn defaults_match_section_defaults() {
    let config = AppConfig::default();
    let installer = InstallerConfig::default();
    assert_eq!(config.installer.chart, installer.chart);
    assert_eq!(config.installer.conf, installer.conf);
    assert_eq!(config.cluster.default_namespace, ClusterConfig::default().default_namespace);
    assert_eq!(config.log.filter, LogConfig::default().filter);
}

#[test]
fn kebab_case_aliases_are_accepted() {
    let raw = r#"
[installer]
release-namespace = "dapr"

[cluster]
default-namespace = "apps"
"#;
    let config: AppConfig = toml::from_str(raw).unwrap();
    assert_eq!(config.installer.release_namespace, "dapr");
    assert_eq!(config.cluster.default_namespace, "apps");
}

#[test]
fn partial_file_keeps_other_sections_at_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[log]\nfilter = \"debug\"\n").unwrap();

    let config = AppConfig::load_from(&path).unwrap();

    assert_eq!(config.log.filter, "debug");
    assert_eq!(config.installer.chart, "dapr/dapr");
    assert_eq!(config.cluster.default_namespace, "default");
}

#[test]
fn partial_section_keeps_its_other_fields() {
    let config: AppConfig = toml::from_str("[installer]\nconf = \"custom\"\n").unwrap();
    assert_eq!(config.installer.conf, "custom");
    assert_eq!(config.installer.release_namespace, "dapr-system");
}

#[test]
fn unknown_section_is_ignored() {
    let config: AppConfig = toml::from_str("[ui]\ntheme = \"dark\"\n").unwrap();
    assert_eq!(config.log.filter, "info");
}

#[test]
fn save_and_load_from_round() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let mut config = AppConfig::default();
    config.installer.conf = "custom".into();
    config.cluster.default_namespace = "test".into();
    config.save(&path).unwrap();

    let loaded = AppConfig::load_from(&path).unwrap();
    assert_eq!(loaded.installer.conf, "custom");
    assert_eq!(loaded.cluster.default_namespace, "test");
}

#[test]
fn load_from_invalid_toml_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[installer\nconf = ").unwrap();
    let err = AppConfig::load_from(&path).unwrap_err();
    assert!(format!("{err:#}").contains("parsing"), "{err:#}");
}

#[test]
fn load_from_missing_file_names_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");
    let err = AppConfig::load_from(&path).unwrap_err();
    assert!(err.to_string().contains("absent.toml"), "{err}");
}

#[test]
fn init_at_refuses_to_overwrite() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");

    AppConfig::init_at(&path).unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), DEFAULT_CONFIG);
    assert!(AppConfig::init_at(&path).is_err());
}
