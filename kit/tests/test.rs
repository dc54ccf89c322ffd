use std::fs;

use label_core::{Category, Locale};
use label_kit::{
    config::{LabelConfig, LogLevel},
    logger::init_tracing,
};

#[test]
fn config_parse() {
    let config = LabelConfig::from(&"tests/config.yml").unwrap();
    assert_eq!(config.log_level, LogLevel::Warn);
    assert_eq!(config.locale, Some(Locale::parse("en-US").unwrap()));
    assert_eq!(config.fallback_locale, Locale::default());
    assert_eq!(config.log_dir, None);
    assert!(config.catalog_path().ends_with("tests/catalog"));
}

#[test]
fn config_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("labels.yaml");
    fs::write(&path, "catalog_dir: catalogs\n").unwrap();

    let config = LabelConfig::from(&path).unwrap();
    assert_eq!(config.log_level, LogLevel::Info);
    assert_eq!(config.locale, None);
    assert_eq!(config.fallback_locale.as_str(), "en");
    assert!(!config.active_locale().as_str().is_empty());
}

#[test]
fn config_rejects_other_extensions() {
    assert!(LabelConfig::from(&"tests/catalog/en.toml").is_err());
    assert!(LabelConfig::from(&"tests/missing.yml").is_err());
}

#[test]
fn config_rejects_invalid_locale() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("labels.yml");
    fs::write(&path, "catalog_dir: catalogs\nlocale: \"en US\"\n").unwrap();
    assert!(LabelConfig::from(&path).is_err());
}

#[test]
fn resolver_from_config() {
    let config = LabelConfig::from(&"tests/config.yml").unwrap();
    let resolver = config.resolver(None).unwrap();
    assert_eq!(resolver.locale().as_str(), "en-US");
    assert_eq!(resolver.resolve("Product", Category::Fields, "name"), "Product name");
    assert_eq!(resolver.resolve("Product", Category::Fields, "owner"), "Owner");
    assert_eq!(resolver.resolve("Product", Category::Fields, "sku"), "Sku");

    let resolver = config.resolver(Some(Locale::parse("fr").unwrap())).unwrap();
    assert_eq!(resolver.resolve("Product", Category::Fields, "name"), "Product Name");
}

#[test]
fn resolver_reports_missing_catalog_dir() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("labels.yml");
    fs::write(&path, "catalog_dir: nowhere\n").unwrap();
    let config = LabelConfig::from(&path).unwrap();
    assert!(config.resolver(None).is_err());
}

#[test]
fn tracing_init_reports_errors() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("not-a-dir");
    fs::write(&blocker, "").unwrap();
    assert!(init_tracing(LogLevel::Info, Some(blocker.join("logs").as_path())).is_err());

    let guard = init_tracing(LogLevel::Warn, None).unwrap();
    assert!(guard.is_none());
    // the global subscriber is already set
    assert!(init_tracing(LogLevel::Warn, None).is_err());
}
