//! Tests for configuration system

use foodplan::Config;
use std::path::PathBuf;
use temp_dir::TempDir;

#[test]
fn test_config_loads_from_default_toml() {
    let config = Config::load(None).expect("Failed to load config");

    assert_eq!(config.catalog.path, None);
    assert_eq!(config.plan.days, 7);
    assert_eq!(config.plan.lunches_per_day, 1);
    assert_eq!(config.plan.dinners_per_day, 1);
    assert!(!config.plan.allow_repeats);
    assert_eq!(config.assets.output_dir, PathBuf::from("public/images"));
    assert_eq!(config.assets.concurrency, 4);
    assert_eq!(config.observability.log_level, "info");
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_missing_file_uses_defaults() {
    let config =
        Config::load(Some("does/not/exist.toml".to_string())).expect("Failed to load config");

    assert_eq!(config.plan.days, 7);
    assert_eq!(config.assets.retries, 2);
    assert_eq!(config.assets.timeout_secs, 15);
}

#[test]
fn test_config_file_overrides_defaults() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("custom.toml");
    std::fs::write(
        &path,
        r#"
[plan]
days = 5
allow_repeats = true

[assets]
concurrency = 8
"#,
    )?;

    let config = Config::load(Some(path.display().to_string()))?;

    assert_eq!(config.plan.days, 5);
    assert!(config.plan.allow_repeats);
    assert_eq!(config.plan.dinners_per_day, 1);
    assert_eq!(config.assets.concurrency, 8);

    Ok(())
}

#[test]
fn test_builtin_catalog_when_no_path() {
    let catalog = foodplan::load_catalog(&Config::default()).unwrap();

    assert_eq!(catalog.len(), foodplan_menu::MenuCatalog::builtin().len());
}
