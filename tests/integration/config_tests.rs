//! Configuration resolution through the platform config directory

use render_complete::config::CompleterConfig;
use render_complete::core::constants::config_files::CONFIG_DIR_ENV;
use serial_test::serial;
use std::path::PathBuf;
use tempfile::TempDir;

#[tokio::test]
#[serial]
async fn test_resolve_uses_env_config_dir() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::write(
        temp_dir.path().join("config.toml"),
        "languages = [\"erb\"]\nroots = [\"/srv/shop\"]\n",
    )?;

    std::env::set_var(CONFIG_DIR_ENV, temp_dir.path());
    let resolved = CompleterConfig::resolve(None).await;
    std::env::remove_var(CONFIG_DIR_ENV);

    let config = resolved?;
    assert_eq!(config.languages, vec!["erb"]);
    assert_eq!(config.roots, vec![PathBuf::from("/srv/shop")]);
    assert_eq!(config.component_glob, "app/components/**/*_component.rb");
    Ok(())
}

#[tokio::test]
#[serial]
async fn test_resolve_falls_back_to_defaults() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;

    std::env::set_var(CONFIG_DIR_ENV, temp_dir.path());
    let resolved = CompleterConfig::resolve(None).await;
    std::env::remove_var(CONFIG_DIR_ENV);

    assert_eq!(resolved?, CompleterConfig::default());
    Ok(())
}

#[tokio::test]
async fn test_explicit_path_must_exist() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let missing = temp_dir.path().join("nope.toml");
    assert!(CompleterConfig::resolve(Some(&missing)).await.is_err());
    Ok(())
}
