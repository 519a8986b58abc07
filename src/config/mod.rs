pub mod model;

use anyhow::{Context, Result};
use chrono::format::{Item, StrftimeItems};
use std::path::{Path, PathBuf};

pub use model::{AppConfig, BootstrapConfig, BootstrapMode, LoggingConfig, UiConfig};

pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("vertex-ui")
        .join("config.toml")
}

pub fn load_config() -> Result<AppConfig> {
    load_config_from(&config_path())
}

pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;
    let mut config: AppConfig =
        toml::from_str(&contents).with_context(|| "Failed to parse config file")?;
    check_date_format(&mut config.ui);
    Ok(config)
}

/// Replace a date format chrono cannot render with the default one.
fn check_date_format(ui: &mut UiConfig) {
    let invalid = StrftimeItems::new(&ui.date_format).any(|item| matches!(item, Item::Error));
    if invalid {
        let fallback = UiConfig::default().date_format;
        tracing::warn!(
            date_format = %ui.date_format,
            fallback = %fallback,
            "invalid date format in config; using default"
        );
        ui.date_format = fallback;
    }
}

pub fn save_config(config: &AppConfig) -> Result<()> {
    save_config_to(config, &config_path())
}

pub fn save_config_to(config: &AppConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory {}", parent.display()))?;
    }
    let contents = toml::to_string_pretty(config).with_context(|| "Failed to serialize config")?;
    std::fs::write(path, contents)
        .with_context(|| format!("Failed to write config to {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_default() {
        let tmp = tempfile::tempdir().unwrap();
        let cfg = load_config_from(&tmp.path().join("nope.toml")).unwrap();
        assert_eq!(cfg.bootstrap.loader_delay_ms, 200);
    }

    #[test]
    fn test_save_then_load() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("nested").join("config.toml");
        let mut cfg = AppConfig::default();
        cfg.bootstrap.mode = BootstrapMode::Direct;
        cfg.ui.max_notifications = 5;

        save_config_to(&cfg, &path).unwrap();
        let loaded = load_config_from(&path).unwrap();
        assert_eq!(loaded.bootstrap.mode, BootstrapMode::Direct);
        assert_eq!(loaded.ui.max_notifications, 5);
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "bootstrap = 3").unwrap();
        assert!(load_config_from(&path).is_err());
    }

    #[test]
    fn test_invalid_date_format_falls_back() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "[ui]\ndate_format = \"%Q\"\nmax_notifications = 7\n").unwrap();

        let cfg = load_config_from(&path).unwrap();
        assert_eq!(cfg.ui.date_format, UiConfig::default().date_format);
        assert_eq!(cfg.ui.max_notifications, 7);
    }

    #[test]
    fn test_valid_date_format_is_kept() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "[ui]\ndate_format = \"%H:%M\"\n").unwrap();
        assert_eq!(load_config_from(&path).unwrap().ui.date_format, "%H:%M");
    }
}
