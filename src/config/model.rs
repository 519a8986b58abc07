//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the dashboard works out of the box.

use crate::routes::Component;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub bootstrap: BootstrapConfig,
    #[serde(default)]
    pub routes: RoutesConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub offline: OfflineConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// How the root view is mounted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BootstrapMode {
    /// Router with a data-store environment.
    #[default]
    Relay,
    /// The top-level application component, without a router.
    Direct,
}

/// Startup sequence settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BootstrapConfig {
    #[serde(default)]
    pub mode: BootstrapMode,
    #[serde(default = "default_loader_delay_ms")]
    pub loader_delay_ms: u64,
    #[serde(default = "default_loader_id")]
    pub loader_id: String,
    #[serde(default = "default_mount_id")]
    pub mount_id: String,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            mode: BootstrapMode::default(),
            loader_delay_ms: default_loader_delay_ms(),
            loader_id: default_loader_id(),
            mount_id: default_mount_id(),
        }
    }
}

/// Route table settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutesConfig {
    #[serde(default = "default_root_component")]
    pub root_component: Component,
    #[serde(default = "default_initial_path")]
    pub initial_path: String,
}

impl Default for RoutesConfig {
    fn default() -> Self {
        Self {
            root_component: default_root_component(),
            initial_path: default_initial_path(),
        }
    }
}

/// UI appearance and behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_date_format")]
    pub date_format: String,
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    #[serde(default = "default_max_notifications")]
    pub max_notifications: usize,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            date_format: default_date_format(),
            tick_rate_ms: default_tick_rate_ms(),
            max_notifications: default_max_notifications(),
        }
    }
}

/// Offline cache settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OfflineConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_dir: Option<PathBuf>,
}

impl Default for OfflineConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            cache_dir: None,
        }
    }
}

/// Diagnostic log settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            level: default_log_level(),
            log_dir: default_log_dir(),
        }
    }
}

fn default_true() -> bool {
    true
}
fn default_loader_delay_ms() -> u64 {
    200
}
fn default_loader_id() -> String {
    "initial-loader".into()
}
fn default_mount_id() -> String {
    "root".into()
}
fn default_root_component() -> Component {
    Component::DefaultLayout
}
fn default_initial_path() -> String {
    "/".into()
}
fn default_date_format() -> String {
    "%d-%b-%Y, %H:%M".into()
}
fn default_tick_rate_ms() -> u64 {
    250
}
fn default_max_notifications() -> usize {
    50
}
fn default_log_level() -> String {
    "info".into()
}
fn default_log_dir() -> String {
    "~/.local/share/vertex-ui/logs".into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let cfg: AppConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.bootstrap.loader_delay_ms, 200);
        assert_eq!(cfg.bootstrap.loader_id, "initial-loader");
        assert_eq!(cfg.bootstrap.mount_id, "root");
        assert_eq!(cfg.bootstrap.mode, BootstrapMode::Relay);
        assert_eq!(cfg.routes.root_component, Component::DefaultLayout);
        assert!(cfg.offline.enabled);
    }

    #[test]
    fn test_partial_sections() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [bootstrap]
            mode = "direct"

            [routes]
            root_component = "app"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.bootstrap.mode, BootstrapMode::Direct);
        assert_eq!(cfg.bootstrap.loader_delay_ms, 200);
        assert_eq!(cfg.routes.root_component, Component::App);
        assert_eq!(cfg.routes.initial_path, "/");
    }
}
