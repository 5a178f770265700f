use std::path::PathBuf;

use serde::Deserialize;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/twofade/config.toml` or `~/.config/twofade/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `TWOFADE__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub bundle: BundleSettings,
    pub ui: UiSettings,
    pub log: LogSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BundleSettings {
    /// Directory holding the packaged track resources.
    /// When unset, `resources/` next to the executable is used.
    pub dir: Option<PathBuf>,
    /// Whether to follow symlinks while looking up a resource.
    pub follow_links: bool,
    /// Optional cap on how deep below the bundle root a resource may live.
    pub max_depth: Option<usize>,
}

impl Default for BundleSettings {
    fn default() -> Self {
        Self {
            dir: None,
            follow_links: true,
            max_depth: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Height of one terminal cell divided by its width.
    pub cell_aspect: f32,
    /// Physical height/width ratio of the emulated portrait screen.
    pub portrait_ratio: f32,
    /// How far one key press moves the fade slider (seconds).
    pub slider_step: f32,
    /// Labels of the two track selector buttons, in tag order.
    pub selector_labels: Vec<String>,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            cell_aspect: 2.0,
            portrait_ratio: 2.0,
            slider_step: 0.5,
            selector_labels: vec!["First".to_string(), "Second".to_string()],
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// Whether to write a log file at all.
    pub enabled: bool,
    /// Default filter directive; `RUST_LOG` takes precedence.
    pub level: String,
    /// Log file location. Defaults to `$XDG_STATE_HOME/twofade/twofade.log`.
    pub file: Option<PathBuf>,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            level: "info".to_string(),
            file: None,
        }
    }
}
