//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/mapnode/mapnode.toml`
//! 3. Environment variables: `MAPNODE_*` prefix (`__` separates sections)

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;
use crate::domain::LayoutConfig;

/// Raw layout config for intermediate parsing (`None` → inherit from base).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawLayoutConfig {
    pub node_width: Option<f64>,
    pub node_height: Option<f64>,
    pub drag_opacity: Option<f64>,
    pub transition: Option<String>,
}

/// Raw settings for intermediate parsing.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub color: Option<bool>,
    pub layout: RawLayoutConfig,
}

/// Unified configuration for mapnode.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Colored terminal output
    pub color: bool,
    /// Node box geometry
    pub layout: LayoutConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            layout: LayoutConfig::default(),
        }
    }
}

/// Get the XDG config directory for mapnode.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "mapnode").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("mapnode.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Overlay wins where it specifies a value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        let base = &self.layout;
        let raw = &overlay.layout;
        Self {
            color: overlay.color.unwrap_or(self.color),
            layout: LayoutConfig {
                node_width: raw.node_width.unwrap_or(base.node_width),
                node_height: raw.node_height.unwrap_or(base.node_height),
                drag_opacity: raw.drag_opacity.unwrap_or(base.drag_opacity),
                transition: raw
                    .transition
                    .clone()
                    .unwrap_or_else(|| base.transition.clone()),
            },
        }
    }

    /// Load settings with layered precedence from the XDG config location.
    pub fn load() -> Result<Self, ApplicationError> {
        Self::load_from(global_config_path().as_deref())
    }

    /// Load settings using `config_file` in place of the global config.
    ///
    /// A missing file is skipped, a malformed one is an error.
    pub fn load_from(config_file: Option<&Path>) -> Result<Self, ApplicationError> {
        // 1. Start with defaults
        let mut current = Self::default();

        // 2. Config file
        if let Some(path) = config_file {
            if path.exists() {
                let raw = load_raw_settings(path)?;
                current = current.merge_with(&raw);
            }
        }

        // 3. Apply environment variables (replaces - explicit override)
        current = Self::apply_env_overrides(current)?;

        current.validate()?;
        Ok(current)
    }

    /// Apply MAPNODE_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        // Use config crate just for env var parsing
        let builder = Config::builder().add_source(
            Environment::with_prefix("MAPNODE")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().map_err(config_err)?;

        if let Ok(val) = config.get_bool("color") {
            settings.color = val;
        }
        if let Ok(val) = config.get_float("layout.node_width") {
            settings.layout.node_width = val;
        }
        if let Ok(val) = config.get_float("layout.node_height") {
            settings.layout.node_height = val;
        }
        if let Ok(val) = config.get_float("layout.drag_opacity") {
            settings.layout.drag_opacity = val;
        }
        if let Ok(val) = config.get_string("layout.transition") {
            settings.layout.transition = val;
        }

        Ok(settings)
    }

    fn validate(&self) -> Result<(), ApplicationError> {
        let layout = &self.layout;
        if !(layout.node_width > 0.0 && layout.node_height > 0.0) {
            return Err(ApplicationError::Config {
                message: format!(
                    "node size must be positive, got {}x{}",
                    layout.node_width, layout.node_height
                ),
            });
        }
        if !(0.0..=1.0).contains(&layout.drag_opacity) {
            return Err(ApplicationError::Config {
                message: format!("drag_opacity must be within 0..=1, got {}", layout.drag_opacity),
            });
        }
        Ok(())
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# mapnode configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/mapnode/mapnode.toml
#   Env:    MAPNODE_* environment variables, e.g. MAPNODE_LAYOUT__NODE_WIDTH=240

# Colored terminal output
# color = true

[layout]
# Node box size in pixels (CHOICE nodes are half as high)
# node_width = 200.0
# node_height = 100.0

# Opacity of a node while it is dragged
# drag_opacity = 0.5

# Transition used when a node is centered
# transition = "all 500ms ease 0s"
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_default_settings_when_created_then_has_expected_layout() {
        let settings = Settings::default();
        assert!(settings.color);
        assert_eq!(settings.layout.node_width, 200.0);
        assert_eq!(settings.layout.node_height, 100.0);
        assert_eq!(settings.layout.drag_opacity, 0.5);
    }

    #[test]
    fn given_partial_overlay_when_merging_then_keeps_unspecified_fields() {
        let overlay = RawSettings {
            color: Some(false),
            layout: RawLayoutConfig {
                node_width: Some(320.0),
                ..Default::default()
            },
        };

        let merged = Settings::default().merge_with(&overlay);

        assert!(!merged.color);
        assert_eq!(merged.layout.node_width, 320.0);
        assert_eq!(merged.layout.node_height, 100.0);
        assert_eq!(merged.layout.transition, "all 500ms ease 0s");
    }

    #[test]
    fn given_negative_size_when_validating_then_config_error() {
        let mut settings = Settings::default();
        settings.layout.node_height = -1.0;
        assert!(matches!(
            settings.validate(),
            Err(ApplicationError::Config { .. })
        ));
    }

    #[test]
    fn given_settings_when_serializing_then_toml_has_layout_section() {
        let toml = Settings::default().to_toml().unwrap();
        assert!(toml.contains("[layout]"));
        assert!(toml.contains("node_width = 200.0"));
    }

    #[test]
    fn given_template_when_parsing_then_valid_toml() {
        let raw: RawSettings = toml::from_str(&Settings::template()).unwrap();
        assert!(raw.color.is_none());
    }
}
