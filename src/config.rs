//! Editor configuration.
//!
//! [`EditorConfig`] is deserialized from JSON (with every field optional) and
//! validated once, before any editor state is built from it.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::constants::{DEFAULT_DISP_SCALE, DEFAULT_HEIGHT, DEFAULT_WIDTH, MAX_GRID_CELLS};
use crate::error::{ConfigError, ConfigResult};
use crate::mapper::CoordinateMapper;
use crate::types::EditMode;

/// Environment variable that overrides the configured mode.
pub const MODE_ENV_VAR: &str = "DIAGRAM_MAKER_MODE";

/// Editor configuration, validated once before an editor is built from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EditorConfig {
    /// Grid columns
    pub width: u32,
    /// Grid rows
    pub height: u32,
    /// Display pixels per grid cell
    pub disp_scale: f32,
    /// Active editing mode
    pub mode: EditMode,
    /// Whether to render the `Mode: ...` indicator
    pub show_mode: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            disp_scale: DEFAULT_DISP_SCALE,
            mode: EditMode::default(),
            show_mode: false,
        }
    }
}

impl EditorConfig {
    /// Checks dimensions and scale, returning the config unchanged when valid.
    pub fn validate(self) -> ConfigResult<Self> {
        if self.width == 0 {
            return Err(ConfigError::ZeroWidth);
        }
        if self.height == 0 {
            return Err(ConfigError::ZeroHeight);
        }
        if self.width > MAX_GRID_CELLS || self.height > MAX_GRID_CELLS {
            return Err(ConfigError::TooLarge {
                width: self.width,
                height: self.height,
                max: MAX_GRID_CELLS,
            });
        }
        if !self.disp_scale.is_finite() || self.disp_scale <= 0.0 {
            return Err(ConfigError::InvalidScale(self.disp_scale));
        }
        Ok(self)
    }

    /// Parses and validates a JSON config such as `{"width": 7, "mode": "dot"}`.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()
    }

    /// Reads, parses and validates a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        log::debug!("loading editor config from {}", path.display());
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Replaces the mode with the value of [`MODE_ENV_VAR`] when that variable is set.
    pub fn with_env_overrides(mut self) -> ConfigResult<Self> {
        if let Ok(value) = std::env::var(MODE_ENV_VAR) {
            self.mode = value.parse()?;
            log::info!("mode overridden from {MODE_ENV_VAR}: {}", self.mode);
        }
        Ok(self)
    }

    /// Coordinate mapper for this grid and scale.
    pub fn mapper(&self) -> CoordinateMapper {
        CoordinateMapper::new(self.width, self.height, self.disp_scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = EditorConfig::default();
        assert_eq!(config.width, 5);
        assert_eq!(config.height, 5);
        assert_eq!(config.disp_scale, 120.0);
        assert_eq!(config.mode, EditMode::Line);
        assert!(!config.show_mode);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config = EditorConfig::from_json(r#"{"width": 8, "mode": "dot", "showMode": true}"#)
            .expect("valid config");
        assert_eq!(config.width, 8);
        assert_eq!(config.height, 5);
        assert_eq!(config.disp_scale, 120.0);
        assert_eq!(config.mode, EditMode::Dot);
        assert!(config.show_mode);
    }

    #[test]
    fn scale_is_read_from_disp_scale_key() {
        let config = EditorConfig::from_json(r#"{"dispScale": 64}"#).expect("valid config");
        assert_eq!(config.disp_scale, 64.0);
    }

    #[test]
    fn rejects_invalid_values() {
        assert!(matches!(
            EditorConfig::from_json(r#"{"width": 0}"#),
            Err(ConfigError::ZeroWidth)
        ));
        assert!(matches!(
            EditorConfig::from_json(r#"{"height": 0}"#),
            Err(ConfigError::ZeroHeight)
        ));
        assert!(matches!(
            EditorConfig::from_json(r#"{"dispScale": -3.0}"#),
            Err(ConfigError::InvalidScale(_))
        ));
        assert!(matches!(
            EditorConfig::from_json(r#"{"width": 100000}"#),
            Err(ConfigError::TooLarge { .. })
        ));
        assert!(matches!(
            EditorConfig::from_json(r#"{"mode": "circle"}"#),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn env_var_overrides_mode() {
        std::env::set_var(MODE_ENV_VAR, "dot");
        let config = EditorConfig::default().with_env_overrides();
        std::env::set_var(MODE_ENV_VAR, "square");
        let bad = EditorConfig::default().with_env_overrides();
        std::env::remove_var(MODE_ENV_VAR);

        assert_eq!(config.expect("dot is a mode").mode, EditMode::Dot);
        assert!(matches!(bad, Err(ConfigError::UnknownMode(_))));
    }

    #[test]
    fn mapper_uses_configured_grid() {
        let config = EditorConfig {
            width: 3,
            height: 2,
            disp_scale: 50.0,
            ..Default::default()
        };
        let extent = config.mapper().extent();
        assert_eq!(extent.pixel_width, 150.0);
        assert_eq!(extent.pixel_height, 100.0);
    }
}
