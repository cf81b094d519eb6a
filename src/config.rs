use serde::Deserialize;
use thiserror::Error;

use crate::color::{Rgb, PINK};
use crate::render::surface_size;

pub const CONFIG_ENV_VAR: &str = "PIXEL_BRUSH_CONFIG";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid configuration JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Edge length of one cell on the surface, in pixels.
    pub cell_size: u32,
    pub grid_width: usize,
    pub grid_height: usize,
    pub initial_color: Rgb,
    /// How far the pointer may travel between press and release for the
    /// release to still count as a click.
    pub click_slop: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cell_size: 50,
            grid_width: 10,
            grid_height: 10,
            initial_color: PINK,
            click_slop: 4.0,
        }
    }
}

impl Config {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads overrides from `PIXEL_BRUSH_CONFIG`. Unset means defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var(CONFIG_ENV_VAR) {
            Ok(text) => Self::from_json(&text),
            Err(_) => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cell_size == 0 {
            return Err(ConfigError::Invalid("cell_size must be positive".to_string()));
        }
        if self.grid_width == 0 || self.grid_height == 0 {
            return Err(ConfigError::Invalid(format!(
                "grid must be at least 1x1, got {}x{}",
                self.grid_width, self.grid_height
            )));
        }
        if surface_size(self.grid_width, self.grid_height, self.cell_size).is_none() {
            return Err(ConfigError::Invalid(format!(
                "{}x{} cells of {}px do not fit in a frame buffer",
                self.grid_width, self.grid_height, self.cell_size
            )));
        }
        if !self.click_slop.is_finite() || self.click_slop < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "click_slop must be a non-negative number, got {}",
                self.click_slop
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_a_ten_by_ten_grid_of_fifty_pixel_cells() {
        let config = Config::default();
        assert_eq!(config.cell_size, 50);
        assert_eq!((config.grid_width, config.grid_height), (10, 10));
        assert_eq!(config.initial_color, PINK);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_remaining_defaults() {
        let config = Config::from_json(r#"{ "cell_size": 20, "initial_color": [0, 300, -4] }"#).unwrap();
        assert_eq!(config.cell_size, 20);
        assert_eq!(config.grid_width, 10);
        assert_eq!(config.initial_color, Rgb::new(0, 255, 0));
    }

    #[test]
    fn rejects_degenerate_values() {
        assert!(matches!(
            Config::from_json(r#"{ "cell_size": 0 }"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            Config::from_json(r#"{ "grid_height": 0 }"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            Config::from_json(r#"{ "click_slop": -1.0 }"#),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn rejects_grids_too_large_for_the_surface() {
        assert!(matches!(
            Config::from_json(r#"{ "cell_size": 100000, "grid_width": 50000 }"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(Config::from_json(r#"{ "cell_size": 1000, "grid_width": 64 }"#).is_ok());
    }

    #[test]
    fn rejects_malformed_and_unknown_keys() {
        assert!(matches!(Config::from_json("{"), Err(ConfigError::Parse(_))));
        assert!(matches!(
            Config::from_json(r#"{ "zoom": 2 }"#),
            Err(ConfigError::Parse(_))
        ));
    }
}
