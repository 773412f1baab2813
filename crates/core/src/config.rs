use serde::Deserialize;

use crate::error::{JourneyError, JourneyResult};

/// Root application configuration. Loaded from environment variables with
/// the prefix `JOURNEY_BOARD__`.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub layout: LayoutConfig,
}

/// Geometry for the diagram grid. Columns are phases, lanes are roles;
/// renderers treat coordinates as pixels but nothing in the layout depends
/// on the unit.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct LayoutConfig {
    /// Horizontal offset of the first phase column.
    #[serde(default = "default_pad_x")]
    pub pad_x: f64,
    /// Vertical offset of the first role lane.
    #[serde(default = "default_pad_y")]
    pub pad_y: f64,
    /// Horizontal distance between adjacent phase columns.
    #[serde(default = "default_phase_gap")]
    pub phase_gap: f64,
    /// Vertical distance between adjacent role lanes.
    #[serde(default = "default_lane_height")]
    pub lane_height: f64,
}

// Default functions
fn default_pad_x() -> f64 {
    160.0
}
fn default_pad_y() -> f64 {
    80.0
}
fn default_phase_gap() -> f64 {
    240.0
}
fn default_lane_height() -> f64 {
    120.0
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            pad_x: default_pad_x(),
            pad_y: default_pad_y(),
            phase_gap: default_phase_gap(),
            lane_height: default_lane_height(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            layout: LayoutConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn load() -> JourneyResult<Self> {
        let builder = config::Config::builder().add_source(
            config::Environment::with_prefix("JOURNEY_BOARD")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder
            .build()
            .map_err(|e| JourneyError::Config(e.to_string()))?;
        config
            .try_deserialize()
            .map_err(|e| JourneyError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_geometry_matches_grid_constants() {
        let config = AppConfig::default();
        assert_eq!(config.layout.pad_x, 160.0);
        assert_eq!(config.layout.pad_y, 80.0);
        assert_eq!(config.layout.phase_gap, 240.0);
        assert_eq!(config.layout.lane_height, 120.0);
    }
}
