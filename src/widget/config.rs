//! Widget configuration
//!
//! The host hands the widget a partial configuration which is merged over
//! the built-in defaults, the way the player merges authored properties
//! over the packaged ones.

use serde::Deserialize;

use crate::core::types::Result;
use crate::core::Error;
use crate::math::GridConfig;
use super::response::ResponsePayload;

/// Effective widget configuration, fixed per instance
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WidgetConfig {
    /// Canvas width in pixels; falls back to the mount size
    pub width: Option<f32>,
    /// Canvas height in pixels; falls back to the mount size
    pub height: Option<f32>,
    /// Number of grid cells along each axis
    pub grid_divisions: u32,
    /// World units per cell
    pub cube_size: f32,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            width: None,
            height: None,
            grid_divisions: 4,
            cube_size: 100.0,
        }
    }
}

/// Partial configuration received from the host
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConfigOverrides {
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub grid_divisions: Option<u32>,
    /// Host key is `cubePixelSize`: world units per grid cell
    #[serde(rename = "cubePixelSize")]
    pub cube_size: Option<f32>,
    /// Response bound by the host (e.g. a previously scored answer)
    pub bound_to: Option<ResponsePayload>,
}

impl WidgetConfig {
    /// Merge host overrides over these values and validate the result
    pub fn merged(self, overrides: &ConfigOverrides) -> Result<WidgetConfig> {
        let config = WidgetConfig {
            width: overrides.width.or(self.width),
            height: overrides.height.or(self.height),
            grid_divisions: overrides.grid_divisions.unwrap_or(self.grid_divisions),
            cube_size: overrides.cube_size.unwrap_or(self.cube_size),
        };

        if config.grid_divisions < 1 {
            return Err(Error::Config("gridDivisions must be at least 1".into()));
        }
        if config.cube_size <= 0.0 {
            return Err(Error::Config("cubePixelSize must be positive".into()));
        }
        Ok(config)
    }

    /// The grid this configuration describes
    pub fn grid(&self) -> GridConfig {
        GridConfig::new(self.grid_divisions, self.cube_size)
    }
}
