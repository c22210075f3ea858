use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::{camera::CameraMode, orbit::OrbitSettings, pipeline::RasterSettings, Result};

/// Top-level settings, loadable from YAML.
#[derive(Copy, Clone, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct RendererSettings {
    pub raster: RasterSettings,
    pub camera_mode: CameraMode,
    pub orbit: OrbitSettings,
    /// Target frame rate of the interval ticker.
    pub fps: u32,
}

impl Default for RendererSettings {
    fn default() -> Self {
        Self {
            raster: RasterSettings::default(),
            camera_mode: CameraMode::default(),
            orbit: OrbitSettings::default(),
            fps: 90,
        }
    }
}

/// Loads settings from a YAML file.
pub fn load_settings(path: &Path) -> Result<RendererSettings> {
    let source = std::fs::read_to_string(path)?;
    Ok(serde_yaml::from_str(&source)?)
}
