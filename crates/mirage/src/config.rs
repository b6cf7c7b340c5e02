//! # Startup Configuration
//!
//! Loaded once from TOML before the first frame; nothing here is consulted
//! in the frame path itself. The host passes the resolved settings back
//! into the render and visibility calls as plain values.

use mirage_raster::DetailPolicy;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The TOML text did not parse into a valid configuration.
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Which ground render path the host drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderMode {
    /// One map sample per destination pixel.
    Quality,
    /// Motion-adaptive sampling with row duplication.
    Performance,
}

/// Ground renderer settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Selected render path.
    pub mode: RenderMode,
    /// Stride used when the adaptive table is disabled.
    pub base_step: usize,
    /// Adaptive-resolution master switch.
    pub adaptive_resolution: bool,
    /// Layered-resolution switch; banded strides need both flags.
    pub layered_resolution: bool,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            mode: RenderMode::Performance,
            base_step: 2,
            adaptive_resolution: true,
            layered_resolution: true,
        }
    }
}

impl RenderSettings {
    /// The rasterizer-facing sampling policy.
    #[must_use]
    pub fn detail_policy(&self) -> DetailPolicy {
        DetailPolicy {
            base_step: self.base_step,
            adaptive: self.adaptive_resolution,
            layered: self.layered_resolution,
        }
    }
}

/// View settings fed to the visibility scan.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewSettings {
    /// Horizontal field of view in radians.
    pub fov: f32,
    /// Maximum render distance in world units.
    pub max_render_distance: f32,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            fov: std::f32::consts::FRAC_PI_2,
            max_render_distance: 600.0,
        }
    }
}

/// Complete kernel configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct KernelConfig {
    /// Ground renderer settings.
    pub render: RenderSettings,
    /// Visibility settings.
    pub view: ViewSettings,
}

impl KernelConfig {
    /// Parses a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Invalid`] when the text is not valid TOML or a field
    /// has the wrong shape. Missing fields fall back to defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|err| ConfigError::Invalid(err.to_string()))
    }
}
