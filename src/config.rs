// Copyright (c) 2025 - Cowboy AI, Inc.
//! Configuration
//!
//! Canvas geometry used by the SVG generator and by callers placing devices,
//! plus the export settings of the command-line shell. The library never reads
//! the environment on its own; only [`ExportConfig::from_env`] does.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::errors::{TopologyError, TopologyResult};

pub const PROJECT_ENV: &str = "NETWORK_DESIGNER_PROJECT";
pub const OUTPUT_DIR_ENV: &str = "NETWORK_DESIGNER_OUTPUT_DIR";
pub const CANVAS_WIDTH_ENV: &str = "NETWORK_DESIGNER_CANVAS_WIDTH";
pub const CANVAS_HEIGHT_ENV: &str = "NETWORK_DESIGNER_CANVAS_HEIGHT";

/// Margin kept clear on the top/left edges when snapping
const SNAP_MARGIN: f64 = 50.0;
/// Margin kept clear on the bottom/right edges when snapping
const SNAP_FAR_MARGIN: f64 = 100.0;

/// Canvas viewport and device widget geometry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasConfig {
    #[serde(default = "default_width")]
    pub width: f64,
    #[serde(default = "default_height")]
    pub height: f64,
    #[serde(default = "default_device_width")]
    pub device_width: f64,
    #[serde(default = "default_device_height")]
    pub device_height: f64,
    #[serde(default = "default_grid_size")]
    pub grid_size: f64,
}

fn default_width() -> f64 {
    1400.0
}

fn default_height() -> f64 {
    900.0
}

fn default_device_width() -> f64 {
    90.0
}

fn default_device_height() -> f64 {
    110.0
}

fn default_grid_size() -> f64 {
    25.0
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            device_width: default_device_width(),
            device_height: default_device_height(),
            grid_size: default_grid_size(),
        }
    }
}

impl CanvasConfig {
    /// Round a point to the grid and clamp it inside the placeable area
    pub fn snap(&self, x: f64, y: f64) -> (f64, f64) {
        let round = |v: f64| {
            if self.grid_size > 0.0 {
                (v / self.grid_size).round() * self.grid_size
            } else {
                v
            }
        };
        let clamp = |v: f64, extent: f64| {
            let upper = (extent - SNAP_FAR_MARGIN).max(SNAP_MARGIN);
            v.clamp(SNAP_MARGIN, upper)
        };
        (clamp(round(x), self.width), clamp(round(y), self.height))
    }

    /// Visual center of a device widget placed at `(x, y)`
    pub fn device_center(&self, x: f64, y: f64) -> (f64, f64) {
        (x + self.device_width / 2.0, y + self.device_height / 2.0)
    }
}

/// Settings for the export binary
#[derive(Debug, Clone, PartialEq)]
pub struct ExportConfig {
    /// Project document to load
    pub project_path: PathBuf,
    /// Directory artifacts are written into
    pub output_dir: PathBuf,
    pub canvas: CanvasConfig,
}

impl ExportConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> TopologyResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from any key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> TopologyResult<Self> {
        let project_path = lookup(PROJECT_ENV)
            .map(PathBuf::from)
            .ok_or_else(|| TopologyError::Configuration(format!("{PROJECT_ENV} not set")))?;

        let output_dir = lookup(OUTPUT_DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));

        let mut canvas = CanvasConfig::default();
        if let Some(width) = lookup(CANVAS_WIDTH_ENV) {
            canvas.width = parse_extent(CANVAS_WIDTH_ENV, &width)?;
        }
        if let Some(height) = lookup(CANVAS_HEIGHT_ENV) {
            canvas.height = parse_extent(CANVAS_HEIGHT_ENV, &height)?;
        }

        Ok(Self {
            project_path,
            output_dir,
            canvas,
        })
    }
}

fn parse_extent(key: &str, value: &str) -> TopologyResult<f64> {
    match value.trim().parse::<f64>() {
        Ok(v) if v.is_finite() && v > 0.0 => Ok(v),
        _ => Err(TopologyError::Configuration(format!(
            "{key} must be a positive number, got {value:?}"
        ))),
    }
}
