use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{Result, TouchbarError};
use crate::selector::{DEFAULT_SCRUB_STRIP, SelectorOptions};
use crate::speeder::{DEFAULT_FORGIVENESS, Speeder};

/// Width in pixels of a handle while it is being dragged.
pub const DEFAULT_ACTIVE_HANDLE_WIDTH: f32 = 64.0;

/// Touch bar widget configuration.
///
/// Every field is optional in the JSON form.
///
/// # Example
/// ```
/// use touchbar::TouchbarConfig;
///
/// let config: TouchbarConfig =
///     serde_json::from_str(r#"{"z_handle": true, "initial_z": 0.5}"#).expect("valid config");
/// assert!(config.z_handle);
/// assert_eq!(config.initial_y, 1.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TouchbarConfig {
    pub enabled: bool,
    pub initial_x: f32,
    pub initial_y: f32,
    pub initial_z: f32,
    pub z_handle: bool,
    pub scrub_strip: f32,
    pub active_handle_width: f32,
    pub speeder_forgiveness_ms: u64,
}

impl Default for TouchbarConfig {
    fn default() -> Self {
        let options = SelectorOptions::default();
        Self {
            enabled: options.enabled,
            initial_x: options.initial_x,
            initial_y: options.initial_y,
            initial_z: options.initial_z,
            z_handle: options.z_handle,
            scrub_strip: DEFAULT_SCRUB_STRIP,
            active_handle_width: DEFAULT_ACTIVE_HANDLE_WIDTH,
            speeder_forgiveness_ms: DEFAULT_FORGIVENESS.as_millis() as u64,
        }
    }
}

impl TouchbarConfig {
    /// Reads a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| TouchbarError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self =
            serde_json::from_str(&raw).map_err(|source| TouchbarError::ConfigParse {
                path: path.to_path_buf(),
                source,
            })?;
        info!(path = %path.display(), z_handle = config.z_handle, "config loaded");
        Ok(config)
    }

    pub fn selector_options(&self) -> SelectorOptions {
        SelectorOptions {
            enabled: self.enabled,
            initial_x: self.initial_x,
            initial_y: self.initial_y,
            initial_z: self.initial_z,
            z_handle: self.z_handle,
            scrub_strip: self.scrub_strip,
        }
    }

    pub fn speeder(&self) -> Speeder {
        Speeder::new(Duration::from_millis(self.speeder_forgiveness_ms))
    }

    /// Normalized hit area for a bar `bar_width_px` pixels wide.
    ///
    /// Returns `0.0` for non-positive or non-finite widths so that no handle
    /// can be grabbed on a collapsed bar.
    pub fn hit_area_half_width(&self, bar_width_px: f32) -> f32 {
        if !bar_width_px.is_finite() || bar_width_px <= 0.0 {
            debug!(bar_width_px, "hit area collapsed for degenerate bar width");
            return 0.0;
        }
        self.active_handle_width / bar_width_px
    }
}
