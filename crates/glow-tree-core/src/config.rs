//! Tunable thresholds for classification, interaction and scaling
//!
//! Every field defaults to the calibrated value, so a config file only needs
//! to list what it overrides:
//!
//! ```toml
//! [interaction]
//! tree_dwell_ms = 1500
//!
//! [scale]
//! max = 2.4
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{GlowError, Result};

/// Gesture classification thresholds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    /// Openness ratio mapped to 0.0
    pub openness_ratio_min: f32,
    /// Openness ratio mapped to 1.0
    pub openness_ratio_max: f32,
    /// Thumb-index distance below which the heart gesture fires
    pub heart_threshold: f32,
    /// Thumb-index distance below which a pinch is reported
    pub pinch_threshold: f32,
    /// Index tip depth below which the finger counts as pushed forward
    pub drag_depth_threshold: f32,
    /// World units spanned by the full screen width
    pub world_range_x: f32,
    /// World units spanned by the full screen height
    pub world_range_y: f32,
    /// Weight of the new sample when smoothing the world cursor
    pub cursor_smoothing: f32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            openness_ratio_min: 1.5,
            openness_ratio_max: 3.0,
            heart_threshold: 0.06,
            pinch_threshold: 0.04,
            drag_depth_threshold: -0.05,
            world_range_x: 12.0,
            world_range_y: 10.0,
            cursor_smoothing: 0.4,
        }
    }
}

/// Hover resolution and dwell timing
///
/// The catalog band values are shared with the renderer, which lays the
/// catalog slots out over the same vertical span.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionConfig {
    /// Index tip x below which the finger is over the catalog
    pub catalog_band_x: f32,
    /// Screen y where the first catalog slot starts
    pub catalog_top: f32,
    /// Screen height covered by all catalog slots
    pub catalog_height: f32,
    /// Dwell needed to pick up a catalog item
    pub slot_dwell_ms: u64,
    /// Dwell needed to place the held item on the tree
    pub tree_dwell_ms: u64,
    /// Half the tree height at scale 1.0
    pub tree_half_height: f32,
    /// Tree radius at its base at scale 1.0
    pub tree_base_radius: f32,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            catalog_band_x: 0.2,
            catalog_top: 0.1,
            catalog_height: 0.8,
            slot_dwell_ms: 600,
            tree_dwell_ms: 1200,
            tree_half_height: 2.5,
            tree_base_radius: 2.8,
        }
    }
}

impl InteractionConfig {
    pub fn slot_dwell(&self) -> Duration {
        Duration::from_millis(self.slot_dwell_ms)
    }

    pub fn tree_dwell(&self) -> Duration {
        Duration::from_millis(self.tree_dwell_ms)
    }
}

/// Tree scale bounds and smoothing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaleConfig {
    pub min: f32,
    pub max: f32,
    /// Scale at startup and after a reset
    pub initial: f32,
    /// Weight of the target when easing toward it each frame
    pub smoothing: f32,
    /// Lower edge of the centered box the palm must be in to resize
    pub dead_zone_min: f32,
    /// Upper edge of that box
    pub dead_zone_max: f32,
}

impl Default for ScaleConfig {
    fn default() -> Self {
        Self {
            min: 0.8,
            max: 2.8,
            initial: 1.0,
            smoothing: 0.1,
            dead_zone_min: 0.3,
            dead_zone_max: 0.7,
        }
    }
}

/// Complete pipeline configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlowConfig {
    pub gesture: GestureConfig,
    pub interaction: InteractionConfig,
    pub scale: ScaleConfig,
}

impl GlowConfig {
    /// Default config file location (`<config dir>/glow-tree/config.toml`)
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "glow-tree").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Load and validate a config file
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| GlowError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config: GlowConfig = toml::from_str(&text).map_err(|source| GlowError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load from an explicit path, else the default path if it exists, else built-in defaults
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        match Self::default_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => {
                debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Render as TOML, e.g. to seed a config file
    pub fn to_toml(&self) -> String {
        // Plain structs of numbers always serialize
        toml::to_string_pretty(self).unwrap_or_default()
    }

    /// Reject values the pipeline cannot work with
    pub fn validate(&self) -> Result<()> {
        let g = &self.gesture;
        if g.openness_ratio_max <= g.openness_ratio_min {
            return Err(GlowError::InvalidConfig(
                "gesture.openness_ratio_max must exceed openness_ratio_min".into(),
            ));
        }
        if !(0.0..=1.0).contains(&g.cursor_smoothing) {
            return Err(GlowError::InvalidConfig(
                "gesture.cursor_smoothing must be within [0, 1]".into(),
            ));
        }

        let i = &self.interaction;
        if i.slot_dwell_ms == 0 || i.tree_dwell_ms == 0 {
            return Err(GlowError::InvalidConfig(
                "interaction dwell thresholds must be positive".into(),
            ));
        }
        if i.catalog_height <= 0.0 {
            return Err(GlowError::InvalidConfig(
                "interaction.catalog_height must be positive".into(),
            ));
        }

        let s = &self.scale;
        if s.min <= 0.0 || s.max < s.min {
            return Err(GlowError::InvalidConfig(format!(
                "scale bounds are invalid: min {} max {}",
                s.min, s.max
            )));
        }
        if !(s.min..=s.max).contains(&s.initial) {
            return Err(GlowError::InvalidConfig(format!(
                "scale.initial {} is outside [{}, {}]",
                s.initial, s.min, s.max
            )));
        }
        if !(0.0..=1.0).contains(&s.smoothing) {
            return Err(GlowError::InvalidConfig(
                "scale.smoothing must be within [0, 1]".into(),
            ));
        }
        Ok(())
    }
}
