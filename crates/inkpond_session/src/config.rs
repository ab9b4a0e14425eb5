//! Game configuration file handling
//!
//! The scoring threshold and mask resolution are empirical constants with
//! no documented derivation; they stay configurable rather than baked in.
//! `GameConfig::default()` carries the shipped values, and an optional
//! `inkpond.toml` can override any subset of fields.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::warn;

use inkpond_core::Rgba8;

/// Tunable game parameters (inkpond.toml)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GameConfig {
    /// Side length of the square masks both drawings and targets score at
    #[serde(default = "default_mask_resolution")]
    pub mask_resolution: u32,
    /// Dice score at or above which a submission is kept
    #[serde(default = "default_pass_threshold")]
    pub pass_threshold: f32,
    /// Dice score at or above which the verdict reports the top tier
    #[serde(default = "default_good_threshold")]
    pub good_threshold: f32,
    /// Progress added per frame to a submission animation
    #[serde(default = "default_submission_step")]
    pub submission_step: f32,
    /// How far a sunk crop drifts down over its fade, in pixels
    #[serde(default = "default_sunk_drift")]
    pub sunk_drift: f32,
    /// Frames the happy/sad face holds before reverting to neutral
    #[serde(default = "default_mood_frames")]
    pub mood_frames: f32,
    /// Brush stroke diameter in pixels
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f32,
    /// Eraser diameter in pixels
    #[serde(default = "default_eraser_size")]
    pub eraser_size: f32,
    /// Side length the target silhouettes are painted at before masking
    #[serde(default = "default_stencil_size")]
    pub stencil_size: u32,
    /// Rim-glow fade per frame after a rejected stroke start
    #[serde(default = "default_rim_fade")]
    pub rim_fade: f32,
    /// Swatch palette as `#rrggbb` hex strings
    #[serde(default = "default_palette")]
    pub palette: Vec<String>,
}

fn default_mask_resolution() -> u32 {
    96
}

fn default_pass_threshold() -> f32 {
    0.32
}

fn default_good_threshold() -> f32 {
    0.45
}

fn default_submission_step() -> f32 {
    0.02
}

fn default_sunk_drift() -> f32 {
    40.0
}

fn default_mood_frames() -> f32 {
    90.0
}

fn default_stroke_width() -> f32 {
    3.0
}

fn default_eraser_size() -> f32 {
    18.0
}

fn default_stencil_size() -> u32 {
    160
}

fn default_rim_fade() -> f32 {
    0.04
}

fn default_palette() -> Vec<String> {
    [
        "#111827", "#ef4444", "#10b981", "#3b82f6", "#f59e0b", "#8b5cf6", "#f5e0c8",
    ]
    .map(String::from)
    .to_vec()
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            mask_resolution: default_mask_resolution(),
            pass_threshold: default_pass_threshold(),
            good_threshold: default_good_threshold(),
            submission_step: default_submission_step(),
            sunk_drift: default_sunk_drift(),
            mood_frames: default_mood_frames(),
            stroke_width: default_stroke_width(),
            eraser_size: default_eraser_size(),
            stencil_size: default_stencil_size(),
            rim_fade: default_rim_fade(),
            palette: default_palette(),
        }
    }
}

impl GameConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Parsed palette colors; malformed entries are skipped with a warning
    pub fn palette_colors(&self) -> Vec<Rgba8> {
        self.palette
            .iter()
            .filter_map(|hex| {
                let color = Rgba8::from_hex(hex);
                if color.is_none() {
                    warn!(%hex, "ignoring malformed palette entry");
                }
                color
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_shipped_constants() {
        let cfg = GameConfig::default();
        assert_eq!(cfg.mask_resolution, 96);
        assert_eq!(cfg.pass_threshold, 0.32);
        assert_eq!(cfg.mood_frames, 90.0);
        assert_eq!(cfg.palette.len(), 7);
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let cfg: GameConfig = toml::from_str(
            r#"
            pass_threshold = 0.5
            mask_resolution = 64
            "#,
        )
        .unwrap();
        assert_eq!(cfg.pass_threshold, 0.5);
        assert_eq!(cfg.mask_resolution, 64);
        // Untouched fields keep their defaults
        assert_eq!(cfg.submission_step, 0.02);
        assert_eq!(cfg.stencil_size, 160);
    }

    #[test]
    fn config_roundtrips_through_toml() {
        let cfg = GameConfig::default();
        let text = toml::to_string(&cfg).unwrap();
        let back: GameConfig = toml::from_str(&text).unwrap();
        assert_eq!(back.pass_threshold, cfg.pass_threshold);
        assert_eq!(back.palette, cfg.palette);
    }

    #[test]
    fn malformed_palette_entries_are_skipped() {
        let cfg = GameConfig {
            palette: vec!["#10b981".into(), "not-a-color".into()],
            ..GameConfig::default()
        };
        let colors = cfg.palette_colors();
        assert_eq!(colors, vec![Rgba8::opaque(0x10, 0xb9, 0x81)]);
    }
}
