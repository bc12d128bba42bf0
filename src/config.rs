use std::path::Path;

use anyhow::Context as _;

use crate::{
    clock::validate_target_speed,
    foundation::core::{Canvas, Rgb8},
    foundation::error::{WalkaError, WalkaResult},
    render::{
        color::{ColorPolicy, DEFAULT_FIXED_COLOR},
        raster::SegmentRasterizer,
        trail::{
            DEFAULT_BACKGROUND, DEFAULT_FADE_ALPHA, DEFAULT_STROKE_WIDTH, TrailMode, TrailStyle,
        },
    },
    walk::stepper::{WalkStepper, validate_step_length},
};

/// Default number of steps before the step counter soft-resets.
pub const DEFAULT_STEP_BUDGET: u64 = 10_000;

/// Everything the engine can be configured with.
///
/// Missing JSON fields take their defaults.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct WalkConfig {
    /// Steps before the step counter soft-resets; must be > 0.
    pub step_budget: u64,
    /// Speed multiplier target in `[0, 4]`.
    pub target_speed: f64,
    /// Initial trail mode.
    pub trail_mode: TrailMode,
    /// Initial color policy.
    pub color_policy: ColorPolicy,
    /// Distance per step in canvas units; must be > 0.
    pub step_length: f64,
    /// Initial canvas size.
    pub canvas: Canvas,
    /// Base background color.
    pub background: Rgb8,
    /// Stroke color for [`ColorPolicy::Fixed`].
    pub fixed_color: Rgb8,
    /// Opacity of the fade overlay.
    pub fade_alpha: u8,
    /// Stroke width in pixels; must be > 0.
    pub stroke_width: f64,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            step_budget: DEFAULT_STEP_BUDGET,
            target_speed: 1.0,
            trail_mode: TrailMode::default(),
            color_policy: ColorPolicy::default(),
            step_length: WalkStepper::DEFAULT_STEP_LENGTH,
            canvas: Canvas::default(),
            background: DEFAULT_BACKGROUND,
            fixed_color: DEFAULT_FIXED_COLOR,
            fade_alpha: DEFAULT_FADE_ALPHA,
            stroke_width: DEFAULT_STROKE_WIDTH,
        }
    }
}

impl WalkConfig {
    /// Parse a JSON document. Unknown fields are ignored, missing ones defaulted.
    pub fn from_json_str(json: &str) -> WalkaResult<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| WalkaError::serde(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a JSON file.
    pub fn from_json_path(path: &Path) -> WalkaResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("open config '{}'", path.display()))?;
        Self::from_json_str(&text)
    }

    /// Trail style derived from this configuration.
    pub fn trail_style(&self) -> TrailStyle {
        TrailStyle {
            background: self.background,
            fade_alpha: self.fade_alpha,
            stroke_width: self.stroke_width,
        }
    }

    /// Check every constrained field.
    pub fn validate(&self) -> WalkaResult<()> {
        validate_step_budget(self.step_budget)?;
        validate_step_length(self.step_length)?;
        validate_target_speed(self.target_speed)?;
        SegmentRasterizer::new(self.stroke_width)?;
        self.canvas.validate()
    }
}

pub(crate) fn validate_step_budget(step_budget: u64) -> WalkaResult<()> {
    if step_budget == 0 {
        return Err(WalkaError::invalid_configuration("step_budget must be > 0"));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
