use std::f64::consts::TAU;

use crate::foundation::core::Rgb8;

/// Saturation used by the hue-based policies.
pub const HUE_SATURATION: f64 = 0.70;
/// Lightness used by the hue-based policies.
pub const HUE_LIGHTNESS: f64 = 0.60;
/// Degrees the cycling hue advances per drawn segment.
pub const HUE_STEP_DEG: f64 = 0.5;

/// Default stroke color for [`ColorPolicy::Fixed`].
pub const DEFAULT_FIXED_COLOR: Rgb8 = Rgb8::new(56, 189, 248);

/// How each trail segment is colored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorPolicy {
    /// A constant color.
    #[default]
    Fixed,
    /// Hue follows the walker's heading.
    HeadingDerived,
    /// Hue rotates steadily, independent of heading.
    CyclingHue,
}

/// Inputs a policy may look at when coloring one segment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorContext {
    /// Heading of the step being drawn, in radians.
    pub heading: f64,
    /// Current value of the cycling hue counter, in degrees.
    pub hue: f64,
    /// Color used by [`ColorPolicy::Fixed`].
    pub fixed: Rgb8,
}

impl ColorPolicy {
    /// Color for one segment. Pure: any counter advancement happens in [`Palette`].
    pub fn color_for(self, ctx: &ColorContext) -> Rgb8 {
        match self {
            Self::Fixed => ctx.fixed,
            Self::HeadingDerived => hue_color(heading_to_hue(ctx.heading)),
            Self::CyclingHue => hue_color(ctx.hue),
        }
    }
}

/// Map a heading onto `[0, 360)` degrees of hue.
pub fn heading_to_hue(heading: f64) -> f64 {
    let mut h = (heading % TAU) / TAU * 360.0;
    if h < 0.0 {
        h += 360.0;
    }
    h
}

fn hue_color(hue_deg: f64) -> Rgb8 {
    Rgb8::from_hsl(hue_deg.floor(), HUE_SATURATION, HUE_LIGHTNESS)
}

/// Color policy plus the only state any policy needs: the cycling hue counter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    policy: ColorPolicy,
    fixed: Rgb8,
    hue: f64,
}

impl Palette {
    /// Palette starting at hue 0.
    pub fn new(policy: ColorPolicy, fixed: Rgb8) -> Self {
        Self {
            policy,
            fixed,
            hue: 0.0,
        }
    }

    /// Active policy.
    pub fn policy(&self) -> ColorPolicy {
        self.policy
    }

    /// Switch policy; the hue counter keeps its value.
    pub fn set_policy(&mut self, policy: ColorPolicy) {
        self.policy = policy;
    }

    /// Current cycling hue in degrees.
    pub fn hue(&self) -> f64 {
        self.hue
    }

    /// Color the next segment, advancing the hue counter when cycling.
    pub fn next_color(&mut self, heading: f64) -> Rgb8 {
        if self.policy == ColorPolicy::CyclingHue {
            self.hue = (self.hue + HUE_STEP_DEG) % 360.0;
        }
        self.policy.color_for(&ColorContext {
            heading,
            hue: self.hue,
            fixed: self.fixed,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/color.rs"]
mod tests;
