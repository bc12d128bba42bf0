//! Walka animates a 2D random walk whose turns are driven by a stream of decimal digits
//! (pi, e, the square root of a random integer, or any text file).
//!
//! # Pipeline overview
//!
//! 1. **Clock**: the speed multiplier eases toward its target and decides how many steps the
//!    current frame runs (sub-1x speeds skip whole frames).
//! 2. **Step**: each step consumes one digit, eases the heading toward `digit * 36` degrees
//!    along the shorter arc, and moves a fixed distance with screen-edge wrap.
//! 3. **Draw**: non-wrapping steps become segments, colored by the [`ColorPolicy`] and
//!    committed either to the fading visible surface or to the persistent buffer.
//! 4. **Export** (optional): [`WalkEngine::snapshot`] flattens the visible frame for PNG output.
//!
//! Design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Single owner**: all mutable state lives in one [`WalkEngine`]; the host drives it with
//!   [`WalkEngine::tick`] and applies control changes between ticks.
//! - **No IO in the core**: digit acquisition and image export sit at the edges
//!   ([`DigitSource`], [`Frame::write_png`]).
//! - **Premultiplied RGBA8** surfaces, rasterized on the CPU.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod clock;
mod config;
mod digits;
mod engine;
mod foundation;
mod render;
mod walk;

pub use clock::{FramePlan, MAX_TARGET_SPEED, Playback, SPEED_EASING, SimulationClock, steps_for_frame};
pub use config::{DEFAULT_STEP_BUDGET, WalkConfig};
pub use digits::constants::Constant;
pub use digits::source::{DigitSource, LUCKY_MAX, LoadedDigits, lucky_sqrt_text};
pub use digits::stream::DigitStream;
pub use engine::{TickReport, WalkEngine};
pub use foundation::core::{Canvas, FrameIndex, Point, Rgb8, Rgba8Premul, Vec2};
pub use foundation::error::{WalkaError, WalkaResult};
pub use foundation::math::{ease_toward, normalize_angle_delta};
pub use render::color::{
    ColorContext, ColorPolicy, DEFAULT_FIXED_COLOR, HUE_LIGHTNESS, HUE_SATURATION, HUE_STEP_DEG,
    Palette, heading_to_hue,
};
pub use render::composite::{PremulRgba8, over, over_in_place};
pub use render::frame::{Frame, ensure_parent_dir};
pub use render::raster::{Segment, SegmentRasterizer};
pub use render::surface::Surface;
pub use render::trail::{
    DEFAULT_BACKGROUND, DEFAULT_FADE_ALPHA, DEFAULT_STROKE_WIDTH, DrawTarget, TrailMode,
    TrailRenderer, TrailStyle,
};
pub use walk::heading::{DEGREES_PER_DIGIT, HEADING_EASING, HeadingSmoother, HeadingUpdate};
pub use walk::stepper::{StepOutcome, StepRecord, WalkState, WalkStepper, wrap_to_canvas};
