use crate::{
    foundation::core::FrameIndex,
    foundation::error::{WalkaError, WalkaResult},
    foundation::math::ease_toward,
};

/// Fraction of the remaining speed change applied per frame.
pub const SPEED_EASING: f64 = 0.08;
/// Largest accepted speed target.
pub const MAX_TARGET_SPEED: f64 = 4.0;

/// Playback state toggled by the host.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Playback {
    /// No stepping and no drawing; all state is retained.
    Stopped,
    /// Frames advance normally.
    #[default]
    Playing,
}

impl Playback {
    /// The other state.
    pub fn toggled(self) -> Self {
        match self {
            Self::Stopped => Self::Playing,
            Self::Playing => Self::Stopped,
        }
    }
}

/// Decision for one animation frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FramePlan {
    /// Frame being planned.
    pub frame: FrameIndex,
    /// Simulation steps to run this frame.
    pub steps: u32,
    /// Whether the frame is drawn at all. Throttled frames are skipped entirely.
    pub draw: bool,
}

/// Decides how many walk steps each animation frame runs.
///
/// The speed multiplier eases toward a host-set target. At `>= 1` a frame runs
/// `floor(speed)` steps; below 1 only every `floor(1 / speed)`-th frame runs a single step and
/// every other frame is skipped without drawing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationClock {
    speed: f64,
    target_speed: f64,
    frame: FrameIndex,
}

impl SimulationClock {
    /// Clock whose multiplier starts at `speed` and aims for the same value.
    pub fn new(speed: f64) -> WalkaResult<Self> {
        validate_target_speed(speed)?;
        Ok(Self {
            speed,
            target_speed: speed,
            frame: FrameIndex(0),
        })
    }

    /// Current smoothed multiplier.
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Value the multiplier is easing toward.
    pub fn target_speed(&self) -> f64 {
        self.target_speed
    }

    /// Index of the next frame to plan.
    pub fn frame(&self) -> FrameIndex {
        self.frame
    }

    /// Set the speed target; out-of-range values are rejected and the old target kept.
    pub fn set_target_speed(&mut self, target: f64) -> WalkaResult<()> {
        validate_target_speed(target)?;
        self.target_speed = target;
        Ok(())
    }

    /// Ease the multiplier one frame toward the target and plan that frame.
    pub fn next_frame(&mut self) -> FramePlan {
        self.speed = ease_toward(self.speed, self.target_speed, SPEED_EASING);
        let frame = self.frame;
        self.frame = frame.next();

        let steps = steps_for_frame(self.speed, frame);
        FramePlan {
            frame,
            steps,
            draw: steps > 0,
        }
    }
}

/// Step count for one frame at multiplier `speed`.
pub fn steps_for_frame(speed: f64, frame: FrameIndex) -> u32 {
    if !speed.is_finite() || speed <= 0.0 {
        return 0;
    }
    if speed >= 1.0 {
        return speed.floor() as u32;
    }
    let every = (1.0 / speed).floor() as u64;
    if every == 0 || frame.0 % every == 0 {
        1
    } else {
        0
    }
}

pub(crate) fn validate_target_speed(target: f64) -> WalkaResult<()> {
    if !target.is_finite() || !(0.0..=MAX_TARGET_SPEED).contains(&target) {
        return Err(WalkaError::invalid_configuration(format!(
            "target_speed must be within [0, {MAX_TARGET_SPEED}], got {target}"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../tests/unit/clock.rs"]
mod tests;
