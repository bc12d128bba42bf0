use crate::{
    digits::stream::DigitStream,
    foundation::core::{Canvas, Point, Vec2},
    foundation::error::{WalkaError, WalkaResult},
    walk::heading::HeadingSmoother,
};

/// Mutable walk state owned by the engine.
///
/// Only the stepper and the reset routine write to it.
#[derive(Clone, Debug, PartialEq)]
pub struct WalkState {
    /// Current point in canvas coordinates.
    pub position: Point,
    /// Current heading in radians; unbounded, logically mod 2*PI.
    pub heading: f64,
    /// Index of the next digit to consume.
    pub digit_cursor: usize,
    /// Steps since the last reset of the step counter.
    pub steps_taken: u64,
    /// Steps after which the counter soft-resets.
    pub step_budget: u64,
}

impl WalkState {
    /// Fresh state centered on `canvas`.
    pub fn new(canvas: Canvas, step_budget: u64) -> Self {
        Self {
            position: canvas.center(),
            heading: 0.0,
            digit_cursor: 0,
            steps_taken: 0,
            step_budget,
        }
    }

    /// Hard reset: recenter, face heading 0, rewind the cursor and the step counter.
    pub fn reset(&mut self, canvas: Canvas) {
        self.position = canvas.center();
        self.heading = 0.0;
        self.digit_cursor = 0;
        self.steps_taken = 0;
    }
}

/// What a single step did.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StepOutcome {
    /// The stream is empty; nothing changed.
    Idle,
    /// The walker advanced.
    Moved(StepRecord),
}

impl StepOutcome {
    /// Segment to draw for this step, if any.
    pub fn segment(&self) -> Option<(Point, Point)> {
        match self {
            Self::Idle => None,
            Self::Moved(r) => r.segment(),
        }
    }
}

/// Details of one committed step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepRecord {
    /// Digit consumed by this step.
    pub digit: u8,
    /// Position before the step.
    pub from: Point,
    /// Committed position after wrap handling.
    pub to: Point,
    /// Smoothed heading used for the move.
    pub heading: f64,
    /// At least one axis crossed the canvas edge and was snapped to the opposite side.
    pub wrapped: bool,
    /// The step counter reached the budget and was cleared.
    pub soft_reset: bool,
}

impl StepRecord {
    /// Visible segment, suppressed on wrap frames so no line crosses the canvas.
    pub fn segment(&self) -> Option<(Point, Point)> {
        (!self.wrapped).then_some((self.from, self.to))
    }
}

/// Converts one digit per call into a heading change and a fixed-length move.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WalkStepper {
    step_length: f64,
    smoother: HeadingSmoother,
}

impl WalkStepper {
    /// Default distance covered per step, in canvas units.
    pub const DEFAULT_STEP_LENGTH: f64 = 2.0;

    /// Build a stepper; `step_length` must be finite and positive.
    pub fn new(step_length: f64) -> WalkaResult<Self> {
        validate_step_length(step_length)?;
        Ok(Self {
            step_length,
            smoother: HeadingSmoother::default(),
        })
    }

    /// Distance per step.
    pub fn step_length(&self) -> f64 {
        self.step_length
    }

    /// Replace the step length, keeping the old one if `step_length` is invalid.
    pub fn set_step_length(&mut self, step_length: f64) -> WalkaResult<()> {
        validate_step_length(step_length)?;
        self.step_length = step_length;
        Ok(())
    }

    /// Take one step. An empty stream leaves `state` untouched.
    pub fn step(&self, state: &mut WalkState, stream: &DigitStream, canvas: Canvas) -> StepOutcome {
        let Some(digit) = stream.get(state.digit_cursor) else {
            return StepOutcome::Idle;
        };

        let update = self.smoother.advance(state.heading, digit);
        let heading = update.heading;
        let delta = Vec2::new(heading.cos(), heading.sin()) * self.step_length;

        let from = state.position;
        let (to, wrapped) = wrap_to_canvas(from + delta, canvas);

        state.heading = heading;
        state.position = to;
        state.digit_cursor = stream.advance(state.digit_cursor);
        state.steps_taken += 1;

        let soft_reset = state.steps_taken >= state.step_budget;
        if soft_reset {
            state.steps_taken = 0;
        }

        StepOutcome::Moved(StepRecord {
            digit,
            from,
            to,
            heading,
            wrapped,
            soft_reset,
        })
    }
}

/// Snap each axis independently: leaving past one edge lands exactly on the opposite edge.
pub fn wrap_to_canvas(p: Point, canvas: Canvas) -> (Point, bool) {
    let (x, wx) = wrap_axis(p.x, f64::from(canvas.width));
    let (y, wy) = wrap_axis(p.y, f64::from(canvas.height));
    (Point::new(x, y), wx || wy)
}

fn wrap_axis(v: f64, dimension: f64) -> (f64, bool) {
    if v < 0.0 {
        (dimension, true)
    } else if v > dimension {
        (0.0, true)
    } else {
        (v, false)
    }
}

pub(crate) fn validate_step_length(step_length: f64) -> WalkaResult<()> {
    if !step_length.is_finite() || step_length <= 0.0 {
        return Err(WalkaError::invalid_configuration(
            "step_length must be finite and > 0",
        ));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/walk/stepper.rs"]
mod tests;
