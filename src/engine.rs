use crate::{
    clock::{Playback, SimulationClock},
    config::{WalkConfig, validate_step_budget},
    digits::stream::DigitStream,
    foundation::core::{Canvas, Point},
    foundation::error::WalkaResult,
    render::{color::ColorPolicy, frame::Frame, trail::TrailMode, trail::TrailRenderer},
    walk::stepper::{StepOutcome, WalkState, WalkStepper},
};

/// Counters describing what one [`WalkEngine::tick`] call did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Frames the clock advanced.
    pub frames_advanced: u64,
    /// Frames that were drawn (not skipped by throttling).
    pub frames_drawn: u64,
    /// Walk steps executed, including idle steps over an empty stream.
    pub steps: u64,
    /// Segments queued for drawing.
    pub segments_drawn: u64,
    /// Step-counter soft resets that happened.
    pub soft_resets: u64,
}

/// The walk simulation and its renderer, driven one frame at a time by the host.
///
/// The engine defines no loop of its own: the host calls [`WalkEngine::tick`] from its
/// render loop and applies control changes (new stream, mode switches, resize) between
/// ticks.
#[derive(Debug)]
pub struct WalkEngine {
    config: WalkConfig,
    stream: DigitStream,
    state: WalkState,
    stepper: WalkStepper,
    renderer: TrailRenderer,
    clock: SimulationClock,
    playback: Playback,
}

impl WalkEngine {
    /// Build an engine from a validated configuration, centered and playing.
    pub fn new(config: WalkConfig, stream: DigitStream) -> WalkaResult<Self> {
        config.validate()?;
        let renderer = TrailRenderer::new(
            config.canvas,
            config.trail_mode,
            config.trail_style(),
            config.color_policy,
            config.fixed_color,
        )?;
        Ok(Self {
            state: WalkState::new(config.canvas, config.step_budget),
            stepper: WalkStepper::new(config.step_length)?,
            clock: SimulationClock::new(config.target_speed)?,
            playback: Playback::Playing,
            renderer,
            stream,
            config,
        })
    }

    /// Current configuration, reflecting every accepted change.
    pub fn config(&self) -> &WalkConfig {
        &self.config
    }

    /// Walk state.
    pub fn state(&self) -> &WalkState {
        &self.state
    }

    /// Active digit stream.
    pub fn stream(&self) -> &DigitStream {
        &self.stream
    }

    /// Trail renderer and its surfaces.
    pub fn renderer(&self) -> &TrailRenderer {
        &self.renderer
    }

    /// Simulation clock.
    pub fn clock(&self) -> &SimulationClock {
        &self.clock
    }

    /// Current canvas size.
    pub fn canvas(&self) -> Canvas {
        self.renderer.canvas()
    }

    /// Current smoothed speed multiplier.
    pub fn speed_multiplier(&self) -> f64 {
        self.clock.speed()
    }

    /// Playback state.
    pub fn playback(&self) -> Playback {
        self.playback
    }

    /// Resume stepping and drawing.
    pub fn play(&mut self) {
        self.playback = Playback::Playing;
    }

    /// Halt stepping and drawing; all state is kept.
    pub fn stop(&mut self) {
        self.playback = Playback::Stopped;
    }

    /// Flip between playing and stopped.
    pub fn toggle_playback(&mut self) -> Playback {
        self.playback = self.playback.toggled();
        self.playback
    }

    /// Advance `delta_frames` animation frames. Does nothing while stopped.
    #[tracing::instrument(skip(self))]
    pub fn tick(&mut self, delta_frames: u64) -> WalkaResult<TickReport> {
        let mut report = TickReport::default();
        if self.playback == Playback::Stopped {
            return Ok(report);
        }

        for _ in 0..delta_frames {
            let plan = self.clock.next_frame();
            report.frames_advanced += 1;
            if !plan.draw {
                continue;
            }

            self.renderer.begin_frame()?;
            for _ in 0..plan.steps {
                let outcome = self.step()?;
                report.steps += 1;
                if let StepOutcome::Moved(rec) = outcome {
                    report.segments_drawn += u64::from(rec.segment().is_some());
                    report.soft_resets += u64::from(rec.soft_reset);
                }
            }
            self.renderer.composite_to_screen()?;
            report.frames_drawn += 1;
        }
        Ok(report)
    }

    /// Take one walk step and draw its segment into the active draw target.
    ///
    /// Inside [`WalkEngine::tick`] the segment joins the current frame's batch. Called on its
    /// own, no frame is open and the segment is drawn and shown immediately, without the
    /// fade overlay.
    pub fn step(&mut self) -> WalkaResult<StepOutcome> {
        let canvas = self.renderer.canvas();
        let outcome = self.stepper.step(&mut self.state, &self.stream, canvas);
        if let StepOutcome::Moved(rec) = outcome {
            if let Some((from, to)) = rec.segment() {
                self.renderer.draw_step(from, to, rec.heading)?;
            }
            if rec.soft_reset {
                tracing::debug!(budget = self.state.step_budget, "step budget reached, soft reset");
            }
        }
        Ok(outcome)
    }

    /// Recenter, face heading 0, rewind cursor and step counter, and clear both surfaces.
    #[tracing::instrument(skip(self))]
    pub fn hard_reset(&mut self) {
        self.state.reset(self.renderer.canvas());
        self.renderer.clear();
    }

    /// Swap in a new digit stream and hard-reset the walk.
    #[tracing::instrument(skip(self, stream), fields(digits = stream.len()))]
    pub fn replace_stream(&mut self, stream: DigitStream) {
        self.stream = stream;
        self.hard_reset();
    }

    /// Switch trail mode, carrying the visible image over when entering persistent mode.
    pub fn set_trail_mode(&mut self, mode: TrailMode) -> WalkaResult<()> {
        self.renderer.set_mode(mode)?;
        self.config.trail_mode = mode;
        Ok(())
    }

    /// Flip between fade and persistent trails.
    pub fn toggle_trail_mode(&mut self) -> WalkaResult<TrailMode> {
        let mode = self.renderer.mode().toggled();
        self.set_trail_mode(mode)?;
        Ok(mode)
    }

    /// Switch color policy for subsequent segments.
    pub fn set_color_policy(&mut self, policy: ColorPolicy) {
        self.renderer.set_color_policy(policy);
        self.config.color_policy = policy;
    }

    /// Set the speed multiplier target in `[0, 4]`.
    pub fn set_target_speed(&mut self, target: f64) -> WalkaResult<()> {
        self.clock
            .set_target_speed(target)
            .inspect_err(|err| tracing::warn!(%err, "rejected speed target"))?;
        self.config.target_speed = target;
        Ok(())
    }

    /// Set the step budget. A counter already at or past the new budget soft-resets.
    pub fn set_step_budget(&mut self, budget: u64) -> WalkaResult<()> {
        validate_step_budget(budget).inspect_err(|err| tracing::warn!(%err, "rejected step budget"))?;
        self.state.step_budget = budget;
        if self.state.steps_taken >= budget {
            self.state.steps_taken = 0;
        }
        self.config.step_budget = budget;
        Ok(())
    }

    /// Set the distance covered per step.
    pub fn set_step_length(&mut self, step_length: f64) -> WalkaResult<()> {
        self.stepper
            .set_step_length(step_length)
            .inspect_err(|err| tracing::warn!(%err, "rejected step length"))?;
        self.config.step_length = step_length;
        Ok(())
    }

    /// Resize the render surfaces, keeping the persistent trail anchored at the origin.
    ///
    /// On failure the previous surfaces stay in place.
    #[tracing::instrument(skip(self))]
    pub fn resize(&mut self, canvas: Canvas) -> WalkaResult<()> {
        self.renderer.resize(canvas)?;
        let p = self.state.position;
        self.state.position = Point::new(
            p.x.clamp(0.0, f64::from(canvas.width)),
            p.y.clamp(0.0, f64::from(canvas.height)),
        );
        self.config.canvas = canvas;
        Ok(())
    }

    /// Straight-alpha copy of the visible frame, for export.
    pub fn snapshot(&self) -> Frame {
        self.renderer.snapshot()
    }
}

#[cfg(test)]
#[path = "../tests/unit/engine.rs"]
mod tests;
