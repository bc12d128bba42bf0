use crate::{
    foundation::core::{Canvas, Point, Rgb8, Rgba8Premul},
    foundation::error::WalkaResult,
    render::{
        color::{ColorPolicy, Palette},
        frame::Frame,
        raster::{Segment, SegmentRasterizer},
        surface::Surface,
    },
};

/// Default background, `#0b0f1a`.
pub const DEFAULT_BACKGROUND: Rgb8 = Rgb8::new(11, 15, 26);
/// Default opacity of the per-frame fade overlay.
pub const DEFAULT_FADE_ALPHA: u8 = 20;
/// Default stroke width in pixels.
pub const DEFAULT_STROKE_WIDTH: f64 = 2.0;

/// Which render target receives new strokes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrailMode {
    /// Strokes go straight to the visible surface, which is dimmed every frame.
    #[default]
    Fade,
    /// Strokes accumulate in an off-screen buffer that is never dimmed.
    Persistent,
}

impl TrailMode {
    /// Draw target this mode selects for a frame.
    pub fn draw_target(self) -> DrawTarget {
        match self {
            Self::Fade => DrawTarget::VisibleSurface,
            Self::Persistent => DrawTarget::BufferedSurface,
        }
    }

    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            Self::Fade => Self::Persistent,
            Self::Persistent => Self::Fade,
        }
    }
}

/// Surface a frame's segments are committed to, chosen once per frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawTarget {
    /// The on-screen surface.
    VisibleSurface,
    /// The persistent off-screen buffer.
    BufferedSurface,
}

/// Fixed visual parameters of the trail.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrailStyle {
    /// Base background color.
    pub background: Rgb8,
    /// Opacity of the fade overlay painted each frame in [`TrailMode::Fade`].
    pub fade_alpha: u8,
    /// Stroke width in pixels.
    pub stroke_width: f64,
}

impl Default for TrailStyle {
    fn default() -> Self {
        Self {
            background: DEFAULT_BACKGROUND,
            fade_alpha: DEFAULT_FADE_ALPHA,
            stroke_width: DEFAULT_STROKE_WIDTH,
        }
    }
}

/// Owns the visible surface and the persistent buffer and draws the trail into them.
///
/// A frame is `begin_frame`, any number of `draw_segment`/`draw_step` calls, then
/// `composite_to_screen`. Segments are batched and rasterized together when the frame is
/// composited. A segment drawn while no frame is open is committed and shown immediately,
/// without the per-frame fade.
#[derive(Debug)]
pub struct TrailRenderer {
    mode: TrailMode,
    style: TrailStyle,
    palette: Palette,
    rasterizer: SegmentRasterizer,
    visible: Surface,
    buffer: Surface,
    target: DrawTarget,
    pending: Vec<Segment>,
    frame_open: bool,
    segments_drawn: u64,
}

impl TrailRenderer {
    /// Renderer with a background-filled visible surface and an empty buffer.
    pub fn new(
        canvas: Canvas,
        mode: TrailMode,
        style: TrailStyle,
        policy: ColorPolicy,
        fixed_color: Rgb8,
    ) -> WalkaResult<Self> {
        let rasterizer = SegmentRasterizer::new(style.stroke_width)?;
        Ok(Self {
            mode,
            style,
            palette: Palette::new(policy, fixed_color),
            rasterizer,
            visible: Surface::filled(canvas, style.background.opaque())?,
            buffer: Surface::new(canvas)?,
            target: mode.draw_target(),
            pending: Vec::new(),
            frame_open: false,
            segments_drawn: 0,
        })
    }

    /// Active trail mode.
    pub fn mode(&self) -> TrailMode {
        self.mode
    }

    /// Active color policy.
    pub fn color_policy(&self) -> ColorPolicy {
        self.palette.policy()
    }

    /// Palette, including the cycling hue counter.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Trail style.
    pub fn style(&self) -> TrailStyle {
        self.style
    }

    /// Current canvas size of both surfaces.
    pub fn canvas(&self) -> Canvas {
        self.visible.canvas()
    }

    /// The on-screen surface.
    pub fn visible(&self) -> &Surface {
        &self.visible
    }

    /// The persistent off-screen buffer.
    pub fn buffer(&self) -> &Surface {
        &self.buffer
    }

    /// Segments committed since creation.
    pub fn segments_drawn(&self) -> u64 {
        self.segments_drawn
    }

    /// Segments queued for the current frame.
    pub fn pending_segments(&self) -> usize {
        self.pending.len()
    }

    /// Whether `begin_frame` was called without a matching `composite_to_screen`.
    pub fn is_frame_open(&self) -> bool {
        self.frame_open
    }

    /// Start a frame: dim the visible surface (fade) or clear it to the background (persistent).
    pub fn begin_frame(&mut self) -> WalkaResult<()> {
        self.flush()?;
        self.target = self.mode.draw_target();
        match self.mode {
            TrailMode::Fade => {
                let s = self.style;
                let overlay = Rgba8Premul::from_straight_rgba(
                    s.background.r,
                    s.background.g,
                    s.background.b,
                    s.fade_alpha,
                );
                self.visible.overlay(overlay)?;
            }
            TrailMode::Persistent => self.visible.fill(self.style.background.opaque()),
        }
        self.frame_open = true;
        Ok(())
    }

    /// Queue one segment for this frame's draw target, or draw it right away when no frame
    /// is open.
    pub fn draw_segment(&mut self, from: Point, to: Point, color: Rgb8) -> WalkaResult<()> {
        self.pending.push(Segment { from, to, color });
        if self.frame_open {
            return Ok(());
        }
        self.composite_to_screen()
    }

    /// Draw one segment colored by the active policy for `heading`.
    pub fn draw_step(&mut self, from: Point, to: Point, heading: f64) -> WalkaResult<()> {
        let color = self.palette.next_color(heading);
        self.draw_segment(from, to, color)
    }

    /// Commit queued segments and, in persistent mode, show the buffer on the visible surface.
    pub fn composite_to_screen(&mut self) -> WalkaResult<()> {
        self.frame_open = false;
        self.flush()?;
        if self.mode == TrailMode::Persistent {
            self.visible.fill(self.style.background.opaque());
            self.visible.composite_over(&self.buffer)?;
        }
        Ok(())
    }

    /// Switch trail mode. Entering persistent mode seeds the buffer with the visible image.
    pub fn set_mode(&mut self, mode: TrailMode) -> WalkaResult<()> {
        if mode == self.mode {
            return Ok(());
        }
        self.flush()?;
        if mode == TrailMode::Persistent {
            self.buffer.copy_from(&self.visible)?;
        }
        tracing::debug!(from = ?self.mode, to = ?mode, "trail mode switched");
        self.mode = mode;
        self.target = mode.draw_target();
        Ok(())
    }

    /// Switch color policy.
    pub fn set_color_policy(&mut self, policy: ColorPolicy) {
        if policy != self.palette.policy() {
            tracing::debug!(from = ?self.palette.policy(), to = ?policy, "color policy switched");
        }
        self.palette.set_policy(policy);
    }

    /// Hard-reset both surfaces: background on screen, transparent buffer.
    pub fn clear(&mut self) {
        self.pending.clear();
        self.frame_open = false;
        self.visible.fill(self.style.background.opaque());
        self.buffer.clear();
    }

    /// Resize both surfaces. The buffer keeps its pixels anchored at the origin; the visible
    /// surface restarts from the background.
    pub fn resize(&mut self, canvas: Canvas) -> WalkaResult<()> {
        self.flush()?;
        let buffer = self.buffer.resized(canvas)?;
        let visible = Surface::filled(canvas, self.style.background.opaque())?;
        self.buffer = buffer;
        self.visible = visible;
        self.frame_open = false;
        Ok(())
    }

    /// Straight-alpha copy of the visible surface.
    pub fn snapshot(&self) -> Frame {
        Frame::from_surface(&self.visible)
    }

    fn flush(&mut self) -> WalkaResult<()> {
        if self.pending.is_empty() {
            return Ok(());
        }
        let target = match self.target {
            DrawTarget::VisibleSurface => &mut self.visible,
            DrawTarget::BufferedSurface => &mut self.buffer,
        };
        self.rasterizer.draw(target, &self.pending)?;
        self.segments_drawn += self.pending.len() as u64;
        self.pending.clear();
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/trail.rs"]
mod tests;
