use super::*;
use crate::render::color::DEFAULT_FIXED_COLOR;

fn renderer(mode: TrailMode) -> TrailRenderer {
    TrailRenderer::new(
        Canvas::new(48, 32).unwrap(),
        mode,
        TrailStyle::default(),
        ColorPolicy::Fixed,
        DEFAULT_FIXED_COLOR,
    )
    .unwrap()
}

fn bg() -> [u8; 4] {
    DEFAULT_BACKGROUND.opaque().to_array()
}

fn draw_line(r: &mut TrailRenderer) {
    r.begin_frame().unwrap();
    r.draw_step(Point::new(4.0, 16.0), Point::new(44.0, 16.0), 0.0).unwrap();
    r.composite_to_screen().unwrap();
}

#[test]
fn mode_selects_draw_target() {
    assert_eq!(TrailMode::Fade.draw_target(), DrawTarget::VisibleSurface);
    assert_eq!(
        TrailMode::Persistent.draw_target(),
        DrawTarget::BufferedSurface
    );
    assert_eq!(TrailMode::Fade.toggled(), TrailMode::Persistent);
}

#[test]
fn starts_with_background_and_empty_buffer() {
    let r = renderer(TrailMode::Fade);
    assert_eq!(r.visible().pixel(0, 0), Some(bg()));
    assert!(r.buffer().data().iter().all(|&b| b == 0));
}

#[test]
fn fade_mode_draws_on_visible_surface_only() {
    let mut r = renderer(TrailMode::Fade);
    draw_line(&mut r);
    assert_ne!(r.visible().pixel(24, 16), Some(bg()));
    assert!(r.buffer().data().iter().all(|&b| b == 0));
    assert_eq!(r.segments_drawn(), 1);
}

#[test]
fn fade_overlay_dims_old_strokes() {
    let mut r = renderer(TrailMode::Fade);
    draw_line(&mut r);
    let fresh = r.visible().pixel(24, 16).unwrap();

    for _ in 0..10 {
        r.begin_frame().unwrap();
        r.composite_to_screen().unwrap();
    }
    let faded = r.visible().pixel(24, 16).unwrap();
    assert!(faded[2] < fresh[2]);
    assert!(faded[2] >= bg()[2]);
}

#[test]
fn persistent_mode_draws_into_buffer_and_composites() {
    let mut r = renderer(TrailMode::Persistent);
    draw_line(&mut r);
    assert_ne!(r.buffer().pixel(24, 16).unwrap()[3], 0);
    assert_eq!(r.visible().pixel(24, 16), r.buffer().pixel(24, 16));

    // The trail survives any number of later frames unchanged.
    let before = r.visible().data().to_vec();
    for _ in 0..5 {
        r.begin_frame().unwrap();
        r.composite_to_screen().unwrap();
    }
    assert_eq!(r.visible().data(), before.as_slice());
}

#[test]
fn switching_to_persistent_preserves_visible_image() {
    let mut r = renderer(TrailMode::Fade);
    draw_line(&mut r);
    r.begin_frame().unwrap();
    r.composite_to_screen().unwrap();
    let before = r.visible().data().to_vec();

    r.set_mode(TrailMode::Persistent).unwrap();
    assert_eq!(r.buffer().data(), before.as_slice());

    r.begin_frame().unwrap();
    r.composite_to_screen().unwrap();
    assert_eq!(r.visible().data(), before.as_slice());
}

#[test]
fn switching_back_to_fade_keeps_visible_trail() {
    let mut r = renderer(TrailMode::Persistent);
    draw_line(&mut r);
    let before = r.visible().data().to_vec();
    r.set_mode(TrailMode::Fade).unwrap();
    assert_eq!(r.visible().data(), before.as_slice());
    assert_eq!(r.mode(), TrailMode::Fade);
}

#[test]
fn segment_outside_a_frame_is_drawn_at_once() {
    let mut r = renderer(TrailMode::Persistent);
    assert!(!r.is_frame_open());
    r.draw_segment(Point::new(4.0, 16.0), Point::new(44.0, 16.0), DEFAULT_FIXED_COLOR)
        .unwrap();
    assert_eq!(r.pending_segments(), 0);
    assert_eq!(r.segments_drawn(), 1);
    assert_ne!(r.buffer().pixel(24, 16), Some([0, 0, 0, 0]));
    assert_ne!(r.visible().pixel(24, 16), Some(bg()));
}

#[test]
fn segments_inside_a_frame_wait_for_composite() {
    let mut r = renderer(TrailMode::Fade);
    r.begin_frame().unwrap();
    assert!(r.is_frame_open());
    r.draw_step(Point::new(4.0, 16.0), Point::new(44.0, 16.0), 0.0).unwrap();
    assert_eq!(r.pending_segments(), 1);
    r.composite_to_screen().unwrap();
    assert!(!r.is_frame_open());
    assert_eq!(r.pending_segments(), 0);
    assert_ne!(r.visible().pixel(24, 16), Some(bg()));
}

#[test]
fn clear_resets_both_surfaces() {
    let mut r = renderer(TrailMode::Persistent);
    draw_line(&mut r);
    r.draw_segment(Point::new(1.0, 1.0), Point::new(5.0, 5.0), DEFAULT_FIXED_COLOR)
        .unwrap();
    r.clear();
    assert_eq!(r.pending_segments(), 0);
    assert!(r.visible().data().chunks_exact(4).all(|px| px == bg()));
    assert!(r.buffer().data().iter().all(|&b| b == 0));
}

#[test]
fn resize_keeps_buffer_anchored_and_clears_screen() {
    let mut r = renderer(TrailMode::Persistent);
    draw_line(&mut r);
    let marked = r.buffer().pixel(24, 16).unwrap();

    r.resize(Canvas::new(64, 20).unwrap()).unwrap();
    assert_eq!(r.canvas(), Canvas::new(64, 20).unwrap());
    assert_eq!(r.buffer().pixel(24, 16), Some(marked));
    assert_eq!(r.buffer().pixel(60, 16), Some([0, 0, 0, 0]));
    assert_eq!(r.visible().pixel(24, 16), Some(bg()));

    r.begin_frame().unwrap();
    r.composite_to_screen().unwrap();
    assert_eq!(r.visible().pixel(24, 16), Some(marked));
}

#[test]
fn snapshot_is_straight_rgba_of_visible() {
    let r = renderer(TrailMode::Fade);
    let f = r.snapshot();
    assert_eq!((f.width, f.height), (48, 32));
    assert_eq!(&f.data[0..4], &[11, 15, 26, 255]);
}
