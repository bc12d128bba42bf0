use super::*;
use crate::foundation::core::{Canvas, Rgba8Premul};

#[test]
fn rejects_bad_stroke_width() {
    assert!(SegmentRasterizer::new(0.0).is_err());
    assert!(SegmentRasterizer::new(f64::INFINITY).is_err());
    assert_eq!(SegmentRasterizer::new(2.0).unwrap().stroke_width(), 2.0);
}

#[test]
fn empty_batch_leaves_surface_untouched() {
    let bg = Rgba8Premul::from_straight_rgba(11, 15, 26, 255);
    let mut s = Surface::filled(Canvas::new(8, 8).unwrap(), bg).unwrap();
    let before = s.data().to_vec();
    SegmentRasterizer::new(2.0).unwrap().draw(&mut s, &[]).unwrap();
    assert_eq!(s.data(), before.as_slice());
}

#[test]
fn horizontal_segment_colors_pixels_on_its_path_only() {
    let bg = Rgba8Premul::from_straight_rgba(0, 0, 0, 255);
    let mut s = Surface::filled(Canvas::new(32, 32).unwrap(), bg).unwrap();
    let seg = Segment {
        from: Point::new(4.0, 16.0),
        to: Point::new(28.0, 16.0),
        color: Rgb8::new(255, 255, 255),
    };
    SegmentRasterizer::new(4.0).unwrap().draw(&mut s, &[seg]).unwrap();

    let on_path = s.pixel(16, 16).unwrap();
    assert!(on_path[0] > 200, "expected a bright pixel, got {on_path:?}");
    assert_eq!(on_path[3], 255);

    let far = s.pixel(16, 2).unwrap();
    assert_eq!(far, bg.to_array());
}
