use super::*;

#[test]
fn canvas_rejects_empty_and_oversized() {
    assert!(Canvas::new(0, 10).is_err());
    assert!(Canvas::new(10, 0).is_err());
    assert!(Canvas::new(70_000, 10).is_err());
    assert!(Canvas::new(64, 48).is_ok());
}

#[test]
fn canvas_center_is_half_extent() {
    let c = Canvas::new(100, 50).unwrap();
    assert_eq!(c.center(), Point::new(50.0, 25.0));
    assert_eq!(c.area(), 5000);
}

#[test]
fn hsl_primaries_and_greys() {
    assert_eq!(Rgb8::from_hsl(0.0, 1.0, 0.5), Rgb8::new(255, 0, 0));
    assert_eq!(Rgb8::from_hsl(120.0, 1.0, 0.5), Rgb8::new(0, 255, 0));
    assert_eq!(Rgb8::from_hsl(240.0, 1.0, 0.5), Rgb8::new(0, 0, 255));
    assert_eq!(Rgb8::from_hsl(360.0, 1.0, 0.5), Rgb8::new(255, 0, 0));
    assert_eq!(Rgb8::from_hsl(77.0, 0.0, 1.0), Rgb8::new(255, 255, 255));
}

#[test]
fn hsl_matches_css_reference() {
    // hsl(200, 70%, 60%) == rgb(82, 177, 224)
    assert_eq!(Rgb8::from_hsl(200.0, 0.7, 0.6), Rgb8::new(82, 177, 224));
}

#[test]
fn premultiply_scales_channels() {
    let p = Rgba8Premul::from_straight_rgba(255, 128, 0, 128);
    assert_eq!(p.a, 128);
    assert_eq!(p.r, 128);
    assert_eq!(p.g, 64);
    assert_eq!(p.b, 0);
    assert_eq!(Rgb8::new(1, 2, 3).opaque().to_array(), [1, 2, 3, 255]);
}
