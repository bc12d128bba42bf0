use super::*;

#[test]
fn over_partial_alpha_keeps_the_rest_of_dst() {
    let dst = [0, 0, 200, 255];
    let src = [100, 0, 0, 128];
    assert_eq!(over(dst, src), [100, 0, 100, 255]);
}

#[test]
fn over_src_alpha_0_is_noop() {
    let dst = [10, 20, 30, 40];
    let src = [255, 255, 255, 0];
    assert_eq!(over(dst, src), dst);
}

#[test]
fn over_src_opaque_replaces_dst() {
    let dst = [0, 0, 0, 255];
    let src = [255, 0, 0, 255];
    assert_eq!(over(dst, src), src);
}

#[test]
fn over_dst_transparent_returns_scaled_src() {
    let dst = [0, 0, 0, 0];
    let src = [100, 110, 120, 200];
    assert_eq!(over(dst, src), src);
}

#[test]
fn faint_fill_pulls_bright_pixels_toward_color() {
    let mut buf = vec![255u8, 255, 255, 255, 11, 15, 26, 255];
    fill_over_in_place(&mut buf, [1, 1, 2, 20]).unwrap();
    assert!(buf[0] < 255 && buf[0] > 200);
    assert_eq!(buf[3], 255);
    // A pixel already at the fill color's hue stays opaque and close to it.
    assert_eq!(buf[7], 255);
    assert!(buf[4] <= 11);
}

#[test]
fn default_fade_overlay_leaves_background_unchanged() {
    let mut buf = vec![11u8, 15, 26, 255];
    for _ in 0..50 {
        fill_over_in_place(&mut buf, [1, 1, 2, 20]).unwrap();
    }
    assert_eq!(buf, [11, 15, 26, 255]);
}

#[test]
fn transparent_layer_pixels_leave_dst_alone() {
    let mut dst = vec![5u8, 6, 7, 255, 5, 6, 7, 255];
    let layer = [0u8, 0, 0, 0, 56, 189, 248, 255];
    over_in_place(&mut dst, &layer).unwrap();
    assert_eq!(dst, [5, 6, 7, 255, 56, 189, 248, 255]);
}

#[test]
fn over_in_place_rejects_mismatched_lengths() {
    let mut dst = vec![0u8; 8];
    assert!(over_in_place(&mut dst, &[0u8; 4]).is_err());
    assert!(fill_over_in_place(&mut [0u8; 3], [0, 0, 0, 0]).is_err());
}

#[test]
fn unpremultiply_inverts_premultiply() {
    assert_eq!(unpremultiply([0, 0, 0, 0]), [0, 0, 0, 0]);
    assert_eq!(unpremultiply([10, 20, 30, 255]), [10, 20, 30, 255]);
    assert_eq!(unpremultiply([64, 32, 0, 128]), [128, 64, 0, 128]);
}
