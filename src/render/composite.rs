//! Premultiplied source-over for the two blends the trail needs.
//!
//! The fade overlay is a solid background color at a low alpha laid over the whole visible
//! surface each frame ([`fill_over_in_place`]). Older strokes converge on the background a
//! few percent per frame while background pixels stay put.
//!
//! Stroke batches are rasterized into a transparent layer and laid over their target with
//! [`over_in_place`]. The persistent buffer is shown the same way. Most of a stroke layer is
//! empty, so fully transparent source pixels are skipped.

use crate::foundation::{
    error::{WalkaError, WalkaResult},
    math::mul_div255_u8,
};

/// One premultiplied RGBA8 pixel.
pub type PremulRgba8 = [u8; 4];

/// `src` over `dst`: every channel becomes `src + dst * (1 - src.a)`.
pub fn over(dst: PremulRgba8, src: PremulRgba8) -> PremulRgba8 {
    match src[3] {
        0 => dst,
        255 => src,
        sa => {
            let keep = 255 - u16::from(sa);
            std::array::from_fn(|i| src[i].saturating_add(mul_div255_u8(u16::from(dst[i]), keep)))
        }
    }
}

/// Lay an equally sized premultiplied layer over `dst`.
pub fn over_in_place(dst: &mut [u8], layer: &[u8]) -> WalkaResult<()> {
    if dst.len() != layer.len() || !dst.len().is_multiple_of(4) {
        return Err(WalkaError::surface_unavailable(
            "over_in_place expects equal-length rgba8 buffers",
        ));
    }
    for (d, s) in dst.chunks_exact_mut(4).zip(layer.chunks_exact(4)) {
        if s[3] == 0 {
            continue;
        }
        let out = over([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]]);
        d.copy_from_slice(&out);
    }
    Ok(())
}

/// Lay one premultiplied color over every pixel of `dst`.
pub fn fill_over_in_place(dst: &mut [u8], color: PremulRgba8) -> WalkaResult<()> {
    if !dst.len().is_multiple_of(4) {
        return Err(WalkaError::surface_unavailable(
            "fill_over_in_place expects an rgba8 buffer",
        ));
    }
    for d in dst.chunks_exact_mut(4) {
        let out = over([d[0], d[1], d[2], d[3]], color);
        d.copy_from_slice(&out);
    }
    Ok(())
}

/// Convert a premultiplied pixel back to straight alpha for export.
pub fn unpremultiply(px: PremulRgba8) -> [u8; 4] {
    let a = px[3];
    match a {
        0 => [0, 0, 0, 0],
        255 => px,
        _ => {
            let un = |c: u8| -> u8 {
                ((u32::from(c) * 255 + u32::from(a) / 2) / u32::from(a)).min(255) as u8
            };
            [un(px[0]), un(px[1]), un(px[2]), a]
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;
