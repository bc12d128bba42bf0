use crate::{
    foundation::core::{Canvas, Rgba8Premul},
    foundation::error::{WalkaError, WalkaResult},
    render::composite::{self, PremulRgba8},
};

/// Premultiplied RGBA8 raster surface sized to the canvas.
pub struct Surface {
    width: u16,
    height: u16,
    pixmap: vello_cpu::Pixmap,
}

impl std::fmt::Debug for Surface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Surface")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

impl Surface {
    /// Transparent surface covering `canvas`.
    pub fn new(canvas: Canvas) -> WalkaResult<Self> {
        let (width, height) = canvas.size_u16()?;
        Ok(Self {
            width,
            height,
            pixmap: vello_cpu::Pixmap::new(width, height),
        })
    }

    /// Surface covering `canvas`, filled with `color`.
    pub fn filled(canvas: Canvas, color: Rgba8Premul) -> WalkaResult<Self> {
        let mut s = Self::new(canvas)?;
        s.fill(color);
        Ok(s)
    }

    /// Dimensions as a canvas.
    pub fn canvas(&self) -> Canvas {
        Canvas {
            width: u32::from(self.width),
            height: u32::from(self.height),
        }
    }

    pub(crate) fn size_u16(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    /// Premultiplied pixel bytes, row-major.
    pub fn data(&self) -> &[u8] {
        self.pixmap.data_as_u8_slice()
    }

    pub(crate) fn data_mut(&mut self) -> &mut [u8] {
        self.pixmap.data_as_u8_slice_mut()
    }

    /// Pixel at `(x, y)`, or `None` outside the surface.
    pub fn pixel(&self, x: u32, y: u32) -> Option<PremulRgba8> {
        if x >= u32::from(self.width) || y >= u32::from(self.height) {
            return None;
        }
        let idx = (y as usize * usize::from(self.width) + x as usize) * 4;
        let px = self.data().get(idx..idx + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Overwrite every pixel with `color`.
    pub fn fill(&mut self, color: Rgba8Premul) {
        let rgba = color.to_array();
        for px in self.data_mut().chunks_exact_mut(4) {
            px.copy_from_slice(&rgba);
        }
    }

    /// Overwrite every pixel with transparent black.
    pub fn clear(&mut self) {
        self.fill(Rgba8Premul::transparent());
    }

    /// Paint `color` over the whole surface with source-over blending.
    pub fn overlay(&mut self, color: Rgba8Premul) -> WalkaResult<()> {
        composite::fill_over_in_place(self.data_mut(), color.to_array())
    }

    /// Byte-exact copy of an equally sized surface.
    pub fn copy_from(&mut self, src: &Surface) -> WalkaResult<()> {
        if self.size_u16() != src.size_u16() {
            return Err(WalkaError::surface_unavailable(
                "copy_from expects equally sized surfaces",
            ));
        }
        self.data_mut().copy_from_slice(src.data());
        Ok(())
    }

    /// Composite an equally sized surface over this one at the origin.
    pub fn composite_over(&mut self, src: &Surface) -> WalkaResult<()> {
        if self.size_u16() != src.size_u16() {
            return Err(WalkaError::surface_unavailable(
                "composite_over expects equally sized surfaces",
            ));
        }
        composite::over_in_place(self.data_mut(), src.data())
    }

    /// New surface of size `canvas` holding this surface's pixels anchored at the origin.
    ///
    /// Content past the new bounds is cropped; newly exposed area is transparent. No scaling.
    pub fn resized(&self, canvas: Canvas) -> WalkaResult<Surface> {
        let mut out = Surface::new(canvas)?;
        let copy_w = usize::from(self.width.min(out.width)) * 4;
        let rows = usize::from(self.height.min(out.height));
        let src_stride = usize::from(self.width) * 4;
        let dst_stride = usize::from(out.width) * 4;

        let src = self.data();
        let dst = out.data_mut();
        for row in 0..rows {
            let s = row * src_stride;
            let d = row * dst_stride;
            dst[d..d + copy_w].copy_from_slice(&src[s..s + copy_w]);
        }
        Ok(out)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
