use std::path::Path;

use anyhow::Context as _;

use crate::{
    foundation::error::{WalkaError, WalkaResult},
    render::{composite::unpremultiply, surface::Surface},
};

/// A flattened copy of the visible surface, in straight-alpha RGBA8.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Row-major straight RGBA8 bytes.
    pub data: Vec<u8>,
}

impl Frame {
    pub(crate) fn from_surface(surface: &Surface) -> Self {
        let canvas = surface.canvas();
        let mut data = Vec::with_capacity(surface.data().len());
        for px in surface.data().chunks_exact(4) {
            data.extend_from_slice(&unpremultiply([px[0], px[1], px[2], px[3]]));
        }
        Self {
            width: canvas.width,
            height: canvas.height,
            data,
        }
    }

    /// Write the frame as a PNG, creating parent directories as needed.
    pub fn write_png(&self, path: &Path) -> WalkaResult<()> {
        ensure_parent_dir(path)?;
        image::save_buffer_with_format(
            path,
            &self.data,
            self.width,
            self.height,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )
        .with_context(|| format!("write png '{}'", path.display()))?;
        Ok(())
    }
}

/// Create `path`'s parent directory if it has one.
pub fn ensure_parent_dir(path: &Path) -> WalkaResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))
            .map_err(WalkaError::from)?;
    }
    Ok(())
}
