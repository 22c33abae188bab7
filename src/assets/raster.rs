use std::sync::Arc;

use crate::{
    foundation::core::Rgba8Premul,
    foundation::error::{PreviewError, PreviewResult},
    state::model::ContentMode,
};

#[derive(Clone, Debug)]
/// Decoded raster image in premultiplied RGBA8 form.
///
/// Rasters are prepared once (see [`crate::decode_image`] and
/// [`crate::rasterize_svg`]) and only ever read by the renderer.
pub struct Raster {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel bytes in row-major premultiplied RGBA8.
    pub rgba8_premul: Arc<Vec<u8>>,
}

impl Raster {
    /// Wrap prepared premultiplied pixel bytes.
    pub fn new(width: u32, height: u32, rgba8_premul: Vec<u8>) -> PreviewResult<Self> {
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(4))
            .ok_or_else(|| PreviewError::validation("raster dimensions overflow"))?;
        if rgba8_premul.len() != expected {
            return Err(PreviewError::validation(format!(
                "raster byte length {} does not match {}x{} rgba8",
                rgba8_premul.len(),
                width,
                height
            )));
        }
        Ok(Self {
            width,
            height,
            rgba8_premul: Arc::new(rgba8_premul),
        })
    }

    /// Solid single-color raster.
    pub fn solid(width: u32, height: u32, color: Rgba8Premul) -> Self {
        let px = color.to_bytes();
        let data = px.repeat((width as usize) * (height as usize));
        Self {
            width,
            height,
            rgba8_premul: Arc::new(data),
        }
    }

    /// Width over height.
    pub fn aspect_ratio(&self) -> f64 {
        f64::from(self.width) / f64::from(self.height)
    }

    /// Texel at (x, y), transparent outside bounds.
    pub(crate) fn texel(&self, x: i64, y: i64) -> [u8; 4] {
        if x < 0 || y < 0 || x >= i64::from(self.width) || y >= i64::from(self.height) {
            return [0; 4];
        }
        let idx = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let px = &self.rgba8_premul[idx..idx + 4];
        [px[0], px[1], px[2], px[3]]
    }
}

#[derive(Clone, Debug, Default)]
/// The two (plus one optional) rasters the renderer composites.
///
/// Doubles as the readiness join for the first paint: each raster arrival
/// is an independent completion signal, and [`PreviewAssets::is_ready`] is
/// a boolean over both, so a source reporting completion more than once
/// cannot miscount the gate.
pub struct PreviewAssets {
    content: Option<Raster>,
    upload: Option<Raster>,
    mask: Option<Raster>,
}

impl PreviewAssets {
    /// Empty store; nothing ready yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Preset content raster, if it has arrived.
    pub fn content(&self) -> Option<&Raster> {
        self.content.as_ref()
    }

    /// Install the preset content raster.
    pub fn set_content(&mut self, raster: Raster) {
        self.content = Some(raster);
    }

    /// User-uploaded raster, if any.
    pub fn upload(&self) -> Option<&Raster> {
        self.upload.as_ref()
    }

    /// Install a user-uploaded raster.
    pub fn set_upload(&mut self, raster: Raster) {
        self.upload = Some(raster);
    }

    /// Discard the uploaded raster; upload mode falls back to the preset.
    pub fn clear_upload(&mut self) {
        self.upload = None;
    }

    /// Silhouette mask raster, if it has arrived.
    pub fn mask(&self) -> Option<&Raster> {
        self.mask.as_ref()
    }

    /// Install the silhouette mask raster.
    pub fn set_mask(&mut self, raster: Raster) {
        self.mask = Some(raster);
    }

    /// Whether both gating rasters (content and mask) have arrived.
    ///
    /// The upload slot does not gate: upload mode falls back to the preset.
    pub fn is_ready(&self) -> bool {
        self.content.is_some() && self.mask.is_some()
    }

    /// Raster drawn by the image/upload content branches.
    pub(crate) fn active_content(&self, mode: ContentMode) -> Option<&Raster> {
        match mode {
            ContentMode::Upload => self.upload.as_ref().or(self.content.as_ref()),
            _ => self.content.as_ref(),
        }
    }
}
