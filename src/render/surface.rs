use crate::render::context::Context2d;

/// Output surface: a logical (CSS) size plus a physical premultiplied
/// RGBA8 backing buffer sized `logical * device_pixel_ratio`.
///
/// The embedding UI owns layout: it pushes logical size and device pixel
/// ratio here; the renderer resizes the backing store on demand but never
/// decides the size itself.
#[derive(Clone, Debug)]
pub struct OutputSurface {
    logical_width: f64,
    logical_height: f64,
    device_pixel_ratio: f64,
    physical_width: u32,
    physical_height: u32,
    pixels: Vec<u8>,
}

impl Default for OutputSurface {
    fn default() -> Self {
        Self {
            logical_width: 0.0,
            logical_height: 0.0,
            device_pixel_ratio: 1.0,
            physical_width: 0,
            physical_height: 0,
            pixels: Vec::new(),
        }
    }
}

impl OutputSurface {
    /// Surface with no layout yet and a device pixel ratio of 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Logical width in CSS pixels.
    pub fn logical_width(&self) -> f64 {
        self.logical_width
    }

    /// Logical height in CSS pixels.
    pub fn logical_height(&self) -> f64 {
        self.logical_height
    }

    /// Push the layout-derived logical size.
    pub fn set_logical_size(&mut self, width: f64, height: f64) {
        self.logical_width = width;
        self.logical_height = height;
    }

    /// Current device pixel ratio.
    pub fn device_pixel_ratio(&self) -> f64 {
        self.device_pixel_ratio
    }

    /// Push the environment's pixel-density value. Non-finite or
    /// non-positive reports fall back to 1.
    pub fn set_device_pixel_ratio(&mut self, dpr: f64) {
        self.device_pixel_ratio = if dpr.is_finite() && dpr > 0.0 {
            dpr
        } else {
            1.0
        };
    }

    /// Whether layout has produced a non-empty logical size.
    pub fn has_layout(&self) -> bool {
        self.logical_width > 0.0 && self.logical_height > 0.0
    }

    /// Physical buffer width in device pixels.
    pub fn physical_width(&self) -> u32 {
        self.physical_width
    }

    /// Physical buffer height in device pixels.
    pub fn physical_height(&self) -> u32 {
        self.physical_height
    }

    /// Composited pixels, row-major premultiplied RGBA8 at physical size.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Resize the backing buffer to `round(logical * dpr)` if the physical
    /// size actually changed. Returns whether a reallocation happened;
    /// no-op resizes keep the existing (already composited) buffer intact.
    pub(crate) fn prepare(&mut self) -> bool {
        let width = (self.logical_width * self.device_pixel_ratio).round().max(0.0) as u32;
        let height = (self.logical_height * self.device_pixel_ratio).round().max(0.0) as u32;
        if width == self.physical_width && height == self.physical_height {
            return false;
        }
        self.physical_width = width;
        self.physical_height = height;
        self.pixels = vec![0u8; (width as usize) * (height as usize) * 4];
        true
    }

    /// Borrow the physical buffer as a fresh drawing context.
    pub(crate) fn context(&mut self) -> Context2d<'_> {
        Context2d::new(&mut self.pixels, self.physical_width, self.physical_height)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
