//! A minimal retained-state 2D drawing context over a premultiplied RGBA8
//! buffer.
//!
//! This is the surface the compositing pipeline draws through: an affine
//! transform stack, a composite-op switch, rect fills and scaled raster
//! draws. Raster draws are inverse-mapped per destination pixel with
//! bilinear sampling (transparent outside source bounds), so 180-degree
//! rotations and device-pixel-ratio scaling fall out of the same path.

use crate::{
    assets::raster::Raster,
    foundation::core::{Affine, Point, Rect, Rgba8Premul, Vec2},
    render::composite::{PremulRgba8, dest_in, over},
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// Alpha-composite rule applied by draw operations.
pub enum CompositeOp {
    /// Default painter's blend: source over destination.
    #[default]
    SourceOver,
    /// Keep destination only where the source has alpha; everything the
    /// source does not cover goes transparent.
    DestinationIn,
}

/// Drawing context borrowing a physical pixel buffer for one frame.
///
/// Coordinates handed to draw calls are in user space; the current
/// transform maps them to device pixels. The pipeline establishes a base
/// device-pixel-ratio scale so all geometry after that is expressed in
/// logical (CSS) pixels.
pub struct Context2d<'a> {
    pixels: &'a mut [u8],
    width: u32,
    height: u32,
    transform: Affine,
    stack: Vec<(Affine, CompositeOp)>,
    composite: CompositeOp,
}

impl<'a> Context2d<'a> {
    /// Borrow a `width * height * 4` byte buffer with a default state:
    /// identity transform, source-over, empty save stack.
    pub fn new(pixels: &'a mut [u8], width: u32, height: u32) -> Self {
        debug_assert_eq!(pixels.len(), (width as usize) * (height as usize) * 4);
        Self {
            pixels,
            width,
            height,
            transform: Affine::IDENTITY,
            stack: Vec::new(),
            composite: CompositeOp::SourceOver,
        }
    }

    /// Reset transform, save stack and composite op to defaults.
    pub fn reset(&mut self) {
        self.transform = Affine::IDENTITY;
        self.stack.clear();
        self.composite = CompositeOp::SourceOver;
    }

    /// Current transform.
    pub fn transform(&self) -> Affine {
        self.transform
    }

    /// Replace the current transform.
    pub fn set_transform(&mut self, transform: Affine) {
        self.transform = transform;
    }

    /// Post-multiply a translation onto the current transform.
    pub fn translate(&mut self, by: Vec2) {
        self.transform = self.transform * Affine::translate(by);
    }

    /// Post-multiply a rotation (radians) onto the current transform.
    pub fn rotate(&mut self, radians: f64) {
        self.transform = self.transform * Affine::rotate(radians);
    }

    /// Push the current transform and composite op.
    pub fn save(&mut self) {
        self.stack.push((self.transform, self.composite));
    }

    /// Pop the most recent save; no-op on an empty stack.
    pub fn restore(&mut self) {
        if let Some((transform, composite)) = self.stack.pop() {
            self.transform = transform;
            self.composite = composite;
        }
    }

    /// Current composite op.
    pub fn composite(&self) -> CompositeOp {
        self.composite
    }

    /// Select the composite op for subsequent draws.
    pub fn set_composite(&mut self, op: CompositeOp) {
        self.composite = op;
    }

    /// Clear the whole backing buffer to transparent, ignoring transform
    /// and composite op.
    pub fn clear(&mut self) {
        self.pixels.fill(0);
    }

    /// Fill an axis-aligned user-space rect (transformed by the current
    /// transform) with a premultiplied color. Hard-edged: a device pixel is
    /// covered iff its center maps inside the rect.
    pub fn fill_rect(&mut self, rect: Rect, color: Rgba8Premul) {
        if rect.width() <= 0.0 || rect.height() <= 0.0 {
            return;
        }
        let Some(inv) = invert(self.transform) else {
            return;
        };
        let src = color.to_bytes();

        match self.composite {
            CompositeOp::SourceOver => {
                let Some((x0, y0, x1, y1)) = self.device_bounds(rect_corners(rect)) else {
                    return;
                };
                for y in y0..y1 {
                    for x in x0..x1 {
                        let p = inv * pixel_center(x, y);
                        if rect.contains(p) {
                            self.blend_over(x, y, src);
                        }
                    }
                }
            }
            CompositeOp::DestinationIn => {
                // Uncovered destination pixels must go transparent too.
                for y in 0..self.height {
                    for x in 0..self.width {
                        let p = inv * pixel_center(x, y);
                        let a = if rect.contains(p) { src[3] } else { 0 };
                        self.mask_in(x, y, a);
                    }
                }
            }
        }
    }

    /// Draw a raster scaled into a user-space destination rect, through the
    /// current transform and composite op.
    pub fn draw_raster(&mut self, raster: &Raster, dst: Rect) {
        if raster.width == 0 || raster.height == 0 || dst.width() <= 0.0 || dst.height() <= 0.0 {
            return;
        }

        // Source-pixel space -> device space.
        let to_device = self.transform
            * Affine::translate(dst.origin().to_vec2())
            * Affine::scale_non_uniform(
                dst.width() / f64::from(raster.width),
                dst.height() / f64::from(raster.height),
            );
        let Some(inv) = invert(to_device) else {
            return;
        };

        match self.composite {
            CompositeOp::SourceOver => {
                let src_bounds = Rect::new(0.0, 0.0, f64::from(raster.width), f64::from(raster.height));
                let corners = rect_corners(src_bounds).map(|c| to_device * c);
                let Some((x0, y0, x1, y1)) = self.device_bounds_pre(corners) else {
                    return;
                };
                for y in y0..y1 {
                    for x in x0..x1 {
                        let src = sample_bilinear(raster, inv * pixel_center(x, y));
                        if src[3] != 0 {
                            self.blend_over(x, y, src);
                        }
                    }
                }
            }
            CompositeOp::DestinationIn => {
                for y in 0..self.height {
                    for x in 0..self.width {
                        let src = sample_bilinear(raster, inv * pixel_center(x, y));
                        self.mask_in(x, y, src[3]);
                    }
                }
            }
        }
    }

    /// Device-space bounding box (clamped to the buffer) of user-space
    /// corners under the current transform.
    fn device_bounds(&self, corners: [Point; 4]) -> Option<(u32, u32, u32, u32)> {
        self.device_bounds_pre(corners.map(|c| self.transform * c))
    }

    /// Same, for corners already in device space.
    fn device_bounds_pre(&self, corners: [Point; 4]) -> Option<(u32, u32, u32, u32)> {
        let mut min_x = f64::INFINITY;
        let mut min_y = f64::INFINITY;
        let mut max_x = f64::NEG_INFINITY;
        let mut max_y = f64::NEG_INFINITY;
        for c in corners {
            min_x = min_x.min(c.x);
            min_y = min_y.min(c.y);
            max_x = max_x.max(c.x);
            max_y = max_y.max(c.y);
        }
        if !min_x.is_finite() || !min_y.is_finite() || !max_x.is_finite() || !max_y.is_finite() {
            return None;
        }

        let x0 = min_x.floor().max(0.0) as u32;
        let y0 = min_y.floor().max(0.0) as u32;
        let x1 = (max_x.ceil().max(0.0) as u32).min(self.width);
        let y1 = (max_y.ceil().max(0.0) as u32).min(self.height);
        if x0 >= x1 || y0 >= y1 {
            return None;
        }
        Some((x0, y0, x1, y1))
    }

    fn blend_over(&mut self, x: u32, y: u32, src: PremulRgba8) {
        let idx = (((y as usize) * (self.width as usize)) + (x as usize)) * 4;
        let dst = &mut self.pixels[idx..idx + 4];
        let out = over([dst[0], dst[1], dst[2], dst[3]], src);
        dst.copy_from_slice(&out);
    }

    fn mask_in(&mut self, x: u32, y: u32, src_alpha: u8) {
        let idx = (((y as usize) * (self.width as usize)) + (x as usize)) * 4;
        let dst = &mut self.pixels[idx..idx + 4];
        let out = dest_in([dst[0], dst[1], dst[2], dst[3]], src_alpha);
        dst.copy_from_slice(&out);
    }
}

/// Bilinear sample at a source-pixel-space point; texels outside the
/// raster contribute transparent, so edges feather out over half a texel.
fn sample_bilinear(raster: &Raster, p: Point) -> PremulRgba8 {
    let x = p.x - 0.5;
    let y = p.y - 0.5;
    let x0 = x.floor();
    let y0 = y.floor();
    let fx = x - x0;
    let fy = y - y0;
    let x0 = x0 as i64;
    let y0 = y0 as i64;

    let t00 = raster.texel(x0, y0);
    let t10 = raster.texel(x0 + 1, y0);
    let t01 = raster.texel(x0, y0 + 1);
    let t11 = raster.texel(x0 + 1, y0 + 1);

    let w00 = (1.0 - fx) * (1.0 - fy);
    let w10 = fx * (1.0 - fy);
    let w01 = (1.0 - fx) * fy;
    let w11 = fx * fy;

    let mut out = [0u8; 4];
    for i in 0..4 {
        let v = f64::from(t00[i]) * w00
            + f64::from(t10[i]) * w10
            + f64::from(t01[i]) * w01
            + f64::from(t11[i]) * w11;
        out[i] = (v + 0.5) as u8;
    }
    out
}

fn pixel_center(x: u32, y: u32) -> Point {
    Point::new(f64::from(x) + 0.5, f64::from(y) + 0.5)
}

fn rect_corners(rect: Rect) -> [Point; 4] {
    [
        Point::new(rect.x0, rect.y0),
        Point::new(rect.x1, rect.y0),
        Point::new(rect.x0, rect.y1),
        Point::new(rect.x1, rect.y1),
    ]
}

fn invert(transform: Affine) -> Option<Affine> {
    let det = transform.determinant();
    if !det.is_finite() || det.abs() < 1e-12 {
        return None;
    }
    Some(transform.inverse())
}

#[cfg(test)]
#[path = "../../tests/unit/render/context.rs"]
mod tests;
