//! The compositing pipeline: one synchronous frame per call.

use std::f64::consts::PI;

use crate::{
    assets::raster::PreviewAssets,
    foundation::core::{Affine, Point, Rect, Rgba8Premul, Vec2},
    render::context::CompositeOp,
    render::surface::OutputSurface,
    state::model::{ContentMode, MaskPosition, Orientation, ViewMode, ViewState},
};

/// Design-reference width the mask geometry was authored against; the
/// pixel scale for a frame is `logical_width / BASE_VIEW_WIDTH`.
pub const BASE_VIEW_WIDTH: f64 = 200.0;

// Silhouette geometry in base units, from the mask artwork's bounds.
const MASK_BASE_HEIGHT: f64 = 200.0;
const MASK_ASPECT_RATIO: f64 = 1374.667 / 1166.667;
const MASK_BASE_WIDTH: f64 = MASK_BASE_HEIGHT * MASK_ASPECT_RATIO;
const MASK_BASE_LEFT: f64 = -20.0;

// rgba(255, 0, 0, 0.8), premultiplied.
const COLOR_FILL: Rgba8Premul = Rgba8Premul {
    r: 204,
    g: 0,
    b: 0,
    a: 204,
};

fn anchor_offset(position: MaskPosition) -> f64 {
    match position {
        MaskPosition::Top => -16.0,
        MaskPosition::Middle => -70.0,
        MaskPosition::Bottom => -122.0,
    }
}

/// Mask bounding box in logical pixels for a vertical anchor and pixel
/// scale. At pixel scale 1 the box is `(-20, anchor) .. (+~235.66 x 200)`.
pub fn mask_box(position: MaskPosition, pixel_scale: f64) -> Rect {
    Rect::from_origin_size(
        Point::new(
            MASK_BASE_LEFT * pixel_scale,
            anchor_offset(position) * pixel_scale,
        ),
        (
            MASK_BASE_WIDTH * pixel_scale,
            MASK_BASE_HEIGHT * pixel_scale,
        ),
    )
}

/// Cover-fit a raster into a box: the result fully covers the box on at
/// least one axis and overflows on the other, which the mask clips away.
///
/// Returns `(width, height)`. Wider-than-box rasters fit the box height
/// and overflow horizontally; taller ones fit the width and overflow
/// vertically.
pub fn cover_fit(raster_width: u32, raster_height: u32, box_width: f64, box_height: f64) -> (f64, f64) {
    let raster_ratio = f64::from(raster_width) / f64::from(raster_height);
    let box_ratio = box_width / box_height;
    if raster_ratio > box_ratio {
        (box_height * raster_ratio, box_height)
    } else {
        (box_width, box_width / raster_ratio)
    }
}

/// Composite one frame of the preview onto the surface.
///
/// Synchronous and idempotent: the same state and rasters produce a
/// byte-identical buffer. The two recognized precondition failures —
/// rasters not yet ready and zero logical size — are silent no-ops; the
/// caller re-invokes on the next relevant event.
#[tracing::instrument(level = "trace", skip_all)]
pub fn render_preview(state: &ViewState, assets: &PreviewAssets, surface: &mut OutputSurface) {
    if !assets.is_ready() || !surface.has_layout() {
        return;
    }
    // is_ready() guarantees mask and (fallback) content are present.
    let Some(mask) = assets.mask() else { return };
    let content = assets.active_content(state.content_mode());

    let logical_w = surface.logical_width();
    let logical_h = surface.logical_height();
    let dpr = surface.device_pixel_ratio();
    if surface.prepare() {
        tracing::debug!(
            physical_width = surface.physical_width(),
            physical_height = surface.physical_height(),
            "surface backing buffer resized"
        );
    }

    let mut ctx = surface.context();
    ctx.reset();
    ctx.set_transform(Affine::scale(dpr));
    ctx.clear();

    let center = Vec2::new(logical_w / 2.0, logical_h / 2.0);
    let flipped_side = state.orientation() == Orientation::Right && state.view_mode() == ViewMode::Side;
    let flipped_top = state.orientation() == Orientation::Right && state.view_mode() == ViewMode::Top;

    // Whole-frame rotation: in side view, content and mask flip together.
    ctx.save();
    ctx.translate(center);
    if flipped_side {
        ctx.rotate(PI);
    }
    ctx.translate(-center);

    let pixel_scale = logical_w / BASE_VIEW_WIDTH;
    let bounds = mask_box(state.position(), pixel_scale);
    let mask_dst = Rect::from_origin_size(
        Point::new(
            bounds.x0 + state.mask_offset().x * pixel_scale,
            bounds.y0 + state.mask_offset().y * pixel_scale,
        ),
        (bounds.width(), bounds.height()),
    );

    match state.content_mode() {
        ContentMode::Image | ContentMode::Upload => {
            let Some(content) = content else {
                ctx.restore();
                return;
            };

            // In top view the mask artwork is orientation-agnostic, so only
            // the content layer flips; the rotation is reverted before the
            // mask draw.
            ctx.save();
            if flipped_top {
                ctx.translate(center);
                ctx.rotate(PI);
                ctx.translate(-center);
            }

            let (fit_w, fit_h) = cover_fit(content.width, content.height, bounds.width(), bounds.height());
            let draw_w = fit_w * state.content_scale();
            let draw_h = fit_h * state.content_scale();
            let draw_x =
                bounds.x0 + (bounds.width() - draw_w) / 2.0 + state.content_offset().x * pixel_scale;
            let draw_y =
                bounds.y0 + (bounds.height() - draw_h) / 2.0 + state.content_offset().y * pixel_scale;
            ctx.draw_raster(content, Rect::from_origin_size((draw_x, draw_y), (draw_w, draw_h)));
            ctx.restore();

            ctx.set_composite(CompositeOp::DestinationIn);
            ctx.draw_raster(mask, mask_dst);
            ctx.set_composite(CompositeOp::SourceOver);
        }
        ContentMode::Color => {
            ctx.fill_rect(mask_dst, COLOR_FILL);
            ctx.set_composite(CompositeOp::DestinationIn);
            ctx.draw_raster(mask, mask_dst);
            ctx.set_composite(CompositeOp::SourceOver);
        }
    }

    ctx.restore();
}

#[cfg(test)]
#[path = "../../tests/unit/render/preview.rs"]
mod tests;
