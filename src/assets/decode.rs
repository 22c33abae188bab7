use anyhow::Context;

use crate::{
    assets::raster::Raster,
    foundation::error::{PreviewError, PreviewResult},
};

/// Decode encoded image bytes and convert to a premultiplied RGBA8 raster.
pub fn decode_image(bytes: &[u8]) -> PreviewResult<Raster> {
    let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();

    let mut rgba8_premul = rgba.into_raw();
    premultiply_rgba8_in_place(&mut rgba8_premul);

    Raster::new(width, height, rgba8_premul)
}

/// Parse SVG bytes (the silhouette mask asset ships as SVG).
pub fn parse_svg(bytes: &[u8]) -> PreviewResult<usvg::Tree> {
    let opts = usvg::Options::default();
    let tree = usvg::Tree::from_data(bytes, &opts).context("parse svg tree")?;
    Ok(tree)
}

/// Rasterize a parsed SVG into a premultiplied RGBA8 raster of the given
/// pixel size, stretching the SVG viewport to fill it.
pub fn rasterize_svg(tree: &usvg::Tree, width: u32, height: u32) -> PreviewResult<Raster> {
    if width == 0 || height == 0 {
        return Err(PreviewError::validation("svg raster size must be non-zero"));
    }
    let svg_w = tree.size().width();
    let svg_h = tree.size().height();
    if !svg_w.is_finite() || !svg_h.is_finite() || svg_w <= 0.0 || svg_h <= 0.0 {
        return Err(PreviewError::decode("svg has invalid width/height"));
    }

    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| PreviewError::decode("failed to allocate svg pixmap"))?;

    let sx = (width as f32) / svg_w;
    let sy = (height as f32) / svg_h;
    let xform = resvg::tiny_skia::Transform::from_scale(sx, sy);

    resvg::render(tree, xform, &mut pixmap.as_mut());
    // tiny-skia pixmaps are already premultiplied RGBA8.
    Raster::new(width, height, pixmap.data().to_vec())
}

fn premultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        px[0] = ((px[0] as u16 * a + 127) / 255) as u8;
        px[1] = ((px[1] as u16 * a + 127) / 255) as u8;
        px[2] = ((px[2] as u16 * a + 127) / 255) as u8;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
