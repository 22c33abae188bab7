use super::*;
use crate::{
    assets::raster::{PreviewAssets, Raster},
    foundation::core::Rgba8Premul,
};

const OPAQUE: Rgba8Premul = Rgba8Premul {
    r: 255,
    g: 255,
    b: 255,
    a: 255,
};

#[test]
fn mask_box_matches_reference_geometry_at_scale_1() {
    let b = mask_box(MaskPosition::Top, 1.0);
    assert_eq!(b.x0, -20.0);
    assert_eq!(b.y0, -16.0);
    assert!((b.width() - MASK_BASE_WIDTH).abs() < 1e-12);
    assert!((b.width() - 235.657).abs() < 1e-3);
    assert_eq!(b.height(), 200.0);

    assert_eq!(mask_box(MaskPosition::Middle, 1.0).y0, -70.0);
    assert_eq!(mask_box(MaskPosition::Bottom, 1.0).y0, -122.0);
}

#[test]
fn mask_box_scales_uniformly_with_pixel_scale() {
    let unit = mask_box(MaskPosition::Middle, 1.0);
    let double = mask_box(MaskPosition::Middle, 2.0);
    assert_eq!(double.x0, unit.x0 * 2.0);
    assert_eq!(double.y0, unit.y0 * 2.0);
    assert!((double.width() - unit.width() * 2.0).abs() < 1e-9);
    assert!((double.height() - unit.height() * 2.0).abs() < 1e-9);
}

#[test]
fn cover_fit_wider_raster_fits_height_and_overflows_width() {
    // 400x300 (ratio 1.33) against the mask box (ratio ~1.178).
    let b = mask_box(MaskPosition::Middle, 1.0);
    let (w, h) = cover_fit(400, 300, b.width(), b.height());
    assert_eq!(h, b.height());
    assert!((w - b.height() * (400.0 / 300.0)).abs() < 1e-9);
    assert!(w > b.width());
}

#[test]
fn cover_fit_taller_raster_fits_width_and_overflows_height() {
    let b = mask_box(MaskPosition::Middle, 1.0);
    let (w, h) = cover_fit(300, 400, b.width(), b.height());
    assert_eq!(w, b.width());
    assert!((h - b.width() / (300.0 / 400.0)).abs() < 1e-9);
    assert!(h > b.height());
}

#[test]
fn cover_fit_always_covers_the_box_with_equality_on_one_axis() {
    let b = mask_box(MaskPosition::Top, 1.0);
    for (rw, rh) in [(400, 300), (300, 400), (100, 100), (1920, 1080), (7, 31)] {
        let (w, h) = cover_fit(rw, rh, b.width(), b.height());
        assert!(w >= b.width() - 1e-9);
        assert!(h >= b.height() - 1e-9);
        let touches_width = (w - b.width()).abs() < 1e-9;
        let touches_height = (h - b.height()).abs() < 1e-9;
        assert!(touches_width || touches_height);
    }
}

#[test]
fn fitted_dimensions_scale_linearly_with_content_scale() {
    let b = mask_box(MaskPosition::Top, 1.0);
    let (fit_w, fit_h) = cover_fit(640, 480, b.width(), b.height());
    for scale in [0.1, 0.5, 1.0, 1.7, 3.0] {
        let (w, h) = (fit_w * scale, fit_h * scale);
        assert!((w / fit_w - scale).abs() < 1e-12);
        assert!((h / fit_h - scale).abs() < 1e-12);
    }
}

#[test]
fn render_without_both_rasters_is_a_silent_noop() {
    let state = ViewState::new();
    let mut assets = PreviewAssets::new();
    let mut surface = OutputSurface::new();
    surface.set_logical_size(200.0, 60.0);

    render_preview(&state, &assets, &mut surface);
    assert_eq!(surface.physical_width(), 0);
    assert!(surface.pixels().is_empty());

    assets.set_content(Raster::solid(2, 2, OPAQUE));
    render_preview(&state, &assets, &mut surface);
    assert!(surface.pixels().is_empty(), "content alone must not render");
}

#[test]
fn render_with_zero_logical_size_is_a_silent_noop() {
    let state = ViewState::new();
    let mut assets = PreviewAssets::new();
    assets.set_content(Raster::solid(2, 2, OPAQUE));
    assets.set_mask(Raster::solid(2, 2, OPAQUE));

    let mut surface = OutputSurface::new();
    render_preview(&state, &assets, &mut surface);
    assert!(surface.pixels().is_empty());
}
