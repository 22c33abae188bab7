use super::*;

#[test]
fn physical_size_is_logical_times_device_pixel_ratio() {
    let mut surface = OutputSurface::new();
    surface.set_logical_size(300.0, 150.0);
    surface.set_device_pixel_ratio(2.0);

    assert!(surface.prepare());
    assert_eq!(surface.physical_width(), 600);
    assert_eq!(surface.physical_height(), 300);
    assert_eq!(surface.pixels().len(), 600 * 300 * 4);
}

#[test]
fn prepare_reallocates_only_when_physical_size_changes() {
    let mut surface = OutputSurface::new();
    surface.set_logical_size(100.0, 50.0);
    assert!(surface.prepare());
    assert!(!surface.prepare(), "no-op resize must not reallocate");

    // Same physical size reached through a different logical/dpr pair.
    surface.set_logical_size(50.0, 25.0);
    surface.set_device_pixel_ratio(2.0);
    assert!(!surface.prepare());

    surface.set_logical_size(60.0, 25.0);
    assert!(surface.prepare());
    assert_eq!(surface.physical_width(), 120);
}

#[test]
fn fractional_physical_sizes_round_to_whole_pixels() {
    let mut surface = OutputSurface::new();
    surface.set_logical_size(101.0, 51.0);
    surface.set_device_pixel_ratio(1.5);
    surface.prepare();
    assert_eq!(surface.physical_width(), 152); // 151.5 rounds up
    assert_eq!(surface.physical_height(), 77); // 76.5 rounds up
}

#[test]
fn invalid_device_pixel_ratio_falls_back_to_1() {
    let mut surface = OutputSurface::new();
    for bad in [0.0, -2.0, f64::NAN, f64::INFINITY] {
        surface.set_device_pixel_ratio(bad);
        assert_eq!(surface.device_pixel_ratio(), 1.0);
    }
    surface.set_device_pixel_ratio(2.5);
    assert_eq!(surface.device_pixel_ratio(), 2.5);
}

#[test]
fn has_layout_requires_both_dimensions_positive() {
    let mut surface = OutputSurface::new();
    assert!(!surface.has_layout());
    surface.set_logical_size(10.0, 0.0);
    assert!(!surface.has_layout());
    surface.set_logical_size(0.0, 10.0);
    assert!(!surface.has_layout());
    surface.set_logical_size(10.0, 10.0);
    assert!(surface.has_layout());
}
