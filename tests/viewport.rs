use approx::assert_abs_diff_eq;

use decision_canvas::{Domain, PlaneMapper, PlaygroundError, ViewportConfig};

fn mapper(domain: Domain) -> PlaneMapper {
    PlaneMapper::new(&ViewportConfig::default(), domain)
}

#[test]
fn corners_map_to_domain_bounds_with_y_up() {
    let m = mapper(Domain::TEN);

    let (x, y) = m.to_pixel(0.0, 0.0);
    assert_abs_diff_eq!(x, 0.0);
    assert_abs_diff_eq!(y, 500.0);

    let (x, y) = m.to_pixel(10.0, 10.0);
    assert_abs_diff_eq!(x, 500.0);
    assert_abs_diff_eq!(y, 0.0);
}

#[test]
fn pixel_and_logical_round_trip() {
    let m = mapper(Domain::UNIT);
    for &(x, y) in &[(0.0, 0.0), (0.25, 0.8), (1.0, 1.0), (0.5, 0.125)] {
        let (px, py) = m.to_pixel(x, y);
        let (lx, ly) = m.to_logical(px, py);
        assert_abs_diff_eq!(lx, x, epsilon = 1e-9);
        assert_abs_diff_eq!(ly, y, epsilon = 1e-9);
    }
}

#[test]
fn centre_click_lands_mid_domain() {
    let m = mapper(Domain::TEN);
    let (x, y) = m.from_click(300.0, 300.0).unwrap();
    assert_abs_diff_eq!(x, 5.0, epsilon = 1e-9);
    assert_abs_diff_eq!(y, 5.0, epsilon = 1e-9);
}

#[test]
fn clicks_in_the_margin_are_rejected() {
    let m = mapper(Domain::TEN);
    assert!(m.from_click(10.0, 300.0).is_none());
    assert!(m.from_click(300.0, 590.0).is_none());
    assert!(m.from_click(50.0, 550.0).is_some());
}

#[test]
fn default_viewport_dimensions() {
    let v = ViewportConfig::default();
    assert_eq!((v.inner_width(), v.inner_height()), (500, 500));
    assert_eq!((v.rows(), v.cols()), (50, 50));
    assert_eq!(v.cell_count(), 2500);
}

#[test]
fn rejects_degenerate_viewports() {
    assert!(matches!(ViewportConfig::new(200, 600, 50, 10), Ok(_)));
    assert!(matches!(ViewportConfig::new(100, 600, 60, 10), Err(PlaygroundError::InvalidViewport(_))));
    assert!(matches!(ViewportConfig::new(600, 600, 50, 0), Err(PlaygroundError::InvalidViewport(_))));
    assert!(matches!(ViewportConfig::new(600, 600, 50, 501), Err(PlaygroundError::InvalidViewport(_))));
}

#[test]
fn partial_cells_are_dropped() {
    let v = ViewportConfig::new(600, 600, 50, 30).unwrap();
    assert_eq!(v.rows(), 16);
    assert_eq!(v.cell_count(), 256);
}

#[test]
fn domain_normalizes_both_ways() {
    let domain = Domain { lo: -2.0, hi: 2.0 };
    assert_abs_diff_eq!(domain.normalize(1.0), 0.75);
    assert_abs_diff_eq!(domain.denormalize(0.75), 1.0);
}
