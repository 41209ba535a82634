// Copyright 2025 Lars Brubaker
// Resize engine: grow/shrink scenarios, corner treatments, parameter
// validation, monotonicity, and hole behavior.

mod helpers;

use helpers::{assert_area_eq, rect, square10};
use polybool_rust::{CornerStyle, PolyError, PolygonSet};

#[test]
fn grow_square_with_chamfer() {
    let r = square10().resize(2.0, CornerStyle::Chamfer, 1).unwrap();
    // Four 10x2 edge bands plus four chamfer triangles of area 2.
    assert_area_eq(r.area(), 188.0, "grown square");
    assert!(r.area() > 100.0);
    // The grown region fully contains the original.
    assert_area_eq(square10().difference(&r).area(), 0.0, "containment");
}

#[test]
fn shrink_square_is_exact() {
    let r = square10().resize(-2.0, CornerStyle::Chamfer, 1).unwrap();
    assert_area_eq(r.area(), 36.0, "shrunk square");
    // Shrinking never leaks outside the original.
    assert_area_eq(r.difference(&square10()).area(), 0.0, "containment");
}

#[test]
fn shrink_to_vanishing_is_silent() {
    let r = square10().resize(-5.0, CornerStyle::Chamfer, 1).unwrap();
    assert!(r.is_empty());
    assert_area_eq(r.area(), 0.0, "vanished");
}

#[test]
fn zero_distance_returns_normalized_copy() {
    let mut dirty = PolygonSet::new();
    dirty.add_poly_data(&[0, 0, 10, 0, 10, 10, 0, 10]).unwrap();
    dirty.add_poly_data(&[0, 0, 10, 0, 10, 10, 0, 10]).unwrap();
    let r = dirty.resize(0.0, CornerStyle::Chamfer, 1).unwrap();
    assert_area_eq(r.area(), 100.0, "zero resize");
    assert_eq!(r.polygon_count(), 1);
}

#[test]
fn offset_area_is_monotone_in_distance() {
    let shape = square10().union(&rect(8, 8, 22, 14));
    let mut last = 0.0;
    for d in [-3.0, -1.0, 0.0, 1.0, 3.0] {
        let area = shape.resize(d, CornerStyle::Chamfer, 1).unwrap().area();
        assert!(
            area >= last,
            "resize area must grow with distance: {} -> {}",
            last,
            area
        );
        last = area;
    }
}

#[test]
fn round_corners_use_arc_fans() {
    let chamfer = square10().resize(4.0, CornerStyle::Chamfer, 1).unwrap();
    let round = square10().resize(4.0, CornerStyle::Round, 16).unwrap();
    // Arc fans bulge past the single chamfer cut but stay close to the
    // quarter-disc bound (plus integer rounding slack).
    assert!(round.area() >= chamfer.area());
    assert!(round.area() <= 320.0);
    // More vertices than the chamfered version at each corner.
    let chamfer_pts: usize = chamfer.polygons().iter().map(|p| p.points().len()).sum();
    let round_pts: usize = round.polygons().iter().map(|p| p.points().len()).sum();
    assert!(round_pts > chamfer_pts);
}

#[test]
fn growing_a_ring_shrinks_its_hole() {
    let ring = rect(0, 0, 30, 30).difference(&rect(10, 10, 20, 20));
    let r = ring.resize(2.0, CornerStyle::Chamfer, 1).unwrap();
    // Outer boundary grows to 34x34 with chamfered corners; the hole
    // erodes to 6x6 with square corners.
    assert_area_eq(r.area(), 900.0 + 240.0 + 8.0 - 36.0, "grown ring");
    assert_eq!(r.polygon_count(), 2);
}

#[test]
fn shrinking_a_ring_grows_its_hole() {
    let ring = rect(0, 0, 30, 30).difference(&rect(10, 10, 20, 20));
    let r = ring.resize(-2.0, CornerStyle::Chamfer, 1).unwrap();
    // Outer erodes to 26x26; the hole dilates to 14x14 with chamfered
    // corners (area 100 + 80 + 8).
    assert_area_eq(r.area(), 676.0 - 188.0, "shrunk ring");
    assert_eq!(r.polygon_count(), 2);
}

#[test]
fn rejects_invalid_parameters_eagerly() {
    let s = square10();
    assert!(matches!(
        s.resize(2.0, CornerStyle::Round, 0),
        Err(PolyError::InvalidParameter(_))
    ));
    assert!(matches!(
        s.resize(f64::NAN, CornerStyle::Chamfer, 1),
        Err(PolyError::InvalidParameter(_))
    ));
    // Failed validation must not have touched the input.
    assert_area_eq(s.area(), 100.0, "input untouched after error");
}

#[test]
fn resize_empty_set_stays_empty() {
    let r = PolygonSet::new().resize(3.0, CornerStyle::Round, 8).unwrap();
    assert!(r.is_empty());
}
