// Copyright 2025 Lars Brubaker
// Trapezoid fracturing: exact coverage, no overlaps, trapezoid shape.

mod helpers;

use helpers::{assert_area_eq, rect, square10};
use polybool_rust::{Point, PolygonSet};

/// Every fractured ring must be a slab trapezoid: 3 or 4 vertices on
/// exactly two distinct x positions, wound counter-clockwise.
fn assert_trapezoid_shape(set: &PolygonSet) {
    for poly in set.polygons() {
        let pts = poly.points();
        assert!(
            pts.len() == 3 || pts.len() == 4,
            "trapezoid with {} vertices",
            pts.len()
        );
        let mut xs: Vec<i32> = pts.iter().map(|p| p.x).collect();
        xs.sort_unstable();
        xs.dedup();
        assert_eq!(xs.len(), 2, "trapezoid must span exactly two x positions");
        assert!(poly.signed_area() > 0.0, "trapezoids wind counter-clockwise");
    }
}

/// Fractures must not overlap: the sum of their areas equals the area of
/// their union.
fn assert_no_overlap(set: &PolygonSet) {
    let summed: f64 = set.polygons().iter().map(|p| p.signed_area()).sum();
    assert_area_eq(set.area(), summed, "fracture overlap check");
}

#[test]
fn square_fractures_to_itself() {
    let t = square10().trapezoids();
    assert_eq!(t.polygon_count(), 1);
    assert_area_eq(t.area(), 100.0, "square trapezoid");
    assert_trapezoid_shape(&t);
}

#[test]
fn l_shape_fractures_into_two_slabs() {
    let l = square10().difference(&rect(5, 5, 15, 15));
    let t = l.trapezoids();
    assert_eq!(t.polygon_count(), 2);
    assert_area_eq(t.area(), 75.0, "L fracture");
    assert_trapezoid_shape(&t);
    assert_no_overlap(&t);
}

#[test]
fn triangle_fractures_at_the_apex() {
    let mut tri = PolygonSet::new();
    tri.add_polygon(&[Point::new(0, 0), Point::new(12, 0), Point::new(6, 9)])
        .unwrap();
    let t = tri.trapezoids();
    assert_eq!(t.polygon_count(), 2);
    assert_area_eq(t.area(), 54.0, "triangle fracture");
    assert_trapezoid_shape(&t);
}

#[test]
fn diamond_fractures_cover_exactly() {
    let mut d = PolygonSet::new();
    d.add_polygon(&[
        Point::new(10, 0),
        Point::new(20, 10),
        Point::new(10, 20),
        Point::new(0, 10),
    ])
    .unwrap();
    let t = d.trapezoids();
    assert_area_eq(t.area(), 200.0, "diamond fracture");
    assert_trapezoid_shape(&t);
    assert_no_overlap(&t);
}

#[test]
fn ring_with_hole_fractures_around_it() {
    let ring = rect(0, 0, 30, 30).difference(&rect(10, 10, 20, 20));
    let t = ring.trapezoids();
    assert_eq!(t.polygon_count(), 4);
    assert_area_eq(t.area(), 800.0, "ring fracture");
    assert_trapezoid_shape(&t);
    assert_no_overlap(&t);
}

#[test]
fn dirty_input_is_normalized_before_fracturing() {
    // Two overlapping squares fed in raw; coverage still counted once.
    let mut dirty = PolygonSet::new();
    dirty.add_poly_data(&[0, 0, 10, 0, 10, 10, 0, 10]).unwrap();
    dirty.add_poly_data(&[5, 0, 15, 0, 15, 10, 5, 10]).unwrap();
    let t = dirty.trapezoids();
    assert_area_eq(t.area(), 150.0, "dirty fracture");
    assert_no_overlap(&t);
}

#[test]
fn empty_set_fractures_to_empty() {
    assert!(PolygonSet::new().trapezoids().is_empty());
}
