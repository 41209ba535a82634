// Copyright 2025 Lars Brubaker
// Shared test utilities for polybool-rust tests.

#![allow(dead_code)]

use polybool_rust::{Point, PolygonSet};

/// Axis-aligned square/rectangle set from corner to corner.
pub fn rect(x0: i32, y0: i32, x1: i32, y1: i32) -> PolygonSet {
    let mut set = PolygonSet::new();
    set.add_polygon(&[
        Point::new(x0, y0),
        Point::new(x1, y0),
        Point::new(x1, y1),
        Point::new(x0, y1),
    ])
    .expect("rect is a valid polygon");
    set
}

/// The reference 10x10 square at the origin used across suites.
pub fn square10() -> PolygonSet {
    rect(0, 0, 10, 10)
}

pub fn assert_area_eq(actual: f64, expected: f64, label: &str) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "{}: expected area {}, got {} (diff={})",
        label,
        expected,
        actual,
        (actual - expected).abs()
    );
}

/// Covered fraction of the unit cell with lower-left corner (x, y).
/// Two sets covering the same region agree on this for every cell, so a
/// sampled grid of these values works as a point-membership check.
pub fn cell_cover(set: &PolygonSet, x: i32, y: i32) -> f64 {
    set.intersection(&rect(x, y, x + 1, y + 1)).area()
}

/// Membership-sample both sets over a grid and demand they agree.
pub fn assert_same_region(a: &PolygonSet, b: &PolygonSet, x0: i32, y0: i32, x1: i32, y1: i32) {
    for x in x0..x1 {
        for y in y0..y1 {
            let ca = cell_cover(a, x, y);
            let cb = cell_cover(b, x, y);
            assert!(
                (ca - cb).abs() < 1e-9,
                "cell ({}, {}): cover {} vs {}",
                x,
                y,
                ca,
                cb
            );
        }
    }
}

/// Sum of the per-ring signed areas without renormalizing; on a clean
/// set this must equal `area()`.
pub fn signed_ring_area_sum(set: &PolygonSet) -> f64 {
    set.polygons().iter().map(|p| p.signed_area()).sum()
}
