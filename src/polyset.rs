// Copyright 2025 Lars Brubaker
// License: MIT
//
// Polygon and PolygonSet: the value types every engine operation consumes
// and produces. A set exclusively owns its rings; operations copy, never
// alias, so independent sets can be used from independent threads. After
// any engine operation a set is clean: pairwise non-overlapping simple
// rings, holes wound clockwise, no zero-area rings.

use crate::chain;
use crate::error::PolyError;
use crate::geom::{Coord, Point};
use crate::offset;
use crate::ops::{self, BoolOp};
use crate::trapezoid;

/// Corner treatment for [`PolygonSet::resize`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CornerStyle {
    /// One straight cut across each splayed corner. Cheap; the default
    /// choice for mask work.
    Chamfer,
    /// Approximate each corner with an arc fan; the segment count per
    /// corner scales with the turning angle.
    Round,
}

/// An implicitly closed ring of at least 3 integer points.
///
/// Rings are stored exactly as supplied. Under the engine's non-zero
/// winding rule a lone ring fills identically in either orientation;
/// clockwise rings nested inside counter-clockwise ones act as holes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Polygon {
    pts: Vec<Point>,
}

impl Polygon {
    pub(crate) fn from_points(pts: Vec<Point>) -> Self {
        Polygon { pts }
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.pts
    }

    /// Twice the signed shoelace area, exact.
    #[inline]
    pub fn signed_area2(&self) -> i128 {
        chain::ring_area2(&self.pts)
    }

    /// Signed shoelace area: positive counter-clockwise, negative for
    /// holes as the engine emits them.
    #[inline]
    pub fn signed_area(&self) -> f64 {
        self.signed_area2() as f64 * 0.5
    }
}

/// An unordered bag of rings representing a planar region under the
/// non-zero winding rule.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PolygonSet {
    polys: Vec<Polygon>,
}

impl PolygonSet {
    pub fn new() -> Self {
        PolygonSet { polys: Vec::new() }
    }

    pub(crate) fn from_rings(rings: Vec<Vec<Point>>) -> Self {
        PolygonSet {
            polys: rings.into_iter().map(Polygon::from_points).collect(),
        }
    }

    // ─────────────────────────── Construction ─────────────────────────────

    /// Append a ring. No self-intersection check happens here; dirty
    /// rings are legal input and get resolved by the first operation that
    /// sweeps them.
    pub fn add_polygon(&mut self, points: &[Point]) -> Result<(), PolyError> {
        if points.len() < 3 {
            return Err(PolyError::DegenerateInput(
                "polygon needs at least 3 vertices",
            ));
        }
        self.polys.push(Polygon::from_points(points.to_vec()));
        Ok(())
    }

    /// Append a ring from flat interleaved x,y coordinates.
    pub fn add_poly_data(&mut self, data: &[Coord]) -> Result<(), PolyError> {
        if data.len() % 2 != 0 {
            return Err(PolyError::DegenerateInput(
                "flat coordinate list has odd length",
            ));
        }
        if data.len() < 6 {
            return Err(PolyError::DegenerateInput(
                "polygon needs at least 3 vertices",
            ));
        }
        let pts: Vec<Point> = data
            .chunks_exact(2)
            .map(|c| Point::new(c[0], c[1]))
            .collect();
        self.polys.push(Polygon::from_points(pts));
        Ok(())
    }

    // ─────────────────────────── Accessors ────────────────────────────────

    #[inline]
    pub fn polygon_count(&self) -> usize {
        self.polys.len()
    }

    #[inline]
    pub fn polygons(&self) -> &[Polygon] {
        &self.polys
    }

    /// Ring `index` as flat interleaved x,y coordinates; an out-of-range
    /// index yields an empty list rather than failing.
    pub fn poly_data(&self, index: usize) -> Vec<Coord> {
        match self.polys.get(index) {
            Some(poly) => poly
                .points()
                .iter()
                .flat_map(|p| [p.x, p.y])
                .collect(),
            None => Vec::new(),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.polys.is_empty()
    }

    pub fn clear(&mut self) {
        self.polys.clear();
    }

    /// Covered area under the non-zero winding rule, with overlapping
    /// input rings counted once: the set is swept clean first, so dirty
    /// input still reports the true covered area.
    pub fn area(&self) -> f64 {
        if self.polys.is_empty() {
            return 0.0;
        }
        let clean = ops::normalize(self);
        let sum: i128 = clean.polys.iter().map(|p| p.signed_area2()).sum();
        sum as f64 * 0.5
    }

    // ─────────────────────────── Operations ───────────────────────────────

    /// Apply any of the four set operations; the named methods below are
    /// thin wrappers over this.
    pub fn boolean(&self, other: &PolygonSet, op: BoolOp) -> PolygonSet {
        ops::boolean(self, other, op)
    }

    /// A ∪ B into a fresh clean set; neither input is touched.
    pub fn union(&self, other: &PolygonSet) -> PolygonSet {
        ops::boolean(self, other, BoolOp::Union)
    }

    /// A ∩ B into a fresh clean set.
    pub fn intersection(&self, other: &PolygonSet) -> PolygonSet {
        ops::boolean(self, other, BoolOp::Intersection)
    }

    /// A − B into a fresh clean set.
    pub fn difference(&self, other: &PolygonSet) -> PolygonSet {
        ops::boolean(self, other, BoolOp::Difference)
    }

    /// A ⊕ B (exclusive or) into a fresh clean set.
    pub fn symmetric_difference(&self, other: &PolygonSet) -> PolygonSet {
        ops::boolean(self, other, BoolOp::Xor)
    }

    /// In-place union: `self := self ∪ other`. The one documented
    /// mutating convenience; everything else is pure.
    pub fn merge(&mut self, other: &PolygonSet) {
        *self = self.union(other);
    }

    /// Self-union cleanup of this set, returned fresh.
    pub fn normalized(&self) -> PolygonSet {
        ops::normalize(self)
    }

    /// In-place self-union cleanup.
    pub fn normalize(&mut self) {
        *self = ops::normalize(self);
    }

    /// Fracture into non-overlapping trapezoids exactly covering the set.
    pub fn trapezoids(&self) -> PolygonSet {
        trapezoid::trapezoids(self)
    }

    /// Grow (positive) or shrink (negative) the covered region by
    /// `distance`, with the given corner treatment. Regions that shrink
    /// away vanish silently.
    pub fn resize(
        &self,
        distance: f64,
        corners: CornerStyle,
        segments_per_circle: u32,
    ) -> Result<PolygonSet, PolyError> {
        offset::resize(self, distance, corners, segments_per_circle)
    }
}
