// Copyright 2025 Lars Brubaker
// License: MIT
//
// The Boolean driver: gathers both operands into one weighted segment
// soup, runs the subdivision and coverage sweeps, selects the boundary
// segments where the operator's coverage flips, and chains them back
// into rings. Inputs are never touched; the result is always clean.

use log::debug;

use crate::chain::{self, DirSeg};
use crate::polyset::PolygonSet;
use crate::sweep;

/// The four set operations. Coverage of a point follows the non-zero
/// winding rule per operand:
///
/// | operator             | covered iff        |
/// |----------------------|--------------------|
/// | `Union`              | inA or inB         |
/// | `Intersection`       | inA and inB        |
/// | `Difference`         | inA and not inB    |
/// | `Xor`                | inA xor inB        |
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BoolOp {
    Union,
    Intersection,
    Difference,
    Xor,
}

#[inline]
fn covered(op: BoolOp, wind: (i32, i32)) -> bool {
    let a = wind.0 != 0;
    let b = wind.1 != 0;
    match op {
        BoolOp::Union => a || b,
        BoolOp::Intersection => a && b,
        BoolOp::Difference => a && !b,
        BoolOp::Xor => a != b,
    }
}

/// Apply `op` to two polygon sets and return a fresh, clean result.
pub(crate) fn boolean(a: &PolygonSet, b: &PolygonSet, op: BoolOp) -> PolygonSet {
    // Empty-operand results that need no sweep at all.
    match op {
        BoolOp::Intersection if a.is_empty() || b.is_empty() => return PolygonSet::new(),
        BoolOp::Difference if a.is_empty() => return PolygonSet::new(),
        _ => {
            if a.is_empty() && b.is_empty() {
                return PolygonSet::new();
            }
        }
    }

    let mut soup = Vec::new();
    for poly in a.polygons() {
        sweep::add_ring(&mut soup, poly.points(), true);
    }
    for poly in b.polygons() {
        sweep::add_ring(&mut soup, poly.points(), false);
    }
    let segs = sweep::subdivide(soup);
    let cov = sweep::coverage(&segs);

    // Emit every segment across which coverage flips, directed so the
    // covered side is on the left: west-covered verticals run north,
    // above-covered slab segments run left to right.
    let mut boundary = Vec::new();
    for (s, c) in segs.iter().zip(cov.iter()) {
        if s.is_vertical() {
            let west = covered(op, c.below());
            let east = covered(op, c.east(s));
            if west != east {
                boundary.push(if west {
                    DirSeg { src: s.p, dst: s.q }
                } else {
                    DirSeg { src: s.q, dst: s.p }
                });
            }
        } else {
            let below = covered(op, c.below());
            let above = covered(op, c.above(s));
            if below != above {
                boundary.push(if above {
                    DirSeg { src: s.p, dst: s.q }
                } else {
                    DirSeg { src: s.q, dst: s.p }
                });
            }
        }
    }

    debug!(
        "{:?}: {} arrangement segments, {} boundary segments",
        op,
        segs.len(),
        boundary.len()
    );
    PolygonSet::from_rings(chain::chain_rings(boundary))
}

/// Self-union: resolves self-intersections and overlaps of a single set
/// into clean rings. Every public operation funnels dirty input through
/// this before measuring or fracturing it.
pub(crate) fn normalize(set: &PolygonSet) -> PolygonSet {
    boolean(set, &PolygonSet::new(), BoolOp::Union)
}
