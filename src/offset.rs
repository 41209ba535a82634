// Copyright 2025 Lars Brubaker
// License: MIT
//
// The resize engine: uniform grow/shrink of a polygon set.
//
// Every boundary edge of the normalized input contributes a band
// rectangle extruded to the side the boundary moves toward: right of
// travel for grow, left of travel for shrink, since rings keep the
// covered region on their left. Where consecutive rectangles splay
// apart at a vertex the gap is filled with a chamfer triangle or an arc
// fan. The band is then united with (grow) or subtracted from (shrink)
// the input, and that Boolean pass is also what re-normalizes the
// self-overlaps a naive per-edge offset produces on concave outlines.

use std::f64::consts::TAU;

use crate::chain;
use crate::error::PolyError;
use crate::geom::{self, Coord, Point};
use crate::ops::{self, BoolOp};
use crate::polyset::{CornerStyle, PolygonSet};

pub(crate) fn resize(
    set: &PolygonSet,
    distance: f64,
    corners: CornerStyle,
    segments_per_circle: u32,
) -> Result<PolygonSet, PolyError> {
    if segments_per_circle == 0 {
        return Err(PolyError::InvalidParameter(
            "segments_per_circle must be at least 1",
        ));
    }
    if !distance.is_finite() {
        return Err(PolyError::InvalidParameter("resize distance must be finite"));
    }

    let clean = ops::normalize(set);
    if clean.is_empty() || distance == 0.0 {
        return Ok(clean);
    }

    let grow = distance > 0.0;
    let d = distance.abs();
    let mut band: Vec<Vec<Point>> = Vec::new();

    for poly in clean.polygons() {
        let pts = poly.points();
        let n = pts.len();
        for i in 0..n {
            let u = pts[i];
            let v = pts[(i + 1) % n];
            let w = pts[(i + 2) % n];

            let (ox, oy) = match edge_offset(u, v, d, grow) {
                Some(o) => o,
                None => continue,
            };
            push_ring(
                &mut band,
                vec![u, v, offset_pt(v, ox, oy), offset_pt(u, ox, oy)],
            );

            // The rectangles of (u,v) and (v,w) splay apart at v when the
            // boundary turns away from the offset side; the opposite
            // corners overlap instead and the Boolean pass absorbs them.
            let turn = geom::cross(u, v, w);
            let gap = if grow { turn > 0 } else { turn < 0 };
            if gap {
                push_ring(&mut band, corner_fill(u, v, w, d, grow, corners, segments_per_circle));
            }
        }
    }

    let band_set = PolygonSet::from_rings(band);
    let result = if grow {
        ops::boolean(&clean, &band_set, BoolOp::Union)
    } else {
        ops::boolean(&clean, &band_set, BoolOp::Difference)
    };
    Ok(result)
}

/// Offset vector for the edge u→v: distance d to the right of travel for
/// grow, to the left for shrink. None for a degenerate edge.
fn edge_offset(u: Point, v: Point, d: f64, grow: bool) -> Option<(f64, f64)> {
    let dx = v.x as f64 - u.x as f64;
    let dy = v.y as f64 - u.y as f64;
    let len = dx.hypot(dy);
    if len == 0.0 {
        return None;
    }
    let (ux, uy) = (dx / len, dy / len);
    if grow {
        Some((d * uy, -(d * ux)))
    } else {
        Some((-(d * uy), d * ux))
    }
}

/// The gap-filling polygon at vertex v between the offset rectangles of
/// u→v and v→w: a chamfer triangle, or an arc fan with
/// ceil(segments_per_circle * theta / 2pi) segments (at least one).
fn corner_fill(
    u: Point,
    v: Point,
    w: Point,
    d: f64,
    grow: bool,
    corners: CornerStyle,
    segments_per_circle: u32,
) -> Vec<Point> {
    let (n1x, n1y) = match edge_offset(u, v, d, grow) {
        Some(o) => o,
        None => return Vec::new(),
    };
    let (n2x, n2y) = match edge_offset(v, w, d, grow) {
        Some(o) => o,
        None => return Vec::new(),
    };

    match corners {
        CornerStyle::Chamfer => {
            vec![v, offset_pt(v, n1x, n1y), offset_pt(v, n2x, n2y)]
        }
        CornerStyle::Round => {
            let t1x = v.x as f64 - u.x as f64;
            let t1y = v.y as f64 - u.y as f64;
            let t2x = w.x as f64 - v.x as f64;
            let t2y = w.y as f64 - v.y as f64;
            let cr = t1x * t2y - t1y * t2x;
            let dot = t1x * t2x + t1y * t2y;
            let theta = cr.abs().atan2(dot);
            let k = ((segments_per_circle as f64 * theta / TAU).ceil() as u32).max(1);
            let step = theta.copysign(cr) / k as f64;
            let mut ring = vec![v];
            for i in 0..k {
                let (sin, cos) = (step * i as f64).sin_cos();
                ring.push(offset_pt(v, n1x * cos - n1y * sin, n1x * sin + n1y * cos));
            }
            // Land the last fan point exactly on the next rectangle's
            // corner so rounding cannot open a seam between them.
            ring.push(offset_pt(v, n2x, n2y));
            ring
        }
    }
}

#[inline]
fn offset_pt(p: Point, ox: f64, oy: f64) -> Point {
    Point::new(round_coord(p.x as f64 + ox), round_coord(p.y as f64 + oy))
}

#[inline]
fn round_coord(v: f64) -> Coord {
    v.round_ties_even()
        .clamp(Coord::MIN as f64, Coord::MAX as f64) as Coord
}

/// Dedup, orient counter-clockwise, and keep the ring only if it still
/// has area. Band polygons must all wind positively so they stack rather
/// than cancel under the non-zero rule.
fn push_ring(rings: &mut Vec<Vec<Point>>, pts: Vec<Point>) {
    let mut ring: Vec<Point> = Vec::with_capacity(pts.len());
    for p in pts {
        if ring.last() != Some(&p) {
            ring.push(p);
        }
    }
    while ring.len() > 1 && ring.first() == ring.last() {
        ring.pop();
    }
    if ring.len() < 3 {
        return;
    }
    let a2 = chain::ring_area2(&ring);
    if a2 == 0 {
        return;
    }
    if a2 < 0 {
        ring.reverse();
    }
    rings.push(ring);
}
