// Copyright 2025 Lars Brubaker
// License: MIT
//
// Vertical-slab trapezoid fracturing.
//
// The input is normalized first, so the active list over its boundary
// alternates strictly between uncovered and covered: walking it bottom-up
// pairs edges as (lower, upper) bounds of covered intervals. A trapezoid
// is cut whenever the pair bounding an interval changes; while a pair
// survives consecutive events the slab keeps extending, so long straight
// runs come out as one trapezoid instead of one per vertex.

use std::collections::{BTreeMap, BTreeSet};

use crate::chain;
use crate::dict::{ActiveList, NodeIdx, HEAD};
use crate::geom::{self, Coord, Point};
use crate::ops;
use crate::polyset::PolygonSet;
use crate::sweep::{self, WeightedSeg};

/// Fracture a set into non-overlapping trapezoids (with vertical parallel
/// sides) that exactly cover it.
pub(crate) fn trapezoids(set: &PolygonSet) -> PolygonSet {
    let clean = ops::normalize(set);
    if clean.is_empty() {
        return clean;
    }

    // Clean-boundary soup; vertical edges become the implicit slab sides.
    let mut soup = Vec::new();
    for poly in clean.polygons() {
        sweep::add_ring(&mut soup, poly.points(), true);
    }
    let segs: Vec<WeightedSeg> = soup.into_iter().filter(|s| !s.is_vertical()).collect();

    let n = segs.len();
    let mut starts: Vec<u32> = (0..n as u32).collect();
    starts.sort_unstable_by_key(|&i| (segs[i as usize].p, segs[i as usize].q));
    let mut ends: Vec<u32> = (0..n as u32).collect();
    ends.sort_unstable_by_key(|&i| (segs[i as usize].q.x, segs[i as usize].q.y));
    let mut xs: Vec<Coord> = segs.iter().flat_map(|s| [s.p.x, s.q.x]).collect();
    xs.sort_unstable();
    xs.dedup();

    let mut status = ActiveList::new();
    let mut node_of: Vec<NodeIdx> = vec![HEAD; n];
    let mut open: BTreeMap<(u32, u32), Coord> = BTreeMap::new();
    let mut rings: Vec<Vec<Point>> = Vec::new();
    let (mut si, mut ei) = (0usize, 0usize);

    for &x in &xs {
        while ei < ends.len() && segs[ends[ei] as usize].q.x == x {
            let k = ends[ei] as usize;
            ei += 1;
            status.remove(node_of[k]);
        }
        while si < starts.len() && segs[starts[si] as usize].p.x == x {
            let i = starts[si] as usize;
            si += 1;
            node_of[i] = status.insert(i as u32, |a, b| sweep::leq_at_x(&segs, a, b, x));
        }

        // Pair the active edges bottom-up into covered intervals.
        let keys = status.keys();
        let mut now: BTreeSet<(u32, u32)> = BTreeSet::new();
        for ch in keys.chunks(2) {
            if ch.len() == 2 {
                now.insert((ch[0], ch[1]));
            }
        }

        let mut still: BTreeMap<(u32, u32), Coord> = BTreeMap::new();
        for (&pair, &x0) in &open {
            if now.contains(&pair) {
                still.insert(pair, x0);
            } else if let Some(r) =
                trap_ring(&segs[pair.0 as usize], &segs[pair.1 as usize], x0, x)
            {
                rings.push(r);
            }
        }
        for &pair in &now {
            still.entry(pair).or_insert(x);
        }
        open = still;
    }
    // The final event empties the status, so every pair has been closed.

    PolygonSet::from_rings(rings)
}

/// The counter-clockwise trapezoid between `lo` and `hi` over [x0, x1].
/// Slab-boundary heights are exact at segment endpoints and rounded
/// half-to-even elsewhere. Degenerate slivers collapse to None.
fn trap_ring(lo: &WeightedSeg, hi: &WeightedSeg, x0: Coord, x1: Coord) -> Option<Vec<Point>> {
    if x0 >= x1 {
        return None;
    }
    let corners = [
        Point::new(x0, geom::y_at_x_rounded(lo.p, lo.q, x0)),
        Point::new(x1, geom::y_at_x_rounded(lo.p, lo.q, x1)),
        Point::new(x1, geom::y_at_x_rounded(hi.p, hi.q, x1)),
        Point::new(x0, geom::y_at_x_rounded(hi.p, hi.q, x0)),
    ];
    let mut ring: Vec<Point> = Vec::with_capacity(4);
    for &c in &corners {
        if ring.last() != Some(&c) {
            ring.push(c);
        }
    }
    while ring.len() > 1 && ring.first() == ring.last() {
        ring.pop();
    }
    if ring.len() < 3 || chain::ring_area2(&ring) <= 0 {
        return None;
    }
    Some(ring)
}
