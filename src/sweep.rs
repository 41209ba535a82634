// Copyright 2025 Lars Brubaker
// License: MIT
//
// The planar sweep behind every Boolean, trapezoid, and resize pass.
//
// Works in two stages over a soup of weighted segments:
//
//   1. subdivide(): split the combined edge soup of both operands at
//      every crossing, T-junction, and collinear overlap until no two
//      segment interiors touch. Split points are rounded half-to-even,
//      and since rounding can nudge a segment by one unit onto a new
//      crossing, the pass repeats to a (capped) fixpoint.
//
//   2. coverage(): sweep the non-crossing arrangement left to right,
//      maintaining the active list ordered by y, and record for each
//      segment the winding counts of operand A and operand B in the
//      region below it (west of it for verticals). Crossing a
//      non-vertical segment upward adds its weight; crossing a vertical
//      segment eastward subtracts it.
//
// In a non-crossing arrangement the winding immediately below a segment
// is constant along its whole span, so one count per segment is enough;
// every classification after this point is table lookup.

use std::cmp::Ordering;

use log::{debug, warn};

use crate::dict::{ActiveList, NodeIdx, HEAD};
use crate::geom::{self, Coord, Point, SegSeg};

/// A canonical weighted sweep segment: `p < q` lexicographically.
///
/// `wa` and `wb` are the winding contributions of operand A and operand B.
/// A weight of +1 means the source ring traversed the segment in
/// canonical (lexicographically increasing) direction.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct WeightedSeg {
    pub p: Point,
    pub q: Point,
    pub wa: i32,
    pub wb: i32,
}

impl WeightedSeg {
    #[inline]
    pub fn is_vertical(&self) -> bool {
        self.p.x == self.q.x
    }

    fn min_y(&self) -> Coord {
        self.p.y.min(self.q.y)
    }

    fn max_y(&self) -> Coord {
        self.p.y.max(self.q.y)
    }
}

/// Append one ring's edges to the soup. Zero-length edges are discarded
/// here; everything else is canonicalized. `operand_a` routes the ring's
/// winding weight to the A or the B counter.
pub fn add_ring(soup: &mut Vec<WeightedSeg>, pts: &[Point], operand_a: bool) {
    let n = pts.len();
    for i in 0..n {
        let u = pts[i];
        let v = pts[(i + 1) % n];
        if u == v {
            continue;
        }
        let (p, q, w) = if u < v { (u, v, 1) } else { (v, u, -1) };
        let (wa, wb) = if operand_a { (w, 0) } else { (0, w) };
        soup.push(WeightedSeg { p, q, wa, wb });
    }
}

/// Upper bound on subdivision passes. Real inputs converge in one or two;
/// the cap turns adversarial rounding cascades into a logged best-effort
/// arrangement instead of nontermination.
const MAX_PASSES: usize = 16;

/// Subdivide the soup into a non-crossing arrangement: no two segment
/// interiors intersect, no endpoint lies in another segment's interior,
/// exact duplicates merged with summed weights, zero-weight segments
/// dropped.
pub fn subdivide(mut segs: Vec<WeightedSeg>) -> Vec<WeightedSeg> {
    segs.retain(|s| s.p != s.q);
    for s in &mut segs {
        if s.q < s.p {
            std::mem::swap(&mut s.p, &mut s.q);
            s.wa = -s.wa;
            s.wb = -s.wb;
        }
    }

    for pass in 1..=MAX_PASSES {
        let splits = split_pass(&mut segs);
        merge_duplicates(&mut segs);
        debug!(
            "subdivision pass {}: {} split points, {} segments",
            pass,
            splits,
            segs.len()
        );
        if splits == 0 {
            return segs;
        }
    }
    warn!(
        "subdivision pass cap ({}) reached; arrangement is best-effort",
        MAX_PASSES
    );
    segs
}

/// One split-collecting sweep. Every pair with overlapping x-spans meets
/// exactly once (when the later-starting segment is inserted against the
/// x-active set), so a single pass finds all crossings; iteration is only
/// needed when rounding creates new ones. Returns applied split points.
fn split_pass(segs: &mut Vec<WeightedSeg>) -> usize {
    let n = segs.len();
    let mut order: Vec<u32> = (0..n as u32).collect();
    order.sort_unstable_by_key(|&i| (segs[i as usize].p, segs[i as usize].q));

    let mut active: Vec<u32> = Vec::new();
    let mut cuts: Vec<Vec<Point>> = vec![Vec::new(); n];

    let record = |cuts: &mut Vec<Vec<Point>>, i: u32, pt: Point| {
        let s = &segs[i as usize];
        if pt != s.p && pt != s.q && geom::in_bbox(s.p, s.q, pt) {
            cuts[i as usize].push(pt);
        }
    };

    for &i in &order {
        let si = segs[i as usize];
        let x = si.p.x;
        active.retain(|&j| segs[j as usize].q.x >= x);
        for &j in &active {
            let sj = segs[j as usize];
            if si.min_y() > sj.max_y() || sj.min_y() > si.max_y() {
                continue;
            }
            match geom::intersect(si.p, si.q, sj.p, sj.q) {
                SegSeg::None => {}
                SegSeg::Point(pt) => {
                    record(&mut cuts, i, pt);
                    record(&mut cuts, j, pt);
                }
                SegSeg::Overlap(lo, hi) => {
                    for pt in [lo, hi] {
                        record(&mut cuts, i, pt);
                        record(&mut cuts, j, pt);
                    }
                }
            }
        }
        active.push(i);
    }

    let mut applied = 0usize;
    let mut out: Vec<WeightedSeg> = Vec::with_capacity(n);
    for (i, s) in segs.iter().enumerate() {
        if cuts[i].is_empty() {
            out.push(*s);
            continue;
        }
        let pts = &mut cuts[i];
        pts.sort_unstable();
        pts.dedup();
        let mut prev = s.p;
        for &pt in pts.iter() {
            if pt == prev || pt == s.q {
                continue;
            }
            push_canonical(&mut out, prev, pt, s.wa, s.wb);
            prev = pt;
            applied += 1;
        }
        push_canonical(&mut out, prev, s.q, s.wa, s.wb);
    }
    *segs = out;
    applied
}

fn push_canonical(out: &mut Vec<WeightedSeg>, a: Point, b: Point, wa: i32, wb: i32) {
    match a.cmp(&b) {
        Ordering::Equal => {}
        Ordering::Less => out.push(WeightedSeg { p: a, q: b, wa, wb }),
        Ordering::Greater => out.push(WeightedSeg {
            p: b,
            q: a,
            wa: -wa,
            wb: -wb,
        }),
    }
}

/// Merge segments with identical endpoints (collinear overlaps arrive
/// here as exact duplicates after splitting) and drop the ones whose net
/// weight vanished; they separate nothing.
fn merge_duplicates(segs: &mut Vec<WeightedSeg>) {
    segs.sort_unstable_by_key(|s| (s.p, s.q));
    let mut out: Vec<WeightedSeg> = Vec::with_capacity(segs.len());
    for s in segs.drain(..) {
        if let Some(last) = out.last_mut() {
            if last.p == s.p && last.q == s.q {
                last.wa += s.wa;
                last.wb += s.wb;
                continue;
            }
        }
        out.push(s);
    }
    out.retain(|s| s.wa != 0 || s.wb != 0);
    *segs = out;
}

/// Winding counts in the open region below a segment (west of it for a
/// vertical segment), per operand.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Coverage {
    pub below_a: i32,
    pub below_b: i32,
}

impl Coverage {
    /// Winding just above a non-vertical segment.
    #[inline]
    pub fn above(&self, s: &WeightedSeg) -> (i32, i32) {
        (self.below_a + s.wa, self.below_b + s.wb)
    }

    /// Winding just east of a vertical segment (`below_*` holds west).
    #[inline]
    pub fn east(&self, s: &WeightedSeg) -> (i32, i32) {
        (self.below_a - s.wa, self.below_b - s.wb)
    }

    #[inline]
    pub fn below(&self) -> (i32, i32) {
        (self.below_a, self.below_b)
    }
}

/// Assign winding coverage to every segment of a non-crossing
/// arrangement. See the module comment for the sign conventions.
pub fn coverage(segs: &[WeightedSeg]) -> Vec<Coverage> {
    let n = segs.len();
    let mut cov = vec![Coverage::default(); n];

    let mut starts: Vec<u32> = Vec::new();
    let mut ends: Vec<u32> = Vec::new();
    let mut verts: Vec<u32> = Vec::new();
    let mut xs: Vec<Coord> = Vec::with_capacity(2 * n);
    for (i, s) in segs.iter().enumerate() {
        if s.is_vertical() {
            verts.push(i as u32);
            xs.push(s.p.x);
        } else {
            starts.push(i as u32);
            ends.push(i as u32);
            xs.push(s.p.x);
            xs.push(s.q.x);
        }
    }
    starts.sort_unstable_by_key(|&i| (segs[i as usize].p, segs[i as usize].q));
    ends.sort_unstable_by_key(|&i| (segs[i as usize].q.x, segs[i as usize].q.y));
    verts.sort_unstable_by_key(|&i| (segs[i as usize].p, segs[i as usize].q));
    xs.sort_unstable();
    xs.dedup();

    let mut status = ActiveList::new();
    let mut node_of: Vec<NodeIdx> = vec![HEAD; n];
    let mut fresh = vec![false; n];
    let (mut si, mut ei, mut vi) = (0usize, 0usize, 0usize);

    for &x in &xs {
        // Verticals first: their west side is the status as of x⁻, before
        // same-x removals and insertions take effect. One walk serves all
        // verticals at this x because they are processed bottom-up.
        if vi < verts.len() && segs[verts[vi] as usize].p.x == x {
            let mut at = status.first();
            let mut acc = (0i32, 0i32);
            while vi < verts.len() && segs[verts[vi] as usize].p.x == x {
                let v = verts[vi] as usize;
                vi += 1;
                let ybot = segs[v].p.y;
                while at != HEAD {
                    let k = status.key(at) as usize;
                    let s = &segs[k];
                    if geom::cmp_seg_y_at_x(s.p, s.q, x, ybot) != Ordering::Greater {
                        acc.0 += s.wa;
                        acc.1 += s.wb;
                        at = status.next(at);
                    } else {
                        break;
                    }
                }
                cov[v] = Coverage {
                    below_a: acc.0,
                    below_b: acc.1,
                };
            }
        }

        while ei < ends.len() && segs[ends[ei] as usize].q.x == x {
            let k = ends[ei] as usize;
            ei += 1;
            status.remove(node_of[k]);
        }

        let mut inserted = false;
        while si < starts.len() && segs[starts[si] as usize].p.x == x {
            let i = starts[si] as usize;
            si += 1;
            let node = status.insert(i as u32, |a, b| leq_at_x(segs, a, b, x));
            node_of[i] = node;
            fresh[i] = true;
            inserted = true;
        }

        if inserted {
            // One bottom-up walk assigns below-winding to every segment
            // inserted at this x; settled segments keep their counts.
            let mut acc = (0i32, 0i32);
            let mut at = status.first();
            while at != HEAD {
                let k = status.key(at) as usize;
                if fresh[k] {
                    cov[k] = Coverage {
                        below_a: acc.0,
                        below_b: acc.1,
                    };
                    fresh[k] = false;
                }
                acc.0 += segs[k].wa;
                acc.1 += segs[k].wb;
                at = status.next(at);
            }
        }
    }
    cov
}

/// Active-list order: y at the sweep position, steeper slope on top for
/// segments fanning out of a shared point. Both segments must span x.
pub(crate) fn leq_at_x(segs: &[WeightedSeg], a: u32, b: u32, x: Coord) -> bool {
    let sa = &segs[a as usize];
    let sb = &segs[b as usize];
    match geom::cmp_segs_at_x(sa.p, sa.q, sb.p, sb.q, x) {
        Ordering::Less => true,
        Ordering::Greater => false,
        Ordering::Equal => geom::cmp_slopes(sa.p, sa.q, sb.p, sb.q) != Ordering::Greater,
    }
}
