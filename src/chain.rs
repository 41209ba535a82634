// Copyright 2025 Lars Brubaker
// License: MIT
//
// Boundary-segment chaining: turns the directed segments selected by a
// Boolean pass back into closed rings.
//
// Selected segments carry the covered region on their left. At every
// junction the walk continues with the first outgoing edge clockwise
// from the reversed incoming direction (the classic left-face traversal
// rule), so shapes that touch at a vertex come apart into separate
// simple rings instead of one self-touching ring. Outer rings come out
// counter-clockwise (positive area) and holes clockwise.

use std::collections::HashMap;

use crate::geom::{self, Point};

/// A directed boundary segment; the covered region lies on its left.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DirSeg {
    pub src: Point,
    pub dst: Point,
}

impl DirSeg {
    #[inline]
    fn dir(&self) -> (i64, i64) {
        (
            self.dst.x as i64 - self.src.x as i64,
            self.dst.y as i64 - self.src.y as i64,
        )
    }
}

/// Chain directed boundary segments into closed rings. Consumes the
/// selection; returns rings as point lists with duplicate and collinear
/// vertices elided and zero-area rings dropped.
pub fn chain_rings(mut segs: Vec<DirSeg>) -> Vec<Vec<Point>> {
    if segs.is_empty() {
        return Vec::new();
    }
    segs.sort_unstable_by_key(|s| (s.src, s.dst));

    // Outgoing edges per vertex, sorted counter-clockwise by direction.
    let mut outgoing: HashMap<Point, Vec<u32>> = HashMap::new();
    for (i, s) in segs.iter().enumerate() {
        outgoing.entry(s.src).or_default().push(i as u32);
    }
    for list in outgoing.values_mut() {
        list.sort_by(|&a, &b| geom::cmp_angle(segs[a as usize].dir(), segs[b as usize].dir()));
    }

    // First outgoing edge clockwise from the reversed incoming direction:
    // the predecessor of `rev` in the counter-clockwise order, wrapping
    // to the topmost angle when nothing sorts below it.
    let continuation = |at: Point, incoming: (i64, i64)| -> Option<u32> {
        let list = outgoing.get(&at)?;
        let rev = (-incoming.0, -incoming.1);
        let mut best = None;
        for &e in list {
            if geom::cmp_angle(segs[e as usize].dir(), rev) == std::cmp::Ordering::Less {
                best = Some(e);
            }
        }
        best.or_else(|| list.last().copied())
    };

    let mut used = vec![false; segs.len()];
    let mut rings = Vec::new();

    for start in 0..segs.len() as u32 {
        if used[start as usize] {
            continue;
        }
        let mut ring = Vec::new();
        let mut cur = start;
        let mut closed = false;
        loop {
            used[cur as usize] = true;
            let s = segs[cur as usize];
            ring.push(s.src);
            match continuation(s.dst, s.dir()) {
                Some(next) if next == start => {
                    closed = true;
                    break;
                }
                Some(next) if !used[next as usize] => cur = next,
                // A used continuation other than the start means the
                // selection was inconsistent (best-effort input); drop
                // the open chain rather than loop.
                _ => break,
            }
        }
        if closed {
            let ring = simplify_ring(ring);
            if !ring.is_empty() && ring_area2(&ring) != 0 {
                rings.push(ring);
            }
        }
    }
    rings
}

/// Twice the signed area of a ring.
pub fn ring_area2(pts: &[Point]) -> i128 {
    let n = pts.len();
    let mut sum = 0i128;
    for i in 0..n {
        let a = pts[i];
        let b = pts[(i + 1) % n];
        sum += (a.x as i128) * (b.y as i128) - (b.x as i128) * (a.y as i128);
    }
    sum
}

/// Drop duplicate and collinear (including spike) vertices. Returns an
/// empty vec when the ring degenerates below a triangle.
fn simplify_ring(mut pts: Vec<Point>) -> Vec<Point> {
    loop {
        let n = pts.len();
        if n < 3 {
            return Vec::new();
        }
        let mut keep = Vec::with_capacity(n);
        let mut removed = false;
        for i in 0..n {
            let prev = pts[(i + n - 1) % n];
            let cur = pts[i];
            let next = pts[(i + 1) % n];
            if cur == prev || geom::orient(prev, cur, next) == 0 {
                removed = true;
                continue;
            }
            keep.push(cur);
        }
        if !removed {
            return keep;
        }
        pts = keep;
    }
}
