//! Robust segment-segment intersection predicate (`spec.md` §4.3/§4.4/§6.2).
//!
//! Built on `geometry-predicates`'s adaptive `orient2d`, which is exact in
//! sign for any finite `f64` input — the same crate choice
//! `rgeometry` makes for the same problem (see `DESIGN.md`).

use geometry_predicates::orient2d;

use crate::types::Point;

fn direction(p: Point, q: Point, r: Point) -> f64 {
    orient2d([p.x, p.y], [q.x, q.y], [r.x, r.y])
}

fn sign(v: f64) -> i32 {
    if v > 0.0 {
        1
    } else if v < 0.0 {
        -1
    } else {
        0
    }
}

/// True iff `r` lies within the axis-aligned box spanned by `p` and `q`.
/// Callers must already know `p`, `q`, `r` are collinear.
fn on_segment(p: Point, q: Point, r: Point) -> bool {
    r.x >= p.x.min(q.x) && r.x <= p.x.max(q.x) && r.y >= p.y.min(q.y) && r.y <= p.y.max(q.y)
}

/// Whether the closed segments `[a, b]` and `[c, d]` intersect, including
/// collinear overlaps and endpoint-on-interior touches. A degenerate
/// "segment" with `c == d` is a valid input and tests point-on-segment
/// membership of `c` on `[a, b]`.
pub fn segments_intersect(a: Point, b: Point, c: Point, d: Point) -> bool {
    let d1 = sign(direction(c, d, a));
    let d2 = sign(direction(c, d, b));
    let d3 = sign(direction(a, b, c));
    let d4 = sign(direction(a, b, d));

    if ((d1 > 0 && d2 < 0) || (d1 < 0 && d2 > 0)) && ((d3 > 0 && d4 < 0) || (d3 < 0 && d4 > 0)) {
        return true;
    }
    if d1 == 0 && on_segment(c, d, a) {
        return true;
    }
    if d2 == 0 && on_segment(c, d, b) {
        return true;
    }
    if d3 == 0 && on_segment(a, b, c) {
        return true;
    }
    if d4 == 0 && on_segment(a, b, d) {
        return true;
    }
    false
}
