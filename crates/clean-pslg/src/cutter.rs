//! EdgeCutter (`spec.md` §4.5): turns crossings into exact rational
//! junctions, merges them with the pre-seeded T-junctions, and rewrites each
//! cut edge into a lexicographically consistent chain of sub-edges.

use std::collections::HashSet;

use num_rational::BigRational;

use crate::rational::{point_to_rational, RationalPoint};
use crate::rational_intersect;
use crate::types::{Edge, Junction, Point};

fn lex_cmp(a: Point, b: Point) -> std::cmp::Ordering {
    a.x.partial_cmp(&b.x)
        .unwrap()
        .then_with(|| a.y.partial_cmp(&b.y).unwrap())
}

/// Converts each crossing into a junction on both of its edges (skipping
/// crossings whose segments turn out parallel/coincident under exact
/// arithmetic, per §4.5 step 1), sorts all junctions, rewrites `edges` in
/// place, and returns the newly constructed rational points (to be appended
/// to the float point table by the point deduper).
pub fn cut_edges(
    float_points: &[Point],
    edges: &mut Vec<Edge>,
    crossings: &[(usize, usize)],
    junctions: &mut Vec<Junction>,
) -> Vec<RationalPoint> {
    let mut rat_points: Vec<RationalPoint> = Vec::new();

    for &(e, f) in crossings {
        let edge_e = edges[e];
        let edge_f = edges[f];
        let intersection = rational_intersect::intersect(
            float_points[edge_e.s],
            float_points[edge_e.t],
            float_points[edge_f.s],
            float_points[edge_f.t],
        );
        let Some(point) = intersection else {
            // Parallel/coincident under exact arithmetic: left for the
            // collinear T-junction path to resolve (§4.5 step 1, §7).
            continue;
        };
        let idx = float_points.len() + rat_points.len();
        rat_points.push(point);
        junctions.push(Junction { edge: e, point: idx });
        junctions.push(Junction { edge: f, point: idx });
    }

    let point_xy = |idx: usize| -> (BigRational, BigRational) {
        if idx < float_points.len() {
            point_to_rational(float_points[idx])
        } else {
            let p = &rat_points[idx - float_points.len()];
            (p.x.clone(), p.y.clone())
        }
    };

    junctions.sort_by(|a, b| {
        a.edge.cmp(&b.edge).then_with(|| {
            let (ax, ay) = point_xy(a.point);
            let (bx, by) = point_xy(b.point);
            ax.cmp(&bx).then_with(|| ay.cmp(&by))
        })
    });

    let mut rewritten: Vec<Edge> = Vec::with_capacity(edges.len());
    let mut cut: HashSet<usize> = HashSet::new();

    // Scan back to front: within one edge's contiguous run, descending index
    // means descending (x, y), which is the direction from the lex-larger
    // endpoint (`s` below, after lex-orienting) down to the lex-smaller one.
    let mut end = junctions.len();
    while end > 0 {
        let e = junctions[end - 1].edge;
        let mut start = end - 1;
        while start > 0 && junctions[start - 1].edge == e {
            start -= 1;
        }

        cut.insert(e);
        let edge = edges[e];
        let (s, t) = if lex_cmp(float_points[edge.s], float_points[edge.t]).is_lt() {
            (edge.t, edge.s)
        } else {
            (edge.s, edge.t)
        };

        let mut last = s;
        for k in (start..end).rev() {
            let next = junctions[k].point;
            rewritten.push(Edge::new(last, next, edge.color));
            last = next;
        }
        rewritten.push(Edge::new(last, t, edge.color));

        end = start;
    }

    for (idx, edge) in edges.iter().enumerate() {
        if !cut.contains(&idx) {
            rewritten.push(*edge);
        }
    }

    *edges = rewritten;
    rat_points
}
