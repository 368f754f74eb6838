//! CrossingFinder (`spec.md` §4.3).

use crate::bounds::Bounds;
use crate::broadphase::report_self;
use crate::predicates::segments_intersect;
use crate::types::{Edge, Point};

/// Unordered pairs `(i, j)`, `i < j`, of edges that properly cross: their
/// broad-phase boxes overlap, they share no endpoint index, and the robust
/// predicate reports the closed segments intersect.
pub fn find_crossings(points: &[Point], edges: &[Edge], edge_bounds: &[Bounds]) -> Vec<(usize, usize)> {
    let mut crossings = Vec::new();
    report_self(edge_bounds, |i, j| {
        let (ei, ej) = (&edges[i], &edges[j]);
        if ei.s == ej.s || ei.s == ej.t || ei.t == ej.s || ei.t == ej.t {
            return;
        }
        if segments_intersect(points[ei.s], points[ei.t], points[ej.s], points[ej.t]) {
            crossings.push((i, j));
        }
    });
    crossings
}
