//! TJunctionFinder (`spec.md` §4.4).

use crate::bounds::Bounds;
use crate::broadphase::report_cross;
use crate::predicates::segments_intersect;
use crate::types::{Edge, Junction, Point};

/// `(edge, vertex)` pairs where `vertex` lies on the closed segment of
/// `edge` (including endpoint-collinear configurations) and is not one of
/// `edge`'s own endpoints.
pub fn find_t_junctions(
    points: &[Point],
    edges: &[Edge],
    edge_bounds: &[Bounds],
    vertex_bounds: &[Bounds],
) -> Vec<Junction> {
    let mut found = Vec::new();
    report_cross(edge_bounds, vertex_bounds, |i, v| {
        let e = &edges[i];
        if v == e.s || v == e.t {
            return;
        }
        if segments_intersect(points[e.s], points[e.t], points[v], points[v]) {
            found.push(Junction { edge: i, point: v });
        }
    });
    found
}
