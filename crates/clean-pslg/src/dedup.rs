//! PointDeduper and EdgeDeduper (`spec.md` §4.6/§4.7).

use crate::bounds::point_bounds;
use crate::broadphase::report_self;
use crate::rational::{rational_point_bounds, RationalPoint};
use crate::types::{Edge, Point};
use crate::union_find::{compact_labels, UnionFind};

/// Extends `float_points` with the rounded images of `rational_points`,
/// links points whose conservative rounded boxes overlap, and compacts the
/// table to one entry per equivalence class.
///
/// Returns `None` (the "none" sentinel of §4.6 step 6) if no two points
/// were ever linked — the caller treats this as "no relabeling needed",
/// distinct from an empty `Some` (which cannot occur: a returned `Some`
/// always reflects at least one merge, so it always has fewer labels than
/// `float_points.len()` before truncation).
pub fn dedup_points(
    float_points: &mut Vec<Point>,
    rational_points: &[RationalPoint],
) -> Option<Vec<usize>> {
    let mut bounds = point_bounds(float_points);
    for p in rational_points {
        bounds.push(rational_point_bounds(p));
        float_points.push(p.to_float());
    }

    let n = float_points.len();
    let mut uf = UnionFind::new(n);
    report_self(&bounds, |i, j| uf.link(i, j));

    if uf.unions_performed == 0 {
        return None;
    }

    let (labels, compacted_len) = compact_labels(&mut uf, n);
    let mut compacted = vec![Point::zeros(); compacted_len];
    for i in 0..n {
        if uf.find(i) == i {
            compacted[labels[i]] = float_points[i];
        }
    }
    *float_points = compacted;
    Some(labels)
}

/// Relabels endpoints (if `labels` is present), canonicalizes endpoint
/// order, lex-sorts (including color), and drops duplicate and zero-length
/// edges.
pub fn dedup_edges(edges: &mut Vec<Edge>, labels: Option<&[usize]>) {
    if edges.is_empty() {
        return;
    }

    for e in edges.iter_mut() {
        if let Some(labels) = labels {
            e.s = labels[e.s];
            e.t = labels[e.t];
        }
        *e = e.canonical();
    }

    edges.sort_by(|a, b| a.s.cmp(&b.s).then(a.t.cmp(&b.t)).then(a.color.cmp(&b.color)));
    edges.retain(|e| !e.is_degenerate());
    edges.dedup_by(|a, b| a.s == b.s && a.t == b.t && a.color == b.color);
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_rational::BigRational;

    fn pt(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn no_merges_returns_none_sentinel() {
        let mut points = vec![pt(0.0, 0.0), pt(5.0, 5.0)];
        let labels = dedup_points(&mut points, &[]);
        assert!(labels.is_none());
        assert_eq!(points.len(), 2);
    }

    #[test]
    fn overlapping_points_merge() {
        let mut points = vec![pt(0.0, 0.0), pt(0.0, 0.0), pt(5.0, 5.0)];
        let labels = dedup_points(&mut points, &[]).unwrap();
        assert_eq!(points.len(), 2);
        assert_eq!(labels[0], labels[1]);
        assert_ne!(labels[0], labels[2]);
    }

    #[test]
    fn rational_points_are_rounded_and_appended() {
        let mut points = vec![pt(0.0, 0.0)];
        let rat = RationalPoint::new(
            BigRational::new(1.into(), 3.into()),
            BigRational::new(2.into(), 3.into()),
        );
        let labels = dedup_points(&mut points, std::slice::from_ref(&rat));
        assert!(labels.is_none());
        assert_eq!(points.len(), 2);
        assert!((points[1].x - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn duplicate_edges_collapse_to_one() {
        let mut edges = vec![Edge::new(0, 1, None), Edge::new(1, 0, None)];
        dedup_edges(&mut edges, None);
        assert_eq!(edges, vec![Edge::new(0, 1, None)]);
    }

    #[test]
    fn colored_duplicates_stay_separate() {
        let mut edges = vec![Edge::new(0, 1, Some(7)), Edge::new(1, 0, Some(5))];
        dedup_edges(&mut edges, None);
        assert_eq!(edges.len(), 2);
        assert_eq!(edges[0], Edge::new(0, 1, Some(5)));
        assert_eq!(edges[1], Edge::new(0, 1, Some(7)));
    }

    #[test]
    fn zero_length_edges_are_dropped() {
        let mut edges = vec![Edge::new(2, 2, None), Edge::new(0, 1, None)];
        dedup_edges(&mut edges, None);
        assert_eq!(edges, vec![Edge::new(0, 1, None)]);
    }

    #[test]
    fn relabeling_is_applied_before_canonicalization() {
        let mut edges = vec![Edge::new(3, 0, None)];
        let labels = vec![1, 1, 2, 0];
        dedup_edges(&mut edges, Some(&labels));
        assert_eq!(edges, vec![Edge::new(0, 1, None)]);
    }
}
