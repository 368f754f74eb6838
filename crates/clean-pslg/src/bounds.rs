//! BoundBuilder (`spec.md` §4.3 lead-in): axis-aligned bounding boxes for
//! edges and points.

use crate::types::{Edge, Point};

/// An axis-aligned box `[xmin, ymin, xmax, ymax]` with `xmin <= xmax` and
/// `ymin <= ymax`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub xmin: f64,
    pub ymin: f64,
    pub xmax: f64,
    pub ymax: f64,
}

impl Bounds {
    pub fn new(xmin: f64, ymin: f64, xmax: f64, ymax: f64) -> Self {
        debug_assert!(xmin <= xmax && ymin <= ymax);
        Self {
            xmin,
            ymin,
            xmax,
            ymax,
        }
    }

    /// Degenerate box around a single point.
    pub fn point(p: Point) -> Self {
        Self::new(p.x, p.y, p.x, p.y)
    }

    /// Box enclosing two points (an edge's endpoints).
    pub fn segment(a: Point, b: Point) -> Self {
        Self::new(a.x.min(b.x), a.y.min(b.y), a.x.max(b.x), a.y.max(b.y))
    }

    /// Overlap is inclusive on box boundaries (`spec.md` §6.2).
    pub fn overlaps(&self, other: &Bounds) -> bool {
        self.xmin <= other.xmax
            && other.xmin <= self.xmax
            && self.ymin <= other.ymax
            && other.ymin <= self.ymax
    }
}

/// Bounding boxes for every edge, indexed the same as `edges`.
pub fn edge_bounds(points: &[Point], edges: &[Edge]) -> Vec<Bounds> {
    edges
        .iter()
        .map(|e| Bounds::segment(points[e.s], points[e.t]))
        .collect()
}

/// Degenerate bounding boxes for every point, indexed the same as `points`.
pub fn point_bounds(points: &[Point]) -> Vec<Bounds> {
    points.iter().map(|&p| Bounds::point(p)).collect()
}
