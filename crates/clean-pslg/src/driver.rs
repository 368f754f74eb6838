//! SnapRoundDriver and CleanPslgDriver (`spec.md` §4.8/§4.9): the fixed-point
//! loop and the crate's public entry points.

use tracing::{debug, debug_span};

use crate::bounds::{edge_bounds, point_bounds};
use crate::crossing::find_crossings;
use crate::cutter::cut_edges;
use crate::dedup::{dedup_edges, dedup_points};
use crate::tjunction::find_t_junctions;
use crate::types::{Edge, Point, PslgError};

/// Tunables for [`clean_pslg_with_config`]. [`clean_pslg`] uses
/// [`CleanConfig::default`].
#[derive(Clone, Copy, Debug)]
pub struct CleanConfig {
    /// The fixed-point loop gives up with [`PslgError::IterationLimitExceeded`]
    /// after `max_iterations_factor * edges.len().max(1)` passes (`spec.md`
    /// §7). A well-formed PSLG reaches the fixed point in a small constant
    /// number of passes regardless of size, so this cap exists only to turn
    /// a predicate or arithmetic bug into a bounded error instead of a hang.
    pub max_iterations_factor: usize,
}

impl Default for CleanConfig {
    fn default() -> Self {
        Self {
            max_iterations_factor: 64,
        }
    }
}

fn validate(points_len: usize, edges: &[(usize, usize)], colors: &Option<&mut Vec<i32>>) -> Result<(), PslgError> {
    for (i, &(s, t)) in edges.iter().enumerate() {
        if s >= points_len {
            return Err(PslgError::PointIndexOutOfRange {
                edge: i,
                index: s,
                len: points_len,
            });
        }
        if t >= points_len {
            return Err(PslgError::PointIndexOutOfRange {
                edge: i,
                index: t,
                len: points_len,
            });
        }
        if s == t {
            return Err(PslgError::DegenerateEdge { edge: i });
        }
    }
    if let Some(colors) = colors {
        if colors.len() != edges.len() {
            return Err(PslgError::ColorLengthMismatch {
                edges: edges.len(),
                colors: colors.len(),
            });
        }
    }
    Ok(())
}

/// One pass of crossing/T-junction discovery, cutting, and deduplication.
/// Returns whether the pass changed anything.
fn run_pass(points: &mut Vec<Point>, edges: &mut Vec<Edge>) -> bool {
    let points_before = points.clone();
    let edges_before = edges.clone();

    let ebounds = edge_bounds(points, edges);
    let crossings = find_crossings(points, edges, &ebounds);
    let vbounds = point_bounds(points);
    let mut junctions = find_t_junctions(points, edges, &ebounds, &vbounds);

    debug!(
        crossings = crossings.len(),
        t_junctions = junctions.len(),
        "pass found candidates"
    );

    let rat_points = cut_edges(points, edges, &crossings, &mut junctions);
    let labels = dedup_points(points, &rat_points);
    debug!(
        new_points = rat_points.len(),
        merged = labels.is_some(),
        "pass cut and deduped points"
    );
    dedup_edges(edges, labels.as_deref());

    *points != points_before || *edges != edges_before
}

fn run_until_fixed_point(
    points: &mut Vec<Point>,
    edges: &mut Vec<Edge>,
    config: CleanConfig,
) -> Result<bool, PslgError> {
    let cap = config.max_iterations_factor * edges.len().max(1);
    let mut any_changed = false;
    for iteration in 0..cap {
        let changed = run_pass(points, edges);
        debug!(iteration, changed, "fixed-point iteration");
        if !changed {
            return Ok(any_changed);
        }
        any_changed = true;
    }
    Err(PslgError::IterationLimitExceeded { iterations: cap })
}

/// Repairs `points`/`edges`/`colors` in place so the graph has no crossing
/// edges, no T-junctions, no coincident vertices, and no duplicate edges.
///
/// Returns `Ok(true)` if anything changed, `Ok(false)` if the graph was
/// already clean. Calling this again on an already-clean graph is always a
/// no-op that returns `Ok(false)`.
pub fn clean_pslg(
    points: &mut Vec<(f64, f64)>,
    edges: &mut Vec<(usize, usize)>,
    colors: Option<&mut Vec<i32>>,
) -> Result<bool, PslgError> {
    clean_pslg_with_config(points, edges, colors, CleanConfig::default())
}

/// Like [`clean_pslg`], with an explicit [`CleanConfig`].
pub fn clean_pslg_with_config(
    points: &mut Vec<(f64, f64)>,
    edges: &mut Vec<(usize, usize)>,
    colors: Option<&mut Vec<i32>>,
    config: CleanConfig,
) -> Result<bool, PslgError> {
    let _span = debug_span!("clean_pslg", points = points.len(), edges = edges.len()).entered();

    validate(points.len(), edges, &colors)?;

    let mut internal_points: Vec<Point> = points.iter().map(|&(x, y)| Point::new(x, y)).collect();
    let mut internal_edges: Vec<Edge> = edges
        .iter()
        .enumerate()
        .map(|(i, &(s, t))| Edge::new(s, t, colors.as_deref().map(|c| c[i])))
        .collect();

    let changed = run_until_fixed_point(&mut internal_points, &mut internal_edges, config)?;

    *points = internal_points.iter().map(|p| (p.x, p.y)).collect();
    *edges = internal_edges.iter().map(|e| (e.s, e.t)).collect();
    if let Some(colors) = colors {
        *colors = internal_edges
            .iter()
            .map(|e| e.color.expect("colors were supplied, so every edge must carry one"))
            .collect();
    }

    debug!(changed, "clean_pslg finished");
    Ok(changed)
}


#[cfg(test)]
#[path = "driver/proptests.rs"]
mod proptests;
