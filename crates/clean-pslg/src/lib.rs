//! Snap-rounding engine for planar straight-line graphs (PSLGs).
//!
//! Given a set of 2D points and a set of undirected segments referencing
//! them by index, [`clean_pslg`] repairs the graph in place so that no two
//! edges properly cross, no vertex sits in the open interior of an edge, no
//! two vertices coincide after floating-point rounding, and no two edges are
//! exact duplicates.
//!
//! The repair is a fixed-point loop: each pass finds crossings and
//! T-junctions, cuts edges at exact rational intersection points, rounds the
//! new points back to floats, merges points whose conservative rounded boxes
//! overlap, and deduplicates edges. Passes repeat until a pass makes no
//! further change.

mod bounds;
mod broadphase;
mod crossing;
mod cutter;
mod dedup;
mod driver;
mod float_round;
mod predicates;
mod rational;
mod rational_intersect;
mod tjunction;
mod types;
mod union_find;

pub use driver::{clean_pslg, clean_pslg_with_config, CleanConfig};
pub use types::PslgError;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common imports for callers driving the engine directly.
pub mod prelude {
    pub use crate::driver::{clean_pslg, clean_pslg_with_config, CleanConfig};
    pub use crate::types::PslgError;
}
