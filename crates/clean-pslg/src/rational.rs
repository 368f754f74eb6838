//! Exact rational points and conservative float bounds for them (RatBounds,
//! `spec.md` §4.2).

use num_rational::BigRational;
use num_traits::{FromPrimitive, ToPrimitive};

use crate::bounds::Bounds;
use crate::float_round::{down, up};
use crate::types::Point;

/// An exact rational 2D point, constructed only by the edge cutter as the
/// intersection of two input segments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RationalPoint {
    pub x: BigRational,
    pub y: BigRational,
}

impl RationalPoint {
    pub fn new(x: BigRational, y: BigRational) -> Self {
        Self { x, y }
    }

    /// Nearest-double image of this point (§4.2 step 1 applied per axis).
    pub fn to_float(&self) -> Point {
        Point::new(to_f64(&self.x), to_f64(&self.y))
    }
}

/// Exact rational value of a float coordinate, for comparisons against
/// [`RationalPoint`] coordinates (the cutter sorts junctions by comparing
/// float and rational points in the same exact order, per `spec.md` §4.5
/// step 2).
pub fn point_to_rational(p: Point) -> (BigRational, BigRational) {
    (to_rational(p.x), to_rational(p.y))
}

pub fn to_rational(f: f64) -> BigRational {
    BigRational::from_f64(f).expect("finite coordinate must have an exact rational value")
}

/// Nearest-double conversion, round-to-even on ties (the rounding `num-rational`
/// implements for `to_f64`).
pub fn to_f64(r: &BigRational) -> f64 {
    r.to_f64()
        .expect("rational value constructed from finite coordinates must fit in an f64 range")
}

/// `RatBounds`: `[lo, hi]` with `lo <= r <= hi` and `hi` equal to `lo` or the
/// immediate next float above `lo`.
pub fn bound_rat(r: &BigRational) -> (f64, f64) {
    let f = to_f64(r);
    let rf = to_rational(f);
    match rf.cmp(r) {
        std::cmp::Ordering::Less => (f, up(f)),
        std::cmp::Ordering::Greater => (down(f), f),
        std::cmp::Ordering::Equal => (f, f),
    }
}

/// Conservative axis-aligned box for a rational point, built from
/// [`bound_rat`] applied to each coordinate independently.
pub fn rational_point_bounds(p: &RationalPoint) -> Bounds {
    let (xlo, xhi) = bound_rat(&p.x);
    let (ylo, yhi) = bound_rat(&p.y);
    Bounds::new(xlo, ylo, xhi, yhi)
}
