//! Exact rational segment-segment intersection solver (`spec.md` §4.5 step 1
//! / §6.2).

use num_rational::BigRational;
use num_traits::Zero;

use crate::rational::{point_to_rational, RationalPoint};
use crate::types::Point;

/// The exact intersection of segments `(a, b)` and `(c, d)`, or `None` if
/// the two lines are parallel (including exactly coincident) and so have no
/// unique intersection point.
///
/// Uses the standard line-line intersection determinant formula, computed
/// entirely in exact rational arithmetic so the result is the true
/// intersection, not a floating-point approximation of it.
pub fn intersect(a: Point, b: Point, c: Point, d: Point) -> Option<RationalPoint> {
    let (x1, y1) = point_to_rational(a);
    let (x2, y2) = point_to_rational(b);
    let (x3, y3) = point_to_rational(c);
    let (x4, y4) = point_to_rational(d);

    let denom = &(&x1 - &x2) * &(&y3 - &y4) - &(&y1 - &y2) * &(&x3 - &x4);
    if denom.is_zero() {
        return None;
    }

    let cross12: BigRational = &x1 * &y2 - &y1 * &x2;
    let cross34: BigRational = &x3 * &y4 - &y3 * &x4;

    let px = (&cross12 * &(&x3 - &x4) - &(&x1 - &x2) * &cross34) / &denom;
    let py = (&cross12 * &(&y3 - &y4) - &(&y1 - &y2) * &cross34) / &denom;

    Some(RationalPoint::new(px, py))
}
