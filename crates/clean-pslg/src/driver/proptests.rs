//! Property tests for `clean_pslg`: idempotence and input-order invariance.
//!
//! Random PSLGs are drawn from a small integer grid so crossings and
//! coincident vertices actually occur often, the same way `geom2::rand`
//! jitters polygon vertices on a bounded radius to keep degenerate cases
//! reachable rather than vanishingly rare.

use std::collections::BTreeSet;

use proptest::prelude::*;

use crate::driver::clean_pslg;

fn arb_pslg(max_points: usize, max_edges: usize) -> impl Strategy<Value = (Vec<(f64, f64)>, Vec<(usize, usize)>)> {
    (3..=max_points).prop_flat_map(move |n| {
        let points = prop::collection::vec((-3i32..=3, -3i32..=3), n)
            .prop_map(|coords| coords.into_iter().map(|(x, y)| (x as f64, y as f64)).collect::<Vec<_>>());
        let edges = prop::collection::vec((0..n, 0..n), 0..=max_edges)
            .prop_map(|pairs| pairs.into_iter().filter(|&(s, t)| s != t).collect::<Vec<_>>());
        (points, edges)
    })
}

/// A geometric edge set, keyed by endpoint coordinates rather than indices,
/// so it can be compared across two runs whose point tables were built in a
/// different order.
fn geometry_key(points: &[(f64, f64)], edges: &[(usize, usize)]) -> BTreeSet<((u64, u64), (u64, u64))> {
    fn bits(p: (f64, f64)) -> (u64, u64) {
        (p.0.to_bits(), p.1.to_bits())
    }
    edges
        .iter()
        .map(|&(s, t)| {
            let (a, b) = (bits(points[s]), bits(points[t]));
            if a <= b {
                (a, b)
            } else {
                (b, a)
            }
        })
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn cleaning_twice_is_a_no_op((points, edges) in arb_pslg(8, 10)) {
        let mut p1 = points.clone();
        let mut e1 = edges.clone();
        clean_pslg(&mut p1, &mut e1, None).unwrap();

        let mut p2 = p1.clone();
        let mut e2 = e1.clone();
        let changed_again = clean_pslg(&mut p2, &mut e2, None).unwrap();

        prop_assert!(!changed_again);
        prop_assert_eq!(p1, p2);
        prop_assert_eq!(e1, e2);
    }

    #[test]
    fn edge_order_does_not_change_the_cleaned_geometry(
        (points, edges) in arb_pslg(8, 10),
        seed in any::<u64>(),
    ) {
        use rand::rngs::StdRng;
        use rand::seq::SliceRandom;
        use rand::SeedableRng;

        let mut shuffled = edges.clone();
        let mut rng = StdRng::seed_from_u64(seed);
        shuffled.shuffle(&mut rng);

        let mut p1 = points.clone();
        let mut e1 = edges.clone();
        clean_pslg(&mut p1, &mut e1, None).unwrap();

        let mut p2 = points.clone();
        let mut e2 = shuffled;
        clean_pslg(&mut p2, &mut e2, None).unwrap();

        prop_assert_eq!(geometry_key(&p1, &e1), geometry_key(&p2, &e2));
    }
}
