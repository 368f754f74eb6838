//! Broad-phase box-intersection reporter (`spec.md` §6.2).
//!
//! The algorithm itself treats this as an external collaborator with a
//! narrow contract ("report every overlapping pair of boxes at least once");
//! this module supplies the one concrete implementation the crate ships, a
//! sweep over boxes ordered by `xmin` with an active-set pruned by `xmax`.
//! Self-contained rather than pulled from a spatial-index crate, for the
//! same reason `geom4::volume` gives for hand-rolling its triangulation: the
//! contract is narrow and the algorithm is short enough to audit directly.

use crate::bounds::Bounds;

/// Reports every unordered pair `(i, j)`, `i < j`, of overlapping boxes in
/// `boxes` at least once.
pub fn report_self(boxes: &[Bounds], mut report: impl FnMut(usize, usize)) {
    let mut order: Vec<usize> = (0..boxes.len()).collect();
    order.sort_by(|&a, &b| boxes[a].xmin.partial_cmp(&boxes[b].xmin).unwrap());

    let mut active: Vec<usize> = Vec::new();
    for &i in &order {
        let xmin = boxes[i].xmin;
        active.retain(|&j| boxes[j].xmax >= xmin);
        for &j in &active {
            if boxes[i].overlaps(&boxes[j]) {
                report(i.min(j), i.max(j));
            }
        }
        active.push(i);
    }
}

/// Reports every pair `(i, j)` with `a[i]` overlapping `b[j]` at least once.
pub fn report_cross(a: &[Bounds], b: &[Bounds], mut report: impl FnMut(usize, usize)) {
    #[derive(Clone, Copy)]
    enum Side {
        A(usize),
        B(usize),
    }

    let mut events: Vec<Side> = Vec::with_capacity(a.len() + b.len());
    events.extend((0..a.len()).map(Side::A));
    events.extend((0..b.len()).map(Side::B));
    events.sort_by(|&x, &y| {
        let xmin = |s: Side| match s {
            Side::A(i) => a[i].xmin,
            Side::B(i) => b[i].xmin,
        };
        xmin(x).partial_cmp(&xmin(y)).unwrap()
    });

    let mut active_a: Vec<usize> = Vec::new();
    let mut active_b: Vec<usize> = Vec::new();
    for ev in events {
        match ev {
            Side::A(i) => {
                let xmin = a[i].xmin;
                active_b.retain(|&j| b[j].xmax >= xmin);
                for &j in &active_b {
                    if a[i].overlaps(&b[j]) {
                        report(i, j);
                    }
                }
                active_a.push(i);
            }
            Side::B(j) => {
                let xmin = b[j].xmin;
                active_a.retain(|&i| a[i].xmax >= xmin);
                for &i in &active_a {
                    if a[i].overlaps(&b[j]) {
                        report(i, j);
                    }
                }
                active_b.push(j);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn brute_self(boxes: &[Bounds]) -> BTreeSet<(usize, usize)> {
        let mut out = BTreeSet::new();
        for i in 0..boxes.len() {
            for j in (i + 1)..boxes.len() {
                if boxes[i].overlaps(&boxes[j]) {
                    out.insert((i, j));
                }
            }
        }
        out
    }

    #[test]
    fn self_mode_matches_brute_force() {
        let boxes = vec![
            Bounds::new(0.0, 0.0, 1.0, 1.0),
            Bounds::new(0.5, 0.5, 1.5, 1.5),
            Bounds::new(2.0, 2.0, 3.0, 3.0),
            Bounds::new(-1.0, -1.0, 0.0, 0.0),
            Bounds::new(0.9, -5.0, 1.0, 5.0),
        ];
        let expected = brute_self(&boxes);
        let mut found = BTreeSet::new();
        report_self(&boxes, |i, j| {
            found.insert((i, j));
        });
        assert_eq!(found, expected);
    }

    #[test]
    fn cross_mode_matches_brute_force() {
        let a = vec![
            Bounds::new(0.0, 0.0, 1.0, 1.0),
            Bounds::new(5.0, 5.0, 6.0, 6.0),
        ];
        let b = vec![
            Bounds::new(0.5, 0.5, 0.5, 0.5),
            Bounds::new(10.0, 10.0, 10.0, 10.0),
            Bounds::new(5.5, 5.5, 5.5, 5.5),
        ];
        let mut expected = BTreeSet::new();
        for i in 0..a.len() {
            for j in 0..b.len() {
                if a[i].overlaps(&b[j]) {
                    expected.insert((i, j));
                }
            }
        }
        let mut found = BTreeSet::new();
        report_cross(&a, &b, |i, j| {
            found.insert((i, j));
        });
        assert_eq!(found, expected);
    }

    #[test]
    fn empty_inputs_report_nothing() {
        let mut count = 0;
        report_self(&[], |_, _| count += 1);
        report_cross(&[], &[], |_, _| count += 1);
        assert_eq!(count, 0);
    }
}
