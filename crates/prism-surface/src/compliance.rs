//! Surface metric compliance test helpers.
//!
//! Exhaustive checks over every integer surface point of a small box.
//! Pairs grow with the fourth power of the box size, so keep boxes to a
//! handful of units per side.

use crate::solver::surface_distance;
use prism_core::{Axis, Cuboid, Query};

/// All six orderings of the axes.
pub const AXIS_ORDERS: [[Axis; 3]; 6] = [
    [Axis::X, Axis::Y, Axis::Z],
    [Axis::X, Axis::Z, Axis::Y],
    [Axis::Y, Axis::X, Axis::Z],
    [Axis::Y, Axis::Z, Axis::X],
    [Axis::Z, Axis::X, Axis::Y],
    [Axis::Z, Axis::Y, Axis::X],
];

const TOLERANCE: f64 = 1e-9;

fn all_queries(cuboid: &Cuboid) -> impl Iterator<Item = Query> + '_ {
    cuboid.surface_points().flat_map(move |a| {
        cuboid.surface_points().map(move |b| {
            Query::on(*cuboid, a.coords(), b.coords()).expect("surface points are valid")
        })
    })
}

/// Assert that `distance(p, p) == 0.0` for every surface point.
pub fn assert_distance_reflexive(cuboid: &Cuboid) {
    for p in cuboid.surface_points() {
        let query = Query::on(*cuboid, p.coords(), p.coords()).unwrap();
        let d = surface_distance(&query);
        assert!(d.abs() < TOLERANCE, "distance({p}, {p}) = {d}, expected 0.0");
    }
}

/// Assert that `distance(a, b) == distance(b, a)` for all point pairs.
pub fn assert_distance_symmetric(cuboid: &Cuboid) {
    for query in all_queries(cuboid) {
        let ab = surface_distance(&query);
        let ba = surface_distance(&query.reversed());
        assert!(
            (ab - ba).abs() < TOLERANCE,
            "{query}: forward {ab} != reverse {ba}"
        );
    }
}

/// Assert that no surface distance is shorter than the chord.
pub fn assert_distance_above_chord(cuboid: &Cuboid) {
    for query in all_queries(cuboid) {
        let d = surface_distance(&query);
        let chord = query.start().chord(query.end());
        assert!(d + TOLERANCE >= chord, "{query}: {d} shorter than chord {chord}");
    }
}

/// Assert that relabelling axes leaves every distance unchanged.
pub fn assert_axis_relabelling_invariant(cuboid: &Cuboid) {
    for query in all_queries(cuboid) {
        let d = surface_distance(&query);
        for order in AXIS_ORDERS {
            let permuted = query.permuted(order).unwrap();
            let dp = surface_distance(&permuted);
            assert!(
                (d - dp).abs() < TOLERANCE,
                "{query}: {d} becomes {dp} under axis order {order:?}"
            );
        }
    }
}

/// Run all 4 compliance checks on a box.
pub fn run_full_compliance(cuboid: &Cuboid) {
    assert_distance_reflexive(cuboid);
    assert_distance_symmetric(cuboid);
    assert_distance_above_chord(cuboid);
    assert_axis_relabelling_invariant(cuboid);
}
