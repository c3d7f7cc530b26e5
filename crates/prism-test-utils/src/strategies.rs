//! Proptest strategies that generate only valid boxes and queries.

use prism_core::{Coord3, Cuboid, Query};
use proptest::prelude::*;

/// Boxes with every side in `1..=max_dim`.
pub fn arb_cuboid(max_dim: i64) -> impl Strategy<Value = Cuboid> {
    (1..=max_dim, 1..=max_dim, 1..=max_dim)
        .prop_map(|(w, d, h)| Cuboid::new(w, d, h).expect("positive dims"))
}

/// Points on the surface of `cuboid`, edges and corners included.
pub fn arb_surface_coords(cuboid: Cuboid) -> impl Strategy<Value = Coord3> {
    let dims = cuboid.dims();
    (
        0usize..3,
        any::<bool>(),
        0..=dims[0],
        0..=dims[1],
        0..=dims[2],
    )
        .prop_map(move |(axis, high, x, y, z)| pin([x, y, z], dims, axis, high))
}

/// Points strictly inside one face of `cuboid`. Needs every side >= 2.
fn arb_face_interior_coords(cuboid: Cuboid) -> impl Strategy<Value = Coord3> {
    let dims = cuboid.dims();
    (
        0usize..3,
        any::<bool>(),
        1..dims[0],
        1..dims[1],
        1..dims[2],
    )
        .prop_map(move |(axis, high, x, y, z)| pin([x, y, z], dims, axis, high))
}

fn pin(mut coords: Coord3, dims: Coord3, axis: usize, high: bool) -> Coord3 {
    coords[axis] = if high { dims[axis] } else { 0 };
    coords
}

/// Any valid query on a box with sides up to `max_dim`.
pub fn arb_query(max_dim: i64) -> impl Strategy<Value = Query> {
    arb_cuboid(max_dim)
        .prop_flat_map(|c| (Just(c), arb_surface_coords(c), arb_surface_coords(c)))
        .prop_map(|(c, a, b)| Query::on(c, a, b).expect("generated points lie on the surface"))
}

/// Queries whose points are not on any edge or corner.
pub fn arb_face_interior_query(max_dim: i64) -> impl Strategy<Value = Query> {
    (2..=max_dim.max(2), 2..=max_dim.max(2), 2..=max_dim.max(2))
        .prop_map(|(w, d, h)| Cuboid::new(w, d, h).expect("positive dims"))
        .prop_flat_map(|c| {
            (
                Just(c),
                arb_face_interior_coords(c),
                arb_face_interior_coords(c),
            )
        })
        .prop_map(|(c, a, b)| Query::on(c, a, b).expect("generated points lie on the surface"))
}
