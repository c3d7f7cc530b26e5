//! Oriented working copy of a query.
//!
//! A [`Frame`] holds the box dimensions and both points after some
//! sequence of axis swaps and reflections. Every transform returns a new
//! frame; nothing is mutated in place, so each step of canonicalization
//! can be tested on its own.

use prism_core::{Axis, Coord3, Face, Query, Side};
use smallvec::SmallVec;

/// Box dimensions plus start and end coordinates in one orientation.
///
/// Swaps and reflections are isometries of the box surface, so every
/// frame derived from a query has the same surface distance as the query.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Frame {
    dims: Coord3,
    start: Coord3,
    end: Coord3,
}

impl Frame {
    /// Frame in the query's own orientation.
    pub fn from_query(query: &Query) -> Self {
        Self {
            dims: query.cuboid().dims(),
            start: query.start().coords(),
            end: query.end().coords(),
        }
    }

    /// Box dimensions `[x, y, z]` in this orientation.
    pub fn dims(&self) -> Coord3 {
        self.dims
    }

    /// Start point in this orientation.
    pub fn start(&self) -> Coord3 {
        self.start
    }

    /// End point in this orientation.
    pub fn end(&self) -> Coord3 {
        self.end
    }

    /// Extent along `axis`.
    pub fn dim(&self, axis: Axis) -> i64 {
        self.dims[axis.index()]
    }

    /// Exchange two axes in the box and in both points.
    pub fn swap_axes(self, a: Axis, b: Axis) -> Self {
        let (i, j) = (a.index(), b.index());
        let swap = |mut v: Coord3| {
            v.swap(i, j);
            v
        };
        Self {
            dims: swap(self.dims),
            start: swap(self.start),
            end: swap(self.end),
        }
    }

    /// Mirror both points across the mid-plane of `axis` (`v -> dim - v`).
    pub fn reflect(self, axis: Axis) -> Self {
        let i = axis.index();
        let dim = self.dims[i];
        let flip = |mut v: Coord3| {
            v[i] = dim - v[i];
            v
        };
        Self {
            dims: self.dims,
            start: flip(self.start),
            end: flip(self.end),
        }
    }

    /// Faces the end point lies on, in axis order.
    pub fn end_faces(&self) -> SmallVec<[Face; 3]> {
        faces_of(&self.dims, &self.end)
    }

    /// Faces the start point lies on, in axis order.
    pub fn start_faces(&self) -> SmallVec<[Face; 3]> {
        faces_of(&self.dims, &self.start)
    }
}

fn faces_of(dims: &Coord3, point: &Coord3) -> SmallVec<[Face; 3]> {
    Axis::ALL
        .iter()
        .filter_map(|&axis| {
            let v = point[axis.index()];
            if v == 0 {
                Some(Face::new(axis, Side::Low))
            } else if v == dims[axis.index()] {
                Some(Face::new(axis, Side::High))
            } else {
                None
            }
        })
        .collect()
}
