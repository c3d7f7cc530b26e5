//! A validated shortest-path query.

use crate::cuboid::{Axis, Cuboid};
use crate::error::GeometryError;
use crate::point::SurfacePoint;
use crate::Coord3;
use std::fmt;

/// Which end of a query a point was supplied as.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// The point the path leaves from.
    Start,
    /// The point the path arrives at.
    End,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Start => f.write_str("start"),
            Endpoint::End => f.write_str("end"),
        }
    }
}

/// A box plus two points on its surface.
///
/// Construction validates everything the solver relies on: positive
/// dimensions and both points on the boundary. Queries are immutable;
/// the transforms below return new queries.
///
/// # Examples
///
/// ```
/// use prism_core::{GeometryError, Query};
///
/// let q = Query::new([1, 1, 1], [0, 0, 0], [1, 1, 1]).unwrap();
/// assert_eq!(q.cuboid().dims(), [1, 1, 1]);
///
/// // The centre of the box is not on its surface.
/// let err = Query::new([2, 2, 2], [0, 0, 0], [1, 1, 1]).unwrap_err();
/// assert!(matches!(err, GeometryError::PointOffSurface { .. }));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Query {
    cuboid: Cuboid,
    start: SurfacePoint,
    end: SurfacePoint,
}

impl Query {
    /// Validate dimensions, then the start point, then the end point.
    pub fn new(dims: Coord3, start: Coord3, end: Coord3) -> Result<Self, GeometryError> {
        let cuboid = Cuboid::from_dims(dims)?;
        Self::on(cuboid, start, end)
    }

    /// Build a query on an already-validated box.
    pub fn on(cuboid: Cuboid, start: Coord3, end: Coord3) -> Result<Self, GeometryError> {
        let start = cuboid.locate(start, Endpoint::Start)?;
        let end = cuboid.locate(end, Endpoint::End)?;
        Ok(Self { cuboid, start, end })
    }

    /// Build a query from the nine protocol integers
    /// `x y z x1 y1 z1 x2 y2 z2`.
    pub fn from_values(values: [i64; 9]) -> Result<Self, GeometryError> {
        let [x, y, z, x1, y1, z1, x2, y2, z2] = values;
        Self::new([x, y, z], [x1, y1, z1], [x2, y2, z2])
    }

    /// The box.
    pub fn cuboid(&self) -> &Cuboid {
        &self.cuboid
    }

    /// The start point.
    pub fn start(&self) -> &SurfacePoint {
        &self.start
    }

    /// The end point.
    pub fn end(&self) -> &SurfacePoint {
        &self.end
    }

    /// The same query travelled in the other direction.
    pub fn reversed(&self) -> Self {
        Self {
            cuboid: self.cuboid,
            start: self.end,
            end: self.start,
        }
    }

    /// Relabel axes: axis `i` of the result is `order[i]` of `self`.
    ///
    /// Returns `None` unless `order` is a permutation of the three axes.
    pub fn permuted(&self, order: [Axis; 3]) -> Option<Self> {
        let mut seen = [false; 3];
        for axis in order {
            seen[axis.index()] = true;
        }
        if !seen.iter().all(|&s| s) {
            return None;
        }
        let pick = |v: Coord3| order.map(|axis| v[axis.index()]);
        Some(Self {
            cuboid: Cuboid::from_trusted(pick(self.cuboid.dims())),
            start: SurfacePoint::from_validated(pick(self.start.coords())),
            end: SurfacePoint::from_validated(pick(self.end.coords())),
        })
    }

    /// Mirror both points across the mid-plane of `axis`.
    pub fn reflected(&self, axis: Axis) -> Self {
        let i = axis.index();
        let dim = self.cuboid.dim(axis);
        let flip = |mut v: Coord3| {
            v[i] = dim - v[i];
            v
        };
        Self {
            cuboid: self.cuboid,
            start: SurfacePoint::from_validated(flip(self.start.coords())),
            end: SurfacePoint::from_validated(flip(self.end.coords())),
        }
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} box, {} -> {}", self.cuboid, self.start, self.end)
    }
}
