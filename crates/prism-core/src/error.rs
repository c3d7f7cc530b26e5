//! Error types for box and point validation.

use crate::cuboid::Axis;
use crate::query::Endpoint;
use crate::Coord3;
use std::fmt;

/// Errors arising from constructing a box, a surface point, or a query.
///
/// All variants are detected before any geometry runs, so a rejected
/// query never produces a partial result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeometryError {
    /// A box dimension is zero or negative.
    InvalidDimension {
        /// Axis of the offending dimension.
        axis: Axis,
        /// The rejected value.
        value: i64,
    },
    /// A box dimension exceeds the supported maximum.
    DimensionTooLarge {
        /// Axis of the offending dimension.
        axis: Axis,
        /// The rejected value.
        value: i64,
        /// Largest accepted value.
        max: i64,
    },
    /// A point lies outside the box or strictly inside it.
    PointOffSurface {
        /// Which end of the query the point was given as.
        endpoint: Endpoint,
        /// The offending coordinates.
        coords: Coord3,
        /// Box dimensions the point was checked against.
        dims: Coord3,
    },
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimension { axis, value } => {
                write!(f, "invalid box dimension along {axis}: {value} (must be > 0)")
            }
            Self::DimensionTooLarge { axis, value, max } => {
                write!(f, "box dimension along {axis} too large: {value} (max {max})")
            }
            Self::PointOffSurface {
                endpoint,
                coords,
                dims,
            } => {
                let [x, y, z] = coords;
                let [w, d, h] = dims;
                write!(
                    f,
                    "{endpoint} point ({x}, {y}, {z}) is not on the surface of a {w}x{d}x{h} box"
                )
            }
        }
    }
}

impl std::error::Error for GeometryError {}
