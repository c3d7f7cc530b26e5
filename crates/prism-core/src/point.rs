//! Integer points on the boundary of a box.

use crate::cuboid::Axis;
use crate::Coord3;
use std::fmt;

/// An integer point known to lie on the surface of some [`Cuboid`](crate::Cuboid).
///
/// Only [`Cuboid::locate`](crate::Cuboid::locate) and the crate-internal
/// enumeration build these, so holding one means the boundary check has
/// already passed for the box it came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SurfacePoint {
    coords: Coord3,
}

impl SurfacePoint {
    pub(crate) fn from_validated(coords: Coord3) -> Self {
        Self { coords }
    }

    /// Coordinates as `[x, y, z]`.
    pub fn coords(&self) -> Coord3 {
        self.coords
    }

    /// Coordinate along `axis`.
    pub fn get(&self, axis: Axis) -> i64 {
        self.coords[axis.index()]
    }

    /// Straight-line distance through the box interior.
    ///
    /// Always a lower bound on the surface distance between the same two
    /// points.
    pub fn chord(&self, other: &SurfacePoint) -> f64 {
        self.coords
            .iter()
            .zip(other.coords.iter())
            .map(|(&a, &b)| {
                let d = (b - a) as f64;
                d * d
            })
            .sum::<f64>()
            .sqrt()
    }
}

impl fmt::Display for SurfacePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [x, y, z] = self.coords;
        write!(f, "({x}, {y}, {z})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chord_is_euclidean() {
        let a = SurfacePoint::from_validated([0, 0, 0]);
        let b = SurfacePoint::from_validated([2, 3, 6]);
        assert_eq!(a.chord(&b), 7.0);
        assert_eq!(b.chord(&a), 7.0);
        assert_eq!(a.chord(&a), 0.0);
    }

    #[test]
    fn display_as_tuple() {
        let p = SurfacePoint::from_validated([4, 0, 2]);
        assert_eq!(p.to_string(), "(4, 0, 2)");
        assert_eq!(p.get(Axis::Z), 2);
    }
}
