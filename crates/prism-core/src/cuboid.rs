//! The box itself: axes, faces, and boundary membership.

use crate::error::GeometryError;
use crate::point::SurfacePoint;
use crate::query::Endpoint;
use crate::Coord3;
use smallvec::SmallVec;
use std::fmt;

/// One of the three coordinate axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Axis {
    /// Width axis.
    X,
    /// Depth axis.
    Y,
    /// Height axis.
    Z,
}

impl Axis {
    /// All axes in index order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Position of this axis in a `[x, y, z]` triple.
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        };
        f.write_str(name)
    }
}

/// Which end of an axis a face is pinned to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Side {
    /// Coordinate equals 0.
    Low,
    /// Coordinate equals the box dimension.
    High,
}

/// One of the six planar faces of a box.
///
/// A face is identified by the axis whose coordinate is constant on it and
/// by which end of that axis it sits at. The face with `axis == Z` and
/// `side == Low` is the floor every canonical frame is built around.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Face {
    /// The pinned axis.
    pub axis: Axis,
    /// Low (0) or high (dimension) end of the pinned axis.
    pub side: Side,
}

impl Face {
    /// The `z = 0` face.
    pub const FLOOR: Face = Face::new(Axis::Z, Side::Low);
    /// The `z = height` face.
    pub const CEILING: Face = Face::new(Axis::Z, Side::High);

    /// Construct a face from its pinned axis and side.
    pub const fn new(axis: Axis, side: Side) -> Self {
        Self { axis, side }
    }

    /// The parallel face on the other side of the box.
    pub fn opposite(self) -> Self {
        let side = match self.side {
            Side::Low => Side::High,
            Side::High => Side::Low,
        };
        Self::new(self.axis, side)
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.side {
            Side::Low => write!(f, "{}=0", self.axis),
            Side::High => write!(f, "{}=max", self.axis),
        }
    }
}

/// An axis-aligned box with one corner at the origin.
///
/// Dimensions are strictly positive. Coordinates stay in `i64` so that the
/// unfolded images (which add up to four dimensions) cannot overflow.
///
/// # Examples
///
/// ```
/// use prism_core::{Cuboid, Face};
///
/// let cuboid = Cuboid::new(3, 4, 5).unwrap();
/// assert_eq!(cuboid.dims(), [3, 4, 5]);
///
/// // A corner sits on three faces at once.
/// assert_eq!(cuboid.faces_of(&[0, 0, 0]).len(), 3);
/// assert!(cuboid.faces_of(&[1, 1, 0]).contains(&Face::FLOOR));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cuboid {
    dims: Coord3,
}

impl Cuboid {
    /// Maximum dimension size along any axis.
    pub const MAX_DIM: i64 = i32::MAX as i64;

    /// Create a box with the given width, depth, and height.
    ///
    /// Returns `Err(GeometryError::InvalidDimension)` if any dimension is
    /// not positive, or `Err(GeometryError::DimensionTooLarge)` if one
    /// exceeds [`MAX_DIM`](Self::MAX_DIM).
    pub fn new(width: i64, depth: i64, height: i64) -> Result<Self, GeometryError> {
        Self::from_dims([width, depth, height])
    }

    /// Create a box from a `[width, depth, height]` triple.
    pub fn from_dims(dims: Coord3) -> Result<Self, GeometryError> {
        for axis in Axis::ALL {
            let value = dims[axis.index()];
            if value <= 0 {
                return Err(GeometryError::InvalidDimension { axis, value });
            }
            if value > Self::MAX_DIM {
                return Err(GeometryError::DimensionTooLarge {
                    axis,
                    value,
                    max: Self::MAX_DIM,
                });
            }
        }
        Ok(Self { dims })
    }

    /// Rebuild from dimensions taken from another validated box.
    pub(crate) fn from_trusted(dims: Coord3) -> Self {
        Self { dims }
    }

    /// Dimensions as `[width, depth, height]`.
    pub fn dims(&self) -> Coord3 {
        self.dims
    }

    /// Dimension along `axis`.
    pub fn dim(&self, axis: Axis) -> i64 {
        self.dims[axis.index()]
    }

    /// Extent along x.
    pub fn width(&self) -> i64 {
        self.dims[0]
    }

    /// Extent along y.
    pub fn depth(&self) -> i64 {
        self.dims[1]
    }

    /// Extent along z.
    pub fn height(&self) -> i64 {
        self.dims[2]
    }

    /// Faces containing `coords`, in axis order (x, then y, then z).
    ///
    /// Empty if the point is strictly inside the box or outside it on
    /// any axis. Edge points return two faces, corners three.
    pub fn faces_of(&self, coords: &Coord3) -> SmallVec<[Face; 3]> {
        let mut faces = SmallVec::new();
        if !self.contains(coords) {
            return faces;
        }
        for axis in Axis::ALL {
            let v = coords[axis.index()];
            if v == 0 {
                faces.push(Face::new(axis, Side::Low));
            } else if v == self.dim(axis) {
                faces.push(Face::new(axis, Side::High));
            }
        }
        faces
    }

    /// Whether every coordinate lies within `[0, dim]`.
    pub fn contains(&self, coords: &Coord3) -> bool {
        Axis::ALL
            .iter()
            .all(|&axis| (0..=self.dim(axis)).contains(&coords[axis.index()]))
    }

    /// Whether `coords` lies on the boundary of the box.
    pub fn is_on_surface(&self, coords: &Coord3) -> bool {
        !self.faces_of(coords).is_empty()
    }

    /// Validate `coords` as a surface point of this box.
    ///
    /// `endpoint` is carried into the error so that callers can tell which
    /// half of a query was rejected.
    pub fn locate(&self, coords: Coord3, endpoint: Endpoint) -> Result<SurfacePoint, GeometryError> {
        if self.is_on_surface(&coords) {
            Ok(SurfacePoint::from_validated(coords))
        } else {
            Err(GeometryError::PointOffSurface {
                endpoint,
                coords,
                dims: self.dims,
            })
        }
    }

    /// Every integer point on the surface, in x-major order.
    pub fn surface_points(&self) -> impl Iterator<Item = SurfacePoint> + '_ {
        let [w, d, h] = self.dims;
        (0..=w)
            .flat_map(move |x| (0..=d).map(move |y| (x, y)))
            .flat_map(move |(x, y)| {
                let on_side = x == 0 || x == w || y == 0 || y == d;
                // Interior columns only touch the floor and the ceiling.
                let step = if on_side { 1 } else { h as usize };
                (0..=h)
                    .step_by(step)
                    .map(move |z| SurfacePoint::from_validated([x, y, z]))
            })
    }

    /// Number of integer points on the surface.
    pub fn surface_point_count(&self) -> u64 {
        let [w, d, h] = self.dims.map(|v| v as u64);
        (w + 1) * (d + 1) * (h + 1) - (w - 1) * (d - 1) * (h - 1)
    }
}

impl fmt::Display for Cuboid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [w, d, h] = self.dims;
        write!(f, "{w}x{d}x{h}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ── Constructor tests ───────────────────────────────────────

    #[test]
    fn new_rejects_zero_dimension() {
        assert_eq!(
            Cuboid::new(3, 0, 2),
            Err(GeometryError::InvalidDimension {
                axis: Axis::Y,
                value: 0
            })
        );
    }

    #[test]
    fn new_rejects_negative_dimension() {
        assert!(matches!(
            Cuboid::new(-1, 2, 2),
            Err(GeometryError::InvalidDimension { axis: Axis::X, .. })
        ));
    }

    #[test]
    fn new_rejects_dims_exceeding_max() {
        let big = Cuboid::MAX_DIM + 1;
        assert!(matches!(
            Cuboid::new(1, 1, big),
            Err(GeometryError::DimensionTooLarge { axis: Axis::Z, .. })
        ));
        assert!(Cuboid::new(1, 1, Cuboid::MAX_DIM).is_ok());
    }

    // ── Face membership ─────────────────────────────────────────

    #[test]
    fn faces_of_face_interior() {
        let c = Cuboid::new(4, 4, 4).unwrap();
        assert_eq!(c.faces_of(&[2, 2, 4]).as_slice(), &[Face::CEILING]);
        assert_eq!(
            c.faces_of(&[0, 1, 3]).as_slice(),
            &[Face::new(Axis::X, Side::Low)]
        );
    }

    #[test]
    fn faces_of_edge_and_corner() {
        let c = Cuboid::new(2, 3, 4).unwrap();
        assert_eq!(
            c.faces_of(&[2, 1, 4]).as_slice(),
            &[Face::new(Axis::X, Side::High), Face::CEILING]
        );
        assert_eq!(c.faces_of(&[2, 3, 0]).len(), 3);
    }

    #[test]
    fn interior_and_exterior_points_have_no_faces() {
        let c = Cuboid::new(3, 3, 3).unwrap();
        assert!(c.faces_of(&[1, 1, 1]).is_empty());
        assert!(c.faces_of(&[0, 4, 1]).is_empty());
        assert!(c.faces_of(&[-1, 0, 0]).is_empty());
    }

    #[test]
    fn locate_reports_endpoint() {
        let c = Cuboid::new(3, 3, 3).unwrap();
        assert_eq!(
            c.locate([1, 2, 1], Endpoint::Start),
            Err(GeometryError::PointOffSurface {
                endpoint: Endpoint::Start,
                coords: [1, 2, 1],
                dims: [3, 3, 3],
            })
        );
        assert_eq!(c.locate([0, 2, 1], Endpoint::End).unwrap().coords(), [0, 2, 1]);
    }

    #[test]
    fn opposite_face_flips_side() {
        assert_eq!(Face::FLOOR.opposite(), Face::CEILING);
        assert_eq!(Face::CEILING.opposite(), Face::FLOOR);
    }

    // ── Surface enumeration ─────────────────────────────────────

    #[test]
    fn unit_cube_surface_is_its_corners() {
        let c = Cuboid::new(1, 1, 1).unwrap();
        assert_eq!(c.surface_points().count(), 8);
        assert_eq!(c.surface_point_count(), 8);
    }

    proptest! {
        #[test]
        fn surface_points_match_count_and_lie_on_surface(
            w in 1i64..6, d in 1i64..6, h in 1i64..6,
        ) {
            let c = Cuboid::new(w, d, h).unwrap();
            let points: Vec<_> = c.surface_points().collect();
            prop_assert_eq!(points.len() as u64, c.surface_point_count());
            for p in &points {
                prop_assert!(c.is_on_surface(&p.coords()), "{:?} not on surface", p);
            }
        }
    }
}
