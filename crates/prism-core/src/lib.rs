//! Core types for the Prism surface-geodesic workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! validated inputs every other crate works on: the box ([`Cuboid`]), its
//! faces ([`Face`]), points on its boundary ([`SurfacePoint`]), a complete
//! [`Query`], and the [`GeometryError`] raised when an input is rejected.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cuboid;
pub mod error;
pub mod point;
pub mod query;

pub use cuboid::{Axis, Cuboid, Face, Side};
pub use error::GeometryError;
pub use point::SurfacePoint;
pub use query::{Endpoint, Query};

/// Integer coordinate triple `[x, y, z]`.
pub type Coord3 = [i64; 3];
