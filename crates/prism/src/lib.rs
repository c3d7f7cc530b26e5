//! Prism: shortest paths along the surface of a rectangular box.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Prism sub-crates, and ships the `prism` command-line tool.
//!
//! # Quick start
//!
//! ```rust
//! use prism::prelude::*;
//!
//! // Opposite corners of a 1x1x1 cube: unfold two faces into a 1x2 rectangle.
//! let query = Query::new([1, 1, 1], [0, 0, 0], [1, 1, 1]).unwrap();
//! let path = shortest_path(&query);
//! assert_eq!(path.distance, 5f64.sqrt());
//! assert_eq!(format!("{:.2}", path.distance), "2.24");
//!
//! // Batches use the text protocol.
//! let runner = BatchRunner::new(BatchConfig::default()).unwrap();
//! let mut out = Vec::new();
//! runner.run("1\n30 12 10 0 0 0 30 12 10\n".as_bytes(), &mut out).unwrap();
//! assert_eq!(String::from_utf8(out).unwrap(), "Universe #1: 37.20\n");
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`geometry`] | `prism-core` | Boxes, faces, surface points, queries |
//! | [`surface`] | `prism-surface` | Canonicalization, classification, unfolding, solver |
//! | [`batch`] | `prism-batch` | Text protocol, configuration, batch runner |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Boxes, faces, surface points, and queries (`prism-core`).
pub use prism_core as geometry;

/// Canonicalization, classification, unfolding, and the solver
/// (`prism-surface`).
///
/// [`surface::surface_distance`] is the main entry point;
/// [`surface::canonical_distance`] runs the single default face pairing.
pub use prism_surface as surface;

/// Text protocol, configuration, and batch runner (`prism-batch`).
pub use prism_batch as batch;

/// Common imports for typical Prism usage.
///
/// ```rust
/// use prism::prelude::*;
/// ```
pub mod prelude {
    // Geometry
    pub use prism_core::{Axis, Cuboid, Face, Query, Side, SurfacePoint};

    // Solver
    pub use prism_surface::{
        canonical_distance, shortest_path, surface_distance, Relation, Strategy, SurfacePath,
        Unfolding,
    };

    // Batch
    pub use prism_batch::{BatchConfig, BatchReport, BatchRunner};

    // Errors
    pub use prism_batch::{BatchError, ConfigError, QueryError};
    pub use prism_core::GeometryError;
}
