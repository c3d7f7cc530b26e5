//! Shortest paths along the surface of a box.
//!
//! A path confined to the surface of a box bends only along edges, so
//! flattening the faces it crosses turns it into a straight segment. This
//! crate finds the shortest such segment in four steps:
//!
//! 1. [`canonicalize`]: swap and reflect axes so the start is on the floor
//! 2. [`classify()`]: same face, adjacent faces, or opposite faces
//! 3. [`unfold()`]: enumerate the 1, 3, or 20 unfoldings for that relation
//! 4. [`reduce()`]: keep the shortest candidate
//!
//! [`shortest_path`] repeats steps 1 to 4 for every face an edge or corner
//! point belongs to; [`canonical_path`] runs them once.
//!
//! # Examples
//!
//! ```
//! use prism_core::Query;
//! use prism_surface::surface_distance;
//!
//! let q = Query::new([1, 1, 1], [0, 0, 0], [1, 1, 1]).unwrap();
//! assert_eq!(format!("{:.2}", surface_distance(&q)), "2.24");
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod canonical;
pub mod classify;
pub mod frame;
pub mod reduce;
pub mod solver;
pub mod unfold;

#[cfg(test)]
pub(crate) mod compliance;

pub use canonical::{canonicalize, canonicalize_on, default_start_face};
pub use classify::{classify, classify_on, Relation};
pub use frame::Frame;
pub use reduce::{reduce, Geodesic};
pub use solver::{
    canonical_distance, canonical_path, shortest_path, surface_distance, Strategy, SurfacePath,
};
pub use unfold::{unfold, unfold_on, Candidate, Candidates, Hinge, Route, Unfolding, Wall};
