//! Test utilities for Prism development.
//!
//! Provides hand-checked [`scenarios`] with known surface distances and
//! proptest [`strategies`] that only generate valid queries.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod scenarios;
pub mod strategies;

pub use scenarios::Scenario;
pub use strategies::{arb_cuboid, arb_face_interior_query, arb_query, arb_surface_coords};
