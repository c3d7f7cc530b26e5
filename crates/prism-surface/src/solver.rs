//! End-to-end surface distance for a validated query.
//!
//! [`canonical_path`] runs the pipeline once, with the default face
//! choice for each point. That choice is enough for points in the interior
//! of a face but can miss the shortest path when a point sits on an edge
//! or corner: the path may leave through a face the default never
//! considers. [`shortest_path`] runs the pipeline for every face of the
//! start point crossed with every face of the end point (at most 3 x 3
//! pairings) and keeps the minimum.

use crate::canonical::{canonicalize, canonicalize_on};
use crate::classify::{classify, classify_on, Relation};
use crate::reduce::{reduce, Geodesic};
use crate::unfold::{unfold, unfold_on, Unfolding};
use prism_core::{Face, Query};
use std::fmt;

/// A shortest surface path and where it was found.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfacePath {
    /// Path length.
    pub distance: f64,
    /// Winning unfolding; always `Some` for a validated query.
    pub unfolding: Option<Unfolding>,
    /// Face the start point was assigned to.
    pub start_face: Face,
    /// Relation of the end face to the start face.
    pub relation: Relation,
}

impl SurfacePath {
    fn from_geodesic(geodesic: Geodesic, start_face: Face, relation: Relation) -> Self {
        Self {
            distance: geodesic.distance,
            unfolding: geodesic.unfolding,
            start_face,
            relation,
        }
    }
}

/// Shortest path over every face pairing of the two points.
///
/// # Examples
///
/// ```
/// use prism_core::Query;
/// use prism_surface::shortest_path;
///
/// let q = Query::new([30, 12, 10], [0, 0, 0], [30, 12, 10]).unwrap();
/// let path = shortest_path(&q);
/// assert_eq!(path.distance, 1384f64.sqrt());
/// ```
pub fn shortest_path(query: &Query) -> SurfacePath {
    let mut best = canonical_path(query);
    for start_face in query.cuboid().faces_of(&query.start().coords()) {
        let frame = canonicalize_on(query, start_face);
        for end_face in frame.end_faces() {
            let geodesic = reduce(&unfold_on(&frame, end_face));
            if geodesic.distance < best.distance {
                best = SurfacePath::from_geodesic(geodesic, start_face, classify_on(end_face));
            }
        }
    }
    best
}

/// Length of [`shortest_path`].
pub fn surface_distance(query: &Query) -> f64 {
    shortest_path(query).distance
}

/// Single pass with the default face choices.
pub fn canonical_path(query: &Query) -> SurfacePath {
    let start_face = crate::canonical::default_start_face(query);
    let frame = canonicalize(query);
    let relation = classify(&frame);
    let geodesic = reduce(&unfold(&frame, relation));
    SurfacePath::from_geodesic(geodesic, start_face, relation)
}

/// Length of [`canonical_path`].
pub fn canonical_distance(query: &Query) -> f64 {
    canonical_path(query).distance
}

/// Which solver a caller wants.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Every face pairing ([`shortest_path`]).
    #[default]
    Exhaustive,
    /// Default face choices only ([`canonical_path`]).
    Canonical,
}

impl Strategy {
    /// Solve `query` with this strategy.
    pub fn solve(self, query: &Query) -> SurfacePath {
        match self {
            Strategy::Exhaustive => shortest_path(query),
            Strategy::Canonical => canonical_path(query),
        }
    }

    /// Distance for `query` with this strategy.
    pub fn distance(self, query: &Query) -> f64 {
        self.solve(query).distance
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Exhaustive => f.write_str("exhaustive"),
            Strategy::Canonical => f.write_str("canonical"),
        }
    }
}
