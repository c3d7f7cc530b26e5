//! Classify a canonical frame by where the end point sits.

use crate::frame::Frame;
use prism_core::{Axis, Face, Side};
use std::fmt;

/// How the end face relates to the floor of a canonical frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Relation {
    /// Both points on the floor.
    SameFace,
    /// End on a side wall sharing an edge with the floor.
    AdjacentFace,
    /// End on the ceiling.
    OppositeFace,
}

impl Relation {
    /// Number of unfoldings enumerated for this relation.
    pub fn candidate_count(self) -> usize {
        match self {
            Relation::SameFace => 1,
            Relation::AdjacentFace => 3,
            Relation::OppositeFace => 20,
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Relation::SameFace => "same face",
            Relation::AdjacentFace => "adjacent faces",
            Relation::OppositeFace => "opposite faces",
        };
        f.write_str(name)
    }
}

/// Classify by the end point's height. Expects `start.z == 0`.
pub fn classify(frame: &Frame) -> Relation {
    let z = frame.end()[2];
    if z == 0 {
        Relation::SameFace
    } else if z == frame.dim(Axis::Z) {
        Relation::OppositeFace
    } else {
        Relation::AdjacentFace
    }
}

/// Classify with the end point assigned to `face` of the canonical frame.
pub fn classify_on(face: Face) -> Relation {
    match (face.axis, face.side) {
        (Axis::Z, Side::Low) => Relation::SameFace,
        (Axis::Z, Side::High) => Relation::OppositeFace,
        _ => Relation::AdjacentFace,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canonical::canonicalize;
    use prism_core::Query;

    fn relation(dims: [i64; 3], start: [i64; 3], end: [i64; 3]) -> Relation {
        classify(&canonicalize(&Query::new(dims, start, end).unwrap()))
    }

    #[test]
    fn same_face() {
        assert_eq!(relation([3, 4, 5], [1, 1, 0], [2, 3, 0]), Relation::SameFace);
        // Both on the ceiling: reflected onto the floor.
        assert_eq!(relation([3, 4, 5], [1, 1, 5], [2, 3, 5]), Relation::SameFace);
    }

    #[test]
    fn opposite_face() {
        assert_eq!(relation([3, 4, 5], [1, 1, 0], [2, 3, 5]), Relation::OppositeFace);
        // Left and right walls become floor and ceiling.
        assert_eq!(relation([3, 4, 5], [0, 1, 1], [3, 2, 2]), Relation::OppositeFace);
    }

    #[test]
    fn adjacent_face() {
        assert_eq!(relation([3, 4, 5], [1, 1, 0], [0, 2, 3]), Relation::AdjacentFace);
        assert_eq!(relation([3, 4, 5], [1, 0, 2], [3, 2, 3]), Relation::AdjacentFace);
    }

    #[test]
    fn classify_on_face() {
        assert_eq!(classify_on(Face::FLOOR), Relation::SameFace);
        assert_eq!(classify_on(Face::CEILING), Relation::OppositeFace);
        assert_eq!(
            classify_on(Face::new(Axis::Y, Side::High)),
            Relation::AdjacentFace
        );
    }

    #[test]
    fn candidate_counts() {
        let total: usize = [
            Relation::SameFace,
            Relation::AdjacentFace,
            Relation::OppositeFace,
        ]
        .iter()
        .map(|r| r.candidate_count())
        .sum();
        assert_eq!(total, 24);
    }
}
