//! Face unfoldings and the candidate paths they produce.
//!
//! An unfolding flattens the faces a path crosses into the plane of the
//! floor. The straight segment from the start to the unfolded image of the
//! end is then a surface path whose length is measured directly. The
//! shortest surface path crosses a sequence of faces that is not known in
//! advance, so every short sequence is enumerated:
//!
//! | Relation | Unfoldings |
//! |----------|------------|
//! | same face | 1 ([`Unfolding::SameFace`]) |
//! | adjacent faces | 3 ([`Hinge`]) |
//! | opposite faces | 20 ([`Wall`] x [`Route`]) |
//!
//! Each unfolding is a closed-form affine map of the frame coordinates.

use crate::classify::{classify, classify_on, Relation};
use crate::frame::Frame;
use prism_core::{Axis, Face, Side};
use smallvec::SmallVec;
use std::fmt;

/// Candidate list sized for the largest enumeration.
pub type Candidates = SmallVec<[Candidate; 20]>;

/// Which face joins the floor to the end wall in the adjacent case.
///
/// Defined on a frame whose end point sits on the `x = 0` wall.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Hinge {
    /// Fold the wall down across the edge it shares with the floor.
    Shared,
    /// Pass over the `y = depth` wall first.
    Back,
    /// Pass over the `y = 0` wall first.
    Front,
}

impl Hinge {
    /// All hinges in enumeration order.
    pub const ALL: [Hinge; 3] = [Hinge::Shared, Hinge::Back, Hinge::Front];
}

/// The side wall an opposite-face path climbs first.
///
/// Each wall is reached by re-orienting the frame so that wall becomes
/// the `y = depth` wall; the [`Route`] formulas are written for that one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Wall {
    /// `y = depth`, no re-orientation.
    Back,
    /// `y = 0`, reached by reflecting y.
    Front,
    /// `x = width`, reached by swapping x and y.
    Right,
    /// `x = 0`, reached by swapping x and y, then reflecting y.
    Left,
}

impl Wall {
    /// All walls in enumeration order.
    pub const ALL: [Wall; 4] = [Wall::Back, Wall::Front, Wall::Right, Wall::Left];

    /// Re-orient a canonical frame so this wall is the `y = depth` wall.
    pub fn orient(self, frame: Frame) -> Frame {
        match self {
            Wall::Back => frame,
            Wall::Front => frame.reflect(Axis::Y),
            Wall::Right => frame.swap_axes(Axis::X, Axis::Y),
            Wall::Left => frame.swap_axes(Axis::X, Axis::Y).reflect(Axis::Y),
        }
    }
}

/// Faces crossed between the first wall and the ceiling.
///
/// "Left" and "right" are relative to the re-oriented frame: left is the
/// `x = 0` wall, right is the `x = width` wall.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    /// Straight over the first wall onto the ceiling.
    Direct,
    /// First wall, then its left neighbour.
    ViaLeft,
    /// First wall, then its right neighbour.
    ViaRight,
    /// First wall, left neighbour, then the wall opposite the first.
    ViaLeftFar,
    /// First wall, right neighbour, then the wall opposite the first.
    ViaRightFar,
}

impl Route {
    /// All routes in enumeration order.
    pub const ALL: [Route; 5] = [
        Route::Direct,
        Route::ViaLeft,
        Route::ViaRight,
        Route::ViaLeftFar,
        Route::ViaRightFar,
    ];

    /// Image of the ceiling point `end` with the back wall as first wall.
    fn image(self, dims: [i64; 3], end: [i64; 3]) -> [i64; 2] {
        let [w, d, h] = dims;
        let [x, y, _] = end;
        match self {
            Route::Direct => [x, d + h + (d - y)],
            Route::ViaLeft => [-(d - y), d + h + x],
            Route::ViaRight => [w + (d - y), d + h + (w - x)],
            Route::ViaLeftFar => [-d - x, d + h + y],
            Route::ViaRightFar => [w + d + (w - x), d + h + y],
        }
    }
}

/// One way of flattening the faces between the start and the end.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Unfolding {
    /// Both points on the floor; no folding.
    SameFace,
    /// End on a side wall, joined through `Hinge`.
    Adjacent(Hinge),
    /// End on the ceiling, over `wall` then along `route`.
    Opposite {
        /// First wall climbed.
        wall: Wall,
        /// Faces crossed after the first wall.
        route: Route,
    },
}

impl Unfolding {
    /// Every opposite-face unfolding, wall-major.
    pub fn opposite_all() -> impl Iterator<Item = Unfolding> {
        Wall::ALL.into_iter().flat_map(|wall| {
            Route::ALL
                .into_iter()
                .map(move |route| Unfolding::Opposite { wall, route })
        })
    }

    /// Project `frame` through this unfolding.
    ///
    /// `SameFace` and `Opposite` take a canonical frame. `Adjacent` takes
    /// a canonical frame already turned so the end is on the `x = 0` wall
    /// (see [`orient_to_wall`]).
    pub fn project(self, frame: &Frame) -> Candidate {
        let [x1, y1, _] = frame.start();
        let [x2, y2, z2] = frame.end();
        let [_, d, _] = frame.dims();
        let (start, end) = match self {
            Unfolding::SameFace => ([x1, y1], [x2, y2]),
            Unfolding::Adjacent(hinge) => {
                let end = match hinge {
                    Hinge::Shared => [-z2, y2],
                    Hinge::Back => [-(d - y2), d + z2],
                    Hinge::Front => [-y2, -z2],
                };
                ([x1, y1], end)
            }
            Unfolding::Opposite { wall, route } => {
                let oriented = wall.orient(*frame);
                let [sx, sy, _] = oriented.start();
                ([sx, sy], route.image(oriented.dims(), oriented.end()))
            }
        };
        Candidate {
            unfolding: self,
            start,
            end,
        }
    }
}

impl fmt::Display for Unfolding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unfolding::SameFace => write!(f, "same face"),
            Unfolding::Adjacent(hinge) => write!(f, "adjacent via {hinge:?}"),
            Unfolding::Opposite { wall, route } => write!(f, "opposite over {wall:?} {route:?}"),
        }
    }
}

/// A straight segment in the plane of one unfolding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Candidate {
    /// The unfolding that produced this segment.
    pub unfolding: Unfolding,
    /// Projected start point.
    pub start: [i64; 2],
    /// Projected end point.
    pub end: [i64; 2],
}

impl Candidate {
    /// Euclidean length of the segment.
    pub fn length(&self) -> f64 {
        let dx = (self.end[0] - self.start[0]) as f64;
        let dy = (self.end[1] - self.start[1]) as f64;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Turn a canonical frame so the end point's `wall` becomes `x = 0`.
///
/// `wall` must be a side face (x or y axis) containing the end point.
pub fn orient_to_wall(frame: Frame, wall: Face) -> Frame {
    let frame = match wall.axis {
        Axis::Y => frame.swap_axes(Axis::X, Axis::Y),
        _ => frame,
    };
    match wall.side {
        Side::Low => frame,
        Side::High => frame.reflect(Axis::X),
    }
}

/// Enumerate candidates for a canonical frame already classified as `relation`.
///
/// In the adjacent case the end point's wall is chosen x first, then y.
pub fn unfold(frame: &Frame, relation: Relation) -> Candidates {
    match relation {
        Relation::SameFace => unfold_same(frame),
        Relation::OppositeFace => unfold_opposite(frame),
        Relation::AdjacentFace => {
            let wall = frame
                .end_faces()
                .into_iter()
                .find(|face| face.axis != Axis::Z)
                .unwrap_or(Face::new(Axis::X, Side::Low));
            unfold_adjacent(frame, wall)
        }
    }
}

/// Enumerate candidates with the end point assigned to `end_face`.
pub fn unfold_on(frame: &Frame, end_face: Face) -> Candidates {
    match classify_on(end_face) {
        Relation::SameFace => unfold_same(frame),
        Relation::OppositeFace => unfold_opposite(frame),
        Relation::AdjacentFace => unfold_adjacent(frame, end_face),
    }
}

/// Classify and enumerate in one step.
pub fn unfold_classified(frame: &Frame) -> Candidates {
    unfold(frame, classify(frame))
}

fn unfold_same(frame: &Frame) -> Candidates {
    let mut out = Candidates::new();
    out.push(Unfolding::SameFace.project(frame));
    out
}

fn unfold_adjacent(frame: &Frame, wall: Face) -> Candidates {
    let oriented = orient_to_wall(*frame, wall);
    Hinge::ALL
        .into_iter()
        .map(|hinge| Unfolding::Adjacent(hinge).project(&oriented))
        .collect()
}

fn unfold_opposite(frame: &Frame) -> Candidates {
    Unfolding::opposite_all()
        .map(|unfolding| unfolding.project(frame))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canonical::canonicalize;
    use prism_core::Query;

    fn canonical(dims: [i64; 3], start: [i64; 3], end: [i64; 3]) -> Frame {
        canonicalize(&Query::new(dims, start, end).unwrap())
    }

    fn find(candidates: &Candidates, unfolding: Unfolding) -> Candidate {
        *candidates
            .iter()
            .find(|c| c.unfolding == unfolding)
            .unwrap()
    }

    // ── Enumeration sizes ───────────────────────────────────────

    #[test]
    fn enumeration_sizes_match_relation() {
        let same = canonical([3, 4, 5], [1, 1, 0], [2, 3, 0]);
        let adjacent = canonical([3, 4, 5], [1, 1, 0], [0, 2, 3]);
        let opposite = canonical([3, 4, 5], [1, 1, 0], [2, 3, 5]);
        for frame in [same, adjacent, opposite] {
            let relation = classify(&frame);
            assert_eq!(unfold(&frame, relation).len(), relation.candidate_count());
        }
    }

    #[test]
    fn opposite_unfoldings_are_distinct() {
        let all: Vec<_> = Unfolding::opposite_all().collect();
        assert_eq!(all.len(), 20);
        for (i, a) in all.iter().enumerate() {
            assert!(!all[i + 1..].contains(a), "{a} enumerated twice");
        }
    }

    // ── Same face ───────────────────────────────────────────────

    #[test]
    fn same_face_is_direct() {
        let frame = canonical([3, 4, 5], [1, 1, 0], [2, 3, 0]);
        let c = unfold_classified(&frame);
        assert_eq!(c[0].start, [1, 1]);
        assert_eq!(c[0].end, [2, 3]);
        assert!((c[0].length() - 5f64.sqrt()).abs() < 1e-12);
    }

    // ── Adjacent faces ──────────────────────────────────────────

    #[test]
    fn adjacent_images_on_left_wall() {
        // End on x = 0 already; no re-orientation.
        let frame = canonical([3, 4, 5], [1, 1, 0], [0, 2, 3]);
        let c = unfold_classified(&frame);
        assert_eq!(find(&c, Unfolding::Adjacent(Hinge::Shared)).end, [-3, 2]);
        assert_eq!(find(&c, Unfolding::Adjacent(Hinge::Back)).end, [-2, 7]);
        assert_eq!(find(&c, Unfolding::Adjacent(Hinge::Front)).end, [-2, -3]);
        assert!((find(&c, Unfolding::Adjacent(Hinge::Shared)).length() - 17f64.sqrt()).abs() < 1e-12);
        assert_eq!(find(&c, Unfolding::Adjacent(Hinge::Back)).length(), 45f64.sqrt());
        assert_eq!(find(&c, Unfolding::Adjacent(Hinge::Front)).length(), 5.0);
    }

    #[test]
    fn adjacent_right_wall_is_reflected() {
        let frame = canonical([3, 4, 5], [1, 1, 0], [3, 2, 3]);
        let c = unfold_classified(&frame);
        let shared = find(&c, Unfolding::Adjacent(Hinge::Shared));
        // x reflected: start x 1 -> 2.
        assert_eq!(shared.start, [2, 1]);
        assert_eq!(shared.end, [-3, 2]);
    }

    #[test]
    fn adjacent_back_wall_swaps_x_and_y() {
        let frame = canonical([3, 4, 5], [1, 1, 0], [2, 4, 3]);
        let c = unfold_classified(&frame);
        let shared = find(&c, Unfolding::Adjacent(Hinge::Shared));
        // Swapped to a 4x3 floor, then x reflected: start (1, 1) -> (3, 1).
        assert_eq!(shared.start, [3, 1]);
        assert_eq!(shared.end, [-3, 2]);
        assert_eq!(shared.length(), 37f64.sqrt());
    }

    #[test]
    fn orient_to_wall_puts_end_at_x_zero() {
        let frame = canonical([3, 4, 5], [1, 1, 0], [3, 4, 2]);
        for wall in frame.end_faces() {
            if wall.axis != Axis::Z {
                assert_eq!(orient_to_wall(frame, wall).end()[0], 0);
            }
        }
    }

    // ── Opposite faces ──────────────────────────────────────────

    #[test]
    fn unit_cube_corner_to_corner() {
        let frame = canonical([1, 1, 1], [0, 0, 0], [1, 1, 1]);
        let c = unfold_classified(&frame);
        let direct = find(
            &c,
            Unfolding::Opposite {
                wall: Wall::Back,
                route: Route::Direct,
            },
        );
        assert_eq!(direct.end, [1, 2]);
        assert_eq!(direct.length(), 5f64.sqrt());
        let best = c.iter().map(Candidate::length).fold(f64::INFINITY, f64::min);
        assert_eq!(best, 5f64.sqrt());
    }

    #[test]
    fn route_images_over_back_wall() {
        let frame = canonical([3, 4, 5], [1, 1, 0], [2, 3, 5]);
        let c = unfold_classified(&frame);
        let image = |route| {
            find(
                &c,
                Unfolding::Opposite {
                    wall: Wall::Back,
                    route,
                },
            )
            .end
        };
        assert_eq!(image(Route::Direct), [2, 10]);
        assert_eq!(image(Route::ViaLeft), [-1, 11]);
        assert_eq!(image(Route::ViaRight), [4, 10]);
        assert_eq!(image(Route::ViaLeftFar), [-6, 12]);
        assert_eq!(image(Route::ViaRightFar), [8, 12]);
    }

    #[test]
    fn front_wall_reflects_y() {
        let frame = canonical([3, 4, 5], [1, 1, 0], [2, 3, 5]);
        let c = Unfolding::Opposite {
            wall: Wall::Front,
            route: Route::Direct,
        }
        .project(&frame);
        assert_eq!(c.start, [1, 3]);
        assert_eq!(c.end, [2, 12]);
    }

    #[test]
    fn left_and_right_walls_swap_axes() {
        let frame = canonical([3, 4, 5], [1, 1, 0], [2, 3, 5]);
        let right = Unfolding::Opposite {
            wall: Wall::Right,
            route: Route::Direct,
        }
        .project(&frame);
        // Swapped: dims 4x3, start (1, 1), end (3, 2).
        assert_eq!(right.start, [1, 1]);
        assert_eq!(right.end, [3, 9]);
        let left = Unfolding::Opposite {
            wall: Wall::Left,
            route: Route::Direct,
        }
        .project(&frame);
        // Then y reflected: start (1, 2), end (3, 1).
        assert_eq!(left.start, [1, 2]);
        assert_eq!(left.end, [3, 10]);
    }
}
