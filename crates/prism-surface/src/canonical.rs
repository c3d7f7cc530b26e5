//! Canonicalization: rotate the box so the start point is on the floor.
//!
//! Every canonical frame satisfies `start.z == 0`. Only axis swaps and
//! reflections are used, applied to the box and to both points alike, so
//! surface distances are unchanged.

use crate::frame::Frame;
use prism_core::{Axis, Face, Query, Side};

/// The face the start point is assigned to when none is requested.
///
/// Prefers the z faces, then the y faces, then the x faces. A start point
/// on an edge or corner could be assigned any of its faces; this order is
/// the one [`canonicalize`] uses.
pub fn default_start_face(query: &Query) -> Face {
    let dims = query.cuboid().dims();
    let start = query.start().coords();
    let pinned = |axis: Axis| {
        let v = start[axis.index()];
        if v == 0 {
            Some(Face::new(axis, Side::Low))
        } else if v == dims[axis.index()] {
            Some(Face::new(axis, Side::High))
        } else {
            None
        }
    };
    pinned(Axis::Z)
        .or_else(|| pinned(Axis::Y))
        .or_else(|| pinned(Axis::X))
        // Unreachable for a validated query: the start is on some face.
        .unwrap_or(Face::FLOOR)
}

/// Canonical frame using [`default_start_face`].
///
/// # Examples
///
/// ```
/// use prism_core::Query;
/// use prism_surface::canonicalize;
///
/// // Start on the ceiling: the box is turned upside down.
/// let q = Query::new([2, 3, 4], [1, 1, 4], [1, 1, 0]).unwrap();
/// let f = canonicalize(&q);
/// assert_eq!(f.start(), [1, 1, 0]);
/// assert_eq!(f.end(), [1, 1, 4]);
/// ```
pub fn canonicalize(query: &Query) -> Frame {
    canonicalize_on(query, default_start_face(query))
}

/// Canonical frame treating `face` as the start point's face.
///
/// `face` must contain the start point. A side face is first swapped into
/// the z position; a high face is then reflected down to `z = 0`.
pub fn canonicalize_on(query: &Query, face: Face) -> Frame {
    let frame = Frame::from_query(query);
    let frame = match face.axis {
        Axis::Z => frame,
        side_axis => frame.swap_axes(side_axis, Axis::Z),
    };
    let frame = match face.side {
        Side::Low => frame,
        Side::High => frame.reflect(Axis::Z),
    };
    debug_assert_eq!(frame.start()[2], 0, "start not on the floor after canonicalization");
    frame
}
