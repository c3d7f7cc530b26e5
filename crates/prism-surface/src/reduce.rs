//! Reduce a candidate sequence to its shortest member.

use crate::unfold::{Candidate, Unfolding};

/// The shortest candidate seen so far.
///
/// Starts from [`Geodesic::UNREACHED`], a sentinel longer than any real
/// path, and only ever shrinks.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Geodesic {
    /// Length of the shortest candidate.
    pub distance: f64,
    /// Unfolding that produced it, `None` while unreached.
    pub unfolding: Option<Unfolding>,
}

impl Geodesic {
    /// Fold seed: infinitely long, no unfolding.
    pub const UNREACHED: Geodesic = Geodesic {
        distance: f64::INFINITY,
        unfolding: None,
    };

    /// Whether at least one candidate has been folded in.
    pub fn is_reached(&self) -> bool {
        self.unfolding.is_some()
    }

    /// Keep the shorter of `self` and `candidate`. Ties keep `self`.
    pub fn with(self, candidate: &Candidate) -> Self {
        let length = candidate.length();
        if length < self.distance {
            Geodesic {
                distance: length,
                unfolding: Some(candidate.unfolding),
            }
        } else {
            self
        }
    }

    /// Keep the shorter of two partial results. Ties keep `self`.
    pub fn min(self, other: Geodesic) -> Self {
        if other.distance < self.distance {
            other
        } else {
            self
        }
    }
}

/// Fold `candidates` into the shortest one.
pub fn reduce<'a, I>(candidates: I) -> Geodesic
where
    I: IntoIterator<Item = &'a Candidate>,
{
    candidates
        .into_iter()
        .fold(Geodesic::UNREACHED, |best, candidate| best.with(candidate))
}
