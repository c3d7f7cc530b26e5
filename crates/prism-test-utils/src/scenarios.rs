//! Queries with independently known answers.
//!
//! Each expected distance is the length of an explicit unfolding worked
//! out by hand, written as `sqrt(n)` where that keeps it exact.

use prism_core::{Coord3, Query};

/// A named query and its shortest surface distance.
#[derive(Clone, Debug)]
pub struct Scenario {
    pub name: &'static str,
    pub dims: Coord3,
    pub start: Coord3,
    pub end: Coord3,
    pub expected: f64,
}

impl Scenario {
    /// Build the validated query. Panics on a malformed fixture.
    pub fn query(&self) -> Query {
        Query::new(self.dims, self.start, self.end)
            .unwrap_or_else(|e| panic!("scenario {} is invalid: {e}", self.name))
    }

    /// The nine protocol integers for this query.
    pub fn values(&self) -> [i64; 9] {
        let [x, y, z] = self.dims;
        let [x1, y1, z1] = self.start;
        let [x2, y2, z2] = self.end;
        [x, y, z, x1, y1, z1, x2, y2, z2]
    }

    /// The query as one protocol line.
    pub fn input_line(&self) -> String {
        self.values()
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// All known scenarios.
pub fn known() -> Vec<Scenario> {
    vec![
        Scenario {
            name: "unit cube, opposite corners",
            dims: [1, 1, 1],
            start: [0, 0, 0],
            end: [1, 1, 1],
            expected: 5f64.sqrt(),
        },
        Scenario {
            name: "30x12x10, opposite corners",
            dims: [30, 12, 10],
            start: [0, 0, 0],
            end: [30, 12, 10],
            expected: 1384f64.sqrt(),
        },
        Scenario {
            name: "same face",
            dims: [3, 4, 5],
            start: [1, 1, 0],
            end: [2, 3, 0],
            expected: 5f64.sqrt(),
        },
        Scenario {
            name: "adjacent wall across shared edge",
            dims: [3, 4, 5],
            start: [1, 1, 0],
            end: [0, 2, 3],
            expected: 17f64.sqrt(),
        },
        Scenario {
            name: "side wall start to ceiling",
            dims: [4, 5, 6],
            start: [4, 2, 3],
            end: [1, 0, 6],
            expected: 34f64.sqrt(),
        },
        Scenario {
            name: "opposite face centres",
            dims: [10, 10, 10],
            start: [5, 5, 0],
            end: [5, 5, 10],
            expected: 20.0,
        },
        Scenario {
            // Spider one unit below the ceiling on one end wall, fly one
            // unit above the floor on the other: the path crosses five faces.
            name: "spider and fly",
            dims: [30, 12, 12],
            start: [0, 6, 11],
            end: [30, 6, 1],
            expected: 40.0,
        },
        Scenario {
            name: "thin slab, opposite corners",
            dims: [9, 9, 1],
            start: [0, 0, 0],
            end: [9, 9, 1],
            expected: 181f64.sqrt(),
        },
        Scenario {
            name: "long rod, opposite corners",
            dims: [7, 1, 1],
            start: [0, 0, 0],
            end: [7, 1, 1],
            expected: 53f64.sqrt(),
        },
        Scenario {
            name: "edge start leaves through side wall",
            dims: [2, 3, 4],
            start: [2, 1, 4],
            end: [0, 0, 1],
            expected: 18f64.sqrt(),
        },
        Scenario {
            name: "same point",
            dims: [4, 4, 4],
            start: [0, 0, 0],
            end: [0, 0, 0],
            expected: 0.0,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_scenario_is_valid() {
        for s in known() {
            s.query();
        }
    }

    #[test]
    fn input_line_is_protocol_order() {
        let s = &known()[0];
        assert_eq!(s.input_line(), "1 1 1 0 0 0 1 1 1");
    }
}
