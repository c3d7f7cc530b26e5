//! Benchmark profiles for the Prism surface-distance solver.
//!
//! - [`query_profile`]: deterministic queries on boxes up to a given size
//! - [`corner_profile`]: opposite-corner queries, which hit every face pairing
//! - [`protocol_text`]: render queries in the batch text protocol

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use prism_core::{Coord3, Cuboid, Query};

/// Deterministic 64-bit mix of `seed` and `i`.
fn mix(seed: u64, i: u64) -> u64 {
    let mut h = seed
        .wrapping_mul(6364136223846793005)
        .wrapping_add(i.wrapping_mul(1442695040888963407));
    h ^= h >> 33;
    h = h.wrapping_mul(0xff51afd7ed558ccd);
    h ^ (h >> 33)
}

/// A surface point of `dims` chosen by `bits`.
fn surface_coords(dims: Coord3, bits: u64) -> Coord3 {
    let axis = (bits % 3) as usize;
    let high = (bits >> 2) & 1 == 1;
    let mut coords = [0i64; 3];
    for (k, c) in coords.iter_mut().enumerate() {
        let span = dims[k] as u64 + 1;
        *c = ((bits >> (8 + 16 * k)) % span) as i64;
    }
    coords[axis] = if high { dims[axis] } else { 0 };
    coords
}

/// Generate `count` valid queries on boxes with sides in `1..=max_dim`.
///
/// The same `(count, max_dim, seed)` always yields the same queries.
pub fn query_profile(count: usize, max_dim: i64, seed: u64) -> Vec<Query> {
    let max_dim = max_dim.max(1) as u64;
    (0..count as u64)
        .filter_map(|i| {
            let a = mix(seed, 3 * i);
            let b = mix(seed, 3 * i + 1);
            let c = mix(seed, 3 * i + 2);
            let dims = [
                (a % max_dim) as i64 + 1,
                ((a >> 21) % max_dim) as i64 + 1,
                ((a >> 42) % max_dim) as i64 + 1,
            ];
            let cuboid = Cuboid::from_dims(dims).ok()?;
            Query::on(cuboid, surface_coords(dims, b), surface_coords(dims, c)).ok()
        })
        .collect()
}

/// Opposite-corner queries on boxes `n x (n+1) x (n+2)` for `n` in `1..=count`.
pub fn corner_profile(count: usize) -> Vec<Query> {
    (1..=count as i64)
        .filter_map(|n| Query::new([n, n + 1, n + 2], [0, 0, 0], [n, n + 1, n + 2]).ok())
        .collect()
}

/// Render `queries` as batch protocol text.
pub fn protocol_text(queries: &[Query]) -> String {
    let mut text = format!("{}\n", queries.len());
    for q in queries {
        let [x, y, z] = q.cuboid().dims();
        let [x1, y1, z1] = q.start().coords();
        let [x2, y2, z2] = q.end().coords();
        text.push_str(&format!("{x} {y} {z} {x1} {y1} {z1} {x2} {y2} {z2}\n"));
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_profile_yields_every_query() {
        // Generated points are always on the surface, so nothing is dropped.
        let queries = query_profile(500, 50, 42);
        assert_eq!(queries.len(), 500);
        for q in &queries {
            assert!(q.cuboid().dims().iter().all(|&d| (1..=50).contains(&d)));
        }
    }

    #[test]
    fn query_profile_deterministic() {
        assert_eq!(query_profile(100, 20, 7), query_profile(100, 20, 7));
        assert_ne!(query_profile(100, 20, 7), query_profile(100, 20, 8));
    }

    #[test]
    fn corner_profile_is_opposite_corners() {
        let queries = corner_profile(5);
        assert_eq!(queries.len(), 5);
        let last = queries[4];
        assert_eq!(last.cuboid().dims(), [5, 6, 7]);
        assert_eq!(last.end().coords(), [5, 6, 7]);
    }

    #[test]
    fn protocol_text_has_count_line() {
        let text = protocol_text(&corner_profile(2));
        assert_eq!(text, "2\n1 2 3 0 0 0 1 2 3\n2 3 4 0 0 0 2 3 4\n");
    }
}
