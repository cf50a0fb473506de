// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Vertex deduplication: triangle soup to shared-vertex form
//!
//! Positions are matched with exact component-wise `==`, no epsilon. IDs are
//! handed out in order of first occurrence, so the result is fully determined
//! by the input order.
//!
//! Complexity: the brute-force strategy scans every earlier corner for each
//! corner, O(n²) in the worst case where n is the number of corners. The hashed
//! strategy gives the same IDs in O(n).

use super::mesh::FaceIndexMesh;
use super::strategy::MatchStrategy;
use ahash::AHashMap;
use log::debug;
use nalgebra::Point3;
use rayon::prelude::*;

/// Result of merging coincident corners
#[derive(Debug, Clone, PartialEq)]
pub struct Deduplicated {
    /// Unique positions, in order of first appearance
    pub vertices: Vec<Point3<f64>>,
    /// Shared-vertex ID for each raw corner
    pub ids: Vec<usize>,
}

impl Deduplicated {
    /// Group the per-corner IDs into triangles
    pub fn into_mesh(self) -> FaceIndexMesh {
        debug_assert_eq!(self.ids.len() % 3, 0, "corner count must be a multiple of 3");
        let faces = self
            .ids
            .chunks_exact(3)
            .map(|c| [c[0], c[1], c[2]])
            .collect();
        FaceIndexMesh::new(self.vertices, faces)
    }
}

/// Assign shared-vertex IDs to raw corners
pub fn deduplicate(raw: &[Point3<f64>], strategy: MatchStrategy) -> Deduplicated {
    let result = match strategy {
        MatchStrategy::BruteForce => {
            let earlier: Vec<Option<usize>> = (0..raw.len())
                .map(|i| first_earlier_match(raw, i))
                .collect();
            assign_ids(raw, &earlier)
        }
        MatchStrategy::Parallel => {
            let earlier: Vec<Option<usize>> = (0..raw.len())
                .into_par_iter()
                .map(|i| first_earlier_match(raw, i))
                .collect();
            assign_ids(raw, &earlier)
        }
        MatchStrategy::Hashed => deduplicate_hashed(raw),
    };

    debug!(
        "deduplicated {} corners into {} vertices ({})",
        raw.len(),
        result.vertices.len(),
        strategy
    );
    result
}

/// Build a face-index mesh straight from a triangle soup
pub fn build_face_index(raw: &[Point3<f64>], strategy: MatchStrategy) -> FaceIndexMesh {
    deduplicate(raw, strategy).into_mesh()
}

/// Index of the first corner before `i` at the same position
fn first_earlier_match(raw: &[Point3<f64>], i: usize) -> Option<usize> {
    let point = &raw[i];
    raw[..i].iter().position(|other| other == point)
}

fn assign_ids(raw: &[Point3<f64>], earlier: &[Option<usize>]) -> Deduplicated {
    let mut vertices = Vec::new();
    let mut ids = Vec::with_capacity(raw.len());

    for (i, matched) in earlier.iter().enumerate() {
        match matched {
            Some(j) => {
                let id = ids[*j];
                ids.push(id);
            }
            None => {
                ids.push(vertices.len());
                vertices.push(raw[i]);
            }
        }
    }

    Deduplicated { vertices, ids }
}

/// Hash key agreeing with `==` on positions.
///
/// `-0.0` is folded onto `0.0`. Positions containing NaN never compare equal,
/// so they get no key.
fn position_key(point: &Point3<f64>) -> Option<[u64; 3]> {
    if point.iter().any(|c| c.is_nan()) {
        return None;
    }
    Some([
        (point.x + 0.0).to_bits(),
        (point.y + 0.0).to_bits(),
        (point.z + 0.0).to_bits(),
    ])
}

fn deduplicate_hashed(raw: &[Point3<f64>]) -> Deduplicated {
    let mut seen: AHashMap<[u64; 3], usize> = AHashMap::with_capacity(raw.len());
    let mut vertices = Vec::new();
    let mut ids = Vec::with_capacity(raw.len());

    for point in raw {
        let existing = position_key(point).map(|key| *seen.entry(key).or_insert(vertices.len()));
        match existing {
            Some(id) if id < vertices.len() => ids.push(id),
            _ => {
                ids.push(vertices.len());
                vertices.push(*point);
            }
        }
    }

    Deduplicated { vertices, ids }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64, z: f64) -> Point3<f64> {
        Point3::new(x, y, z)
    }

    #[test]
    fn test_first_occurrence_wins() {
        let raw = vec![
            p(1.0, 0.0, 0.0),
            p(0.0, 1.0, 0.0),
            p(1.0, 0.0, 0.0),
            p(0.0, 0.0, 1.0),
            p(0.0, 1.0, 0.0),
            p(1.0, 0.0, 0.0),
        ];

        for strategy in MatchStrategy::ALL {
            let result = deduplicate(&raw, strategy);
            assert_eq!(result.ids, vec![0, 1, 0, 2, 1, 0], "{}", strategy);
            assert_eq!(
                result.vertices,
                vec![p(1.0, 0.0, 0.0), p(0.0, 1.0, 0.0), p(0.0, 0.0, 1.0)]
            );
        }
    }

    #[test]
    fn test_unique_input_is_identity() {
        let raw: Vec<_> = (0..9).map(|i| p(i as f64, 0.5, -(i as f64))).collect();

        for strategy in MatchStrategy::ALL {
            let result = deduplicate(&raw, strategy);
            assert_eq!(result.ids, (0..9).collect::<Vec<_>>());
            assert_eq!(result.vertices, raw);
        }
    }

    #[test]
    fn test_no_epsilon_matching() {
        let raw = vec![p(0.1 + 0.2, 0.0, 0.0), p(0.3, 0.0, 0.0), p(0.3, 0.0, 0.0)];

        for strategy in MatchStrategy::ALL {
            let result = deduplicate(&raw, strategy);
            assert_eq!(result.ids, vec![0, 1, 1]);
        }
    }

    #[test]
    fn test_signed_zero_and_nan_follow_float_equality() {
        let raw = vec![
            p(0.0, 0.0, 0.0),
            p(-0.0, 0.0, 0.0),
            p(f64::NAN, 0.0, 0.0),
            p(f64::NAN, 0.0, 0.0),
            p(0.0, 0.0, -0.0),
            p(f64::NAN, 0.0, 0.0),
        ];

        for strategy in MatchStrategy::ALL {
            let result = deduplicate(&raw, strategy);
            assert_eq!(result.ids, vec![0, 0, 1, 2, 0, 3], "{}", strategy);
        }
    }

    #[test]
    fn test_into_mesh_groups_triangles() {
        let raw = vec![
            p(0.0, 0.0, 0.0),
            p(1.0, 0.0, 0.0),
            p(0.0, 1.0, 0.0),
            p(1.0, 0.0, 0.0),
            p(1.0, 1.0, 0.0),
            p(0.0, 1.0, 0.0),
        ];
        let mesh = build_face_index(&raw, MatchStrategy::BruteForce);
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.faces, vec![[0, 1, 2], [1, 3, 2]]);
    }
}
