// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Genus from Euler's formula: V - E + F = 2 - 2g

use serde::{Deserialize, Serialize};

/// Vertex, edge and face counts with the derived genus
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenusResult {
    pub vertices: usize,
    pub edges: usize,
    pub faces: usize,
    /// Reported as-is; a fractional value points at an inconsistent model
    pub genus: f64,
}

impl GenusResult {
    pub fn euler_characteristic(&self) -> i64 {
        self.vertices as i64 - self.edges as i64 + self.faces as i64
    }
}

/// Genus of a closed triangle mesh. Every edge borders two triangles, so
/// `3f = 2e`.
pub fn compute_genus(vertex_count: usize, face_count: usize) -> GenusResult {
    let edges = (3 * face_count) / 2;
    let (v, e, f) = (vertex_count as i64, edges as i64, face_count as i64);
    let genus = (2 - f + e - v) as f64 / 2.0;

    GenusResult {
        vertices: vertex_count,
        edges,
        faces: face_count,
        genus,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_tetrahedron_genus() {
        let result = compute_genus(4, 4);
        assert_eq!(result.edges, 6);
        assert_eq!(result.euler_characteristic(), 2);
        assert_relative_eq!(result.genus, 0.0);
    }

    #[test]
    fn test_torus_genus() {
        // 4x4 grid torus: 16 vertices, 32 triangles
        let result = compute_genus(16, 32);
        assert_eq!(result.edges, 48);
        assert_relative_eq!(result.genus, 1.0);
    }

    #[test]
    fn test_fractional_genus_is_reported() {
        let result = compute_genus(5, 4);
        assert_relative_eq!(result.genus, -0.5);
    }
}
