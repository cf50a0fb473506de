// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Two-stage conversion pipeline
//!
//! Stage 1 turns a triangle soup into face-index form, stage 2 adds the
//! directed-edge adjacency. Each stage hands its output forward by value and
//! returns its manifold verdicts instead of recording them anywhere.

use crate::error::Result;
use crate::geometry::{
    build_directed_edges, build_face_index, check_edges, check_pinch_points, compute_genus,
    DirectedEdgeMesh, FaceIndexMesh, GenusResult, ManifoldVerdict, MatchStrategy,
};
use log::{debug, info};
use nalgebra::Point3;

/// Result of the face-index stage
#[derive(Debug, Clone)]
pub struct FaceIndexOutcome {
    pub mesh: FaceIndexMesh,
    pub verdict: ManifoldVerdict,
    /// Only present for manifold meshes
    pub genus: Option<GenusResult>,
}

/// Result of the directed-edge stage
#[derive(Debug, Clone)]
pub struct DirectedEdgeOutcome {
    pub mesh: DirectedEdgeMesh,
    pub edge_verdict: ManifoldVerdict,
    pub pinch_verdict: ManifoldVerdict,
    /// Only present when both checks pass
    pub genus: Option<GenusResult>,
}

impl DirectedEdgeOutcome {
    /// Edge failures take precedence over pinch points
    pub fn verdict(&self) -> ManifoldVerdict {
        ManifoldVerdict::combine(&[self.edge_verdict, self.pinch_verdict])
    }

    pub fn is_manifold(&self) -> bool {
        self.verdict().is_manifold()
    }
}

/// Runs the conversion stages with one matching strategy
#[derive(Debug, Clone, Copy, Default)]
pub struct Pipeline {
    strategy: MatchStrategy,
}

impl Pipeline {
    pub fn new(strategy: MatchStrategy) -> Self {
        Self { strategy }
    }

    pub fn strategy(&self) -> MatchStrategy {
        self.strategy
    }

    /// Deduplicate corners, check edges and compute the genus
    pub fn face_index(&self, raw: &[Point3<f64>]) -> FaceIndexOutcome {
        let mesh = build_face_index(raw, self.strategy);
        let verdict = check_edges(mesh.face_vertices(), self.strategy);
        let genus = verdict
            .is_manifold()
            .then(|| compute_genus(mesh.vertex_count(), mesh.face_count()));

        info!(
            "face index: {} vertices, {} faces, {}",
            mesh.vertex_count(),
            mesh.face_count(),
            verdict
        );
        FaceIndexOutcome {
            mesh,
            verdict,
            genus,
        }
    }

    /// Build directed edges, then check edges and pinch points.
    ///
    /// Fails without producing anything if a half-edge has no opposite.
    pub fn directed_edge(&self, mesh: FaceIndexMesh) -> Result<DirectedEdgeOutcome> {
        let mesh = build_directed_edges(mesh, self.strategy)?;
        Ok(self.verify(mesh))
    }

    /// Re-run the manifold checks on an existing directed-edge mesh
    pub fn verify(&self, mesh: DirectedEdgeMesh) -> DirectedEdgeOutcome {
        let edge_verdict = check_edges(mesh.face_vertices(), self.strategy);
        let pinch_verdict = check_pinch_points(&mesh);
        debug!("edge check: {}, pinch check: {}", edge_verdict, pinch_verdict);

        let genus = (edge_verdict.is_manifold() && pinch_verdict.is_manifold())
            .then(|| compute_genus(mesh.vertex_count(), mesh.face_count()));

        info!(
            "directed edge: {} vertices, {} half-edges, {}",
            mesh.vertex_count(),
            mesh.half_edge_count(),
            ManifoldVerdict::combine(&[edge_verdict, pinch_verdict])
        );
        DirectedEdgeOutcome {
            mesh,
            edge_verdict,
            pinch_verdict,
            genus,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Primitive;
    use nalgebra::Vector3;

    #[test]
    fn test_cube_through_both_stages() {
        let pipeline = Pipeline::default();
        let soup = Primitive::cube(Vector3::new(10.0, 10.0, 10.0), true).to_soup();

        let stage1 = pipeline.face_index(&soup);
        assert_eq!(stage1.mesh.vertex_count(), 8);
        assert_eq!(stage1.mesh.face_count(), 12);
        assert!(stage1.verdict.is_manifold());
        assert_eq!(stage1.genus.map(|g| g.edges), Some(18));

        let stage2 = pipeline.directed_edge(stage1.mesh).unwrap();
        assert!(stage2.is_manifold());
        assert_eq!(stage2.genus.map(|g| g.genus), Some(0.0));
    }

    #[test]
    fn test_non_manifold_has_no_genus() {
        let mut soup = Primitive::tetrahedron(1.0).to_soup();
        soup.truncate(9);
        let outcome = Pipeline::new(MatchStrategy::Hashed).face_index(&soup);
        assert!(!outcome.verdict.is_manifold());
        assert!(outcome.genus.is_none());
    }
}
