// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Directed-edge construction
//!
//! Pairs every half-edge `a -> b` with a half-edge `b -> a` (its "other half")
//! and picks one outgoing half-edge per vertex. The input must be a closed,
//! consistently oriented triangle mesh: a half-edge without an opposite makes
//! the whole structure unusable, so construction fails outright.

use super::mesh::{half_edge_next, DirectedEdgeMesh, FaceIndexMesh};
use super::strategy::MatchStrategy;
use crate::error::{MeshError, Result};
use ahash::AHashMap;
use log::debug;
use rayon::prelude::*;

/// Build the directed-edge structure for a face-index mesh.
///
/// When several half-edges could serve as the other half, the first one in
/// index order is taken.
pub fn build_directed_edges(
    mesh: FaceIndexMesh,
    strategy: MatchStrategy,
) -> Result<DirectedEdgeMesh> {
    mesh.validate()?;

    let face_vertices = mesh.face_vertices();
    let other_half = pair_other_halves(face_vertices, strategy)?;
    let first_directed_edge = first_directed_edges(face_vertices, mesh.vertex_count())?;

    debug!(
        "built {} directed edges for {} vertices ({})",
        other_half.len(),
        first_directed_edge.len(),
        strategy
    );

    Ok(DirectedEdgeMesh {
        vertices: mesh.vertices,
        faces: mesh.faces,
        first_directed_edge,
        other_half,
    })
}

/// Find the opposite half-edge of every half-edge
pub fn pair_other_halves(face_vertices: &[usize], strategy: MatchStrategy) -> Result<Vec<usize>> {
    let found: Vec<Option<usize>> = match strategy {
        MatchStrategy::BruteForce => (0..face_vertices.len())
            .map(|e| find_other_half(face_vertices, e))
            .collect(),
        MatchStrategy::Parallel => (0..face_vertices.len())
            .into_par_iter()
            .map(|e| find_other_half(face_vertices, e))
            .collect(),
        MatchStrategy::Hashed => {
            // Directed (from, to) -> first half-edge running that way
            let mut directed: AHashMap<(usize, usize), usize> =
                AHashMap::with_capacity(face_vertices.len());
            for e in 0..face_vertices.len() {
                directed
                    .entry((face_vertices[e], face_vertices[half_edge_next(e)]))
                    .or_insert(e);
            }
            (0..face_vertices.len())
                .map(|e| {
                    let reversed = (face_vertices[half_edge_next(e)], face_vertices[e]);
                    directed.get(&reversed).copied()
                })
                .collect()
        }
    };

    found
        .into_iter()
        .enumerate()
        .map(|(edge, other)| other.ok_or(MeshError::UnpairedHalfEdge { edge }))
        .collect()
}

fn find_other_half(face_vertices: &[usize], edge: usize) -> Option<usize> {
    let from = face_vertices[edge];
    let to = face_vertices[half_edge_next(edge)];
    (0..face_vertices.len())
        .find(|&j| face_vertices[j] == to && face_vertices[half_edge_next(j)] == from)
}

/// First half-edge leaving each vertex, in face-corner order
pub fn first_directed_edges(face_vertices: &[usize], vertex_count: usize) -> Result<Vec<usize>> {
    let mut first: Vec<Option<usize>> = vec![None; vertex_count];
    for (edge, &vertex) in face_vertices.iter().enumerate() {
        if first[vertex].is_none() {
            first[vertex] = Some(edge);
        }
    }

    first
        .into_iter()
        .enumerate()
        .map(|(vertex, edge)| edge.ok_or(MeshError::IsolatedVertex { vertex }))
        .collect()
}

/// Outgoing half-edges around a vertex, starting from its first directed edge.
///
/// Each step crosses to the other half and moves on to the next half-edge in
/// that face, which again leaves the same vertex. Iteration ends once the walk
/// is back at the start. On inconsistent adjacency the walk may never return,
/// so callers should bound it.
pub struct VertexRing<'a> {
    other_half: &'a [usize],
    start: usize,
    current: Option<usize>,
}

impl<'a> VertexRing<'a> {
    pub fn new(other_half: &'a [usize], start: usize) -> Self {
        Self {
            other_half,
            start,
            current: Some(start),
        }
    }
}

impl Iterator for VertexRing<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let current = self.current?;
        // Termination is tested before any step is counted, so a half-edge
        // paired with the previous edge of its own face forms a one-edge ring
        let other = self.other_half[current];
        let following = half_edge_next(other);
        self.current = if following == self.start || other == self.start {
            None
        } else {
            Some(following)
        };
        Some(current)
    }
}

impl DirectedEdgeMesh {
    /// Walk the outgoing half-edges around `vertex`
    pub fn ring(&self, vertex: usize) -> VertexRing<'_> {
        VertexRing::new(&self.other_half, self.first_directed_edge[vertex])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;

    fn tetrahedron() -> FaceIndexMesh {
        FaceIndexMesh::new(
            vec![Point3::origin(); 4],
            vec![[0, 1, 2], [0, 2, 3], [0, 3, 1], [1, 3, 2]],
        )
    }

    #[test]
    fn test_tetrahedron_pairing() {
        for strategy in MatchStrategy::ALL {
            let mesh = build_directed_edges(tetrahedron(), strategy).unwrap();
            assert_eq!(
                mesh.other_half,
                vec![8, 11, 3, 2, 10, 6, 5, 9, 0, 7, 4, 1],
                "{}",
                strategy
            );
            assert_eq!(mesh.first_directed_edge, vec![0, 1, 2, 5]);
        }
    }

    #[test]
    fn test_pairing_is_symmetric() {
        let mesh = build_directed_edges(tetrahedron(), MatchStrategy::Hashed).unwrap();
        for e in 0..mesh.half_edge_count() {
            let other = mesh.other_half[e];
            assert_eq!(mesh.other_half[other], e);
            assert_eq!(mesh.origin(other), mesh.target(e));
            assert_eq!(mesh.target(other), mesh.origin(e));
        }
    }

    #[test]
    fn test_open_mesh_fails_with_unpaired_half_edge() {
        let mut open = tetrahedron();
        open.faces.pop();
        for strategy in MatchStrategy::ALL {
            match build_directed_edges(open.clone(), strategy) {
                Err(MeshError::UnpairedHalfEdge { edge }) => assert_eq!(edge, 1),
                other => panic!("unexpected result: {:?}", other),
            }
        }
    }

    #[test]
    fn test_isolated_vertex_is_rejected() {
        let mut mesh = tetrahedron();
        mesh.vertices.push(Point3::new(5.0, 5.0, 5.0));
        match build_directed_edges(mesh, MatchStrategy::BruteForce) {
            Err(MeshError::IsolatedVertex { vertex }) => assert_eq!(vertex, 4),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_first_match_wins_on_duplicate_candidates() {
        // Edge 0 -> 1 appears reversed in faces 1 and 2; face 1 comes first
        let fv = [0, 1, 2, 1, 0, 3, 1, 0, 4];
        let other = find_other_half(&fv, 0);
        assert_eq!(other, Some(3));
    }

    #[test]
    fn test_self_paired_face_gives_single_edge_ring() {
        let other_half = [2, 0, 1];
        let ring: Vec<usize> = VertexRing::new(&other_half, 0).collect();
        assert_eq!(ring, vec![0]);
    }

    #[test]
    fn test_ring_visits_every_face_around_vertex() {
        let mesh = build_directed_edges(tetrahedron(), MatchStrategy::BruteForce).unwrap();
        for vertex in 0..4 {
            let ring: Vec<usize> = mesh.ring(vertex).collect();
            assert_eq!(ring.len(), 3);
            assert!(ring.iter().all(|&e| mesh.origin(e) == vertex));
        }
    }
}
