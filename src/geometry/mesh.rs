// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Indexed and directed-edge mesh representations
//!
//! Half-edges are not stored as structs. A half-edge is its position `e` in the
//! flattened face-corner array: it belongs to face `e / 3` and runs from corner
//! `e` to corner [`half_edge_next`]`(e)` of that face.

use crate::error::{MeshError, Result};
use nalgebra::Point3;
use serde::{Deserialize, Serialize};

/// Next half-edge within the same triangle
#[inline]
pub fn half_edge_next(edge: usize) -> usize {
    let face = edge / 3;
    face * 3 + (edge % 3 + 1) % 3
}

/// Face a half-edge belongs to
#[inline]
pub fn half_edge_face(edge: usize) -> usize {
    edge / 3
}

/// Shared-vertex triangle mesh ("face index" form)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaceIndexMesh {
    /// Unique positions in order of first appearance
    pub vertices: Vec<Point3<f64>>,
    /// Vertex IDs per triangle, corner order preserved
    pub faces: Vec<[usize; 3]>,
}

impl FaceIndexMesh {
    pub fn new(vertices: Vec<Point3<f64>>, faces: Vec<[usize; 3]>) -> Self {
        Self { vertices, faces }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    pub fn half_edge_count(&self) -> usize {
        self.faces.len() * 3
    }

    /// Flattened face-corner array, indexed by half-edge
    pub fn face_vertices(&self) -> &[usize] {
        self.faces.as_flattened()
    }

    /// Ensure every face refers to an existing vertex
    pub fn validate(&self) -> Result<()> {
        let vertex_count = self.vertices.len();
        for (face, corners) in self.faces.iter().enumerate() {
            if let Some(&vertex) = corners.iter().find(|&&v| v >= vertex_count) {
                return Err(MeshError::VertexOutOfRange {
                    face,
                    vertex,
                    vertex_count,
                });
            }
        }
        Ok(())
    }
}

/// Directed-edge mesh: face-index form plus half-edge adjacency
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectedEdgeMesh {
    pub vertices: Vec<Point3<f64>>,
    pub faces: Vec<[usize; 3]>,
    /// One outgoing half-edge per vertex
    pub first_directed_edge: Vec<usize>,
    /// Opposite half-edge for every half-edge
    pub other_half: Vec<usize>,
}

impl DirectedEdgeMesh {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    pub fn half_edge_count(&self) -> usize {
        self.faces.len() * 3
    }

    pub fn face_vertices(&self) -> &[usize] {
        self.faces.as_flattened()
    }

    /// Vertex a half-edge starts at
    pub fn origin(&self, edge: usize) -> usize {
        self.face_vertices()[edge]
    }

    /// Vertex a half-edge points to
    pub fn target(&self, edge: usize) -> usize {
        self.face_vertices()[half_edge_next(edge)]
    }

    /// First half-edge whose other half is out of range, does not run the
    /// opposite way, or does not point back to it
    pub fn first_mispaired_edge(&self) -> Option<usize> {
        let half_edges = self.half_edge_count();
        (0..half_edges).find(|&edge| {
            let other = self.other_half[edge];
            other >= half_edges
                || self.origin(other) != self.target(edge)
                || self.target(other) != self.origin(edge)
                || self.other_half[other] != edge
        })
    }

    /// Drop the adjacency and keep the face-index form
    pub fn to_face_index(&self) -> FaceIndexMesh {
        FaceIndexMesh::new(self.vertices.clone(), self.faces.clone())
    }
}
