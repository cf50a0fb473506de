// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Pinch point detection
//!
//! Around a manifold vertex the incident triangles form one closed fan, so
//! walking the ring from any outgoing half-edge reaches all of them. If the
//! walk sees fewer faces than actually contain the vertex, several fans meet at
//! that vertex.

use super::manifold::ManifoldVerdict;
use super::mesh::DirectedEdgeMesh;
use log::warn;

/// Check every vertex in ID order and report the first pinch point
pub fn check_pinch_points(mesh: &DirectedEdgeMesh) -> ManifoldVerdict {
    let incident = incident_face_counts(mesh);
    // A fan cannot hold more faces than the mesh has
    let limit = mesh.face_count();

    for vertex in 0..mesh.vertex_count() {
        let faces_traversed = mesh.ring(vertex).take(limit + 1).count();

        if faces_traversed > limit {
            warn!("ring around vertex {} does not close", vertex);
            return ManifoldVerdict::UnclosedRing { vertex };
        }

        if faces_traversed != incident[vertex] {
            warn!(
                "pinch point at vertex {}: {} of {} faces reachable",
                vertex, faces_traversed, incident[vertex]
            );
            return ManifoldVerdict::PinchPoint {
                vertex,
                faces_traversed,
                incident_faces: incident[vertex],
            };
        }
    }

    ManifoldVerdict::Manifold
}

/// Number of faces containing each vertex (a face counts once per vertex)
fn incident_face_counts(mesh: &DirectedEdgeMesh) -> Vec<usize> {
    let mut counts = vec![0; mesh.vertex_count()];
    for &[a, b, c] in &mesh.faces {
        counts[a] += 1;
        if b != a {
            counts[b] += 1;
        }
        if c != a && c != b {
            counts[c] += 1;
        }
    }
    counts
}
