// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Edge multiplicity check
//!
//! A closed 2-manifold uses every undirected edge in exactly two half-edges.
//! The check walks half-edges in index order and stops at the first edge whose
//! count differs, so every strategy reports the same edge.

use super::mesh::half_edge_next;
use super::strategy::MatchStrategy;
use ahash::AHashMap;
use log::{debug, warn};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of a manifold check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ManifoldVerdict {
    Manifold,
    /// Undirected edge of half-edge `edge` is used `count` times instead of 2
    NonManifoldEdge { edge: usize, count: usize },
    /// Faces around `vertex` do not form a single fan
    PinchPoint {
        vertex: usize,
        faces_traversed: usize,
        incident_faces: usize,
    },
    /// Ring walk around `vertex` never returned to its starting half-edge
    UnclosedRing { vertex: usize },
    /// No faces at all, so there is no surface to be manifold
    Empty,
}

impl ManifoldVerdict {
    pub fn is_manifold(&self) -> bool {
        matches!(self, ManifoldVerdict::Manifold)
    }

    /// The first non-manifold verdict of a sequence, or `Manifold`
    pub fn combine(verdicts: &[ManifoldVerdict]) -> ManifoldVerdict {
        verdicts
            .iter()
            .copied()
            .find(|v| !v.is_manifold())
            .unwrap_or(ManifoldVerdict::Manifold)
    }
}

impl fmt::Display for ManifoldVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ManifoldVerdict::Manifold => write!(f, "This mesh is manifold."),
            ManifoldVerdict::NonManifoldEdge { edge, count } => write!(
                f,
                "This mesh is not manifold. Edge {} has failed as it has {} faces.",
                edge, count
            ),
            ManifoldVerdict::PinchPoint {
                vertex,
                faces_traversed,
                incident_faces,
            } => write!(
                f,
                "This mesh is not manifold. Pinch point at vertex: {} ({} of {} faces reachable)",
                vertex, faces_traversed, incident_faces
            ),
            ManifoldVerdict::UnclosedRing { vertex } => write!(
                f,
                "This mesh is not manifold. Faces around vertex {} do not close into a ring.",
                vertex
            ),
            ManifoldVerdict::Empty => write!(f, "This mesh is not manifold. It has no faces."),
        }
    }
}

/// Count how often every undirected edge appears and report the first edge
/// not used exactly twice
pub fn check_edges(face_vertices: &[usize], strategy: MatchStrategy) -> ManifoldVerdict {
    if face_vertices.is_empty() {
        warn!("mesh has no faces");
        return ManifoldVerdict::Empty;
    }

    let failure = match strategy {
        MatchStrategy::BruteForce => (0..face_vertices.len())
            .map(|e| (e, count_brute_force(face_vertices, e)))
            .find(|&(_, count)| count != 2),
        MatchStrategy::Parallel => (0..face_vertices.len())
            .into_par_iter()
            .map(|e| (e, count_brute_force(face_vertices, e)))
            .find_first(|&(_, count)| count != 2),
        MatchStrategy::Hashed => first_failure_hashed(face_vertices),
    };

    match failure {
        Some((edge, count)) => {
            warn!("edge {} is shared by {} faces", edge, count);
            ManifoldVerdict::NonManifoldEdge { edge, count }
        }
        None => {
            debug!("all {} half-edges are paired", face_vertices.len());
            ManifoldVerdict::Manifold
        }
    }
}

/// Endpoints of a half-edge
#[inline]
fn endpoints(face_vertices: &[usize], edge: usize) -> (usize, usize) {
    (face_vertices[edge], face_vertices[half_edge_next(edge)])
}

fn undirected_key(face_vertices: &[usize], edge: usize) -> (usize, usize) {
    let (a, b) = endpoints(face_vertices, edge);
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

fn count_brute_force(face_vertices: &[usize], edge: usize) -> usize {
    let (a, b) = endpoints(face_vertices, edge);
    (0..face_vertices.len())
        .filter(|&j| {
            let (c, d) = endpoints(face_vertices, j);
            (a == c && b == d) || (a == d && b == c)
        })
        .count()
}

fn first_failure_hashed(face_vertices: &[usize]) -> Option<(usize, usize)> {
    let mut counts: AHashMap<(usize, usize), usize> = AHashMap::with_capacity(face_vertices.len());
    for e in 0..face_vertices.len() {
        *counts.entry(undirected_key(face_vertices, e)).or_insert(0) += 1;
    }

    (0..face_vertices.len())
        .map(|e| (e, counts[&undirected_key(face_vertices, e)]))
        .find(|&(_, count)| count != 2)
}
