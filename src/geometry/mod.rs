// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Geometry module - mesh representations and topology checks

mod dedup;
mod genus;
mod halfedge;
mod manifold;
mod mesh;
mod pinch;
mod primitives;
mod strategy;

pub use dedup::{build_face_index, deduplicate, Deduplicated};
pub use genus::{compute_genus, GenusResult};
pub use halfedge::{build_directed_edges, first_directed_edges, pair_other_halves, VertexRing};
pub use manifold::{check_edges, ManifoldVerdict};
pub use mesh::{half_edge_face, half_edge_next, DirectedEdgeMesh, FaceIndexMesh};
pub use pinch::check_pinch_points;
pub use primitives::Primitive;
pub use strategy::MatchStrategy;
