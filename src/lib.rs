// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! diredge
//!
//! Converts triangle soups into shared-vertex and directed-edge meshes, checks
//! them for 2-manifoldness (edge multiplicity and pinch points) and reports the
//! genus of closed manifolds.

pub mod cli;
pub mod config;
pub mod error;
pub mod geometry;
pub mod io;
pub mod logging;
pub mod pipeline;

pub use config::PipelineConfig;
pub use error::{MalformedInput, MeshError, Result};
pub use geometry::{
    DirectedEdgeMesh, FaceIndexMesh, GenusResult, ManifoldVerdict, MatchStrategy, Primitive,
};
pub use pipeline::{DirectedEdgeOutcome, FaceIndexOutcome, Pipeline};

/// Run the face-index stage on raw `.tri` source text
pub fn convert_raw(source: &str, strategy: MatchStrategy) -> Result<FaceIndexOutcome> {
    let raw = io::parse_raw(source)?;
    Ok(Pipeline::new(strategy).face_index(&raw))
}

/// Run both stages on raw `.tri` source text
pub fn convert_raw_to_directed_edges(
    source: &str,
    strategy: MatchStrategy,
) -> Result<DirectedEdgeOutcome> {
    let pipeline = Pipeline::new(strategy);
    let raw = io::parse_raw(source)?;
    let stage1 = pipeline.face_index(&raw);
    pipeline.directed_edge(stage1.mesh)
}
