// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Error types for mesh conversion

use thiserror::Error;

/// Top-level error type for the conversion pipeline.
///
/// Manifold findings (bad edge counts, pinch points) are not errors; they are
/// reported through [`crate::geometry::ManifoldVerdict`].
#[derive(Debug, Error)]
pub enum MeshError {
    #[error("malformed input: {0}")]
    MalformedInput(#[from] MalformedInput),

    #[error("failed to find other half at edge {edge}")]
    UnpairedHalfEdge { edge: usize },

    #[error("vertex {vertex} is not used by any face")]
    IsolatedVertex { vertex: usize },

    #[error("face {face} refers to vertex {vertex}, but only {vertex_count} vertices exist")]
    VertexOutOfRange {
        face: usize,
        vertex: usize,
        vertex_count: usize,
    },

    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Reasons a raw triangle file is rejected before any processing.
#[derive(Debug, Error, PartialEq)]
pub enum MalformedInput {
    #[error("missing triangle count")]
    MissingTriangleCount,

    #[error("invalid triangle count '{0}'")]
    InvalidTriangleCount(String),

    #[error("the file seems to be missing one or more vertices (expected {expected}, found {found})")]
    MissingVertices { expected: usize, found: usize },

    #[error("the file seems to have extra data after {expected} vertices")]
    ExtraData { expected: usize },

    #[error("invalid coordinate '{token}' at vertex {vertex}")]
    InvalidNumber { vertex: usize, token: String },
}

impl MeshError {
    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        MeshError::Parse {
            line,
            message: message.into(),
        }
    }
}

/// Convenience type alias for results using [`MeshError`].
pub type Result<T> = std::result::Result<T, MeshError>;
