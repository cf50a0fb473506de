// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! File-level execution of the pipeline stages

use crate::config::PipelineConfig;
use crate::io::{self, Header};
use crate::pipeline::{DirectedEdgeOutcome, FaceIndexOutcome, Pipeline};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Extension of face-index files
pub const FACE_EXTENSION: &str = "face";
/// Extension of directed-edge files
pub const DIREDGE_EXTENSION: &str = "diredge";
/// Extension of raw triangle files
pub const RAW_EXTENSION: &str = "tri";

/// Face-index stage run on a file
#[derive(Debug)]
pub struct FaceIndexRun {
    pub input: PathBuf,
    pub output: PathBuf,
    pub outcome: FaceIndexOutcome,
    pub duration: Duration,
}

/// Directed-edge stage run on a file, or a check of an existing one
#[derive(Debug)]
pub struct DirectedEdgeRun {
    pub input: PathBuf,
    /// `None` when an existing file was only checked
    pub output: Option<PathBuf>,
    pub outcome: DirectedEdgeOutcome,
    pub duration: Duration,
}

/// Runs pipeline stages from and to files
pub struct Runner {
    pipeline: Pipeline,
    banner: Vec<String>,
}

impl Runner {
    pub fn new(pipeline: Pipeline, banner: Vec<String>) -> Self {
        Self { pipeline, banner }
    }

    pub fn from_config(config: &PipelineConfig) -> Self {
        Self::new(Pipeline::new(config.strategy), config.banner.clone())
    }

    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }

    /// Convert a `.tri` file into `<out_dir>/<name>.face`.
    ///
    /// Nothing is written if the raw file is malformed.
    pub fn face_index(&self, input: &Path, out_dir: &Path) -> Result<FaceIndexRun> {
        let start = Instant::now();
        let raw = io::read_raw_file(input)?;
        let outcome = self.pipeline.face_index(&raw);

        let name = object_name(input);
        let header = Header::for_object(
            &self.banner,
            &name,
            outcome.mesh.vertex_count(),
            outcome.mesh.face_count(),
        );
        let output = output_path(out_dir, &name, FACE_EXTENSION);
        io::write_face_index_file(&output, &header, &outcome.mesh)?;

        Ok(FaceIndexRun {
            input: input.to_path_buf(),
            output,
            outcome,
            duration: start.elapsed(),
        })
    }

    /// Convert a `.face` file into `<out_dir>/<name>.diredge`.
    ///
    /// The face file's header is copied as-is. Nothing is written if a
    /// half-edge cannot be paired.
    pub fn directed_edge(&self, input: &Path, out_dir: &Path) -> Result<DirectedEdgeRun> {
        let start = Instant::now();
        let (header, mesh) = io::read_face_index_file(input)?;
        let outcome = self
            .pipeline
            .directed_edge(mesh)
            .with_context(|| format!("Failed to build directed edges for {}", input.display()))?;

        let output = output_path(out_dir, &object_name(input), DIREDGE_EXTENSION);
        io::write_directed_edge_file(&output, &header, &outcome.mesh)?;

        Ok(DirectedEdgeRun {
            input: input.to_path_buf(),
            output: Some(output),
            outcome,
            duration: start.elapsed(),
        })
    }

    /// Re-check an existing `.diredge` file without writing anything
    pub fn check(&self, input: &Path) -> Result<DirectedEdgeRun> {
        let start = Instant::now();
        let (_, mesh) = io::read_directed_edge_file(input)?;
        let outcome = self.pipeline.verify(mesh);

        Ok(DirectedEdgeRun {
            input: input.to_path_buf(),
            output: None,
            outcome,
            duration: start.elapsed(),
        })
    }
}

/// File stem used as the object name, e.g. `models/bunny.tri` -> `bunny`
pub fn object_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "mesh".to_string())
}

fn output_path(out_dir: &Path, name: &str, extension: &str) -> PathBuf {
    out_dir.join(format!("{}.{}", name, extension))
}
