// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Machine-readable run summaries

use super::runner::{DirectedEdgeRun, FaceIndexRun};
use crate::geometry::{GenusResult, ManifoldVerdict, MatchStrategy};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Pipeline stage a summary describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    FaceIndex,
    DirectedEdge,
    Check,
}

/// Summary of one stage run on one file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    pub stage: Stage,
    pub input: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
    pub strategy: MatchStrategy,
    pub vertices: usize,
    pub faces: usize,
    pub manifold: bool,
    pub verdict: ManifoldVerdict,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genus: Option<GenusResult>,
    pub duration_ms: f64,
}

impl RunSummary {
    pub fn from_face_index(run: &FaceIndexRun, strategy: MatchStrategy) -> Self {
        Self {
            stage: Stage::FaceIndex,
            input: run.input.clone(),
            output: Some(run.output.clone()),
            strategy,
            vertices: run.outcome.mesh.vertex_count(),
            faces: run.outcome.mesh.face_count(),
            manifold: run.outcome.verdict.is_manifold(),
            verdict: run.outcome.verdict,
            genus: run.outcome.genus,
            duration_ms: run.duration.as_secs_f64() * 1000.0,
        }
    }

    pub fn from_directed_edge(run: &DirectedEdgeRun, strategy: MatchStrategy) -> Self {
        let verdict = run.outcome.verdict();
        Self {
            stage: if run.output.is_some() {
                Stage::DirectedEdge
            } else {
                Stage::Check
            },
            input: run.input.clone(),
            output: run.output.clone(),
            strategy,
            vertices: run.outcome.mesh.vertex_count(),
            faces: run.outcome.mesh.face_count(),
            manifold: verdict.is_manifold(),
            verdict,
            genus: run.outcome.genus,
            duration_ms: run.duration.as_secs_f64() * 1000.0,
        }
    }
}

/// Outcome of a batch over many raw files
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BatchReport {
    pub runs: Vec<RunSummary>,
    pub errors: Vec<BatchError>,
}

/// A file that could not be converted
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchError {
    pub input: PathBuf,
    pub error: String,
}

impl BatchReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_run(&mut self, summary: RunSummary) {
        self.runs.push(summary);
    }

    pub fn add_error(&mut self, input: PathBuf, error: String) {
        self.errors.push(BatchError { input, error });
    }

    /// Record both stages for one raw file. A failed second stage is filed
    /// under the raw input.
    pub fn add_pipeline(
        &mut self,
        stage1: &FaceIndexRun,
        stage2: &anyhow::Result<DirectedEdgeRun>,
        strategy: MatchStrategy,
    ) {
        self.add_run(RunSummary::from_face_index(stage1, strategy));
        match stage2 {
            Ok(run) => self.add_run(RunSummary::from_directed_edge(run, strategy)),
            Err(err) => self.add_error(stage1.input.clone(), format!("{:#}", err)),
        }
    }

    pub fn manifold_count(&self) -> usize {
        self.runs
            .iter()
            .filter(|r| r.stage == Stage::DirectedEdge && r.manifold)
            .count()
    }
}
