// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! CLI subsystem for the diredge tool

pub mod report;
pub mod reporter;
pub mod runner;

pub use report::{BatchError, BatchReport, RunSummary, Stage};
pub use reporter::Reporter;
pub use runner::{object_name, DirectedEdgeRun, FaceIndexRun, Runner};
