// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! CLI output reporter with colored formatting

use super::report::BatchReport;
use super::runner::{DirectedEdgeRun, FaceIndexRun};
use crate::geometry::{GenusResult, ManifoldVerdict, MatchStrategy};
use colored::*;
use std::path::Path;
use std::time::Duration;

/// CLI reporter for formatted output
pub struct Reporter;

impl Reporter {
    /// Report the face-index stage
    pub fn report_face_index(run: &FaceIndexRun, strategy: MatchStrategy) {
        Self::banner("Computing Face Index Format", &run.input);

        let mesh = &run.outcome.mesh;
        Self::print_count("Vertices", mesh.vertex_count());
        Self::print_count("Faces", mesh.face_count());
        Self::report_verdict(&run.outcome.verdict, run.outcome.genus.as_ref());
        Self::print_output(Some(&run.output), run.duration);
        Self::print_complexity(strategy);

        println!("{}", "━".repeat(80).bright_black());
    }

    /// Report the directed-edge stage or a check
    pub fn report_directed_edge(run: &DirectedEdgeRun) {
        let title = if run.output.is_some() {
            "Computing Directed Edges"
        } else {
            "Checking Directed Edges"
        };
        Self::banner(title, &run.input);

        let mesh = &run.outcome.mesh;
        Self::print_count("Vertices", mesh.vertex_count());
        Self::print_count("Faces", mesh.face_count());
        Self::print_count("Half-edges", mesh.half_edge_count());
        Self::report_verdict(&run.outcome.verdict(), run.outcome.genus.as_ref());
        Self::print_output(run.output.as_deref(), run.duration);

        println!("{}", "━".repeat(80).bright_black());
    }

    /// Report a batch summary
    pub fn report_batch(report: &BatchReport) {
        println!("\n{}", "═".repeat(80).bright_black());
        println!("{}", "Batch Summary".bold());
        println!("{}", "═".repeat(80).bright_black());

        for run in &report.runs {
            let status = if run.manifold {
                "manifold".green()
            } else {
                "not manifold".yellow()
            };
            println!(
                "  {} {:?} {}",
                run.input.display().to_string().cyan(),
                run.stage,
                status
            );
        }
        for err in &report.errors {
            println!("  {} {}", "❌".red(), err.input.display());
            println!("       {}", err.error.bright_black());
        }

        println!(
            "\n  {} {}",
            "Manifold meshes:".bright_black(),
            report.manifold_count().to_string().green()
        );
        println!(
            "  {} {}",
            "Errors:".bright_black(),
            if report.errors.is_empty() {
                "0".green()
            } else {
                report.errors.len().to_string().red()
            }
        );
        println!("{}", "═".repeat(80).bright_black());
    }

    /// Report a manifold verdict and, if available, the genus
    pub fn report_verdict(verdict: &ManifoldVerdict, genus: Option<&GenusResult>) {
        if verdict.is_manifold() {
            println!("{} {}", "✅".green(), verdict.to_string().green().bold());
        } else {
            println!("{} {}", "❌".red(), verdict.to_string().red().bold());
        }

        if let Some(genus) = genus {
            println!(
                "  {} {} {}",
                "Genus:".bright_black(),
                genus.genus.to_string().cyan().bold(),
                format!("(V={} E={} F={})", genus.vertices, genus.edges, genus.faces)
                    .bright_black()
            );
        }
    }

    /// Report error
    pub fn report_error(message: &str) {
        eprintln!("\n{} {}", "❌ Error:".red().bold(), message);
    }

    /// Report warning
    pub fn report_warning(message: &str) {
        println!("\n{} {}", "⚠️  Warning:".yellow().bold(), message);
    }

    /// Report info
    pub fn report_info(message: &str) {
        println!("{} {}", "ℹ️".bright_blue(), message);
    }

    /// Print success message
    pub fn success(message: &str) {
        println!("{} {}", "✅".green(), message.green());
    }

    fn banner(title: &str, input: &Path) {
        println!("\n{}", "━".repeat(80).bright_black());
        println!("{} {}", format!("{}:", title).bold(), input.display().to_string().cyan());
        println!("{}", "━".repeat(80).bright_black());
    }

    fn print_count(name: &str, value: usize) {
        println!(
            "  {} {}",
            format!("{}:", name).bright_black(),
            value.to_string().cyan()
        );
    }

    fn print_output(output: Option<&Path>, duration: Duration) {
        if let Some(output) = output {
            println!(
                "  {} {}",
                "Output:".bright_black(),
                output.display().to_string().cyan()
            );
        }
        println!(
            "  {} {}",
            "Time:".bright_black(),
            Self::format_duration(duration).yellow()
        );
    }

    fn print_complexity(strategy: MatchStrategy) {
        let (worst, best) = strategy.complexity();
        println!(
            "\n  {} {} {}",
            "Worst Case Algorithm Complexity:".bright_black(),
            worst,
            "where n is the number of vertices".bright_black()
        );
        println!(
            "  {} {} {}",
            "Best Case Algorithm Complexity: ".bright_black(),
            best,
            format!("({})", strategy).bright_black()
        );
    }

    /// Format duration for display
    fn format_duration(duration: Duration) -> String {
        let micros = duration.as_micros();

        if micros < 1_000 {
            format!("{}µs", micros)
        } else if micros < 1_000_000 {
            format!("{:.2}ms", micros as f64 / 1_000.0)
        } else {
            format!("{:.2}s", micros as f64 / 1_000_000.0)
        }
    }
}
