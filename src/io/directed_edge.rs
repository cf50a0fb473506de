// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Directed-edge format (`.diredge`)
//!
//! ```text
//! <8 header lines>
//! Vertex <id> x y z
//! FirstDirectedEdge <vertex> <half-edge>
//! Face <id> v0 v1 v2
//! OtherHalf <half-edge> <other half-edge>
//! ```

use super::header::{Header, HEADER_LINES};
use super::record::Record;
use crate::error::{MeshError, Result};
use crate::geometry::DirectedEdgeMesh;
use anyhow::Context;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write a directed-edge mesh with its header
pub fn write_directed_edge<W: Write>(
    writer: &mut W,
    header: &Header,
    mesh: &DirectedEdgeMesh,
) -> std::io::Result<()> {
    header.write_to(writer)?;
    for (id, vertex) in mesh.vertices.iter().enumerate() {
        writeln!(writer, "Vertex {} {} {} {}", id, vertex.x, vertex.y, vertex.z)?;
    }
    for (vertex, edge) in mesh.first_directed_edge.iter().enumerate() {
        writeln!(writer, "FirstDirectedEdge {} {}", vertex, edge)?;
    }
    for (id, [a, b, c]) in mesh.faces.iter().enumerate() {
        writeln!(writer, "Face {} {} {} {}", id, a, b, c)?;
    }
    for (edge, other) in mesh.other_half.iter().enumerate() {
        writeln!(writer, "OtherHalf {} {}", edge, other)?;
    }
    Ok(())
}

/// Parse a directed-edge file.
///
/// Every index is range-checked, each first directed edge must leave its own
/// vertex, and every other half must be the reverse of its half-edge and point
/// back to it.
pub fn parse_directed_edge(source: &str) -> Result<(Header, DirectedEdgeMesh)> {
    let mut lines = source.lines();
    let header = Header::take_from(&mut lines)?;

    let mut mesh = DirectedEdgeMesh {
        vertices: Vec::new(),
        faces: Vec::new(),
        first_directed_edge: Vec::new(),
        other_half: Vec::new(),
    };
    // Line numbers of adjacency records, checked once all faces are known
    let mut first_edge_lines = Vec::new();
    let mut other_half_lines = Vec::new();
    let mut last_line = HEADER_LINES;

    for (offset, text) in lines.enumerate() {
        let Some(record) = Record::parse(HEADER_LINES + offset + 1, text) else {
            continue;
        };
        last_line = record.line;
        match record.keyword {
            "Vertex" => mesh.vertices.push(record.vertex(mesh.vertices.len())?),
            "Face" => mesh.faces.push(record.face(mesh.faces.len())?),
            "FirstDirectedEdge" => {
                record.expect_fields(2)?;
                record.sequential_id(mesh.first_directed_edge.len())?;
                mesh.first_directed_edge.push(record.index(1)?);
                first_edge_lines.push(record.line);
            }
            "OtherHalf" => {
                record.expect_fields(2)?;
                record.sequential_id(mesh.other_half.len())?;
                mesh.other_half.push(record.index(1)?);
                other_half_lines.push(record.line);
            }
            _ => return Err(record.unknown()),
        }
    }

    mesh.to_face_index().validate()?;
    check_adjacency(&mesh, &first_edge_lines, &other_half_lines, last_line)?;
    Ok((header, mesh))
}

fn check_adjacency(
    mesh: &DirectedEdgeMesh,
    first_edge_lines: &[usize],
    other_half_lines: &[usize],
    last_line: usize,
) -> Result<()> {
    let half_edges = mesh.half_edge_count();

    if mesh.first_directed_edge.len() != mesh.vertex_count() {
        return Err(MeshError::parse(
            last_line,
            format!(
                "{} vertices but {} FirstDirectedEdge records",
                mesh.vertex_count(),
                mesh.first_directed_edge.len()
            ),
        ));
    }
    if mesh.other_half.len() != half_edges {
        return Err(MeshError::parse(
            last_line,
            format!(
                "{} half-edges but {} OtherHalf records",
                half_edges,
                mesh.other_half.len()
            ),
        ));
    }

    for (vertex, (&edge, &line)) in mesh
        .first_directed_edge
        .iter()
        .zip(first_edge_lines)
        .enumerate()
    {
        if edge >= half_edges {
            return Err(MeshError::parse(
                line,
                format!("half-edge {} is out of range", edge),
            ));
        }
        if mesh.origin(edge) != vertex {
            return Err(MeshError::parse(
                line,
                format!("half-edge {} does not leave vertex {}", edge, vertex),
            ));
        }
    }

    for (&other, &line) in mesh.other_half.iter().zip(other_half_lines) {
        if other >= half_edges {
            return Err(MeshError::parse(
                line,
                format!("half-edge {} is out of range", other),
            ));
        }
    }

    if let Some(edge) = mesh.first_mispaired_edge() {
        return Err(MeshError::parse(
            other_half_lines[edge],
            format!(
                "half-edge {} is not the reverse of half-edge {}",
                mesh.other_half[edge], edge
            ),
        ));
    }

    Ok(())
}

/// Read and parse a `.diredge` file
pub fn read_directed_edge_file(path: &Path) -> anyhow::Result<(Header, DirectedEdgeMesh)> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read directed-edge file: {}", path.display()))?;
    parse_directed_edge(&source)
        .with_context(|| format!("Failed to parse directed-edge file: {}", path.display()))
}

/// Write a `.diredge` file, creating parent directories as needed
pub fn write_directed_edge_file(
    path: &Path,
    header: &Header,
    mesh: &DirectedEdgeMesh,
) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    let file = File::create(path)
        .with_context(|| format!("Failed to create directed-edge file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    write_directed_edge(&mut writer, header, mesh)?;
    writer.flush()?;
    Ok(())
}
