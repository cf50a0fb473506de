// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Face-index format (`.face`)
//!
//! ```text
//! <8 header lines>
//! Vertex 0 x y z
//! ...
//! Face 0 v0 v1 v2
//! ...
//! ```

use super::header::{Header, HEADER_LINES};
use super::record::Record;
use crate::error::Result;
use crate::geometry::FaceIndexMesh;
use anyhow::Context;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write a face-index mesh with its header
pub fn write_face_index<W: Write>(
    writer: &mut W,
    header: &Header,
    mesh: &FaceIndexMesh,
) -> std::io::Result<()> {
    header.write_to(writer)?;
    for (id, vertex) in mesh.vertices.iter().enumerate() {
        writeln!(writer, "Vertex {} {} {} {}", id, vertex.x, vertex.y, vertex.z)?;
    }
    for (id, [a, b, c]) in mesh.faces.iter().enumerate() {
        writeln!(writer, "Face {} {} {} {}", id, a, b, c)?;
    }
    Ok(())
}

/// Parse a face-index file into its header and mesh
pub fn parse_face_index(source: &str) -> Result<(Header, FaceIndexMesh)> {
    let mut lines = source.lines();
    let header = Header::take_from(&mut lines)?;

    let mut mesh = FaceIndexMesh::new(Vec::new(), Vec::new());
    for (offset, text) in lines.enumerate() {
        let Some(record) = Record::parse(HEADER_LINES + offset + 1, text) else {
            continue;
        };
        match record.keyword {
            "Vertex" => mesh.vertices.push(record.vertex(mesh.vertices.len())?),
            "Face" => mesh.faces.push(record.face(mesh.faces.len())?),
            _ => return Err(record.unknown()),
        }
    }

    mesh.validate()?;
    Ok((header, mesh))
}

/// Read and parse a `.face` file
pub fn read_face_index_file(path: &Path) -> anyhow::Result<(Header, FaceIndexMesh)> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read face file: {}", path.display()))?;
    parse_face_index(&source)
        .with_context(|| format!("Failed to parse face file: {}", path.display()))
}

/// Write a `.face` file, creating parent directories as needed
pub fn write_face_index_file(
    path: &Path,
    header: &Header,
    mesh: &FaceIndexMesh,
) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    let file = File::create(path)
        .with_context(|| format!("Failed to create face file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    write_face_index(&mut writer, header, mesh)?;
    writer.flush()?;
    Ok(())
}
