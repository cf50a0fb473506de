// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! File-level tests for the two conversion stages

use anyhow::Result;
use diredge::cli::Runner;
use diredge::io::{self, HEADER_LINES};
use diredge::{MalformedInput, MatchStrategy, MeshError, Pipeline, Primitive};
use nalgebra::Vector3;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn write_raw(dir: &Path, name: &str, primitive: &Primitive) -> Result<PathBuf> {
    let path = dir.join(format!("{}.tri", name));
    fs::write(&path, io::format_raw(&primitive.to_soup()))?;
    Ok(path)
}

fn runner() -> Runner {
    Runner::new(
        Pipeline::new(MatchStrategy::Hashed),
        vec!["Test banner".to_string()],
    )
}

#[test]
fn test_face_file_layout() -> Result<()> {
    let dir = TempDir::new()?;
    let input = write_raw(dir.path(), "tetrahedron", &Primitive::tetrahedron(1.0))?;

    let run = runner().face_index(&input, &dir.path().join("face_models"))?;
    assert_eq!(run.output, dir.path().join("face_models/tetrahedron.face"));

    let text = fs::read_to_string(&run.output)?;
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), HEADER_LINES + 4 + 4);
    assert_eq!(lines[0], "# Test banner");
    assert_eq!(lines[1], "#");
    assert_eq!(lines[5], "# Object name: tetrahedron");
    assert_eq!(lines[6], "# Vertices=4 Faces=4");
    assert_eq!(lines[8], "Vertex 0 0 0 0");
    assert_eq!(lines[9], "Vertex 1 0 1 0");
    assert_eq!(lines[12], "Face 0 0 1 2");
    assert_eq!(lines[15], "Face 3 2 1 3");
    Ok(())
}

#[test]
fn test_both_stages_through_files() -> Result<()> {
    let dir = TempDir::new()?;
    let input = write_raw(dir.path(), "torus", &Primitive::torus(3.0, 1.0, 6, 5))?;
    let runner = runner();

    let stage1 = runner.face_index(&input, &dir.path().join("face"))?;
    let stage2 = runner.directed_edge(&stage1.output, &dir.path().join("diredge"))?;
    let output = stage2.output.clone().unwrap();
    assert_eq!(output, dir.path().join("diredge/torus.diredge"));
    assert!(stage2.outcome.is_manifold());
    assert_eq!(stage2.outcome.genus.map(|g| g.genus), Some(1.0));

    // Header passes through stage 2 unchanged
    let (face_header, face_mesh) = io::read_face_index_file(&stage1.output)?;
    let (diredge_header, diredge_mesh) = io::read_directed_edge_file(&output)?;
    assert_eq!(face_header, diredge_header);

    // Positions survive both text round trips exactly
    assert_eq!(face_mesh, stage1.outcome.mesh);
    assert_eq!(diredge_mesh, stage2.outcome.mesh);
    assert_eq!(diredge_mesh.to_face_index(), face_mesh);

    let check = runner.check(&output)?;
    assert!(check.output.is_none());
    assert!(check.outcome.is_manifold());
    Ok(())
}

#[test]
fn test_malformed_raw_writes_nothing() -> Result<()> {
    let dir = TempDir::new()?;
    let input = dir.path().join("short.tri");
    fs::write(&input, "2\n0 0 0\n1 0 0\n0 1 0\n0 0 1\n1 1 1\n")?;
    let out_dir = dir.path().join("face_models");

    let err = runner().face_index(&input, &out_dir).unwrap_err();
    let mesh_err = err.downcast_ref::<MeshError>().unwrap();
    assert!(matches!(
        mesh_err,
        MeshError::MalformedInput(MalformedInput::MissingVertices {
            expected: 6,
            found: 5
        })
    ));
    assert!(!out_dir.join("short.face").exists());
    Ok(())
}

#[test]
fn test_unpaired_edge_writes_nothing() -> Result<()> {
    let dir = TempDir::new()?;
    let mut soup = Primitive::tetrahedron(1.0).to_soup();
    soup.truncate(9);
    let input = dir.path().join("open.tri");
    fs::write(&input, io::format_raw(&soup))?;
    let runner = runner();

    // Stage 1 still writes its file and reports the open edge
    let stage1 = runner.face_index(&input, dir.path())?;
    assert!(!stage1.outcome.verdict.is_manifold());
    assert!(stage1.output.exists());

    let out_dir = dir.path().join("diredge_models");
    let err = runner.directed_edge(&stage1.output, &out_dir).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<MeshError>(),
        Some(MeshError::UnpairedHalfEdge { .. })
    ));
    assert!(!out_dir.join("open.diredge").exists());
    Ok(())
}

#[test]
fn test_cube_face_file_reparses() -> Result<()> {
    let dir = TempDir::new()?;
    let input = write_raw(
        dir.path(),
        "cube",
        &Primitive::cube(Vector3::new(2.5, 1.0, 0.1), true),
    )?;

    let run = runner().face_index(&input, dir.path())?;
    let (header, mesh) = io::read_face_index_file(&run.output)?;
    assert_eq!(header.lines().len(), HEADER_LINES);
    assert_eq!(mesh.vertex_count(), 8);
    assert_eq!(mesh.face_count(), 12);
    assert_eq!(mesh, run.outcome.mesh);
    Ok(())
}

#[test]
fn test_check_rejects_rewired_other_halves() -> Result<()> {
    let dir = TempDir::new()?;
    let input = write_raw(dir.path(), "tetrahedron", &Primitive::tetrahedron(1.0))?;
    let runner = runner();

    let stage1 = runner.face_index(&input, dir.path())?;
    let stage2 = runner.directed_edge(&stage1.output, dir.path())?;
    let output = stage2.output.unwrap();

    // Reverse the ring around vertex 0: each outgoing half-edge is paired with
    // the edge entering vertex 0 in the previous ring face instead of the next
    let (header, mut mesh) = io::read_directed_edge_file(&output)?;
    let ring: Vec<usize> = mesh.ring(0).collect();
    let prev = |e: usize| 3 * (e / 3) + (e % 3 + 2) % 3;
    for k in 0..ring.len() {
        let before = ring[(k + ring.len() - 1) % ring.len()];
        mesh.other_half[ring[k]] = prev(before);
    }
    assert!(mesh.first_mispaired_edge().is_some());
    io::write_directed_edge_file(&output, &header, &mesh)?;

    let err = runner.check(&output).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<MeshError>(),
        Some(MeshError::Parse { .. })
    ));
    Ok(())
}

#[test]
fn test_empty_soup_is_not_manifold() -> Result<()> {
    let dir = TempDir::new()?;
    let input = dir.path().join("empty.tri");
    fs::write(&input, "0\n")?;
    let runner = runner();

    let stage1 = runner.face_index(&input, dir.path())?;
    assert!(!stage1.outcome.verdict.is_manifold());
    assert!(stage1.outcome.genus.is_none());

    let stage2 = runner.directed_edge(&stage1.output, dir.path())?;
    assert!(!stage2.outcome.is_manifold());
    assert!(stage2.outcome.genus.is_none());
    Ok(())
}
