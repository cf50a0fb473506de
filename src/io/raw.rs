// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Raw triangle-soup reader (`.tri`)
//!
//! The first token is the triangle count `n`, followed by exactly `3n`
//! whitespace-separated `x y z` triples.

use crate::error::{MalformedInput, MeshError, Result};
use anyhow::Context;
use nalgebra::Point3;
use std::fs;
use std::path::Path;

/// Parse a raw triangle file into its corner list
pub fn parse_raw(source: &str) -> Result<Vec<Point3<f64>>> {
    let mut tokens = source.split_whitespace();

    let count_token = tokens.next().ok_or(MalformedInput::MissingTriangleCount)?;
    let triangles: usize = count_token
        .parse()
        .map_err(|_| MalformedInput::InvalidTriangleCount(count_token.to_string()))?;

    let expected = triangles
        .checked_mul(3)
        .ok_or_else(|| MalformedInput::InvalidTriangleCount(count_token.to_string()))?;
    let mut corners = Vec::with_capacity(expected.min(1 << 20));

    for vertex in 0..expected {
        let mut coords = [0.0; 3];
        for coord in &mut coords {
            let token = tokens.next().ok_or(MalformedInput::MissingVertices {
                expected,
                found: vertex,
            })?;
            *coord = token.parse().map_err(|_| MalformedInput::InvalidNumber {
                vertex,
                token: token.to_string(),
            })?;
        }
        corners.push(Point3::new(coords[0], coords[1], coords[2]));
    }

    if tokens.next().is_some() {
        return Err(MeshError::from(MalformedInput::ExtraData { expected }));
    }

    Ok(corners)
}

/// Read and parse a `.tri` file
pub fn read_raw_file(path: &Path) -> anyhow::Result<Vec<Point3<f64>>> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read raw mesh: {}", path.display()))?;
    parse_raw(&source).with_context(|| format!("Failed to parse raw mesh: {}", path.display()))
}

/// Render corners back into the raw format
pub fn format_raw(corners: &[Point3<f64>]) -> String {
    let mut out = format!("{}\n", corners.len() / 3);
    for corner in corners {
        out.push_str(&format!("{} {} {}\n", corner.x, corner.y, corner.z));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn malformed(source: &str) -> MalformedInput {
        match parse_raw(source) {
            Err(MeshError::MalformedInput(reason)) => reason,
            other => panic!("expected malformed input, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_single_triangle() {
        let corners = parse_raw("1\n0 0 0\n1 0 0\n0 1 0\n").unwrap();
        assert_eq!(corners.len(), 3);
        assert_eq!(corners[1], Point3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_layout_is_free_form() {
        let corners = parse_raw("1 0 0 0 1 0 0\n\n 0 1 0").unwrap();
        assert_eq!(corners[2], Point3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_one_vertex_short() {
        let mut source = String::from("2\n");
        for i in 0..5 {
            source.push_str(&format!("{} 0 0\n", i));
        }
        assert_eq!(
            malformed(&source),
            MalformedInput::MissingVertices {
                expected: 6,
                found: 5
            }
        );
    }

    #[test]
    fn test_partial_triple_counts_as_missing() {
        assert_eq!(
            malformed("1\n0 0 0\n1 0 0\n0 1"),
            MalformedInput::MissingVertices {
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn test_extra_data() {
        assert_eq!(
            malformed("1\n0 0 0\n1 0 0\n0 1 0\n5\n"),
            MalformedInput::ExtraData { expected: 3 }
        );
    }

    #[test]
    fn test_bad_tokens() {
        assert_eq!(malformed(""), MalformedInput::MissingTriangleCount);
        assert_eq!(
            malformed("two\n"),
            MalformedInput::InvalidTriangleCount("two".to_string())
        );
        assert_eq!(
            malformed("1\n0 0 0\n1 x 0\n0 1 0\n"),
            MalformedInput::InvalidNumber {
                vertex: 1,
                token: "x".to_string()
            }
        );
    }

    #[test]
    fn test_format_round_trip_is_exact() {
        let corners = vec![
            Point3::new(0.1 + 0.2, -1e-300, 12345.678901234567),
            Point3::new(1.0, 2.0, 3.0),
            Point3::new(f64::MAX, f64::MIN_POSITIVE, -0.0),
        ];
        let parsed = parse_raw(&format_raw(&corners)).unwrap();
        assert_eq!(parsed, corners);
    }
}
