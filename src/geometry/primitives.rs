// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Closed triangle-soup generators
//!
//! Every primitive is emitted as raw corners, three per triangle, with shared
//! corners repeated exactly as a raw `.tri` file would list them.

use nalgebra::{Point3, Vector3};
use std::f64::consts::PI;

/// Closed, consistently oriented primitives
pub enum Primitive {
    Tetrahedron { size: f64 },
    Cube { size: Vector3<f64>, center: bool },
    Octahedron { r: f64 },
    Torus {
        major: f64,
        minor: f64,
        rings: usize,
        sides: usize,
    },
}

impl Primitive {
    pub fn tetrahedron(size: f64) -> Self {
        Self::Tetrahedron { size }
    }

    pub fn cube(size: Vector3<f64>, center: bool) -> Self {
        Self::Cube { size, center }
    }

    pub fn octahedron(r: f64) -> Self {
        Self::Octahedron { r }
    }

    pub fn torus(major: f64, minor: f64, rings: usize, sides: usize) -> Self {
        Self::Torus {
            major,
            minor,
            rings: rings.max(3),
            sides: sides.max(3),
        }
    }

    /// Raw corners, three per triangle
    pub fn to_soup(&self) -> Vec<Point3<f64>> {
        match self {
            Self::Tetrahedron { size } => generate_tetrahedron(*size),
            Self::Cube { size, center } => generate_cube(*size, *center),
            Self::Octahedron { r } => generate_octahedron(*r),
            Self::Torus {
                major,
                minor,
                rings,
                sides,
            } => generate_torus(*major, *minor, *rings, *sides),
        }
    }

    /// Number of triangles in the soup
    pub fn triangle_count(&self) -> usize {
        match self {
            Self::Tetrahedron { .. } => 4,
            Self::Cube { .. } => 12,
            Self::Octahedron { .. } => 8,
            Self::Torus { rings, sides, .. } => 2 * rings * sides,
        }
    }
}

fn soup(positions: &[Point3<f64>], faces: &[[usize; 3]]) -> Vec<Point3<f64>> {
    faces
        .iter()
        .flat_map(|face| face.iter().map(|&i| positions[i]))
        .collect()
}

fn generate_tetrahedron(size: f64) -> Vec<Point3<f64>> {
    let positions = [
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(size, 0.0, 0.0),
        Point3::new(0.0, size, 0.0),
        Point3::new(0.0, 0.0, size),
    ];
    let faces = [[0, 2, 1], [0, 1, 3], [0, 3, 2], [1, 2, 3]];
    soup(&positions, &faces)
}

fn generate_cube(size: Vector3<f64>, center: bool) -> Vec<Point3<f64>> {
    let min = if center { -size / 2.0 } else { Vector3::zeros() };
    let max = min + size;

    // 8 vertices of the cube
    let positions = [
        Point3::new(min.x, min.y, min.z),
        Point3::new(max.x, min.y, min.z),
        Point3::new(max.x, max.y, min.z),
        Point3::new(min.x, max.y, min.z),
        Point3::new(min.x, min.y, max.z),
        Point3::new(max.x, min.y, max.z),
        Point3::new(max.x, max.y, max.z),
        Point3::new(min.x, max.y, max.z),
    ];

    let faces = [
        // Front (z+)
        [4, 5, 6],
        [4, 6, 7],
        // Back (z-)
        [1, 0, 3],
        [1, 3, 2],
        // Right (x+)
        [5, 1, 2],
        [5, 2, 6],
        // Left (x-)
        [0, 4, 7],
        [0, 7, 3],
        // Top (y+)
        [7, 6, 2],
        [7, 2, 3],
        // Bottom (y-)
        [0, 1, 5],
        [0, 5, 4],
    ];
    soup(&positions, &faces)
}

fn generate_octahedron(r: f64) -> Vec<Point3<f64>> {
    let positions = [
        Point3::new(r, 0.0, 0.0),
        Point3::new(-r, 0.0, 0.0),
        Point3::new(0.0, r, 0.0),
        Point3::new(0.0, -r, 0.0),
        Point3::new(0.0, 0.0, r),
        Point3::new(0.0, 0.0, -r),
    ];
    let faces = [
        [0, 2, 4],
        [2, 1, 4],
        [1, 3, 4],
        [3, 0, 4],
        [2, 0, 5],
        [1, 2, 5],
        [3, 1, 5],
        [0, 3, 5],
    ];
    soup(&positions, &faces)
}

fn generate_torus(major: f64, minor: f64, rings: usize, sides: usize) -> Vec<Point3<f64>> {
    // Wrapped grid indices give bit-identical seam positions
    let position = |i: usize, j: usize| {
        let u = 2.0 * PI * (i % rings) as f64 / rings as f64;
        let v = 2.0 * PI * (j % sides) as f64 / sides as f64;
        let radial = major + minor * v.cos();
        Point3::new(radial * u.cos(), radial * u.sin(), minor * v.sin())
    };

    let mut corners = Vec::with_capacity(rings * sides * 6);
    for i in 0..rings {
        for j in 0..sides {
            let a = position(i, j);
            let b = position(i + 1, j);
            let c = position(i + 1, j + 1);
            let d = position(i, j + 1);
            corners.extend_from_slice(&[a, b, c, a, c, d]);
        }
    }
    corners
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_soup_sizes() {
        let primitives = [
            Primitive::tetrahedron(1.0),
            Primitive::cube(Vector3::new(10.0, 10.0, 10.0), true),
            Primitive::octahedron(2.0),
            Primitive::torus(3.0, 1.0, 5, 4),
        ];
        for primitive in &primitives {
            assert_eq!(primitive.to_soup().len(), primitive.triangle_count() * 3);
        }
    }

    #[test]
    fn test_torus_clamps_resolution() {
        assert_eq!(Primitive::torus(3.0, 1.0, 1, 2).triangle_count(), 18);
    }
}
