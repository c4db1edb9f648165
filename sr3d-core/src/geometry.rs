//! Geometry primitives handed to a renderer

use crate::color::Color;
use crate::vector::{Vector2, Vector3};

/// One corner of a triangle
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vertex {
    pub position: Vector3,
    pub normal: Vector3,
    pub uv: Vector2,
    pub color: Color,
}

impl Vertex {
    pub fn new(position: Vector3, normal: Vector3, uv: Vector2, color: Color) -> Self {
        Self {
            position,
            normal,
            uv,
            color,
        }
    }
}

/// A triangle stored as parallel per-vertex arrays.
///
/// Index `i` of each array together describes vertex `i`. Nothing is
/// validated or derived: normals need not be unit length and winding is up
/// to the caller.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub positions: [Vector3; 3],
    pub normals: [Vector3; 3],
    pub uvs: [Vector2; 3],
    pub colors: [Color; 3],
}

impl Triangle {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        v0: Vector3,
        v1: Vector3,
        v2: Vector3,
        n0: Vector3,
        n1: Vector3,
        n2: Vector3,
        uv0: Vector2,
        uv1: Vector2,
        uv2: Vector2,
        c0: Color,
        c1: Color,
        c2: Color,
    ) -> Self {
        Self {
            positions: [v0, v1, v2],
            normals: [n0, n1, n2],
            uvs: [uv0, uv1, uv2],
            colors: [c0, c1, c2],
        }
    }

    pub fn from_vertices(vertices: [Vertex; 3]) -> Self {
        Self {
            positions: vertices.map(|v| v.position),
            normals: vertices.map(|v| v.normal),
            uvs: vertices.map(|v| v.uv),
            colors: vertices.map(|v| v.color),
        }
    }

    /// Vertex `i`, panicking if `i > 2`
    pub fn vertex(&self, i: usize) -> Vertex {
        Vertex::new(self.positions[i], self.normals[i], self.uvs[i], self.colors[i])
    }

    pub fn vertices(&self) -> [Vertex; 3] {
        [self.vertex(0), self.vertex(1), self.vertex(2)]
    }
}
