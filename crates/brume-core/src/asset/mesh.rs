// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Defines data structures for mesh representation.

use super::Asset;
use glam::{Vec2, Vec3};

/// An axis-aligned bounding box in model space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Minimum corner.
    pub min: Vec3,
    /// Maximum corner.
    pub max: Vec3,
}

impl Bounds {
    /// A degenerate box that contains nothing and absorbs any point on merge.
    pub const EMPTY: Bounds = Bounds {
        min: Vec3::splat(f32::MAX),
        max: Vec3::splat(f32::MIN),
    };

    /// The tightest box around `points`, or [`Bounds::EMPTY`] for no points.
    pub fn from_points(points: &[Vec3]) -> Self {
        points.iter().fold(Self::EMPTY, |bounds, &p| Bounds {
            min: bounds.min.min(p),
            max: bounds.max.max(p),
        })
    }

    /// Whether the box contains at least one point.
    pub fn is_valid(&self) -> bool {
        self.min.x <= self.max.x && self.min.y <= self.max.y && self.min.z <= self.max.z
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// A complete mesh with vertex data and indices.
///
/// Stored struct-of-arrays; optional channels are `None` when the source
/// file does not provide them.
#[derive(Debug, Default)]
pub struct Mesh {
    /// Vertex positions
    pub positions: Vec<Vec3>,
    /// Vertex normals
    pub normals: Option<Vec<Vec3>>,
    /// Vertex texture coordinates
    pub tex_coords: Option<Vec<Vec2>>,
    /// Index data for primitive assembly
    pub indices: Option<Vec<u32>>,
    /// Axis-aligned bounding box, recomputed on import
    pub bounds: Bounds,
}

impl Asset for Mesh {}

impl Mesh {
    /// Number of vertices in the mesh.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangles, assuming a triangle list.
    pub fn triangle_count(&self) -> usize {
        match &self.indices {
            Some(indices) => indices.len() / 3,
            None => self.positions.len() / 3,
        }
    }

    /// A unit quad in the XY plane, for procedural registration and tests.
    pub fn quad() -> Self {
        let positions = vec![
            Vec3::new(-0.5, -0.5, 0.0),
            Vec3::new(0.5, -0.5, 0.0),
            Vec3::new(0.5, 0.5, 0.0),
            Vec3::new(-0.5, 0.5, 0.0),
        ];
        let bounds = Bounds::from_points(&positions);
        Self {
            positions,
            normals: Some(vec![Vec3::Z; 4]),
            tex_coords: Some(vec![
                Vec2::new(0.0, 0.0),
                Vec2::new(1.0, 0.0),
                Vec2::new(1.0, 1.0),
                Vec2::new(0.0, 1.0),
            ]),
            indices: Some(vec![0, 1, 2, 0, 2, 3]),
            bounds,
        }
    }
}
