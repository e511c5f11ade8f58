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

//! Defines the importer for OBJ mesh assets.

use crate::AssetImporter;
use ahash::AHashMap;
use anyhow::Context;
use brume_core::asset::{Bounds, Mesh};
use glam::{Vec2, Vec3};
use std::error::Error;
use std::fs;
use std::path::Path;

/// Importer for OBJ mesh assets.
#[derive(Clone)]
pub struct ObjMeshImporter;

impl AssetImporter<Mesh> for ObjMeshImporter {
    fn extensions(&self) -> &[&str] {
        &["obj"]
    }

    fn import(&self, path: &Path, asset: &mut Mesh) -> Result<(), Box<dyn Error + Send + Sync>> {
        let bytes =
            fs::read(path).with_context(|| format!("Failed to read '{}'", path.display()))?;
        let obj_text = std::str::from_utf8(&bytes).context("OBJ file is not valid UTF-8")?;

        let (models, _materials) = tobj::load_obj_buf(
            &mut std::io::Cursor::new(obj_text),
            &tobj::LoadOptions {
                triangulate: true,
                single_index: true,
                ..Default::default()
            },
            |_| Ok((Vec::new(), AHashMap::new())),
        )
        .context("Failed to parse OBJ file")?;

        if models.is_empty() {
            return Err("No models found in OBJ file".into());
        }

        // For now, just use the first model
        let mesh = &models[0].mesh;

        let positions: Vec<Vec3> = mesh
            .positions
            .chunks(3)
            .map(|v| Vec3::new(v[0], v[1], v[2]))
            .collect();

        let normals = if !mesh.normals.is_empty() {
            Some(
                mesh.normals
                    .chunks(3)
                    .map(|n| Vec3::new(n[0], n[1], n[2]))
                    .collect(),
            )
        } else {
            None
        };

        let tex_coords = if !mesh.texcoords.is_empty() {
            Some(
                mesh.texcoords
                    .chunks(2)
                    .map(|t| Vec2::new(t[0], t[1]))
                    .collect(),
            )
        } else {
            None
        };

        let bounds = Bounds::from_points(&positions);

        *asset = Mesh {
            positions,
            normals,
            tex_coords,
            indices: Some(mesh.indices.clone()),
            bounds,
        };

        log::debug!(
            "imported OBJ '{}': {} vertices, {} triangles",
            path.display(),
            asset.vertex_count(),
            asset.triangle_count()
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRIANGLE_OBJ: &str = "\
v 0.0 0.0 0.0
v 1.0 0.0 0.0
v 0.0 1.0 0.0
vn 0.0 0.0 1.0
f 1//1 2//1 3//1
";

    fn write_obj(dir: &tempfile::TempDir, name: &str, text: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, text).expect("fixture write");
        path
    }

    #[test]
    fn imports_positions_normals_and_indices() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write_obj(&dir, "triangle.obj", TRIANGLE_OBJ);

        let mut mesh = Mesh::default();
        ObjMeshImporter
            .import(&path, &mut mesh)
            .expect("triangle should import");

        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.triangle_count(), 1);
        assert!(mesh.normals.is_some());
        assert!(mesh.tex_coords.is_none());
        assert!(mesh.bounds.is_valid());
        assert_eq!(mesh.bounds.max, Vec3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn reimport_replaces_previous_contents() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write_obj(&dir, "shape.obj", TRIANGLE_OBJ);

        let mut mesh = Mesh::quad();
        assert_eq!(mesh.vertex_count(), 4);

        ObjMeshImporter
            .import(&path, &mut mesh)
            .expect("reimport should succeed");
        assert_eq!(mesh.vertex_count(), 3);
    }

    #[test]
    fn empty_file_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write_obj(&dir, "empty.obj", "");

        let mut mesh = Mesh::default();
        assert!(ObjMeshImporter.import(&path, &mut mesh).is_err());
    }
}
