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

//! Defines the metallic-roughness material asset.

use super::{Asset, AssetHandle, Shader};
use glam::{Vec3, Vec4};
use serde::{Deserialize, Serialize};

/// A surface description using the metallic-roughness workflow.
///
/// The serializable fields are what `.material` files carry. The pinned
/// shader handle is runtime state: application code resolves it against the
/// asset database after load, and it survives re-imports of the definition
/// file. Holding the handle here is what keeps the shader alive even if the
/// database unloads its own entry: shared ownership extends to the longest
/// holder.
///
/// # Examples
///
/// ```
/// use brume_core::asset::Material;
/// use glam::Vec4;
///
/// // A rough, non-metallic surface (e.g. concrete).
/// let concrete = Material {
///     base_color: Vec4::new(0.5, 0.5, 0.5, 1.0),
///     metallic: 0.0,
///     roughness: 0.9,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Material {
    /// The base color (albedo) of the material.
    pub base_color: Vec4,
    /// The metallic factor (0.0 = dielectric, 1.0 = metal).
    pub metallic: f32,
    /// The roughness factor (0.0 = smooth, 1.0 = rough).
    pub roughness: f32,
    /// Emitted radiance for self-illuminating surfaces.
    pub emissive: Vec3,
    /// Whether back faces are rendered.
    pub double_sided: bool,
    /// The shader this material draws with, pinned by the application after
    /// load. Not part of the definition file.
    #[serde(skip)]
    pub shader: Option<AssetHandle<Shader>>,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            base_color: Vec4::ONE,
            metallic: 0.0,
            roughness: 0.5,
            emissive: Vec3::ZERO,
            double_sided: false,
            shader: None,
        }
    }
}

impl Asset for Material {}

impl Material {
    /// A default-parameter material drawing with `shader`.
    pub fn with_shader(shader: AssetHandle<Shader>) -> Self {
        Self {
            shader: Some(shader),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_material_is_white_dielectric() {
        let material = Material::default();
        assert_eq!(material.base_color, Vec4::ONE);
        assert_eq!(material.metallic, 0.0);
        assert!(material.shader.is_none());
    }

    #[test]
    fn with_shader_pins_the_handle() {
        let shader = AssetHandle::new(Shader::default());
        let material = Material::with_shader(shader.clone());
        assert!(material
            .shader
            .as_ref()
            .is_some_and(|pinned| pinned.ptr_eq(&shader)));
    }
}
