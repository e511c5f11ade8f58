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

//! Shader source loading. The renderer compiles; this lane only validates
//! and carries text.

use crate::AssetImporter;
use anyhow::Context;
use brume_core::asset::{Shader, ShaderLanguage};
use std::error::Error;
use std::fs;
use std::path::Path;

/// Importer for shader source files.
#[derive(Clone)]
pub struct ShaderImporter;

impl AssetImporter<Shader> for ShaderImporter {
    fn extensions(&self) -> &[&str] {
        &["wgsl", "glsl"]
    }

    fn import(&self, path: &Path, asset: &mut Shader) -> Result<(), Box<dyn Error + Send + Sync>> {
        let source = fs::read_to_string(path)
            .with_context(|| format!("Failed to read shader source '{}'", path.display()))?;

        if source.trim().is_empty() {
            return Err("Shader source is empty".into());
        }

        let language = match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("glsl") => ShaderLanguage::Glsl,
            _ => ShaderLanguage::Wgsl,
        };

        *asset = Shader { language, source };

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const UNLIT_WGSL: &str = "@fragment fn fs_main() -> @location(0) vec4<f32> {\n    return vec4<f32>(1.0);\n}\n";

    #[test]
    fn loads_source_and_tags_language() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("unlit.wgsl");
        fs::write(&path, UNLIT_WGSL).expect("fixture write");

        let mut shader = Shader::default();
        ShaderImporter
            .import(&path, &mut shader)
            .expect("wgsl should load");

        assert_eq!(shader.language, ShaderLanguage::Wgsl);
        assert_eq!(shader.source, UNLIT_WGSL);
    }

    #[test]
    fn glsl_extension_selects_glsl() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("sky.glsl");
        fs::write(&path, "void main() {}\n").expect("fixture write");

        let mut shader = Shader::default();
        ShaderImporter
            .import(&path, &mut shader)
            .expect("glsl should load");
        assert_eq!(shader.language, ShaderLanguage::Glsl);
    }

    #[test]
    fn blank_source_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("blank.wgsl");
        fs::write(&path, "   \n\t").expect("fixture write");

        let mut shader = Shader::default();
        assert!(ShaderImporter.import(&path, &mut shader).is_err());
    }
}
