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

//! Material definition files, authored as RON.

use crate::AssetImporter;
use anyhow::Context;
use brume_core::asset::Material;
use std::error::Error;
use std::fs;
use std::path::Path;

/// Importer for `.material` definition files (RON syntax).
#[derive(Clone)]
pub struct MaterialImporter;

impl AssetImporter<Material> for MaterialImporter {
    fn extensions(&self) -> &[&str] {
        &["material", "ron"]
    }

    fn import(&self, path: &Path, asset: &mut Material) -> Result<(), Box<dyn Error + Send + Sync>> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read material '{}'", path.display()))?;

        let definition: Material = ron::from_str(&text)
            .with_context(|| format!("Failed to parse material '{}'", path.display()))?;

        // The definition file carries parameters only; a shader pinned by the
        // application survives re-import.
        let shader = asset.shader.take();
        *asset = definition;
        asset.shader = shader;

        Ok(())
    }
}
