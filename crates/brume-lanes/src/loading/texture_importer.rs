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

//! Texture decoding on the CPU.

use crate::AssetImporter;
use anyhow::Context;
use brume_core::asset::{Texture, TextureFormat};
use std::error::Error;
use std::fs;
use std::path::Path;

/// Importer that decodes image files into RGBA8 CPU textures.
#[derive(Clone)]
pub struct TextureImporter;

impl AssetImporter<Texture> for TextureImporter {
    fn extensions(&self) -> &[&str] {
        &["png", "jpg", "jpeg", "bmp"]
    }

    fn import(&self, path: &Path, asset: &mut Texture) -> Result<(), Box<dyn Error + Send + Sync>> {
        let bytes =
            fs::read(path).with_context(|| format!("Failed to read '{}'", path.display()))?;

        // Decode the image using the `image` crate
        let img = image::load_from_memory(&bytes).context("Failed to decode image")?;

        // Convert to RGBA8 (keep in sRGB space)
        let rgba_img = img.to_rgba8();
        let (width, height) = rgba_img.dimensions();

        *asset = Texture {
            pixels: rgba_img.into_raw(),
            width,
            height,
            format: TextureFormat::Rgba8UnormSrgb,
        };

        log::debug!("decoded texture '{}': {width}x{height} rgba8", path.display());

        Ok(())
    }
}
