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

//! CPU-side texture data as produced by the image importer.

use super::Asset;

/// Pixel format of a [`Texture`]'s data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextureFormat {
    /// 8-bit RGBA, sRGB-encoded. The importer's default for color data.
    #[default]
    Rgba8UnormSrgb,
    /// 8-bit RGBA, linear. For data textures (normals, masks).
    Rgba8Unorm,
}

/// A decoded texture held in CPU memory, awaiting GPU upload by whoever
/// consumes the import notification.
#[derive(Debug, Default)]
pub struct Texture {
    /// Raw pixel data, tightly packed rows, 4 bytes per pixel.
    pub pixels: Vec<u8>,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Interpretation of the pixel bytes.
    pub format: TextureFormat,
}

impl Asset for Texture {}

impl Texture {
    /// Whether the texture carries no pixel data yet (fresh slot before
    /// its first import).
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }
}
