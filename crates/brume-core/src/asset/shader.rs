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

//! Shader source assets. Compilation is the renderer's concern; the asset
//! system only carries validated source text.

use super::Asset;

/// Source language of a [`Shader`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShaderLanguage {
    /// WGSL source.
    #[default]
    Wgsl,
    /// GLSL source.
    Glsl,
}

/// A shader's source text, hot-reloadable like any other asset.
#[derive(Debug, Default)]
pub struct Shader {
    /// Language the source is written in, inferred from the file extension.
    pub language: ShaderLanguage,
    /// The full source text.
    pub source: String,
}

impl Asset for Shader {}
