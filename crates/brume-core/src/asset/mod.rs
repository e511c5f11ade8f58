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

//! Provides the foundational traits and primitive types for Brume's asset system.
//!
//! This module defines the "common language" for all asset-related operations in the
//! engine. It contains the core contracts that other crates implement or use, but it
//! has no knowledge of how assets are loaded or stored.
//!
//! The key components are:
//! - The [`Asset`] trait: a marker for all types that can be treated as assets.
//! - [`AssetId`] and [`NameTable`]: stable, deterministic identifiers derived from
//!   file paths or programmer-chosen names, with reverse lookup for diagnostics.
//! - [`AssetHandle`]: a shared-ownership handle whose payload can be refreshed in
//!   place on hot-reload without moving the underlying storage.
//! - The import lifecycle events published by the asset database.
//!
//! The concrete payload kinds the engine ships ([`Mesh`], [`Texture`], [`Shader`],
//! [`Material`]) also live here, so higher-level crates can share them without
//! depending on the database itself.

mod event;
mod handle;
mod id;
mod material;
mod mesh;
mod shader;
mod texture;

pub use event::*;
pub use handle::*;
pub use id::*;
pub use material::*;
pub use mesh::*;
pub use shader::*;
pub use texture::*;

/// A marker trait for types that can be managed by the asset system.
///
/// This trait's primary purpose is to categorize a type, making it eligible for
/// use within the engine's asset infrastructure (e.g., in an [`AssetHandle<T>`]).
///
/// The supertraits enforce critical safety guarantees:
/// - `Send` + `Sync`: the asset type can be safely shared between subsystems.
/// - `'static`: the asset type does not contain any non-static references, ensuring
///   it can be stored for the lifetime of the application.
///
/// # Examples
///
/// ```
/// use brume_core::asset::Asset;
///
/// struct Heightmap {
///     // ... fields
/// }
///
/// // By implementing Asset, `Heightmap` can now be used by the asset system.
/// impl Asset for Heightmap {}
/// ```
pub trait Asset: Send + Sync + 'static {}
