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

//! Import lifecycle notifications published by the asset database.

use super::{AssetId, ErasedAssetHandle};

/// Distinguishes a first import from a hot-reload of an existing asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportKind {
    /// The asset was imported for the first time.
    Import,
    /// An existing asset's payload was refreshed in place.
    Reload,
}

/// Published on the engine's event bus after every successful import or
/// reload.
///
/// Subscribers (GPU upload, dependent-asset refresh, editors) either
/// downcast [`AssetEvent::handle`] to the kind they care about or re-fetch
/// from the database by id. Procedural registration does not emit events,
/// since nothing was imported.
#[derive(Debug, Clone)]
pub struct AssetEvent {
    /// Identity of the affected asset.
    pub id: AssetId,
    /// The path or name the id was interned from.
    pub name: String,
    /// First import or in-place reload.
    pub kind: ImportKind,
    /// The asset kind's type name, for routing without downcasting.
    pub type_name: &'static str,
    /// Type-erased handle to the affected instance.
    pub handle: ErasedAssetHandle,
}
