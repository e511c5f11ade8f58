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

//! Per-kind storage for loaded asset handles.

use brume_core::asset::{Asset, AssetHandle, AssetId};
use std::any::Any;
use std::collections::HashMap;

/// The in-memory cache for a single asset kind `A`.
///
/// Maps an [`AssetId`] to the shared [`AssetHandle<A>`] the database owns.
/// Any given asset is stored once; subsequent requests receive clones of the
/// cached handle. Keys are unique per kind: the same numeric id may exist
/// in another kind's collection without collision, because the kind is part
/// of the outer key.
#[derive(Default)]
pub struct AssetCollection<A: Asset> {
    entries: HashMap<AssetId, AssetHandle<A>>,
}

impl<A: Asset> AssetCollection<A> {
    /// Creates a new, empty collection.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Inserts a handle under `id`, replacing any previous entry.
    pub fn insert(&mut self, id: AssetId, handle: AssetHandle<A>) {
        self.entries.insert(id, handle);
    }

    /// The handle stored under `id`, if any.
    pub fn get(&self, id: AssetId) -> Option<&AssetHandle<A>> {
        self.entries.get(&id)
    }

    /// Whether an entry exists under `id`.
    pub fn contains(&self, id: AssetId) -> bool {
        self.entries.contains_key(&id)
    }

    /// Removes and returns the entry under `id`. Absent entries are a no-op.
    pub fn remove(&mut self, id: AssetId) -> Option<AssetHandle<A>> {
        self.entries.remove(&id)
    }

    /// Iterates over the stored entries in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (AssetId, &AssetHandle<A>)> {
        self.entries.iter().map(|(id, handle)| (*id, handle))
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the collection holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The kind-erased face of an [`AssetCollection`], letting the database hold
/// heterogeneous collections in one map and still enumerate or clear them
/// without knowing the kind.
pub(crate) trait AnyCollection: Send + Sync {
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
    /// Type name of the asset kind, for diagnostics.
    fn kind_name(&self) -> &'static str;
    /// Ids of every stored entry, in unspecified order.
    fn ids(&self) -> Vec<AssetId>;
    fn len(&self) -> usize;
}

impl<A: Asset> AnyCollection for AssetCollection<A> {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn kind_name(&self) -> &'static str {
        std::any::type_name::<A>()
    }

    fn ids(&self) -> Vec<AssetId> {
        self.entries.keys().copied().collect()
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brume_core::asset::NameTable;

    struct Clip;
    impl Asset for Clip {}

    #[test]
    fn insert_get_remove_round_trip() {
        let mut names = NameTable::new();
        let id = names.intern("res/audio/step.clip");

        let mut collection = AssetCollection::<Clip>::new();
        assert!(collection.is_empty());

        collection.insert(id, AssetHandle::bound(id, Clip));
        assert!(collection.contains(id));
        assert_eq!(collection.len(), 1);
        assert_eq!(collection.get(id).map(AssetHandle::id), Some(id));

        assert!(collection.remove(id).is_some());
        assert!(collection.remove(id).is_none());
        assert!(collection.is_empty());
    }

    #[test]
    fn erased_view_reports_kind_and_ids() {
        let mut names = NameTable::new();
        let id = names.intern("res/audio/jump.clip");

        let mut collection = AssetCollection::<Clip>::new();
        collection.insert(id, AssetHandle::bound(id, Clip));

        let erased: &dyn AnyCollection = &collection;
        assert_eq!(erased.len(), 1);
        assert_eq!(erased.ids(), vec![id]);
        assert!(erased.kind_name().contains("Clip"));
        assert!(erased.as_any().downcast_ref::<AssetCollection<Clip>>().is_some());
    }
}
