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

//! The asset database: load, cache, hot-reload, and unload typed resources
//! behind stable hashed identifiers.

use crate::registry::ImporterRegistry;
use crate::storage::{AnyCollection, AssetCollection};
use brume_core::asset::{
    Asset, AssetEvent, AssetHandle, AssetId, ImportKind, NameTable, WeakAssetHandle,
};
use brume_core::AssetError;
use brume_lanes::AssetImporter;
use std::any::{type_name, TypeId};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// The central registry mapping (kind, id) to a shared asset instance.
///
/// The database is the owner of record for every loaded asset: callers and
/// other subsystems hold clones of the stored handle, which stay valid until
/// the entry is explicitly unloaded (or longer, for whoever keeps a clone
/// pinned). Reload refreshes payloads in place, so holders never re-fetch.
///
/// All operations are synchronous and expected to be driven from one logical
/// thread (the update thread); there is no internal locking of the registry
/// itself and no background loading path.
///
/// Collaborators are injected at construction: the database owns its name
/// table and importer registry, and publishes [`AssetEvent`]s through a
/// sender cloned from the engine's event bus.
pub struct AssetDatabase {
    collections: HashMap<TypeId, Box<dyn AnyCollection>>,
    importers: ImporterRegistry,
    names: NameTable,
    events: flume::Sender<AssetEvent>,
}

impl AssetDatabase {
    /// Creates an empty database publishing import notifications to `events`.
    pub fn new(events: flume::Sender<AssetEvent>) -> Self {
        Self {
            collections: HashMap::new(),
            importers: ImporterRegistry::new(),
            names: NameTable::new(),
            events,
        }
    }

    /// Registers the importer consulted for kind `A`. A second registration
    /// for the same kind replaces the first.
    pub fn register_importer<A: Asset>(&mut self, importer: impl AssetImporter<A> + 'static) {
        self.importers.register(importer);
    }

    /// Interns `text` and returns its stable id. Exposed so callers can
    /// precompute ids for [`AssetDatabase::load_by_id`] and friends.
    pub fn intern(&mut self, text: &str) -> AssetId {
        self.names.intern(text)
    }

    /// The path or name `id` was interned from, for diagnostics.
    pub fn name_of(&self, id: AssetId) -> Option<&str> {
        self.names.lookup(id)
    }

    /// Loads the asset at `path`, importing it on first use.
    ///
    /// Idempotent: if an entry for (A, id-of-path) already exists it is
    /// returned unchanged and the importer is not consulted again. The
    /// returned handle aliases the stored instance and stays valid until the
    /// entry is unloaded.
    pub fn load<A: Asset + Default>(&mut self, path: &str) -> Result<AssetHandle<A>, AssetError> {
        let id = self.names.intern(path);
        self.load_at(path, id)
    }

    /// Loads by a previously interned id, resolving the path through the
    /// name table. Fails with [`AssetError::UnknownId`] for ids no string
    /// was ever interned for.
    pub fn load_by_id<A: Asset + Default>(&mut self, id: AssetId) -> Result<AssetHandle<A>, AssetError> {
        let path = self
            .names
            .lookup(id)
            .ok_or(AssetError::UnknownId { id })?
            .to_owned();
        self.load_at(&path, id)
    }

    /// Re-imports the asset at `path`, creating the entry first if absent.
    ///
    /// The refresh happens in place: the stored slot is never swapped, so
    /// every holder of a clone of the handle observes the new payload. On an
    /// importer failure the existing entry is kept (its payload state is
    /// whatever the importer left behind); an entry freshly created by this
    /// call is removed again.
    pub fn reload<A: Asset + Default>(&mut self, path: &str) -> Result<AssetHandle<A>, AssetError> {
        let id = self.names.intern(path);
        self.reload_at(path, id)
    }

    /// [`AssetDatabase::reload`] by a previously interned id.
    pub fn reload_by_id<A: Asset + Default>(&mut self, id: AssetId) -> Result<AssetHandle<A>, AssetError> {
        let path = self
            .names
            .lookup(id)
            .ok_or(AssetError::UnknownId { id })?
            .to_owned();
        self.reload_at(&path, id)
    }

    /// [`AssetDatabase::reload`] through a non-owning handle, as used by
    /// hot-reload watchers. A dead or never-registered handle fails with
    /// [`AssetError::UnknownId`].
    pub fn reload_weak<A: Asset + Default>(
        &mut self,
        weak: &WeakAssetHandle<A>,
    ) -> Result<AssetHandle<A>, AssetError> {
        let id = weak
            .upgrade()
            .map(|handle| handle.id())
            .unwrap_or(AssetId::UNSET);
        if !id.is_set() {
            return Err(AssetError::UnknownId { id });
        }
        self.reload_by_id(id)
    }

    /// Registers a programmatically constructed asset under `name`.
    ///
    /// Procedural names must be unique per kind: an occupied slot fails with
    /// [`AssetError::DuplicateProcedural`] and leaves the existing entry
    /// untouched. No importer runs and no event is published, since nothing
    /// was imported.
    pub fn create_procedural<A: Asset>(
        &mut self,
        name: &str,
        payload: A,
    ) -> Result<AssetHandle<A>, AssetError> {
        let id = self.names.intern(name);
        let collection = typed_mut::<A>(&mut self.collections);
        if collection.contains(id) {
            return Err(AssetError::DuplicateProcedural {
                name: name.to_owned(),
                kind: type_name::<A>(),
            });
        }

        let handle = AssetHandle::bound(id, payload);
        collection.insert(id, handle.clone());
        Ok(handle)
    }

    /// Adopts a caller-constructed handle under `name`, with the same
    /// uniqueness contract as [`AssetDatabase::create_procedural`].
    ///
    /// The caller keeps aliasing the same instance through its own clones.
    /// Identities are assigned exactly once, so a handle already bound to a
    /// different id fails with [`AssetError::HandleBound`]; re-registering a
    /// previously unloaded handle under its old name is fine.
    pub fn register_procedural<A: Asset>(
        &mut self,
        name: &str,
        handle: &AssetHandle<A>,
    ) -> Result<AssetHandle<A>, AssetError> {
        let id = self.names.intern(name);
        let collection = typed_mut::<A>(&mut self.collections);
        if collection.contains(id) {
            return Err(AssetError::DuplicateProcedural {
                name: name.to_owned(),
                kind: type_name::<A>(),
            });
        }

        if handle.bind(id).is_err() && handle.id() != id {
            return Err(AssetError::HandleBound { id: handle.id() });
        }

        collection.insert(id, handle.clone());
        Ok(handle.clone())
    }

    /// Returns the first loaded `A` whose file name contains `fragment`.
    ///
    /// Linear in the collection size; when several entries match, which one
    /// is returned is unspecified. A miss is a reported error: it is logged
    /// and surfaced as [`AssetError::NotFound`].
    pub fn find<A: Asset>(&self, fragment: &str) -> Result<AssetHandle<A>, AssetError> {
        self.try_find(fragment).ok_or_else(|| {
            log::error!(
                "could not find {} asset matching \"{fragment}\"",
                type_name::<A>()
            );
            AssetError::NotFound {
                fragment: fragment.to_owned(),
                kind: type_name::<A>(),
            }
        })
    }

    /// [`AssetDatabase::find`] for call sites that treat absence as
    /// expected: returns `None` on a miss, without logging.
    pub fn try_find<A: Asset>(&self, fragment: &str) -> Option<AssetHandle<A>> {
        let collection = typed::<A>(&self.collections)?;
        collection.iter().find_map(|(id, handle)| {
            let name = self.names.lookup(id)?;
            file_name_of(name)
                .contains(fragment)
                .then(|| handle.clone())
        })
    }

    /// Loads every file directly inside `directory` whose extension the
    /// kind's importer accepts. Not recursive. A missing directory is zero
    /// work, not a failure.
    pub fn load_directory<A: Asset + Default>(&mut self, directory: &str) -> Result<(), AssetError> {
        for path in self.matching_files::<A>(directory)? {
            self.load::<A>(&path)?;
        }
        Ok(())
    }

    /// [`AssetDatabase::reload`] applied to every matching file directly
    /// inside `directory`.
    pub fn reload_directory<A: Asset + Default>(&mut self, directory: &str) -> Result<(), AssetError> {
        for path in self.matching_files::<A>(directory)? {
            self.reload::<A>(&path)?;
        }
        Ok(())
    }

    /// [`AssetDatabase::unload_by_path`] applied to every matching file
    /// directly inside `directory`.
    pub fn unload_directory<A: Asset>(&mut self, directory: &str) -> Result<(), AssetError> {
        for path in self.matching_files::<A>(directory)? {
            self.unload_by_path::<A>(&path);
        }
        Ok(())
    }

    /// Removes one entry from kind `A`'s collection. Absent entries are a
    /// no-op. Holders of clones keep the instance alive; the database just
    /// stops being an owner.
    pub fn unload<A: Asset>(&mut self, id: AssetId) {
        if let Some(collection) = typed_existing_mut::<A>(&mut self.collections) {
            collection.remove(id);
        }
    }

    /// [`AssetDatabase::unload`] keyed by path or name.
    pub fn unload_by_path<A: Asset>(&mut self, path: &str) {
        let id = self.names.intern(path);
        self.unload::<A>(id);
    }

    /// Drops kind `A`'s entire collection.
    pub fn unload_kind<A: Asset>(&mut self) {
        self.collections.remove(&TypeId::of::<A>());
    }

    /// Drops every collection of every kind.
    pub fn unload_all(&mut self) {
        self.collections.clear();
    }

    /// Number of entries currently stored for kind `A`.
    pub fn loaded_count<A: Asset>(&self) -> usize {
        typed::<A>(&self.collections).map_or(0, AssetCollection::len)
    }

    /// Number of entries currently stored across all kinds.
    pub fn total_loaded(&self) -> usize {
        self.collections.values().map(|collection| collection.len()).sum()
    }

    /// Logs every loaded asset of kind `A`. Diagnostic output only.
    pub fn list_assets_of_kind<A: Asset>(&self) {
        match typed::<A>(&self.collections) {
            Some(collection) => log_collection(&self.names, collection),
            None => log::info!("no assets loaded for kind {}", type_name::<A>()),
        }
    }

    /// Logs every loaded asset of every kind. Diagnostic output only.
    pub fn list_assets(&self) {
        for collection in self.collections.values() {
            log_collection(&self.names, collection.as_ref());
        }
    }

    fn load_at<A: Asset + Default>(
        &mut self,
        path: &str,
        id: AssetId,
    ) -> Result<AssetHandle<A>, AssetError> {
        if !Path::new(path).exists() {
            return Err(AssetError::SourceMissing {
                path: path.to_owned(),
            });
        }

        if let Some(handle) = typed::<A>(&self.collections).and_then(|c| c.get(id)) {
            return Ok(handle.clone());
        }

        let importer = self.importers.get::<A>().ok_or(AssetError::NoImporter {
            kind: type_name::<A>(),
        })?;

        let handle = AssetHandle::bound(id, A::default());
        typed_mut::<A>(&mut self.collections).insert(id, handle.clone());

        if let Err(source) = importer.import(Path::new(path), &mut *handle.write()) {
            // A slot that never imported must not linger; a later load
            // should retry from scratch.
            if let Some(collection) = typed_existing_mut::<A>(&mut self.collections) {
                collection.remove(id);
            }
            return Err(AssetError::Import {
                path: path.to_owned(),
                source,
            });
        }

        self.publish(ImportKind::Import, id, path, &handle);
        Ok(handle)
    }

    fn reload_at<A: Asset + Default>(
        &mut self,
        path: &str,
        id: AssetId,
    ) -> Result<AssetHandle<A>, AssetError> {
        if !Path::new(path).exists() {
            return Err(AssetError::SourceMissing {
                path: path.to_owned(),
            });
        }

        let importer = self.importers.get::<A>().ok_or(AssetError::NoImporter {
            kind: type_name::<A>(),
        })?;

        let existing = typed::<A>(&self.collections)
            .and_then(|c| c.get(id))
            .cloned();
        let (handle, created) = match existing {
            Some(handle) => (handle, false),
            None => {
                let handle = AssetHandle::bound(id, A::default());
                typed_mut::<A>(&mut self.collections).insert(id, handle.clone());
                (handle, true)
            }
        };

        if let Err(source) = importer.import(Path::new(path), &mut *handle.write()) {
            if created {
                if let Some(collection) = typed_existing_mut::<A>(&mut self.collections) {
                    collection.remove(id);
                }
            }
            return Err(AssetError::Import {
                path: path.to_owned(),
                source,
            });
        }

        self.publish(ImportKind::Reload, id, path, &handle);
        Ok(handle)
    }

    fn matching_files<A: Asset>(&self, directory: &str) -> Result<Vec<String>, AssetError> {
        let importer = self.importers.get::<A>().ok_or(AssetError::NoImporter {
            kind: type_name::<A>(),
        })?;

        let entries = match fs::read_dir(directory) {
            Ok(entries) => entries,
            // A missing directory is zero work, not a failure.
            Err(_) => return Ok(Vec::new()),
        };

        let mut files = Vec::new();
        for entry in entries.flatten() {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let Some(extension) = path.extension().and_then(|e| e.to_str()) else {
                continue;
            };
            if !importer.is_valid_extension(extension) {
                continue;
            }
            match path.to_str() {
                Some(utf8) => files.push(utf8.to_owned()),
                // Ids are hashes of UTF-8 strings; such a path cannot
                // round-trip through the name table.
                None => log::warn!("skipping non-UTF-8 path under {directory}"),
            }
        }
        Ok(files)
    }

    fn publish<A: Asset>(&self, kind: ImportKind, id: AssetId, name: &str, handle: &AssetHandle<A>) {
        let event = AssetEvent {
            id,
            name: name.to_owned(),
            kind,
            type_name: type_name::<A>(),
            handle: handle.erased(),
        };
        if self.events.send(event).is_err() {
            log::warn!("asset event receiver disconnected; dropping {kind:?} notification for {name}");
        }
    }
}

fn typed<A: Asset>(
    collections: &HashMap<TypeId, Box<dyn AnyCollection>>,
) -> Option<&AssetCollection<A>> {
    collections
        .get(&TypeId::of::<A>())
        .and_then(|slot| slot.as_any().downcast_ref())
}

fn typed_existing_mut<A: Asset>(
    collections: &mut HashMap<TypeId, Box<dyn AnyCollection>>,
) -> Option<&mut AssetCollection<A>> {
    collections
        .get_mut(&TypeId::of::<A>())
        .and_then(|slot| slot.as_any_mut().downcast_mut())
}

fn typed_mut<A: Asset>(
    collections: &mut HashMap<TypeId, Box<dyn AnyCollection>>,
) -> &mut AssetCollection<A> {
    collections
        .entry(TypeId::of::<A>())
        .or_insert_with(|| Box::new(AssetCollection::<A>::new()))
        .as_any_mut()
        .downcast_mut()
        .expect("collection slot holds its kind's collection")
}

/// The file-name component of a path, or the whole string for bare names.
/// Substring search matches against this, so `find("Sphere")` hits
/// `Primitive_Sphere` and `find("Buildings")` hits `res/models/Buildings.obj`.
fn file_name_of(name: &str) -> &str {
    Path::new(name)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(name)
}

fn log_collection(names: &NameTable, collection: &dyn AnyCollection) {
    log::info!(
        "Listing loaded assets of kind: {} ({} entries)",
        collection.kind_name(),
        collection.len()
    );
    for id in collection.ids() {
        log::info!("  {}", names.lookup(id).unwrap_or("<unnamed>"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Tone;
    impl Asset for Tone {}

    struct Curve;
    impl Asset for Curve {}

    fn database() -> AssetDatabase {
        // These tests never exercise the import paths, so a disconnected
        // receiver is fine.
        let (sender, _receiver) = flume::unbounded();
        AssetDatabase::new(sender)
    }

    #[test]
    fn file_name_matching_covers_paths_and_bare_names() {
        assert_eq!(file_name_of("res/models/Buildings.obj"), "Buildings.obj");
        assert_eq!(file_name_of("Primitive_Sphere"), "Primitive_Sphere");
        assert!(file_name_of("res/models/Buildings.obj").contains("Buildings"));
        assert!(!file_name_of("res/models/Buildings.obj").contains("models"));
    }

    #[test]
    fn same_id_may_exist_under_different_kinds() {
        let mut db = database();
        let a = db
            .create_procedural("Shared_Name", Tone)
            .expect("first kind");
        let b = db
            .create_procedural("Shared_Name", Curve)
            .expect("second kind, same name");
        assert_eq!(a.id(), b.id());
        assert_eq!(db.loaded_count::<Tone>(), 1);
        assert_eq!(db.loaded_count::<Curve>(), 1);
        assert_eq!(db.total_loaded(), 2);
    }

    #[test]
    fn duplicate_procedural_name_is_rejected_per_kind() {
        let mut db = database();
        db.create_procedural("M_Debug", Tone).expect("fresh name");
        assert!(matches!(
            db.create_procedural("M_Debug", Tone),
            Err(AssetError::DuplicateProcedural { .. })
        ));
        // The other kind is unaffected.
        assert!(db.create_procedural("M_Debug", Curve).is_ok());
    }

    #[test]
    fn unload_of_absent_entries_is_a_no_op() {
        let mut db = database();
        let id = db.intern("never/loaded.obj");
        db.unload::<Tone>(id);
        db.unload_by_path::<Tone>("never/loaded.obj");
        db.unload_kind::<Tone>();
        db.unload_all();
    }

    #[test]
    fn find_reports_and_try_find_stays_silent_on_empty_kinds() {
        let db = database();
        assert!(matches!(
            db.find::<Tone>("anything"),
            Err(AssetError::NotFound { .. })
        ));
        assert!(db.try_find::<Tone>("anything").is_none());
    }

    #[test]
    fn registered_handles_keep_aliasing_the_callers_instance() {
        let mut db = database();
        let mine = AssetHandle::new(Tone);
        let stored = db
            .register_procedural("T_Sine", &mine)
            .expect("fresh name");
        assert!(stored.ptr_eq(&mine));
        assert!(mine.is_bound());

        let found = db.find::<Tone>("Sine").expect("registered name is findable");
        assert!(found.ptr_eq(&mine));
    }

    #[test]
    fn rebinding_a_handle_under_a_new_name_is_rejected() {
        let mut db = database();
        let handle = AssetHandle::new(Tone);
        db.register_procedural("T_A", &handle).expect("first name");
        assert!(matches!(
            db.register_procedural("T_B", &handle),
            Err(AssetError::HandleBound { .. })
        ));
    }
}
