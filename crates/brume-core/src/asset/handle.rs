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

use super::{Asset, AssetId};
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::any::Any;
use std::fmt;
use std::sync::{Arc, OnceLock, Weak};

/// The shared allocation behind a handle: a bind-once identity plus the
/// mutable payload. The payload address is stable for the slot's lifetime,
/// which is what lets hot-reload refresh data under every holder's feet.
struct Slot<T: Asset> {
    id: OnceLock<AssetId>,
    payload: RwLock<T>,
}

/// A reference-counted handle to a loaded asset.
///
/// This acts as a smart pointer providing shared ownership of an asset's data.
/// Cloning a handle is cheap, as it only increments the reference count and
/// does not duplicate the underlying asset data.
///
/// Unlike a plain `Arc<T>`, the payload sits behind a lock so the asset
/// database can refresh it *in place* on reload: every clone of the handle
/// (a material pinning its shader, a render queue holding a mesh) observes
/// the new data without re-fetching from the database. The expected call
/// discipline is single-threaded (one logical update thread drives loads and
/// reloads); the lock is what makes the aliasing sound, not a promise of
/// concurrent-reader semantics.
///
/// The identity is assigned exactly once, by the asset database, when the
/// handle is registered or loaded. Until then [`AssetHandle::id`] reports
/// [`AssetId::UNSET`].
pub struct AssetHandle<T: Asset> {
    slot: Arc<Slot<T>>,
}

impl<T: Asset> AssetHandle<T> {
    /// Creates a new, unbound handle that takes ownership of the payload.
    ///
    /// This is how callers build procedural assets before handing them to
    /// the database for registration.
    pub fn new(payload: T) -> Self {
        Self {
            slot: Arc::new(Slot {
                id: OnceLock::new(),
                payload: RwLock::new(payload),
            }),
        }
    }

    /// Creates a handle already bound to `id`.
    ///
    /// Intended for the asset database, which assigns identities when it
    /// creates slots for file-backed assets.
    pub fn bound(id: AssetId, payload: T) -> Self {
        let handle = Self::new(payload);
        let _ = handle.slot.id.set(id);
        handle
    }

    /// The identity assigned by the asset database, or [`AssetId::UNSET`]
    /// if the handle has not been registered yet.
    pub fn id(&self) -> AssetId {
        self.slot.id.get().copied().unwrap_or(AssetId::UNSET)
    }

    /// Whether an identity has been assigned.
    pub fn is_bound(&self) -> bool {
        self.slot.id.get().is_some()
    }

    /// Binds the handle's identity. Succeeds exactly once; a second call
    /// returns the already-bound id as the error.
    ///
    /// Intended for the asset database during registration.
    pub fn bind(&self, id: AssetId) -> Result<(), AssetId> {
        self.slot.id.set(id).map_err(|_| self.id())
    }

    /// Read access to the payload.
    pub fn read(&self) -> RwLockReadGuard<'_, T> {
        self.slot.payload.read()
    }

    /// Write access to the payload. Importers populate and refresh assets
    /// through this guard.
    pub fn write(&self) -> RwLockWriteGuard<'_, T> {
        self.slot.payload.write()
    }

    /// Creates a non-owning handle that does not keep the asset alive.
    pub fn downgrade(&self) -> WeakAssetHandle<T> {
        WeakAssetHandle {
            slot: Arc::downgrade(&self.slot),
        }
    }

    /// A type-erased clone of this handle, suitable for heterogeneous event
    /// payloads.
    pub fn erased(&self) -> ErasedAssetHandle {
        ErasedAssetHandle(self.slot.clone())
    }

    /// Whether two handles share the same underlying slot.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.slot, &other.slot)
    }
}

impl<T: Asset> Clone for AssetHandle<T> {
    fn clone(&self) -> Self {
        Self {
            slot: self.slot.clone(),
        }
    }
}

/// Two assets are equal iff their identifiers are equal. Unbound handles are
/// only equal to themselves.
impl<T: Asset> PartialEq for AssetHandle<T> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || (self.is_bound() && self.id() == other.id())
    }
}

impl<T: Asset> Eq for AssetHandle<T> {}

impl<T: Asset> fmt::Debug for AssetHandle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AssetHandle")
            .field("id", &self.id())
            .field("kind", &std::any::type_name::<T>())
            .finish()
    }
}

/// A non-owning counterpart to [`AssetHandle`].
///
/// Subsystems that must not extend an asset's lifetime (e.g. a hot-reload
/// watcher) hold these and upgrade on use.
pub struct WeakAssetHandle<T: Asset> {
    slot: Weak<Slot<T>>,
}

impl<T: Asset> WeakAssetHandle<T> {
    /// Attempts to recover a strong handle. Returns `None` once every strong
    /// holder (the database included) has dropped the asset.
    pub fn upgrade(&self) -> Option<AssetHandle<T>> {
        self.slot.upgrade().map(|slot| AssetHandle { slot })
    }
}

impl<T: Asset> Clone for WeakAssetHandle<T> {
    fn clone(&self) -> Self {
        Self {
            slot: self.slot.clone(),
        }
    }
}

impl<T: Asset> fmt::Debug for WeakAssetHandle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeakAssetHandle")
            .field("kind", &std::any::type_name::<T>())
            .finish()
    }
}

/// A type-erased, reference-counted handle to an asset of some kind.
///
/// Events carry these so a single notification channel can transport every
/// asset kind; subscribers that know the kind recover the typed handle with
/// [`ErasedAssetHandle::downcast`].
#[derive(Clone)]
pub struct ErasedAssetHandle(Arc<dyn Any + Send + Sync>);

impl ErasedAssetHandle {
    /// Recovers the typed handle, or `None` if the erased handle holds a
    /// different asset kind.
    pub fn downcast<T: Asset>(&self) -> Option<AssetHandle<T>> {
        self.0
            .clone()
            .downcast::<Slot<T>>()
            .ok()
            .map(|slot| AssetHandle { slot })
    }
}

impl fmt::Debug for ErasedAssetHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ErasedAssetHandle")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Blob {
        bytes: Vec<u8>,
    }
    impl Asset for Blob {}

    struct OtherKind;
    impl Asset for OtherKind {}

    #[test]
    fn id_binds_exactly_once() {
        let handle = AssetHandle::new(Blob { bytes: vec![] });
        assert_eq!(handle.id(), AssetId::UNSET);
        assert!(!handle.is_bound());

        let mut names = crate::asset::NameTable::new();
        let id = names.intern("M_Debug");
        assert!(handle.bind(id).is_ok());
        assert_eq!(handle.id(), id);

        let other = names.intern("M_Other");
        assert_eq!(handle.bind(other), Err(id));
        assert_eq!(handle.id(), id);
    }

    #[test]
    fn clones_alias_the_same_payload() {
        let handle = AssetHandle::new(Blob { bytes: vec![1, 2] });
        let alias = handle.clone();

        handle.write().bytes.push(3);
        assert_eq!(alias.read().bytes, vec![1, 2, 3]);
        assert!(handle.ptr_eq(&alias));
    }

    #[test]
    fn equality_follows_bound_ids() {
        let mut names = crate::asset::NameTable::new();
        let id = names.intern("res/x.obj");

        let a = AssetHandle::bound(id, Blob { bytes: vec![] });
        let b = AssetHandle::bound(id, Blob { bytes: vec![9] });
        assert_eq!(a, b);

        let unbound = AssetHandle::new(Blob { bytes: vec![] });
        assert_ne!(a, unbound);
        assert_eq!(unbound, unbound.clone());
    }

    #[test]
    fn weak_handles_do_not_keep_assets_alive() {
        let handle = AssetHandle::new(Blob { bytes: vec![7] });
        let weak = handle.downgrade();
        assert!(weak.upgrade().is_some());

        drop(handle);
        assert!(weak.upgrade().is_none());
    }

    #[test]
    fn erased_handles_downcast_to_the_right_kind_only() {
        let handle = AssetHandle::new(Blob { bytes: vec![5] });
        let erased = handle.erased();

        let typed = erased.downcast::<Blob>().expect("same kind must downcast");
        assert!(typed.ptr_eq(&handle));
        assert_eq!(typed.read().bytes, vec![5]);

        assert!(erased.downcast::<OtherKind>().is_none());
    }
}
