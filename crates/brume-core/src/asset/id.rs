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

//! Stable, deterministic asset identifiers and the name table backing them.

use serde::{Deserialize, Serialize};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt;

const FNV_OFFSET_BASIS: u32 = 0x811c_9dc5;
const FNV_PRIME: u32 = 0x0100_0193;

/// A stable 32-bit identifier for a logical asset.
///
/// Ids are produced deterministically from a string (a file path or a
/// programmer-chosen name) by [`NameTable::intern`], so the same string yields
/// the same id in every run. The id, not the string, is the key assets are
/// stored and compared under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(transparent)]
pub struct AssetId(u32);

impl AssetId {
    /// The reserved zero id. A handle carries this value until the asset
    /// database binds it; interning never produces it.
    pub const UNSET: AssetId = AssetId(0);

    /// Returns the raw numeric value.
    #[inline]
    pub fn value(self) -> u32 {
        self.0
    }

    /// Whether this id has been assigned by a database.
    #[inline]
    pub fn is_set(self) -> bool {
        self != Self::UNSET
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010x}", self.0)
    }
}

/// FNV-1a, 32 bit. Deterministic across processes and platforms.
fn fnv1a_32(text: &str) -> u32 {
    text.bytes()
        .fold(FNV_OFFSET_BASIS, |hash, byte| {
            (hash ^ u32::from(byte)).wrapping_mul(FNV_PRIME)
        })
}

/// A process-lifetime, bidirectional mapping between strings and [`AssetId`]s.
///
/// `intern` hashes the string and records the reverse mapping so that ids can
/// be turned back into the originating text for diagnostics and substring
/// search. Entries are never evicted; the table lives as long as its owner
/// (normally the asset database, which is handed the table at construction
/// rather than reaching for a global).
///
/// Hash collisions between distinct strings are assumed negligible at the
/// scale of an asset set; if one occurs it is logged and the first mapping
/// wins.
#[derive(Debug, Default)]
pub struct NameTable {
    names: HashMap<AssetId, String>,
}

impl NameTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self {
            names: HashMap::new(),
        }
    }

    /// Returns the id for `text`, recording the reverse mapping.
    ///
    /// Deterministic: the same text always yields the same id. Never returns
    /// [`AssetId::UNSET`]; the zero hash is remapped onto the FNV offset basis.
    pub fn intern(&mut self, text: &str) -> AssetId {
        let hash = fnv1a_32(text);
        let id = AssetId(if hash == 0 { FNV_OFFSET_BASIS } else { hash });

        match self.names.entry(id) {
            Entry::Vacant(entry) => {
                entry.insert(text.to_owned());
            }
            Entry::Occupied(entry) if entry.get() != text => {
                log::warn!(
                    "name hash collision: {id} maps to \"{}\", ignoring \"{text}\"",
                    entry.get()
                );
            }
            Entry::Occupied(_) => {}
        }

        id
    }

    /// Returns the text `id` was interned from, or `None` for unknown ids.
    pub fn lookup(&self, id: AssetId) -> Option<&str> {
        self.names.get(&id).map(String::as_str)
    }

    /// Number of distinct names interned so far.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether no names have been interned yet.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intern_is_deterministic() {
        let mut table = NameTable::new();
        let a = table.intern("res/models/Buildings.obj");
        let b = table.intern("res/models/Buildings.obj");
        assert_eq!(a, b);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn intern_round_trips_through_lookup() {
        let mut table = NameTable::new();
        for name in ["res/materials/M_Metal_Panel.material", "Primitive_Sphere", ""] {
            let id = table.intern(name);
            assert!(id.is_set());
            assert_eq!(table.lookup(id), Some(name));
        }
    }

    #[test]
    fn distinct_names_get_distinct_ids() {
        let mut table = NameTable::new();
        let a = table.intern("res/shaders/sky.wgsl");
        let b = table.intern("res/shaders/fog.wgsl");
        assert_ne!(a, b);
    }

    #[test]
    fn lookup_of_unknown_id_is_none() {
        let table = NameTable::new();
        assert_eq!(table.lookup(AssetId::UNSET), None);
    }

    #[test]
    fn unset_id_reports_unset() {
        assert!(!AssetId::UNSET.is_set());
        assert_eq!(AssetId::UNSET.value(), 0);
    }
}
