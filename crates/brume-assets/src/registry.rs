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

//! A registry holding one importer per asset kind.

use brume_core::asset::Asset;
use brume_lanes::AssetImporter;
use std::any::{Any, TypeId};
use std::collections::HashMap;

/// Kind-keyed store of importers. At most one importer per kind; registering
/// a second replaces the first.
#[derive(Default)]
pub(crate) struct ImporterRegistry {
    importers: HashMap<TypeId, Box<dyn Any + Send + Sync>>,
}

impl ImporterRegistry {
    pub(crate) fn new() -> Self {
        Self {
            importers: HashMap::new(),
        }
    }

    pub(crate) fn register<A: Asset>(&mut self, importer: impl AssetImporter<A> + 'static) {
        let erased: Box<dyn AssetImporter<A>> = Box::new(importer);
        let previous = self.importers.insert(TypeId::of::<A>(), Box::new(erased));
        if previous.is_some() {
            log::debug!(
                "replaced the importer for asset kind {}",
                std::any::type_name::<A>()
            );
        }
    }

    pub(crate) fn get<A: Asset>(&self) -> Option<&dyn AssetImporter<A>> {
        self.importers
            .get(&TypeId::of::<A>())
            .and_then(|slot| slot.downcast_ref::<Box<dyn AssetImporter<A>>>())
            .map(|boxed| boxed.as_ref())
    }
}
