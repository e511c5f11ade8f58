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

use brume_core::asset::Asset;
use std::error::Error;
use std::path::Path;

/// A trait for types that can import a specific kind of asset from a file.
///
/// This is the "data plane" of asset loading: implementors do the potentially
/// CPU-intensive work of parsing and decoding file contents into a usable,
/// engine-ready payload. Each importer is specialized for a single asset
/// kind `A`, and the asset database consults it both for directory filtering
/// ([`is_valid_extension`](AssetImporter::is_valid_extension)) and for the
/// import itself.
///
/// Importers populate the instance *in place*: [`import`](AssetImporter::import)
/// must be callable on a freshly default-constructed payload (first load) and
/// on a previously populated one (hot-reload), replacing whatever the earlier
/// import left behind.
pub trait AssetImporter<A: Asset>: Send + Sync {
    /// The file extensions this importer accepts, lowercase, without the dot.
    fn extensions(&self) -> &[&str];

    /// Whether a file with `extension` can be handed to this importer.
    /// Accepts a leading dot and any casing.
    fn is_valid_extension(&self, extension: &str) -> bool {
        let extension = extension.strip_prefix('.').unwrap_or(extension);
        self.extensions()
            .iter()
            .any(|accepted| accepted.eq_ignore_ascii_case(extension))
    }

    /// Parses the file at `path` and writes the result into `asset`.
    ///
    /// # Returns
    /// `Ok(())` on success, or a boxed dynamic error on failure. The error
    /// must be thread-safe. On failure the payload's state is unspecified;
    /// the database decides whether to keep the slot.
    fn import(&self, path: &Path, asset: &mut A) -> Result<(), Box<dyn Error + Send + Sync>>;
}
