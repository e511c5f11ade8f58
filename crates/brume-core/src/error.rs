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

//! Defines the error hierarchy for asset database operations.
//!
//! Every precondition violation surfaces as a value of [`AssetError`];
//! nothing in the library aborts the process. Callers propagate with `?`
//! and decide at the boundary whether a failure is fatal for them.

use crate::asset::AssetId;
use std::error::Error;
use std::fmt;

/// An error raised by the asset database.
#[derive(Debug)]
pub enum AssetError {
    /// The backing file for a load/reload does not exist.
    SourceMissing {
        /// The path that was checked.
        path: String,
    },
    /// An id was passed that no string was ever interned for, or a weak
    /// handle's asset is already gone.
    UnknownId {
        /// The id that could not be resolved.
        id: AssetId,
    },
    /// No importer is registered for the requested asset kind.
    NoImporter {
        /// Type name of the kind missing an importer.
        kind: &'static str,
    },
    /// The kind's importer failed to parse the backing file.
    Import {
        /// The file being imported.
        path: String,
        /// The importer's underlying error.
        source: Box<dyn Error + Send + Sync>,
    },
    /// A procedural name is already taken for this kind.
    DuplicateProcedural {
        /// The contested name.
        name: String,
        /// Type name of the kind.
        kind: &'static str,
    },
    /// The handle passed to `register_procedural` is already bound to a
    /// different id. Identities are assigned exactly once.
    HandleBound {
        /// The id the handle is already bound to.
        id: AssetId,
    },
    /// `find` matched no entry for the given name fragment.
    NotFound {
        /// The fragment that was searched for.
        fragment: String,
        /// Type name of the kind that was searched.
        kind: &'static str,
    },
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetError::SourceMissing { path } => {
                write!(f, "asset not found at path: {path}")
            }
            AssetError::UnknownId { id } => {
                write!(f, "no name was ever interned for asset id {id}")
            }
            AssetError::NoImporter { kind } => {
                write!(f, "no importer registered for asset kind {kind}")
            }
            AssetError::Import { path, source } => {
                write!(f, "failed to import '{path}': {source}")
            }
            AssetError::DuplicateProcedural { name, kind } => {
                write!(f, "procedural asset ({name}) already exists for kind {kind}")
            }
            AssetError::HandleBound { id } => {
                write!(f, "handle is already bound to asset id {id}")
            }
            AssetError::NotFound { fragment, kind } => {
                write!(f, "could not find {kind} asset matching \"{fragment}\"")
            }
        }
    }
}

impl Error for AssetError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            AssetError::Import { source, .. } => {
                let source: &(dyn Error + 'static) = source.as_ref();
                Some(source)
            }
            _ => None,
        }
    }
}
