// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for CityJSON loading.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for document loading operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading a CityJSON document.
///
/// All three kinds are raised synchronously from the load step and are
/// unrecoverable at that call. Geometry-level problems never surface here;
/// they degrade to empty output during mesh building instead.
#[derive(Error, Debug)]
pub enum Error {
    /// The path does not resolve to a readable file.
    #[error("cityjson file not found or unreadable: {path}")]
    NotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file content is not usable JSON.
    #[error("malformed cityjson input: {0}")]
    MalformedInput(#[from] serde_json::Error),

    /// Valid JSON, but the top-level `type` is absent or not `"CityJSON"`.
    #[error("not a CityJSON document: expected type \"CityJSON\", found {found:?}")]
    InvalidFormat { found: Option<String> },
}
