// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Document loading.
//!
//! Loading is staged so each failure mode surfaces at its own layer:
//!
//! 1. file read ([`Error::NotFound`])
//! 2. JSON parse ([`Error::MalformedInput`])
//! 3. `"type": "CityJSON"` discriminator check ([`Error::InvalidFormat`])
//! 4. typed decode into [`CityJsonDocument`]
//!
//! The discriminator is checked on the raw value before the typed decode,
//! so a wrong `type` is fatal before any geometry is touched.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde_json::Value;

use crate::document::CityJsonDocument;
use crate::error::{Error, Result};

/// Load a CityJSON document from a file.
///
/// The file is assumed to contain UTF-8 JSON text. One blocking read, no
/// other side effects.
pub fn load<P: AsRef<Path>>(path: P) -> Result<CityJsonDocument> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(|source| Error::NotFound {
        path: path.to_path_buf(),
        source,
    })?;
    raw.parse()
}

impl FromStr for CityJsonDocument {
    type Err = Error;

    /// Parse a CityJSON document from JSON text.
    fn from_str(raw: &str) -> Result<CityJsonDocument> {
        let value: Value = serde_json::from_str(raw)?;
        CityJsonDocument::from_value(value)
    }
}

impl CityJsonDocument {
    /// Decode a CityJSON document from an already-parsed JSON value.
    ///
    /// Validates the top-level `type` discriminator first; everything else
    /// decodes leniently (see the [document model](crate::document)).
    pub fn from_value(value: Value) -> Result<CityJsonDocument> {
        match value.get("type").and_then(Value::as_str) {
            Some("CityJSON") => {}
            other => {
                return Err(Error::InvalidFormat {
                    found: other.map(str::to_string),
                })
            }
        }
        Ok(serde_json::from_value(value)?)
    }
}
