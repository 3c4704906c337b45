// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Typed CityJSON document model.
//!
//! The model is deliberately lenient everywhere except the top-level `type`
//! discriminator: missing collections default to empty, unknown geometry
//! types collapse to [`GeometryType::Other`], and unknown keys are ignored.
//! A document that is partially malformed still yields its valid parts.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::boundaries::BoundaryNode;

/// A parsed CityJSON document.
///
/// Vertex indices used by geometry boundaries resolve into [`vertices`];
/// the position in the array is the vertex id. City objects are keyed by
/// their id; CityJSON declares object order irrelevant, so the sorted map
/// order is the document's canonical mapping order.
///
/// [`vertices`]: CityJsonDocument::vertices
#[derive(Debug, Clone, Deserialize)]
pub struct CityJsonDocument {
    /// Format discriminator, always `"CityJSON"` after a successful load
    #[serde(rename = "type")]
    pub kind: String,
    /// Declared CityJSON version, e.g. `"1.1"`
    #[serde(default)]
    pub version: Option<String>,
    /// Shared vertex pool; index = vertex id
    #[serde(default)]
    pub vertices: Vec<[f64; 3]>,
    /// City objects keyed by object id
    #[serde(rename = "CityObjects", default)]
    pub city_objects: BTreeMap<String, CityObject>,
}

impl CityJsonDocument {
    /// Number of vertices in the shared pool
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of city objects
    #[inline]
    pub fn object_count(&self) -> usize {
        self.city_objects.len()
    }
}

/// One city object (a building, bridge, road, ...).
///
/// The object id is the key in [`CityJsonDocument::city_objects`], not a
/// field here; the document owns the mapping.
#[derive(Debug, Clone, Deserialize)]
pub struct CityObject {
    /// Free-form object type, e.g. `"Building"`; `"Unknown"` when absent
    #[serde(rename = "type", default = "unknown_object_type")]
    pub kind: String,
    /// Geometry records, in document order
    #[serde(default)]
    pub geometry: Vec<Geometry>,
}

fn unknown_object_type() -> String {
    "Unknown".to_string()
}

/// One geometry record of a city object.
#[derive(Debug, Clone, Deserialize)]
pub struct Geometry {
    /// Geometry variant; drives how `boundaries` is nested
    #[serde(rename = "type", default)]
    pub kind: GeometryType,
    /// Nested vertex-index tree, interpreted per variant
    #[serde(default)]
    pub boundaries: Vec<BoundaryNode>,
}

/// The geometry variants this adapter extracts faces from.
///
/// Every other CityJSON geometry type (`MultiPoint`, `MultiLineString`,
/// `GeometryInstance`, ...) collapses to [`GeometryType::Other`] and
/// contributes zero faces. Matching on this enum is exhaustive, so a new
/// supported variant is a compile-time-checked extension point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "String")]
pub enum GeometryType {
    /// Boundaries: shells → faces → rings
    Solid,
    /// Boundaries: faces → rings
    MultiSurface,
    /// Boundaries: faces → rings, topologically connected
    CompositeSurface,
    /// Anything else; contributes no faces
    #[default]
    Other,
}

impl From<String> for GeometryType {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "Solid" => GeometryType::Solid,
            "MultiSurface" => GeometryType::MultiSurface,
            "CompositeSurface" => GeometryType::CompositeSurface,
            _ => GeometryType::Other,
        }
    }
}
