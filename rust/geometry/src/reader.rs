// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Reader facade.
//!
//! Owns a parsed document together with the mesh flattened from it, so the
//! common load-then-visualize path is one call. Both live exactly as long
//! as the reader; rendering collaborators that only need the mesh can clone
//! it out.

use std::path::Path;

use cityjson_lite_core::{load, CityJsonDocument};

use crate::builder::build_mesh;
use crate::error::Result;
use crate::mesh::PolyMesh;

/// CityJSON reader that loads a document and flattens it into a mesh.
///
/// ```rust,ignore
/// use cityjson_lite_geometry::CityJsonReader;
///
/// let reader = CityJsonReader::open("data/twocube.city.json")?;
/// println!("{} polygons", reader.mesh().polygon_count());
///
/// if let Some(buildings) = reader.filter_by_type("Building") {
///     println!("{} building polygons", buildings.polygon_count());
/// }
/// ```
#[derive(Debug)]
pub struct CityJsonReader {
    document: CityJsonDocument,
    mesh: PolyMesh,
}

impl CityJsonReader {
    /// Load a CityJSON file and build its mesh in one step.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let document = load(path)?;
        Ok(Self::from_document(document))
    }

    /// Build a reader over an already-parsed document.
    pub fn from_document(document: CityJsonDocument) -> Self {
        let mesh = build_mesh(&document);
        Self { document, mesh }
    }

    /// The parsed document
    #[inline]
    pub fn document(&self) -> &CityJsonDocument {
        &self.document
    }

    /// The flattened mesh
    #[inline]
    pub fn mesh(&self) -> &PolyMesh {
        &self.mesh
    }

    /// See [`PolyMesh::filter_by_type`]
    pub fn filter_by_type(&self, object_type: &str) -> Option<PolyMesh> {
        self.mesh.filter_by_type(object_type)
    }

    /// See [`PolyMesh::color_by_surface`]
    pub fn color_by_surface(&self) -> Option<PolyMesh> {
        self.mesh.color_by_surface()
    }
}
