// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # CityJSON-Lite Core
//!
//! Loader and typed document model for [CityJSON](https://www.cityjson.org/),
//! the JSON-based exchange format for 3D city models.
//!
//! This crate covers the document side only: reading a file, validating the
//! `"type": "CityJSON"` discriminator and exposing city objects, geometries
//! and boundary index trees. Turning those boundaries into a renderable mesh
//! is the job of `cityjson-lite-geometry`.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use cityjson_lite_core::load;
//!
//! let document = load("data/rotterdam.city.json")?;
//! println!(
//!     "{} vertices, {} city objects",
//!     document.vertex_count(),
//!     document.object_count()
//! );
//!
//! for (id, object) in &document.city_objects {
//!     println!("{id}: {} ({} geometries)", object.kind, object.geometry.len());
//! }
//! ```
//!
//! ## Error model
//!
//! Loading fails with exactly one of [`Error::NotFound`],
//! [`Error::MalformedInput`] or [`Error::InvalidFormat`]. Everything below
//! the top-level discriminator decodes leniently: unknown geometry types,
//! odd boundary nesting and missing collections become empty output later,
//! never load errors.

pub mod boundaries;
pub mod document;
pub mod error;
pub mod loader;

pub use boundaries::{BoundaryNode, FaceBoundary};
pub use document::{CityJsonDocument, CityObject, Geometry, GeometryType};
pub use error::{Error, Result};
pub use loader::load;
