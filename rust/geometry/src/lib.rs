//! CityJSON-Lite Geometry
//!
//! Flattens CityJSON boundary representations into an indexed polygon mesh
//! for rendering, with per-polygon city object attributes.

pub mod builder;
pub mod error;
pub mod mesh;
pub mod reader;

// Re-export nalgebra types for convenience
pub use nalgebra::Point3;

pub use builder::build_mesh;
pub use error::{Error, Result};
pub use mesh::PolyMesh;
pub use reader::CityJsonReader;
