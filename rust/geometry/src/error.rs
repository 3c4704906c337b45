use thiserror::Error;

/// Result type for mesh extraction operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while producing a mesh.
///
/// Mesh building itself is infallible; the only fallible step is loading
/// the document, so this wraps the core loader error. Geometry-level
/// variance degrades to empty output instead of surfacing here.
#[derive(Error, Debug)]
pub enum Error {
    #[error("document error: {0}")]
    Document(#[from] cityjson_lite_core::Error),
}
