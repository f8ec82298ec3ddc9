//! Error types for mesh refinement
//!
//! This module defines all error types that can occur while loading meshes,
//! validating topology, subdividing, smoothing and writing results.

use thiserror::Error;

/// Error types for mesh refinement operations
///
/// The first four variants are raised by the subdivision and smoothing
/// engines; the rest come from the I/O layer and configuration handling.
#[derive(Error, Debug)]
pub enum RefineError {
    /// Face does not have exactly three vertex indices
    ///
    /// Only triangle meshes can be subdivided or smoothed. Loaders hand over
    /// faces of any arity, so quads and n-gons surface here.
    #[error("Malformed face {face}: expected 3 vertex indices, found {arity}")]
    MalformedFace { face: usize, arity: usize },

    /// Face references a vertex that does not exist
    #[error("Invalid index in face {face}: vertex {index} out of range (mesh has {vertex_count} vertices)")]
    InvalidIndex {
        face: usize,
        index: usize,
        vertex_count: usize,
    },

    /// Face repeats a vertex index
    #[error("Degenerate face {face}: repeated vertex in {indices:?}")]
    DegenerateFace { face: usize, indices: [usize; 3] },

    /// Parameter outside its accepted range
    ///
    /// Raised for smoothing factors outside `[0, 1]`.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// File I/O error
    ///
    /// Wraps standard I/O errors from file operations.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Wavefront OBJ file could not be parsed
    #[error("OBJ parse error on line {line}: {message}")]
    ObjParse { line: usize, message: String },

    /// JSON mesh or report (de)serialization error
    #[error("JSON error: {0}")]
    JsonError(String),

    /// VTK file writing error
    #[error("VTK error: {0}")]
    VtkError(String),

    /// Configuration error
    ///
    /// Invalid configuration file format, missing required fields,
    /// or invalid parameter values.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// File extension not recognized by any reader or writer
    #[error("Unsupported mesh format: {0}")]
    UnsupportedFormat(String),
}

/// Convenience type alias for Results with [`RefineError`]
///
/// # Example
/// ```
/// use mesh_refine::Result;
///
/// fn my_function() -> Result<()> {
///     Ok(())
/// }
/// ```
pub type Result<T> = std::result::Result<T, RefineError>;
