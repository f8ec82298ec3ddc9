//! Mesh Refine Library
//!
//! Triangle mesh refinement: one level of midpoint subdivision followed by
//! iterative Laplacian smoothing.

pub mod config;
pub mod error;
pub mod io;
pub mod mesh;
pub mod pipeline;

pub use error::{RefineError, Result};
pub use pipeline::{refine, RefineSummary};
