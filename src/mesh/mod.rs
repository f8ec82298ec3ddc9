//! Mesh data structures and refinement operations

pub mod adjacency;
pub mod geometry;
pub mod smooth;
pub mod subdivide;
pub mod types;

pub use adjacency::*;
pub use geometry::*;
pub use smooth::*;
pub use subdivide::*;
pub use types::*;
