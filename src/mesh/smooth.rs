//! Iterative Laplacian smoothing
//!
//! Each pass moves every vertex toward the mean of its edge neighbors:
//!
//! ```text
//! p' = (1 - factor) * p + factor * mean(neighbors(p))
//! ```
//!
//! A pass reads only the positions from the previous pass (double buffering),
//! so the result does not depend on vertex visiting order.

use crate::error::{RefineError, Result};
use crate::mesh::adjacency::VertexAdjacency;
use crate::mesh::types::{Mesh, Point};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Smooth vertex positions, returning one position per input vertex
///
/// Faces are not changed and no vertices are added or removed. With
/// `iterations == 0` or `factor == 0.0` the input positions come back
/// unchanged. Vertices that no face touches never move.
///
/// # Errors
///
/// - [`RefineError::InvalidParameter`] when `factor` is outside `[0, 1]` or NaN
/// - the face validation errors of [`Mesh::triangles`]
pub fn smooth(mesh: Mesh, iterations: u32, factor: f64) -> Result<Vec<Point>> {
    validate_factor(factor)?;
    let triangles = mesh.triangles()?;

    let adjacency = VertexAdjacency::build(mesh.num_vertices(), &triangles);
    log::info!(
        "Smoothing {} vertices over {} edges: {} iterations, factor {}",
        mesh.num_vertices(),
        adjacency.num_edges(),
        iterations,
        factor
    );

    let mut current = mesh.vertices;
    let mut next = current.clone();

    for pass in 0..iterations {
        relax_pass(&adjacency, &current, &mut next, factor);
        std::mem::swap(&mut current, &mut next);
        log::debug!("Smoothing pass {} complete", pass + 1);
    }

    Ok(current)
}

/// Smooth a mesh and reattach the new positions to its faces
pub fn smooth_mesh(mesh: Mesh, iterations: u32, factor: f64) -> Result<Mesh> {
    let faces = mesh.faces.clone();
    let vertices = smooth(mesh, iterations, factor)?;
    Ok(Mesh { vertices, faces })
}

/// Reject blend factors that would leave the convex combination
pub fn validate_factor(factor: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&factor) {
        return Err(RefineError::InvalidParameter(format!(
            "smoothing factor must be within [0, 1], got {}",
            factor
        )));
    }
    Ok(())
}

/// Run one relaxation pass from `current` into `next`
fn relax_pass(adjacency: &VertexAdjacency, current: &[Point], next: &mut [Point], factor: f64) {
    // Threshold for parallelization (below this, overhead isn't worth it)
    #[cfg(feature = "parallel")]
    const PARALLEL_THRESHOLD: usize = 10_000;

    #[cfg(feature = "parallel")]
    {
        if current.len() >= PARALLEL_THRESHOLD {
            next.par_iter_mut().enumerate().for_each(|(i, out)| {
                *out = relaxed_position(adjacency, current, i, factor);
            });
            return;
        }
    }

    for (i, out) in next.iter_mut().enumerate() {
        *out = relaxed_position(adjacency, current, i, factor);
    }
}

/// New position of vertex `i` given the pre-pass positions
fn relaxed_position(adjacency: &VertexAdjacency, current: &[Point], i: usize, factor: f64) -> Point {
    let neighbors = adjacency.neighbors(i);
    if neighbors.is_empty() {
        return current[i];
    }

    let sum = neighbors
        .iter()
        .fold(Point::origin().coords, |acc, &n| acc + current[n].coords);
    let mean = sum / neighbors.len() as f64;

    Point::from(current[i].coords * (1.0 - factor) + mean * factor)
}
