//! One level of midpoint subdivision for triangle meshes

use crate::error::Result;
use crate::mesh::geometry::midpoint;
use crate::mesh::types::{EdgeKey, Face, Mesh, Point};
use std::collections::HashMap;

/// Split every triangle into four using shared edge midpoints
///
/// The result keeps every original vertex at its original index and appends
/// one vertex per distinct edge. Each face `(v0, v1, v2)` is replaced, in
/// input order, by `(v0, m0, m2)`, `(v1, m1, m0)`, `(v2, m2, m1)` and
/// `(m0, m1, m2)` where `m0`, `m1`, `m2` are the midpoints of `v0-v1`,
/// `v1-v2` and `v2-v0`.
///
/// # Errors
///
/// All faces are validated before any output is built, so the call either
/// succeeds completely or reports the first offending face:
/// - [`RefineError::MalformedFace`](crate::RefineError::MalformedFace) for non-triangles
/// - [`RefineError::InvalidIndex`](crate::RefineError::InvalidIndex) for out-of-range indices
/// - [`RefineError::DegenerateFace`](crate::RefineError::DegenerateFace) for repeated indices
///
/// # Example
/// ```
/// use mesh_refine::mesh::{subdivide, Mesh, Point};
///
/// let mesh = Mesh::from_triangles(
///     vec![
///         Point::new(0.0, 0.0, 0.0),
///         Point::new(1.0, 0.0, 0.0),
///         Point::new(0.0, 1.0, 0.0),
///     ],
///     &[[0, 1, 2]],
/// );
///
/// let refined = subdivide(mesh)?;
/// assert_eq!(refined.num_vertices(), 6);
/// assert_eq!(refined.num_faces(), 4);
/// # Ok::<(), mesh_refine::RefineError>(())
/// ```
pub fn subdivide(mesh: Mesh) -> Result<Mesh> {
    let triangles = mesh.triangles()?;

    log::info!(
        "Subdividing mesh with {} vertices and {} faces",
        mesh.num_vertices(),
        mesh.num_faces()
    );

    let Mesh { mut vertices, .. } = mesh;
    let original_count = vertices.len();
    let mut faces = Vec::with_capacity(triangles.len() * 4);

    // Map from edge key to midpoint vertex index, alive for this call only
    let mut edge_midpoints: HashMap<EdgeKey, usize> = HashMap::new();

    for &[v0, v1, v2] in &triangles {
        let m0 = get_or_create_midpoint(v0, v1, &mut vertices, &mut edge_midpoints);
        let m1 = get_or_create_midpoint(v1, v2, &mut vertices, &mut edge_midpoints);
        let m2 = get_or_create_midpoint(v2, v0, &mut vertices, &mut edge_midpoints);

        // Corner triangles
        faces.push(Face::triangle([v0, m0, m2]));
        faces.push(Face::triangle([v1, m1, m0]));
        faces.push(Face::triangle([v2, m2, m1]));
        // Center triangle
        faces.push(Face::triangle([m0, m1, m2]));
    }

    log::debug!(
        "Inserted {} edge midpoints",
        vertices.len() - original_count
    );
    log::info!(
        "Subdivided mesh has {} vertices and {} faces",
        vertices.len(),
        faces.len()
    );

    Ok(Mesh { vertices, faces })
}

/// Look up the midpoint of edge `a-b`, appending it on first use
fn get_or_create_midpoint(
    a: usize,
    b: usize,
    vertices: &mut Vec<Point>,
    edge_midpoints: &mut HashMap<EdgeKey, usize>,
) -> usize {
    *edge_midpoints.entry(EdgeKey::new(a, b)).or_insert_with(|| {
        let mid = midpoint(&vertices[a], &vertices[b]);
        vertices.push(mid);
        vertices.len() - 1
    })
}
