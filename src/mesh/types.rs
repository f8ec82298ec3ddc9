//! Core mesh data structures

use crate::error::{RefineError, Result};
use nalgebra::{Point3, Vector3};

/// 3D point type
pub type Point = Point3<f64>;

/// 3D vector type
pub type Vec3 = Vector3<f64>;

/// Canonical identity of an undirected edge: smaller vertex index first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdgeKey(pub usize, pub usize);

impl EdgeKey {
    /// Create the key for the edge between `a` and `b`, in either direction
    pub fn new(a: usize, b: usize) -> Self {
        if a <= b {
            EdgeKey(a, b)
        } else {
            EdgeKey(b, a)
        }
    }
}

/// Polygonal face given as an ordered list of vertex indices
///
/// Loaders produce faces of whatever arity the file declares; the
/// refinement engines only accept triangles and reject everything else.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Face {
    /// Vertex indices in winding order
    pub vertex_ids: Vec<usize>,
}

impl Face {
    /// Create a face from any number of vertex indices
    pub fn new(vertex_ids: Vec<usize>) -> Self {
        Self { vertex_ids }
    }

    /// Create a triangular face
    pub fn triangle(vertex_ids: [usize; 3]) -> Self {
        Self {
            vertex_ids: vertex_ids.to_vec(),
        }
    }

    /// Number of vertex indices in this face
    pub fn arity(&self) -> usize {
        self.vertex_ids.len()
    }

    /// The three indices of a triangular face, or `None` for other arities
    pub fn as_triangle(&self) -> Option<[usize; 3]> {
        match self.vertex_ids.as_slice() {
            &[a, b, c] => Some([a, b, c]),
            _ => None,
        }
    }

    /// Edges of the face boundary in winding order, closing back to the first vertex
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let n = self.vertex_ids.len();
        (0..n).map(move |i| (self.vertex_ids[i], self.vertex_ids[(i + 1) % n]))
    }
}

/// Vertex positions plus faces indexing into them
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    /// Vertex positions; a vertex is identified by its index here
    pub vertices: Vec<Point>,

    /// Faces in input order
    pub faces: Vec<Face>,
}

impl Mesh {
    /// Create a new empty mesh
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a triangle mesh from positions and index triples
    pub fn from_triangles(vertices: Vec<Point>, triangles: &[[usize; 3]]) -> Self {
        Self {
            vertices,
            faces: triangles.iter().map(|&t| Face::triangle(t)).collect(),
        }
    }

    /// Get total number of vertices
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Get total number of faces
    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }

    /// Same faces, different positions
    ///
    /// Used to attach smoothed positions back onto the topology they came from.
    pub fn with_vertices(self, vertices: Vec<Point>) -> Self {
        Self {
            vertices,
            faces: self.faces,
        }
    }

    /// Validate every face as a triangle and return the index triples
    ///
    /// Faces are checked in input order; the first failing face decides the
    /// error. Per face the checks run as arity, then index range, then
    /// repeated vertices.
    pub fn triangles(&self) -> Result<Vec<[usize; 3]>> {
        self.faces
            .iter()
            .enumerate()
            .map(|(face_idx, face)| validate_triangle(face_idx, face, self.vertices.len()))
            .collect()
    }
}

/// Check a single face against the triangle mesh invariants
pub fn validate_triangle(face_idx: usize, face: &Face, vertex_count: usize) -> Result<[usize; 3]> {
    let tri = face.as_triangle().ok_or(RefineError::MalformedFace {
        face: face_idx,
        arity: face.arity(),
    })?;

    if let Some(&index) = tri.iter().find(|&&v| v >= vertex_count) {
        return Err(RefineError::InvalidIndex {
            face: face_idx,
            index,
            vertex_count,
        });
    }

    let [a, b, c] = tri;
    if a == b || b == c || a == c {
        return Err(RefineError::DegenerateFace {
            face: face_idx,
            indices: tri,
        });
    }

    Ok(tri)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_triangle_mesh() -> Mesh {
        Mesh::from_triangles(
            vec![
                Point::new(0.0, 0.0, 0.0),
                Point::new(1.0, 0.0, 0.0),
                Point::new(0.0, 1.0, 0.0),
            ],
            &[[0, 1, 2]],
        )
    }

    #[test]
    fn test_edge_key_canonical() {
        assert_eq!(EdgeKey::new(3, 1), EdgeKey(1, 3));
        assert_eq!(EdgeKey::new(1, 3), EdgeKey::new(3, 1));
        assert_eq!(EdgeKey::new(2, 2), EdgeKey(2, 2));
    }

    #[test]
    fn test_face_edges_wrap_around() {
        let face = Face::triangle([4, 7, 9]);
        let edges: Vec<_> = face.edges().collect();
        assert_eq!(edges, vec![(4, 7), (7, 9), (9, 4)]);
    }

    #[test]
    fn test_as_triangle() {
        assert_eq!(Face::new(vec![0, 1, 2]).as_triangle(), Some([0, 1, 2]));
        assert_eq!(Face::new(vec![0, 1, 2, 3]).as_triangle(), None);
        assert_eq!(Face::new(vec![0, 1]).as_triangle(), None);
    }

    #[test]
    fn test_mesh_creation() {
        let mut mesh = Mesh::new();
        assert_eq!(mesh.num_vertices(), 0);
        assert_eq!(mesh.num_faces(), 0);

        mesh.vertices.push(Point::new(0.0, 0.0, 0.0));
        assert_eq!(mesh.num_vertices(), 1);
    }

    #[test]
    fn test_triangles_valid() {
        let mesh = make_triangle_mesh();
        assert_eq!(mesh.triangles().unwrap(), vec![[0, 1, 2]]);
    }

    #[test]
    fn test_triangles_rejects_quad() {
        let mut mesh = make_triangle_mesh();
        mesh.vertices.push(Point::new(1.0, 1.0, 0.0));
        mesh.faces.push(Face::new(vec![0, 1, 3, 2]));

        match mesh.triangles() {
            Err(RefineError::MalformedFace { face, arity }) => {
                assert_eq!(face, 1);
                assert_eq!(arity, 4);
            }
            other => panic!("expected MalformedFace, got {:?}", other),
        }
    }

    #[test]
    fn test_triangles_rejects_out_of_range() {
        let mut mesh = make_triangle_mesh();
        mesh.faces.push(Face::triangle([0, 2, 5]));

        match mesh.triangles() {
            Err(RefineError::InvalidIndex {
                face,
                index,
                vertex_count,
            }) => {
                assert_eq!(face, 1);
                assert_eq!(index, 5);
                assert_eq!(vertex_count, 3);
            }
            other => panic!("expected InvalidIndex, got {:?}", other),
        }
    }

    #[test]
    fn test_triangles_rejects_repeated_vertex() {
        let mut mesh = make_triangle_mesh();
        mesh.faces.push(Face::triangle([1, 2, 1]));

        assert!(matches!(
            mesh.triangles(),
            Err(RefineError::DegenerateFace { face: 1, .. })
        ));
    }

    #[test]
    fn test_arity_checked_before_indices() {
        // Quad with an out-of-range index reports the arity problem
        let face = Face::new(vec![0, 1, 2, 99]);
        assert!(matches!(
            validate_triangle(0, &face, 3),
            Err(RefineError::MalformedFace { .. })
        ));
    }

    #[test]
    fn test_with_vertices_keeps_faces() {
        let mesh = make_triangle_mesh();
        let moved = vec![Point::new(5.0, 5.0, 5.0); 3];
        let updated = mesh.clone().with_vertices(moved.clone());

        assert_eq!(updated.faces, mesh.faces);
        assert_eq!(updated.vertices, moved);
    }
}
