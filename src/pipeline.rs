//! Subdivide-then-smooth refinement pipeline

use crate::config::RefineConfig;
use crate::error::Result;
use crate::mesh::{count_distinct_edges, smooth_mesh, subdivide, Mesh};
use serde::{Deserialize, Serialize};

/// Mesh size at one point of the pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeshCounts {
    pub vertices: usize,
    pub faces: usize,
    pub edges: usize,
}

impl MeshCounts {
    /// Count vertices, faces and distinct edges of a mesh
    pub fn of(mesh: &Mesh) -> Self {
        Self {
            vertices: mesh.num_vertices(),
            faces: mesh.num_faces(),
            edges: count_distinct_edges(&mesh.faces),
        }
    }
}

/// What a refinement run did
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefineSummary {
    /// Counts of the input mesh
    pub input: MeshCounts,

    /// Counts of the refined mesh
    pub output: MeshCounts,

    /// Parameters used for smoothing
    pub config: RefineConfig,
}

impl RefineSummary {
    /// Number of midpoint vertices added by subdivision
    pub fn added_vertices(&self) -> usize {
        self.output.vertices - self.input.vertices
    }

    /// Print summary statistics
    pub fn print_summary(&self) {
        println!("\n{}", "=".repeat(60));
        println!("REFINEMENT RESULTS");
        println!("{}", "=".repeat(60));
        println!();
        println!("  Input:");
        println!("    Vertices: {}", self.input.vertices);
        println!("    Faces:    {}", self.input.faces);
        println!("    Edges:    {}", self.input.edges);
        println!();
        println!("  Output:");
        println!("    Vertices: {}", self.output.vertices);
        println!("    Faces:    {}", self.output.faces);
        println!("    Edges:    {}", self.output.edges);
        println!();
        println!("  Smoothing:");
        println!("    Iterations: {}", self.config.iterations);
        println!("    Factor:     {:.3}", self.config.factor);
        println!();
        println!("{}", "=".repeat(60));
    }
}

/// Subdivide once, then smooth the subdivided mesh
///
/// The smoothing parameters are validated before any work is done.
pub fn refine(mesh: Mesh, config: &RefineConfig) -> Result<(Mesh, RefineSummary)> {
    config.validate()?;

    let input = MeshCounts::of(&mesh);
    let subdivided = subdivide(mesh)?;

    let refined = smooth_mesh(subdivided, config.iterations, config.factor)?;

    let summary = RefineSummary {
        input,
        output: MeshCounts::of(&refined),
        config: config.clone(),
    };

    log::info!(
        "Refined mesh: {} -> {} vertices, {} -> {} faces",
        summary.input.vertices,
        summary.output.vertices,
        summary.input.faces,
        summary.output.faces
    );

    Ok((refined, summary))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RefineError;
    use crate::mesh::Point;

    fn make_octahedron() -> Mesh {
        Mesh::from_triangles(
            vec![
                Point::new(1.0, 0.0, 0.0),
                Point::new(-1.0, 0.0, 0.0),
                Point::new(0.0, 1.0, 0.0),
                Point::new(0.0, -1.0, 0.0),
                Point::new(0.0, 0.0, 1.0),
                Point::new(0.0, 0.0, -1.0),
            ],
            &[
                [0, 2, 4],
                [2, 1, 4],
                [1, 3, 4],
                [3, 0, 4],
                [2, 0, 5],
                [1, 2, 5],
                [3, 1, 5],
                [0, 3, 5],
            ],
        )
    }

    #[test]
    fn test_refine_counts() {
        let (refined, summary) = refine(make_octahedron(), &RefineConfig::default()).unwrap();

        assert_eq!(summary.input, MeshCounts { vertices: 6, faces: 8, edges: 12 });
        assert_eq!(refined.num_vertices(), 18);
        assert_eq!(refined.num_faces(), 32);
        assert_eq!(summary.added_vertices(), 12);
        // Each edge splits in two plus three interior edges per face
        assert_eq!(summary.output.edges, 2 * 12 + 3 * 8);
    }

    #[test]
    fn test_refine_zero_iterations_is_subdivision() {
        let config = RefineConfig::new(0, 0.6);
        let (refined, _) = refine(make_octahedron(), &config).unwrap();
        let subdivided = subdivide(make_octahedron()).unwrap();

        assert_eq!(refined, subdivided);
    }

    #[test]
    fn test_refine_rejects_bad_factor() {
        let config = RefineConfig::new(4, 2.0);
        assert!(matches!(
            refine(make_octahedron(), &config),
            Err(RefineError::InvalidParameter(_))
        ));
    }
}
