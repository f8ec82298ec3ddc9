//! Geometric operations for triangle meshes

use crate::error::Result;
use crate::mesh::types::{EdgeKey, Face, Mesh, Point};
use std::collections::HashSet;

/// Arithmetic mean of two positions
pub fn midpoint(p1: &Point, p2: &Point) -> Point {
    Point::from((p1.coords + p2.coords) * 0.5)
}

/// Compute the distance between two points
pub fn distance(p1: &Point, p2: &Point) -> f64 {
    (p2 - p1).norm()
}

/// Mean position of a set of points, or `None` when there are none
pub fn centroid(points: &[Point]) -> Option<Point> {
    if points.is_empty() {
        return None;
    }

    let sum = points.iter().fold(Point::origin().coords, |acc, p| acc + p.coords);
    Some(Point::from(sum / points.len() as f64))
}

/// Mean squared distance of the points from their centroid
///
/// Smoothing contracts a mesh, so this drops pass after pass on closed
/// topologies; it is zero for an empty or single-point set.
pub fn dispersion(points: &[Point]) -> f64 {
    let Some(center) = centroid(points) else {
        return 0.0;
    };

    let sum: f64 = points.iter().map(|p| (p - center).norm_squared()).sum();
    sum / points.len() as f64
}

/// Number of distinct undirected edges across all faces
pub fn count_distinct_edges(faces: &[Face]) -> usize {
    faces
        .iter()
        .flat_map(|face| face.edges())
        .map(|(a, b)| EdgeKey::new(a, b))
        .collect::<HashSet<_>>()
        .len()
}

/// Axis-aligned bounding box as (min corner, max corner)
pub fn bounding_box(points: &[Point]) -> Option<(Point, Point)> {
    let first = points.first()?;

    let bounds = points.iter().skip(1).fold((*first, *first), |(lo, hi), p| {
        (
            Point::new(lo.x.min(p.x), lo.y.min(p.y), lo.z.min(p.z)),
            Point::new(hi.x.max(p.x), hi.y.max(p.y), hi.z.max(p.z)),
        )
    });

    Some(bounds)
}

/// Area of the triangle spanned by three points
pub fn triangle_area(p0: &Point, p1: &Point, p2: &Point) -> f64 {
    (p1 - p0).cross(&(p2 - p0)).norm() / 2.0
}

/// Total area of a triangle mesh
///
/// Fails on the same malformed faces the refinement engines reject.
pub fn surface_area(mesh: &Mesh) -> Result<f64> {
    let triangles = mesh.triangles()?;

    let v = &mesh.vertices;
    Ok(triangles
        .iter()
        .map(|&[a, b, c]| triangle_area(&v[a], &v[b], &v[c]))
        .sum())
}

/// Vertices not referenced by any face
pub fn count_isolated_vertices(mesh: &Mesh) -> usize {
    let referenced: HashSet<usize> = mesh
        .faces
        .iter()
        .flat_map(|face| face.vertex_ids.iter().copied())
        .collect();

    (0..mesh.num_vertices())
        .filter(|idx| !referenced.contains(idx))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn make_square_mesh() -> Mesh {
        Mesh::from_triangles(
            vec![
                Point::new(0.0, 0.0, 0.0),
                Point::new(1.0, 0.0, 0.0),
                Point::new(1.0, 1.0, 0.0),
                Point::new(0.0, 1.0, 0.0),
            ],
            &[[0, 1, 2], [0, 2, 3]],
        )
    }

    #[test]
    fn test_midpoint() {
        let m = midpoint(&Point::new(0.0, 0.0, 0.0), &Point::new(1.0, 2.0, -4.0));

        assert_relative_eq!(m.x, 0.5, epsilon = 1e-12);
        assert_relative_eq!(m.y, 1.0, epsilon = 1e-12);
        assert_relative_eq!(m.z, -2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_distance() {
        let p1 = Point::new(0.0, 0.0, 0.0);
        let p2 = Point::new(3.0, 4.0, 0.0);

        let d = distance(&p1, &p2);
        assert_relative_eq!(d, 5.0, epsilon = 1e-10); // 3-4-5 triangle
    }

    #[test]
    fn test_centroid() {
        let mesh = make_square_mesh();
        let c = centroid(&mesh.vertices).unwrap();

        assert_relative_eq!(c.x, 0.5, epsilon = 1e-12);
        assert_relative_eq!(c.y, 0.5, epsilon = 1e-12);
        assert!(centroid(&[]).is_none());
    }

    #[test]
    fn test_dispersion() {
        let mesh = make_square_mesh();

        // Every corner sits at squared distance 0.5 from the center
        assert_relative_eq!(dispersion(&mesh.vertices), 0.5, epsilon = 1e-12);
        assert_eq!(dispersion(&[Point::new(3.0, 2.0, 1.0)]), 0.0);
        assert_eq!(dispersion(&[]), 0.0);
    }

    #[test]
    fn test_count_distinct_edges() {
        let mesh = make_square_mesh();

        // 4 boundary edges + 1 shared diagonal
        assert_eq!(count_distinct_edges(&mesh.faces), 5);
        assert_eq!(count_distinct_edges(&[]), 0);
    }

    #[test]
    fn test_bounding_box() {
        let mesh = make_square_mesh();
        let (lo, hi) = bounding_box(&mesh.vertices).unwrap();

        assert_eq!(lo, Point::new(0.0, 0.0, 0.0));
        assert_eq!(hi, Point::new(1.0, 1.0, 0.0));
        assert!(bounding_box(&[]).is_none());
    }

    #[test]
    fn test_surface_area() {
        let mesh = make_square_mesh();
        assert_relative_eq!(surface_area(&mesh).unwrap(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_count_isolated_vertices() {
        let mut mesh = make_square_mesh();
        assert_eq!(count_isolated_vertices(&mesh), 0);

        mesh.vertices.push(Point::new(9.0, 9.0, 9.0));
        assert_eq!(count_isolated_vertices(&mesh), 1);
    }
}
