//! Simple JSON mesh format

use crate::error::{RefineError, Result};
use crate::mesh::{Face, Mesh, Point};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

#[derive(Debug, Serialize, Deserialize)]
struct JsonMesh {
    vertices: Vec<[f64; 3]>,
    faces: Vec<Vec<usize>>,
}

pub fn read_json_mesh<P: AsRef<Path>>(path: P) -> Result<Mesh> {
    let file = File::open(path.as_ref())?;

    let reader = BufReader::new(file);
    let json_mesh: JsonMesh = serde_json::from_reader(reader).map_err(|e| {
        RefineError::JsonError(format!("Failed to parse JSON mesh: {}", e))
    })?;

    let mesh = Mesh {
        vertices: json_mesh
            .vertices
            .into_iter()
            .map(|[x, y, z]| Point::new(x, y, z))
            .collect(),
        faces: json_mesh.faces.into_iter().map(Face::new).collect(),
    };

    log::info!(
        "Read JSON mesh {:?}: {} vertices, {} faces",
        path.as_ref(),
        mesh.num_vertices(),
        mesh.num_faces()
    );

    Ok(mesh)
}

pub fn write_json_mesh<P: AsRef<Path>>(mesh: &Mesh, path: P) -> Result<()> {
    let json_mesh = JsonMesh {
        vertices: mesh.vertices.iter().map(|p| [p.x, p.y, p.z]).collect(),
        faces: mesh.faces.iter().map(|f| f.vertex_ids.clone()).collect(),
    };

    let file = File::create(path.as_ref())?;
    serde_json::to_writer_pretty(file, &json_mesh).map_err(|e| {
        RefineError::JsonError(format!("Failed to write JSON mesh: {}", e))
    })?;

    Ok(())
}
