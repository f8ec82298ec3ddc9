//! Wavefront OBJ reader and writer
//!
//! Only geometry is kept: `v` records become vertices and `f` records become
//! faces. Face tokens such as `3/1/2` or `3//2` keep just the vertex index.
//! Texture coordinates, normals, groups and materials are skipped.

use crate::error::{RefineError, Result};
use crate::mesh::{Face, Mesh, Point};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Read an OBJ file into a mesh
///
/// Faces keep whatever arity the file declares; quads and n-gons are
/// rejected later by the refinement engines, not here.
pub fn read_obj<P: AsRef<Path>>(path: P) -> Result<Mesh> {
    let file = File::open(path.as_ref())?;
    let mesh = parse_obj(BufReader::new(file))?;

    log::info!(
        "Read OBJ {:?}: {} vertices, {} faces",
        path.as_ref(),
        mesh.num_vertices(),
        mesh.num_faces()
    );

    Ok(mesh)
}

/// Parse OBJ records from any buffered reader
pub fn parse_obj<R: BufRead>(reader: R) -> Result<Mesh> {
    let mut mesh = Mesh::new();

    for (line_idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_num = line_idx + 1;
        let mut parts = line.split_whitespace();

        match parts.next() {
            Some("v") => {
                let coords: Vec<&str> = parts.take(3).collect();
                if coords.len() < 3 {
                    return Err(parse_error(line_num, "vertex requires 3 coordinates"));
                }

                let mut xyz = [0.0; 3];
                for (slot, token) in xyz.iter_mut().zip(&coords) {
                    *slot = token.parse().map_err(|_| {
                        parse_error(line_num, &format!("invalid coordinate '{}'", token))
                    })?;
                }
                mesh.vertices.push(Point::new(xyz[0], xyz[1], xyz[2]));
            }
            Some("f") => {
                let vertex_ids = parts
                    .map(|token| resolve_index(token, mesh.vertices.len(), line_num))
                    .collect::<Result<Vec<_>>>()?;

                if vertex_ids.is_empty() {
                    return Err(parse_error(line_num, "face has no vertices"));
                }
                mesh.faces.push(Face::new(vertex_ids));
            }
            _ => {}
        }
    }

    Ok(mesh)
}

/// Convert a face token to a 0-based vertex index
///
/// Positive indices are 1-based; negative ones count back from the last
/// vertex read so far.
fn resolve_index(token: &str, vertex_count: usize, line_num: usize) -> Result<usize> {
    let index_str = token.split('/').next().unwrap_or(token);
    let index: i64 = index_str
        .parse()
        .map_err(|_| parse_error(line_num, &format!("invalid face index '{}'", token)))?;

    let resolved: Option<usize> = match index {
        0 => None,
        i if i > 0 => Some(i as usize - 1),
        i => (vertex_count as i64 + i).try_into().ok(),
    };

    resolved.ok_or_else(|| parse_error(line_num, &format!("face index '{}' does not resolve", token)))
}

fn parse_error(line: usize, message: &str) -> RefineError {
    RefineError::ObjParse {
        line,
        message: message.to_string(),
    }
}

/// Write a mesh as OBJ with 1-based face indices
pub fn write_obj<P: AsRef<Path>>(mesh: &Mesh, path: P) -> Result<()> {
    let file = File::create(path.as_ref())?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "# mesh-refine OBJ export")?;
    writeln!(
        writer,
        "# Vertices: {}, Faces: {}",
        mesh.num_vertices(),
        mesh.num_faces()
    )?;

    for p in &mesh.vertices {
        writeln!(writer, "v {} {} {}", p.x, p.y, p.z)?;
    }

    for face in &mesh.faces {
        write!(writer, "f")?;
        for id in &face.vertex_ids {
            write!(writer, " {}", id + 1)?;
        }
        writeln!(writer)?;
    }

    writer.flush()?;

    log::info!("Successfully wrote OBJ file to {:?}", path.as_ref());

    Ok(())
}
