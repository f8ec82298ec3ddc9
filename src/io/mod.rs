//! I/O module for reading and writing mesh files

pub mod json;
pub mod obj;
pub mod report;
pub mod vtk;

pub use json::{read_json_mesh, write_json_mesh};
pub use obj::{parse_obj, read_obj, write_obj};
pub use report::RefineReport;
pub use vtk::write_vtk;

use crate::error::{RefineError, Result};
use crate::mesh::Mesh;
use std::path::Path;

/// Mesh file formats recognized by extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeshFormat {
    /// Wavefront OBJ (read and write)
    Obj,
    /// `{ "vertices": [...], "faces": [...] }` JSON (read and write)
    Json,
    /// Legacy VTK unstructured grid (write only)
    Vtk,
}

impl MeshFormat {
    /// Detect format from file extension, ignoring case
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "obj" => Ok(Self::Obj),
            "json" => Ok(Self::Json),
            "vtk" => Ok(Self::Vtk),
            _ => Err(RefineError::UnsupportedFormat(format!(
                "{} (expected .obj, .json or .vtk)",
                path.display()
            ))),
        }
    }
}

/// Load a mesh, choosing the reader from the file extension
pub fn read_mesh(path: &Path) -> Result<Mesh> {
    match MeshFormat::from_path(path)? {
        MeshFormat::Obj => read_obj(path),
        MeshFormat::Json => read_json_mesh(path),
        MeshFormat::Vtk => Err(RefineError::UnsupportedFormat(format!(
            "{} (VTK is an output-only format)",
            path.display()
        ))),
    }
}

/// Save a mesh, choosing the writer from the file extension
pub fn write_mesh(mesh: &Mesh, path: &Path) -> Result<()> {
    match MeshFormat::from_path(path)? {
        MeshFormat::Obj => write_obj(mesh, path),
        MeshFormat::Json => write_json_mesh(mesh, path),
        MeshFormat::Vtk => write_vtk(mesh, path, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_path() {
        assert_eq!(MeshFormat::from_path(Path::new("a.obj")).unwrap(), MeshFormat::Obj);
        assert_eq!(MeshFormat::from_path(Path::new("a.OBJ")).unwrap(), MeshFormat::Obj);
        assert_eq!(MeshFormat::from_path(Path::new("dir/a.json")).unwrap(), MeshFormat::Json);
        assert_eq!(MeshFormat::from_path(Path::new("a.vtk")).unwrap(), MeshFormat::Vtk);
        assert!(matches!(
            MeshFormat::from_path(Path::new("a.stl")),
            Err(RefineError::UnsupportedFormat(_))
        ));
        assert!(MeshFormat::from_path(Path::new("noext")).is_err());
    }

    #[test]
    fn test_vtk_not_readable() {
        assert!(matches!(
            read_mesh(Path::new("mesh.vtk")),
            Err(RefineError::UnsupportedFormat(_))
        ));
    }
}
