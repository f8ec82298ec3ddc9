//! Legacy VTK file writer

use crate::error::{RefineError, Result};
use crate::mesh::{triangle_area, Mesh};
use std::path::Path;
use vtkio::model::*;

/// Default VTK file format version (2.2 for broad compatibility)
/// This version is compatible with ParaView 6.0.1 and most VTK-based tools
pub const DEFAULT_VTK_VERSION: (u8, u8) = (2, 2);

/// Write a mesh as a VTK unstructured grid
///
/// Triangles become `VTK_TRIANGLE` cells, any other face arity becomes a
/// `VTK_POLYGON`. Triangle areas are attached as the `area` cell scalar.
pub fn write_vtk(mesh: &Mesh, output_path: &Path, vtk_version: Option<(u8, u8)>) -> Result<()> {
    let version = vtk_version.unwrap_or(DEFAULT_VTK_VERSION);
    log::info!(
        "Writing mesh with {} faces to {:?} (VTK version {}.{})",
        mesh.num_faces(),
        output_path,
        version.0,
        version.1
    );

    // Create point array from vertices
    let points: Vec<f64> = mesh
        .vertices
        .iter()
        .flat_map(|p| [p.x, p.y, p.z])
        .collect();

    // Legacy connectivity: vertex count followed by the indices, per cell
    let mut vertices = Vec::new();
    let mut cell_types = Vec::with_capacity(mesh.num_faces());
    for (face_idx, face) in mesh.faces.iter().enumerate() {
        vertices.push(to_u32(face.arity(), "face arity")?);
        for &id in &face.vertex_ids {
            if id >= mesh.num_vertices() {
                return Err(RefineError::VtkError(format!(
                    "Face {} references vertex {} but mesh has {} vertices",
                    face_idx,
                    id,
                    mesh.num_vertices()
                )));
            }
            vertices.push(to_u32(id, "vertex index")?);
        }
        cell_types.push(if face.arity() == 3 {
            CellType::Triangle
        } else {
            CellType::Polygon
        });
    }

    let cells = Cells {
        cell_verts: VertexNumbers::Legacy {
            num_cells: to_u32(mesh.num_faces(), "face count")?,
            vertices,
        },
        types: cell_types,
    };

    let mut ugrid = UnstructuredGridPiece {
        points: IOBuffer::F64(points),
        cells,
        data: Attributes::new(),
    };

    let area_data: Vec<f64> = mesh
        .faces
        .iter()
        .map(|face| match face.as_triangle() {
            Some([a, b, c]) => {
                triangle_area(&mesh.vertices[a], &mesh.vertices[b], &mesh.vertices[c])
            }
            _ => 0.0,
        })
        .collect();

    ugrid.data.cell.push(Attribute::DataArray(DataArray {
        name: "area".into(),
        elem: ElementType::Scalars {
            num_comp: 1,
            lookup_table: None,
        },
        data: IOBuffer::F64(area_data),
    }));

    // Create the Vtk model
    let vtk = Vtk {
        version: Version::new(version),
        title: "Refined triangle mesh".to_string(),
        byte_order: ByteOrder::BigEndian,
        data: DataSet::UnstructuredGrid {
            pieces: vec![Piece::Inline(Box::new(ugrid))],
            meta: None,
        },
        file_path: None,
    };

    // Write to file
    vtk.export_ascii(output_path)
        .map_err(|e| RefineError::VtkError(format!("Failed to write VTK file: {}", e)))?;

    log::info!("Successfully wrote VTK file to {:?}", output_path);

    Ok(())
}

/// Legacy VTK stores counts and indices as 32-bit integers
fn to_u32(value: usize, what: &str) -> Result<u32> {
    u32::try_from(value)
        .map_err(|_| RefineError::VtkError(format!("{} {} does not fit in 32 bits", what, value)))
}
