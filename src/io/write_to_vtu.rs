use std::path::Path;

use ndarray::ArrayView2;
use vtkio::{
    Vtk,
    model::{
        Attribute, Attributes, ByteOrder, CellType, Cells, DataArray, DataSet, ElementType,
        IOBuffer, UnstructuredGridPiece, Version, VertexNumbers,
    },
};

use crate::{disc::euler1d::Disc1dEuler, error::SolverError};

fn cell_scalars(name: &str, data: Vec<f64>) -> Attribute {
    Attribute::DataArray(DataArray {
        name: name.to_string(),
        elem: ElementType::Scalars {
            num_comp: 1,
            lookup_table: None,
        },
        data: IOBuffer::F64(data),
    })
}

/// Writes the cell averages as an unstructured grid of line cells, one per
/// finite volume, to `<dir>/<name>_<step>.vtu`.
pub fn write_to_vtu(
    name: &str,
    solutions: ArrayView2<f64>,
    disc: &Disc1dEuler,
    current_step: usize,
    dir: &Path,
) -> Result<(), SolverError> {
    let mesh = disc.mesh;
    let mut vtk_points = Vec::with_capacity(mesh.node_num * 3);
    for node in mesh.nodes.iter() {
        vtk_points.push(node.x);
        vtk_points.push(0.0);
        vtk_points.push(0.0);
    }
    let mut connectivity = Vec::with_capacity(mesh.elem_num * 2);
    for elem in mesh.elements.iter() {
        connectivity.push(elem.inodes[0] as u64);
        connectivity.push(elem.inodes[1] as u64);
    }
    let primitives = disc.primitives(solutions);

    let vtk_file = Vtk {
        version: Version::XML { major: 1, minor: 0 },
        title: "Shock tube solution".into(),
        byte_order: ByteOrder::native(),
        data: DataSet::inline(UnstructuredGridPiece {
            points: IOBuffer::F64(vtk_points),
            cells: Cells {
                cell_verts: VertexNumbers::XML {
                    connectivity,
                    offsets: (0..mesh.elem_num).map(|i| ((i + 1) * 2) as u64).collect(),
                },
                types: vec![CellType::Line; mesh.elem_num],
            },
            data: Attributes {
                point: vec![],
                cell: vec![
                    cell_scalars("density", primitives.column(0).to_vec()),
                    cell_scalars("velocity", primitives.column(1).to_vec()),
                    cell_scalars("pressure", primitives.column(2).to_vec()),
                ],
            },
        }),
        file_path: None,
    };

    let filename = dir.join(format!("{}_{}.vtu", name, current_step));
    vtk_file
        .export(&filename)
        .map_err(|source| SolverError::Vtk {
            path: filename.clone(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        disc::{boundary::BoundaryType, mesh::Mesh1d},
        solver::{FlowParameters, SolverParameters},
    };
    use ndarray::Array2;
    use std::error::Error;

    #[test]
    fn test_export_failure_keeps_path_and_source() {
        let flow_param = FlowParameters::default();
        let solver_param = SolverParameters::default();
        let mesh = Mesh1d::new(4, solver_param.dx, BoundaryType::Transmissive).unwrap();
        let disc = Disc1dEuler::new(&mesh, &flow_param, &solver_param);
        let mut solutions = Array2::zeros((4, 3));
        disc.initialize_solution(solutions.view_mut(), &|_| [1.0, 0.0, 2.5]);
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing");
        let err = write_to_vtu("solutions", solutions.view(), &disc, 3, &missing).unwrap_err();
        match &err {
            SolverError::Vtk { path, .. } => {
                assert_eq!(path, &missing.join("solutions_3.vtu"));
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(err.source().is_some());
        assert!(err.to_string().contains("solutions_3.vtu"));
    }
}
