use ndarray::Array1;

use crate::disc::boundary::{BoundaryPosition, BoundaryType};
use crate::error::SolverError;

#[derive(Clone, Debug)]
pub struct Node1d {
    pub x: f64,
}
#[derive(Clone, Debug)]
pub struct Element1d {
    pub inodes: [usize; 2],
    /// Left and right neighbour indices after applying the boundary policy.
    pub ineighbors: [usize; 2],
    pub x: f64,
}
/// Uniform cell-centred mesh, symmetric about x = 0.
#[derive(Clone, Debug)]
pub struct Mesh1d {
    pub elem_num: usize,
    pub node_num: usize,
    pub dx: f64,
    pub boundary: BoundaryType,
    pub nodes: Vec<Node1d>,
    pub elements: Vec<Element1d>,
}
impl Mesh1d {
    pub fn new(elem_num: usize, dx: f64, boundary: BoundaryType) -> Result<Self, SolverError> {
        if elem_num < 3 {
            return Err(SolverError::InvalidParameter(format!(
                "mesh needs at least 3 cells, got {elem_num}"
            )));
        }
        if !(dx.is_finite() && dx > 0.0) {
            return Err(SolverError::InvalidParameter(format!(
                "cell width must be positive, got {dx}"
            )));
        }
        let node_num = elem_num + 1;
        let x_left = -0.5 * elem_num as f64 * dx;
        let nodes: Vec<Node1d> = (0..node_num)
            .map(|inode| Node1d {
                x: x_left + inode as f64 * dx,
            })
            .collect();
        let elements: Vec<Element1d> = (0..elem_num)
            .map(|ielem| Element1d {
                inodes: [ielem, ielem + 1],
                ineighbors: [
                    boundary.neighbour(ielem, elem_num, BoundaryPosition::Left),
                    boundary.neighbour(ielem, elem_num, BoundaryPosition::Right),
                ],
                x: x_left + (ielem as f64 + 0.5) * dx,
            })
            .collect();
        Ok(Self {
            elem_num,
            node_num,
            dx,
            boundary,
            nodes,
            elements,
        })
    }
    #[inline]
    pub fn left(&self, ielem: usize) -> usize {
        self.elements[ielem].ineighbors[0]
    }
    #[inline]
    pub fn right(&self, ielem: usize) -> usize {
        self.elements[ielem].ineighbors[1]
    }
    pub fn cell_centers(&self) -> Array1<f64> {
        self.elements.iter().map(|elem| elem.x).collect()
    }
}
