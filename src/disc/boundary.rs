use serde::{Deserialize, Serialize};

/// Treatment of the neighbour lookup past either end of the domain.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundaryType {
    /// Neighbours wrap around to the opposite end.
    Periodic,
    /// Zero-gradient ghost cell: the boundary cell is its own outer neighbour.
    #[default]
    Transmissive,
}
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoundaryPosition {
    Left,
    Right,
}
impl BoundaryType {
    /// Index of the neighbour of `ielem` on side `position` in a mesh of
    /// `elem_num` cells.
    pub fn neighbour(&self, ielem: usize, elem_num: usize, position: BoundaryPosition) -> usize {
        match (position, *self) {
            (BoundaryPosition::Left, _) if ielem > 0 => ielem - 1,
            (BoundaryPosition::Left, BoundaryType::Periodic) => elem_num - 1,
            (BoundaryPosition::Left, BoundaryType::Transmissive) => 0,
            (BoundaryPosition::Right, _) if ielem + 1 < elem_num => ielem + 1,
            (BoundaryPosition::Right, BoundaryType::Periodic) => 0,
            (BoundaryPosition::Right, BoundaryType::Transmissive) => elem_num - 1,
        }
    }
}
