use ndarray::{ArrayView2, Axis};

use super::Disc1dEuler;

/// Domain integrals of the conserved variables.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ConservationTotals {
    pub mass: f64,
    pub momentum: f64,
    pub energy: f64,
}
impl ConservationTotals {
    pub fn drift(&self, reference: &ConservationTotals) -> ConservationTotals {
        ConservationTotals {
            mass: self.mass - reference.mass,
            momentum: self.momentum - reference.momentum,
            energy: self.energy - reference.energy,
        }
    }
}
impl Disc1dEuler<'_> {
    pub fn conservation_totals(&self, solutions: ArrayView2<f64>) -> ConservationTotals {
        let sums = solutions.sum_axis(Axis(0)) * self.mesh.dx;
        ConservationTotals {
            mass: sums[0],
            momentum: sums[1],
            energy: sums[2],
        }
    }
}
