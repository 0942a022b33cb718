use ndarray::ArrayView2;

use super::Disc1dEuler;
use super::eos::pressure;
use crate::error::{HydroError, HydroErrorType};

impl Disc1dEuler<'_> {
    /// Rejects the first cell whose conserved state is non-finite or has a
    /// non-positive density or a negative pressure.
    pub fn check_admissibility(&self, solutions: ArrayView2<f64>) -> Result<(), HydroError> {
        let hcr = self.flow_param.hcr;
        for (ielem, q) in solutions.outer_iter().enumerate() {
            let x = self.mesh.elements[ielem].x;
            let (rho, rho_u, rho_e) = (q[0], q[1], q[2]);
            if !(rho.is_finite() && rho_u.is_finite() && rho_e.is_finite()) {
                return Err(HydroErrorType::NonFiniteState(rho, rho_u, rho_e).at_cell(ielem, x));
            }
            if rho <= 0.0 {
                return Err(HydroErrorType::NegativeDensity(rho).at_cell(ielem, x));
            }
            let p = pressure(rho, rho_u, rho_e, hcr);
            if p < 0.0 {
                return Err(HydroErrorType::NegativePressure(p).at_cell(ielem, x));
            }
        }
        Ok(())
    }
}
