use serde::{Deserialize, Serialize};

use crate::error::SolverError;

/// Primitive description of a uniform gas state.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PrimitiveState {
    pub rho: f64,
    pub u: f64,
    pub p: f64,
}
impl PrimitiveState {
    pub fn to_conserved(&self, hcr: f64) -> [f64; 3] {
        [
            self.rho,
            self.rho * self.u,
            self.p / (hcr - 1.0) + 0.5 * self.rho * self.u * self.u,
        ]
    }
    fn validate(&self, side: &str) -> Result<(), SolverError> {
        let finite = self.rho.is_finite() && self.u.is_finite() && self.p.is_finite();
        if !finite || self.rho <= 0.0 || self.p <= 0.0 {
            return Err(SolverError::InvalidParameter(format!(
                "{side} state must have finite, positive density and pressure: {:?}",
                self
            )));
        }
        Ok(())
    }
}
/// Two uniform states separated by a single discontinuity at `split_x`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RiemannProblem {
    pub left: PrimitiveState,
    pub right: PrimitiveState,
    pub split_x: f64,
}
impl Default for RiemannProblem {
    /// Sod shock tube, high pressure on the right.
    fn default() -> Self {
        Self {
            left: PrimitiveState {
                rho: 0.125,
                u: 0.0,
                p: 0.1,
            },
            right: PrimitiveState {
                rho: 1.0,
                u: 0.0,
                p: 1.0,
            },
            split_x: 0.0,
        }
    }
}
impl RiemannProblem {
    pub fn validate(&self) -> Result<(), SolverError> {
        self.left.validate("left")?;
        self.right.validate("right")?;
        if !self.split_x.is_finite() {
            return Err(SolverError::InvalidParameter(
                "split_x must be finite".to_string(),
            ));
        }
        Ok(())
    }
    /// Conserved state of the initial condition at position `x`.
    pub fn conserved_at(&self, x: f64, hcr: f64) -> [f64; 3] {
        if x > self.split_x {
            self.right.to_conserved(hcr)
        } else {
            self.left.to_conserved(hcr)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sod_states() {
        let problem = RiemannProblem::default();
        let hcr = 1.4;
        let right = problem.conserved_at(0.25, hcr);
        let left = problem.conserved_at(-0.25, hcr);
        assert_eq!(right[0], 1.0);
        assert_eq!(right[1], 0.0);
        assert_relative_eq!(right[2], 1.0 / (hcr - 1.0), epsilon = 1e-14);
        assert_eq!(left[0], 0.125);
        assert_eq!(left[1], 0.0);
        assert_relative_eq!(left[2], 0.1 / (hcr - 1.0), epsilon = 1e-14);
    }

    #[test]
    fn test_split_point_belongs_to_the_left_state() {
        let problem = RiemannProblem::default();
        assert_eq!(problem.conserved_at(0.0, 1.4)[0], 0.125);
    }

    #[test]
    fn test_moving_state_energy() {
        let state = PrimitiveState {
            rho: 2.0,
            u: -1.5,
            p: 0.8,
        };
        let q = state.to_conserved(1.4);
        assert_relative_eq!(q[1], -3.0);
        assert_relative_eq!(q[2], 0.8 / 0.4 + 0.5 * 2.0 * 2.25, epsilon = 1e-14);
    }

    #[test]
    fn test_validate_rejects_vacuum() {
        let mut problem = RiemannProblem::default();
        assert!(problem.validate().is_ok());
        problem.left.rho = 0.0;
        assert!(matches!(
            problem.validate(),
            Err(SolverError::InvalidParameter(_))
        ));
        problem.left.rho = 0.125;
        problem.right.p = f64::NAN;
        assert!(problem.validate().is_err());
    }
}
