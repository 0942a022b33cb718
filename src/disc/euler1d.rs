pub mod admissibility;
pub mod conservation;
pub mod eos;
pub mod flux;
pub mod initial_condition;
pub mod limiter;
pub mod riemann_solver;

use eos::{pressure_of, sound_speed, to_primitive};
use limiter::reconstruct_face;
use ndarray::{Array1, Array2, ArrayView1, ArrayView2, ArrayViewMut1, ArrayViewMut2, Zip};
use riemann_solver::euler_flux;

use crate::{
    disc::mesh::Mesh1d,
    error::HydroError,
    solver::{FlowParameters, SolverParameters},
};

/// Time-scale factor of the predictor sub-step.
pub const HALF_STEP: f64 = 0.5;
/// Time-scale factor of the corrector sub-step.
pub const FULL_STEP: f64 = 1.0;

/// Scratch buffers shared by the two sub-steps of a timestep.
pub struct StageBuffers {
    pub ratios: Array1<f64>,
    pub half_solutions: Array2<f64>,
}
impl StageBuffers {
    pub fn new(elem_num: usize) -> Self {
        Self {
            ratios: Array1::zeros(elem_num),
            half_solutions: Array2::zeros((elem_num, 3)),
        }
    }
}

/// Finite-volume discretization of the 1D Euler equations.
///
/// Solutions are stored as `(elem_num, 3)` arrays of conserved variables
/// `(rho, rho*u, rho*E)`. Every stage reads one fully written array and writes
/// into a distinct one, so cells are updated in parallel.
pub struct Disc1dEuler<'a> {
    pub mesh: &'a Mesh1d,
    pub flow_param: &'a FlowParameters,
    pub solver_param: &'a SolverParameters,
}
#[inline]
fn state(solutions: &ArrayView2<f64>, ielem: usize) -> [f64; 3] {
    [
        solutions[[ielem, 0]],
        solutions[[ielem, 1]],
        solutions[[ielem, 2]],
    ]
}
impl<'a> Disc1dEuler<'a> {
    pub fn new(
        mesh: &'a Mesh1d,
        flow_param: &'a FlowParameters,
        solver_param: &'a SolverParameters,
    ) -> Disc1dEuler<'a> {
        Disc1dEuler {
            mesh,
            flow_param,
            solver_param,
        }
    }
    pub fn initialize_solution(
        &self,
        mut solutions: ArrayViewMut2<f64>,
        init_func: &(dyn Fn(f64) -> [f64; 3] + Sync),
    ) {
        Zip::indexed(solutions.rows_mut()).par_for_each(|ielem, mut q| {
            let value = init_func(self.mesh.elements[ielem].x);
            for ivar in 0..3 {
                q[ivar] = value[ivar];
            }
        });
    }
    /// Smoothness ratio `(p_R - p) / (p - p_L)` of every cell.
    ///
    /// A flat pressure profile on the left yields an infinite or NaN ratio,
    /// which the limiter treats as an extremum.
    pub fn compute_pressure_ratios(&self, solutions: ArrayView2<f64>, ratios: ArrayViewMut1<f64>) {
        let hcr = self.flow_param.hcr;
        Zip::indexed(ratios).par_for_each(|ielem, r| {
            let p = pressure_of(state(&solutions, ielem), hcr);
            let p_left = pressure_of(state(&solutions, self.mesh.left(ielem)), hcr);
            let p_right = pressure_of(state(&solutions, self.mesh.right(ielem)), hcr);
            *r = (p_right - p) / (p - p_left);
        });
    }
    /// Numerical flux across the face between `ilelem` and `irelem`.
    ///
    /// The right cell reconstructs toward the face with the reciprocal of its
    /// ratio, since the ratio is oriented left to right.
    pub fn face_flux(
        &self,
        solutions: &ArrayView2<f64>,
        ratios: &ArrayView1<f64>,
        ilelem: usize,
        irelem: usize,
    ) -> [f64; 3] {
        let left = state(solutions, ilelem);
        let right = state(solutions, irelem);
        let w_minus = reconstruct_face(left, right, ratios[ilelem]);
        let w_plus = reconstruct_face(right, left, 1.0 / ratios[irelem]);
        euler_flux(w_minus, w_plus, self.flow_param.hcr)
    }
    /// Conservative update `new = base - scale * dt / dx * (F_R - F_L)` with
    /// face fluxes evaluated on `flux_state`.
    pub fn update_stage(
        &self,
        base: ArrayView2<f64>,
        flux_state: ArrayView2<f64>,
        ratios: ArrayView1<f64>,
        mut new_solutions: ArrayViewMut2<f64>,
        scale: f64,
    ) {
        let coeff = scale * self.solver_param.dt / self.mesh.dx;
        Zip::indexed(new_solutions.rows_mut()).par_for_each(|ielem, mut q_new| {
            let flux_left = self.face_flux(&flux_state, &ratios, self.mesh.left(ielem), ielem);
            let flux_right = self.face_flux(&flux_state, &ratios, ielem, self.mesh.right(ielem));
            for ivar in 0..3 {
                q_new[ivar] = base[[ielem, ivar]] - coeff * (flux_right[ivar] - flux_left[ivar]);
            }
        });
    }
    /// One two-stage timestep from `solutions` into `new_solutions`.
    pub fn advance(
        &self,
        solutions: ArrayView2<f64>,
        buffers: &mut StageBuffers,
        mut new_solutions: ArrayViewMut2<f64>,
    ) -> Result<(), HydroError> {
        self.compute_pressure_ratios(solutions, buffers.ratios.view_mut());
        self.update_stage(
            solutions,
            solutions,
            buffers.ratios.view(),
            buffers.half_solutions.view_mut(),
            HALF_STEP,
        );
        self.check_admissibility(buffers.half_solutions.view())?;
        self.compute_pressure_ratios(buffers.half_solutions.view(), buffers.ratios.view_mut());
        self.update_stage(
            solutions,
            buffers.half_solutions.view(),
            buffers.ratios.view(),
            new_solutions.view_mut(),
            FULL_STEP,
        );
        self.check_admissibility(new_solutions.view())
    }
    /// Largest `(|u| + c) * dt / dx` over the domain.
    pub fn cfl_number(&self, solutions: ArrayView2<f64>) -> f64 {
        let hcr = self.flow_param.hcr;
        let max_speed = solutions
            .outer_iter()
            .map(|q| {
                let [rho, u, p] = to_primitive([q[0], q[1], q[2]], hcr);
                u.abs() + sound_speed(rho, p, hcr)
            })
            .fold(0.0_f64, f64::max);
        max_speed * self.solver_param.dt / self.mesh.dx
    }
    /// Primitive variables `(rho, u, p)` of every cell.
    pub fn primitives(&self, solutions: ArrayView2<f64>) -> Array2<f64> {
        let hcr = self.flow_param.hcr;
        let mut primitives = Array2::zeros(solutions.raw_dim());
        Zip::from(primitives.rows_mut())
            .and(solutions.rows())
            .for_each(|mut w, q| {
                let value = to_primitive([q[0], q[1], q[2]], hcr);
                for ivar in 0..3 {
                    w[ivar] = value[ivar];
                }
            });
        primitives
    }
}
