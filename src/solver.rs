use std::path::{Path, PathBuf};

use ndarray::Array2;
use ndarray_stats::QuantileExt;
use serde::{Deserialize, Serialize};

use crate::{
    disc::{
        boundary::BoundaryType,
        euler1d::{
            Disc1dEuler, StageBuffers, conservation::ConservationTotals, eos::pressure,
            initial_condition::RiemannProblem,
        },
        mesh::Mesh1d,
    },
    error::SolverError,
    io::{write_to_csv::write_to_csv, write_to_vtu::write_to_vtu},
};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FlowParameters {
    /// Heat capacity ratio of the ideal gas.
    pub hcr: f64,
}
impl Default for FlowParameters {
    fn default() -> Self {
        Self { hcr: 1.4 }
    }
}
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SolverParameters {
    pub dt: f64,
    pub dx: f64,
    pub cell_num: usize,
    pub final_step: usize,
    /// Steps between output frames, 0 disables output.
    pub output_interval: usize,
    pub boundary: BoundaryType,
    pub thread_num: Option<usize>,
}
impl Default for SolverParameters {
    fn default() -> Self {
        Self {
            dt: 0.02,
            dx: 0.5,
            cell_num: 2000,
            final_step: 50,
            output_interval: 0,
            boundary: BoundaryType::Transmissive,
            thread_num: None,
        }
    }
}
impl SolverParameters {
    pub fn validate(&self) -> Result<(), SolverError> {
        if !(self.dt.is_finite() && self.dt > 0.0) {
            return Err(SolverError::InvalidParameter(format!(
                "time step must be positive, got {}",
                self.dt
            )));
        }
        if !(self.dx.is_finite() && self.dx > 0.0) {
            return Err(SolverError::InvalidParameter(format!(
                "cell width must be positive, got {}",
                self.dx
            )));
        }
        if self.cell_num < 3 {
            return Err(SolverError::InvalidParameter(format!(
                "at least 3 cells are required, got {}",
                self.cell_num
            )));
        }
        if self.thread_num == Some(0) {
            return Err(SolverError::InvalidParameter(
                "thread_num must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
impl FlowParameters {
    pub fn validate(&self) -> Result<(), SolverError> {
        if !(self.hcr.is_finite() && self.hcr > 1.0) {
            return Err(SolverError::InvalidParameter(format!(
                "heat capacity ratio must exceed 1, got {}",
                self.hcr
            )));
        }
        Ok(())
    }
}
/// Per-step summary of the solution.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepRecord {
    pub step: usize,
    pub time: f64,
    pub totals: ConservationTotals,
    pub min_density: f64,
    pub max_density: f64,
    pub min_pressure: f64,
}
#[derive(Clone, Debug, Default)]
pub struct SolutionHistory {
    pub records: Vec<StepRecord>,
}
impl SolutionHistory {
    pub fn initial(&self) -> Option<&StepRecord> {
        self.records.first()
    }
    pub fn last(&self) -> Option<&StepRecord> {
        self.records.last()
    }
}

pub struct Solver<'a> {
    pub solutions: Array2<f64>,
    pub disc: Disc1dEuler<'a>,
    pub solver_params: &'a SolverParameters,
    pub current_step: usize,
    pub current_time: f64,
    new_solutions: Array2<f64>,
    buffers: StageBuffers,
}
impl<'a> Solver<'a> {
    pub fn new(
        mesh: &'a Mesh1d,
        flow_params: &'a FlowParameters,
        solver_params: &'a SolverParameters,
    ) -> Self {
        let nelem = mesh.elem_num;
        Self {
            solutions: Array2::zeros((nelem, 3)),
            disc: Disc1dEuler::new(mesh, flow_params, solver_params),
            solver_params,
            current_step: 0,
            current_time: 0.0,
            new_solutions: Array2::zeros((nelem, 3)),
            buffers: StageBuffers::new(nelem),
        }
    }
    pub fn initialize(&mut self, problem: &RiemannProblem) {
        let hcr = self.disc.flow_param.hcr;
        self.disc
            .initialize_solution(self.solutions.view_mut(), &|x| problem.conserved_at(x, hcr));
        self.current_step = 0;
        self.current_time = 0.0;
    }
    fn record(&self) -> StepRecord {
        let density = self.solutions.column(0);
        let hcr = self.disc.flow_param.hcr;
        let pressures = self
            .solutions
            .rows()
            .into_iter()
            .map(|q| pressure(q[0], q[1], q[2], hcr))
            .collect::<ndarray::Array1<f64>>();
        StepRecord {
            step: self.current_step,
            time: self.current_time,
            totals: self.disc.conservation_totals(self.solutions.view()),
            min_density: *density.min_skipnan(),
            max_density: *density.max_skipnan(),
            min_pressure: *pressures.min_skipnan(),
        }
    }
    /// Advances a single timestep.
    pub fn step(&mut self) -> Result<(), SolverError> {
        self.disc
            .advance(
                self.solutions.view(),
                &mut self.buffers,
                self.new_solutions.view_mut(),
            )
            .map_err(|source| SolverError::NonPhysicalState {
                step: self.current_step + 1,
                source,
            })?;
        std::mem::swap(&mut self.solutions, &mut self.new_solutions);
        self.current_step += 1;
        self.current_time += self.solver_params.dt;
        Ok(())
    }
    /// Runs `final_step` timesteps, writing frames into `output_dir` every
    /// `output_interval` steps when a directory is given.
    pub fn solve(&mut self, output_dir: Option<&Path>) -> Result<SolutionHistory, SolverError> {
        let cfl = self.disc.cfl_number(self.solutions.view());
        if cfl > 1.0 {
            tracing::warn!(cfl, "initial CFL number exceeds 1, the run is likely unstable");
        } else {
            tracing::debug!(cfl, "initial CFL number");
        }
        let mut history = SolutionHistory::default();
        history.records.push(self.record());
        self.write_frame(output_dir)?;
        while self.current_step < self.solver_params.final_step {
            self.step()?;
            let record = self.record();
            tracing::debug!(
                step = record.step,
                time = record.time,
                min_density = record.min_density,
                min_pressure = record.min_pressure,
                "timestep complete"
            );
            history.records.push(record);
            let interval = self.solver_params.output_interval;
            if interval > 0 && self.current_step % interval == 0 {
                self.write_frame(output_dir)?;
            }
        }
        if let (Some(initial), Some(last)) = (history.initial(), history.last()) {
            let drift = last.totals.drift(&initial.totals);
            tracing::info!(
                step = self.current_step,
                time = self.current_time,
                mass_drift = drift.mass,
                momentum_drift = drift.momentum,
                energy_drift = drift.energy,
                "run finished"
            );
        }
        Ok(history)
    }
    fn write_frame(&self, output_dir: Option<&Path>) -> Result<(), SolverError> {
        let Some(dir) = output_dir else {
            return Ok(());
        };
        let csv_path: PathBuf = dir.join(format!("solutions_{}.csv", self.current_step));
        write_to_csv(self.solutions.view(), &self.disc, &csv_path)?;
        write_to_vtu("solutions", self.solutions.view(), &self.disc, self.current_step, dir)?;
        tracing::info!(step = self.current_step, path = %csv_path.display(), "wrote output frame");
        Ok(())
    }
}
