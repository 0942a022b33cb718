use std::path::Path;

use crate::{
    disc::{euler1d::initial_condition::RiemannProblem, mesh::Mesh1d},
    error::SolverError,
    io::param_parser::SolverParamParser,
    solver::{FlowParameters, SolverParameters},
};

pub fn initialize_params() -> (FlowParameters, SolverParameters, RiemannProblem) {
    (
        FlowParameters::default(),
        SolverParameters::default(),
        RiemannProblem::default(),
    )
}
pub fn initialize_params_by_file(
    file_path: impl AsRef<Path>,
) -> Result<(FlowParameters, SolverParameters, RiemannProblem), SolverError> {
    SolverParamParser::parse(file_path)?.into_params()
}
pub fn initialize_mesh1d(solver_params: &SolverParameters) -> Result<Mesh1d, SolverError> {
    Mesh1d::new(
        solver_params.cell_num,
        solver_params.dx,
        solver_params.boundary,
    )
}
/// Sizes the global rayon pool when a thread count is configured.
pub fn initialize_thread_pool(solver_params: &SolverParameters) -> Result<(), SolverError> {
    if let Some(thread_num) = solver_params.thread_num {
        rayon::ThreadPoolBuilder::new()
            .num_threads(thread_num)
            .build_global()
            .map_err(|err| SolverError::InvalidParameter(format!("thread pool: {err}")))?;
    }
    Ok(())
}
