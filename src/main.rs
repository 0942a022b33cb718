use std::{env, fs, path::PathBuf, process::ExitCode};

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use sod_shock_tube::{
    error::SolverError,
    initialization,
    io::OUTPUT_DIR,
    solver::Solver,
};

const DEFAULT_PARAM_FILE: &str = "inputs/solverparam.json";

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(env_filter)
        .init();
}

fn run() -> Result<(), SolverError> {
    let param_file = env::args().nth(1).map(PathBuf::from);
    let (flow_params, solver_params, problem) = match param_file {
        Some(path) => initialization::initialize_params_by_file(&path)?,
        None if PathBuf::from(DEFAULT_PARAM_FILE).exists() => {
            initialization::initialize_params_by_file(DEFAULT_PARAM_FILE)?
        }
        None => {
            tracing::info!("no parameter file found, using shock-tube defaults");
            initialization::initialize_params()
        }
    };
    initialization::initialize_thread_pool(&solver_params)?;
    let mesh = initialization::initialize_mesh1d(&solver_params)?;
    tracing::info!(
        cells = mesh.elem_num,
        steps = solver_params.final_step,
        dt = solver_params.dt,
        dx = solver_params.dx,
        hcr = flow_params.hcr,
        "starting shock-tube run"
    );

    let output_dir = if solver_params.output_interval > 0 {
        fs::create_dir_all(&*OUTPUT_DIR)?;
        Some(OUTPUT_DIR.as_path())
    } else {
        None
    };
    let mut solver = Solver::new(&mesh, &flow_params, &solver_params);
    solver.initialize(&problem);
    let history = solver.solve(output_dir)?;
    if let Some(last) = history.last() {
        tracing::info!(
            min_density = last.min_density,
            max_density = last.max_density,
            min_pressure = last.min_pressure,
            "final state"
        );
    }
    Ok(())
}

fn main() -> ExitCode {
    init_tracing();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
