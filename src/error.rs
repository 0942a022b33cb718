use std::path::PathBuf;

use thiserror::Error;

/**
 * Category of a non-physical hydrodynamic state
 */
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HydroErrorType {
    #[error("Non-finite conserved state: [{0:.4e}, {1:.4e}, {2:.4e}]")]
    NonFiniteState(f64, f64, f64),

    #[error("Negative mass density: {0:.4e}")]
    NegativeDensity(f64),

    #[error("Negative pressure: {0:.4e}")]
    NegativePressure(f64),
}

impl HydroErrorType {
    pub fn at_cell(self, cell: usize, x: f64) -> HydroError {
        HydroError {
            source: self,
            cell,
            x,
        }
    }
}

/**
 * Holds a hydro error and the cell where it occurred
 */
#[derive(Error, Debug, Clone, PartialEq)]
#[error("in cell {cell} at x = {x:.4e}")]
pub struct HydroError {
    #[source]
    pub source: HydroErrorType,
    pub cell: usize,
    pub x: f64,
}

#[derive(Error, Debug)]
pub enum SolverError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Non-physical state after step {step}")]
    NonPhysicalState {
        step: usize,
        #[source]
        source: HydroError,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Failed to parse parameter file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to write CSV output: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to write VTU output to {}", path.display())]
    Vtk {
        path: PathBuf,
        #[source]
        source: vtkio::Error,
    },
}
