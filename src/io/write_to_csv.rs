use std::path::Path;

use csv::Writer;
use ndarray::ArrayView2;
use serde::Serialize;

use crate::{disc::euler1d::Disc1dEuler, error::SolverError};

#[derive(Serialize)]
struct CellData {
    x: f64,
    rho: f64,
    u: f64,
    p: f64,
    rho_e: f64,
}

/// Writes one row per cell with position, primitive variables and total
/// energy density.
pub fn write_to_csv(
    solutions: ArrayView2<f64>,
    disc: &Disc1dEuler,
    filename: &Path,
) -> Result<(), SolverError> {
    let mut writer = Writer::from_path(filename)?;
    let primitives = disc.primitives(solutions);
    for (ielem, elem) in disc.mesh.elements.iter().enumerate() {
        let data = CellData {
            x: elem.x,
            rho: primitives[[ielem, 0]],
            u: primitives[[ielem, 1]],
            p: primitives[[ielem, 2]],
            rho_e: solutions[[ielem, 2]],
        };
        writer.serialize(data)?;
    }
    writer.flush()?;
    Ok(())
}
