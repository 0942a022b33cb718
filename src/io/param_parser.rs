use std::{fs, path::Path};

use serde::Deserialize;

use crate::{
    disc::{boundary::BoundaryType, euler1d::initial_condition::RiemannProblem},
    error::SolverError,
    solver::{FlowParameters, SolverParameters},
};

/// Contents of a parameter file. Missing fields take the shock-tube defaults.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SolverParamParser {
    pub hcr: f64,
    pub dt: f64,
    pub dx: f64,
    pub cell_num: usize,
    pub final_step: usize,
    pub output_interval: usize,
    pub boundary: BoundaryType,
    pub thread_num: Option<usize>,
    pub riemann_problem: RiemannProblem,
}
impl Default for SolverParamParser {
    fn default() -> Self {
        let flow_params = FlowParameters::default();
        let solver_params = SolverParameters::default();
        Self {
            hcr: flow_params.hcr,
            dt: solver_params.dt,
            dx: solver_params.dx,
            cell_num: solver_params.cell_num,
            final_step: solver_params.final_step,
            output_interval: solver_params.output_interval,
            boundary: solver_params.boundary,
            thread_num: solver_params.thread_num,
            riemann_problem: RiemannProblem::default(),
        }
    }
}
impl SolverParamParser {
    pub fn parse(file_path: impl AsRef<Path>) -> Result<Self, SolverError> {
        let file_content = fs::read_to_string(file_path)?;
        Self::parse_str(&file_content)
    }
    pub fn parse_str(content: &str) -> Result<Self, SolverError> {
        let param: SolverParamParser = serde_json::from_str(content)?;
        Ok(param)
    }
    /// Splits into validated parameter sets.
    pub fn into_params(
        self,
    ) -> Result<(FlowParameters, SolverParameters, RiemannProblem), SolverError> {
        let flow_params = FlowParameters { hcr: self.hcr };
        let solver_params = SolverParameters {
            dt: self.dt,
            dx: self.dx,
            cell_num: self.cell_num,
            final_step: self.final_step,
            output_interval: self.output_interval,
            boundary: self.boundary,
            thread_num: self.thread_num,
        };
        flow_params.validate()?;
        solver_params.validate()?;
        self.riemann_problem.validate()?;
        Ok((flow_params, solver_params, self.riemann_problem))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_gives_defaults() {
        let param = SolverParamParser::parse_str("{}").unwrap();
        assert_eq!(param, SolverParamParser::default());
        let (flow_params, solver_params, problem) = param.into_params().unwrap();
        assert_eq!(flow_params, FlowParameters::default());
        assert_eq!(solver_params, SolverParameters::default());
        assert_eq!(problem, RiemannProblem::default());
    }

    #[test]
    fn test_partial_override() {
        let param = SolverParamParser::parse_str(
            r#"{
                "cell_num": 400,
                "boundary": "periodic",
                "riemann_problem": {
                    "left": { "rho": 1.0, "u": 0.0, "p": 1.0 },
                    "right": { "rho": 0.125, "u": 0.0, "p": 0.1 },
                    "split_x": 10.0
                }
            }"#,
        )
        .unwrap();
        let (_, solver_params, problem) = param.into_params().unwrap();
        assert_eq!(solver_params.cell_num, 400);
        assert_eq!(solver_params.boundary, BoundaryType::Periodic);
        assert_eq!(solver_params.dt, 0.02);
        assert_eq!(problem.left.rho, 1.0);
        assert_eq!(problem.split_x, 10.0);
    }

    #[test]
    fn test_rejects_unknown_fields_and_bad_values() {
        assert!(matches!(
            SolverParamParser::parse_str(r#"{ "nPixel": 2000 }"#),
            Err(SolverError::Json(_))
        ));
        let param = SolverParamParser::parse_str(r#"{ "hcr": 0.9 }"#).unwrap();
        assert!(matches!(
            param.into_params(),
            Err(SolverError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            SolverParamParser::parse("does/not/exist.json"),
            Err(SolverError::Io(_))
        ));
    }
}
