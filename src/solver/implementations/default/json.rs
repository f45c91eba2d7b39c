#![allow(non_snake_case)]

use super::*;
use crate::{
    algebra::*,
    solver::core::{cones::SupportedConeT, SolverError},
};

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::io::Write;
use std::{fs::File, io, io::Read};
use thiserror::Error;

/// Error type returned by problem file reading and writing
#[derive(Error, Debug)]
pub enum JsonIOError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Solver(#[from] SolverError),
}

// the problem data as provided by the user, plus settings

#[derive(Serialize, Deserialize)]
#[serde(bound = "T: Serialize + DeserializeOwned")]
struct JsonProblemData<T: FloatT> {
    pub P: CscMatrix<T>,
    pub q: Vec<T>,
    pub A: CscMatrix<T>,
    pub b: Vec<T>,
    pub cones: Vec<SupportedConeT<T>>,
    pub settings: DefaultSettings<T>,
}

impl<T, E> DefaultSolver<T, E>
where
    T: FloatT + DeserializeOwned + Serialize,
    E: ConicEngine<T>,
{
    /// Write the problem data and settings to a JSON file.
    ///
    /// Fails with [`SolverError::InvalidState`] once the solver has
    /// been disposed.
    pub fn save_to_file(&self, file: &mut File) -> Result<(), JsonIOError> {
        let data = match self.data() {
            Some(data) => data,
            None => return Err(self.invalid_state("save").into()),
        };

        let mut json_data = JsonProblemData {
            P: data.P.clone(),
            q: data.q.clone(),
            A: data.A.clone(),
            b: data.b.clone(),
            cones: data.cones.clone(),
            settings: self.settings().clone(),
        };

        // sanitize settings to remove values that
        // can't be serialized, i.e. infs
        sanitize_settings(&mut json_data.settings);

        let json = serde_json::to_string(&json_data)?;
        file.write_all(json.as_bytes())?;

        Ok(())
    }

    /// Construct a new solver from a file written by
    /// [`save_to_file`](DefaultSolver::save_to_file).  If `settings` is
    /// given, it replaces the settings stored in the file.
    pub fn load_from_file(
        file: &mut File,
        settings: Option<DefaultSettings<T>>,
    ) -> Result<Self, JsonIOError> {
        let mut buffer = String::new();
        file.read_to_string(&mut buffer)?;
        let mut json_data: JsonProblemData<T> = serde_json::from_str(&buffer)?;

        // restore sanitized settings to their (likely) original values
        desanitize_settings(&mut json_data.settings);

        let JsonProblemData {
            P,
            q,
            A,
            b,
            cones,
            settings: saved,
        } = json_data;
        let settings = settings.unwrap_or(saved);
        let solver = Self::with_engine(&P, &q, &A, &b, &cones, settings)?;

        Ok(solver)
    }
}

fn sanitize_settings<T: FloatT>(settings: &mut DefaultSettings<T>) {
    if settings.time_limit == f64::INFINITY {
        settings.time_limit = f64::MAX;
    }
}

fn desanitize_settings<T: FloatT>(settings: &mut DefaultSettings<T>) {
    if settings.time_limit == f64::MAX {
        settings.time_limit = f64::INFINITY;
    }
}

#[test]
fn test_settings_sanitize() {
    let mut settings = DefaultSettings::<f64>::default();
    sanitize_settings(&mut settings);
    assert_eq!(settings.time_limit, f64::MAX);
    assert!(serde_json::to_string(&settings).is_ok());
    desanitize_settings(&mut settings);
    assert_eq!(settings.time_limit, f64::INFINITY);
}
