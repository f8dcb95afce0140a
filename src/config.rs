use crate::errors::{FileFormat, FileOperation, IoError, ParseError};
use crate::subs::SubMap;
use miette::Diagnostic;
use serde::Deserialize;
use std::{fs, path::Path};
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("I/O error within configuration domain")]
    #[diagnostic(code(sweepgen::config::io))]
    Io(#[from] IoError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Parse(#[from] ParseError),
}

fn read_json<T, P>(path: P) -> Result<T, ConfigError>
where
    T: serde::de::DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    let content = fs::read_to_string(path)
        .map_err(|error| IoError::new(FileOperation::Read, path.to_path_buf(), error))?;

    let parsed = serde_json::from_str(&content)
        .map_err(|error| ParseError::new(FileFormat::Json, path.to_path_buf(), error))?;

    Ok(parsed)
}

/// The substitutions shared by every run: a JSON object of string keys to
/// scalar values.
#[derive(Debug, Deserialize)]
pub struct CommonSubs(pub SubMap);
impl CommonSubs {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        read_json(path)
    }
}

/// The ordered run specifications: a JSON array of objects, each holding the
/// overrides for the run at its index. The array length is the run count.
#[derive(Debug, Deserialize)]
pub struct RunSpecs(pub Vec<SubMap>);
impl RunSpecs {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        read_json(path)
    }
}
