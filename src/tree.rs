use crate::errors::{FileOperation, IoError};
use miette::Diagnostic;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Debug, Error, Diagnostic)]
pub enum TreeError {
    #[error("template directory not found: '{path}'")]
    #[diagnostic(
        code(sweepgen::tree::root_not_found),
        help("Make sure the template directory exists and the path is spelled correctly")
    )]
    RootNotFound { path: PathBuf },

    #[error("template root is not a directory: '{path}'")]
    #[diagnostic(code(sweepgen::tree::root_not_directory))]
    RootNotDirectory { path: PathBuf },

    #[error("I/O error while walking template tree")]
    #[diagnostic(code(sweepgen::tree::io))]
    Io(#[from] IoError),

    #[error("unable to strip prefix from directory")]
    #[diagnostic(code(sweepgen::tree::strip_prefix))]
    StripPrefix {
        path: PathBuf,
        dir: PathBuf,
        source: std::path::StripPrefixError,
    },
}

/// Lists every regular file beneath `root`, recursively, as paths relative
/// to `root`.
///
/// Directories themselves (empty ones included) are not emitted, and the
/// order of the returned paths is unspecified beyond every file appearing
/// exactly once.
pub fn template_files(root: &Path) -> Result<Vec<PathBuf>, TreeError> {
    if !root.exists() {
        return Err(TreeError::RootNotFound {
            path: root.to_path_buf(),
        });
    }
    if !root.is_dir() {
        return Err(TreeError::RootNotDirectory {
            path: root.to_path_buf(),
        });
    }

    let mut files = Vec::new();

    for entry in WalkDir::new(root) {
        let entry = match entry {
            Ok(e) => e,
            Err(error) => {
                let path = error.path().unwrap_or_else(|| Path::new(""));

                Err(IoError::new(
                    FileOperation::Read,
                    path.to_path_buf(),
                    error.into(),
                ))?
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let full_path = entry.path();
        let relative = match full_path.strip_prefix(root) {
            Ok(r) => r,
            Err(error) => Err(TreeError::StripPrefix {
                path: full_path.to_path_buf(),
                dir: root.to_path_buf(),
                source: error,
            })?,
        };

        files.push(relative.to_path_buf());
    }

    Ok(files)
}
