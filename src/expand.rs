use crate::errors::{FileOperation, IoError};
use crate::subs::{effective_map, substitute, SubMap};
use crate::tree::{self, TreeError};
use colored::Colorize;
use miette::Diagnostic;
use std::{fs, path::Path};
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum ExpandError {
    #[error("I/O error within expansion domain")]
    #[diagnostic(code(sweepgen::expand::io))]
    Io(#[from] IoError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Tree(#[from] TreeError),
}

/// Default directory name prefix for generated runs.
pub const DEFAULT_RUN_PREFIX: &str = "run_";

/// Expands the template tree at `template_root` into one destination tree
/// per run specification.
///
/// For run `i` (0-based, input order) every template file is re-created at
/// `destination_root/<prefix><i>/<relative_path>` with its content passed
/// through [`substitute`] using `common` merged under run `i`'s overrides.
/// Existing destination files are silently overwritten and existing parent
/// directories reused.
///
/// The first failed read or write aborts the whole expansion; destination
/// trees written by earlier runs are left in place.
pub fn expand_runs(
    template_root: &Path,
    destination_root: &Path,
    common: &SubMap,
    runs: &[SubMap],
    prefix: &str,
) -> Result<(), ExpandError> {
    let files = tree::template_files(template_root)?;

    log::debug!(
        "expanding {} template files into {} runs",
        files.len(),
        runs.len()
    );

    for (index, overrides) in runs.iter().enumerate() {
        let subs = effective_map(common, overrides);

        let destination = destination_root.join(format!("{}{}", prefix, index));

        log::debug!("run {} -> {}", index, destination.display());

        for relative in &files {
            let template_file = template_root.join(relative);

            let content = fs::read_to_string(&template_file).map_err(|error| {
                IoError::new(FileOperation::Read, template_file.clone(), error)
            })?;

            let substituted = substitute(&content, &subs);

            let destination_file = destination.join(relative);

            if let Some(parent) = destination_file.parent() {
                create_directory(parent)?;
            }

            write_file(&destination_file, substituted)?;
        }
    }

    Ok(())
}

/// Creates all directories in the specified path if they do not exist.
/// Re-creating an already present chain is a no-op.
fn create_directory(path: &Path) -> Result<(), ExpandError> {
    fs::create_dir_all(path)
        .map_err(|error| IoError::new(FileOperation::Mkdir, path.into(), error))?;

    Ok(())
}

/// Writes a file with the provided contents to the specified path,
/// overwriting any existing file, and prints a progress line.
fn write_file(path: &Path, contents: String) -> Result<(), ExpandError> {
    fs::write(path, contents)
        .map_err(|error| IoError::new(FileOperation::Write, path.into(), error))?;

    let msg = format!("{} {}", "create".green(), path.display());

    println!("{}", &msg);

    Ok(())
}
