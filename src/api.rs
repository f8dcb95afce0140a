use crate::{
    config::{CommonSubs, ConfigError, RunSpecs},
    expand::{self, ExpandError},
    scan::{self, ScanError},
};
use indexmap::IndexSet;
use std::path::Path;

#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum SweepError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Expand(#[from] ExpandError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Scan(#[from] ScanError),
}

/// Expands the template at `template_dir` into per-run directories beneath
/// `destination_dir`, reading the common substitutions and the ordered run
/// specifications from the given JSON files.
///
/// # Errors
///
/// Returns a [`SweepError`] if:
///
/// - Either configuration source cannot be read or does not parse into the
///   expected shape.
/// - The template directory does not exist or is not a directory.
/// - A destination directory or file cannot be created or written to.
pub fn expand_template(
    template_dir: &str,
    destination_dir: &str,
    common_subs: &str,
    override_subs: &str,
    prefix: &str,
) -> Result<(), SweepError> {
    let common = CommonSubs::from_file(common_subs)?;
    let runs = RunSpecs::from_file(override_subs)?;

    log::debug!(
        "expanding template '{}' into '{}' across {} runs",
        template_dir,
        destination_dir,
        runs.0.len()
    );

    expand::expand_runs(
        Path::new(template_dir),
        Path::new(destination_dir),
        &common.0,
        &runs.0,
        prefix,
    )?;

    Ok(())
}

/// Collects the distinct substitution keys found in the template tree at
/// `template_dir`, in first-seen order.
///
/// # Errors
///
/// Returns a [`SweepError`] if the template directory does not exist, is not
/// a directory, or any of its files cannot be read.
pub fn scan_template(template_dir: &str) -> Result<IndexSet<String>, SweepError> {
    let keys = scan::template_keys(Path::new(template_dir))?;

    Ok(keys)
}
