use crate::errors::{FileOperation, IoError};
use crate::tree::{self, TreeError};
use indexmap::IndexSet;
use miette::Diagnostic;
use std::{fs, path::Path};
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum ScanError {
    #[error("I/O error while scanning template files")]
    #[diagnostic(code(sweepgen::scan::io))]
    Io(#[from] IoError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Tree(#[from] TreeError),
}

lazy_static::lazy_static! {
    static ref TOKEN_REGEX: regex::Regex =
        regex::Regex::new(r"!SUB(\S*)SUB!").expect("a valid regex pattern");
}

/// Extracts every substitution key appearing in `content`, in match order,
/// duplicates preserved.
///
/// A key is whatever sits between the `!SUB` and `SUB!` delimiters. Keys
/// containing whitespace cannot match the token grammar and are never
/// extracted.
pub fn content_keys(content: &str) -> Vec<String> {
    TOKEN_REGEX
        .captures_iter(content)
        .map(|caps| caps[1].to_string())
        .collect()
}

/// Collects the deduplicated set of substitution keys across every file of
/// the template tree rooted at `root`, in first-seen order.
pub fn template_keys(root: &Path) -> Result<IndexSet<String>, ScanError> {
    let mut keys = IndexSet::new();

    for relative in tree::template_files(root)? {
        let path = root.join(&relative);

        let content = fs::read_to_string(&path)
            .map_err(|error| IoError::new(FileOperation::Read, path.clone(), error))?;

        keys.extend(content_keys(&content));
    }

    Ok(keys)
}
