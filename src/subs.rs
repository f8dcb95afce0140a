use indexmap::IndexMap;
use serde::Deserialize;
use std::fmt;

/// A scalar substitution value as it appears in the configuration sources.
///
/// Untagged: a JSON `true` becomes `Bool`, `1` becomes `Int`, `2.5` becomes
/// `Float`, and anything quoted becomes `String`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum SubValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
}
impl fmt::Display for SubValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{}", b),
            Self::Int(i) => write!(f, "{}", i),
            Self::Float(x) => write!(f, "{}", x),
            Self::String(s) => write!(f, "{}", s),
        }
    }
}

/// An ordered key to value mapping of substitutions.
pub type SubMap = IndexMap<String, SubValue>;

fn token(key: &str) -> String {
    format!("!SUB{}SUB!", key)
}

/// Returns `content` with every occurrence of `!SUB<key>SUB!` replaced by
/// the rendered value of `key`, for each key in `subs`.
///
/// Replacement is global per key. Placeholders whose key is not present in
/// `subs` are left verbatim; partial substitution is allowed.
pub fn substitute(content: &str, subs: &SubMap) -> String {
    let mut result = content.to_string();

    for (key, value) in subs {
        result = result.replace(&token(key), &value.to_string());
    }

    result
}

/// Merges `overrides` on top of an independent copy of `common` and returns
/// the result. On key collision the override value wins. `common` itself is
/// never mutated, so it can be reused across runs.
pub fn effective_map(common: &SubMap, overrides: &SubMap) -> SubMap {
    let mut merged = common.clone();

    for (key, value) in overrides {
        merged.insert(key.clone(), value.clone());
    }

    merged
}
