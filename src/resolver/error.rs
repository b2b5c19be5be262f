use std::fmt;
use crate::spec::SpecKind;

/// Errors that can occur while resolving a spec to physical columns
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// No physical column is known for the attribute
    NotFound { kind: SpecKind, name: String },
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveError::NotFound { kind, name } => {
                write!(f, "No column found for {} '{}'", kind, name)
            }
        }
    }
}

impl std::error::Error for ResolveError {}
