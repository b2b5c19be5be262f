//! Emitter errors

use std::fmt;
use crate::sql::SqlFunction;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmitError {
    /// Function called with the wrong number of arguments
    InvalidArity {
        func: SqlFunction,
        expected: &'static str,
        got: usize,
    },
}

impl fmt::Display for EmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmitError::InvalidArity { func, expected, got } => {
                write!(f, "{} expects {} argument(s), got {}", func.as_str(), expected, got)
            }
        }
    }
}

impl std::error::Error for EmitError {}
