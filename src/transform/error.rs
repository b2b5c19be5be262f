//! Transform errors

use std::fmt;
use crate::resolver::ResolveError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransformError {
    /// Coalescing needs at least one table alias
    EmptyTableAliases,
    /// Identifier backed by more than one column
    CompositeIdentifier {
        name: String,
        columns: Vec<String>,
    },
    /// Column lookup failed
    Resolve(ResolveError),
}

impl fmt::Display for TransformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransformError::EmptyTableAliases => {
                write!(f, "Cannot coalesce columns without any table aliases")
            }
            TransformError::CompositeIdentifier { name, columns } => {
                write!(
                    f,
                    "Composite identifiers not supported: '{}' resolves to [{}]",
                    name,
                    columns.join(", ")
                )
            }
            TransformError::Resolve(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for TransformError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TransformError::Resolve(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ResolveError> for TransformError {
    fn from(err: ResolveError) -> Self {
        TransformError::Resolve(err)
    }
}
