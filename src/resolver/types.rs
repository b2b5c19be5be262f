//! Column resolver interface

use crate::spec::{DimensionSpec, IdentifierSpec, TimeDimensionSpec};
use super::error::ResolveError;

/// A physical column that a logical attribute maps to
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ColumnAssociation {
    pub column_name: String,
}

impl ColumnAssociation {
    pub fn new(column_name: impl Into<String>) -> Self {
        Self { column_name: column_name.into() }
    }
}

/// Maps logical attribute references to physical column names.
///
/// Results are ordered. Identifiers backed by a composite key resolve to more
/// than one column. Implementations shared across threads must be `Sync`.
pub trait ColumnResolver {
    fn resolve_dimension(&self, spec: &DimensionSpec) -> Result<Vec<ColumnAssociation>, ResolveError>;

    fn resolve_time_dimension(&self, spec: &TimeDimensionSpec) -> Result<Vec<ColumnAssociation>, ResolveError>;

    fn resolve_identifier(&self, spec: &IdentifierSpec) -> Result<Vec<ColumnAssociation>, ResolveError>;
}
