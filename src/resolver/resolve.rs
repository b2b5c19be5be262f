//! Concrete column resolvers

use std::collections::HashMap;
use serde::Deserialize;

use crate::spec::{DimensionSpec, IdentifierSpec, InstanceSpec, TimeDimensionSpec};
use super::error::ResolveError;
use super::types::{ColumnAssociation, ColumnResolver};

/// Resolves every attribute to a single column named after its qualified name
///
/// `booking__ds__month` is read from column `booking__ds__month` of every source.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultColumnResolver;

impl DefaultColumnResolver {
    fn resolve_spec(spec: &impl InstanceSpec) -> Vec<ColumnAssociation> {
        vec![ColumnAssociation::new(spec.qualified_name())]
    }
}

impl ColumnResolver for DefaultColumnResolver {
    fn resolve_dimension(&self, spec: &DimensionSpec) -> Result<Vec<ColumnAssociation>, ResolveError> {
        Ok(Self::resolve_spec(spec))
    }

    fn resolve_time_dimension(&self, spec: &TimeDimensionSpec) -> Result<Vec<ColumnAssociation>, ResolveError> {
        Ok(Self::resolve_spec(spec))
    }

    fn resolve_identifier(&self, spec: &IdentifierSpec) -> Result<Vec<ColumnAssociation>, ResolveError> {
        Ok(Self::resolve_spec(spec))
    }
}

/// One column, or the ordered columns of a composite key
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum ColumnNames {
    One(String),
    Many(Vec<String>),
}

impl ColumnNames {
    fn to_associations(&self) -> Vec<ColumnAssociation> {
        match self {
            ColumnNames::One(name) => vec![ColumnAssociation::new(name.clone())],
            ColumnNames::Many(names) => names.iter().map(ColumnAssociation::new).collect(),
        }
    }
}

/// Resolves attributes through explicit maps keyed by qualified name
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MappedColumnResolver {
    #[serde(default)]
    dimensions: HashMap<String, String>,
    #[serde(default)]
    time_dimensions: HashMap<String, String>,
    #[serde(default)]
    identifiers: HashMap<String, ColumnNames>,
}

impl MappedColumnResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dimension(mut self, qualified_name: impl Into<String>, column: impl Into<String>) -> Self {
        self.dimensions.insert(qualified_name.into(), column.into());
        self
    }

    pub fn with_time_dimension(mut self, qualified_name: impl Into<String>, column: impl Into<String>) -> Self {
        self.time_dimensions.insert(qualified_name.into(), column.into());
        self
    }

    /// Map an identifier to one or more key columns, in key order
    pub fn with_identifier<I, S>(mut self, qualified_name: impl Into<String>, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let columns = columns.into_iter().map(Into::into).collect();
        self.identifiers.insert(qualified_name.into(), ColumnNames::Many(columns));
        self
    }

    fn not_found(spec: &impl InstanceSpec) -> ResolveError {
        ResolveError::NotFound {
            kind: spec.kind(),
            name: spec.qualified_name(),
        }
    }
}

impl ColumnResolver for MappedColumnResolver {
    fn resolve_dimension(&self, spec: &DimensionSpec) -> Result<Vec<ColumnAssociation>, ResolveError> {
        self.dimensions
            .get(&spec.qualified_name())
            .map(|column| vec![ColumnAssociation::new(column.clone())])
            .ok_or_else(|| Self::not_found(spec))
    }

    fn resolve_time_dimension(&self, spec: &TimeDimensionSpec) -> Result<Vec<ColumnAssociation>, ResolveError> {
        self.time_dimensions
            .get(&spec.qualified_name())
            .map(|column| vec![ColumnAssociation::new(column.clone())])
            .ok_or_else(|| Self::not_found(spec))
    }

    fn resolve_identifier(&self, spec: &IdentifierSpec) -> Result<Vec<ColumnAssociation>, ResolveError> {
        self.identifiers
            .get(&spec.qualified_name())
            .map(ColumnNames::to_associations)
            .ok_or_else(|| Self::not_found(spec))
    }
}
