//! Coalesced select columns for linkable specs
//!
//! When the same attribute is available from several joined sources, each
//! output column merges the sources with `COALESCE`, first alias first:
//!
//! ```text
//! dimensions    = [is_instant]
//! table_aliases = [a, b]
//!
//! COALESCE(a.is_instant, b.is_instant) AS is_instant
//! ```

use tracing::{debug, trace};

use crate::resolver::{ColumnAssociation, ColumnResolver, ResolveError};
use crate::spec::{InstanceSpec, SpecSet};
use crate::sql::{Expr, SelectColumn, SelectColumnSet};
use super::error::TransformError;
use super::SpecSetTransform;

/// Build the expression reading `column_name` from every table alias.
///
/// A single alias yields a plain column reference. Several aliases yield a
/// `COALESCE` over the aliases in the order given, so the first alias takes
/// precedence when non-null.
pub fn make_coalesced_expr<S: AsRef<str>>(table_aliases: &[S], column_name: &str) -> Result<Expr, TransformError> {
    match table_aliases {
        [] => Err(TransformError::EmptyTableAliases),
        [alias] => Ok(Expr::column(alias.as_ref(), column_name)),
        aliases => Ok(Expr::coalesce(
            aliases
                .iter()
                .map(|alias| Expr::column(alias.as_ref(), column_name))
                .collect(),
        )),
    }
}

/// Renders dimensions, time dimensions and identifiers as one merged column each.
///
/// Each attribute is resolved once and the resulting column name is read from
/// every alias, so all sources must share the same physical naming. Measures
/// and metrics are ignored.
pub struct CoalesceLinkableColumns<'a> {
    resolver: &'a dyn ColumnResolver,
    table_aliases: Vec<String>,
}

impl<'a> CoalesceLinkableColumns<'a> {
    pub fn new<I, S>(resolver: &'a dyn ColumnResolver, table_aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            resolver,
            table_aliases: table_aliases.into_iter().map(Into::into).collect(),
        }
    }

    pub fn table_aliases(&self) -> &[String] {
        &self.table_aliases
    }

    fn select_column(&self, column_name: String) -> Result<SelectColumn, TransformError> {
        trace!(column = %column_name, "coalescing column");
        let expr = make_coalesced_expr(self.table_aliases.as_slice(), &column_name)?;
        Ok(SelectColumn::new(expr, column_name))
    }
}

impl std::fmt::Debug for CoalesceLinkableColumns<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoalesceLinkableColumns")
            .field("table_aliases", &self.table_aliases)
            .finish_non_exhaustive()
    }
}

/// The first resolved column is authoritative for dimensions
fn first_column(spec: &impl InstanceSpec, columns: Vec<ColumnAssociation>) -> Result<String, TransformError> {
    columns
        .into_iter()
        .next()
        .map(|c| c.column_name)
        .ok_or_else(|| not_found(spec))
}

/// Identifiers must resolve to exactly one column
fn single_column(spec: &impl InstanceSpec, mut columns: Vec<ColumnAssociation>) -> Result<String, TransformError> {
    match columns.len() {
        0 => Err(not_found(spec)),
        1 => Ok(columns.remove(0).column_name),
        _ => Err(TransformError::CompositeIdentifier {
            name: spec.qualified_name(),
            columns: columns.into_iter().map(|c| c.column_name).collect(),
        }),
    }
}

fn not_found(spec: &impl InstanceSpec) -> TransformError {
    TransformError::Resolve(ResolveError::NotFound {
        kind: spec.kind(),
        name: spec.qualified_name(),
    })
}

impl SpecSetTransform<Result<SelectColumnSet, TransformError>> for CoalesceLinkableColumns<'_> {
    fn transform(&self, spec_set: &SpecSet) -> Result<SelectColumnSet, TransformError> {
        if self.table_aliases.is_empty() {
            return Err(TransformError::EmptyTableAliases);
        }

        debug!(
            aliases = ?self.table_aliases,
            dimensions = spec_set.dimension_specs().len(),
            time_dimensions = spec_set.time_dimension_specs().len(),
            identifiers = spec_set.identifier_specs().len(),
            "creating coalesced select columns"
        );

        let dimension_columns = spec_set
            .dimension_specs()
            .iter()
            .map(|spec| {
                let columns = self.resolver.resolve_dimension(spec)?;
                self.select_column(first_column(spec, columns)?)
            })
            .collect::<Result<Vec<_>, TransformError>>()?;

        let time_dimension_columns = spec_set
            .time_dimension_specs()
            .iter()
            .map(|spec| {
                let columns = self.resolver.resolve_time_dimension(spec)?;
                self.select_column(first_column(spec, columns)?)
            })
            .collect::<Result<Vec<_>, TransformError>>()?;

        let identifier_columns = spec_set
            .identifier_specs()
            .iter()
            .map(|spec| {
                let columns = self.resolver.resolve_identifier(spec)?;
                self.select_column(single_column(spec, columns)?)
            })
            .collect::<Result<Vec<_>, TransformError>>()?;

        Ok(SelectColumnSet {
            dimension_columns,
            time_dimension_columns,
            identifier_columns,
        })
    }
}
