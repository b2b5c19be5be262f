//! semspec - Turn semantic spec sets into SQL select columns
//!
//! This library provides:
//! - Logical attribute references and the categorized SpecSet
//! - Column resolution (naming convention or explicit column maps)
//! - Spec set transforms (linkable-only filtering, coalesced select columns)
//! - SQL expression types and select-list emission
//! - YAML loading of spec sets and column maps
//!
//! # Architecture
//!
//! **Noun modules** (data structures):
//! - `spec/` - logical attribute references (DimensionSpec, IdentifierSpec, SpecSet, ...)
//! - `sql/` - SQL fragments (Expr, Column, SqlFunction, SelectColumn, SelectColumnSet)
//!
//! **Verb modules** (transformations):
//! - `parser/` - YAML → SpecSet / MappedColumnResolver
//! - `resolver/` - Spec → physical column names
//! - `transform/` - SpecSet → SpecSet or SelectColumnSet
//! - `emitter/` - SelectColumnSet → SQL text
//!
//! # Example
//!
//! ```
//! use semspec::{
//!     emit_select_list, CoalesceLinkableColumns, DefaultColumnResolver, DimensionSpec,
//!     SelectOnlyLinkableSpecs, SpecSet,
//! };
//!
//! let specs = SpecSet::new().with_dimension_specs(vec![DimensionSpec::new("is_instant")]);
//! let resolver = DefaultColumnResolver;
//! let columns = specs
//!     .transform(&SelectOnlyLinkableSpecs)
//!     .transform(&CoalesceLinkableColumns::new(&resolver, ["a", "b"]))?;
//!
//! assert_eq!(
//!     emit_select_list(&columns)?,
//!     "COALESCE(a.is_instant, b.is_instant) AS is_instant"
//! );
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod spec;
pub mod sql;
pub mod resolver;
pub mod transform;
pub mod emitter;
pub mod parser;
pub mod error;

// Re-export commonly used types
pub use spec::{
    InstanceSpec, DimensionSpec, TimeDimensionSpec, IdentifierSpec, MeasureSpec, MetricSpec,
    SpecSet, SpecKind, TimeGranularity, Aggregation,
};
pub use sql::{Expr, Column, SqlFunction, SelectColumn, SelectColumnSet};
pub use resolver::{ColumnResolver, ColumnAssociation, DefaultColumnResolver, MappedColumnResolver, ResolveError};
pub use transform::{SpecSetTransform, SelectOnlyLinkableSpecs, CoalesceLinkableColumns, make_coalesced_expr, TransformError};
pub use emitter::{emit_expr, emit_select_column, emit_select_list, EmitError};
pub use error::ParseError;
