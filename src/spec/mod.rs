//! Logical attribute references (nouns)
//!
//! These types describe what a query needs, independent of physical storage.

mod attribute;
mod set;
mod types;

pub use attribute::{InstanceSpec, DimensionSpec, TimeDimensionSpec, IdentifierSpec, MeasureSpec, MetricSpec, DUNDER};
pub use set::SpecSet;
pub use types::{SpecKind, TimeGranularity, Aggregation, ParseEnumError};
