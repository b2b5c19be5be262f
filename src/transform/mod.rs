//! Spec set transforms (verb module)
//!
//! Pure stages that turn a SpecSet into a filtered SpecSet or into select columns.

mod coalesce;
mod error;
mod linkable;

pub use coalesce::{CoalesceLinkableColumns, make_coalesced_expr};
pub use error::TransformError;
pub use linkable::SelectOnlyLinkableSpecs;

use crate::spec::SpecSet;

/// A stage that maps a spec set to a value of type `T`.
///
/// Implementations must not depend on anything but their own configuration and
/// the input set, so stages can be chained freely.
pub trait SpecSetTransform<T> {
    fn transform(&self, spec_set: &SpecSet) -> T;
}
