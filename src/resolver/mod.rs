//! Column resolution (verb module)
//!
//! Maps logical attribute references to the physical columns of one source.

mod resolve;
mod types;
mod error;

pub use resolve::{DefaultColumnResolver, MappedColumnResolver};
pub use types::{ColumnResolver, ColumnAssociation};
pub use error::ResolveError;
