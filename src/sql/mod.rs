//! SQL fragment types (noun module)
//!
//! Expressions and select columns built before rendering to text.

mod expr;
mod select;

pub use expr::{Expr, Column, SqlFunction};
pub use select::{SelectColumn, SelectColumnSet};
