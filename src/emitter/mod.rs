//! SQL emitter (verb module)
//!
//! Renders expressions and select columns to ANSI SQL text.

mod error;
mod sql;

pub use error::EmitError;
pub use sql::{emit_expr, emit_select_column, emit_select_list};
