//! Expression types for generated SQL fragments

use crate::spec::Aggregation;

/// A column reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// Table alias
    pub table: String,
    /// Column name
    pub name: String,
}

impl Column {
    pub fn new(table: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            name: name.into(),
        }
    }

    /// Create an unqualified column reference (no table prefix)
    pub fn unqualified(name: impl Into<String>) -> Self {
        Self {
            table: String::new(),
            name: name.into(),
        }
    }

    /// Fully qualified name: table.column
    pub fn qualified_name(&self) -> String {
        if self.table.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.table, self.name)
        }
    }
}

/// Functions an expression can call.
///
/// New merge semantics are added here as variants so that every consumer
/// matches on them exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SqlFunction {
    /// First non-null argument, in argument order
    Coalesce,
    Sum,
    Min,
    Max,
    Avg,
    Count,
    CountDistinct,
    BoolOr,
    Median,
}

impl SqlFunction {
    /// Aggregate function for a measure aggregation type.
    ///
    /// `Percentile` needs a percentile argument and has no parameterless form.
    pub fn from_aggregation(aggregation: Aggregation) -> Option<SqlFunction> {
        match aggregation {
            Aggregation::Sum | Aggregation::SumBoolean => Some(SqlFunction::Sum),
            Aggregation::Min => Some(SqlFunction::Min),
            Aggregation::Max => Some(SqlFunction::Max),
            Aggregation::CountDistinct => Some(SqlFunction::CountDistinct),
            Aggregation::Boolean => Some(SqlFunction::BoolOr),
            Aggregation::Average => Some(SqlFunction::Avg),
            Aggregation::Median => Some(SqlFunction::Median),
            Aggregation::Count => Some(SqlFunction::Count),
            Aggregation::Percentile => None,
        }
    }

    pub fn is_aggregate(&self) -> bool {
        !matches!(self, SqlFunction::Coalesce)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SqlFunction::Coalesce => "COALESCE",
            SqlFunction::Sum => "SUM",
            SqlFunction::Min => "MIN",
            SqlFunction::Max => "MAX",
            SqlFunction::Avg => "AVG",
            SqlFunction::Count => "COUNT",
            SqlFunction::CountDistinct => "COUNT",
            SqlFunction::BoolOr => "BOOL_OR",
            SqlFunction::Median => "MEDIAN",
        }
    }
}

/// Scalar expressions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// Column reference
    Column(Column),
    /// Function call with ordered arguments
    Function {
        func: SqlFunction,
        args: Vec<Expr>,
    },
}

impl Expr {
    pub fn column(table: impl Into<String>, name: impl Into<String>) -> Self {
        Expr::Column(Column::new(table, name))
    }

    pub fn coalesce(args: Vec<Expr>) -> Self {
        Expr::Function {
            func: SqlFunction::Coalesce,
            args,
        }
    }

    pub fn as_column(&self) -> Option<&Column> {
        match self {
            Expr::Column(col) => Some(col),
            Expr::Function { .. } => None,
        }
    }
}
