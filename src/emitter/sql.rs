//! SQL emitter
//!
//! Renders select columns into the text of a select-list.

use crate::sql::{Column, Expr, SelectColumn, SelectColumnSet, SqlFunction};
use super::error::EmitError;

/// Render a select-list: dimensions, then time dimensions, then identifiers.
///
/// Column order within each category is kept as given.
pub fn emit_select_list(columns: &SelectColumnSet) -> Result<String, EmitError> {
    let items = columns
        .columns()
        .map(emit_select_column)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(items.join(", "))
}

/// Render `<expr> AS <alias>`
pub fn emit_select_column(column: &SelectColumn) -> Result<String, EmitError> {
    Ok(format!("{} AS {}", emit_expr(&column.expr)?, column.column_alias))
}

// ---------------------------------------------------------------------------
// Expressions
// ---------------------------------------------------------------------------

pub fn emit_expr(expr: &Expr) -> Result<String, EmitError> {
    match expr {
        Expr::Column(col) => Ok(emit_column(col)),
        Expr::Function { func, args } => emit_function(*func, args),
    }
}

fn emit_column(col: &Column) -> String {
    col.qualified_name()
}

fn emit_function(func: SqlFunction, args: &[Expr]) -> Result<String, EmitError> {
    check_arity(func, args.len())?;

    let parts: Vec<String> = args.iter().map(emit_expr).collect::<Result<Vec<_>, _>>()?;
    match func {
        SqlFunction::CountDistinct => Ok(format!("COUNT(DISTINCT {})", parts.join(", "))),
        _ => Ok(format!("{}({})", func.as_str(), parts.join(", "))),
    }
}

fn check_arity(func: SqlFunction, got: usize) -> Result<(), EmitError> {
    let (ok, expected) = match func {
        SqlFunction::Coalesce => (got >= 1, "at least 1"),
        SqlFunction::Sum
        | SqlFunction::Min
        | SqlFunction::Max
        | SqlFunction::Avg
        | SqlFunction::Count
        | SqlFunction::CountDistinct
        | SqlFunction::BoolOr
        | SqlFunction::Median => (got == 1, "exactly 1"),
    };
    if ok {
        Ok(())
    } else {
        Err(EmitError::InvalidArity { func, expected, got })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- unit: expressions ----------------------------------------------------

    #[test]
    fn test_sql_column() {
        assert_eq!(emit_expr(&Expr::column("a", "is_instant")).unwrap(), "a.is_instant");
        assert_eq!(
            emit_expr(&Expr::Column(Column::unqualified("is_instant"))).unwrap(),
            "is_instant"
        );
    }

    #[test]
    fn test_sql_coalesce() {
        let expr = Expr::coalesce(vec![Expr::column("a", "is_instant"), Expr::column("b", "is_instant")]);
        assert_eq!(emit_expr(&expr).unwrap(), "COALESCE(a.is_instant, b.is_instant)");
    }

    #[test]
    fn test_sql_aggregates() {
        let sum = Expr::Function {
            func: SqlFunction::Sum,
            args: vec![Expr::column("f", "bookings")],
        };
        assert_eq!(emit_expr(&sum).unwrap(), "SUM(f.bookings)");

        let distinct = Expr::Function {
            func: SqlFunction::CountDistinct,
            args: vec![Expr::column("f", "user_id")],
        };
        assert_eq!(emit_expr(&distinct).unwrap(), "COUNT(DISTINCT f.user_id)");
    }

    #[test]
    fn test_sql_nested() {
        let expr = Expr::Function {
            func: SqlFunction::Max,
            args: vec![Expr::coalesce(vec![Expr::column("a", "x"), Expr::column("b", "x")])],
        };
        assert_eq!(emit_expr(&expr).unwrap(), "MAX(COALESCE(a.x, b.x))");
    }

    #[test]
    fn test_sql_arity_errors() {
        let err = emit_expr(&Expr::coalesce(vec![])).unwrap_err();
        assert_eq!(
            err,
            EmitError::InvalidArity {
                func: SqlFunction::Coalesce,
                expected: "at least 1",
                got: 0,
            }
        );

        let two_arg_sum = Expr::Function {
            func: SqlFunction::Sum,
            args: vec![Expr::column("a", "x"), Expr::column("b", "x")],
        };
        assert!(matches!(
            emit_expr(&two_arg_sum),
            Err(EmitError::InvalidArity { got: 2, .. })
        ));
    }

    // -- unit: select list ----------------------------------------------------

    #[test]
    fn test_sql_select_list() {
        let columns = SelectColumnSet {
            dimension_columns: vec![SelectColumn::new(
                Expr::coalesce(vec![Expr::column("a", "is_instant"), Expr::column("b", "is_instant")]),
                "is_instant",
            )],
            time_dimension_columns: vec![SelectColumn::new(Expr::column("a", "ds__day"), "ds__day")],
            identifier_columns: vec![SelectColumn::new(Expr::column("a", "listing"), "listing")],
        };
        assert_eq!(
            emit_select_list(&columns).unwrap(),
            "COALESCE(a.is_instant, b.is_instant) AS is_instant, a.ds__day AS ds__day, a.listing AS listing"
        );
    }

    #[test]
    fn test_sql_empty_select_list() {
        assert_eq!(emit_select_list(&SelectColumnSet::default()).unwrap(), "");
    }
}
