//! Select-list column types

use super::expr::Expr;

/// An expression with its output name: `<expr> AS <column_alias>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectColumn {
    pub expr: Expr,
    pub column_alias: String,
}

impl SelectColumn {
    pub fn new(expr: Expr, column_alias: impl Into<String>) -> Self {
        Self {
            expr,
            column_alias: column_alias.into(),
        }
    }
}

/// Select columns grouped by the category of the attribute they render
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectColumnSet {
    pub dimension_columns: Vec<SelectColumn>,
    pub time_dimension_columns: Vec<SelectColumn>,
    pub identifier_columns: Vec<SelectColumn>,
}

impl SelectColumnSet {
    /// All columns in select-list order: dimensions, time dimensions, identifiers
    pub fn columns(&self) -> impl Iterator<Item = &SelectColumn> {
        self.dimension_columns
            .iter()
            .chain(self.time_dimension_columns.iter())
            .chain(self.identifier_columns.iter())
    }

    pub fn len(&self) -> usize {
        self.dimension_columns.len() + self.time_dimension_columns.len() + self.identifier_columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_columns_order() {
        let set = SelectColumnSet {
            dimension_columns: vec![SelectColumn::new(Expr::column("a", "d"), "d")],
            time_dimension_columns: vec![SelectColumn::new(Expr::column("a", "t"), "t")],
            identifier_columns: vec![SelectColumn::new(Expr::column("a", "i"), "i")],
        };
        let aliases: Vec<&str> = set.columns().map(|c| c.column_alias.as_str()).collect();
        assert_eq!(aliases, vec!["d", "t", "i"]);
        assert_eq!(set.len(), 3);
        assert!(SelectColumnSet::default().is_empty());
    }
}
