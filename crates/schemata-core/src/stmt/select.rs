use super::{ColumnRef, Expr, OrderByExpr, Statement};

#[derive(Debug, Clone, PartialEq)]
pub struct Select {
    pub table: String,

    /// Projected columns, in output order
    pub columns: Vec<ColumnRef>,

    pub filter: Option<Expr>,

    pub order_by: Vec<OrderByExpr>,
}

impl Select {
    /// `SELECT columns FROM table`, unfiltered and unordered.
    pub fn new(table: impl Into<String>, columns: Vec<ColumnRef>) -> Self {
        Self {
            table: table.into(),
            columns,
            filter: None,
            order_by: vec![],
        }
    }
}

impl From<Select> for Statement {
    fn from(value: Select) -> Self {
        Self::Select(value)
    }
}
