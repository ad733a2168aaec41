use super::{ColumnRef, Expr, Statement};

#[derive(Debug, Clone, PartialEq)]
pub struct Update {
    pub table: String,

    /// Columns to set. Never empty.
    pub assignments: Vec<Assignment>,

    /// Restricts the update to the row matched by its primary key
    pub filter: Expr,
}

/// `column = value`
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub column: ColumnRef,

    pub value: Expr,
}

impl From<Update> for Statement {
    fn from(value: Update) -> Self {
        Self::Update(value)
    }
}
