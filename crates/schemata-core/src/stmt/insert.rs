use super::{ColumnRef, Expr, Statement};

/// Single-row insert. `columns` and `values` are aligned by position.
#[derive(Debug, Clone, PartialEq)]
pub struct Insert {
    pub table: String,

    pub columns: Vec<ColumnRef>,

    pub values: Vec<Expr>,
}

impl Insert {
    pub fn pairs(&self) -> impl ExactSizeIterator<Item = (&ColumnRef, &Expr)> + '_ {
        self.columns.iter().zip(self.values.iter())
    }
}

impl From<Insert> for Statement {
    fn from(value: Insert) -> Self {
        Self::Insert(value)
    }
}
