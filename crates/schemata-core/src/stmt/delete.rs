use super::{Expr, Statement};

/// `DELETE FROM table WHERE filter`
///
/// There is no unfiltered form: a delete always carries a predicate.
#[derive(Debug, Clone, PartialEq)]
pub struct Delete {
    pub table: String,

    pub filter: Expr,
}

impl From<Delete> for Statement {
    fn from(value: Delete) -> Self {
        Self::Delete(value)
    }
}
