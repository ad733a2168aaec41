use super::{ColumnRef, Expr};

#[derive(Debug, Clone, PartialEq)]
pub struct ExprIsNull {
    pub column: ColumnRef,

    /// `IS NOT NULL` when true
    pub negate: bool,
}

impl Expr {
    pub fn is_null(column: ColumnRef) -> Self {
        ExprIsNull {
            column,
            negate: false,
        }
        .into()
    }

    pub fn is_not_null(column: ColumnRef) -> Self {
        ExprIsNull {
            column,
            negate: true,
        }
        .into()
    }
}

impl From<ExprIsNull> for Expr {
    fn from(value: ExprIsNull) -> Self {
        Self::IsNull(value)
    }
}
