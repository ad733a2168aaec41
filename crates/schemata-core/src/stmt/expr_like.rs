use super::{ColumnRef, Expr};

/// `column LIKE pattern`. The pattern is used as given: `%` and `_` keep
/// their wildcard meaning and are not escaped.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprLike {
    pub column: ColumnRef,

    pub pattern: String,

    pub negate: bool,
}

impl Expr {
    pub fn like(column: ColumnRef, pattern: impl Into<String>) -> Self {
        ExprLike {
            column,
            pattern: pattern.into(),
            negate: false,
        }
        .into()
    }

    pub fn not_like(column: ColumnRef, pattern: impl Into<String>) -> Self {
        ExprLike {
            column,
            pattern: pattern.into(),
            negate: true,
        }
        .into()
    }
}

impl From<ExprLike> for Expr {
    fn from(value: ExprLike) -> Self {
        Self::Like(value)
    }
}
