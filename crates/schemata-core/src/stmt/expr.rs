use super::{ColumnRef, ExprAnd, ExprBinaryOp, ExprIsNull, ExprLike, Value};

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// AND a set of predicates
    And(ExprAnd),

    /// Binary comparison
    BinaryOp(ExprBinaryOp),

    /// References a column of the statement's table
    Column(ColumnRef),

    /// `IS NULL` / `IS NOT NULL`
    IsNull(ExprIsNull),

    /// `LIKE` / `NOT LIKE`
    Like(ExprLike),

    /// A caller-supplied value, sent as a bound parameter
    Value(Value),
}

impl From<Value> for Expr {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl From<ColumnRef> for Expr {
    fn from(value: ColumnRef) -> Self {
        Self::Column(value)
    }
}
