use super::{BinaryOp, ColumnRef, Expr, Value};

/// `column <op> value`
///
/// The left-hand side is always a column and the right-hand side a bound
/// value, so the serializer can type the parameter from the column.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprBinaryOp {
    pub lhs: ColumnRef,

    pub op: BinaryOp,

    pub rhs: Value,

    /// When false, `rhs` is bound as its own type and the database promotes
    /// the operands instead of converting the value to the column's type.
    pub coerce: bool,
}

impl Expr {
    pub fn binary_op(lhs: ColumnRef, op: BinaryOp, rhs: impl Into<Value>) -> Self {
        ExprBinaryOp {
            lhs,
            op,
            rhs: rhs.into(),
            coerce: true,
        }
        .into()
    }

    pub fn eq(lhs: ColumnRef, rhs: impl Into<Value>) -> Self {
        Expr::binary_op(lhs, BinaryOp::Eq, rhs)
    }

    /// Equality where `rhs` keeps its own type, so `2.7` never matches an
    /// integer column.
    pub fn eq_numeric(lhs: ColumnRef, rhs: impl Into<Value>) -> Self {
        ExprBinaryOp {
            lhs,
            op: BinaryOp::Eq,
            rhs: rhs.into(),
            coerce: false,
        }
        .into()
    }
}

impl From<ExprBinaryOp> for Expr {
    fn from(value: ExprBinaryOp) -> Self {
        Self::BinaryOp(value)
    }
}
