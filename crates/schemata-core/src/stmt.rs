//! Statement trees produced by the statement builder and rendered to SQL by
//! the serializer.
//!
//! Trees reference tables and columns by name. Every caller-supplied value is
//! an [`Expr::Value`] and is always sent as a bound parameter.

mod delete;
pub use delete::Delete;

mod expr;
pub use expr::Expr;

mod expr_and;
pub use expr_and::ExprAnd;

mod expr_binary_op;
pub use expr_binary_op::ExprBinaryOp;

mod expr_column;
pub use expr_column::ColumnRef;

mod expr_is_null;
pub use expr_is_null::ExprIsNull;

mod expr_like;
pub use expr_like::ExprLike;

mod insert;
pub use insert::Insert;

mod op_binary;
pub use op_binary::BinaryOp;

mod order_by_expr;
pub use order_by_expr::{Direction, OrderByExpr};

mod select;
pub use select::Select;

mod update;
pub use update::{Assignment, Update};

mod value;
pub use value::Value;

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Delete(Delete),
    Insert(Insert),
    Select(Select),
    Update(Update),
}

impl Statement {
    /// Name of the table the statement targets.
    pub fn table(&self) -> &str {
        match self {
            Statement::Delete(stmt) => &stmt.table,
            Statement::Insert(stmt) => &stmt.table,
            Statement::Select(stmt) => &stmt.table,
            Statement::Update(stmt) => &stmt.table,
        }
    }

    /// True if executing the statement returns rows rather than a count.
    pub fn is_query(&self) -> bool {
        matches!(self, Statement::Select(_))
    }
}
