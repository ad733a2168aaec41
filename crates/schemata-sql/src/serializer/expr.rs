use super::{value::Param, Delimited, Formatter, Ident, Params, ToSql};

use crate::stmt::{self, Expr};

impl ToSql for &Expr {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        match self {
            Expr::And(expr) => {
                fmt!(f, Delimited(&expr.operands, " AND "));
            }
            Expr::BinaryOp(expr) => {
                let rhs = if expr.coerce {
                    Param::typed(&expr.rhs, expr.lhs.ty)
                } else {
                    Param::untyped(&expr.rhs)
                };

                fmt!(f, Ident(&expr.lhs.name) " " expr.op " " rhs);
            }
            Expr::Column(column) => {
                fmt!(f, Ident(&column.name));
            }
            Expr::IsNull(expr) => {
                let op = if expr.negate { " IS NOT NULL" } else { " IS NULL" };
                fmt!(f, Ident(&expr.column.name) op);
            }
            Expr::Like(expr) => {
                let op = if expr.negate { " NOT LIKE " } else { " LIKE " };
                let pattern = stmt::Value::String(expr.pattern.clone());

                if f.serializer.is_postgresql() {
                    fmt!(f, "CAST(" Ident(&expr.column.name) " AS text)");
                } else {
                    fmt!(f, Ident(&expr.column.name));
                }

                fmt!(f, op Param::untyped(&pattern));
            }
            Expr::Value(value) => {
                fmt!(f, Param::untyped(value));
            }
        }
    }
}

impl ToSql for stmt::BinaryOp {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        use stmt::BinaryOp::*;

        f.dst.push_str(match self {
            Eq => "=",
            Ne => "<>",
            Ge => ">=",
            Gt => ">",
            Le => "<=",
            Lt => "<",
        });
    }
}
