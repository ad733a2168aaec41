use super::{check_arity, typed_value};

use schemata_core::{
    schema::Entity,
    stmt::{self, ColumnRef, Expr, Statement, Value},
    Result,
};

/// Builds a single-row insert. Every attribute gets a value; empty text
/// becomes `NULL`.
pub fn insert<S: AsRef<str>>(entity: &Entity, values: &[S]) -> Result<Statement> {
    check_arity(entity, values)?;

    let mut columns = Vec::with_capacity(values.len());
    let mut exprs = Vec::with_capacity(values.len());

    for (attribute, value) in entity.attributes.iter().zip(values) {
        let value: &str = value.as_ref();

        columns.push(ColumnRef::from(attribute));
        exprs.push(Expr::Value(if value.is_empty() {
            Value::Null
        } else {
            typed_value(entity, attribute, value)?
        }));
    }

    Ok(stmt::Insert {
        table: entity.name.clone(),
        columns,
        values: exprs,
    }
    .into())
}
