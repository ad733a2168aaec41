use super::{attribute, value::numeric_literal};

use schemata_core::{
    schema::{Entity, TypeCategory},
    stmt::{self, ColumnRef, Expr, Statement},
    Error, Result,
};

/// Builds a delete matching every `(name, value)` pair.
///
/// Values that read as a finite number are compared with `=`; all other
/// values are used as `LIKE` patterns without escaping. This is decided from
/// the text alone, not from the column type, so `"42"` against a text column
/// still compares with `=`.
///
/// Against numeric columns the number is bound as itself and never converted
/// to the column's type. Character and temporal columns compare against the
/// text exactly as given, so `"02134"` matches its stored value.
pub fn delete<N, V>(entity: &Entity, names: &[N], values: &[V]) -> Result<Statement>
where
    N: AsRef<str>,
    V: AsRef<str>,
{
    if names.len() != values.len() {
        return Err(Error::arity(&entity.name, names.len(), values.len()));
    }

    if names.is_empty() {
        return Err(Error::missing_predicate(&entity.name));
    }

    let mut filter = Vec::with_capacity(names.len());

    for (name, value) in names.iter().zip(values) {
        let attribute = attribute(entity, name.as_ref())?;
        let column = ColumnRef::from(attribute);
        let value: &str = value.as_ref();

        let Some(number) = numeric_literal(value) else {
            filter.push(Expr::like(column, value));
            continue;
        };

        filter.push(match attribute.ty.category() {
            TypeCategory::Integer | TypeCategory::Decimal | TypeCategory::Float => {
                Expr::eq_numeric(column, number)
            }
            TypeCategory::Character | TypeCategory::Temporal => Expr::eq(column, value),
            TypeCategory::Boolean | TypeCategory::Binary => Expr::eq(column, number),
        });
    }

    Ok(stmt::Delete {
        table: entity.name.clone(),
        filter: Expr::and_from_vec(filter),
    }
    .into())
}
