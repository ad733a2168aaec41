use super::{check_arity, typed_value};

use schemata_core::{
    schema::Entity,
    stmt::{self, Assignment, ColumnRef, Expr, Statement},
    Error, Result, Row,
};

/// Builds an update of the row identified by `existing`.
///
/// Non-empty values are assigned; empty values leave their column unchanged.
/// The filter matches every primary-key column against its value in
/// `existing`.
pub fn update<S: AsRef<str>>(entity: &Entity, values: &[S], existing: &Row) -> Result<Statement> {
    check_arity(entity, values)?;

    if entity.primary_key.is_empty() {
        return Err(Error::no_primary_key(&entity.name));
    }

    let mut assignments = vec![];

    for (attribute, value) in entity.attributes.iter().zip(values) {
        let value: &str = value.as_ref();

        if value.is_empty() {
            continue;
        }

        assignments.push(Assignment {
            column: ColumnRef::from(attribute),
            value: Expr::Value(typed_value(entity, attribute, value)?),
        });
    }

    if assignments.is_empty() {
        return Err(Error::invalid_value(
            &entity.name,
            "",
            "update does not assign any column",
        ));
    }

    let mut filter = vec![];

    for attribute in entity.primary_key_attributes() {
        let Some(key) = existing.get(&attribute.name) else {
            return Err(Error::invalid_value(
                format!("{}.{}", entity.name, attribute.name),
                "",
                "existing row has no value for this primary key column",
            ));
        };

        filter.push(Expr::eq(
            ColumnRef::from(attribute),
            typed_value(entity, attribute, key)?,
        ));
    }

    Ok(stmt::Update {
        table: entity.name.clone(),
        assignments,
        filter: Expr::and_from_vec(filter),
    }
    .into())
}
