use super::{attribute, typed_value, Condition, Operator};

use schemata_core::{
    schema::Entity,
    stmt::{BinaryOp, ColumnRef, Expr, OrderByExpr, Select, Statement},
    Error, Result,
};

/// Selects `selected` (every attribute when empty) ordered by `ascending`
/// columns, then `descending` columns.
pub fn filter_and_sort<S: AsRef<str>>(
    entity: &Entity,
    selected: &[S],
    ascending: &[S],
    descending: &[S],
) -> Result<Statement> {
    for asc in ascending {
        let asc: &str = asc.as_ref();

        if descending.iter().any(|desc| AsRef::<str>::as_ref(desc) == asc) {
            return Err(Error::conflicting_order(&entity.name, asc));
        }
    }

    let mut select = Select::new(&entity.name, projection(entity, selected)?);

    for name in ascending {
        let column = ColumnRef::from(attribute(entity, name.as_ref())?);
        select.order_by.push(OrderByExpr::asc(column));
    }

    for name in descending {
        let column = ColumnRef::from(attribute(entity, name.as_ref())?);
        select.order_by.push(OrderByExpr::desc(column));
    }

    Ok(select.into())
}

/// Selects `selected` (every attribute when empty) from rows matching all
/// `conditions`.
pub fn search<S: AsRef<str>>(
    entity: &Entity,
    selected: &[S],
    conditions: &[Condition],
) -> Result<Statement> {
    let mut select = Select::new(&entity.name, projection(entity, selected)?);
    let mut filter = Vec::with_capacity(conditions.len());

    for condition in conditions {
        filter.push(predicate(entity, condition)?);
    }

    if !filter.is_empty() {
        select.filter = Some(Expr::and_from_vec(filter));
    }

    Ok(select.into())
}

fn projection<S: AsRef<str>>(entity: &Entity, selected: &[S]) -> Result<Vec<ColumnRef>> {
    if selected.is_empty() {
        return Ok(entity.attributes.iter().map(ColumnRef::from).collect());
    }

    selected
        .iter()
        .map(|name| attribute(entity, name.as_ref()).map(ColumnRef::from))
        .collect()
}

fn predicate(entity: &Entity, condition: &Condition) -> Result<Expr> {
    let attribute = attribute(entity, &condition.attribute)?;
    let column = ColumnRef::from(attribute);
    let value = condition.value.as_str();

    if value.is_empty() {
        return match condition.op {
            Operator::Eq => Ok(Expr::is_null(column)),
            Operator::Ne => Ok(Expr::is_not_null(column)),
            op => Err(Error::invalid_value(
                format!("{}.{}", entity.name, attribute.name),
                value,
                format!("operator `{op}` requires a value"),
            )),
        };
    }

    let op = match condition.op {
        Operator::Like => return Ok(Expr::like(column, value)),
        Operator::NotLike => return Ok(Expr::not_like(column, value)),
        Operator::Eq => BinaryOp::Eq,
        Operator::Ne => BinaryOp::Ne,
        Operator::Lt => BinaryOp::Lt,
        Operator::Le => BinaryOp::Le,
        Operator::Gt => BinaryOp::Gt,
        Operator::Ge => BinaryOp::Ge,
    };

    Ok(Expr::binary_op(
        column,
        op,
        typed_value(entity, attribute, value)?,
    ))
}
