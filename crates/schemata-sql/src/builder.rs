//! Builds statements for an [`Entity`] from caller-supplied text values.
//!
//! Value lists are positional: the `i`-th value belongs to the `i`-th
//! attribute of the entity. An empty string stands for "no value", which
//! means `NULL` on insert and "leave unchanged" on update.

mod delete;
pub use delete::delete;

mod insert;
pub use insert::insert;

mod operator;
pub use operator::{Condition, Operator};

mod select;
pub use select::{filter_and_sort, search};

mod update;
pub use update::update;

mod value;
pub use value::typed_value;

use schemata_core::{
    schema::{Attribute, Entity},
    Error, Result,
};

fn attribute<'a>(entity: &'a Entity, name: &str) -> Result<&'a Attribute> {
    entity
        .attribute(name)
        .ok_or_else(|| Error::unknown_attribute(&entity.name, name))
}

fn check_arity<S>(entity: &Entity, values: &[S]) -> Result<()> {
    if values.len() != entity.attributes.len() {
        return Err(Error::arity(
            &entity.name,
            entity.attributes.len(),
            values.len(),
        ));
    }

    Ok(())
}
