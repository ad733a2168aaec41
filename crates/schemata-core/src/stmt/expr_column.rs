use crate::schema::{Attribute, AttributeType};

/// A column of the statement's table, with its declared type.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnRef {
    pub name: String,

    pub ty: AttributeType,
}

impl From<&Attribute> for ColumnRef {
    fn from(value: &Attribute) -> Self {
        Self {
            name: value.name.clone(),
            ty: value.ty,
        }
    }
}
