use super::{AttributeConstraint, AttributeType, ConstraintType, EntityId, ForeignKeyTarget};

use std::fmt;

/// A table column.
#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    /// Uniquely identifies the attribute in the resource. `id.index` is the
    /// attribute's position in its entity, which is also the position of its
    /// value in caller-supplied value lists.
    pub id: AttributeId,

    /// The name of the column in the database.
    pub name: String,

    /// Declared column type
    pub ty: AttributeType,

    /// Declared size (length, precision), 0 when the backend reports none
    pub size: u32,

    /// Constraints, in the order they were discovered
    pub constraints: Vec<AttributeConstraint>,
}

#[derive(PartialEq, Eq, Clone, Copy, Hash)]
pub struct AttributeId {
    pub entity: EntityId,
    pub index: usize,
}

impl Attribute {
    pub fn has_constraint(&self, ty: ConstraintType) -> bool {
        self.constraints.iter().any(|constraint| constraint.ty() == ty)
    }

    pub fn is_primary_key(&self) -> bool {
        self.has_constraint(ConstraintType::PrimaryKey)
    }

    pub fn is_foreign_key(&self) -> bool {
        self.has_constraint(ConstraintType::ForeignKey)
    }

    pub fn is_nullable(&self) -> bool {
        !self.has_constraint(ConstraintType::NotNull)
    }

    pub fn has_default(&self) -> bool {
        self.has_constraint(ConstraintType::DefaultValue)
    }

    /// Targets of the foreign keys this column participates in.
    pub fn foreign_keys(&self) -> impl Iterator<Item = &ForeignKeyTarget> + '_ {
        self.constraints
            .iter()
            .filter_map(AttributeConstraint::as_foreign_key)
    }
}

impl From<&Attribute> for AttributeId {
    fn from(value: &Attribute) -> Self {
        value.id
    }
}

impl fmt::Debug for AttributeId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "AttributeId({}/{})", self.entity.0, self.index)
    }
}
