use super::{AttributeId, EntityId};

/// A rule attached to an attribute.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeConstraint {
    /// The attribute carrying this constraint. A relation, not ownership: the
    /// constraint is owned by the attribute's constraint list.
    pub attribute: AttributeId,

    pub kind: ConstraintKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConstraintKind {
    PrimaryKey,
    ForeignKey(ForeignKeyTarget),
    NotNull,
    DefaultValue(String),
}

/// The tag of a [`ConstraintKind`], without payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstraintType {
    PrimaryKey,
    ForeignKey,
    NotNull,
    DefaultValue,
}

/// The column a foreign key points at.
#[derive(Debug, Clone, PartialEq)]
pub struct ForeignKeyTarget {
    pub table: String,

    pub column: String,

    /// The referenced entity, when it was part of the same scan. Keys into
    /// tables outside the scanned schema stay unresolved.
    pub entity: Option<EntityId>,
}

impl AttributeConstraint {
    pub fn ty(&self) -> ConstraintType {
        self.kind.ty()
    }

    pub fn is_primary_key(&self) -> bool {
        matches!(self.kind, ConstraintKind::PrimaryKey)
    }

    pub fn as_foreign_key(&self) -> Option<&ForeignKeyTarget> {
        match &self.kind {
            ConstraintKind::ForeignKey(target) => Some(target),
            _ => None,
        }
    }
}

impl ConstraintKind {
    pub fn ty(&self) -> ConstraintType {
        match self {
            ConstraintKind::PrimaryKey => ConstraintType::PrimaryKey,
            ConstraintKind::ForeignKey(_) => ConstraintType::ForeignKey,
            ConstraintKind::NotNull => ConstraintType::NotNull,
            ConstraintKind::DefaultValue(_) => ConstraintType::DefaultValue,
        }
    }
}
