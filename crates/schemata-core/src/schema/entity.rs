use super::{Attribute, AttributeId};

use indexmap::IndexSet;
use std::fmt;

/// A database table
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    /// Uniquely identifies the entity within its resource
    pub id: EntityId,

    /// Name of the table
    pub name: String,

    /// The table's columns, in metadata order
    pub attributes: Vec<Attribute>,

    /// Attributes carrying a primary-key constraint, in attribute order
    pub primary_key: Vec<AttributeId>,

    /// Attributes carrying a foreign-key constraint, in attribute order
    pub foreign_keys: Vec<AttributeId>,

    /// Entities linked to this one by a foreign key in either direction
    pub relations: IndexSet<EntityId>,
}

/// Uniquely identifies an entity
#[derive(PartialEq, Eq, Clone, Copy, Hash, PartialOrd, Ord)]
pub struct EntityId(pub usize);

impl Entity {
    pub(crate) fn new(id: EntityId, name: String) -> Self {
        Self {
            id,
            name,
            attributes: vec![],
            primary_key: vec![],
            foreign_keys: vec![],
            relations: IndexSet::new(),
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes
            .iter()
            .find(|attribute| attribute.name == name)
    }

    pub fn primary_key_attributes(&self) -> impl ExactSizeIterator<Item = &Attribute> + '_ {
        self.primary_key
            .iter()
            .map(|attribute_id| &self.attributes[attribute_id.index])
    }

    pub fn foreign_key_attributes(&self) -> impl ExactSizeIterator<Item = &Attribute> + '_ {
        self.foreign_keys
            .iter()
            .map(|attribute_id| &self.attributes[attribute_id.index])
    }

    /// True if one of this entity's foreign keys points at `other`.
    pub fn references(&self, other: EntityId) -> bool {
        self.foreign_key_attributes()
            .flat_map(Attribute::foreign_keys)
            .any(|target| target.entity == Some(other))
    }

    pub fn is_related_to(&self, other: EntityId) -> bool {
        self.relations.contains(&other)
    }
}

impl fmt::Debug for EntityId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "EntityId({})", self.0)
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
