use super::{Entity, EntityId};

/// The root of a loaded schema: every base table found in one catalog.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InformationResource {
    /// Catalog (database) name
    pub name: String,

    /// Entities in discovery order. `EntityId(i)` is the entity at index `i`.
    pub entities: Vec<Entity>,
}

impl InformationResource {
    /// Returns the entity with the given identifier.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this resource.
    pub fn entity(&self, id: impl Into<EntityId>) -> &Entity {
        &self.entities[id.into().0]
    }

    pub fn entity_by_name(&self, name: &str) -> Option<&Entity> {
        self.entities.iter().find(|entity| entity.name == name)
    }

    pub fn entities(&self) -> impl ExactSizeIterator<Item = &Entity> + '_ {
        self.entities.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Resolves a referenced table name to an entity. An exact match wins,
    /// otherwise the first case-insensitive match.
    pub(crate) fn resolve(&self, table: &str) -> Option<EntityId> {
        self.entities
            .iter()
            .find(|entity| entity.name == table)
            .or_else(|| {
                self.entities
                    .iter()
                    .find(|entity| entity.name.eq_ignore_ascii_case(table))
            })
            .map(|entity| entity.id)
    }

    /// Adds a symmetric relation for every pair of entities where one
    /// references the other. Running it again adds nothing.
    pub fn link_relations(&mut self) {
        let mut edges = vec![];

        for a in &self.entities {
            for b in &self.entities {
                if a.references(b.id) || b.references(a.id) {
                    edges.push((a.id, b.id));
                }
            }
        }

        for (a, b) in edges {
            self.entities[a.0].relations.insert(b);
            self.entities[b.0].relations.insert(a);
        }
    }
}

impl From<&Entity> for EntityId {
    fn from(value: &Entity) -> Self {
        value.id
    }
}
