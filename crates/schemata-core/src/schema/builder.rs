use super::meta::{Catalog, ColumnMeta, TableMeta};
use super::{
    Attribute, AttributeConstraint, AttributeId, AttributeType, ConstraintKind, Entity, EntityId,
    ForeignKeyTarget, InformationResource,
};
use crate::{Error, Result};

use indexmap::IndexMap;

/// Turns driver metadata into an [`InformationResource`].
#[derive(Debug)]
pub struct Builder {
    /// Table names skipped during the build, compared case-insensitively
    excluded_tables: Vec<String>,
}

/// Used to track state during the build process
struct BuildResource {
    /// Maps table names to identifiers. Identifiers are reserved before the
    /// entities are built so foreign keys can point forward.
    entity_lookup: IndexMap<String, EntityId>,

    resource: InformationResource,
}

impl Builder {
    pub fn new() -> Self {
        Self {
            excluded_tables: vec!["sysdiagrams".to_string()],
        }
    }

    fn is_excluded(&self, table: &TableMeta) -> bool {
        self.excluded_tables
            .iter()
            .any(|excluded| excluded.eq_ignore_ascii_case(&table.name))
    }

    pub fn build(&self, catalog: Catalog) -> Result<InformationResource> {
        let mut builder = BuildResource {
            entity_lookup: IndexMap::new(),
            resource: InformationResource {
                name: catalog.name,
                entities: vec![],
            },
        };

        let tables: Vec<_> = catalog
            .tables
            .into_iter()
            .filter(|table| !self.is_excluded(table))
            .collect();

        for table in &tables {
            builder.reserve(table)?;
        }

        for table in &tables {
            builder.build_entity(table)?;
        }

        builder.resolve_foreign_keys();
        builder.resource.link_relations();

        Ok(builder.resource)
    }
}

impl Default for Builder {
    fn default() -> Self {
        Self::new()
    }
}

impl BuildResource {
    fn reserve(&mut self, table: &TableMeta) -> Result<()> {
        if table.columns.is_empty() {
            return Err(Error::inconsistent_metadata(format!(
                "table `{}` has no columns",
                table.name
            )));
        }

        let id = EntityId(self.entity_lookup.len());

        if self.entity_lookup.insert(table.name.clone(), id).is_some() {
            return Err(Error::inconsistent_metadata(format!(
                "table `{}` reported twice",
                table.name
            )));
        }

        self.resource
            .entities
            .push(Entity::new(id, table.name.clone()));
        Ok(())
    }

    fn build_entity(&mut self, table: &TableMeta) -> Result<()> {
        let id = self.entity_lookup[&table.name];

        for key in &table.primary_key {
            if !table.columns.iter().any(|column| column.name == *key) {
                return Err(Error::inconsistent_metadata(format!(
                    "primary key column `{}.{key}` does not exist",
                    table.name
                )));
            }
        }

        for key in &table.imported_keys {
            if !table.columns.iter().any(|column| column.name == key.column) {
                return Err(Error::inconsistent_metadata(format!(
                    "foreign key column `{}.{}` does not exist",
                    table.name, key.column
                )));
            }
        }

        let mut attributes = Vec::with_capacity(table.columns.len());

        for (index, column) in table.columns.iter().enumerate() {
            let attribute_id = AttributeId { entity: id, index };
            attributes.push(build_attribute(table, column, attribute_id)?);
        }

        let entity = &mut self.resource.entities[id.0];
        entity.primary_key = attributes
            .iter()
            .filter(|attribute| attribute.is_primary_key())
            .map(|attribute| attribute.id)
            .collect();
        entity.foreign_keys = attributes
            .iter()
            .filter(|attribute| attribute.is_foreign_key())
            .map(|attribute| attribute.id)
            .collect();
        entity.attributes = attributes;

        Ok(())
    }

    /// Second pass: every entity exists, so foreign key targets can be linked.
    fn resolve_foreign_keys(&mut self) {
        let mut resolved = vec![];

        for entity in &self.resource.entities {
            for attribute in entity.foreign_key_attributes() {
                for (index, constraint) in attribute.constraints.iter().enumerate() {
                    if let Some(target) = constraint.as_foreign_key() {
                        resolved.push((attribute.id, index, self.resource.resolve(&target.table)));
                    }
                }
            }
        }

        for (attribute_id, index, target_entity) in resolved {
            let entity = &mut self.resource.entities[attribute_id.entity.0];
            let attribute = &mut entity.attributes[attribute_id.index];

            if let ConstraintKind::ForeignKey(target) = &mut attribute.constraints[index].kind {
                if target_entity.is_none() {
                    tracing::debug!(
                        table = %entity.name,
                        column = %attribute.name,
                        target = %target.table,
                        "foreign key target is outside the catalog"
                    );
                }

                target.entity = target_entity;
            }
        }
    }
}

fn build_attribute(table: &TableMeta, column: &ColumnMeta, id: AttributeId) -> Result<Attribute> {
    let Some((ty, declared_size)) = AttributeType::parse(&column.type_name) else {
        return Err(Error::unknown_type(
            &table.name,
            &column.name,
            &column.type_name,
        ));
    };

    let mut constraints = vec![];
    let mut constrain = |kind| constraints.push(AttributeConstraint { attribute: id, kind });

    if table.primary_key.contains(&column.name) {
        constrain(ConstraintKind::PrimaryKey);
    }

    for key in table
        .imported_keys
        .iter()
        .filter(|key| key.column == column.name)
    {
        constrain(ConstraintKind::ForeignKey(ForeignKeyTarget {
            table: key.referenced_table.clone(),
            column: key.referenced_column.clone(),
            entity: None,
        }));
    }

    if !column.nullable {
        constrain(ConstraintKind::NotNull);
    }

    if let Some(default) = &column.default {
        constrain(ConstraintKind::DefaultValue(default.clone()));
    }

    Ok(Attribute {
        id,
        name: column.name.clone(),
        ty,
        size: column.size.or(declared_size).unwrap_or(0),
        constraints,
    })
}
