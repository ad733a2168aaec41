use pretty_assertions::assert_eq;
use schemata_core::schema::meta::{Catalog, ColumnMeta, TableMeta};
use schemata_core::schema::{
    AttributeType, Builder, ConstraintKind, ConstraintType, EntityId, InformationResource,
};

fn customer() -> TableMeta {
    TableMeta::new("Customer")
        .column(ColumnMeta::new("id", "int identity").not_null())
        .column(ColumnMeta::new("name", "varchar").size(50))
        .column(ColumnMeta::new("region_id", "int"))
        .primary_key("id")
        .imported_key("region_id", "Region", "id")
}

fn region() -> TableMeta {
    TableMeta::new("Region")
        .column(ColumnMeta::new("id", "int").not_null())
        .column(ColumnMeta::new("name", "nvarchar(30)"))
        .primary_key("id")
}

fn build(tables: Vec<TableMeta>) -> InformationResource {
    Builder::new()
        .build(Catalog {
            name: "sales".to_string(),
            tables,
        })
        .unwrap()
}

#[test]
fn customer_region_scenario() {
    let resource = build(vec![customer(), region()]);

    assert_eq!(resource.name, "sales");
    assert_eq!(
        resource
            .entities()
            .map(|entity| entity.name.as_str())
            .collect::<Vec<_>>(),
        ["Customer", "Region"]
    );

    let customer = resource.entity_by_name("Customer").unwrap();
    let region = resource.entity_by_name("Region").unwrap();

    assert!(customer.is_related_to(region.id));
    assert!(region.is_related_to(customer.id));
    assert!(customer.references(region.id));
    assert!(!region.references(customer.id));

    let name = customer.attribute("name").unwrap();
    assert_eq!(name.ty, AttributeType::Varchar);
    assert_eq!(name.size, 50);
    assert!(name.ty.is_quoted());

    let id = customer.attribute("id").unwrap();
    assert_eq!(id.ty, AttributeType::Int);
    assert_eq!(
        id.constraints
            .iter()
            .filter(|constraint| constraint.ty() == ConstraintType::PrimaryKey)
            .count(),
        1
    );
    assert!(!id.is_nullable());
    assert!(!id.ty.is_quoted());

    let region_id = customer.attribute("region_id").unwrap();
    let target = region_id.foreign_keys().next().unwrap();
    assert_eq!(target.table, "Region");
    assert_eq!(target.column, "id");
    assert_eq!(target.entity, Some(region.id));

    assert_eq!(region.attribute("name").unwrap().size, 30);
}

#[test]
fn attribute_positions_follow_metadata_order() {
    let resource = build(vec![customer()]);
    let customer = resource.entity(EntityId(0));

    for (index, attribute) in customer.attributes.iter().enumerate() {
        assert_eq!(attribute.id.index, index);
        assert_eq!(attribute.id.entity, customer.id);

        for constraint in &attribute.constraints {
            assert_eq!(constraint.attribute, attribute.id);
        }
    }

    assert_eq!(
        customer
            .primary_key_attributes()
            .map(|attribute| attribute.name.as_str())
            .collect::<Vec<_>>(),
        ["id"]
    );
    assert_eq!(
        customer
            .foreign_key_attributes()
            .map(|attribute| attribute.name.as_str())
            .collect::<Vec<_>>(),
        ["region_id"]
    );
}

#[test]
fn relations_are_symmetric_regardless_of_table_order() {
    let forward = build(vec![customer(), region()]);
    let backward = build(vec![region(), customer()]);

    for resource in [&forward, &backward] {
        for a in resource.entities() {
            for b in resource.entities() {
                assert_eq!(a.is_related_to(b.id), b.is_related_to(a.id));
            }
        }
    }

    let region = backward.entity_by_name("Region").unwrap();
    let customer = backward.entity_by_name("Customer").unwrap();
    assert!(region.is_related_to(customer.id));
}

#[test]
fn linking_relations_again_adds_nothing() {
    let mut resource = build(vec![customer(), region()]);
    let before = resource.clone();

    resource.link_relations();
    resource.link_relations();

    assert_eq!(resource, before);
    assert_eq!(resource.entity_by_name("Customer").unwrap().relations.len(), 1);
}

#[test]
fn self_reference_is_a_self_edge() {
    let employee = TableMeta::new("Employee")
        .column(ColumnMeta::new("id", "integer").not_null())
        .column(ColumnMeta::new("manager_id", "integer"))
        .primary_key("id")
        .imported_key("manager_id", "Employee", "id");

    let resource = build(vec![employee]);
    let employee = resource.entity_by_name("Employee").unwrap();

    assert!(employee.is_related_to(employee.id));
    assert_eq!(employee.relations.len(), 1);
}

#[test]
fn unrelated_tables_have_no_edges() {
    let audit = TableMeta::new("Audit").column(ColumnMeta::new("message", "text"));

    let resource = build(vec![region(), audit]);

    for entity in resource.entities() {
        assert!(entity.relations.is_empty());
    }
}

#[test]
fn foreign_key_outside_scan_stays_unresolved() {
    let order = TableMeta::new("Order")
        .column(ColumnMeta::new("id", "bigint").not_null())
        .column(ColumnMeta::new("warehouse_id", "bigint"))
        .primary_key("id")
        .imported_key("warehouse_id", "Warehouse", "id");

    let resource = build(vec![order]);
    let order = resource.entity_by_name("Order").unwrap();
    let target = order
        .attribute("warehouse_id")
        .unwrap()
        .foreign_keys()
        .next()
        .unwrap();

    assert_eq!(target.entity, None);
    assert!(order.relations.is_empty());
}

#[test]
fn defaults_and_nullability() {
    let table = TableMeta::new("Setting")
        .column(
            ColumnMeta::new("enabled", "boolean")
                .not_null()
                .default_value("true"),
        )
        .column(ColumnMeta::new("note", "text"));

    let resource = build(vec![table]);
    let setting = resource.entity_by_name("Setting").unwrap();

    let enabled = setting.attribute("enabled").unwrap();
    assert!(!enabled.is_nullable());
    assert!(enabled.has_default());
    assert_eq!(
        enabled.constraints.last().map(|constraint| &constraint.kind),
        Some(&ConstraintKind::DefaultValue("true".to_string()))
    );

    let note = setting.attribute("note").unwrap();
    assert!(note.is_nullable());
    assert!(note.constraints.is_empty());
    assert!(setting.primary_key.is_empty());
}

#[test]
fn system_tables_are_skipped() {
    let resource = build(vec![
        TableMeta::new("SysDiagrams").column(ColumnMeta::new("name", "nvarchar")),
        region(),
    ]);

    assert_eq!(resource.entities.len(), 1);
    assert_eq!(resource.entity(EntityId(0)).name, "Region");
}

#[test]
fn backend_prefixed_names_are_ordinary_tables() {
    let resource = build(vec![
        TableMeta::new("sqlite_cache").column(ColumnMeta::new("key", "text")),
        region(),
    ]);

    assert_eq!(resource.entities.len(), 2);
    assert!(resource.entity_by_name("sqlite_cache").is_some());
}

#[test]
fn unknown_type_fails_the_load() {
    let table = TableMeta::new("Place")
        .column(ColumnMeta::new("id", "int"))
        .column(ColumnMeta::new("location", "geography"));

    let err = Builder::new()
        .build(Catalog {
            name: "geo".to_string(),
            tables: vec![table],
        })
        .unwrap_err();

    assert!(err.is_unknown_type());
    assert_eq!(
        err.to_string(),
        "unknown column type `geography` for `Place.location`"
    );
}

#[test]
fn table_without_columns_is_inconsistent() {
    let err = Builder::new()
        .build(Catalog {
            name: "empty".to_string(),
            tables: vec![TableMeta::new("Ghost")],
        })
        .unwrap_err();

    assert!(err.is_metadata());
    assert_eq!(err.to_string(), "metadata error: table `Ghost` has no columns");
}

#[test]
fn key_on_missing_column_is_inconsistent() {
    let table = TableMeta::new("Region")
        .column(ColumnMeta::new("name", "varchar"))
        .primary_key("id");

    let err = Builder::new()
        .build(Catalog {
            name: "sales".to_string(),
            tables: vec![table],
        })
        .unwrap_err();

    assert!(err.is_metadata());
}
