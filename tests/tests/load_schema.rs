use schemata::schema::{AttributeType, ConstraintType};
use tests::{TestDb, SALES};

#[tokio::test]
async fn loads_entities_and_relations() {
    let test = TestDb::new(SALES).await;
    let resource = test.db.load_schema().await.unwrap();

    assert_eq!(resource.name, "main");

    let names: Vec<_> = resource.entities().map(|entity| entity.name.as_str()).collect();
    assert_eq!(names, ["Audit", "Customer", "Region"]);

    let customer = resource.entity_by_name("Customer").unwrap();
    let region = resource.entity_by_name("Region").unwrap();

    assert!(customer.is_related_to(region.id));
    assert!(region.is_related_to(customer.id));

    let id = customer.attribute("id").unwrap();
    assert_eq!(id.ty, AttributeType::Int);
    assert_eq!(
        id.constraints
            .iter()
            .filter(|constraint| constraint.ty() == ConstraintType::PrimaryKey)
            .count(),
        1
    );

    let name = customer.attribute("name").unwrap();
    assert_eq!(name.ty, AttributeType::Varchar);
    assert_eq!(name.size, 50);
    assert!(name.ty.is_quoted());
    assert!(!name.is_nullable());

    let balance = customer.attribute("balance").unwrap();
    assert_eq!(balance.ty, AttributeType::Decimal);
    assert_eq!(balance.size, 10);
    assert!(balance.has_default());

    let region_id = customer.attribute("region_id").unwrap();
    let target = region_id.foreign_keys().next().unwrap();
    assert_eq!(target.table, "Region");
    assert_eq!(target.column, "id");
    assert_eq!(target.entity, Some(region.id));

    let audit = resource.entity_by_name("Audit").unwrap();
    assert!(audit.primary_key.is_empty());
    assert!(audit.relations.is_empty());
}

#[tokio::test]
async fn self_reference_and_implicit_target() {
    let test = TestDb::new(
        "CREATE TABLE Employee (
             id INTEGER PRIMARY KEY,
             manager_id INTEGER REFERENCES Employee
         );",
    )
    .await;

    let resource = test.db.load_schema().await.unwrap();
    let employee = resource.entity_by_name("Employee").unwrap();

    assert!(employee.is_related_to(employee.id));
    assert_eq!(employee.relations.len(), 1);

    let target = employee
        .attribute("manager_id")
        .unwrap()
        .foreign_keys()
        .next()
        .unwrap();
    assert_eq!(target.column, "id");
}

#[tokio::test]
async fn unknown_column_type_aborts_load() {
    let test = TestDb::new("CREATE TABLE Place (id INTEGER PRIMARY KEY, location GEOGRAPHY);").await;

    let err = test.db.load_schema().await.unwrap_err();
    assert!(err.is_unknown_type());
    assert_eq!(
        err.to_string(),
        "load schema: unknown column type `GEOGRAPHY` for `Place.location`"
    );

    // The connection went back to the pool
    test.db.fetch_all("Place").await.unwrap();
}
