use pretty_assertions::assert_eq;
use schemata::{stmt::Statement, Condition, Db, Operator, Row};
use schemata_core::driver::Operation;
use tests::{TestDb, SALES};

const NONE: &[&str] = &[];

async fn seed(db: &Db) -> schemata::InformationResource {
    let resource = db.load_schema().await.unwrap();
    let region = resource.entity_by_name("Region").unwrap();
    let customer = resource.entity_by_name("Customer").unwrap();

    db.insert(region, &["", "North"]).await.unwrap();
    db.insert(region, &["", "South"]).await.unwrap();

    db.insert(customer, &["", "Acme", "1", "12.50", "true"])
        .await
        .unwrap();
    db.insert(customer, &["", "Globex", "2", "", "0"]).await.unwrap();
    db.insert(customer, &["", "Initech", "", "3", ""]).await.unwrap();

    resource
}

fn names(rows: &[Row]) -> Vec<&str> {
    rows.iter().map(|row| row.get("name").unwrap()).collect()
}

#[tokio::test]
async fn insert_then_fetch_all() {
    let test = TestDb::new(SALES).await;
    let resource = test.db.load_schema().await.unwrap();
    let region = resource.entity_by_name("Region").unwrap();
    let customer = resource.entity_by_name("Customer").unwrap();

    assert_eq!(test.db.insert(region, &["", "North"]).await.unwrap(), 1);
    assert_eq!(
        test.db
            .insert(customer, &["", "Acme", "1", "12.50", "true"])
            .await
            .unwrap(),
        1
    );

    let rows = test.db.fetch_all("Customer").await.unwrap();
    assert_eq!(
        rows,
        [Row::new("Customer")
            .with("id", "1")
            .with("name", "Acme")
            .with("region_id", "1")
            .with("balance", "12.5")
            .with("active", "1")]
    );

    // Every value went through a bound parameter
    let ops = test.ops_log.lock().unwrap();
    let Operation::QuerySql(op) = &ops[ops.len() - 2].operation else {
        panic!("expected a statement, got {:#?}", ops[ops.len() - 2].operation);
    };
    let Statement::Insert(insert) = &op.stmt else {
        panic!("expected an insert, got {:#?}", op.stmt);
    };
    assert_eq!(insert.table, "Customer");
    assert_eq!(insert.values.len(), 5);
}

#[tokio::test]
async fn empty_insert_value_is_null() {
    let test = TestDb::new(SALES).await;
    seed(&test.db).await;

    let rows = test.db.fetch_all("Customer").await.unwrap();
    let initech = &rows[2];

    assert_eq!(initech.get("name"), Some("Initech"));
    assert!(initech.contains("region_id"));
    assert_eq!(initech.get("region_id"), None);
    assert_eq!(initech.get("active"), None);
}

#[tokio::test]
async fn update_by_primary_key() {
    let test = TestDb::new(SALES).await;
    let resource = seed(&test.db).await;
    let customer = resource.entity_by_name("Customer").unwrap();

    let existing = test.db.fetch_all("Customer").await.unwrap().remove(1);
    assert_eq!(existing.get("name"), Some("Globex"));

    let count = test
        .db
        .update(customer, &["", "Globex Corp", "", "", ""], &existing)
        .await
        .unwrap();
    assert_eq!(count, 1);

    let rows = test.db.fetch_all("Customer").await.unwrap();
    assert_eq!(names(&rows), ["Acme", "Globex Corp", "Initech"]);
    assert_eq!(rows[1].get("region_id"), Some("2"));
}

#[tokio::test]
async fn filter_and_sort_projects_and_orders() {
    let test = TestDb::new(SALES).await;
    let resource = seed(&test.db).await;
    let customer = resource.entity_by_name("Customer").unwrap();

    let rows = test
        .db
        .filter_and_sort(customer, &["id", "name"], &[], &["name"])
        .await
        .unwrap();

    assert_eq!(names(&rows), ["Initech", "Globex", "Acme"]);
    assert_eq!(rows[0].columns().collect::<Vec<_>>(), ["id", "name"]);

    let rows = test
        .db
        .filter_and_sort(customer, NONE, &["region_id"], NONE)
        .await
        .unwrap();

    // NULL sorts first in SQLite
    assert_eq!(names(&rows), ["Initech", "Acme", "Globex"]);
    assert_eq!(rows[0].len(), 5);
}

#[tokio::test]
async fn search_with_typed_conditions() {
    let test = TestDb::new(SALES).await;
    let resource = seed(&test.db).await;
    let customer = resource.entity_by_name("Customer").unwrap();

    let rows = test
        .db
        .search(
            customer,
            &["name"],
            &[Condition::new("balance", Operator::Ge, "3")],
        )
        .await
        .unwrap();
    assert_eq!(names(&rows), ["Acme", "Initech"]);

    let rows = test
        .db
        .search(
            customer,
            NONE,
            &[
                Condition::new("name", "like".parse().unwrap(), "%e%"),
                Condition::new("region_id", Operator::Eq, ""),
            ],
        )
        .await
        .unwrap();
    assert_eq!(names(&rows), ["Initech"]);

    let rows = test
        .db
        .search(customer, NONE, &[Condition::new("region_id", Operator::Ne, "")])
        .await
        .unwrap();
    assert_eq!(names(&rows), ["Acme", "Globex"]);
}

#[tokio::test]
async fn delete_by_number_and_pattern() {
    let test = TestDb::new(SALES).await;
    let resource = seed(&test.db).await;
    let customer = resource.entity_by_name("Customer").unwrap();

    assert_eq!(test.db.delete(customer, &["id"], &["2"]).await.unwrap(), 1);
    assert_eq!(
        test.db.delete(customer, &["name"], &["Ac%"]).await.unwrap(),
        1
    );
    assert_eq!(
        test.db.delete(customer, &["name"], &["Nobody"]).await.unwrap(),
        0
    );

    let rows = test.db.fetch_all("Customer").await.unwrap();
    assert_eq!(names(&rows), ["Initech"]);
}

#[tokio::test]
async fn delete_by_fetched_leading_zero_text() {
    let test = TestDb::new(
        "CREATE TABLE Zip (id INTEGER PRIMARY KEY, code VARCHAR(10));",
    )
    .await;
    let resource = test.db.load_schema().await.unwrap();
    let zip = resource.entity_by_name("Zip").unwrap();

    test.db.insert(zip, &["", "02134"]).await.unwrap();

    let rows = test.db.fetch_all("Zip").await.unwrap();
    let code = rows[0].get("code").unwrap().to_string();
    assert_eq!(code, "02134");

    assert_eq!(test.db.delete(zip, &["code"], &[code]).await.unwrap(), 1);
    assert!(test.db.fetch_all("Zip").await.unwrap().is_empty());
}

#[tokio::test]
async fn delete_fraction_never_matches_integer_key() {
    let test = TestDb::new(SALES).await;
    let resource = seed(&test.db).await;
    let customer = resource.entity_by_name("Customer").unwrap();

    assert_eq!(test.db.delete(customer, &["id"], &["2.7"]).await.unwrap(), 0);
    assert_eq!(test.db.fetch_all("Customer").await.unwrap().len(), 3);
}
