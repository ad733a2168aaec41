use schemata::{Config, Db};
use std::time::Duration;
use tests::{schemata_driver, SlowDriver, TestDb, SALES};

#[tokio::test]
async fn foreign_key_violation_is_a_query_error() {
    let test = TestDb::new(SALES).await;
    let resource = test.db.load_schema().await.unwrap();
    let customer = resource.entity_by_name("Customer").unwrap();

    let err = test
        .db
        .insert(customer, &["", "Acme", "99", "", ""])
        .await
        .unwrap_err();

    assert!(err.is_query());
    assert!(err.to_string().starts_with("insert into Customer: "), "{err}");
    assert!(err.to_string().contains("FOREIGN KEY"), "{err}");

    // The pool still hands out the single in-memory connection
    assert!(test.db.fetch_all("Customer").await.unwrap().is_empty());
}

#[tokio::test]
async fn builder_errors_carry_context() {
    let test = TestDb::new(SALES).await;
    let resource = test.db.load_schema().await.unwrap();
    let customer = resource.entity_by_name("Customer").unwrap();
    let audit = resource.entity_by_name("Audit").unwrap();

    let err = test.db.insert(customer, &["", "Acme"]).await.unwrap_err();
    assert!(err.is_arity());
    assert!(err.to_string().starts_with("insert into Customer: "), "{err}");

    let existing = schemata::Row::new("Audit").with("message", "hello");
    let err = test
        .db
        .update(audit, &["", "bye"], &existing)
        .await
        .unwrap_err();
    assert!(err.is_no_primary_key());

    let err = test
        .db
        .insert(customer, &["", "Acme", "north", "", ""])
        .await
        .unwrap_err();
    assert!(err.is_invalid_value());

    let err = test
        .db
        .delete(customer, &[] as &[&str], &[] as &[&str])
        .await
        .unwrap_err();
    assert!(err.is_missing_predicate());

    let err = test
        .db
        .filter_and_sort(customer, &[], &["name"], &["name"])
        .await
        .unwrap_err();
    assert!(err.is_conflicting_order());

    let err = test
        .db
        .filter_and_sort(customer, &["nickname"], &[], &[])
        .await
        .unwrap_err();
    assert!(err.is_unknown_attribute());

    // Failed builds never reach the driver
    assert_eq!(test.op_count(), 1);
}

#[tokio::test]
async fn missing_table_is_a_query_error() {
    let test = TestDb::new(SALES).await;

    let err = test.db.fetch_all("Nowhere").await.unwrap_err();
    assert!(err.is_query());
    assert!(err.to_string().starts_with("fetch all from Nowhere: "), "{err}");
}

#[tokio::test]
async fn unreachable_database_is_a_connection_error() {
    let err = Db::connect("sqlite:/nonexistent/schemata/sales.db")
        .await
        .unwrap_err();
    assert!(err.is_connection(), "{err:?}");
}

#[tokio::test]
async fn unsupported_scheme() {
    let err = Db::connect("mysql://localhost/sales").await.unwrap_err();
    assert!(err.is_invalid_connection_url());
}

#[tokio::test]
async fn slow_statement_times_out() {
    tests::init_tracing();

    let driver = SlowDriver::new(schemata_driver("sqlite::memory:"), Duration::from_secs(5));
    let config = Config::new("sqlite::memory:").statement_timeout(Duration::from_millis(50));
    let db = Db::with_driver(driver, config).await.unwrap();

    let err = db.fetch_all("Customer").await.unwrap_err();

    assert!(err.is_timeout());
    assert!(
        err.to_string()
            .starts_with("fetch all from Customer: operation timed out after "),
        "{err}"
    );
}
