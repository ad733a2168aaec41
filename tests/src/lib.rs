mod logging_driver;
pub use logging_driver::{DriverOp, LoggingConnection, LoggingDriver};

mod slow_driver;
pub use slow_driver::{SlowConnection, SlowDriver};

use schemata::{Config, Db};
use std::sync::{Arc, Mutex};

/// Tables shared by the end-to-end tests.
pub const SALES: &str = "
CREATE TABLE Region (
    id INTEGER PRIMARY KEY,
    name VARCHAR(40) NOT NULL
);

CREATE TABLE Customer (
    id INTEGER PRIMARY KEY,
    name VARCHAR(50) NOT NULL,
    region_id INTEGER REFERENCES Region (id),
    balance DECIMAL(10, 2) DEFAULT 0,
    active BOOLEAN
);

CREATE TABLE Audit (
    at DATETIME,
    message TEXT
);
";

/// An in-memory database with `script` applied, plus the log of every
/// operation the driver ran.
pub struct TestDb {
    pub db: Db,
    pub ops_log: Arc<Mutex<Vec<DriverOp>>>,
}

impl TestDb {
    pub async fn new(script: &str) -> TestDb {
        init_tracing();

        let driver = schemata_driver("sqlite::memory:");
        let logging_driver = LoggingDriver::new(driver);
        let ops_log = logging_driver.ops_log_handle();

        let db = Db::with_driver(logging_driver, Config::new("sqlite::memory:"))
            .await
            .unwrap();
        db.execute_script(script).await.unwrap();

        ops_log.lock().unwrap().clear();

        TestDb { db, ops_log }
    }

    /// Number of operations run since setup
    pub fn op_count(&self) -> usize {
        self.ops_log.lock().unwrap().len()
    }
}

/// The driver `url` selects, unwrapped.
pub fn schemata_driver(url: &str) -> Box<dyn schemata_core::Driver> {
    let driver =
        schemata::db::Connect::new(url, std::time::Duration::from_secs(5)).unwrap();
    Box::new(driver)
}

/// Installs a subscriber honouring `RUST_LOG`; later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
