use crate::Result;

use schemata_core::{async_trait, driver::Driver, Connection, Error};

use std::{borrow::Cow, time::Duration};
use url::Url;

/// Picks the driver for a connection URL by its scheme.
#[derive(Debug)]
pub struct Connect {
    driver: Box<dyn Driver>,
}

impl Connect {
    /// `statement_timeout` is handed to the backend where it has a native
    /// setting (PostgreSQL `statement_timeout`, SQLite busy timeout).
    pub fn new(url: &str, statement_timeout: Duration) -> Result<Self> {
        let parsed = Url::parse(url)
            .map_err(|err| Error::invalid_connection_url(format!("{err}; url={url}")))?;

        let driver = match parsed.scheme() {
            "postgresql" | "postgres" => connect_postgresql(url, statement_timeout)?,
            "sqlite" => connect_sqlite(url, statement_timeout)?,
            scheme => {
                return Err(Error::invalid_connection_url(format!(
                    "unsupported database; scheme={scheme}; url={url}"
                )))
            }
        };

        Ok(Self { driver })
    }
}

#[async_trait]
impl Driver for Connect {
    fn url(&self) -> Cow<'_, str> {
        self.driver.url()
    }

    async fn connect(&self) -> Result<Box<dyn Connection>> {
        self.driver.connect().await
    }

    fn max_connections(&self) -> Option<usize> {
        self.driver.max_connections()
    }
}

#[cfg(feature = "postgresql")]
fn connect_postgresql(url: &str, statement_timeout: Duration) -> Result<Box<dyn Driver>> {
    let driver = schemata_driver_postgresql::PostgreSQL::new(url)?;
    Ok(Box::new(driver.statement_timeout(statement_timeout)))
}

#[cfg(not(feature = "postgresql"))]
fn connect_postgresql(_url: &str, _statement_timeout: Duration) -> Result<Box<dyn Driver>> {
    Err(Error::invalid_connection_url("`postgresql` feature not enabled"))
}

#[cfg(feature = "sqlite")]
fn connect_sqlite(url: &str, statement_timeout: Duration) -> Result<Box<dyn Driver>> {
    let driver = schemata_driver_sqlite::Sqlite::new(url)?;
    Ok(Box::new(driver.busy_timeout(statement_timeout)))
}

#[cfg(not(feature = "sqlite"))]
fn connect_sqlite(_url: &str, _statement_timeout: Duration) -> Result<Box<dyn Driver>> {
    Err(Error::invalid_connection_url("`sqlite` feature not enabled"))
}
