mod connect;
mod pool;

pub use connect::Connect;
pub use pool::*;

use crate::{Config, Condition, Error, InformationResource, Result, Row};

use schemata_core::{
    driver::{
        operation::{ExecuteScript, FetchAll, Introspect, Operation},
        Driver, Response,
    },
    schema::{self, Entity},
    stmt::Statement,
};
use schemata_sql::{builder, Serializer};

use std::{future::Future, sync::Arc, time::Duration};

/// A handle to a database.
///
/// Every operation checks a connection out of the pool, runs under the
/// configured statement timeout and returns the connection when done.
/// Cloning is cheap; clones share the pool.
#[derive(Debug, Clone)]
pub struct Db {
    shared: Arc<Shared>,
}

#[derive(Debug)]
struct Shared {
    pool: Pool,

    /// Schema passed to introspection
    schema: Option<String>,

    statement_timeout: Duration,

    /// Renders statement previews for logs
    serializer: Serializer,
}

impl Db {
    /// Connects with default settings.
    pub async fn connect(url: &str) -> Result<Db> {
        Db::with_config(Config::new(url)).await
    }

    pub async fn with_config(config: Config) -> Result<Db> {
        let driver = Connect::new(&config.url, config.statement_timeout)?;
        Db::with_driver(driver, config).await
    }

    /// Uses `driver` instead of dispatching on `config.url`.
    pub async fn with_driver(driver: impl Driver, config: Config) -> Result<Db> {
        let serializer = if driver.url().starts_with("postgres") {
            Serializer::postgresql()
        } else {
            Serializer::sqlite()
        };

        let pool = Pool::new(driver, &config.pool).await?;

        Ok(Db {
            shared: Arc::new(Shared {
                pool,
                schema: config.schema,
                statement_timeout: config.statement_timeout,
                serializer,
            }),
        })
    }

    pub fn pool(&self) -> &Pool {
        &self.shared.pool
    }

    /// Reads the catalog and builds the schema model.
    ///
    /// Any metadata problem aborts the load; no partial model is returned.
    pub async fn load_schema(&self) -> Result<InformationResource> {
        let op = Introspect {
            schema: self.shared.schema.clone(),
        };

        let result: Result<InformationResource> = async {
            let catalog = self.exec(op).await?.rows.into_catalog()?;
            schema::Builder::new().build(catalog)
        }
        .await;

        match result {
            Ok(resource) => {
                tracing::debug!(
                    catalog = %resource.name,
                    entities = resource.entities.len(),
                    "loaded schema"
                );
                Ok(resource)
            }
            Err(err) => Err(self.fail("load schema", err)),
        }
    }

    /// Every row of `table`, each column rendered as text.
    pub async fn fetch_all(&self, table: &str) -> Result<Vec<Row>> {
        let op = FetchAll {
            table: table.to_string(),
        };

        let result: Result<Vec<Row>> = async { self.exec(op).await?.rows.into_values() }.await;
        result.map_err(|err| self.fail(format!("fetch all from {table}"), err))
    }

    /// Inserts one row. `values` line up with the entity's attributes; an
    /// empty string inserts NULL.
    pub async fn insert<S: AsRef<str>>(&self, entity: &Entity, values: &[S]) -> Result<u64> {
        let context = format!("insert into {entity}");
        let stmt = builder::insert(entity, values).map_err(|err| self.fail(&context, err))?;
        self.exec_count(context, stmt).await
    }

    /// Updates the row identified by the primary key values of `existing`.
    /// Empty entries in `values` leave their column unchanged.
    pub async fn update<S: AsRef<str>>(
        &self,
        entity: &Entity,
        values: &[S],
        existing: &Row,
    ) -> Result<u64> {
        let context = format!("update {entity}");
        let stmt =
            builder::update(entity, values, existing).map_err(|err| self.fail(&context, err))?;
        self.exec_count(context, stmt).await
    }

    pub async fn delete<N, V>(&self, entity: &Entity, names: &[N], values: &[V]) -> Result<u64>
    where
        N: AsRef<str>,
        V: AsRef<str>,
    {
        let context = format!("delete from {entity}");
        let stmt =
            builder::delete(entity, names, values).map_err(|err| self.fail(&context, err))?;
        self.exec_count(context, stmt).await
    }

    pub async fn filter_and_sort<S: AsRef<str>>(
        &self,
        entity: &Entity,
        selected: &[S],
        ascending: &[S],
        descending: &[S],
    ) -> Result<Vec<Row>> {
        let context = format!("select from {entity}");
        let stmt = builder::filter_and_sort(entity, selected, ascending, descending)
            .map_err(|err| self.fail(&context, err))?;
        self.exec_rows(context, stmt).await
    }

    pub async fn search<S: AsRef<str>>(
        &self,
        entity: &Entity,
        selected: &[S],
        conditions: &[Condition],
    ) -> Result<Vec<Row>> {
        let context = format!("search {entity}");
        let stmt = builder::search(entity, selected, conditions)
            .map_err(|err| self.fail(&context, err))?;
        self.exec_rows(context, stmt).await
    }

    /// Runs raw SQL statements separated by `;`. Meant for schema setup.
    pub async fn execute_script(&self, sql: &str) -> Result<()> {
        let op = ExecuteScript {
            sql: sql.to_string(),
        };

        match self.exec(op).await {
            Ok(_) => Ok(()),
            Err(err) => Err(self.fail("execute script", err)),
        }
    }

    async fn exec_count(&self, context: String, stmt: Statement) -> Result<u64> {
        tracing::debug!(sql = %self.shared.serializer.serialize_inline(&stmt), "{context}");

        let result: Result<u64> = async { self.exec(stmt).await?.rows.into_count() }.await;

        match result {
            Ok(count) => {
                tracing::debug!(rows = count, "{context}");
                Ok(count)
            }
            Err(err) => Err(self.fail(context, err)),
        }
    }

    async fn exec_rows(&self, context: String, stmt: Statement) -> Result<Vec<Row>> {
        tracing::debug!(sql = %self.shared.serializer.serialize_inline(&stmt), "{context}");

        let result: Result<Vec<Row>> = async { self.exec(stmt).await?.rows.into_values() }.await;

        match result {
            Ok(rows) => {
                tracing::debug!(rows = rows.len(), "{context}");
                Ok(rows)
            }
            Err(err) => Err(self.fail(context, err)),
        }
    }

    /// Runs one operation on a pooled connection under the statement timeout.
    async fn exec(&self, op: impl Into<Operation>) -> Result<Response> {
        let op = op.into();

        self.timeout(async {
            let mut connection = self.shared.pool.get().await?;
            connection.exec(op).await
        })
        .await
    }

    async fn timeout<T>(&self, work: impl Future<Output = Result<T>>) -> Result<T> {
        let duration = self.shared.statement_timeout;

        match tokio::time::timeout(duration, work).await {
            Ok(result) => result,
            Err(_) => Err(Error::timeout(duration)),
        }
    }

    fn fail(&self, context: impl AsRef<str>, err: Error) -> Error {
        let err = err.context(context.as_ref());
        tracing::warn!(error = %err, "database operation failed");
        err
    }
}
