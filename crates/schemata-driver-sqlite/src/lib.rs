mod introspect;

mod value;
pub(crate) use value::Value;

use rusqlite::Connection as RusqliteConnection;
use schemata_core::{
    async_trait,
    driver::{
        operation::{ExecuteScript, FetchAll, Operation, QuerySql},
        Driver, Response,
    },
    Error, Result, Row,
};
use schemata_sql::{Serializer, TypedValue};
use std::{
    borrow::Cow,
    path::{Path, PathBuf},
    time::Duration,
};
use url::Url;

#[derive(Debug)]
pub struct Sqlite {
    location: Location,

    /// How long a statement waits on a locked database before failing
    busy_timeout: Option<Duration>,
}

#[derive(Debug)]
enum Location {
    File(PathBuf),
    InMemory,
}

impl Sqlite {
    /// Create a new SQLite driver from a `sqlite::memory:` or
    /// `sqlite:/path/to.db` URL
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let url_str = url.into();
        let url = Url::parse(&url_str)
            .map_err(|err| Error::invalid_connection_url(format!("{err}; url={url_str}")))?;

        if url.scheme() != "sqlite" {
            return Err(Error::invalid_connection_url(format!(
                "connection URL does not have a `sqlite` scheme; url={url_str}"
            )));
        }

        if url.path() == ":memory:" {
            Ok(Self::in_memory())
        } else if url.path().is_empty() {
            Err(Error::invalid_connection_url(format!(
                "missing database path in connection URL; url={url_str}"
            )))
        } else {
            Ok(Self::open(url.path()))
        }
    }

    /// Create an in-memory SQLite database
    pub fn in_memory() -> Self {
        Self {
            location: Location::InMemory,
            busy_timeout: None,
        }
    }

    /// Open a SQLite database at the specified file path
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        Self {
            location: Location::File(path.as_ref().to_path_buf()),
            busy_timeout: None,
        }
    }

    pub fn busy_timeout(mut self, timeout: Duration) -> Self {
        self.busy_timeout = Some(timeout);
        self
    }
}

#[async_trait]
impl Driver for Sqlite {
    fn url(&self) -> Cow<'_, str> {
        match &self.location {
            Location::InMemory => Cow::Borrowed("sqlite::memory:"),
            Location::File(path) => Cow::Owned(format!("sqlite:{}", path.display())),
        }
    }

    async fn connect(&self) -> Result<Box<dyn schemata_core::Connection>> {
        let connection = match &self.location {
            Location::File(path) => Connection::open(path)?,
            Location::InMemory => Connection::in_memory()?,
        };

        if let Some(timeout) = self.busy_timeout {
            connection
                .connection
                .busy_timeout(timeout)
                .map_err(Error::connection)?;
        }

        Ok(Box::new(connection))
    }

    /// Every in-memory connection is a separate database, so the pool must
    /// keep exactly one.
    fn max_connections(&self) -> Option<usize> {
        matches!(self.location, Location::InMemory).then_some(1)
    }
}

#[derive(Debug)]
pub struct Connection {
    connection: RusqliteConnection,
}

impl Connection {
    pub fn in_memory() -> Result<Self> {
        let connection = RusqliteConnection::open_in_memory().map_err(Error::connection)?;
        Self::configure(connection)
    }

    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = RusqliteConnection::open(path).map_err(Error::connection)?;
        Self::configure(connection)
    }

    fn configure(connection: RusqliteConnection) -> Result<Self> {
        // Foreign keys are off by default in SQLite
        connection
            .pragma_update(None, "foreign_keys", true)
            .map_err(Error::connection)?;

        Ok(Self { connection })
    }

    fn fetch_all(&self, op: FetchAll) -> Result<Response> {
        let sql = Serializer::sqlite().serialize_fetch_all(&op.table);
        let rows = self.query(&op.table, &sql, &[])?;
        Ok(Response::values(rows))
    }

    fn query_sql(&self, op: QuerySql) -> Result<Response> {
        let mut params: Vec<TypedValue> = vec![];
        let sql = Serializer::sqlite().serialize(&op.stmt, &mut params);

        let params = params
            .into_iter()
            .map(|param| Value::from(param.value))
            .collect::<Vec<_>>();

        if op.stmt.is_query() {
            let rows = self.query(op.stmt.table(), &sql, &params)?;
            return Ok(Response::values(rows));
        }

        let mut stmt = self.connection.prepare_cached(&sql).map_err(Error::query)?;
        let count = stmt
            .execute(rusqlite::params_from_iter(params.iter()))
            .map_err(Error::query)?;

        Ok(Response::count(count as u64))
    }

    fn query(&self, table: &str, sql: &str, params: &[Value]) -> Result<Vec<Row>> {
        let mut stmt = self.connection.prepare_cached(sql).map_err(Error::query)?;

        let columns = stmt
            .column_names()
            .into_iter()
            .map(str::to_string)
            .collect::<Vec<_>>();

        let mut rows = stmt
            .query(rusqlite::params_from_iter(params.iter()))
            .map_err(Error::query)?;

        let mut ret = vec![];

        while let Some(row) = rows.next().map_err(Error::query)? {
            let mut record = Row::new(table);

            for (index, column) in columns.iter().enumerate() {
                let value = row.get_ref(index).map_err(Error::query)?;
                record.push(column, Value::stringify(value));
            }

            ret.push(record);
        }

        Ok(ret)
    }
}

#[async_trait]
impl schemata_core::Connection for Connection {
    async fn exec(&mut self, op: Operation) -> Result<Response> {
        match op {
            Operation::ExecuteScript(ExecuteScript { sql }) => {
                self.connection.execute_batch(&sql).map_err(Error::query)?;
                Ok(Response::count(0))
            }
            Operation::FetchAll(op) => self.fetch_all(op),
            Operation::Introspect(_) => {
                let catalog = introspect::catalog(&self.connection)?;
                Ok(Response::catalog(catalog))
            }
            Operation::QuerySql(op) => self.query_sql(op),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_connection_url() {
        let driver = Sqlite::new("sqlite::memory:").unwrap();
        assert_eq!(driver.url(), "sqlite::memory:");
        assert_eq!(driver.max_connections(), Some(1));

        let driver = Sqlite::new("sqlite:/var/lib/app/sales.db").unwrap();
        assert_eq!(driver.url(), "sqlite:/var/lib/app/sales.db");
        assert_eq!(driver.max_connections(), None);

        let err = Sqlite::new("postgresql://localhost/sales").unwrap_err();
        assert!(err.is_invalid_connection_url());
    }

    #[test]
    fn foreign_keys_are_enforced() {
        let connection = Connection::in_memory().unwrap();
        connection
            .connection
            .execute_batch(
                "CREATE TABLE Region (id INTEGER PRIMARY KEY);
                 CREATE TABLE Customer (id INTEGER PRIMARY KEY, region_id INTEGER REFERENCES Region(id));",
            )
            .unwrap();

        let err = connection
            .connection
            .execute("INSERT INTO Customer (id, region_id) VALUES (1, 99)", [])
            .unwrap_err();
        assert!(err.to_string().contains("FOREIGN KEY"), "{err}");
    }
}
