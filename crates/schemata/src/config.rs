use crate::db::{PoolConfig, Timeouts};
use crate::{Error, Result};

use std::time::Duration;

/// Statement timeout used when none is configured.
pub const DEFAULT_STATEMENT_TIMEOUT: Duration = Duration::from_secs(30);

/// Settings for opening a [`Db`](crate::Db).
///
/// Build one in code, or read it from the process environment with
/// [`Config::from_env`]:
///
/// | variable | field |
/// |---|---|
/// | `SCHEMATA_DATABASE_URL` (required) | `url` |
/// | `SCHEMATA_SCHEMA` | `schema` |
/// | `SCHEMATA_POOL_MAX_SIZE` | `pool.max_size` |
/// | `SCHEMATA_STATEMENT_TIMEOUT_MS` | `statement_timeout` |
#[derive(Debug, Clone)]
pub struct Config {
    /// Database connection URL
    pub url: String,

    /// Schema scanned by `load_schema`. `None` uses the backend default.
    pub schema: Option<String>,

    pub pool: PoolConfig,

    /// Upper bound on every database operation, pool wait included
    pub statement_timeout: Duration,
}

impl Config {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            schema: None,
            pool: PoolConfig::default(),
            statement_timeout: DEFAULT_STATEMENT_TIMEOUT,
        }
    }

    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let Some(url) = lookup("SCHEMATA_DATABASE_URL") else {
            return Err(Error::invalid_connection_url(
                "SCHEMATA_DATABASE_URL is not set",
            ));
        };

        let mut config = Self::new(url);
        config.schema = lookup("SCHEMATA_SCHEMA").filter(|schema| !schema.is_empty());

        if let Some(value) = lookup("SCHEMATA_POOL_MAX_SIZE") {
            config.pool.max_size = match value.trim().parse::<usize>() {
                Ok(max_size) if max_size > 0 => max_size,
                _ => {
                    return Err(Error::invalid_value(
                        "SCHEMATA_POOL_MAX_SIZE",
                        value,
                        "expected a positive integer",
                    ))
                }
            };
        }

        if let Some(value) = lookup("SCHEMATA_STATEMENT_TIMEOUT_MS") {
            let millis = value.trim().parse::<u64>().map_err(|_| {
                Error::invalid_value(
                    "SCHEMATA_STATEMENT_TIMEOUT_MS",
                    &value,
                    "expected milliseconds",
                )
            })?;
            config.statement_timeout = Duration::from_millis(millis);
        }

        Ok(config)
    }

    pub fn schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = Some(schema.into());
        self
    }

    pub fn max_pool_size(mut self, max_size: usize) -> Self {
        self.pool.max_size = max_size;
        self
    }

    pub fn pool_timeouts(mut self, timeouts: Timeouts) -> Self {
        self.pool.timeouts = timeouts;
        self
    }

    pub fn statement_timeout(mut self, timeout: Duration) -> Self {
        self.statement_timeout = timeout;
        self
    }
}
