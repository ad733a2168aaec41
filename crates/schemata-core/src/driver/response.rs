use crate::{schema::meta::Catalog, Error, Result, Row};

#[derive(Debug, Clone)]
pub struct Response {
    pub rows: Rows,
}

#[derive(Debug, Clone)]
pub enum Rows {
    /// Number of rows impacted by the operation
    Count(u64),

    /// Rows returned by a query
    Values(Vec<Row>),

    /// Metadata returned by introspection
    Catalog(Catalog),
}

impl Response {
    pub fn count(count: u64) -> Self {
        Self {
            rows: Rows::Count(count),
        }
    }

    pub fn values(rows: Vec<Row>) -> Self {
        Self {
            rows: Rows::Values(rows),
        }
    }

    pub fn catalog(catalog: Catalog) -> Self {
        Self {
            rows: Rows::Catalog(catalog),
        }
    }
}

impl Rows {
    pub fn into_count(self) -> Result<u64> {
        match self {
            Rows::Count(count) => Ok(count),
            _ => Err(Error::invalid_result(format!(
                "expected a row count, got {}",
                self.describe()
            ))),
        }
    }

    pub fn into_values(self) -> Result<Vec<Row>> {
        match self {
            Rows::Values(rows) => Ok(rows),
            _ => Err(Error::invalid_result(format!(
                "expected rows, got {}",
                self.describe()
            ))),
        }
    }

    pub fn into_catalog(self) -> Result<Catalog> {
        match self {
            Rows::Catalog(catalog) => Ok(catalog),
            _ => Err(Error::invalid_result(format!(
                "expected catalog metadata, got {}",
                self.describe()
            ))),
        }
    }

    fn describe(&self) -> &'static str {
        match self {
            Rows::Count(_) => "a row count",
            Rows::Values(_) => "rows",
            Rows::Catalog(_) => "catalog metadata",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrong_shape_is_invalid_result() {
        let err = Response::count(2).rows.into_values().unwrap_err();
        assert!(err.is_invalid_result());
        assert_eq!(err.to_string(), "invalid result: expected rows, got a row count");

        assert_eq!(Response::count(2).rows.into_count().unwrap(), 2);
    }
}
