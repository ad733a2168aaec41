use super::{Error, ErrorKind};

/// Error when the database rejects or fails a statement.
///
/// Constraint violations, missing tables and type mismatches reported by the
/// backend all end up here with the driver error kept as the source.
#[derive(Debug)]
pub(super) struct QueryError {
    pub(super) inner: Box<dyn std::error::Error + Send + Sync>,
}

impl std::error::Error for QueryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.inner.as_ref())
    }
}

impl core::fmt::Display for QueryError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("query failed: ")?;
        core::fmt::Display::fmt(&self.inner, f)?;
        let mut source = self.inner.source();
        while let Some(err) = source {
            write!(f, ": {}", err)?;
            source = err.source();
        }
        Ok(())
    }
}

impl Error {
    /// Creates an error from a failed statement.
    pub fn query(err: impl std::error::Error + Send + Sync + 'static) -> Error {
        Error::from(ErrorKind::Query(QueryError {
            inner: Box::new(err),
        }))
    }

    /// Returns `true` if this error is a query error.
    pub fn is_query(&self) -> bool {
        self.any_kind(|kind| matches!(kind, ErrorKind::Query(_)))
    }
}
