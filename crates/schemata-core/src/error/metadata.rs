use super::{Error, ErrorKind};

/// Error when schema introspection fails.
///
/// Either a metadata query failed in the driver, or the metadata it returned
/// is inconsistent (a table without columns, a key on a missing column).
#[derive(Debug)]
pub(super) enum MetadataError {
    Driver(Box<dyn std::error::Error + Send + Sync>),
    Inconsistent(Box<str>),
}

impl std::error::Error for MetadataError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MetadataError::Driver(inner) => Some(inner.as_ref()),
            MetadataError::Inconsistent(_) => None,
        }
    }
}

impl core::fmt::Display for MetadataError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("metadata error: ")?;
        match self {
            MetadataError::Driver(inner) => core::fmt::Display::fmt(inner, f),
            MetadataError::Inconsistent(message) => f.write_str(message),
        }
    }
}

impl Error {
    /// Creates an error from a failed metadata query.
    pub fn metadata(err: impl std::error::Error + Send + Sync + 'static) -> Error {
        Error::from(ErrorKind::Metadata(MetadataError::Driver(Box::new(err))))
    }

    /// Creates an error for metadata that cannot be turned into a model.
    pub fn inconsistent_metadata(message: impl Into<String>) -> Error {
        Error::from(ErrorKind::Metadata(MetadataError::Inconsistent(
            message.into().into(),
        )))
    }

    /// Returns `true` if this error is a metadata error.
    pub fn is_metadata(&self) -> bool {
        self.any_kind(|kind| matches!(kind, ErrorKind::Metadata(_)))
    }
}
