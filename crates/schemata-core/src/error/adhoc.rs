use super::{Error, ErrorKind};

/// An error built from a formatted message with no structured payload.
#[derive(Debug)]
pub(super) struct AdhocError {
    message: Box<str>,
}

impl AdhocError {
    pub(super) fn new(message: impl Into<String>) -> Self {
        AdhocError {
            message: message.into().into(),
        }
    }
}

impl std::error::Error for AdhocError {}

impl core::fmt::Display for AdhocError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error {
    /// Creates an error from a plain message.
    pub fn adhoc(message: impl Into<String>) -> Error {
        Error::from(ErrorKind::Adhoc(AdhocError::new(message)))
    }
}
