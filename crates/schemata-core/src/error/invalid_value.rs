use super::{Error, ErrorKind};

/// Error when caller-supplied text cannot be used for a column.
///
/// This occurs when:
/// - The text does not parse as the column's type (`"abc"` for an integer column)
/// - An update would assign no column at all
/// - The existing row handed to an update lacks a primary-key value
#[derive(Debug)]
pub(super) struct InvalidValueError {
    target: Box<str>,
    value: Box<str>,
    reason: Box<str>,
}

impl std::error::Error for InvalidValueError {}

impl core::fmt::Display for InvalidValueError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "invalid value {:?} for `{}`: {}",
            self.value, self.target, self.reason
        )
    }
}

impl Error {
    /// Creates an invalid value error for `target` (usually `Entity.column`).
    pub fn invalid_value(
        target: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Error {
        Error::from(ErrorKind::InvalidValue(InvalidValueError {
            target: target.into().into(),
            value: value.into().into(),
            reason: reason.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid value error.
    pub fn is_invalid_value(&self) -> bool {
        self.any_kind(|kind| matches!(kind, ErrorKind::InvalidValue(_)))
    }
}
