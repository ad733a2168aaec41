use super::{Error, ErrorKind};

/// Error when a caller-supplied value list does not line up with an entity's
/// attribute list, or when paired name/value lists differ in length.
#[derive(Debug)]
pub(super) struct ArityError {
    entity: Box<str>,
    expected: usize,
    actual: usize,
}

impl std::error::Error for ArityError {}

impl core::fmt::Display for ArityError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "arity mismatch for `{}`: expected {} values, found {}",
            self.entity, self.expected, self.actual
        )
    }
}

impl Error {
    /// Creates an arity error for `entity`.
    pub fn arity(entity: impl Into<String>, expected: usize, actual: usize) -> Error {
        Error::from(ErrorKind::Arity(ArityError {
            entity: entity.into().into(),
            expected,
            actual,
        }))
    }

    /// Returns `true` if this error is an arity error.
    pub fn is_arity(&self) -> bool {
        self.any_kind(|kind| matches!(kind, ErrorKind::Arity(_)))
    }
}
