use super::{Error, ErrorKind};

/// Error when an update targets an entity without primary-key constraints.
#[derive(Debug)]
pub(super) struct NoPrimaryKeyError {
    entity: Box<str>,
}

impl std::error::Error for NoPrimaryKeyError {}

impl core::fmt::Display for NoPrimaryKeyError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "entity `{}` has no primary key; refusing to update without a key predicate",
            self.entity
        )
    }
}

impl Error {
    pub fn no_primary_key(entity: impl Into<String>) -> Error {
        Error::from(ErrorKind::NoPrimaryKey(NoPrimaryKeyError {
            entity: entity.into().into(),
        }))
    }

    pub fn is_no_primary_key(&self) -> bool {
        self.any_kind(|kind| matches!(kind, ErrorKind::NoPrimaryKey(_)))
    }
}
