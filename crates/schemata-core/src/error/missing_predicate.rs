use super::{Error, ErrorKind};

#[derive(Debug)]
pub(super) struct MissingPredicateError {
    entity: Box<str>,
}

impl std::error::Error for MissingPredicateError {}

impl core::fmt::Display for MissingPredicateError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "delete from `{}` needs at least one predicate",
            self.entity
        )
    }
}

impl Error {
    pub fn missing_predicate(entity: impl Into<String>) -> Error {
        Error::from(ErrorKind::MissingPredicate(MissingPredicateError {
            entity: entity.into().into(),
        }))
    }

    pub fn is_missing_predicate(&self) -> bool {
        self.any_kind(|kind| matches!(kind, ErrorKind::MissingPredicate(_)))
    }
}
