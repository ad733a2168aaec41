use super::{Error, ErrorKind};

#[derive(Debug)]
pub(super) struct ConflictingOrderError {
    entity: Box<str>,
    column: Box<str>,
}

impl std::error::Error for ConflictingOrderError {}

impl core::fmt::Display for ConflictingOrderError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "column `{}.{}` cannot sort both ascending and descending",
            self.entity, self.column
        )
    }
}

impl Error {
    pub fn conflicting_order(entity: impl Into<String>, column: impl Into<String>) -> Error {
        Error::from(ErrorKind::ConflictingOrder(ConflictingOrderError {
            entity: entity.into().into(),
            column: column.into().into(),
        }))
    }

    pub fn is_conflicting_order(&self) -> bool {
        self.any_kind(|kind| matches!(kind, ErrorKind::ConflictingOrder(_)))
    }
}
