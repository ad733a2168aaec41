use super::{Error, ErrorKind};

#[derive(Debug)]
pub(super) struct UnknownAttributeError {
    entity: Box<str>,
    attribute: Box<str>,
}

impl std::error::Error for UnknownAttributeError {}

impl core::fmt::Display for UnknownAttributeError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "entity `{}` has no attribute `{}`",
            self.entity, self.attribute
        )
    }
}

impl Error {
    pub fn unknown_attribute(entity: impl Into<String>, attribute: impl Into<String>) -> Error {
        Error::from(ErrorKind::UnknownAttribute(UnknownAttributeError {
            entity: entity.into().into(),
            attribute: attribute.into().into(),
        }))
    }

    pub fn is_unknown_attribute(&self) -> bool {
        self.any_kind(|kind| matches!(kind, ErrorKind::UnknownAttribute(_)))
    }
}
