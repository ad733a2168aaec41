use super::{Error, ErrorKind};

/// Error when introspection meets a column type outside the recognized
/// enumeration. The declared type drives parameter typing, so an unmapped
/// type is rejected instead of defaulted.
#[derive(Debug)]
pub(super) struct UnknownTypeError {
    entity: Box<str>,
    attribute: Box<str>,
    type_name: Box<str>,
}

impl std::error::Error for UnknownTypeError {}

impl core::fmt::Display for UnknownTypeError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "unknown column type `{}` for `{}.{}`",
            self.type_name, self.entity, self.attribute
        )
    }
}

impl Error {
    pub fn unknown_type(
        entity: impl Into<String>,
        attribute: impl Into<String>,
        type_name: impl Into<String>,
    ) -> Error {
        Error::from(ErrorKind::UnknownType(UnknownTypeError {
            entity: entity.into().into(),
            attribute: attribute.into().into(),
            type_name: type_name.into().into(),
        }))
    }

    pub fn is_unknown_type(&self) -> bool {
        self.any_kind(|kind| matches!(kind, ErrorKind::UnknownType(_)))
    }
}
