mod attribute;
pub use attribute::{Attribute, AttributeId};

mod builder;
pub use builder::Builder;

mod constraint;
pub use constraint::{AttributeConstraint, ConstraintKind, ConstraintType, ForeignKeyTarget};

mod entity;
pub use entity::{Entity, EntityId};

pub mod meta;

mod resource;
pub use resource::InformationResource;

mod ty;
pub use ty::{AttributeType, TypeCategory};
