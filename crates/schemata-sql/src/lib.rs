pub mod builder;
pub use builder::{Condition, Operator};

pub mod serializer;
pub use serializer::{Params, Serializer, TypedValue};

pub use schemata_core::stmt::{self, Statement};
