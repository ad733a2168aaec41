use super::{Flavor, Formatter, ToSql};

use schemata_core::{schema::AttributeType, stmt};

pub trait Params {
    fn push(&mut self, param: &stmt::Value, ty: Option<AttributeType>) -> Placeholder;
}

/// 1-based position of a bound parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholder(pub usize);

/// A bound parameter together with the declared type of the column it is
/// compared with or assigned to.
#[derive(Debug, Clone, PartialEq)]
pub struct TypedValue {
    pub value: stmt::Value,
    pub ty: Option<AttributeType>,
}

impl Params for Vec<TypedValue> {
    fn push(&mut self, value: &stmt::Value, ty: Option<AttributeType>) -> Placeholder {
        self.push(TypedValue {
            value: value.clone(),
            ty,
        });
        Placeholder(self.len())
    }
}

impl Params for Vec<stmt::Value> {
    fn push(&mut self, value: &stmt::Value, _ty: Option<AttributeType>) -> Placeholder {
        self.push(value.clone());
        Placeholder(self.len())
    }
}

impl ToSql for Placeholder {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        use std::fmt::Write;

        // Writing to a `String` cannot fail
        let _ = match f.serializer.flavor {
            Flavor::Postgresql => write!(f.dst, "${}", self.0),
            Flavor::Sqlite => write!(f.dst, "?{}", self.0),
        };
    }
}
