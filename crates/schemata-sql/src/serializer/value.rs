use super::{
    ty::{postgres_cast, postgres_param_type},
    Formatter, Params, ToSql,
};

use schemata_core::{schema::AttributeType, stmt};

/// A bound parameter, or a literal when the formatter is inlining.
pub(super) struct Param<'a> {
    value: &'a stmt::Value,
    ty: Option<AttributeType>,
}

impl<'a> Param<'a> {
    pub(super) fn typed(value: &'a stmt::Value, ty: AttributeType) -> Self {
        Self {
            value,
            ty: Some(ty),
        }
    }

    pub(super) fn untyped(value: &'a stmt::Value) -> Self {
        Self { value, ty: None }
    }
}

impl ToSql for Param<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        if f.inline {
            f.dst.push_str(&self.value.to_string());
            return;
        }

        let placeholder = f.params.push(self.value, self.ty);

        if !f.serializer.is_postgresql() {
            fmt!(f, placeholder);
            return;
        }

        // The placeholder is annotated with the type of the bound value so the
        // server infers that type; it is then cast to the column's type.
        let param_ty = postgres_param_type(self.value);

        match self.ty {
            // PostgreSQL cannot cast a boolean to `bit` directly
            Some(AttributeType::Bit) => {
                fmt!(f, "CAST(CAST(" placeholder "::" param_ty " AS int4) AS bit)");
            }
            Some(ty) if postgres_cast(ty) != param_ty => {
                fmt!(f, "CAST(" placeholder "::" param_ty " AS " postgres_cast(ty) ")");
            }
            _ => fmt!(f, placeholder "::" param_ty),
        }
    }
}
