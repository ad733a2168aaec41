use schemata_core::{schema::AttributeType, stmt};

/// PostgreSQL type a parameter is cast to before it meets a column of type
/// `ty`. Character types all go through `text` so no length modifier is
/// applied to the parameter.
pub(super) fn postgres_cast(ty: AttributeType) -> &'static str {
    use AttributeType::*;

    match ty {
        Char | Varchar | Nvarchar | NChar | Text => "text",
        Uuid => "uuid",
        Json => "json",
        Jsonb => "jsonb",
        Date => "date",
        DateTime | Timestamp => "timestamp",
        Time => "time",
        TimestampTz => "timestamptz",
        TinyInt | SmallInt => "int2",
        Int => "int4",
        BigInt => "int8",
        Decimal | Numeric => "numeric",
        Money => "money",
        Real => "float4",
        Float => "float8",
        Bit => "bit",
        Boolean => "bool",
        Binary | Varbinary | Blob => "bytea",
    }
}

/// PostgreSQL type of the bound value itself. Drivers bind each variant as
/// exactly this type.
pub(super) fn postgres_param_type(value: &stmt::Value) -> &'static str {
    match value {
        stmt::Value::Bool(_) => "bool",
        stmt::Value::Bytes(_) => "bytea",
        stmt::Value::Decimal(_) => "numeric",
        stmt::Value::F64(_) => "float8",
        stmt::Value::I64(_) => "int8",
        stmt::Value::Null | stmt::Value::String(_) => "text",
    }
}
