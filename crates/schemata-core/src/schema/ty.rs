use std::fmt;

/// Declared column types recognized by the schema model.
///
/// Introspection maps every metadata type name onto one of these variants
/// through [`AttributeType::parse`]. A name missing from the mapping table is
/// an error rather than a fallback, because the type decides how caller text
/// is turned into a bound parameter.
///
/// Each variant belongs to a [`TypeCategory`]. Character and temporal types
/// are *quoted*: their values are bound as text. Every other category is
/// *unquoted*: caller text is parsed into a typed parameter (integer,
/// decimal, float, boolean or bytes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeType {
    Char,
    Varchar,
    Nvarchar,
    NChar,
    Text,
    Uuid,
    Json,
    Jsonb,

    Date,
    DateTime,
    Time,
    Timestamp,
    TimestampTz,

    TinyInt,
    SmallInt,
    Int,
    BigInt,

    Decimal,
    Numeric,
    Money,

    Real,
    Float,

    Bit,
    Boolean,

    Binary,
    Varbinary,
    Blob,
}

/// How values of an [`AttributeType`] are typed when bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeCategory {
    Character,
    Temporal,
    Integer,
    Decimal,
    Float,
    Boolean,
    Binary,
}

/// Normalized type name to attribute type. Covers the names reported by SQL
/// Server, PostgreSQL `information_schema` and SQLite declarations.
const TYPE_NAMES: &[(&str, AttributeType)] = &[
    ("CHAR", AttributeType::Char),
    ("CHARACTER", AttributeType::Char),
    ("BPCHAR", AttributeType::Char),
    ("VARCHAR", AttributeType::Varchar),
    ("CHARACTER VARYING", AttributeType::Varchar),
    ("VARYING CHARACTER", AttributeType::Varchar),
    ("NVARCHAR", AttributeType::Nvarchar),
    ("NATIONAL CHARACTER VARYING", AttributeType::Nvarchar),
    ("NATIONAL VARCHAR", AttributeType::Nvarchar),
    ("NCHAR", AttributeType::NChar),
    ("NATIONAL CHARACTER", AttributeType::NChar),
    ("TEXT", AttributeType::Text),
    ("NTEXT", AttributeType::Text),
    ("CLOB", AttributeType::Text),
    ("UUID", AttributeType::Uuid),
    ("UNIQUEIDENTIFIER", AttributeType::Uuid),
    ("JSON", AttributeType::Json),
    ("JSONB", AttributeType::Jsonb),
    ("DATE", AttributeType::Date),
    ("DATETIME", AttributeType::DateTime),
    ("DATETIME2", AttributeType::DateTime),
    ("SMALLDATETIME", AttributeType::DateTime),
    ("TIME", AttributeType::Time),
    ("TIME WITHOUT TIME ZONE", AttributeType::Time),
    ("TIMESTAMP", AttributeType::Timestamp),
    ("TIMESTAMP WITHOUT TIME ZONE", AttributeType::Timestamp),
    ("TIMESTAMPTZ", AttributeType::TimestampTz),
    ("TIMESTAMP WITH TIME ZONE", AttributeType::TimestampTz),
    ("DATETIMEOFFSET", AttributeType::TimestampTz),
    ("TINYINT", AttributeType::TinyInt),
    ("SMALLINT", AttributeType::SmallInt),
    ("INT2", AttributeType::SmallInt),
    ("INT", AttributeType::Int),
    ("INTEGER", AttributeType::Int),
    ("INT4", AttributeType::Int),
    ("MEDIUMINT", AttributeType::Int),
    ("BIGINT", AttributeType::BigInt),
    ("INT8", AttributeType::BigInt),
    ("DECIMAL", AttributeType::Decimal),
    ("NUMERIC", AttributeType::Numeric),
    ("MONEY", AttributeType::Money),
    ("SMALLMONEY", AttributeType::Money),
    ("REAL", AttributeType::Real),
    ("FLOAT4", AttributeType::Real),
    ("FLOAT", AttributeType::Float),
    ("FLOAT8", AttributeType::Float),
    ("DOUBLE", AttributeType::Float),
    ("DOUBLE PRECISION", AttributeType::Float),
    ("BIT", AttributeType::Bit),
    ("BOOLEAN", AttributeType::Boolean),
    ("BOOL", AttributeType::Boolean),
    ("BINARY", AttributeType::Binary),
    ("VARBINARY", AttributeType::Varbinary),
    ("IMAGE", AttributeType::Blob),
    ("BLOB", AttributeType::Blob),
    ("BYTEA", AttributeType::Blob),
];

impl AttributeType {
    /// Parses a declared type name as reported by database metadata.
    ///
    /// Returns the attribute type and, when the name carries one, the size
    /// from a `(size)` or `(precision, scale)` suffix.
    ///
    /// ```
    /// use schemata_core::schema::AttributeType;
    ///
    /// assert_eq!(
    ///     AttributeType::parse("varchar(50)"),
    ///     Some((AttributeType::Varchar, Some(50)))
    /// );
    /// assert_eq!(AttributeType::parse("int identity"), Some((AttributeType::Int, None)));
    /// assert_eq!(AttributeType::parse("geography"), None);
    /// ```
    pub fn parse(declared: &str) -> Option<(AttributeType, Option<u32>)> {
        let (name, size) = normalize(declared);
        TYPE_NAMES
            .iter()
            .find(|(candidate, _)| *candidate == name)
            .map(|(_, ty)| (*ty, size))
    }

    pub fn category(self) -> TypeCategory {
        use AttributeType::*;

        match self {
            Char | Varchar | Nvarchar | NChar | Text | Uuid | Json | Jsonb => {
                TypeCategory::Character
            }
            Date | DateTime | Time | Timestamp | TimestampTz => TypeCategory::Temporal,
            TinyInt | SmallInt | Int | BigInt => TypeCategory::Integer,
            Decimal | Numeric | Money => TypeCategory::Decimal,
            Real | Float => TypeCategory::Float,
            Bit | Boolean => TypeCategory::Boolean,
            Binary | Varbinary | Blob => TypeCategory::Binary,
        }
    }

    /// True when values of this type are bound (and previewed) as quoted text.
    pub fn is_quoted(self) -> bool {
        matches!(
            self.category(),
            TypeCategory::Character | TypeCategory::Temporal
        )
    }

    /// Canonical upper-case name.
    pub fn name(self) -> &'static str {
        use AttributeType::*;

        match self {
            Char => "CHAR",
            Varchar => "VARCHAR",
            Nvarchar => "NVARCHAR",
            NChar => "NCHAR",
            Text => "TEXT",
            Uuid => "UUID",
            Json => "JSON",
            Jsonb => "JSONB",
            Date => "DATE",
            DateTime => "DATETIME",
            Time => "TIME",
            Timestamp => "TIMESTAMP",
            TimestampTz => "TIMESTAMPTZ",
            TinyInt => "TINYINT",
            SmallInt => "SMALLINT",
            Int => "INT",
            BigInt => "BIGINT",
            Decimal => "DECIMAL",
            Numeric => "NUMERIC",
            Money => "MONEY",
            Real => "REAL",
            Float => "FLOAT",
            Bit => "BIT",
            Boolean => "BOOLEAN",
            Binary => "BINARY",
            Varbinary => "VARBINARY",
            Blob => "BLOB",
        }
    }
}

impl fmt::Display for AttributeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Upper-cases, strips `(..)` groups and an `IDENTITY` marker, and collapses
/// whitespace. The first number inside the first group is returned as size.
fn normalize(declared: &str) -> (String, Option<u32>) {
    let mut name = String::with_capacity(declared.len());
    let mut size = None;
    let mut depth = 0usize;
    let mut group = String::new();

    for ch in declared.chars() {
        match ch {
            '(' => {
                depth += 1;
                name.push(' ');
            }
            ')' if depth > 0 => {
                depth -= 1;
                if size.is_none() {
                    size = group
                        .split(',')
                        .next()
                        .and_then(|first| first.trim().parse().ok());
                }
                group.clear();
            }
            _ if depth > 0 => group.push(ch),
            _ => name.push(ch.to_ascii_uppercase()),
        }
    }

    let mut words: Vec<&str> = name.split_whitespace().collect();
    if words.len() > 1 && words.last() == Some(&"IDENTITY") {
        words.pop();
    }

    (words.join(" "), size)
}
