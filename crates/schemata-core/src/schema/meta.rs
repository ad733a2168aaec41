//! Raw metadata as reported by a driver, before it becomes a model.
//!
//! Drivers fill these structures from their catalog queries and hand them to
//! [`Builder`](super::Builder). Nothing here is validated yet: type names are
//! still strings and keys refer to columns by name.

/// Everything introspection found in one catalog/schema.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    /// Database or catalog name
    pub name: String,

    /// Base tables, in discovery order
    pub tables: Vec<TableMeta>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableMeta {
    pub name: String,

    /// Columns in metadata-reported order
    pub columns: Vec<ColumnMeta>,

    /// Names of the columns forming the primary key
    pub primary_key: Vec<String>,

    /// Foreign keys where this table is the referencing side
    pub imported_keys: Vec<ImportedKey>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnMeta {
    pub name: String,

    /// Declared type name, unnormalized (`character varying`, `VARCHAR(50)`)
    pub type_name: String,

    /// Declared size, when the backend reports one separately from the type name
    pub size: Option<u32>,

    pub nullable: bool,

    /// Default expression, if any
    pub default: Option<String>,
}

/// One column of an imported (foreign) key.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportedKey {
    /// Referencing column in the importing table
    pub column: String,

    pub referenced_table: String,

    pub referenced_column: String,
}

impl TableMeta {
    pub fn new(name: impl Into<String>) -> TableMeta {
        TableMeta {
            name: name.into(),
            ..TableMeta::default()
        }
    }

    pub fn column(mut self, column: ColumnMeta) -> Self {
        self.columns.push(column);
        self
    }

    pub fn primary_key(mut self, column: impl Into<String>) -> Self {
        self.primary_key.push(column.into());
        self
    }

    pub fn imported_key(
        mut self,
        column: impl Into<String>,
        referenced_table: impl Into<String>,
        referenced_column: impl Into<String>,
    ) -> Self {
        self.imported_keys.push(ImportedKey {
            column: column.into(),
            referenced_table: referenced_table.into(),
            referenced_column: referenced_column.into(),
        });
        self
    }
}

impl ColumnMeta {
    /// A nullable column without default.
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> ColumnMeta {
        ColumnMeta {
            name: name.into(),
            type_name: type_name.into(),
            size: None,
            nullable: true,
            default: None,
        }
    }

    pub fn size(mut self, size: u32) -> Self {
        self.size = Some(size);
        self
    }

    pub fn not_null(mut self) -> Self {
        self.nullable = false;
        self
    }

    pub fn default_value(mut self, expr: impl Into<String>) -> Self {
        self.default = Some(expr.into());
        self
    }
}
