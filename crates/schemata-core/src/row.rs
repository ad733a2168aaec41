use indexmap::IndexMap;

/// One retrieved record.
///
/// Columns keep the order of the result set. Every value is serialized as a
/// string; SQL `NULL` is `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    /// Source table
    pub name: String,

    pub fields: IndexMap<String, Option<String>>,
}

impl Row {
    pub fn new(name: impl Into<String>) -> Row {
        Row {
            name: name.into(),
            fields: IndexMap::new(),
        }
    }

    /// Appends a column, replacing the value if the name is already present.
    pub fn push(&mut self, column: impl Into<String>, value: Option<String>) {
        self.fields.insert(column.into(), value);
    }

    pub fn with(mut self, column: impl Into<String>, value: impl Into<String>) -> Row {
        self.push(column, Some(value.into()));
        self
    }

    pub fn with_null(mut self, column: impl Into<String>) -> Row {
        self.push(column, None);
        self
    }

    /// The value of `column`. `None` both when the column is absent and when
    /// it is `NULL`; use [`Row::contains`] to tell them apart.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields.get(column).and_then(|value| value.as_deref())
    }

    pub fn contains(&self, column: &str) -> bool {
        self.fields.contains_key(column)
    }

    pub fn columns(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.fields.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
