use super::Operation;

#[derive(Debug, Clone, Default)]
pub struct Introspect {
    /// Schema to scan. Drivers fall back to their default schema when unset;
    /// backends without schemas ignore it.
    pub schema: Option<String>,
}

impl From<Introspect> for Operation {
    fn from(value: Introspect) -> Self {
        Self::Introspect(value)
    }
}
