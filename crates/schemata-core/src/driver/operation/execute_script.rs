use super::Operation;

/// Runs a batch of raw SQL statements, e.g. schema setup. Nothing is
/// returned and no parameters are bound.
#[derive(Debug, Clone)]
pub struct ExecuteScript {
    pub sql: String,
}

impl From<ExecuteScript> for Operation {
    fn from(value: ExecuteScript) -> Self {
        Self::ExecuteScript(value)
    }
}
