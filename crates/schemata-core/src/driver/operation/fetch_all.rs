use super::Operation;

#[derive(Debug, Clone)]
pub struct FetchAll {
    /// Table to read. Quoted as an identifier by the driver.
    pub table: String,
}

impl From<FetchAll> for Operation {
    fn from(value: FetchAll) -> Self {
        Self::FetchAll(value)
    }
}
