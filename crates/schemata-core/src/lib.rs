pub mod driver;
pub use driver::{Connection, Driver};

mod error;
pub use error::{Error, IntoError};

mod row;
pub use row::Row;

pub mod schema;
pub use schema::InformationResource;

pub mod stmt;

/// A Result type alias that uses Schemata's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

pub use async_trait::async_trait;
