pub mod config;
pub use config::Config;

pub mod db;
pub use db::Db;

pub mod schema {
    pub use schemata_core::schema::*;
}

pub use schemata_core::{stmt, Error, InformationResource, Result, Row};

pub use schemata_sql::{Condition, Operator};
