#[macro_use]
mod fmt;
use fmt::ToSql;

mod delim;
use delim::{Comma, Delimited};

mod flavor;
use flavor::Flavor;

mod ident;
use ident::Ident;

mod params;
pub use params::{Params, Placeholder, TypedValue};

// Fragment serializers
mod expr;
mod statement;
mod ty;
mod value;

use crate::stmt::Statement;

/// Serialize a statement to a SQL string
#[derive(Debug, Clone, Copy)]
pub struct Serializer {
    /// The database flavor handles the differences between SQL dialects.
    flavor: Flavor,
}

struct Formatter<'a, T> {
    /// Handle to the serializer
    serializer: &'a Serializer,

    /// Where to write the serialized SQL
    dst: &'a mut String,

    /// Where to store parameters
    params: &'a mut T,

    /// Write values as literals instead of placeholders
    inline: bool,
}

impl Serializer {
    /// Serializes `stmt`, pushing every value onto `params` and writing its
    /// placeholder in its place.
    pub fn serialize(&self, stmt: &Statement, params: &mut impl Params) -> String {
        self.serialize_with(stmt, params, false)
    }

    /// Serializes `stmt` with values written as SQL literals.
    ///
    /// The output is meant for logs and error messages. It is never sent to
    /// the database.
    pub fn serialize_inline(&self, stmt: &Statement) -> String {
        let mut params = Vec::<TypedValue>::new();
        self.serialize_with(stmt, &mut params, true)
    }

    /// `SELECT * FROM table`
    pub fn serialize_fetch_all(&self, table: &str) -> String {
        let mut ret = String::new();
        let mut params = Vec::<TypedValue>::new();

        let mut fmt = Formatter {
            serializer: self,
            dst: &mut ret,
            params: &mut params,
            inline: false,
        };

        fmt!(&mut fmt, "SELECT * FROM " Ident(table));

        ret.push(';');
        ret
    }

    fn serialize_with(&self, stmt: &Statement, params: &mut impl Params, inline: bool) -> String {
        let mut ret = String::new();

        let mut fmt = Formatter {
            serializer: self,
            dst: &mut ret,
            params,
            inline,
        };

        stmt.to_sql(&mut fmt);

        ret.push(';');
        ret
    }

    fn is_postgresql(&self) -> bool {
        matches!(self.flavor, Flavor::Postgresql)
    }
}
