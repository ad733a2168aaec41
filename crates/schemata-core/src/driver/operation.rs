mod execute_script;
pub use execute_script::ExecuteScript;

mod fetch_all;
pub use fetch_all::FetchAll;

mod introspect;
pub use introspect::Introspect;

mod query_sql;
pub use query_sql::QuerySql;

#[derive(Debug, Clone)]
pub enum Operation {
    /// Run a batch of raw SQL
    ExecuteScript(ExecuteScript),

    /// Read every row of a table, stringifying every column
    FetchAll(FetchAll),

    /// Read the catalog metadata
    Introspect(Introspect),

    /// Execute a built statement
    QuerySql(QuerySql),
}
