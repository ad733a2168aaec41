use rusqlite::{params, Connection, OptionalExtension};
use schemata_core::{
    schema::meta::{Catalog, ColumnMeta, ImportedKey, TableMeta},
    Error, Result,
};

/// Reads every user table of the main database.
pub(crate) fn catalog(connection: &Connection) -> Result<Catalog> {
    let name: String = connection
        .query_row(
            "SELECT name FROM pragma_database_list WHERE seq = 0",
            [],
            |row| row.get(0),
        )
        .map_err(Error::metadata)?;

    let mut stmt = connection
        .prepare(
            "SELECT name FROM sqlite_master \
             WHERE type = 'table' AND name NOT LIKE 'sqlite\\_%' ESCAPE '\\' \
             ORDER BY name",
        )
        .map_err(Error::metadata)?;

    let names = stmt
        .query_map([], |row| row.get::<_, String>(0))
        .and_then(|rows| rows.collect::<rusqlite::Result<Vec<_>>>())
        .map_err(Error::metadata)?;

    let mut tables = Vec::with_capacity(names.len());

    for table in names {
        tables.push(table_meta(connection, table)?);
    }

    tracing::debug!(catalog = %name, tables = tables.len(), "introspected sqlite catalog");

    Ok(Catalog { name, tables })
}

fn table_meta(connection: &Connection, name: String) -> Result<TableMeta> {
    let mut stmt = connection
        .prepare(
            "SELECT name, type, \"notnull\", dflt_value, pk \
             FROM pragma_table_info(?1) ORDER BY cid",
        )
        .map_err(Error::metadata)?;

    let mut keyed = vec![];
    let mut table = TableMeta::new(&name);

    let mut rows = stmt.query(params![name]).map_err(Error::metadata)?;

    while let Some(row) = rows.next().map_err(Error::metadata)? {
        let column: String = row.get(0).map_err(Error::metadata)?;
        let not_null: bool = row.get(2).map_err(Error::metadata)?;
        let position: i64 = row.get(4).map_err(Error::metadata)?;

        if position > 0 {
            keyed.push((position, column.clone()));
        }

        table.columns.push(ColumnMeta {
            name: column,
            type_name: row.get(1).map_err(Error::metadata)?,
            size: None,
            nullable: !not_null,
            default: row.get(3).map_err(Error::metadata)?,
        });
    }

    keyed.sort();
    table.primary_key = keyed.into_iter().map(|(_, column)| column).collect();
    table.imported_keys = imported_keys(connection, &name)?;

    Ok(table)
}

fn imported_keys(connection: &Connection, table: &str) -> Result<Vec<ImportedKey>> {
    let mut stmt = connection
        .prepare(
            "SELECT seq, \"table\", \"from\", \"to\" \
             FROM pragma_foreign_key_list(?1) ORDER BY id, seq",
        )
        .map_err(Error::metadata)?;

    let keys = stmt
        .query_map(params![table], |row| {
            Ok((
                row.get::<_, i64>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, Option<String>>(3)?,
            ))
        })
        .and_then(|rows| rows.collect::<rusqlite::Result<Vec<_>>>())
        .map_err(Error::metadata)?;

    let mut ret = Vec::with_capacity(keys.len());

    for (seq, referenced_table, column, to) in keys {
        let referenced_column = match to {
            Some(to) => to,
            // `REFERENCES t` without columns targets t's primary key
            None => primary_key_column(connection, &referenced_table, seq)?,
        };

        ret.push(ImportedKey {
            column,
            referenced_table,
            referenced_column,
        });
    }

    Ok(ret)
}

fn primary_key_column(connection: &Connection, table: &str, seq: i64) -> Result<String> {
    connection
        .query_row(
            "SELECT name FROM pragma_table_info(?1) WHERE pk = ?2",
            params![table, seq + 1],
            |row| row.get(0),
        )
        .optional()
        .map_err(Error::metadata)?
        .ok_or_else(|| {
            Error::inconsistent_metadata(format!(
                "foreign key references `{table}` which has no primary key column {}",
                seq + 1
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_tables_keys_and_defaults() {
        let connection = Connection::open_in_memory().unwrap();
        connection
            .execute_batch(
                "CREATE TABLE Region (id INTEGER PRIMARY KEY, name VARCHAR(40) NOT NULL);
                 CREATE TABLE Customer (
                     id INTEGER PRIMARY KEY,
                     name VARCHAR(50) DEFAULT 'n/a',
                     region_id INTEGER REFERENCES Region
                 );",
            )
            .unwrap();

        let catalog = catalog(&connection).unwrap();
        assert_eq!(catalog.name, "main");

        let names: Vec<_> = catalog.tables.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["Customer", "Region"]);

        let customer = &catalog.tables[0];
        assert_eq!(customer.primary_key, ["id"]);
        assert_eq!(customer.columns[1].type_name, "VARCHAR(50)");
        assert_eq!(customer.columns[1].default.as_deref(), Some("'n/a'"));
        assert!(customer.columns[1].nullable);
        assert_eq!(
            customer.imported_keys,
            [ImportedKey {
                column: "region_id".to_string(),
                referenced_table: "Region".to_string(),
                referenced_column: "id".to_string(),
            }]
        );

        let region = &catalog.tables[1];
        assert!(!region.columns[1].nullable);
        assert!(region.imported_keys.is_empty());
    }

    #[test]
    fn skips_internal_tables() {
        let connection = Connection::open_in_memory().unwrap();
        connection
            .execute_batch(
                "CREATE TABLE Ticket (id INTEGER PRIMARY KEY AUTOINCREMENT, title TEXT);
                 CREATE TABLE sqliteish (id INTEGER);",
            )
            .unwrap();

        let catalog = catalog(&connection).unwrap();

        let names: Vec<_> = catalog.tables.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["Ticket", "sqliteish"]);
    }
}
