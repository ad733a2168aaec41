use schemata_core::{
    schema::meta::{Catalog, ColumnMeta, ImportedKey, TableMeta},
    Error, Result,
};
use tokio_postgres::Client;

const TABLES: &str = "\
SELECT table_name::text
FROM information_schema.tables
WHERE table_schema::text = $1 AND table_type = 'BASE TABLE'
ORDER BY table_name";

const COLUMNS: &str = "\
SELECT table_name::text, column_name::text, data_type::text,
       COALESCE(character_maximum_length, numeric_precision, datetime_precision)::int4,
       is_nullable = 'YES', column_default::text
FROM information_schema.columns
WHERE table_schema::text = $1
ORDER BY table_name, ordinal_position";

const PRIMARY_KEYS: &str = "\
SELECT kcu.table_name::text, kcu.column_name::text
FROM information_schema.table_constraints tc
JOIN information_schema.key_column_usage kcu
  ON tc.constraint_schema = kcu.constraint_schema
 AND tc.constraint_name = kcu.constraint_name
WHERE tc.table_schema::text = $1 AND tc.constraint_type = 'PRIMARY KEY'
ORDER BY kcu.table_name, kcu.ordinal_position";

const IMPORTED_KEYS: &str = "\
SELECT fk.table_name::text, fk.column_name::text,
       pk.table_name::text, pk.column_name::text
FROM information_schema.referential_constraints rc
JOIN information_schema.key_column_usage fk
  ON rc.constraint_schema = fk.constraint_schema
 AND rc.constraint_name = fk.constraint_name
JOIN information_schema.key_column_usage pk
  ON rc.unique_constraint_schema = pk.constraint_schema
 AND rc.unique_constraint_name = pk.constraint_name
 AND fk.position_in_unique_constraint = pk.ordinal_position
WHERE fk.table_schema::text = $1
ORDER BY fk.table_name, fk.ordinal_position";

/// Reads every base table of `schema` along with its columns and keys.
pub(crate) async fn catalog(client: &Client, schema: &str) -> Result<Catalog> {
    let name: String = client
        .query_one("SELECT current_database()::text", &[])
        .await
        .and_then(|row| row.try_get(0))
        .map_err(Error::metadata)?;

    let mut tables = vec![];

    for row in client.query(TABLES, &[&schema]).await.map_err(Error::metadata)? {
        let table: String = row.try_get(0).map_err(Error::metadata)?;
        tables.push(TableMeta::new(table));
    }

    tracing::debug!(schema, tables = tables.len(), "introspecting postgresql catalog");

    for row in client.query(COLUMNS, &[&schema]).await.map_err(Error::metadata)? {
        let table: String = row.try_get(0).map_err(Error::metadata)?;
        let Some(meta) = find(&mut tables, &table) else {
            // Views and foreign tables also show up in `columns`
            continue;
        };

        let size: Option<i32> = row.try_get(3).map_err(Error::metadata)?;

        meta.columns.push(ColumnMeta {
            name: row.try_get(1).map_err(Error::metadata)?,
            type_name: row.try_get(2).map_err(Error::metadata)?,
            size: size.and_then(|size| u32::try_from(size).ok()),
            nullable: row.try_get(4).map_err(Error::metadata)?,
            default: row.try_get(5).map_err(Error::metadata)?,
        });
    }

    for row in client
        .query(PRIMARY_KEYS, &[&schema])
        .await
        .map_err(Error::metadata)?
    {
        let table: String = row.try_get(0).map_err(Error::metadata)?;

        if let Some(meta) = find(&mut tables, &table) {
            meta.primary_key.push(row.try_get(1).map_err(Error::metadata)?);
        }
    }

    for row in client
        .query(IMPORTED_KEYS, &[&schema])
        .await
        .map_err(Error::metadata)?
    {
        let table: String = row.try_get(0).map_err(Error::metadata)?;

        if let Some(meta) = find(&mut tables, &table) {
            meta.imported_keys.push(ImportedKey {
                column: row.try_get(1).map_err(Error::metadata)?,
                referenced_table: row.try_get(2).map_err(Error::metadata)?,
                referenced_column: row.try_get(3).map_err(Error::metadata)?,
            });
        }
    }

    Ok(Catalog { name, tables })
}

fn find<'a>(tables: &'a mut [TableMeta], name: &str) -> Option<&'a mut TableMeta> {
    tables.iter_mut().find(|table| table.name == name)
}
