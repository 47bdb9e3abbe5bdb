//! Schema creation from entity definitions
//!
//! - Creates missing tables from [DatabaseEntity::columns]
//! - Indexes every foreign key column
//! - Leaves existing tables untouched; there is no migration step

use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::graphql::entities::{Airport, City, Country, Region, State};
use crate::orm::{ColumnKind, DatabaseEntity};

/// Result of a schema sync operation
#[derive(Debug, Default)]
pub struct SchemaSyncResult {
    pub tables_created: Vec<String>,
}

async fn table_exists(pool: &SqlitePool, table_name: &str) -> Result<bool, sqlx::Error> {
    let result: Option<(String,)> =
        sqlx::query_as("SELECT name FROM sqlite_master WHERE type='table' AND name = ?")
            .bind(table_name)
            .fetch_optional(pool)
            .await?;

    Ok(result.is_some())
}

/// Create a single entity's table and its foreign key indexes if missing.
/// Returns whether the table was created.
pub async fn sync_entity<E: DatabaseEntity>(pool: &SqlitePool) -> Result<bool, sqlx::Error> {
    let table_name = E::TABLE_NAME;
    let created = !table_exists(pool, table_name).await?;

    if created {
        let create_sql = E::create_table_sql();
        debug!("Creating table {}: {}", table_name, create_sql);
        sqlx::query(&create_sql).execute(pool).await?;
        info!("Created table: {}", table_name);
    }

    for col_def in E::columns() {
        if matches!(col_def.kind, ColumnKind::Reference(_)) {
            let index_sql = format!(
                "CREATE INDEX IF NOT EXISTS idx_{table}_{col} ON {table}({col})",
                table = table_name,
                col = col_def.name
            );
            sqlx::query(&index_sql).execute(pool).await?;
        }
    }

    Ok(created)
}

/// Sync every entity table. Referenced tables are created first.
pub async fn sync_schema(pool: &SqlitePool) -> Result<SchemaSyncResult, sqlx::Error> {
    let mut result = SchemaSyncResult::default();

    let tables = [
        (Country::TABLE_NAME, sync_entity::<Country>(pool).await?),
        (Region::TABLE_NAME, sync_entity::<Region>(pool).await?),
        (State::TABLE_NAME, sync_entity::<State>(pool).await?),
        (City::TABLE_NAME, sync_entity::<City>(pool).await?),
        (Airport::TABLE_NAME, sync_entity::<Airport>(pool).await?),
    ];
    for (table, created) in tables {
        if created {
            result.tables_created.push(table.to_string());
        }
    }

    info!(
        tables_created = result.tables_created.len(),
        "Schema sync complete"
    );
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Database;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_sync_is_idempotent() {
        let db = Database::connect_in_memory().await.unwrap();
        let first = sync_schema(db.pool()).await.unwrap();
        assert_eq!(
            first.tables_created,
            vec!["countries", "regions", "states", "cities", "airports"]
        );

        let second = sync_schema(db.pool()).await.unwrap();
        assert!(second.tables_created.is_empty());
    }

    #[tokio::test]
    async fn test_existing_tables_are_left_alone() {
        let db = Database::connect_in_memory().await.unwrap();
        sqlx::query("CREATE TABLE regions (id TEXT PRIMARY KEY, code TEXT NOT NULL)")
            .execute(db.pool())
            .await
            .unwrap();

        assert!(!sync_entity::<Region>(db.pool()).await.unwrap());
        let columns: Vec<(String,)> =
            sqlx::query_as("SELECT name FROM pragma_table_info('regions') ORDER BY cid")
                .fetch_all(db.pool())
                .await
                .unwrap();
        let columns: Vec<&str> = columns.iter().map(|(c,)| c.as_str()).collect();
        assert_eq!(columns, vec!["id", "code"]);
    }

    #[tokio::test]
    async fn test_foreign_keys_are_indexed() {
        let db = Database::connect_in_memory().await.unwrap();
        sync_schema(db.pool()).await.unwrap();
        let indexes: Vec<(String,)> = sqlx::query_as(
            "SELECT name FROM sqlite_master WHERE type = 'index' AND tbl_name = 'airports' \
             AND name LIKE 'idx_%' ORDER BY name",
        )
        .fetch_all(db.pool())
        .await
        .unwrap();
        let indexes: Vec<&str> = indexes.iter().map(|(n,)| n.as_str()).collect();
        assert_eq!(
            indexes,
            vec!["idx_airports_city_id", "idx_airports_region_id", "idx_airports_state_id"]
        );
    }
}
