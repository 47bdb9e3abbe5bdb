//! Row-level write helpers and primary-key lookups
//!
//! These work on any [DatabaseEntity] that can encode itself with [ToSqlRow].
//! Every helper takes the executor explicitly so mutations can run them inside
//! one transaction:
//!
//! ```rust,ignore
//! let mut tx = db.begin().await?;
//! repository::insert(&mut *tx, &city).await?;
//! let city = repository::get_by_id::<City, _>(&mut *tx, &city.id).await?;
//! tx.commit().await?;
//! ```

use sqlx::Sqlite;

use super::builder::EntityQuery;
use super::error::OrmError;
use super::predicate::{Column, Key};
use super::traits::{DatabaseEntity, FromSqlRow, SqlValue, ToSqlRow, now};

const CREATED_AT: &str = "created_at";
const UPDATED_AT: &str = "updated_at";

fn bind_all<'q>(
    sql: &'q str,
    values: &'q [SqlValue],
) -> sqlx::query::Query<'q, Sqlite, sqlx::sqlite::SqliteArguments<'q>> {
    let mut query = sqlx::query(sql);
    for value in values {
        query = value.bind_to_query(query);
    }
    query
}

/// Insert one row holding every column of `entity`.
pub async fn insert<'e, E, X>(executor: X, entity: &E) -> Result<(), OrmError>
where
    E: DatabaseEntity + ToSqlRow,
    X: sqlx::Executor<'e, Database = Sqlite>,
{
    let columns = E::columns();
    let names: Vec<&str> = columns.iter().map(|c| c.name).collect();
    let params: Vec<String> = (1..=columns.len()).map(|i| format!("?{}", i)).collect();
    let sql = format!(
        "INSERT INTO {} ({}) VALUES ({})",
        E::TABLE_NAME,
        names.join(", "),
        params.join(", ")
    );
    tracing::debug!(sql = %sql, "Executing insert");

    let values = entity.to_sql_values();
    bind_all(&sql, &values).execute(executor).await?;
    Ok(())
}

/// Overwrite the mutable columns of the row with `entity`'s primary key.
///
/// `created_at` is never rewritten and `updated_at` is set to the current time.
pub async fn update_by_id<'e, E, X>(executor: X, id: &str, entity: &E) -> Result<(), OrmError>
where
    E: DatabaseEntity + ToSqlRow,
    X: sqlx::Executor<'e, Database = Sqlite>,
{
    let mut assignments = Vec::new();
    let mut values = Vec::new();
    for (column, value) in E::columns().iter().zip(entity.to_sql_values()) {
        if column.is_primary_key || column.name == CREATED_AT {
            continue;
        }
        let value = if column.name == UPDATED_AT {
            SqlValue::Time(now())
        } else {
            value
        };
        values.push(value);
        assignments.push(format!("{} = ?{}", column.name, values.len()));
    }
    values.push(SqlValue::from(id));

    let sql = format!(
        "UPDATE {} SET {} WHERE {} = ?{}",
        E::TABLE_NAME,
        assignments.join(", "),
        E::PRIMARY_KEY,
        values.len()
    );
    tracing::debug!(sql = %sql, "Executing update");

    let result = bind_all(&sql, &values).execute(executor).await?;
    if result.rows_affected() == 0 {
        return Err(OrmError::NotFound {
            entity: E::TYPE_NAME,
            id: id.to_string(),
        });
    }
    Ok(())
}

/// Delete by primary key. Returns whether a row was removed.
pub async fn delete_by_id<'e, E, X>(executor: X, id: &str) -> Result<bool, OrmError>
where
    E: DatabaseEntity,
    X: sqlx::Executor<'e, Database = Sqlite>,
{
    let sql = format!("DELETE FROM {} WHERE {} = ?1", E::TABLE_NAME, E::PRIMARY_KEY);
    tracing::debug!(sql = %sql, "Executing delete");

    let result = sqlx::query(&sql).bind(id).execute(executor).await?;
    Ok(result.rows_affected() > 0)
}

pub async fn get_by_id<'e, E, X>(executor: X, id: &str) -> Result<Option<E>, OrmError>
where
    E: DatabaseEntity + FromSqlRow,
    X: sqlx::Executor<'e, Database = Sqlite>,
{
    EntityQuery::<E>::new()
        .filter(Column::<E, Key>::new(E::PRIMARY_KEY).eq(id))
        .fetch_optional(executor)
        .await
}

pub async fn exists<'e, E, X>(executor: X, id: &str) -> Result<bool, OrmError>
where
    E: DatabaseEntity + FromSqlRow,
    X: sqlx::Executor<'e, Database = Sqlite>,
{
    let count = EntityQuery::<E>::new()
        .filter(Column::<E, Key>::new(E::PRIMARY_KEY).eq(id))
        .count(executor)
        .await?;
    Ok(count > 0)
}
