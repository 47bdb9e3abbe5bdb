//! SQL Query Builder
//!
//! Provides a type-safe query builder that works with `DatabaseEntity` types
//! and uses parameterized queries via sqlx to prevent SQL injection.

use sqlx::{Row, Sqlite, SqlitePool};

use super::error::OrmError;
use super::predicate::{Node, Predicate, Selector};
use super::traits::{DatabaseEntity, DatabaseFilter, DatabaseOrderBy, FromSqlRow, SqlValue};
use crate::graphql::pagination::Connection;

/// A query builder for database entities.
///
/// Builds parameterized SQL queries for SELECT operations with
/// filtering, sorting, and pagination support. The executor is supplied per
/// call, so the same query runs on the pool or inside a transaction.
pub struct EntityQuery<E: DatabaseEntity> {
    predicate: Predicate<E>,
    order_clauses: Vec<String>,
    limit: Option<i64>,
    offset: Option<i64>,
}

impl<E: DatabaseEntity + FromSqlRow> EntityQuery<E> {
    /// Create a new query builder for the entity type.
    pub fn new() -> Self {
        Self {
            predicate: Predicate::all(),
            order_clauses: Vec::new(),
            limit: None,
            offset: None,
        }
    }

    /// Narrow the query. Repeated filters are ANDed.
    pub fn filter(mut self, predicate: Predicate<E>) -> Self {
        self.predicate = std::mem::take(&mut self.predicate) & predicate;
        self
    }

    /// Apply a caller-supplied where input, if any.
    pub fn where_input<F>(self, filter: Option<&F>) -> Result<Self, OrmError>
    where
        F: DatabaseFilter<Entity = E>,
    {
        match filter {
            Some(filter) => Ok(self.filter(filter.to_predicate()?)),
            None => Ok(self),
        }
    }

    /// Add sorting to the query.
    pub fn order_by<O: DatabaseOrderBy>(mut self, order: &O) -> Self {
        if let Some(order_sql) = order.to_sql_order() {
            self.order_clauses.push(order_sql);
        }
        self
    }

    /// Add default sorting if no order is specified.
    pub fn default_order(mut self) -> Self {
        if self.order_clauses.is_empty() {
            self.order_clauses.push(format!(
                "{}.{} {}",
                E::TABLE_NAME,
                E::DEFAULT_SORT,
                E::DEFAULT_SORT_DIR
            ));
        }
        self
    }

    /// Set limit directly.
    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Set offset directly.
    pub fn offset(mut self, offset: i64) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Apply offset-based pagination.
    pub fn paginate(self, offset: i64, limit: i64) -> Self {
        self.offset(offset).limit(limit)
    }

    fn where_sql(&self) -> (String, Vec<SqlValue>) {
        if *self.predicate.node() == Node::All {
            return (String::new(), Vec::new());
        }
        let mut selector = Selector::new(E::TABLE_NAME, 0);
        let sql = selector.lower(self.predicate.node());
        (format!(" WHERE {}", sql), selector.into_values())
    }

    /// Build the SQL query string.
    fn build_sql(&self) -> (String, Vec<SqlValue>) {
        let (where_sql, values) = self.where_sql();
        let mut sql = E::select_sql();
        sql.push_str(&where_sql);

        if !self.order_clauses.is_empty() {
            sql.push_str(" ORDER BY ");
            sql.push_str(&self.order_clauses.join(", "));
            // Stable pages regardless of duplicate sort keys
            sql.push_str(&format!(", {}.{} ASC", E::TABLE_NAME, E::PRIMARY_KEY));
        }

        if let Some(limit) = self.limit {
            sql.push_str(&format!(" LIMIT {}", limit));
        }

        if let Some(offset) = self.offset {
            if offset > 0 {
                if self.limit.is_none() {
                    sql.push_str(" LIMIT -1");
                }
                sql.push_str(&format!(" OFFSET {}", offset));
            }
        }

        (sql, values)
    }

    /// Build a COUNT query string.
    fn build_count_sql(&self) -> (String, Vec<SqlValue>) {
        let (where_sql, values) = self.where_sql();
        (
            format!("SELECT COUNT(*) FROM {}{}", E::TABLE_NAME, where_sql),
            values,
        )
    }

    /// Execute the query and return all matching entities.
    pub async fn fetch_all<'e, X>(&self, executor: X) -> Result<Vec<E>, OrmError>
    where
        X: sqlx::Executor<'e, Database = Sqlite>,
    {
        let (sql, values) = self.build_sql();
        tracing::debug!(sql = %sql, params = values.len(), "Executing entity query");

        let mut query = sqlx::query(&sql);
        for value in &values {
            query = value.bind_to_query(query);
        }

        let rows = query.fetch_all(executor).await?;
        Ok(rows.iter().map(E::from_row).collect::<Result<Vec<_>, _>>()?)
    }

    /// Execute the query and return the first entity, if any.
    pub async fn fetch_optional<'e, X>(self, executor: X) -> Result<Option<E>, OrmError>
    where
        X: sqlx::Executor<'e, Database = Sqlite>,
    {
        let query = self.limit(1);
        let (sql, values) = query.build_sql();
        tracing::debug!(sql = %sql, "Executing entity query (one)");

        let mut q = sqlx::query(&sql);
        for value in &values {
            q = value.bind_to_query(q);
        }

        match q.fetch_optional(executor).await? {
            Some(row) => Ok(Some(E::from_row(&row)?)),
            None => Ok(None),
        }
    }

    /// Execute a COUNT query.
    pub async fn count<'e, X>(&self, executor: X) -> Result<i64, OrmError>
    where
        X: sqlx::Executor<'e, Database = Sqlite>,
    {
        let (sql, values) = self.build_count_sql();
        tracing::debug!(sql = %sql, "Executing count query");

        let mut query = sqlx::query(&sql);
        for value in &values {
            query = value.bind_to_query(query);
        }

        let row = query.fetch_one(executor).await?;
        Ok(row.try_get::<i64, _>(0)?)
    }

    /// Execute the query and return a Relay-style connection.
    pub async fn fetch_connection(self, pool: &SqlitePool) -> Result<Connection<E>, OrmError> {
        // Total ignores limit/offset
        let total = self.count(pool).await?;
        let offset = self.offset.unwrap_or(0);

        let items = self.fetch_all(pool).await?;

        Ok(Connection::from_items(items, offset, total))
    }
}

impl<E: DatabaseEntity + FromSqlRow> Default for EntityQuery<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphql::entities::{City, State, fixtures};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_unfiltered_select_has_no_where() {
        let (sql, values) = EntityQuery::<State>::new().build_sql();
        assert!(!sql.contains("WHERE"));
        assert!(values.is_empty());
    }

    #[test]
    fn test_default_order_adds_tiebreak() {
        let (sql, _) = EntityQuery::<City>::new().default_order().build_sql();
        assert!(sql.ends_with("ORDER BY cities.name ASC, cities.id ASC"), "{}", sql);
    }

    #[test]
    fn test_offset_without_limit() {
        let (sql, _) = EntityQuery::<City>::new().offset(5).build_sql();
        assert!(sql.ends_with(" LIMIT -1 OFFSET 5"), "{}", sql);
    }

    #[test]
    fn test_repeated_filters_are_anded() {
        let (sql, values) = EntityQuery::<City>::new()
            .filter(City::NAME.eq("Chicago"))
            .filter(City::NAME.not_eq("Denver"))
            .build_count_sql();
        assert_eq!(
            sql,
            "SELECT COUNT(*) FROM cities WHERE (cities.name = ?1 AND cities.name IS NOT ?2)"
        );
        assert_eq!(values.len(), 2);
    }

    #[tokio::test]
    async fn test_connection_pages() {
        let db = fixtures::seeded().await;
        let first = EntityQuery::<City>::new()
            .default_order()
            .paginate(0, 2)
            .fetch_connection(db.pool())
            .await
            .unwrap();
        assert_eq!(first.total_count, 3);
        assert_eq!(first.edges.len(), 2);
        assert!(first.page_info.has_next_page);

        let rest = EntityQuery::<City>::new()
            .default_order()
            .paginate(2, 2)
            .fetch_connection(db.pool())
            .await
            .unwrap();
        let names: Vec<_> = rest.edges.into_iter().map(|e| e.node.name).collect();
        assert_eq!(names, vec!["Springfield"]);
        assert!(!rest.page_info.has_next_page);
    }
}
