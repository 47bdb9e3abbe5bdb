//! Core traits for the ORM layer
//!
//! Every entity describes its table statically: the column list (with the
//! scalar kind of each column) and the relation registry. The predicate layer,
//! the schema sync and the query builder all read these tables; nothing is
//! discovered by reflection at runtime.

use chrono::{DateTime, SecondsFormat, Utc};
use sqlx::Row;
use sqlx::sqlite::{SqliteArguments, SqliteRow};

use super::error::PredicateError;
use super::predicate::{FieldEnum, Predicate};

/// Scalar kind of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// Primary key (random string id)
    Id,
    Text,
    Int,
    Float,
    Bool,
    /// Timestamp stored as fixed-width RFC 3339 text
    Time,
    /// Enumerated text column with its allowed tokens
    Enum(&'static [&'static str]),
    /// Foreign key holding the primary key of the named table
    Reference(&'static str),
}

impl ColumnKind {
    /// SQLite storage type (TEXT, INTEGER, REAL)
    pub fn sql_type(&self) -> &'static str {
        match self {
            ColumnKind::Id
            | ColumnKind::Text
            | ColumnKind::Time
            | ColumnKind::Enum(_)
            | ColumnKind::Reference(_) => "TEXT",
            ColumnKind::Int | ColumnKind::Bool => "INTEGER",
            ColumnKind::Float => "REAL",
        }
    }

    /// Whether Gt/Gte/Lt/Lte make sense for this kind
    pub fn is_ordered(&self) -> bool {
        matches!(
            self,
            ColumnKind::Id
                | ColumnKind::Text
                | ColumnKind::Int
                | ColumnKind::Float
                | ColumnKind::Time
        )
    }
}

/// Column definition for schema generation and filter validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnDef {
    /// Column name in the database
    pub name: &'static str,
    pub kind: ColumnKind,
    /// Whether the column can be NULL
    pub nullable: bool,
    /// Whether this is the primary key
    pub is_primary_key: bool,
}

impl ColumnDef {
    pub const fn new(name: &'static str, kind: ColumnKind) -> Self {
        Self {
            name,
            kind,
            nullable: false,
            is_primary_key: false,
        }
    }

    pub const fn primary_key(name: &'static str) -> Self {
        Self {
            name,
            kind: ColumnKind::Id,
            nullable: false,
            is_primary_key: true,
        }
    }

    /// Nullable foreign key to `table`'s primary key
    pub const fn reference(name: &'static str, table: &'static str) -> Self {
        Self {
            name,
            kind: ColumnKind::Reference(table),
            nullable: true,
            is_primary_key: false,
        }
    }

    pub const fn optional(self) -> Self {
        Self {
            nullable: true,
            ..self
        }
    }

    /// Generate the column definition SQL
    pub fn to_sql(&self) -> String {
        let mut sql = format!("{} {}", self.name, self.kind.sql_type());

        if self.is_primary_key {
            sql.push_str(" PRIMARY KEY");
        }

        if !self.nullable && !self.is_primary_key {
            sql.push_str(" NOT NULL");
        }

        if let ColumnKind::Reference(table) = self.kind {
            sql.push_str(&format!(" REFERENCES {}(id) ON DELETE SET NULL", table));
        }

        sql
    }
}

/// Which side of a relation holds the foreign key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
    /// The source row holds the key (City.state)
    ManyToOne,
    /// The target rows hold the key (State.cities)
    OneToMany,
}

/// Type-erased description of an entity, used where the concrete type is only
/// known through the relation registry.
#[derive(Clone, Copy)]
pub struct EntityMeta {
    pub type_name: &'static str,
    pub table: &'static str,
    pub primary_key: &'static str,
    pub columns: fn() -> &'static [ColumnDef],
    pub relations: fn() -> &'static [RelationDef],
}

impl EntityMeta {
    pub const fn of<E: DatabaseEntity>() -> Self {
        Self {
            type_name: E::TYPE_NAME,
            table: E::TABLE_NAME,
            primary_key: E::PRIMARY_KEY,
            columns: E::columns,
            relations: E::relations,
        }
    }

    pub fn column(&self, name: &str) -> Result<&'static ColumnDef, PredicateError> {
        (self.columns)()
            .iter()
            .find(|c| c.name == name)
            .ok_or_else(|| PredicateError::UnknownField {
                entity: self.type_name,
                field: name.to_string(),
            })
    }

    pub fn relation(&self, name: &str) -> Result<&'static RelationDef, PredicateError> {
        (self.relations)()
            .iter()
            .find(|r| r.name == name)
            .ok_or_else(|| PredicateError::UnknownRelation {
                entity: self.type_name,
                relation: name.to_string(),
            })
    }
}

impl std::fmt::Debug for EntityMeta {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EntityMeta")
            .field("type_name", &self.type_name)
            .field("table", &self.table)
            .finish()
    }
}

impl PartialEq for EntityMeta {
    fn eq(&self, other: &Self) -> bool {
        self.table == other.table
    }
}

impl Eq for EntityMeta {}

/// One entry of an entity's relation registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelationDef {
    /// Edge name as exposed to callers (e.g. "state")
    pub name: &'static str,
    pub target: EntityMeta,
    pub cardinality: Cardinality,
    /// Foreign key column on the many side
    pub column: &'static str,
}

/// Metadata about a database entity (table).
pub trait DatabaseEntity: Sized + Send + Sync + 'static {
    /// The SQL table name (e.g., "airports")
    const TABLE_NAME: &'static str;

    /// The GraphQL type name (e.g., "Airport")
    const TYPE_NAME: &'static str;

    /// The GraphQL plural name (e.g., "Airports")
    const PLURAL_NAME: &'static str;

    /// The primary key column name
    const PRIMARY_KEY: &'static str = "id";

    /// Default sort column for list queries (e.g., "name")
    const DEFAULT_SORT: &'static str;

    /// Default sort direction
    const DEFAULT_SORT_DIR: &'static str = "ASC";

    /// All columns in table order
    fn columns() -> &'static [ColumnDef];

    /// Relation registry consulted by edge predicates
    fn relations() -> &'static [RelationDef] {
        &[]
    }

    fn meta() -> EntityMeta {
        EntityMeta::of::<Self>()
    }

    /// Build a SELECT query for all columns
    fn select_sql() -> String {
        let columns: Vec<String> = Self::columns()
            .iter()
            .map(|c| format!("{}.{}", Self::TABLE_NAME, c.name))
            .collect();
        format!("SELECT {} FROM {}", columns.join(", "), Self::TABLE_NAME)
    }

    /// Generate CREATE TABLE IF NOT EXISTS SQL
    fn create_table_sql() -> String {
        let column_defs: Vec<String> = Self::columns().iter().map(|c| c.to_sql()).collect();

        format!(
            "CREATE TABLE IF NOT EXISTS {} (\n  {}\n)",
            Self::TABLE_NAME,
            column_defs.join(",\n  ")
        )
    }
}

/// Implemented by the `*WhereInput` structs of the request layer.
pub trait DatabaseFilter: Send + Sync {
    type Entity: DatabaseEntity;

    /// Convert the caller-supplied filter into a predicate, validating literals
    fn to_predicate(&self) -> Result<Predicate<Self::Entity>, PredicateError>;
}

/// Trait for applying sort order to a SQL query.
pub trait DatabaseOrderBy: Send + Sync {
    /// Get the ORDER BY clause fragment (e.g., "name ASC")
    fn to_sql_order(&self) -> Option<String>;
}

/// Trait for decoding a database row into an entity.
pub trait FromSqlRow: Sized {
    fn from_row(row: &SqliteRow) -> Result<Self, sqlx::Error>;
}

/// Trait for encoding an entity as one value per column, in [DatabaseEntity::columns] order.
pub trait ToSqlRow {
    fn to_sql_values(&self) -> Vec<SqlValue>;
}

/// Sort direction for ORDER BY clauses.
#[derive(async_graphql::Enum, Copy, Clone, Debug, Default, Eq, PartialEq)]
#[graphql(name = "SortDirection")]
pub enum OrderDirection {
    /// Ascending order (A-Z, 1-9, oldest-newest)
    #[default]
    #[graphql(name = "ASC")]
    Asc,
    /// Descending order (Z-A, 9-1, newest-oldest)
    #[graphql(name = "DESC")]
    Desc,
}

impl OrderDirection {
    /// Convert to SQL order string
    pub fn to_sql(&self) -> &'static str {
        match self {
            OrderDirection::Asc => "ASC",
            OrderDirection::Desc => "DESC",
        }
    }
}

/// Represents a SQL value that can be bound to a query.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    String(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Time(DateTime<Utc>),
    Null,
}

impl SqlValue {
    /// Bind this value to a sqlx query builder
    pub fn bind_to_query<'q>(
        &'q self,
        query: sqlx::query::Query<'q, sqlx::Sqlite, SqliteArguments<'q>>,
    ) -> sqlx::query::Query<'q, sqlx::Sqlite, SqliteArguments<'q>> {
        match self {
            SqlValue::String(s) => query.bind(s.as_str()),
            SqlValue::Int(i) => query.bind(*i),
            SqlValue::Float(f) => query.bind(*f),
            SqlValue::Bool(b) => query.bind(if *b { 1i32 } else { 0i32 }),
            SqlValue::Time(t) => query.bind(encode_time(t)),
            SqlValue::Null => query.bind(None::<String>),
        }
    }

    pub fn opt<T: Into<SqlValue>>(value: Option<T>) -> Self {
        value.map_or(SqlValue::Null, Into::into)
    }
}

impl From<String> for SqlValue {
    fn from(v: String) -> Self {
        SqlValue::String(v)
    }
}

impl From<&str> for SqlValue {
    fn from(v: &str) -> Self {
        SqlValue::String(v.to_string())
    }
}

impl From<i64> for SqlValue {
    fn from(v: i64) -> Self {
        SqlValue::Int(v)
    }
}

impl From<i32> for SqlValue {
    fn from(v: i32) -> Self {
        SqlValue::Int(v as i64)
    }
}

impl From<f64> for SqlValue {
    fn from(v: f64) -> Self {
        SqlValue::Float(v)
    }
}

impl From<bool> for SqlValue {
    fn from(v: bool) -> Self {
        SqlValue::Bool(v)
    }
}

impl From<DateTime<Utc>> for SqlValue {
    fn from(v: DateTime<Utc>) -> Self {
        SqlValue::Time(v)
    }
}

/// Timestamps are written with a fixed width so text ordering matches time ordering.
pub fn encode_time(t: &DateTime<Utc>) -> String {
    t.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Current time truncated to the stored precision.
pub fn now() -> DateTime<Utc> {
    let now = Utc::now();
    DateTime::parse_from_rfc3339(&encode_time(&now))
        .map(|t| t.with_timezone(&Utc))
        .unwrap_or(now)
}

// ============================================================================
// Row decoding helpers
// ============================================================================

fn decode_error(
    column: &str,
    source: impl std::error::Error + Send + Sync + 'static,
) -> sqlx::Error {
    sqlx::Error::ColumnDecode {
        index: column.to_string(),
        source: Box::new(source),
    }
}

pub fn row_time(row: &SqliteRow, column: &str) -> Result<DateTime<Utc>, sqlx::Error> {
    let raw: String = row.try_get(column)?;
    DateTime::parse_from_rfc3339(&raw)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| decode_error(column, e))
}

pub fn row_time_opt(row: &SqliteRow, column: &str) -> Result<Option<DateTime<Utc>>, sqlx::Error> {
    let raw: Option<String> = row.try_get(column)?;
    raw.map(|raw| {
        DateTime::parse_from_rfc3339(&raw)
            .map(|t| t.with_timezone(&Utc))
            .map_err(|e| decode_error(column, e))
    })
    .transpose()
}

#[derive(Debug, thiserror::Error)]
#[error("unknown enum token \"{0}\"")]
struct UnknownToken(String);

pub fn row_enum<T: FieldEnum>(row: &SqliteRow, column: &str) -> Result<T, sqlx::Error> {
    let raw: String = row.try_get(column)?;
    T::from_token(&raw).ok_or_else(|| decode_error(column, UnknownToken(raw)))
}

pub fn row_enum_opt<T: FieldEnum>(row: &SqliteRow, column: &str) -> Result<Option<T>, sqlx::Error> {
    let raw: Option<String> = row.try_get(column)?;
    raw.map(|raw| T::from_token(&raw).ok_or_else(|| decode_error(column, UnknownToken(raw))))
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_sql() {
        assert_eq!(ColumnDef::primary_key("id").to_sql(), "id TEXT PRIMARY KEY");
        assert_eq!(
            ColumnDef::new("elevation", ColumnKind::Float).to_sql(),
            "elevation REAL NOT NULL"
        );
        assert_eq!(
            ColumnDef::new("tower_type", ColumnKind::Enum(&["ATCT"]))
                .optional()
                .to_sql(),
            "tower_type TEXT"
        );
        assert_eq!(
            ColumnDef::reference("state_id", "states").to_sql(),
            "state_id TEXT REFERENCES states(id) ON DELETE SET NULL"
        );
    }

    #[test]
    fn test_time_encoding_is_fixed_width() {
        let a = DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let b = DateTime::parse_from_rfc3339("2024-01-01T00:00:00.5Z")
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(encode_time(&a), "2024-01-01T00:00:00.000000Z");
        assert_eq!(encode_time(&a).len(), encode_time(&b).len());
        assert!(encode_time(&a) < encode_time(&b));
    }

    #[test]
    fn test_ordered_kinds() {
        assert!(ColumnKind::Text.is_ordered());
        assert!(ColumnKind::Time.is_ordered());
        assert!(!ColumnKind::Bool.is_ordered());
        assert!(!ColumnKind::Enum(&["A"]).is_ordered());
    }
}
