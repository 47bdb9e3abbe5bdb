use async_graphql::{Enum, InputObject, SimpleObject};
use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::Row;
use sqlx::sqlite::SqliteRow;

use crate::define_connection;
use crate::graphql::filters::{DateFilter, IdFilter, Order, SortField, StringFilter, WhereBuilder};
use crate::orm::predicate::{Key, Text, Time};
use crate::orm::{
    Column, ColumnDef, ColumnKind, DatabaseEntity, DatabaseFilter, FromSqlRow, Predicate,
    PredicateError, SqlValue, ToSqlRow, row_time,
};

#[derive(SimpleObject, Clone, Debug, Serialize)]
#[graphql(name = "Country")]
#[serde(rename_all = "PascalCase")]
pub struct Country {
    #[graphql(name = "Id")]
    pub id: String,

    #[graphql(name = "CreatedAt")]
    pub created_at: DateTime<Utc>,

    #[graphql(name = "UpdatedAt")]
    pub updated_at: DateTime<Utc>,

    /// ISO country code
    #[graphql(name = "Code")]
    pub code: String,

    #[graphql(name = "Name")]
    pub name: String,
}

impl Country {
    pub const ID: Column<Country, Key> = Column::new("id");
    pub const CREATED_AT: Column<Country, Time> = Column::new("created_at");
    pub const UPDATED_AT: Column<Country, Time> = Column::new("updated_at");
    pub const CODE: Column<Country, Text> = Column::new("code");
    pub const NAME: Column<Country, Text> = Column::new("name");
}

impl DatabaseEntity for Country {
    const TABLE_NAME: &'static str = "countries";
    const TYPE_NAME: &'static str = "Country";
    const PLURAL_NAME: &'static str = "Countries";
    const DEFAULT_SORT: &'static str = "name";

    fn columns() -> &'static [ColumnDef] {
        const COLUMNS: &[ColumnDef] = &[
            ColumnDef::primary_key("id"),
            ColumnDef::new("created_at", ColumnKind::Time),
            ColumnDef::new("updated_at", ColumnKind::Time),
            ColumnDef::new("code", ColumnKind::Text),
            ColumnDef::new("name", ColumnKind::Text),
        ];
        COLUMNS
    }
}

impl FromSqlRow for Country {
    fn from_row(row: &SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            created_at: row_time(row, "created_at")?,
            updated_at: row_time(row, "updated_at")?,
            code: row.try_get("code")?,
            name: row.try_get("name")?,
        })
    }
}

impl ToSqlRow for Country {
    fn to_sql_values(&self) -> Vec<SqlValue> {
        vec![
            self.id.clone().into(),
            self.created_at.into(),
            self.updated_at.into(),
            self.code.clone().into(),
            self.name.clone().into(),
        ]
    }
}

define_connection!(CountryConnection, CountryEdge, Country);

#[derive(InputObject, Default, Clone, Debug)]
#[graphql(name = "CountryWhereInput")]
pub struct CountryWhereInput {
    #[graphql(name = "Not")]
    pub not: Option<Box<CountryWhereInput>>,
    #[graphql(name = "And")]
    pub and: Option<Vec<CountryWhereInput>>,
    #[graphql(name = "Or")]
    pub or: Option<Vec<CountryWhereInput>>,

    #[graphql(name = "Id")]
    pub id: Option<IdFilter>,
    #[graphql(name = "CreatedAt")]
    pub created_at: Option<DateFilter>,
    #[graphql(name = "UpdatedAt")]
    pub updated_at: Option<DateFilter>,
    #[graphql(name = "Code")]
    pub code: Option<StringFilter>,
    #[graphql(name = "Name")]
    pub name: Option<StringFilter>,
}

impl DatabaseFilter for CountryWhereInput {
    type Entity = Country;

    fn to_predicate(&self) -> Result<Predicate<Country>, PredicateError> {
        Ok(WhereBuilder::new()
            .combinators(&self.not, &self.and, &self.or)?
            .field(Country::ID, &self.id)?
            .field(Country::CREATED_AT, &self.created_at)?
            .field(Country::UPDATED_AT, &self.updated_at)?
            .field(Country::CODE, &self.code)?
            .field(Country::NAME, &self.name)?
            .build())
    }
}

#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq)]
#[graphql(name = "CountryOrderField")]
pub enum CountryOrderField {
    #[graphql(name = "Code")]
    Code,
    #[graphql(name = "Name")]
    Name,
    #[graphql(name = "CreatedAt")]
    CreatedAt,
    #[graphql(name = "UpdatedAt")]
    UpdatedAt,
}

impl SortField for CountryOrderField {
    fn column(&self) -> &'static str {
        match self {
            CountryOrderField::Code => "code",
            CountryOrderField::Name => "name",
            CountryOrderField::CreatedAt => "created_at",
            CountryOrderField::UpdatedAt => "updated_at",
        }
    }
}

pub type CountryOrder = Order<CountryOrderField>;
