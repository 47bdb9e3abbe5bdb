use async_graphql::{ComplexObject, Context, Enum, ErrorExtensions, InputObject, SimpleObject};
use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::Row;
use sqlx::sqlite::SqliteRow;

use crate::db::Database;
use crate::define_connection;
use crate::graphql::filters::{DateFilter, IdFilter, Order, SortField, StringFilter, WhereBuilder};
use crate::orm::predicate::{Key, Text, Time};
use crate::orm::{
    Cardinality, Column, ColumnDef, ColumnKind, DatabaseEntity, DatabaseFilter, EntityQuery,
    FromSqlRow, Predicate, PredicateError, Relation, RelationDef, SqlValue, ToSqlRow, row_time,
};

use super::airport::{Airport, AirportWhereInput};
use super::city::{City, CityWhereInput};

#[derive(SimpleObject, Clone, Debug, Serialize)]
#[graphql(name = "State", complex)]
#[serde(rename_all = "PascalCase")]
pub struct State {
    #[graphql(name = "Id")]
    pub id: String,

    #[graphql(name = "CreatedAt")]
    pub created_at: DateTime<Utc>,

    #[graphql(name = "UpdatedAt")]
    pub updated_at: DateTime<Utc>,

    /// Postal code (e.g. IL)
    #[graphql(name = "Code")]
    pub code: String,

    #[graphql(name = "Name")]
    pub name: String,
}

impl State {
    pub const ID: Column<State, Key> = Column::new("id");
    pub const CREATED_AT: Column<State, Time> = Column::new("created_at");
    pub const UPDATED_AT: Column<State, Time> = Column::new("updated_at");
    pub const CODE: Column<State, Text> = Column::new("code");
    pub const NAME: Column<State, Text> = Column::new("name");

    pub const CITIES: Relation<State, City> =
        Relation::new("cities", Cardinality::OneToMany, "state_id");
    pub const AIRPORTS: Relation<State, Airport> =
        Relation::new("airports", Cardinality::OneToMany, "state_id");
}

impl DatabaseEntity for State {
    const TABLE_NAME: &'static str = "states";
    const TYPE_NAME: &'static str = "State";
    const PLURAL_NAME: &'static str = "States";
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

    fn relations() -> &'static [RelationDef] {
        const RELATIONS: &[RelationDef] = &[State::CITIES.def(), State::AIRPORTS.def()];
        RELATIONS
    }
}

impl FromSqlRow for State {
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

impl ToSqlRow for State {
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

#[ComplexObject]
impl State {
    #[graphql(name = "Cities")]
    async fn cities(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "Where")] where_input: Option<CityWhereInput>,
    ) -> async_graphql::Result<Vec<City>> {
        let db = ctx.data_unchecked::<Database>();
        EntityQuery::<City>::new()
            .filter(City::STATE.has_with([State::ID.eq(self.id.clone())]))
            .where_input(where_input.as_ref())
            .map_err(|e| e.extend())?
            .default_order()
            .fetch_all(db.pool())
            .await
            .map_err(|e| e.extend())
    }

    #[graphql(name = "Airports")]
    async fn airports(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "Where")] where_input: Option<AirportWhereInput>,
    ) -> async_graphql::Result<Vec<Airport>> {
        let db = ctx.data_unchecked::<Database>();
        EntityQuery::<Airport>::new()
            .filter(Airport::STATE.has_with([State::ID.eq(self.id.clone())]))
            .where_input(where_input.as_ref())
            .map_err(|e| e.extend())?
            .default_order()
            .fetch_all(db.pool())
            .await
            .map_err(|e| e.extend())
    }
}

define_connection!(StateConnection, StateEdge, State);

#[derive(InputObject, Default, Clone, Debug)]
#[graphql(name = "StateWhereInput")]
pub struct StateWhereInput {
    #[graphql(name = "Not")]
    pub not: Option<Box<StateWhereInput>>,
    #[graphql(name = "And")]
    pub and: Option<Vec<StateWhereInput>>,
    #[graphql(name = "Or")]
    pub or: Option<Vec<StateWhereInput>>,

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

    #[graphql(name = "HasCities")]
    pub has_cities: Option<bool>,
    #[graphql(name = "HasCitiesWith")]
    pub has_cities_with: Option<Vec<CityWhereInput>>,
    #[graphql(name = "HasAirports")]
    pub has_airports: Option<bool>,
    #[graphql(name = "HasAirportsWith")]
    pub has_airports_with: Option<Vec<AirportWhereInput>>,
}

impl DatabaseFilter for StateWhereInput {
    type Entity = State;

    fn to_predicate(&self) -> Result<Predicate<State>, PredicateError> {
        Ok(WhereBuilder::new()
            .combinators(&self.not, &self.and, &self.or)?
            .field(State::ID, &self.id)?
            .field(State::CREATED_AT, &self.created_at)?
            .field(State::UPDATED_AT, &self.updated_at)?
            .field(State::CODE, &self.code)?
            .field(State::NAME, &self.name)?
            .edge(State::CITIES, self.has_cities, &self.has_cities_with)?
            .edge(State::AIRPORTS, self.has_airports, &self.has_airports_with)?
            .build())
    }
}

#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq)]
#[graphql(name = "StateOrderField")]
pub enum StateOrderField {
    #[graphql(name = "Code")]
    Code,
    #[graphql(name = "Name")]
    Name,
    #[graphql(name = "CreatedAt")]
    CreatedAt,
    #[graphql(name = "UpdatedAt")]
    UpdatedAt,
}

impl SortField for StateOrderField {
    fn column(&self) -> &'static str {
        match self {
            StateOrderField::Code => "code",
            StateOrderField::Name => "name",
            StateOrderField::CreatedAt => "created_at",
            StateOrderField::UpdatedAt => "updated_at",
        }
    }
}

pub type StateOrder = Order<StateOrderField>;
