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
use super::state::{State, StateWhereInput};

#[derive(SimpleObject, Clone, Debug, Serialize)]
#[graphql(name = "City", complex)]
#[serde(rename_all = "PascalCase")]
pub struct City {
    #[graphql(name = "Id")]
    pub id: String,

    #[graphql(name = "CreatedAt")]
    pub created_at: DateTime<Utc>,

    #[graphql(name = "UpdatedAt")]
    pub updated_at: DateTime<Utc>,

    #[graphql(name = "Name")]
    pub name: String,

    #[graphql(skip)]
    #[serde(skip)]
    pub state_id: Option<String>,
}

impl City {
    pub const ID: Column<City, Key> = Column::new("id");
    pub const CREATED_AT: Column<City, Time> = Column::new("created_at");
    pub const UPDATED_AT: Column<City, Time> = Column::new("updated_at");
    pub const NAME: Column<City, Text> = Column::new("name");

    pub const STATE: Relation<City, State> =
        Relation::new("state", Cardinality::ManyToOne, "state_id");
    pub const AIRPORTS: Relation<City, Airport> =
        Relation::new("airports", Cardinality::OneToMany, "city_id");
}

impl DatabaseEntity for City {
    const TABLE_NAME: &'static str = "cities";
    const TYPE_NAME: &'static str = "City";
    const PLURAL_NAME: &'static str = "Cities";
    const DEFAULT_SORT: &'static str = "name";

    fn columns() -> &'static [ColumnDef] {
        const COLUMNS: &[ColumnDef] = &[
            ColumnDef::primary_key("id"),
            ColumnDef::new("created_at", ColumnKind::Time),
            ColumnDef::new("updated_at", ColumnKind::Time),
            ColumnDef::new("name", ColumnKind::Text),
            ColumnDef::reference("state_id", "states"),
        ];
        COLUMNS
    }

    fn relations() -> &'static [RelationDef] {
        const RELATIONS: &[RelationDef] = &[City::STATE.def(), City::AIRPORTS.def()];
        RELATIONS
    }
}

impl FromSqlRow for City {
    fn from_row(row: &SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            created_at: row_time(row, "created_at")?,
            updated_at: row_time(row, "updated_at")?,
            name: row.try_get("name")?,
            state_id: row.try_get("state_id")?,
        })
    }
}

impl ToSqlRow for City {
    fn to_sql_values(&self) -> Vec<SqlValue> {
        vec![
            self.id.clone().into(),
            self.created_at.into(),
            self.updated_at.into(),
            self.name.clone().into(),
            SqlValue::opt(self.state_id.clone()),
        ]
    }
}

#[ComplexObject]
impl City {
    #[graphql(name = "State")]
    async fn state(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<State>> {
        if self.state_id.is_none() {
            return Ok(None);
        }
        let db = ctx.data_unchecked::<Database>();
        EntityQuery::<State>::new()
            .filter(State::CITIES.has_with([City::ID.eq(self.id.clone())]))
            .fetch_optional(db.pool())
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
            .filter(Airport::CITY.has_with([City::ID.eq(self.id.clone())]))
            .where_input(where_input.as_ref())
            .map_err(|e| e.extend())?
            .default_order()
            .fetch_all(db.pool())
            .await
            .map_err(|e| e.extend())
    }
}

define_connection!(CityConnection, CityEdge, City);

#[derive(InputObject, Default, Clone, Debug)]
#[graphql(name = "CityWhereInput")]
pub struct CityWhereInput {
    #[graphql(name = "Not")]
    pub not: Option<Box<CityWhereInput>>,
    #[graphql(name = "And")]
    pub and: Option<Vec<CityWhereInput>>,
    #[graphql(name = "Or")]
    pub or: Option<Vec<CityWhereInput>>,

    #[graphql(name = "Id")]
    pub id: Option<IdFilter>,
    #[graphql(name = "CreatedAt")]
    pub created_at: Option<DateFilter>,
    #[graphql(name = "UpdatedAt")]
    pub updated_at: Option<DateFilter>,
    #[graphql(name = "Name")]
    pub name: Option<StringFilter>,

    #[graphql(name = "HasState")]
    pub has_state: Option<bool>,
    #[graphql(name = "HasStateWith")]
    pub has_state_with: Option<Vec<StateWhereInput>>,
    #[graphql(name = "HasAirports")]
    pub has_airports: Option<bool>,
    #[graphql(name = "HasAirportsWith")]
    pub has_airports_with: Option<Vec<AirportWhereInput>>,
}

impl DatabaseFilter for CityWhereInput {
    type Entity = City;

    fn to_predicate(&self) -> Result<Predicate<City>, PredicateError> {
        Ok(WhereBuilder::new()
            .combinators(&self.not, &self.and, &self.or)?
            .field(City::ID, &self.id)?
            .field(City::CREATED_AT, &self.created_at)?
            .field(City::UPDATED_AT, &self.updated_at)?
            .field(City::NAME, &self.name)?
            .edge(City::STATE, self.has_state, &self.has_state_with)?
            .edge(City::AIRPORTS, self.has_airports, &self.has_airports_with)?
            .build())
    }
}

#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq)]
#[graphql(name = "CityOrderField")]
pub enum CityOrderField {
    #[graphql(name = "Name")]
    Name,
    #[graphql(name = "CreatedAt")]
    CreatedAt,
    #[graphql(name = "UpdatedAt")]
    UpdatedAt,
}

impl SortField for CityOrderField {
    fn column(&self) -> &'static str {
        match self {
            CityOrderField::Name => "name",
            CityOrderField::CreatedAt => "created_at",
            CityOrderField::UpdatedAt => "updated_at",
        }
    }
}

pub type CityOrder = Order<CityOrderField>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphql::entities::fixtures;
    use crate::orm::{and, not, or};
    use pretty_assertions::assert_eq;

    async fn names(db: &Database, predicate: Predicate<City>) -> Vec<String> {
        EntityQuery::<City>::new()
            .filter(predicate)
            .default_order()
            .fetch_all(db.pool())
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect()
    }

    #[tokio::test]
    async fn test_prefix_selects_chicago() {
        let db = fixtures::seeded().await;
        assert_eq!(names(&db, City::NAME.has_prefix("Ch")).await, vec!["Chicago"]);
    }

    #[tokio::test]
    async fn test_contains_and_not_equal_fold() {
        let db = fixtures::seeded().await;
        let predicate = and([
            City::NAME.contains("o"),
            not(City::NAME.equal_fold("denver")),
        ]);
        assert_eq!(names(&db, predicate).await, vec!["Chicago"]);
    }

    #[tokio::test]
    async fn test_empty_combinators() {
        let db = fixtures::seeded().await;
        assert_eq!(names(&db, and([])).await, vec!["Chicago", "Denver", "Springfield"]);
        assert!(names(&db, or([])).await.is_empty());
    }

    #[tokio::test]
    async fn test_in_matches_or_of_eq() {
        let db = fixtures::seeded().await;
        let via_in = names(&db, City::NAME.is_in(["Denver", "Chicago"])).await;
        let via_or = names(
            &db,
            or([City::NAME.eq("Denver"), City::NAME.eq("Chicago")]),
        )
        .await;
        assert_eq!(via_in, via_or);
        assert_eq!(via_in, vec!["Chicago", "Denver"]);

        let empty: [&str; 0] = [];
        assert!(names(&db, City::NAME.is_in(empty)).await.is_empty());
        assert_eq!(names(&db, City::NAME.not_in(empty)).await.len(), 3);
    }

    #[tokio::test]
    async fn test_pattern_case_sensitivity() {
        let db = fixtures::seeded().await;
        assert!(names(&db, City::NAME.has_prefix("ch")).await.is_empty());
        assert_eq!(names(&db, City::NAME.has_suffix("ver")).await, vec!["Denver"]);
        assert_eq!(names(&db, City::NAME.contains_fold("CAGO")).await, vec!["Chicago"]);
    }

    #[tokio::test]
    async fn test_or_groups_inside_and() {
        let db = fixtures::seeded().await;
        // Without grouping this would also return Springfield
        let predicate = and([
            City::NAME.has_prefix("C"),
            or([City::NAME.eq("Chicago"), City::NAME.eq("Springfield")]),
        ]);
        assert_eq!(names(&db, predicate).await, vec!["Chicago"]);
    }

    #[tokio::test]
    async fn test_edges_both_directions() {
        let db = fixtures::seeded().await;
        let in_illinois = City::STATE.has_with([State::NAME.equal_fold("illinois")]);
        assert_eq!(names(&db, in_illinois).await, vec!["Chicago", "Springfield"]);

        assert_eq!(names(&db, not(City::AIRPORTS.has())).await, vec!["Springfield"]);
        assert_eq!(
            City::STATE.has_with(Vec::<Predicate<State>>::new()),
            City::STATE.has()
        );
    }
}
