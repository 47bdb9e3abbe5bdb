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
    FromSqlRow, Predicate, PredicateError, RelationDef, Relation, SqlValue, ToSqlRow, row_time,
};

use super::airport::{Airport, AirportWhereInput};

/// FAA administrative region
#[derive(SimpleObject, Clone, Debug, Serialize)]
#[graphql(name = "Region", complex)]
#[serde(rename_all = "PascalCase")]
pub struct Region {
    #[graphql(name = "Id")]
    pub id: String,

    #[graphql(name = "CreatedAt")]
    pub created_at: DateTime<Utc>,

    #[graphql(name = "UpdatedAt")]
    pub updated_at: DateTime<Utc>,

    /// Region code (e.g. AGL)
    #[graphql(name = "Code")]
    pub code: String,

    #[graphql(name = "Name")]
    pub name: String,
}

impl Region {
    pub const ID: Column<Region, Key> = Column::new("id");
    pub const CREATED_AT: Column<Region, Time> = Column::new("created_at");
    pub const UPDATED_AT: Column<Region, Time> = Column::new("updated_at");
    pub const CODE: Column<Region, Text> = Column::new("code");
    pub const NAME: Column<Region, Text> = Column::new("name");

    pub const AIRPORTS: Relation<Region, Airport> =
        Relation::new("airports", Cardinality::OneToMany, "region_id");
}

impl DatabaseEntity for Region {
    const TABLE_NAME: &'static str = "regions";
    const TYPE_NAME: &'static str = "Region";
    const PLURAL_NAME: &'static str = "Regions";
    const DEFAULT_SORT: &'static str = "code";

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
        const RELATIONS: &[RelationDef] = &[Region::AIRPORTS.def()];
        RELATIONS
    }
}

impl FromSqlRow for Region {
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

impl ToSqlRow for Region {
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
impl Region {
    /// Airports administered by this region
    #[graphql(name = "Airports")]
    async fn airports(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "Where")] where_input: Option<AirportWhereInput>,
    ) -> async_graphql::Result<Vec<Airport>> {
        let db = ctx.data_unchecked::<Database>();
        EntityQuery::<Airport>::new()
            .filter(Airport::REGION.has_with([Region::ID.eq(self.id.clone())]))
            .where_input(where_input.as_ref())
            .map_err(|e| e.extend())?
            .default_order()
            .fetch_all(db.pool())
            .await
            .map_err(|e| e.extend())
    }
}

define_connection!(RegionConnection, RegionEdge, Region);

#[derive(InputObject, Default, Clone, Debug)]
#[graphql(name = "RegionWhereInput")]
pub struct RegionWhereInput {
    #[graphql(name = "Not")]
    pub not: Option<Box<RegionWhereInput>>,
    #[graphql(name = "And")]
    pub and: Option<Vec<RegionWhereInput>>,
    #[graphql(name = "Or")]
    pub or: Option<Vec<RegionWhereInput>>,

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

    /// Has at least one airport (false: has none)
    #[graphql(name = "HasAirports")]
    pub has_airports: Option<bool>,
    /// Has an airport matching every input
    #[graphql(name = "HasAirportsWith")]
    pub has_airports_with: Option<Vec<AirportWhereInput>>,
}

impl DatabaseFilter for RegionWhereInput {
    type Entity = Region;

    fn to_predicate(&self) -> Result<Predicate<Region>, PredicateError> {
        Ok(WhereBuilder::new()
            .combinators(&self.not, &self.and, &self.or)?
            .field(Region::ID, &self.id)?
            .field(Region::CREATED_AT, &self.created_at)?
            .field(Region::UPDATED_AT, &self.updated_at)?
            .field(Region::CODE, &self.code)?
            .field(Region::NAME, &self.name)?
            .edge(Region::AIRPORTS, self.has_airports, &self.has_airports_with)?
            .build())
    }
}

#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq)]
#[graphql(name = "RegionOrderField")]
pub enum RegionOrderField {
    #[graphql(name = "Code")]
    Code,
    #[graphql(name = "Name")]
    Name,
    #[graphql(name = "CreatedAt")]
    CreatedAt,
    #[graphql(name = "UpdatedAt")]
    UpdatedAt,
}

impl SortField for RegionOrderField {
    fn column(&self) -> &'static str {
        match self {
            RegionOrderField::Code => "code",
            RegionOrderField::Name => "name",
            RegionOrderField::CreatedAt => "created_at",
            RegionOrderField::UpdatedAt => "updated_at",
        }
    }
}

pub type RegionOrder = Order<RegionOrderField>;
