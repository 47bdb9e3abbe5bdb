pub mod airports;
pub mod cities;
pub mod countries;
pub mod regions;
pub mod states;

pub use airports::AirportQueries;
pub use cities::CityQueries;
pub use countries::CountryQueries;
pub use regions::RegionQueries;
pub use states::StateQueries;

use serde_json::Value;

use crate::db::Database;
use crate::graphql::helpers::conditions_predicate;
use crate::graphql::pagination::{Connection, parse_pagination_args};
use crate::orm::{
    DatabaseEntity, DatabaseFilter, DatabaseOrderBy, EntityQuery, FromSqlRow, OrmError,
};

pub(crate) mod prelude {
    pub(crate) use async_graphql::{Context, Json, Object, Result};

    pub(crate) use super::list;
    pub(crate) use crate::db::Database;
    pub(crate) use crate::graphql::entities::*;
    pub(crate) use crate::graphql::helpers::*;
    pub(crate) use serde_json::Value;
    pub(crate) use crate::orm::repository;
}

/// Shared body of the list queries: `Where` and `Conditions` are ANDed, then
/// `OrderBy` (or the entity's default order) and the page window apply.
pub(crate) async fn list<E, W, O>(
    db: &Database,
    where_input: Option<&W>,
    conditions: Option<&Value>,
    order_by: Option<&[O]>,
    first: Option<i32>,
    after: Option<&str>,
) -> Result<Connection<E>, OrmError>
where
    E: DatabaseEntity + FromSqlRow,
    W: DatabaseFilter<Entity = E>,
    O: DatabaseOrderBy,
{
    let (offset, limit) = parse_pagination_args(first, after)?;

    let mut query = EntityQuery::<E>::new()
        .where_input(where_input)?
        .filter(conditions_predicate::<E>(conditions)?);
    for order in order_by.unwrap_or_default() {
        query = query.order_by(order);
    }

    query
        .default_order()
        .paginate(offset, limit)
        .fetch_connection(db.pool())
        .await
}
