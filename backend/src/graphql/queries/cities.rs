use super::prelude::*;

#[derive(Default)]
pub struct CityQueries;

#[Object]
impl CityQueries {
    /// List cities
    #[graphql(name = "Cities")]
    async fn cities(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "Where")] where_input: Option<CityWhereInput>,
        #[graphql(name = "Conditions")] conditions: Option<Json<Value>>,
        #[graphql(name = "OrderBy")] order_by: Option<Vec<CityOrder>>,
        #[graphql(name = "First")] first: Option<i32>,
        #[graphql(name = "After")] after: Option<String>,
    ) -> Result<CityConnection> {
        let db = ctx.data_unchecked::<Database>();
        list(
            db,
            where_input.as_ref(),
            conditions.as_deref(),
            order_by.as_deref(),
            first,
            after.as_deref(),
        )
        .await
        .map(CityConnection::from)
        .gql()
    }

    /// Get a city by ID
    #[graphql(name = "City")]
    async fn city(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "Id")] id: String,
    ) -> Result<Option<City>> {
        let db = ctx.data_unchecked::<Database>();
        repository::get_by_id::<City, _>(db.pool(), &id).await.gql()
    }
}
