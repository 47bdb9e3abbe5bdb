use super::prelude::*;

#[derive(Default)]
pub struct RegionQueries;

#[Object]
impl RegionQueries {
    /// List FAA regions
    #[graphql(name = "Regions")]
    async fn regions(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "Where")] where_input: Option<RegionWhereInput>,
        #[graphql(name = "Conditions")] conditions: Option<Json<Value>>,
        #[graphql(name = "OrderBy")] order_by: Option<Vec<RegionOrder>>,
        #[graphql(name = "First")] first: Option<i32>,
        #[graphql(name = "After")] after: Option<String>,
    ) -> Result<RegionConnection> {
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
        .map(RegionConnection::from)
        .gql()
    }

    /// Get a region by ID
    #[graphql(name = "Region")]
    async fn region(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "Id")] id: String,
    ) -> Result<Option<Region>> {
        let db = ctx.data_unchecked::<Database>();
        repository::get_by_id::<Region, _>(db.pool(), &id).await.gql()
    }
}
