use super::prelude::*;

#[derive(Default)]
pub struct AirportQueries;

#[Object]
impl AirportQueries {
    /// List airports
    ///
    /// `Conditions` takes name-based filters as JSON, e.g.
    /// `[{"has": "state", "with": [{"field": "code", "op": "EQ", "value": "IL"}]}]`.
    #[graphql(name = "Airports")]
    async fn airports(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "Where")] where_input: Option<AirportWhereInput>,
        #[graphql(name = "Conditions")] conditions: Option<Json<Value>>,
        #[graphql(name = "OrderBy")] order_by: Option<Vec<AirportOrder>>,
        #[graphql(name = "First")] first: Option<i32>,
        #[graphql(name = "After")] after: Option<String>,
    ) -> Result<AirportConnection> {
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
        .map(AirportConnection::from)
        .gql()
    }

    /// Get an airport by ID
    #[graphql(name = "Airport")]
    async fn airport(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "Id")] id: String,
    ) -> Result<Option<Airport>> {
        let db = ctx.data_unchecked::<Database>();
        repository::get_by_id::<Airport, _>(db.pool(), &id).await.gql()
    }
}
