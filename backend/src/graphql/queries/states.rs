use super::prelude::*;

#[derive(Default)]
pub struct StateQueries;

#[Object]
impl StateQueries {
    /// List states
    #[graphql(name = "States")]
    async fn states(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "Where")] where_input: Option<StateWhereInput>,
        #[graphql(name = "Conditions")] conditions: Option<Json<Value>>,
        #[graphql(name = "OrderBy")] order_by: Option<Vec<StateOrder>>,
        #[graphql(name = "First")] first: Option<i32>,
        #[graphql(name = "After")] after: Option<String>,
    ) -> Result<StateConnection> {
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
        .map(StateConnection::from)
        .gql()
    }

    /// Get a state by ID
    #[graphql(name = "State")]
    async fn state(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "Id")] id: String,
    ) -> Result<Option<State>> {
        let db = ctx.data_unchecked::<Database>();
        repository::get_by_id::<State, _>(db.pool(), &id).await.gql()
    }
}
