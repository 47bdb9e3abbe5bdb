use super::prelude::*;

#[derive(Default)]
pub struct CountryQueries;

#[Object]
impl CountryQueries {
    /// List countries
    #[graphql(name = "Countries")]
    async fn countries(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "Where")] where_input: Option<CountryWhereInput>,
        #[graphql(name = "Conditions")] conditions: Option<Json<Value>>,
        #[graphql(name = "OrderBy")] order_by: Option<Vec<CountryOrder>>,
        #[graphql(name = "First")] first: Option<i32>,
        #[graphql(name = "After")] after: Option<String>,
    ) -> Result<CountryConnection> {
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
        .map(CountryConnection::from)
        .gql()
    }

    /// Get a country by ID
    #[graphql(name = "Country")]
    async fn country(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "Id")] id: String,
    ) -> Result<Option<Country>> {
        let db = ctx.data_unchecked::<Database>();
        repository::get_by_id::<Country, _>(db.pool(), &id).await.gql()
    }
}
