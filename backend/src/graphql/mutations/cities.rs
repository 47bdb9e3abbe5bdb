use super::prelude::*;

#[derive(InputObject, Debug)]
#[graphql(name = "CreateCityInput")]
pub struct CreateCityInput {
    #[graphql(name = "Name")]
    pub name: String,
    #[graphql(name = "StateId")]
    pub state_id: Option<String>,
}

#[derive(InputObject, Debug, Default)]
#[graphql(name = "UpdateCityInput")]
pub struct UpdateCityInput {
    #[graphql(name = "Name")]
    pub name: Option<String>,
    #[graphql(name = "StateId")]
    pub state_id: Option<String>,
    /// Detach the city from its state
    #[graphql(name = "ClearState")]
    pub clear_state: Option<bool>,
}

#[derive(Default)]
pub struct CityMutations;

#[Object]
impl CityMutations {
    #[graphql(name = "CreateCity")]
    async fn create_city(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "Input")] input: CreateCityInput,
    ) -> Result<City> {
        let db = ctx.data_unchecked::<Database>();
        let now = now();
        let city = City {
            id: new_id(),
            created_at: now,
            updated_at: now,
            name: input.name,
            state_id: input.state_id,
        };

        let mut tx = db.begin().await.gql()?;
        check_reference(&mut *tx, City::STATE, city.state_id.as_deref())
            .await
            .gql()?;
        repository::insert(&mut *tx, &city).await.gql()?;
        tx.commit().await.gql()?;

        tracing::info!(id = %city.id, name = %city.name, "Created city");
        Ok(city)
    }

    #[graphql(name = "UpdateCity")]
    async fn update_city(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "Id")] id: String,
        #[graphql(name = "Input")] input: UpdateCityInput,
    ) -> Result<City> {
        let db = ctx.data_unchecked::<Database>();
        let mut tx = db.begin().await.gql()?;

        let mut city = require::<City, _>(&mut *tx, &id).await.gql()?;
        if let Some(name) = input.name {
            city.name = name;
        }
        set_nullable::<City, _>(
            &mut city.state_id,
            "state_id",
            input.state_id,
            input.clear_state,
        )
        .gql()?;
        check_reference(&mut *tx, City::STATE, city.state_id.as_deref())
            .await
            .gql()?;
        repository::update_by_id(&mut *tx, &id, &city).await.gql()?;

        let city = require::<City, _>(&mut *tx, &id).await.gql()?;
        tx.commit().await.gql()?;
        Ok(city)
    }

    /// Returns the deleted ID. Airports in the city are detached, not deleted.
    #[graphql(name = "DeleteCity")]
    async fn delete_city(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "Id")] id: String,
    ) -> Result<String> {
        let db = ctx.data_unchecked::<Database>();
        delete_entity::<City>(db, &id).await.gql()
    }
}
