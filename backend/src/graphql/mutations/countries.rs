use super::prelude::*;

#[derive(InputObject, Debug)]
#[graphql(name = "CreateCountryInput")]
pub struct CreateCountryInput {
    /// ISO country code
    #[graphql(name = "Code")]
    pub code: String,
    #[graphql(name = "Name")]
    pub name: String,
}

#[derive(InputObject, Debug, Default)]
#[graphql(name = "UpdateCountryInput")]
pub struct UpdateCountryInput {
    #[graphql(name = "Code")]
    pub code: Option<String>,
    #[graphql(name = "Name")]
    pub name: Option<String>,
}

#[derive(Default)]
pub struct CountryMutations;

#[Object]
impl CountryMutations {
    #[graphql(name = "CreateCountry")]
    async fn create_country(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "Input")] input: CreateCountryInput,
    ) -> Result<Country> {
        let db = ctx.data_unchecked::<Database>();
        let now = now();
        let country = Country {
            id: new_id(),
            created_at: now,
            updated_at: now,
            code: input.code,
            name: input.name,
        };

        let mut tx = db.begin().await.gql()?;
        repository::insert(&mut *tx, &country).await.gql()?;
        tx.commit().await.gql()?;

        tracing::info!(id = %country.id, "Created country");
        Ok(country)
    }

    #[graphql(name = "UpdateCountry")]
    async fn update_country(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "Id")] id: String,
        #[graphql(name = "Input")] input: UpdateCountryInput,
    ) -> Result<Country> {
        let db = ctx.data_unchecked::<Database>();
        let mut tx = db.begin().await.gql()?;

        let mut country = require::<Country, _>(&mut *tx, &id).await.gql()?;
        if let Some(code) = input.code {
            country.code = code;
        }
        if let Some(name) = input.name {
            country.name = name;
        }
        repository::update_by_id(&mut *tx, &id, &country).await.gql()?;

        let country = require::<Country, _>(&mut *tx, &id).await.gql()?;
        tx.commit().await.gql()?;
        Ok(country)
    }

    /// Returns the deleted ID
    #[graphql(name = "DeleteCountry")]
    async fn delete_country(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "Id")] id: String,
    ) -> Result<String> {
        let db = ctx.data_unchecked::<Database>();
        delete_entity::<Country>(db, &id).await.gql()
    }
}
