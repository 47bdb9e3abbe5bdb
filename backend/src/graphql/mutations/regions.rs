use super::prelude::*;

#[derive(InputObject, Debug)]
#[graphql(name = "CreateRegionInput")]
pub struct CreateRegionInput {
    /// FAA region code (e.g. AGL)
    #[graphql(name = "Code")]
    pub code: String,
    #[graphql(name = "Name")]
    pub name: String,
}

#[derive(InputObject, Debug, Default)]
#[graphql(name = "UpdateRegionInput")]
pub struct UpdateRegionInput {
    #[graphql(name = "Code")]
    pub code: Option<String>,
    #[graphql(name = "Name")]
    pub name: Option<String>,
}

#[derive(Default)]
pub struct RegionMutations;

#[Object]
impl RegionMutations {
    #[graphql(name = "CreateRegion")]
    async fn create_region(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "Input")] input: CreateRegionInput,
    ) -> Result<Region> {
        let db = ctx.data_unchecked::<Database>();
        let now = now();
        let region = Region {
            id: new_id(),
            created_at: now,
            updated_at: now,
            code: input.code,
            name: input.name,
        };

        let mut tx = db.begin().await.gql()?;
        repository::insert(&mut *tx, &region).await.gql()?;
        tx.commit().await.gql()?;

        tracing::info!(id = %region.id, code = %region.code, "Created region");
        Ok(region)
    }

    #[graphql(name = "UpdateRegion")]
    async fn update_region(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "Id")] id: String,
        #[graphql(name = "Input")] input: UpdateRegionInput,
    ) -> Result<Region> {
        let db = ctx.data_unchecked::<Database>();
        let mut tx = db.begin().await.gql()?;

        let mut region = require::<Region, _>(&mut *tx, &id).await.gql()?;
        if let Some(code) = input.code {
            region.code = code;
        }
        if let Some(name) = input.name {
            region.name = name;
        }
        repository::update_by_id(&mut *tx, &id, &region).await.gql()?;

        let region = require::<Region, _>(&mut *tx, &id).await.gql()?;
        tx.commit().await.gql()?;
        Ok(region)
    }

    /// Returns the deleted ID
    #[graphql(name = "DeleteRegion")]
    async fn delete_region(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "Id")] id: String,
    ) -> Result<String> {
        let db = ctx.data_unchecked::<Database>();
        delete_entity::<Region>(db, &id).await.gql()
    }
}
