use super::prelude::*;

#[derive(InputObject, Debug)]
#[graphql(name = "CreateStateInput")]
pub struct CreateStateInput {
    /// Postal code (e.g. IL)
    #[graphql(name = "Code")]
    pub code: String,
    #[graphql(name = "Name")]
    pub name: String,
}

#[derive(InputObject, Debug, Default)]
#[graphql(name = "UpdateStateInput")]
pub struct UpdateStateInput {
    #[graphql(name = "Code")]
    pub code: Option<String>,
    #[graphql(name = "Name")]
    pub name: Option<String>,
}

#[derive(Default)]
pub struct StateMutations;

#[Object]
impl StateMutations {
    #[graphql(name = "CreateState")]
    async fn create_state(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "Input")] input: CreateStateInput,
    ) -> Result<State> {
        let db = ctx.data_unchecked::<Database>();
        let now = now();
        let state = State {
            id: new_id(),
            created_at: now,
            updated_at: now,
            code: input.code,
            name: input.name,
        };

        let mut tx = db.begin().await.gql()?;
        repository::insert(&mut *tx, &state).await.gql()?;
        tx.commit().await.gql()?;

        tracing::info!(id = %state.id, code = %state.code, "Created state");
        Ok(state)
    }

    #[graphql(name = "UpdateState")]
    async fn update_state(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "Id")] id: String,
        #[graphql(name = "Input")] input: UpdateStateInput,
    ) -> Result<State> {
        let db = ctx.data_unchecked::<Database>();
        let mut tx = db.begin().await.gql()?;

        let mut state = require::<State, _>(&mut *tx, &id).await.gql()?;
        if let Some(code) = input.code {
            state.code = code;
        }
        if let Some(name) = input.name {
            state.name = name;
        }
        repository::update_by_id(&mut *tx, &id, &state).await.gql()?;

        let state = require::<State, _>(&mut *tx, &id).await.gql()?;
        tx.commit().await.gql()?;
        Ok(state)
    }

    /// Returns the deleted ID
    #[graphql(name = "DeleteState")]
    async fn delete_state(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "Id")] id: String,
    ) -> Result<String> {
        let db = ctx.data_unchecked::<Database>();
        delete_entity::<State>(db, &id).await.gql()
    }
}
