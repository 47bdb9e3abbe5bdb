//! Create/Update/Delete per entity
//!
//! Every mutation runs in one transaction taken from [Database::begin]. Any
//! early return drops the transaction, which rolls it back.

pub mod airports;
pub mod cities;
pub mod countries;
pub mod regions;
pub mod states;

pub use airports::AirportMutations;
pub use cities::CityMutations;
pub use countries::CountryMutations;
pub use regions::RegionMutations;
pub use states::StateMutations;

use crate::db::Database;
use crate::orm::{DatabaseEntity, OrmError, PredicateError, repository};

pub(crate) mod prelude {
    pub(crate) use async_graphql::{Context, InputObject, Object, Result};

    pub(crate) use super::{delete_entity, set_nullable};
    pub(crate) use crate::db::Database;
    pub(crate) use crate::graphql::entities::*;
    pub(crate) use crate::graphql::helpers::*;
    pub(crate) use crate::orm::{DatabaseEntity, now, repository};
}

/// Apply a `X` / `ClearX` pair from an update input to a nullable column.
pub(crate) fn set_nullable<E: DatabaseEntity, V>(
    current: &mut Option<V>,
    field: &'static str,
    set: Option<V>,
    clear: Option<bool>,
) -> Result<(), PredicateError> {
    match (set, clear.unwrap_or(false)) {
        (Some(_), true) => Err(PredicateError::invalid(
            E::TYPE_NAME,
            field,
            "cannot set and clear the same field",
        )),
        (Some(id), false) => {
            *current = Some(id);
            Ok(())
        }
        (None, true) => {
            *current = None;
            Ok(())
        }
        (None, false) => Ok(()),
    }
}

/// Delete by ID in its own transaction, returning the ID.
pub(crate) async fn delete_entity<E: DatabaseEntity>(
    db: &Database,
    id: &str,
) -> Result<String, OrmError> {
    let mut tx = db.begin().await?;
    if !repository::delete_by_id::<E, _>(&mut *tx, id).await? {
        return Err(OrmError::NotFound {
            entity: E::TYPE_NAME,
            id: id.to_string(),
        });
    }
    tx.commit().await?;

    tracing::info!(entity = E::TYPE_NAME, id = %id, "Deleted");
    Ok(id.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphql::entities::{City, State, fixtures};
    use crate::orm::EntityQuery;
    use assert_matches::assert_matches;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_set_nullable() {
        let mut state_id = Some("a".to_string());
        set_nullable::<City, _>(&mut state_id, "state_id", None, None).unwrap();
        assert_eq!(state_id.as_deref(), Some("a"));

        set_nullable::<City, _>(&mut state_id, "state_id", Some("b".to_string()), None).unwrap();
        assert_eq!(state_id.as_deref(), Some("b"));

        set_nullable::<City, _>(&mut state_id, "state_id", None, Some(true)).unwrap();
        assert_eq!(state_id, None);

        let both = Some("c".to_string());
        let err = set_nullable::<City, _>(&mut state_id, "state_id", both, Some(true));
        assert_matches!(err, Err(PredicateError::InvalidArgument { entity: "City", .. }));
    }

    #[tokio::test]
    async fn test_delete_detaches_children() {
        let db = fixtures::seeded().await;
        let illinois = EntityQuery::<State>::new()
            .filter(State::CODE.eq("IL"))
            .fetch_optional(db.pool())
            .await
            .unwrap()
            .unwrap();

        delete_entity::<State>(&db, &illinois.id).await.unwrap();

        let orphans = EntityQuery::<City>::new()
            .filter(crate::orm::not(City::STATE.has()))
            .count(db.pool())
            .await
            .unwrap();
        assert_eq!(orphans, 2);

        let again = delete_entity::<State>(&db, &illinois.id).await;
        assert_matches!(again, Err(OrmError::NotFound { entity: "State", .. }));
    }
}
