// Helper functions shared across GraphQL query/mutation modules.

use async_graphql::ErrorExtensions;
use serde_json::Value;
use sqlx::Sqlite;
use uuid::Uuid;

use crate::orm::repository;
use crate::orm::{
    DatabaseEntity, FromSqlRow, OrmError, Predicate, PredicateError, Relation,
    predicate::dynamic,
};

/// Convert ORM results into GraphQL results, keeping the error `code` extension.
pub(crate) trait ResultExt<T> {
    fn gql(self) -> async_graphql::Result<T>;
}

impl<T, E: Into<OrmError>> ResultExt<T> for Result<T, E> {
    fn gql(self) -> async_graphql::Result<T> {
        self.map_err(|e| {
            let e: OrmError = e.into();
            e.extend()
        })
    }
}

/// Fresh primary key for a new row
pub(crate) fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// Load a row by primary key, failing with NOT_FOUND.
pub(crate) async fn require<'e, E, X>(executor: X, id: &str) -> Result<E, OrmError>
where
    E: DatabaseEntity + FromSqlRow,
    X: sqlx::Executor<'e, Database = Sqlite>,
{
    repository::get_by_id::<E, _>(executor, id)
        .await?
        .ok_or_else(|| OrmError::NotFound {
            entity: E::TYPE_NAME,
            id: id.to_string(),
        })
}

/// Check that a foreign reference about to be written points at a real row.
pub(crate) async fn check_reference<'e, E, T, X>(
    executor: X,
    relation: Relation<E, T>,
    id: Option<&str>,
) -> Result<(), OrmError>
where
    E: DatabaseEntity,
    T: DatabaseEntity + FromSqlRow,
    X: sqlx::Executor<'e, Database = Sqlite>,
{
    let Some(id) = id else {
        return Ok(());
    };
    if repository::exists::<T, _>(executor, id).await? {
        return Ok(());
    }
    let def = relation.def();
    Err(PredicateError::invalid(
        E::TYPE_NAME,
        def.column,
        format!("no {} with id \"{}\"", T::TYPE_NAME, id),
    )
    .into())
}

/// Build the predicate for the `Conditions` argument of list queries.
pub(crate) fn conditions_predicate<E: DatabaseEntity>(
    conditions: Option<&Value>,
) -> Result<Predicate<E>, PredicateError> {
    match conditions {
        Some(conditions) => dynamic::from_json::<E>(conditions),
        None => Ok(Predicate::all()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphql::entities::{City, State, fixtures};
    use assert_matches::assert_matches;

    #[tokio::test]
    async fn test_require_reports_not_found() {
        let db = fixtures::seeded().await;
        let err = require::<State, _>(db.pool(), "missing").await.unwrap_err();
        assert_matches!(err, OrmError::NotFound { entity: "State", .. });
    }

    #[tokio::test]
    async fn test_check_reference() {
        let db = fixtures::seeded().await;
        check_reference(db.pool(), City::STATE, None).await.unwrap();

        let err = check_reference(db.pool(), City::STATE, Some("nope"))
            .await
            .unwrap_err();
        assert_matches!(
            err,
            OrmError::Predicate(PredicateError::InvalidArgument { entity: "City", ref field, .. })
                if field == "state_id"
        );
    }

    #[test]
    fn test_gql_keeps_code() {
        let result: Result<(), PredicateError> = Err(PredicateError::UnknownField {
            entity: "City",
            field: "population".to_string(),
        });
        let err = result.gql().unwrap_err();
        let code = err
            .extensions
            .as_ref()
            .and_then(|ext| ext.get("code"))
            .cloned();
        assert_eq!(code, Some(async_graphql::Value::from("UNKNOWN_FIELD")));
    }
}
