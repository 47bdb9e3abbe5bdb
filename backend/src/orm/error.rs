//! Error types for predicate construction and query execution.

use async_graphql::ErrorExtensions;

/// Raised while building a predicate, before anything reaches the database.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PredicateError {
    /// A literal violates the declared domain of a field
    #[error("invalid argument for {entity}.{field}: {reason}")]
    InvalidArgument {
        entity: &'static str,
        field: String,
        reason: String,
    },

    /// A field name the entity does not declare
    #[error("{entity} has no field named \"{field}\"")]
    UnknownField { entity: &'static str, field: String },

    /// A relation name the entity does not declare
    #[error("{entity} has no relation named \"{relation}\"")]
    UnknownRelation {
        entity: &'static str,
        relation: String,
    },
}

impl PredicateError {
    pub fn invalid(
        entity: &'static str,
        field: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidArgument {
            entity,
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Machine-readable code exposed in GraphQL error extensions
    pub fn code(&self) -> &'static str {
        match self {
            PredicateError::InvalidArgument { .. } => "INVALID_ARGUMENT",
            PredicateError::UnknownField { .. } => "UNKNOWN_FIELD",
            PredicateError::UnknownRelation { .. } => "UNKNOWN_RELATION",
        }
    }
}

/// Errors surfaced by the query builder and repository helpers.
#[derive(Debug, thiserror::Error)]
pub enum OrmError {
    #[error(transparent)]
    Predicate(#[from] PredicateError),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("invalid cursor: {0}")]
    Cursor(&'static str),

    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: String },
}

impl OrmError {
    pub fn code(&self) -> &'static str {
        match self {
            OrmError::Predicate(e) => e.code(),
            OrmError::Database(_) => "DATABASE_ERROR",
            OrmError::Cursor(_) => "INVALID_CURSOR",
            OrmError::NotFound { .. } => "NOT_FOUND",
        }
    }
}

impl ErrorExtensions for PredicateError {
    fn extend(&self) -> async_graphql::Error {
        let code = self.code();
        async_graphql::Error::new(self.to_string()).extend_with(|_, e| e.set("code", code))
    }
}

impl ErrorExtensions for OrmError {
    fn extend(&self) -> async_graphql::Error {
        if let OrmError::Database(e) = self {
            tracing::error!(error = %e, "Database query failed");
        }
        let code = self.code();
        async_graphql::Error::new(self.to_string()).extend_with(|_, e| e.set("code", code))
    }
}
