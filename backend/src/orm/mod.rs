//! ORM Layer
//!
//! Entities describe themselves statically (`DatabaseEntity`): columns with
//! their scalar kinds and a relation registry. On top of that:
//! - `predicate`: typed and name-based filter construction with And/Or/Not
//! - `builder`: `EntityQuery`, which lowers a predicate and runs it
//! - `repository`: insert/update/delete and primary-key lookups
//!
//! ```rust,ignore
//! let airports = EntityQuery::<Airport>::new()
//!     .filter(Airport::STATE.has_with([State::NAME.equal_fold("illinois")]))
//!     .default_order()
//!     .fetch_all(db.pool())
//!     .await?;
//! ```

mod builder;
pub mod error;
pub mod predicate;
pub mod repository;
mod traits;

pub use builder::*;
pub use error::{OrmError, PredicateError};
pub use predicate::{Column, FieldEnum, Predicate, Relation, and, not, or};
pub use traits::*;
