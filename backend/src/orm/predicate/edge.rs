//! Typed relation handles for existence predicates.

use std::marker::PhantomData;

use super::{Node, Predicate};
use crate::orm::traits::{Cardinality, DatabaseEntity, EntityMeta, RelationDef};

/// One traversal from a source table to a related table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub from_table: &'static str,
    pub from_id: &'static str,
    pub to_table: &'static str,
    pub to_id: &'static str,
    pub cardinality: Cardinality,
    /// Foreign key column, on `from_table` for many-to-one and on `to_table` otherwise
    pub column: &'static str,
}

impl Step {
    pub fn new(from: &EntityMeta, relation: &RelationDef) -> Self {
        Self {
            from_table: from.table,
            from_id: from.primary_key,
            to_table: relation.target.table,
            to_id: relation.target.primary_key,
            cardinality: relation.cardinality,
            column: relation.column,
        }
    }
}

/// Handle on a declared relation from `E` to `T`.
pub struct Relation<E, T> {
    def: RelationDef,
    _marker: PhantomData<fn() -> (E, T)>,
}

impl<E, T> Clone for Relation<E, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E, T> Copy for Relation<E, T> {}

impl<E: DatabaseEntity, T: DatabaseEntity> Relation<E, T> {
    pub const fn new(name: &'static str, cardinality: Cardinality, column: &'static str) -> Self {
        Self {
            def: RelationDef {
                name,
                target: EntityMeta::of::<T>(),
                cardinality,
                column,
            },
            _marker: PhantomData,
        }
    }

    /// Registry entry for this relation
    pub const fn def(&self) -> RelationDef {
        self.def
    }

    fn step(&self) -> Step {
        Step::new(&E::meta(), &self.def)
    }

    /// Rows with at least one related `T`.
    pub fn has(self) -> Predicate<E> {
        Predicate::from_node(Node::Edge {
            step: self.step(),
            nested: None,
        })
    }

    /// Rows with a related `T` satisfying every predicate in `preds`.
    pub fn has_with(self, preds: impl IntoIterator<Item = Predicate<T>>) -> Predicate<E> {
        let nested = Node::and(preds.into_iter().map(Predicate::into_node));
        Predicate::from_node(edge_node(self.step(), nested))
    }
}

pub(crate) fn edge_node(step: Step, nested: Node) -> Node {
    match nested {
        Node::All => Node::Edge { step, nested: None },
        nested => Node::Edge {
            step,
            nested: Some(Box::new(nested)),
        },
    }
}
