//! Composable filter predicates
//!
//! A [Predicate] is an immutable tree over one entity type. Leaves come from
//! typed [Column] and [Relation] handles declared on each entity (or from the
//! registry-driven [dynamic] path); branches come from [and], [or] and [not].
//! The tree is lowered to SQL by [Selector] only when a query executes.
//!
//! ```rust,ignore
//! let filter = and([
//!     City::NAME.contains("o"),
//!     not(City::NAME.equal_fold("denver")),
//! ]);
//! let cities = EntityQuery::<City>::new().filter(filter).fetch_all(db.pool()).await?;
//! ```

pub mod dynamic;
mod edge;
mod field;
mod selector;

use std::fmt;
use std::marker::PhantomData;

pub use edge::{Relation, Step};
pub use field::{Column, Enum, FieldEnum, FieldKind, Flag, Float, Int, Key, Ordered, Text, Time};
pub use selector::Selector;

use super::traits::SqlValue;

/// Comparison operator of a single-value leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Eq,
    NotEq,
    Gt,
    Gte,
    Lt,
    Lte,
}

impl CompareOp {
    pub fn sql(&self) -> &'static str {
        match self {
            CompareOp::Eq => "=",
            CompareOp::NotEq => "IS NOT",
            CompareOp::Gt => ">",
            CompareOp::Gte => ">=",
            CompareOp::Lt => "<",
            CompareOp::Lte => "<=",
        }
    }
}

/// String pattern leaf kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternKind {
    Contains,
    HasPrefix,
    HasSuffix,
    EqualFold,
    ContainsFold,
}

/// Untyped predicate tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Matches every row
    All,
    /// Matches no row
    None,
    Compare {
        column: &'static str,
        op: CompareOp,
        value: SqlValue,
    },
    InSet {
        column: &'static str,
        negated: bool,
        values: Vec<SqlValue>,
    },
    Pattern {
        column: &'static str,
        kind: PatternKind,
        value: String,
    },
    IsNull {
        column: &'static str,
        negated: bool,
    },
    /// Existence of a related row, optionally filtered
    Edge {
        step: Step,
        nested: Option<Box<Node>>,
    },
    And(Vec<Node>),
    Or(Vec<Node>),
    Not(Box<Node>),
}

impl Node {
    pub(crate) fn and(nodes: impl IntoIterator<Item = Node>) -> Node {
        let mut flat = Vec::new();
        for node in nodes {
            match node {
                Node::All => {}
                Node::And(inner) => flat.extend(inner),
                other => flat.push(other),
            }
        }
        match flat.len() {
            0 => Node::All,
            1 => flat.pop().unwrap_or(Node::All),
            _ => Node::And(flat),
        }
    }

    pub(crate) fn or(nodes: impl IntoIterator<Item = Node>) -> Node {
        let mut flat = Vec::new();
        for node in nodes {
            match node {
                Node::None => {}
                Node::Or(inner) => flat.extend(inner),
                other => flat.push(other),
            }
        }
        match flat.len() {
            0 => Node::None,
            1 => flat.pop().unwrap_or(Node::None),
            _ => Node::Or(flat),
        }
    }

    pub(crate) fn negate(node: Node) -> Node {
        match node {
            Node::All => Node::None,
            Node::None => Node::All,
            Node::Not(inner) => *inner,
            other => Node::Not(Box::new(other)),
        }
    }
}

/// A filter over rows of `E`.
pub struct Predicate<E> {
    node: Node,
    _entity: PhantomData<fn() -> E>,
}

impl<E> Predicate<E> {
    pub(crate) fn from_node(node: Node) -> Self {
        Self {
            node,
            _entity: PhantomData,
        }
    }

    /// The identity of `and`
    pub fn all() -> Self {
        Self::from_node(Node::All)
    }

    /// The identity of `or`
    pub fn none() -> Self {
        Self::from_node(Node::None)
    }

    pub fn node(&self) -> &Node {
        &self.node
    }

    pub fn into_node(self) -> Node {
        self.node
    }

    pub fn is_all(&self) -> bool {
        self.node == Node::All
    }

    /// Lower to a WHERE fragment whose placeholders start at `?1`.
    pub fn to_sql(&self, table: &'static str) -> (String, Vec<SqlValue>) {
        let mut selector = Selector::new(table, 0);
        let sql = selector.lower(&self.node);
        (sql, selector.into_values())
    }
}

impl<E> Clone for Predicate<E> {
    fn clone(&self) -> Self {
        Self::from_node(self.node.clone())
    }
}

impl<E> fmt::Debug for Predicate<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Predicate").field(&self.node).finish()
    }
}

impl<E> PartialEq for Predicate<E> {
    fn eq(&self, other: &Self) -> bool {
        self.node == other.node
    }
}

impl<E> Default for Predicate<E> {
    fn default() -> Self {
        Self::all()
    }
}

/// Matches rows satisfying every predicate. Empty input matches everything.
pub fn and<E>(preds: impl IntoIterator<Item = Predicate<E>>) -> Predicate<E> {
    Predicate::from_node(Node::and(preds.into_iter().map(Predicate::into_node)))
}

/// Matches rows satisfying at least one predicate. Empty input matches nothing.
pub fn or<E>(preds: impl IntoIterator<Item = Predicate<E>>) -> Predicate<E> {
    Predicate::from_node(Node::or(preds.into_iter().map(Predicate::into_node)))
}

/// Matches rows that do not satisfy `pred`.
pub fn not<E>(pred: Predicate<E>) -> Predicate<E> {
    Predicate::from_node(Node::negate(pred.node))
}

impl<E> std::ops::BitAnd for Predicate<E> {
    type Output = Predicate<E>;

    fn bitand(self, rhs: Self) -> Self::Output {
        and([self, rhs])
    }
}

impl<E> std::ops::BitOr for Predicate<E> {
    type Output = Predicate<E>;

    fn bitor(self, rhs: Self) -> Self::Output {
        or([self, rhs])
    }
}

impl<E> std::ops::Not for Predicate<E> {
    type Output = Predicate<E>;

    fn not(self) -> Self::Output {
        not(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    struct Row;

    fn leaf(column: &'static str, value: i64) -> Predicate<Row> {
        Predicate::from_node(Node::Compare {
            column,
            op: CompareOp::Eq,
            value: SqlValue::Int(value),
        })
    }

    #[test]
    fn test_empty_combinators_are_identities() {
        assert_eq!(and(Vec::<Predicate<Row>>::new()), Predicate::all());
        assert_eq!(or(Vec::<Predicate<Row>>::new()), Predicate::none());
    }

    #[test]
    fn test_singleton_combinators_collapse() {
        let p = leaf("a", 1);
        assert_eq!(and([p.clone()]), p);
        assert_eq!(or([p.clone()]), p);
    }

    #[test]
    fn test_double_negation() {
        let p = leaf("a", 1);
        assert_eq!(not(not(p.clone())), p);
        assert_eq!(!!p.clone(), p);
        assert_eq!(not(Predicate::<Row>::all()), Predicate::none());
    }

    #[test]
    fn test_same_operator_flattens_mixed_operators_nest() {
        let (a, b, c) = (leaf("a", 1), leaf("b", 2), leaf("c", 3));

        let flat = and([and([a.clone(), b.clone()]), c.clone()]);
        assert_eq!(
            flat.node(),
            &Node::And(vec![a.node.clone(), b.node.clone(), c.node.clone()])
        );

        let mixed = and([or([a.clone(), b.clone()]), c.clone()]);
        assert_eq!(
            mixed.node(),
            &Node::And(vec![
                Node::Or(vec![a.node.clone(), b.node.clone()]),
                c.node.clone()
            ])
        );
    }

    #[test]
    fn test_identity_elements_are_absorbed() {
        let p = leaf("a", 1);
        assert_eq!(and([Predicate::all(), p.clone()]), p);
        assert_eq!(or([Predicate::none(), p.clone()]), p);
        assert_eq!(p.clone() & Predicate::all(), p);
        assert_eq!(p.clone() | Predicate::none(), p);
    }
}
