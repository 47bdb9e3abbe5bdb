//! Typed column handles
//!
//! One generic [Column] serves every entity; the scalar kind parameter decides
//! which constructors exist. Ordering constructors need an [Ordered] kind and
//! string patterns are only available on [Text].

use std::marker::PhantomData;

use chrono::{DateTime, Utc};

use super::{CompareOp, Node, PatternKind, Predicate};
use crate::orm::error::PredicateError;
use crate::orm::traits::{DatabaseEntity, SqlValue};

/// Scalar kind of a column and the literal type its constructors accept.
pub trait FieldKind: 'static {
    type Value;

    fn to_sql(value: Self::Value) -> SqlValue;
}

/// Kinds with a natural order (Gt/Gte/Lt/Lte).
pub trait Ordered: FieldKind {}

/// Primary and foreign keys
pub struct Key;
pub struct Text;
pub struct Int;
pub struct Float;
pub struct Flag;
pub struct Time;
pub struct Enum<T>(PhantomData<T>);

impl FieldKind for Key {
    type Value = String;

    fn to_sql(value: String) -> SqlValue {
        SqlValue::String(value)
    }
}

impl FieldKind for Text {
    type Value = String;

    fn to_sql(value: String) -> SqlValue {
        SqlValue::String(value)
    }
}

impl FieldKind for Int {
    type Value = i64;

    fn to_sql(value: i64) -> SqlValue {
        SqlValue::Int(value)
    }
}

impl FieldKind for Float {
    type Value = f64;

    fn to_sql(value: f64) -> SqlValue {
        SqlValue::Float(value)
    }
}

impl FieldKind for Flag {
    type Value = bool;

    fn to_sql(value: bool) -> SqlValue {
        SqlValue::Bool(value)
    }
}

impl FieldKind for Time {
    type Value = DateTime<Utc>;

    fn to_sql(value: DateTime<Utc>) -> SqlValue {
        SqlValue::Time(value)
    }
}

impl<T: FieldEnum> FieldKind for Enum<T> {
    type Value = T;

    fn to_sql(value: T) -> SqlValue {
        SqlValue::String(value.token().to_string())
    }
}

impl Ordered for Key {}
impl Ordered for Text {}
impl Ordered for Int {}
impl Ordered for Float {}
impl Ordered for Time {}

/// An enumerated column value with a fixed set of stored tokens.
pub trait FieldEnum: Copy + Send + Sync + 'static {
    /// Every valid token, in declaration order
    const TOKENS: &'static [&'static str];

    fn token(&self) -> &'static str;

    fn from_token(token: &str) -> Option<Self>;
}

/// Handle on one column of `E`.
pub struct Column<E, K> {
    name: &'static str,
    _marker: PhantomData<fn() -> (E, K)>,
}

impl<E, K> Clone for Column<E, K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E, K> Copy for Column<E, K> {}

impl<E, K> std::fmt::Debug for Column<E, K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Column").field(&self.name).finish()
    }
}

impl<E, K> Column<E, K> {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            _marker: PhantomData,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn is_null(self) -> Predicate<E> {
        Predicate::from_node(Node::IsNull {
            column: self.name,
            negated: false,
        })
    }

    pub fn not_null(self) -> Predicate<E> {
        Predicate::from_node(Node::IsNull {
            column: self.name,
            negated: true,
        })
    }
}

impl<E, K: FieldKind> Column<E, K> {
    fn compare(self, op: CompareOp, value: K::Value) -> Predicate<E> {
        Predicate::from_node(Node::Compare {
            column: self.name,
            op,
            value: K::to_sql(value),
        })
    }

    fn set(self, negated: bool, values: impl IntoIterator<Item = K::Value>) -> Predicate<E> {
        Predicate::from_node(Node::InSet {
            column: self.name,
            negated,
            values: values.into_iter().map(K::to_sql).collect(),
        })
    }

    pub fn eq(self, value: impl Into<K::Value>) -> Predicate<E> {
        self.compare(CompareOp::Eq, value.into())
    }

    pub fn not_eq(self, value: impl Into<K::Value>) -> Predicate<E> {
        self.compare(CompareOp::NotEq, value.into())
    }

    /// An empty set matches no row
    pub fn is_in<V: Into<K::Value>>(self, values: impl IntoIterator<Item = V>) -> Predicate<E> {
        self.set(false, values.into_iter().map(Into::into))
    }

    /// An empty set matches every row
    pub fn not_in<V: Into<K::Value>>(self, values: impl IntoIterator<Item = V>) -> Predicate<E> {
        self.set(true, values.into_iter().map(Into::into))
    }
}

impl<E, K: Ordered> Column<E, K> {
    pub fn gt(self, value: impl Into<K::Value>) -> Predicate<E> {
        self.compare(CompareOp::Gt, value.into())
    }

    pub fn gte(self, value: impl Into<K::Value>) -> Predicate<E> {
        self.compare(CompareOp::Gte, value.into())
    }

    pub fn lt(self, value: impl Into<K::Value>) -> Predicate<E> {
        self.compare(CompareOp::Lt, value.into())
    }

    pub fn lte(self, value: impl Into<K::Value>) -> Predicate<E> {
        self.compare(CompareOp::Lte, value.into())
    }
}

impl<E> Column<E, Text> {
    fn pattern(self, kind: PatternKind, value: impl Into<String>) -> Predicate<E> {
        Predicate::from_node(Node::Pattern {
            column: self.name,
            kind,
            value: value.into(),
        })
    }

    pub fn contains(self, value: impl Into<String>) -> Predicate<E> {
        self.pattern(PatternKind::Contains, value)
    }

    pub fn has_prefix(self, value: impl Into<String>) -> Predicate<E> {
        self.pattern(PatternKind::HasPrefix, value)
    }

    pub fn has_suffix(self, value: impl Into<String>) -> Predicate<E> {
        self.pattern(PatternKind::HasSuffix, value)
    }

    pub fn equal_fold(self, value: impl Into<String>) -> Predicate<E> {
        self.pattern(PatternKind::EqualFold, value)
    }

    pub fn contains_fold(self, value: impl Into<String>) -> Predicate<E> {
        self.pattern(PatternKind::ContainsFold, value)
    }
}

impl<E: DatabaseEntity, T: FieldEnum> Column<E, Enum<T>> {
    fn parse(self, token: &str) -> Result<T, PredicateError> {
        T::from_token(token).ok_or_else(|| {
            PredicateError::invalid(
                E::TYPE_NAME,
                self.name,
                format!("\"{}\" is not one of {}", token, T::TOKENS.join(", ")),
            )
        })
    }

    /// Equality against a raw token, rejecting tokens outside the enum.
    pub fn eq_token(self, token: &str) -> Result<Predicate<E>, PredicateError> {
        Ok(self.eq(self.parse(token)?))
    }

    pub fn in_tokens<'a>(
        self,
        tokens: impl IntoIterator<Item = &'a str>,
    ) -> Result<Predicate<E>, PredicateError> {
        let values = tokens
            .into_iter()
            .map(|t| self.parse(t))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(self.is_in(values))
    }
}
