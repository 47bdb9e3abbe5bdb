//! Name-based predicate construction
//!
//! Conditions arrive as data (JSON in practice) naming fields and relations by
//! string. They are resolved against the entity's column and relation tables,
//! so an unknown name or a literal of the wrong shape fails here instead of in
//! the database. Every condition object has exactly one shape; extra keys are
//! rejected rather than ignored.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::edge::edge_node;
use super::{CompareOp, Node, PatternKind, Predicate, Step};
use crate::orm::error::PredicateError;
use crate::orm::traits::{ColumnDef, ColumnKind, DatabaseEntity, EntityMeta, SqlValue};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Op {
    Eq,
    NotEq,
    Gt,
    Gte,
    Lt,
    Lte,
    In,
    NotIn,
    Contains,
    HasPrefix,
    HasSuffix,
    EqualFold,
    ContainsFold,
    IsNull,
    NotNull,
}

/// `{"field": "name", "op": "HAS_PREFIX", "value": "Ch"}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldCondition {
    pub field: String,
    pub op: Op,
    #[serde(default)]
    pub value: Value,
}

/// `{"has": "state", "with": [...]}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EdgeCondition {
    #[serde(rename = "has")]
    pub relation: String,
    #[serde(rename = "with", default)]
    pub conditions: Vec<Condition>,
}

/// `{"not": {...}}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NotCondition {
    pub not: Box<Condition>,
}

/// `{"and": [...]}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AndCondition {
    pub and: Vec<Condition>,
}

/// `{"or": [...]}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OrCondition {
    pub or: Vec<Condition>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Condition {
    Field(FieldCondition),
    Edge(EdgeCondition),
    Not(NotCondition),
    And(AndCondition),
    Or(OrCondition),
}

/// AND of `conditions` over `E`.
pub fn build<E: DatabaseEntity>(conditions: &[Condition]) -> Result<Predicate<E>, PredicateError> {
    let meta = E::meta();
    let node = build_all(&meta, conditions)?;
    Ok(Predicate::from_node(node))
}

/// Decode a JSON list of conditions and build their AND over `E`.
///
/// A value that is not a list of well-formed conditions fails with
/// InvalidArgument on the `conditions` argument.
pub fn from_json<E: DatabaseEntity>(value: &Value) -> Result<Predicate<E>, PredicateError> {
    let conditions = Vec::<Condition>::deserialize(value)
        .map_err(|e| PredicateError::invalid(E::TYPE_NAME, "conditions", e.to_string()))?;
    build::<E>(&conditions)
}

fn build_all(meta: &EntityMeta, conditions: &[Condition]) -> Result<Node, PredicateError> {
    let nodes = conditions
        .iter()
        .map(|c| build_node(meta, c))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Node::and(nodes))
}

fn build_node(meta: &EntityMeta, condition: &Condition) -> Result<Node, PredicateError> {
    match condition {
        Condition::Field(field) => field_node(meta, field),
        Condition::Edge(edge) => {
            let relation = meta.relation(&edge.relation)?;
            let nested = build_all(&relation.target, &edge.conditions)?;
            Ok(edge_node(Step::new(meta, relation), nested))
        }
        Condition::Not(NotCondition { not }) => Ok(Node::negate(build_node(meta, not)?)),
        Condition::And(AndCondition { and }) => build_all(meta, and),
        Condition::Or(OrCondition { or }) => {
            let nodes = or
                .iter()
                .map(|c| build_node(meta, c))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Node::or(nodes))
        }
    }
}

fn field_node(meta: &EntityMeta, condition: &FieldCondition) -> Result<Node, PredicateError> {
    let column = meta.column(&condition.field)?;
    let invalid = |reason: String| PredicateError::invalid(meta.type_name, column.name, reason);

    let compare = |op: CompareOp| -> Result<Node, PredicateError> {
        Ok(Node::Compare {
            column: column.name,
            op,
            value: literal(meta, column, &condition.value)?,
        })
    };

    let pattern = |kind: PatternKind| -> Result<Node, PredicateError> {
        if column.kind != ColumnKind::Text {
            return Err(invalid(format!("{:?} requires a text field", condition.op)));
        }
        let value = condition
            .value
            .as_str()
            .ok_or_else(|| invalid("expected a string".to_string()))?;
        Ok(Node::Pattern {
            column: column.name,
            kind,
            value: value.to_string(),
        })
    };

    let ordered = |op: CompareOp| -> Result<Node, PredicateError> {
        if !column.kind.is_ordered() {
            return Err(invalid(format!("{:?} requires an ordered field", condition.op)));
        }
        compare(op)
    };

    match condition.op {
        Op::Eq => compare(CompareOp::Eq),
        Op::NotEq => compare(CompareOp::NotEq),
        Op::Gt => ordered(CompareOp::Gt),
        Op::Gte => ordered(CompareOp::Gte),
        Op::Lt => ordered(CompareOp::Lt),
        Op::Lte => ordered(CompareOp::Lte),
        Op::In | Op::NotIn => {
            let items = condition
                .value
                .as_array()
                .ok_or_else(|| invalid("expected a list".to_string()))?;
            let values = items
                .iter()
                .map(|v| literal(meta, column, v))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Node::InSet {
                column: column.name,
                negated: condition.op == Op::NotIn,
                values,
            })
        }
        Op::Contains => pattern(PatternKind::Contains),
        Op::HasPrefix => pattern(PatternKind::HasPrefix),
        Op::HasSuffix => pattern(PatternKind::HasSuffix),
        Op::EqualFold => pattern(PatternKind::EqualFold),
        Op::ContainsFold => pattern(PatternKind::ContainsFold),
        Op::IsNull | Op::NotNull => {
            if !column.nullable {
                return Err(invalid("field is not nullable".to_string()));
            }
            Ok(Node::IsNull {
                column: column.name,
                negated: condition.op == Op::NotNull,
            })
        }
    }
}

/// Convert a JSON literal into the column's domain.
fn literal(
    meta: &EntityMeta,
    column: &ColumnDef,
    value: &Value,
) -> Result<SqlValue, PredicateError> {
    let invalid = |reason: &str| PredicateError::invalid(meta.type_name, column.name, reason);

    match column.kind {
        ColumnKind::Id | ColumnKind::Text | ColumnKind::Reference(_) => value
            .as_str()
            .map(SqlValue::from)
            .ok_or_else(|| invalid("expected a string")),
        ColumnKind::Int => value
            .as_i64()
            .map(SqlValue::Int)
            .ok_or_else(|| invalid("expected an integer")),
        ColumnKind::Float => value
            .as_f64()
            .filter(|f| f.is_finite())
            .map(SqlValue::Float)
            .ok_or_else(|| invalid("expected a finite number")),
        ColumnKind::Bool => value
            .as_bool()
            .map(SqlValue::Bool)
            .ok_or_else(|| invalid("expected a boolean")),
        ColumnKind::Time => {
            let raw = value
                .as_str()
                .ok_or_else(|| invalid("expected an RFC 3339 timestamp"))?;
            DateTime::parse_from_rfc3339(raw)
                .map(|t| SqlValue::Time(t.with_timezone(&Utc)))
                .map_err(|_| invalid("expected an RFC 3339 timestamp"))
        }
        ColumnKind::Enum(tokens) => {
            let raw = value.as_str().ok_or_else(|| invalid("expected an enum token"))?;
            if tokens.contains(&raw) {
                Ok(SqlValue::from(raw))
            } else {
                Err(PredicateError::invalid(
                    meta.type_name,
                    column.name,
                    format!("\"{}\" is not one of {}", raw, tokens.join(", ")),
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphql::entities::{Airport, City, State};
    use assert_matches::assert_matches;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn parse(value: Value) -> Vec<Condition> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_matches_typed_construction() {
        let conditions = parse(json!([
            {"field": "name", "op": "CONTAINS", "value": "o"},
            {"not": {"field": "name", "op": "EQUAL_FOLD", "value": "denver"}}
        ]));
        let dynamic = build::<City>(&conditions).unwrap();
        let typed = City::NAME.contains("o") & !City::NAME.equal_fold("denver");
        assert_eq!(dynamic, typed);
    }

    #[test]
    fn test_edge_matches_typed_construction() {
        let conditions = parse(json!([
            {"has": "state", "with": [{"field": "name", "op": "EQUAL_FOLD", "value": "illinois"}]}
        ]));
        let dynamic = build::<Airport>(&conditions).unwrap();
        let typed = Airport::STATE.has_with([State::NAME.equal_fold("illinois")]);
        assert_eq!(dynamic, typed);

        let bare = build::<Airport>(&parse(json!([{"has": "state"}]))).unwrap();
        assert_eq!(bare, Airport::STATE.has());
    }

    #[test]
    fn test_unknown_names() {
        let err = build::<City>(&parse(json!([{"field": "altitude", "op": "EQ", "value": 1}])))
            .unwrap_err();
        assert_matches!(err, PredicateError::UnknownField { entity: "City", .. });

        let err = build::<City>(&parse(json!([{"has": "runways"}]))).unwrap_err();
        assert_matches!(err, PredicateError::UnknownRelation { entity: "City", .. });
    }

    #[test]
    fn test_invalid_literals() {
        let cases = [
            json!({"field": "facility_type", "op": "EQ", "value": "NOT_A_VALID_ENUM"}),
            json!({"field": "facility_type", "op": "GT", "value": "AIRPORT"}),
            json!({"field": "elevation", "op": "EQ", "value": "high"}),
            json!({"field": "name", "op": "IN", "value": "Chicago"}),
            json!({"field": "landing_fee", "op": "CONTAINS", "value": "y"}),
            json!({"field": "created_at", "op": "GTE", "value": "yesterday"}),
            json!({"field": "name", "op": "IS_NULL"}),
        ];
        for case in cases {
            let err = build::<Airport>(&parse(json!([case]))).unwrap_err();
            assert_matches!(err, PredicateError::InvalidArgument { .. });
        }
    }

    #[test]
    fn test_mixed_shapes_are_rejected() {
        let cases = [
            json!([{"and": [], "or": []}]),
            json!([{"field": "name", "op": "EQ", "value": "Denver", "has": "state"}]),
            json!([{"has": "state", "with": [], "op": "EQ"}]),
            json!([{"field": "name", "op": "STARTS_WITH", "value": "D"}]),
            json!({"field": "name", "op": "EQ", "value": "Denver"}),
        ];
        for case in cases {
            let err = from_json::<City>(&case).unwrap_err();
            assert_matches!(
                err,
                PredicateError::InvalidArgument { entity: "City", ref field, .. }
                    if field == "conditions"
            );
        }

        let ok = from_json::<City>(&json!([{"field": "name", "op": "EQ", "value": "Denver"}]));
        assert_eq!(ok.unwrap(), City::NAME.eq("Denver"));
    }

    #[test]
    fn test_empty_combinators() {
        let all = build::<City>(&parse(json!([{"and": []}]))).unwrap();
        assert!(all.is_all());
        let none = build::<City>(&parse(json!([{"or": []}]))).unwrap();
        assert_eq!(none, Predicate::none());
    }
}
