//! Lowering of predicate trees to parameterised SQLite fragments.
//!
//! A NULL column never satisfies a leaf, and negations are complements:
//! `NotEq` lowers to `IS NOT`, `NotIn` and `Not` coalesce the unknown result
//! of their operand to false before negating it.

use super::{Node, PatternKind, Step};
use crate::orm::traits::{Cardinality, SqlValue};

/// Walks a [Node] tree and emits a WHERE fragment with numbered `?N`
/// placeholders. Every compound node is wrapped in parentheses.
pub struct Selector {
    table: &'static str,
    offset: usize,
    values: Vec<SqlValue>,
}

impl Selector {
    /// `offset` is the number of placeholders already used by the enclosing statement
    pub fn new(table: &'static str, offset: usize) -> Self {
        Self {
            table,
            offset,
            values: Vec::new(),
        }
    }

    pub fn into_values(self) -> Vec<SqlValue> {
        self.values
    }

    fn bind(&mut self, value: SqlValue) -> String {
        self.values.push(value);
        format!("?{}", self.offset + self.values.len())
    }

    fn column(&self, name: &str) -> String {
        format!("{}.{}", self.table, name)
    }

    pub fn lower(&mut self, node: &Node) -> String {
        match node {
            Node::All => "1 = 1".to_string(),
            Node::None => "1 = 0".to_string(),
            Node::Compare { column, op, value } => {
                let column = self.column(column);
                let param = self.bind(value.clone());
                format!("{} {} {}", column, op.sql(), param)
            }
            Node::InSet {
                values, negated, ..
            } if values.is_empty() => {
                let sql = if *negated { "1 = 1" } else { "1 = 0" };
                sql.to_string()
            }
            Node::InSet {
                column,
                negated,
                values,
            } => {
                let column = self.column(column);
                let params: Vec<String> = values.iter().map(|v| self.bind(v.clone())).collect();
                let set = format!("{} IN ({})", column, params.join(", "));
                if *negated { negate(&set) } else { set }
            }
            Node::Pattern {
                column,
                kind,
                value,
            } => {
                let column = self.column(column);
                let p = self.bind(SqlValue::String(value.clone()));
                match kind {
                    PatternKind::Contains => format!("instr({}, {}) > 0", column, p),
                    PatternKind::HasPrefix => format!("instr({}, {}) = 1", column, p),
                    PatternKind::HasSuffix => format!(
                        "substr({c}, length({c}) - length({p}) + 1) = {p}",
                        c = column,
                        p = p
                    ),
                    PatternKind::EqualFold => format!("lower({}) = lower({})", column, p),
                    PatternKind::ContainsFold => {
                        format!("instr(lower({}), lower({})) > 0", column, p)
                    }
                }
            }
            Node::IsNull { column, negated } => {
                let column = self.column(column);
                if *negated {
                    format!("{} IS NOT NULL", column)
                } else {
                    format!("{} IS NULL", column)
                }
            }
            Node::Edge { step, nested } => self.edge(step, nested.as_deref()),
            Node::And(nodes) => self.join(nodes, " AND "),
            Node::Or(nodes) => self.join(nodes, " OR "),
            Node::Not(inner) => {
                let inner = self.lower(inner);
                negate(&inner)
            }
        }
    }

    fn join(&mut self, nodes: &[Node], sep: &str) -> String {
        let parts: Vec<String> = nodes.iter().map(|n| self.lower(n)).collect();
        format!("({})", parts.join(sep))
    }

    fn nested(&mut self, table: &'static str, node: &Node) -> String {
        let outer = std::mem::replace(&mut self.table, table);
        let sql = self.lower(node);
        self.table = outer;
        sql
    }

    fn edge(&mut self, step: &Step, nested: Option<&Node>) -> String {
        match step.cardinality {
            Cardinality::ManyToOne => {
                let fk = self.column(step.column);
                match nested {
                    None => format!("{} IS NOT NULL", fk),
                    Some(node) => {
                        let inner = self.nested(step.to_table, node);
                        format!(
                            "({fk} IS NOT NULL AND {fk} IN (SELECT {t}.{id} FROM {t} WHERE {w}))",
                            fk = fk,
                            t = step.to_table,
                            id = step.to_id,
                            w = inner
                        )
                    }
                }
            }
            Cardinality::OneToMany => {
                let id = self.column(step.from_id);
                let fk = format!("{}.{}", step.to_table, step.column);
                let mut sql = format!(
                    "{} IN (SELECT {} FROM {} WHERE {} IS NOT NULL",
                    id, fk, step.to_table, fk
                );
                if let Some(node) = nested {
                    let inner = self.nested(step.to_table, node);
                    sql.push_str(" AND ");
                    sql.push_str(&inner);
                }
                sql.push(')');
                sql
            }
        }
    }
}

fn negate(sql: &str) -> String {
    format!("NOT COALESCE(({}), 0)", sql)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orm::predicate::CompareOp;
    use pretty_assertions::assert_eq;

    fn eq(column: &'static str, value: &str) -> Node {
        Node::Compare {
            column,
            op: CompareOp::Eq,
            value: SqlValue::String(value.to_string()),
        }
    }

    fn lower(node: &Node) -> (String, Vec<SqlValue>) {
        let mut selector = Selector::new("cities", 0);
        let sql = selector.lower(node);
        (sql, selector.into_values())
    }

    #[test]
    fn test_or_is_grouped_inside_and() {
        let node = Node::And(vec![
            Node::Or(vec![eq("name", "a"), eq("name", "b")]),
            eq("state_id", "s"),
        ]);
        let (sql, values) = lower(&node);
        assert_eq!(
            sql,
            "((cities.name = ?1 OR cities.name = ?2) AND cities.state_id = ?3)"
        );
        assert_eq!(values.len(), 3);
    }

    #[test]
    fn test_empty_sets() {
        let empty_in = Node::InSet {
            column: "name",
            negated: false,
            values: vec![],
        };
        let empty_not_in = Node::InSet {
            column: "name",
            negated: true,
            values: vec![],
        };
        assert_eq!(lower(&empty_in).0, "1 = 0");
        assert_eq!(lower(&empty_not_in).0, "1 = 1");

        let not_in = Node::InSet {
            column: "name",
            negated: true,
            values: vec![SqlValue::String("a".to_string())],
        };
        assert_eq!(lower(&not_in).0, "NOT COALESCE((cities.name IN (?1)), 0)");
    }

    #[test]
    fn test_not_eq_is_null_safe() {
        let node = Node::Compare {
            column: "state_id",
            op: CompareOp::NotEq,
            value: SqlValue::String("s".to_string()),
        };
        assert_eq!(lower(&node).0, "cities.state_id IS NOT ?1");
    }

    #[test]
    fn test_offset_numbering() {
        let mut selector = Selector::new("cities", 4);
        let sql = selector.lower(&Node::Not(Box::new(eq("name", "x"))));
        assert_eq!(sql, "NOT COALESCE((cities.name = ?5), 0)");
    }

    #[test]
    fn test_suffix_reuses_placeholder() {
        let node = Node::Pattern {
            column: "name",
            kind: PatternKind::HasSuffix,
            value: "go".to_string(),
        };
        let (sql, values) = lower(&node);
        assert_eq!(
            sql,
            "substr(cities.name, length(cities.name) - length(?1) + 1) = ?1"
        );
        assert_eq!(values, vec![SqlValue::String("go".to_string())]);
    }

    #[test]
    fn test_edges() {
        let to_one = Step {
            from_table: "cities",
            from_id: "id",
            to_table: "states",
            to_id: "id",
            cardinality: Cardinality::ManyToOne,
            column: "state_id",
        };
        let (sql, _) = lower(&Node::Edge {
            step: to_one,
            nested: Some(Box::new(eq("code", "IL"))),
        });
        assert_eq!(
            sql,
            "(cities.state_id IS NOT NULL AND cities.state_id IN \
             (SELECT states.id FROM states WHERE states.code = ?1))"
        );

        let to_many = Step {
            from_table: "cities",
            from_id: "id",
            to_table: "airports",
            to_id: "id",
            cardinality: Cardinality::OneToMany,
            column: "city_id",
        };
        let (sql, _) = lower(&Node::Edge {
            step: to_many,
            nested: None,
        });
        assert_eq!(
            sql,
            "cities.id IN \
             (SELECT airports.city_id FROM airports WHERE airports.city_id IS NOT NULL)"
        );
    }
}
