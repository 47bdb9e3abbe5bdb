//! GraphQL filter input types for flexible querying
//!
//! These types enable ORM-style filtering on GraphQL queries with operators like:
//! - Eq, NotEq (equals, not equals)
//! - Lt, Lte, Gt, Gte (comparisons, ordered kinds only)
//! - In, NotIn (list membership)
//! - Contains, HasPrefix, HasSuffix (case-sensitive string matching)
//! - EqualFold, ContainsFold (case-insensitive string matching)
//! - IsNull (null checks)
//!
//! All field names are PascalCase. Every operator set inside one filter is
//! ANDed.

use async_graphql::{InputObject, InputType};
use chrono::{DateTime, Utc};

use crate::orm::predicate::{Enum, FieldEnum, Flag, Float, Int, Key, Text, Time};
use crate::orm::{
    Column, DatabaseEntity, DatabaseFilter, DatabaseOrderBy, OrderDirection, Predicate,
    PredicateError, Relation, and, not, or,
};

use super::entities::enums::{
    AirspaceDetermination, ArffIndex, BeaconLensColor, Direction, FacilityType, FacilityUse,
    Far139CarrierService, Far139Class, InspectionMethod, InspectorCode, LightingSchedule,
    OperationalStatus, OwnershipType, OxygenType, RepairService, SegmentedCircle, SurveyMethod,
    TowerType, WindIndicator,
};
use super::entities::{
    AirportOrderField, CityOrderField, CountryOrderField, RegionOrderField, StateOrderField,
};

/// Filter for primary key fields
#[derive(InputObject, Default, Clone, Debug)]
#[graphql(name = "IdFilter")]
pub struct IdFilter {
    #[graphql(name = "Eq")]
    pub eq: Option<String>,
    #[graphql(name = "NotEq")]
    pub not_eq: Option<String>,
    #[graphql(name = "Gt")]
    pub gt: Option<String>,
    #[graphql(name = "Gte")]
    pub gte: Option<String>,
    #[graphql(name = "Lt")]
    pub lt: Option<String>,
    #[graphql(name = "Lte")]
    pub lte: Option<String>,
    #[graphql(name = "In")]
    pub in_list: Option<Vec<String>>,
    #[graphql(name = "NotIn")]
    pub not_in: Option<Vec<String>>,
}

/// Filter for string fields
#[derive(InputObject, Default, Clone, Debug)]
#[graphql(name = "StringFilter")]
pub struct StringFilter {
    /// Equals
    #[graphql(name = "Eq")]
    pub eq: Option<String>,
    /// Not equals
    #[graphql(name = "NotEq")]
    pub not_eq: Option<String>,
    #[graphql(name = "Gt")]
    pub gt: Option<String>,
    #[graphql(name = "Gte")]
    pub gte: Option<String>,
    #[graphql(name = "Lt")]
    pub lt: Option<String>,
    #[graphql(name = "Lte")]
    pub lte: Option<String>,
    /// In list (an empty list matches nothing)
    #[graphql(name = "In")]
    pub in_list: Option<Vec<String>>,
    /// Not in list (an empty list matches everything)
    #[graphql(name = "NotIn")]
    pub not_in: Option<Vec<String>>,
    /// Contains substring (case-sensitive)
    #[graphql(name = "Contains")]
    pub contains: Option<String>,
    /// Starts with (case-sensitive)
    #[graphql(name = "HasPrefix")]
    pub has_prefix: Option<String>,
    /// Ends with (case-sensitive)
    #[graphql(name = "HasSuffix")]
    pub has_suffix: Option<String>,
    /// Equals, ignoring case
    #[graphql(name = "EqualFold")]
    pub equal_fold: Option<String>,
    /// Contains substring, ignoring case
    #[graphql(name = "ContainsFold")]
    pub contains_fold: Option<String>,
}

/// Filter for integer fields
#[derive(InputObject, Default, Clone, Debug)]
#[graphql(name = "IntFilter")]
pub struct IntFilter {
    #[graphql(name = "Eq")]
    pub eq: Option<i64>,
    #[graphql(name = "NotEq")]
    pub not_eq: Option<i64>,
    #[graphql(name = "Gt")]
    pub gt: Option<i64>,
    #[graphql(name = "Gte")]
    pub gte: Option<i64>,
    #[graphql(name = "Lt")]
    pub lt: Option<i64>,
    #[graphql(name = "Lte")]
    pub lte: Option<i64>,
    #[graphql(name = "In")]
    pub in_list: Option<Vec<i64>>,
    #[graphql(name = "NotIn")]
    pub not_in: Option<Vec<i64>>,
    /// Is null (nullable fields only)
    #[graphql(name = "IsNull")]
    pub is_null: Option<bool>,
}

/// Filter for floating point fields
#[derive(InputObject, Default, Clone, Debug)]
#[graphql(name = "FloatFilter")]
pub struct FloatFilter {
    #[graphql(name = "Eq")]
    pub eq: Option<f64>,
    #[graphql(name = "NotEq")]
    pub not_eq: Option<f64>,
    #[graphql(name = "Gt")]
    pub gt: Option<f64>,
    #[graphql(name = "Gte")]
    pub gte: Option<f64>,
    #[graphql(name = "Lt")]
    pub lt: Option<f64>,
    #[graphql(name = "Lte")]
    pub lte: Option<f64>,
    #[graphql(name = "In")]
    pub in_list: Option<Vec<f64>>,
    #[graphql(name = "NotIn")]
    pub not_in: Option<Vec<f64>>,
}

/// Filter for boolean fields
#[derive(InputObject, Default, Clone, Debug)]
#[graphql(name = "BoolFilter")]
pub struct BoolFilter {
    /// Equals
    #[graphql(name = "Eq")]
    pub eq: Option<bool>,
    /// Not equals (opposite of eq)
    #[graphql(name = "NotEq")]
    pub not_eq: Option<bool>,
}

/// Filter for date/timestamp fields (RFC 3339 values)
#[derive(InputObject, Default, Clone, Debug)]
#[graphql(name = "DateFilter")]
pub struct DateFilter {
    /// Equals
    #[graphql(name = "Eq")]
    pub eq: Option<String>,
    /// Not equals
    #[graphql(name = "NotEq")]
    pub not_eq: Option<String>,
    /// After (greater than)
    #[graphql(name = "Gt")]
    pub gt: Option<String>,
    /// After or on (greater than or equal)
    #[graphql(name = "Gte")]
    pub gte: Option<String>,
    /// Before (less than)
    #[graphql(name = "Lt")]
    pub lt: Option<String>,
    /// Before or on (less than or equal)
    #[graphql(name = "Lte")]
    pub lte: Option<String>,
    #[graphql(name = "In")]
    pub in_list: Option<Vec<String>>,
    #[graphql(name = "NotIn")]
    pub not_in: Option<Vec<String>>,
    /// Is null (nullable fields only)
    #[graphql(name = "IsNull")]
    pub is_null: Option<bool>,
}

/// Filter for enumerated fields. No ordering operators.
#[derive(InputObject, Clone, Debug)]
#[graphql(
    concrete(name = "FacilityTypeFilter", params(FacilityType)),
    concrete(name = "OwnershipTypeFilter", params(OwnershipType)),
    concrete(name = "FacilityUseFilter", params(FacilityUse)),
    concrete(name = "SurveyMethodFilter", params(SurveyMethod)),
    concrete(name = "DirectionFilter", params(Direction)),
    concrete(name = "OperationalStatusFilter", params(OperationalStatus)),
    concrete(name = "Far139ClassFilter", params(Far139Class)),
    concrete(name = "ArffIndexFilter", params(ArffIndex)),
    concrete(name = "TowerTypeFilter", params(TowerType)),
    concrete(name = "BeaconLensColorFilter", params(BeaconLensColor)),
    concrete(name = "WindIndicatorFilter", params(WindIndicator)),
    concrete(name = "AirspaceDeterminationFilter", params(AirspaceDetermination)),
    concrete(name = "Far139CarrierServiceFilter", params(Far139CarrierService)),
    concrete(name = "InspectionMethodFilter", params(InspectionMethod)),
    concrete(name = "InspectorCodeFilter", params(InspectorCode)),
    concrete(name = "LightingScheduleFilter", params(LightingSchedule)),
    concrete(name = "OxygenTypeFilter", params(OxygenType)),
    concrete(name = "RepairServiceFilter", params(RepairService)),
    concrete(name = "SegmentedCircleFilter", params(SegmentedCircle))
)]
pub struct EnumFilter<T: InputType> {
    #[graphql(name = "Eq")]
    pub eq: Option<T>,
    #[graphql(name = "NotEq")]
    pub not_eq: Option<T>,
    #[graphql(name = "In")]
    pub in_list: Option<Vec<T>>,
    #[graphql(name = "NotIn")]
    pub not_in: Option<Vec<T>>,
    /// Is null (nullable fields only)
    #[graphql(name = "IsNull")]
    pub is_null: Option<bool>,
}

impl<T: InputType> Default for EnumFilter<T> {
    fn default() -> Self {
        Self {
            eq: None,
            not_eq: None,
            in_list: None,
            not_in: None,
            is_null: None,
        }
    }
}

// ============================================================================
// Predicate Conversion
// ============================================================================

/// A filter input that narrows one column of type `K`.
pub trait FieldFilter<E, K> {
    fn to_predicate(&self, column: Column<E, K>) -> Result<Predicate<E>, PredicateError>;
}

fn null_check<E, K>(column: Column<E, K>, is_null: Option<bool>) -> Option<Predicate<E>> {
    is_null.map(|is_null| {
        if is_null {
            column.is_null()
        } else {
            column.not_null()
        }
    })
}

impl<E> FieldFilter<E, Key> for IdFilter {
    fn to_predicate(&self, column: Column<E, Key>) -> Result<Predicate<E>, PredicateError> {
        let mut parts = Vec::new();
        parts.extend(self.eq.clone().map(|v| column.eq(v)));
        parts.extend(self.not_eq.clone().map(|v| column.not_eq(v)));
        parts.extend(self.gt.clone().map(|v| column.gt(v)));
        parts.extend(self.gte.clone().map(|v| column.gte(v)));
        parts.extend(self.lt.clone().map(|v| column.lt(v)));
        parts.extend(self.lte.clone().map(|v| column.lte(v)));
        parts.extend(self.in_list.clone().map(|v| column.is_in(v)));
        parts.extend(self.not_in.clone().map(|v| column.not_in(v)));
        Ok(and(parts))
    }
}

impl<E> FieldFilter<E, Text> for StringFilter {
    fn to_predicate(&self, column: Column<E, Text>) -> Result<Predicate<E>, PredicateError> {
        let mut parts = Vec::new();
        parts.extend(self.eq.clone().map(|v| column.eq(v)));
        parts.extend(self.not_eq.clone().map(|v| column.not_eq(v)));
        parts.extend(self.gt.clone().map(|v| column.gt(v)));
        parts.extend(self.gte.clone().map(|v| column.gte(v)));
        parts.extend(self.lt.clone().map(|v| column.lt(v)));
        parts.extend(self.lte.clone().map(|v| column.lte(v)));
        parts.extend(self.in_list.clone().map(|v| column.is_in(v)));
        parts.extend(self.not_in.clone().map(|v| column.not_in(v)));
        parts.extend(self.contains.clone().map(|v| column.contains(v)));
        parts.extend(self.has_prefix.clone().map(|v| column.has_prefix(v)));
        parts.extend(self.has_suffix.clone().map(|v| column.has_suffix(v)));
        parts.extend(self.equal_fold.clone().map(|v| column.equal_fold(v)));
        parts.extend(self.contains_fold.clone().map(|v| column.contains_fold(v)));
        Ok(and(parts))
    }
}

impl<E> FieldFilter<E, Int> for IntFilter {
    fn to_predicate(&self, column: Column<E, Int>) -> Result<Predicate<E>, PredicateError> {
        let mut parts = Vec::new();
        parts.extend(self.eq.map(|v| column.eq(v)));
        parts.extend(self.not_eq.map(|v| column.not_eq(v)));
        parts.extend(self.gt.map(|v| column.gt(v)));
        parts.extend(self.gte.map(|v| column.gte(v)));
        parts.extend(self.lt.map(|v| column.lt(v)));
        parts.extend(self.lte.map(|v| column.lte(v)));
        parts.extend(self.in_list.clone().map(|v| column.is_in(v)));
        parts.extend(self.not_in.clone().map(|v| column.not_in(v)));
        parts.extend(null_check(column, self.is_null));
        Ok(and(parts))
    }
}

impl<E> FieldFilter<E, Float> for FloatFilter {
    fn to_predicate(&self, column: Column<E, Float>) -> Result<Predicate<E>, PredicateError> {
        let mut parts = Vec::new();
        parts.extend(self.eq.map(|v| column.eq(v)));
        parts.extend(self.not_eq.map(|v| column.not_eq(v)));
        parts.extend(self.gt.map(|v| column.gt(v)));
        parts.extend(self.gte.map(|v| column.gte(v)));
        parts.extend(self.lt.map(|v| column.lt(v)));
        parts.extend(self.lte.map(|v| column.lte(v)));
        parts.extend(self.in_list.clone().map(|v| column.is_in(v)));
        parts.extend(self.not_in.clone().map(|v| column.not_in(v)));
        Ok(and(parts))
    }
}

impl<E> FieldFilter<E, Flag> for BoolFilter {
    fn to_predicate(&self, column: Column<E, Flag>) -> Result<Predicate<E>, PredicateError> {
        let mut parts = Vec::new();
        parts.extend(self.eq.map(|v| column.eq(v)));
        parts.extend(self.not_eq.map(|v| column.not_eq(v)));
        Ok(and(parts))
    }
}

impl<E: DatabaseEntity> FieldFilter<E, Time> for DateFilter {
    fn to_predicate(&self, column: Column<E, Time>) -> Result<Predicate<E>, PredicateError> {
        let parse = |raw: &String| -> Result<DateTime<Utc>, PredicateError> {
            DateTime::parse_from_rfc3339(raw)
                .map(|t| t.with_timezone(&Utc))
                .map_err(|e| {
                    PredicateError::invalid(
                        E::TYPE_NAME,
                        column.name(),
                        format!("\"{}\" is not an RFC 3339 timestamp: {}", raw, e),
                    )
                })
        };
        let parse_all = |raw: &Vec<String>| raw.iter().map(parse).collect::<Result<Vec<_>, _>>();

        let mut parts = Vec::new();
        if let Some(v) = &self.eq {
            parts.push(column.eq(parse(v)?));
        }
        if let Some(v) = &self.not_eq {
            parts.push(column.not_eq(parse(v)?));
        }
        if let Some(v) = &self.gt {
            parts.push(column.gt(parse(v)?));
        }
        if let Some(v) = &self.gte {
            parts.push(column.gte(parse(v)?));
        }
        if let Some(v) = &self.lt {
            parts.push(column.lt(parse(v)?));
        }
        if let Some(v) = &self.lte {
            parts.push(column.lte(parse(v)?));
        }
        if let Some(v) = &self.in_list {
            parts.push(column.is_in(parse_all(v)?));
        }
        if let Some(v) = &self.not_in {
            parts.push(column.not_in(parse_all(v)?));
        }
        parts.extend(null_check(column, self.is_null));
        Ok(and(parts))
    }
}

impl<E, T: FieldEnum + InputType> FieldFilter<E, Enum<T>> for EnumFilter<T> {
    fn to_predicate(&self, column: Column<E, Enum<T>>) -> Result<Predicate<E>, PredicateError> {
        let mut parts = Vec::new();
        parts.extend(self.eq.map(|v| column.eq(v)));
        parts.extend(self.not_eq.map(|v| column.not_eq(v)));
        parts.extend(self.in_list.clone().map(|v| column.is_in(v)));
        parts.extend(self.not_in.clone().map(|v| column.not_in(v)));
        parts.extend(null_check(column, self.is_null));
        Ok(and(parts))
    }
}

// ============================================================================
// Where Input Assembly
// ============================================================================

/// Collects the parts of a `*WhereInput` into one predicate.
///
/// ```rust,ignore
/// WhereBuilder::new()
///     .combinators(&self.not, &self.and, &self.or)?
///     .field(City::NAME, &self.name)?
///     .edge(City::STATE, self.has_state, &self.has_state_with)?
///     .build()
/// ```
pub struct WhereBuilder<E> {
    parts: Vec<Predicate<E>>,
}

impl<E: DatabaseEntity> WhereBuilder<E> {
    pub fn new() -> Self {
        Self { parts: Vec::new() }
    }

    pub fn combinators<W>(
        mut self,
        negated: &Option<Box<W>>,
        all: &Option<Vec<W>>,
        any: &Option<Vec<W>>,
    ) -> Result<Self, PredicateError>
    where
        W: DatabaseFilter<Entity = E>,
    {
        if let Some(w) = negated {
            self.parts.push(not(w.to_predicate()?));
        }
        if let Some(list) = all {
            self.parts.push(and(to_predicates(list)?));
        }
        if let Some(list) = any {
            self.parts.push(or(to_predicates(list)?));
        }
        Ok(self)
    }

    pub fn field<K, F>(
        mut self,
        column: Column<E, K>,
        filter: &Option<F>,
    ) -> Result<Self, PredicateError>
    where
        F: FieldFilter<E, K>,
    {
        if let Some(filter) = filter {
            self.parts.push(filter.to_predicate(column)?);
        }
        Ok(self)
    }

    /// `has`: Some(true) requires a related row, Some(false) forbids one.
    pub fn edge<T, W>(
        mut self,
        relation: Relation<E, T>,
        has: Option<bool>,
        with: &Option<Vec<W>>,
    ) -> Result<Self, PredicateError>
    where
        T: DatabaseEntity,
        W: DatabaseFilter<Entity = T>,
    {
        match has {
            Some(true) => self.parts.push(relation.has()),
            Some(false) => self.parts.push(not(relation.has())),
            None => {}
        }
        if let Some(list) = with {
            self.parts.push(relation.has_with(to_predicates(list)?));
        }
        Ok(self)
    }

    pub fn build(self) -> Predicate<E> {
        and(self.parts)
    }
}

impl<E: DatabaseEntity> Default for WhereBuilder<E> {
    fn default() -> Self {
        Self::new()
    }
}

fn to_predicates<W: DatabaseFilter>(
    list: &[W],
) -> Result<Vec<Predicate<W::Entity>>, PredicateError> {
    list.iter().map(DatabaseFilter::to_predicate).collect()
}

// ============================================================================
// Ordering
// ============================================================================

/// A sortable field enum of one entity.
pub trait SortField: Copy + Send + Sync {
    fn column(&self) -> &'static str;
}

/// One ORDER BY term.
#[derive(InputObject, Clone, Debug)]
#[graphql(
    concrete(name = "CountryOrder", params(CountryOrderField)),
    concrete(name = "RegionOrder", params(RegionOrderField)),
    concrete(name = "StateOrder", params(StateOrderField)),
    concrete(name = "CityOrder", params(CityOrderField)),
    concrete(name = "AirportOrder", params(AirportOrderField))
)]
pub struct Order<F: InputType> {
    #[graphql(name = "Field")]
    pub field: F,
    #[graphql(name = "Direction", default)]
    pub direction: OrderDirection,
}

impl<F: InputType + SortField> DatabaseOrderBy for Order<F> {
    fn to_sql_order(&self) -> Option<String> {
        Some(format!("{} {}", self.field.column(), self.direction.to_sql()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphql::entities::{
        Airport, AirportWhereInput, City, CityWhereInput, State, StateWhereInput,
    };
    use assert_matches::assert_matches;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_operators_in_one_filter_are_anded() {
        let filter = StringFilter {
            has_prefix: Some("Ch".to_string()),
            not_eq: Some("Cheyenne".to_string()),
            ..Default::default()
        };
        let predicate = FieldFilter::to_predicate(&filter, City::NAME).unwrap();
        assert_eq!(
            predicate,
            and([City::NAME.not_eq("Cheyenne"), City::NAME.has_prefix("Ch")])
        );
    }

    #[test]
    fn test_empty_where_input_matches_everything() {
        let input = CityWhereInput::default();
        assert!(input.to_predicate().unwrap().is_all());
    }

    #[test]
    fn test_edge_flags() {
        let input = CityWhereInput {
            has_state: Some(false),
            has_state_with: Some(vec![StateWhereInput {
                code: Some(StringFilter {
                    eq: Some("IL".to_string()),
                    ..Default::default()
                }),
                ..Default::default()
            }]),
            ..Default::default()
        };
        assert_eq!(
            input.to_predicate().unwrap(),
            and([
                not(City::STATE.has()),
                City::STATE.has_with([State::CODE.eq("IL")]),
            ])
        );
    }

    #[test]
    fn test_bad_timestamp_is_invalid_argument() {
        let input = AirportWhereInput {
            activation_date: Some(DateFilter {
                lt: Some("last tuesday".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert_matches!(
            input.to_predicate(),
            Err(PredicateError::InvalidArgument { entity: "Airport", ref field, .. })
                if field == "activation_date"
        );
    }

    #[test]
    fn test_enum_filter_null_check() {
        let input = AirportWhereInput {
            tower_type: Some(EnumFilter {
                is_null: Some(true),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert_eq!(input.to_predicate().unwrap(), Airport::TOWER_TYPE.is_null());
    }

    #[test]
    fn test_order_sql() {
        let order = Order {
            field: CityOrderField::Name,
            direction: OrderDirection::Desc,
        };
        assert_eq!(order.to_sql_order().as_deref(), Some("name DESC"));
    }
}
