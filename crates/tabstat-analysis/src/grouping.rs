//! Grouped aggregation
//!
//! Splits records into named groups and averages several numeric fields per
//! group.
//!
//! # Group Membership
//!
//! Each [`GroupDefinition`] carries its own [`GroupPredicate`], evaluated
//! independently for every record:
//!
//! - A record matching no group contributes to none.
//! - Overlapping predicates count a record in every group it matches; groups
//!   are independent filters, not a partition.
//! - Range bounds are explicit per group, so brackets such as `16 <= age < 21`
//!   and `41 <= age <= 50` can coexist in the same configuration.
//!
//! # Averages
//!
//! For each tracked field the average is the sum of the numeric values of
//! that field within the group divided by the group size. The divisor is the
//! number of records in the group even when some of them lack the field. An
//! empty group averages to `0`. Averages are rounded to one decimal place.
//!
//! # Malformed Configuration
//!
//! If any group definition has no predicate the whole aggregation is empty.
//!
//! # Examples
//!
//! ```
//! use std::ops::Bound;
//!
//! use tabstat_analysis::{
//!     dataset::{Dataset, Record},
//!     grouping::{GroupAggregate, GroupDefinition, GroupPredicate, GroupingSpec},
//! };
//!
//! let dataset = Dataset::from_iter([
//!     Record::from_iter([("age", 18.0), ("stress", 6.0)]),
//!     Record::from_iter([("age", 19.0), ("stress", 8.0)]),
//!     Record::from_iter([("age", 35.0), ("stress", 4.0)]),
//! ]);
//! let spec = GroupingSpec {
//!     groups: vec![
//!         GroupDefinition::new(
//!             "16-20",
//!             GroupPredicate::range("age", Bound::Included(16.0), Bound::Excluded(21.0)),
//!         ),
//!         GroupDefinition::new(
//!             "41-50",
//!             GroupPredicate::range("age", Bound::Included(41.0), Bound::Included(50.0)),
//!         ),
//!     ],
//!     fields: vec!["stress".to_owned()],
//! };
//!
//! let groups = GroupAggregate::collect_all(&dataset, &spec);
//! assert_eq!(groups[0].count, 2);
//! assert_eq!(groups[0].averages.get("stress"), Some(&7.0));
//! assert_eq!(groups[1].count, 0);
//! assert_eq!(groups[1].averages.get("stress"), Some(&0.0));
//! ```

use std::ops::{Bound, RangeBounds as _};

use serde::{Deserialize, Serialize};

use crate::{
    column_map::ColumnMap,
    dataset::{Dataset, Record},
    round::round_to,
};

/// Membership test for one group.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GroupPredicate {
    /// The record's numeric value of `column` lies within the bounds.
    Range {
        column: String,
        lower: Bound<f64>,
        upper: Bound<f64>,
    },
    /// The record's text value of `column` equals `value`.
    Category { column: String, value: String },
}

impl GroupPredicate {
    #[must_use]
    pub fn range(column: impl Into<String>, lower: Bound<f64>, upper: Bound<f64>) -> Self {
        Self::Range {
            column: column.into(),
            lower,
            upper,
        }
    }

    #[must_use]
    pub fn category(column: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Category {
            column: column.into(),
            value: value.into(),
        }
    }

    /// Returns the column this predicate reads.
    #[must_use]
    pub fn column(&self) -> &str {
        match self {
            Self::Range { column, .. } | Self::Category { column, .. } => column,
        }
    }

    /// Returns whether `record` belongs to the group.
    ///
    /// Missing and non-numeric values never satisfy a range predicate.
    #[must_use]
    pub fn matches(&self, record: &Record) -> bool {
        match self {
            Self::Range {
                column,
                lower,
                upper,
            } => record
                .number(column)
                .is_some_and(|v| (*lower, *upper).contains(&v)),
            Self::Category { column, value } => record.text(column) == Some(value.as_str()),
        }
    }
}

/// A named group.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct GroupDefinition {
    pub label: String,
    /// `None` marks a malformed definition
    #[serde(default)]
    pub predicate: Option<GroupPredicate>,
}

impl GroupDefinition {
    #[must_use]
    pub fn new(label: impl Into<String>, predicate: GroupPredicate) -> Self {
        Self {
            label: label.into(),
            predicate: Some(predicate),
        }
    }
}

/// Configuration of a grouped aggregation.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct GroupingSpec {
    /// Groups, in output order
    pub groups: Vec<GroupDefinition>,
    /// Numeric fields to average within each group
    pub fields: Vec<String>,
}

/// Size and per-field averages of one group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupAggregate {
    pub label: String,
    /// Number of records matching the group's predicate
    pub count: usize,
    /// Average per tracked field, rounded to 1 decimal place
    pub averages: ColumnMap<f64>,
}

impl GroupAggregate {
    /// Aggregates every group of `spec`, preserving group order.
    ///
    /// Returns an empty list if any group has no predicate.
    #[must_use]
    pub fn collect_all(dataset: &Dataset, spec: &GroupingSpec) -> Vec<Self> {
        let predicates = spec
            .groups
            .iter()
            .map(|group| group.predicate.as_ref().map(|p| (group.label.as_str(), p)))
            .collect::<Option<Vec<_>>>();
        let Some(predicates) = predicates else {
            tracing::warn!("group definition without predicate, skipping grouped aggregation");
            return vec![];
        };

        predicates
            .into_iter()
            .map(|(label, predicate)| Self::collect(dataset, label, predicate, &spec.fields))
            .collect()
    }

    #[expect(clippy::cast_precision_loss)]
    fn collect(
        dataset: &Dataset,
        label: &str,
        predicate: &GroupPredicate,
        fields: &[String],
    ) -> Self {
        let members = dataset
            .records()
            .iter()
            .filter(|record| predicate.matches(record))
            .collect::<Vec<_>>();
        let count = members.len();
        tracing::debug!(label, column = predicate.column(), count, "group collected");

        let averages = fields
            .iter()
            .map(|field| {
                let average = if count == 0 {
                    0.0
                } else {
                    let sum = members.iter().filter_map(|r| r.number(field)).sum::<f64>();
                    sum / count as f64
                };
                (field.clone(), round_to(average, 1))
            })
            .collect();

        Self {
            label: label.to_owned(),
            count,
            averages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Value;

    fn person(age: f64, screen: Value, happiness: f64) -> Record {
        Record::from_iter([
            ("age", Value::from(age)),
            ("screen", screen),
            ("happiness", Value::from(happiness)),
        ])
    }

    fn brackets() -> Vec<GroupDefinition> {
        vec![
            GroupDefinition::new(
                "16-20",
                GroupPredicate::range("age", Bound::Included(16.0), Bound::Excluded(21.0)),
            ),
            GroupDefinition::new(
                "41-50",
                GroupPredicate::range("age", Bound::Included(41.0), Bound::Included(50.0)),
            ),
        ]
    }

    fn spec(groups: Vec<GroupDefinition>) -> GroupingSpec {
        GroupingSpec {
            groups,
            fields: vec!["screen".to_owned(), "happiness".to_owned()],
        }
    }

    #[test]
    fn test_bracket_bounds() {
        let dataset = Dataset::from_iter([
            person(16.0, Value::from(1.0), 5.0),
            person(21.0, Value::from(2.0), 5.0),
            person(50.0, Value::from(3.0), 5.0),
            person(51.0, Value::from(4.0), 5.0),
        ]);
        let groups = GroupAggregate::collect_all(&dataset, &spec(brackets()));
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].label, "16-20");
        assert_eq!(groups[0].count, 1);
        assert_eq!(groups[0].averages.get("screen"), Some(&1.0));
        // Upper bound of the last bracket is inclusive
        assert_eq!(groups[1].count, 1);
        assert_eq!(groups[1].averages.get("screen"), Some(&3.0));
    }

    #[test]
    fn test_empty_group_averages_zero() {
        let dataset = Dataset::from_iter([person(30.0, Value::from(5.0), 5.0)]);
        let groups = GroupAggregate::collect_all(&dataset, &spec(brackets()));
        for group in &groups {
            assert_eq!(group.count, 0);
            assert_eq!(group.averages.get("screen"), Some(&0.0));
            assert_eq!(group.averages.get("happiness"), Some(&0.0));
        }
    }

    #[test]
    fn test_denominator_is_group_size() {
        let dataset = Dataset::from_iter([
            person(18.0, Value::from(4.0), 6.0),
            person(19.0, Value::Null, 7.0),
        ]);
        let groups = GroupAggregate::collect_all(&dataset, &spec(brackets()));
        assert_eq!(groups[0].count, 2);
        // 4.0 / 2, not 4.0 / 1
        assert_eq!(groups[0].averages.get("screen"), Some(&2.0));
        assert_eq!(groups[0].averages.get("happiness"), Some(&6.5));
    }

    #[test]
    fn test_overlapping_groups_double_count() {
        let groups = vec![
            GroupDefinition::new(
                "teens",
                GroupPredicate::range("age", Bound::Included(13.0), Bound::Excluded(20.0)),
            ),
            GroupDefinition::new(
                "under 18",
                GroupPredicate::range("age", Bound::Unbounded, Bound::Excluded(18.0)),
            ),
        ];
        let dataset = Dataset::from_iter([
            person(15.0, Value::from(1.0), 1.0),
            person(19.0, Value::from(1.0), 1.0),
        ]);
        let groups = GroupAggregate::collect_all(&dataset, &spec(groups));
        assert_eq!(groups[0].count, 2);
        assert_eq!(groups[1].count, 1);
    }

    #[test]
    fn test_category_predicate() {
        let dataset = Dataset::from_iter([
            Record::from_iter([("gender", Value::from("Female")), ("score", Value::from(3.0))]),
            Record::from_iter([("gender", Value::from("Male")), ("score", Value::from(5.0))]),
            Record::from_iter([("gender", Value::from("Female")), ("score", Value::from(4.0))]),
        ]);
        let spec = GroupingSpec {
            groups: vec![GroupDefinition::new(
                "Female",
                GroupPredicate::category("gender", "Female"),
            )],
            fields: vec!["score".to_owned()],
        };
        let groups = GroupAggregate::collect_all(&dataset, &spec);
        assert_eq!(groups[0].count, 2);
        assert_eq!(groups[0].averages.get("score"), Some(&3.5));
    }

    #[test]
    fn test_missing_predicate_yields_empty() {
        let mut groups = brackets();
        groups.push(GroupDefinition {
            label: "broken".to_owned(),
            predicate: None,
        });
        let dataset = Dataset::from_iter([person(18.0, Value::from(1.0), 1.0)]);
        assert!(GroupAggregate::collect_all(&dataset, &spec(groups)).is_empty());
    }

    #[test]
    fn test_non_numeric_key_matches_no_range() {
        let dataset = Dataset::from_iter([Record::from_iter([("age", "eighteen")])]);
        let groups = GroupAggregate::collect_all(&dataset, &spec(brackets()));
        assert!(groups.iter().all(|g| g.count == 0));
    }

    #[test]
    fn test_average_rounds_stored_value() {
        // 0.15 is stored just below the midpoint
        let dataset = Dataset::from_iter([person(18.0, Value::from(0.15), 0.25)]);
        let groups = GroupAggregate::collect_all(&dataset, &spec(brackets()));
        assert_eq!(groups[0].averages.get("screen"), Some(&0.1));
        // 0.25 is an exact midpoint
        assert_eq!(groups[0].averages.get("happiness"), Some(&0.3));
    }

    #[test]
    fn test_predicate_json() {
        let json = r#"{"kind": "range", "column": "Age", "lower": {"Included": 41.0}, "upper": {"Included": 50.0}}"#;
        let predicate: GroupPredicate = serde_json::from_str(json).unwrap();
        assert_eq!(
            predicate,
            GroupPredicate::range("Age", Bound::Included(41.0), Bound::Included(50.0))
        );
        assert_eq!(predicate.column(), "Age");
    }
}
