//! Typed records and datasets
//!
//! This module provides the in-memory representation of the tabular data the
//! analysis engine consumes.
//!
//! # Overview
//!
//! A [`Dataset`] is an ordered sequence of [`Record`]s. Each record maps field
//! names to a [`Value`]. Parsing and type coercion happen before records reach
//! this crate; the engine only distinguishes numeric values from everything
//! else.
//!
//! # Numeric Values
//!
//! A field counts as numeric when it holds [`Value::Number`] with a value that
//! is not `NaN`. Text labels, booleans, `null` placeholders and absent fields
//! are all "not a number" and are excluded from numeric computations rather
//! than coerced to zero.
//!
//! # Serialization
//!
//! Records serialize as plain JSON objects and a dataset as a JSON array:
//!
//! ```json
//! [
//!   { "Age": 21, "Gender": "Female", "Daily_Screen_Time(hrs)": 5.2 },
//!   { "Age": 34, "Gender": "Male", "Daily_Screen_Time(hrs)": null }
//! ]
//! ```
//!
//! # Examples
//!
//! ```
//! use tabstat_analysis::dataset::{Dataset, Record, Value};
//!
//! let dataset = Dataset::from_iter([
//!     Record::from_iter([("Age", Value::from(21.0)), ("Gender", Value::from("Female"))]),
//!     Record::from_iter([("Age", Value::Null), ("Gender", Value::from("Male"))]),
//! ]);
//!
//! assert_eq!(dataset.len(), 2);
//! assert_eq!(dataset.numbers("Age").collect::<Vec<_>>(), [21.0]);
//! assert_eq!(dataset.records()[1].text("Gender"), Some("Male"));
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single cell value.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Deserialize,
    Serialize,
    derive_more::Display,
    derive_more::From,
    derive_more::IsVariant,
)]
#[serde(untagged)]
pub enum Value {
    /// A real number
    #[display("{_0}")]
    Number(f64),
    /// A categorical text label
    #[display("{_0}")]
    Text(String),
    /// A boolean flag; neither numeric nor categorical
    #[display("{_0}")]
    Bool(bool),
    /// A placeholder for a missing or unparsable cell
    #[display("null")]
    #[from(skip)]
    Null,
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl Value {
    /// Returns the numeric value, or `None` if this value is not a number.
    ///
    /// `NaN` is treated as not a number.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(v) if !v.is_nan() => Some(*v),
            _ => None,
        }
    }

    /// Returns the text label, or `None` if this value is not categorical.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

/// A mapping from field name to value.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Record {
    fields: BTreeMap<String, Value>,
}

impl<K, V> FromIterator<(K, V)> for Record
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl Record {
    /// Returns the raw value of a field, if present.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Returns the value of a field if it is present and numeric.
    #[must_use]
    pub fn number(&self, field: &str) -> Option<f64> {
        self.get(field).and_then(Value::as_number)
    }

    /// Returns the value of a field if it is present and categorical.
    #[must_use]
    pub fn text(&self, field: &str) -> Option<&str> {
        self.get(field).and_then(Value::as_text)
    }

    /// Iterates over the field names of this record in sorted order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}

/// An ordered, read-only snapshot of records.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Dataset {
    records: Vec<Record>,
}

impl From<Vec<Record>> for Dataset {
    fn from(records: Vec<Record>) -> Self {
        Self { records }
    }
}

impl FromIterator<Record> for Dataset {
    fn from_iter<T: IntoIterator<Item = Record>>(iter: T) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl Dataset {
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates over the numeric values of a column in record order.
    ///
    /// Records whose value is missing or non-numeric are skipped.
    pub fn numbers<'a>(&'a self, column: &'a str) -> impl Iterator<Item = f64> + 'a {
        self.records.iter().filter_map(move |r| r.number(column))
    }

    /// Iterates over `(x, y)` pairs from records where both columns are numeric.
    pub fn numeric_pairs<'a>(
        &'a self,
        x: &'a str,
        y: &'a str,
    ) -> impl Iterator<Item = (f64, f64)> + 'a {
        self.records
            .iter()
            .filter_map(move |r| Some((r.number(x)?, r.number(y)?)))
    }
}
