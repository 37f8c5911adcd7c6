//! Dataset overview
//!
//! Record and field counts, missing cells across the numeric columns, and the
//! observed range of one column.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::dataset::Dataset;

/// Observed range of one numeric column.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct NumericRange {
    pub column: String,
    pub min: f64,
    pub max: f64,
}

/// Shape and completeness of a dataset.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DatasetOverview {
    /// Number of records
    pub record_count: usize,
    /// Number of distinct field names across all records
    pub field_count: usize,
    /// Cells of the numeric columns that are missing or non-numeric
    pub missing_numeric_cells: usize,
    /// Range of the highlighted column, if configured and non-empty
    pub range: Option<NumericRange>,
}

impl DatasetOverview {
    #[must_use]
    pub fn from_dataset<S>(
        dataset: &Dataset,
        numeric_columns: &[S],
        range_column: Option<&str>,
    ) -> Self
    where
        S: AsRef<str>,
    {
        let field_count = dataset
            .records()
            .iter()
            .flat_map(|r| r.field_names())
            .collect::<BTreeSet<_>>()
            .len();

        let missing_numeric_cells = dataset
            .records()
            .iter()
            .map(|record| {
                numeric_columns
                    .iter()
                    .filter(|column| record.number(column.as_ref()).is_none())
                    .count()
            })
            .sum();

        let range = range_column.and_then(|column| {
            let (min, max) = dataset.numbers(column).fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((min, max)) => Some((f64::min(min, v), f64::max(max, v))),
            })?;
            Some(NumericRange {
                column: column.to_owned(),
                min,
                max,
            })
        });

        Self {
            record_count: dataset.len(),
            field_count,
            missing_numeric_cells,
            range,
        }
    }
}
