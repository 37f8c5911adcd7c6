//! Per-column summary statistics
//!
//! For every configured numeric column this module reports count, mean,
//! median, standard deviation, min and max over the values of that column
//! that are numeric.
//!
//! # Conventions
//!
//! - **Median** is the element at index `count / 2` of the sorted values. For
//!   an even number of values this is the upper of the two middle elements,
//!   so `[1, 2, 3, 4]` has median `3`, not `2.5`.
//! - **Standard deviation** is the population standard deviation (divided by
//!   `count`, not `count - 1`).
//! - **Rounding**: mean, median and standard deviation are rounded to two
//!   decimal places; min and max are reported at full precision.
//! - **Missing data**: non-numeric and absent values are skipped. A column
//!   with no numeric values at all has no entry in the table.
//!
//! # Examples
//!
//! ```
//! use tabstat_analysis::{
//!     dataset::{Dataset, Record},
//!     summary::SummaryTable,
//! };
//!
//! let dataset = [1.0, 2.0, 3.0, 4.0]
//!     .into_iter()
//!     .map(|v| Record::from_iter([("score", v)]))
//!     .collect::<Dataset>();
//!
//! let table = SummaryTable::from_dataset(&dataset, &["score", "absent"]);
//! let score = table.get("score").unwrap();
//! assert_eq!(score.count, 4);
//! assert_eq!(score.median, 3.0);
//! assert_eq!(score.mean, 2.5);
//! assert!(table.get("absent").is_none());
//! ```

use serde::{Deserialize, Serialize};
use tabstat_stats::descriptive::DescriptiveStats;

use crate::{column_map::ColumnMap, dataset::Dataset, round::round_to};

/// Summary statistics of one numeric column.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct StatisticsSummary {
    /// Number of numeric values in the column
    pub count: usize,
    /// Arithmetic mean, rounded to 2 decimal places
    pub mean: f64,
    /// Upper-middle median, rounded to 2 decimal places
    pub median: f64,
    /// Population standard deviation, rounded to 2 decimal places
    pub std: f64,
    /// Smallest value
    pub min: f64,
    /// Largest value
    pub max: f64,
}

impl From<&DescriptiveStats> for StatisticsSummary {
    fn from(stats: &DescriptiveStats) -> Self {
        Self {
            count: stats.count,
            mean: round_to(stats.mean, 2),
            median: round_to(stats.median, 2),
            std: round_to(stats.std_dev, 2),
            min: stats.min,
            max: stats.max,
        }
    }
}

/// Summary statistics keyed by column, in configured column order.
pub type SummaryTable = ColumnMap<StatisticsSummary>;

impl SummaryTable {
    /// Summarizes each of `columns` over `dataset`.
    ///
    /// Columns without any numeric value are omitted.
    pub fn from_dataset<S>(dataset: &Dataset, columns: &[S]) -> Self
    where
        S: AsRef<str>,
    {
        columns
            .iter()
            .map(AsRef::as_ref)
            .filter_map(|column| {
                let Some(stats) = DescriptiveStats::new(dataset.numbers(column)) else {
                    tracing::debug!(column, "no numeric values, omitting column from summary");
                    return None;
                };
                Some((column.to_owned(), StatisticsSummary::from(&stats)))
            })
            .collect()
    }
}
