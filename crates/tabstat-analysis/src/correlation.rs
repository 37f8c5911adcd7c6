//! Pairwise Pearson correlation
//!
//! Each configured [`CorrelationPair`] is correlated over the records where
//! both columns are numeric (pairwise-complete filtering); records missing
//! either value are dropped for that pair only.
//!
//! Degenerate inputs resolve to a coefficient of `0`: no usable records, or
//! zero variance in either column. Coefficients are rounded to three decimal
//! places.
//!
//! # Examples
//!
//! ```
//! use tabstat_analysis::{
//!     correlation::{CorrelationPair, CorrelationResult},
//!     dataset::{Dataset, Record},
//! };
//!
//! let dataset = (1..=5)
//!     .map(|x| Record::from_iter([("x", f64::from(x)), ("y", 2.0 * f64::from(x))]))
//!     .collect::<Dataset>();
//! let pairs = [CorrelationPair::new("x vs y", "x", "y")];
//!
//! let results = CorrelationResult::collect_all(&dataset, &pairs);
//! assert_eq!(results[0].label, "x vs y");
//! assert_eq!(results[0].coefficient, 1.0);
//! ```

use serde::{Deserialize, Serialize};
use tabstat_stats::correlation::pearson;

use crate::{dataset::Dataset, round::round_to};

/// Two named numeric columns to correlate.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CorrelationPair {
    pub label: String,
    pub x: String,
    pub y: String,
}

impl CorrelationPair {
    #[must_use]
    pub fn new(label: impl Into<String>, x: impl Into<String>, y: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            x: x.into(),
            y: y.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CorrelationResult {
    pub label: String,
    /// Pearson coefficient rounded to 3 decimal places; `0` when undefined
    pub coefficient: f64,
    /// Number of records where both columns are numeric
    pub observations: usize,
}

impl CorrelationResult {
    #[must_use]
    pub fn from_dataset(dataset: &Dataset, pair: &CorrelationPair) -> Self {
        let pairs = dataset.numeric_pairs(&pair.x, &pair.y).collect::<Vec<_>>();
        let observations = pairs.len();
        let coefficient = pearson(pairs).map_or(0.0, |r| round_to(r, 3));
        Self {
            label: pair.label.clone(),
            coefficient,
            observations,
        }
    }

    /// Correlates every pair, preserving input order.
    #[must_use]
    pub fn collect_all(dataset: &Dataset, pairs: &[CorrelationPair]) -> Vec<Self> {
        pairs
            .iter()
            .map(|pair| Self::from_dataset(dataset, pair))
            .collect()
    }
}
