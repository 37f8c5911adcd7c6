//! Fixed-edge distribution binning
//!
//! Counts how many records fall into each `[lower, upper)` interval formed by
//! consecutive bin edges.
//!
//! Records whose value is missing or non-numeric are excluded from every bin.
//! The last edge is exclusive too, so a value equal to the final edge is not
//! counted anywhere. A distribution configured with fewer than two edges has
//! no bins.
//!
//! # Examples
//!
//! ```
//! use tabstat_analysis::{
//!     dataset::{Dataset, Record},
//!     distribution::{Distribution, DistributionSpec},
//! };
//!
//! let dataset = [1.0, 3.0, 5.0, 2.0]
//!     .into_iter()
//!     .map(|v| Record::from_iter([("hours", v)]))
//!     .collect::<Dataset>();
//! let spec = DistributionSpec::new("hours", vec![0.0, 2.0, 4.0]).with_unit("h");
//!
//! let distribution = Distribution::from_dataset(&dataset, &spec);
//! let bins = distribution
//!     .bins
//!     .iter()
//!     .map(|b| (b.range.as_str(), b.count))
//!     .collect::<Vec<_>>();
//! assert_eq!(bins, [("0-2h", 1), ("2-4h", 2)]);
//! ```

use serde::{Deserialize, Serialize};
use tabstat_stats::histogram::{Histogram, HistogramBin};

use crate::dataset::Dataset;

/// Configuration of one binned distribution.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DistributionSpec {
    /// Numeric column to bin
    pub column: String,
    /// Ascending bin edges
    pub edges: Vec<f64>,
    /// Suffix appended to each range label (e.g. `"h"` for hours)
    #[serde(default)]
    pub unit: String,
}

impl DistributionSpec {
    #[must_use]
    pub fn new(column: impl Into<String>, edges: Vec<f64>) -> Self {
        Self {
            column: column.into(),
            edges,
            unit: String::new(),
        }
    }

    #[must_use]
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }
}

/// The number of records whose value falls in `[lower, upper)`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DistributionBin {
    /// Display label, `"{lower}-{upper}{unit}"`
    pub range: String,
    /// Inclusive lower bound
    pub lower: f64,
    /// Exclusive upper bound
    pub upper: f64,
    /// Number of records in this bin
    pub count: usize,
}

impl DistributionBin {
    fn from_histogram_bin(bin: &HistogramBin, unit: &str) -> Self {
        let lower = bin.range.start;
        let upper = bin.range.end;
        Self {
            range: format!("{lower}-{upper}{unit}"),
            lower,
            upper,
            count: bin.count,
        }
    }
}

/// A binned distribution of one column.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Distribution {
    pub column: String,
    /// Bins in edge order
    pub bins: Vec<DistributionBin>,
}

impl Distribution {
    #[must_use]
    pub fn from_dataset(dataset: &Dataset, spec: &DistributionSpec) -> Self {
        if spec.edges.len() < 2 {
            tracing::warn!(
                column = %spec.column,
                edges = spec.edges.len(),
                "distribution needs at least two bin edges"
            );
        }
        let values = dataset.numbers(&spec.column).collect::<Vec<_>>();
        let histogram = Histogram::with_edges(values.iter().copied(), &spec.edges);
        let outside = values.len().saturating_sub(histogram.total());
        if outside > 0 {
            tracing::debug!(column = %spec.column, outside, "values outside every bin");
        }
        let bins = histogram
            .bins
            .iter()
            .map(|bin| DistributionBin::from_histogram_bin(bin, &spec.unit))
            .collect();
        Self {
            column: spec.column.clone(),
            bins,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{Record, Value};

    fn dataset(values: &[Value]) -> Dataset {
        values
            .iter()
            .map(|v| Record::from_iter([("t", v.clone())]))
            .collect()
    }

    fn counts(distribution: &Distribution) -> Vec<usize> {
        distribution.bins.iter().map(|b| b.count).collect()
    }

    #[test]
    fn test_upper_exclusive_boundaries() {
        let data = dataset(&[1.0, 3.0, 5.0, 2.0].map(Value::from));
        let distribution =
            Distribution::from_dataset(&data, &DistributionSpec::new("t", vec![0.0, 2.0, 4.0]));
        assert_eq!(counts(&distribution), [1, 2]);
        assert_eq!(distribution.bins[0].range, "0-2");
        assert_eq!(distribution.bins[1].lower, 2.0);
        assert_eq!(distribution.bins[1].upper, 4.0);
    }

    #[test]
    fn test_final_edge_dropped() {
        let data = dataset(&[0.0, 9.99, 10.0].map(Value::from));
        let spec = DistributionSpec::new("t", vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]).with_unit("h");
        let distribution = Distribution::from_dataset(&data, &spec);
        assert_eq!(counts(&distribution), [1, 0, 0, 0, 1]);
        assert_eq!(
            distribution
                .bins
                .iter()
                .map(|b| b.range.as_str())
                .collect::<Vec<_>>(),
            ["0-2h", "2-4h", "4-6h", "6-8h", "8-10h"]
        );
    }

    #[test]
    fn test_non_numeric_excluded() {
        // Text and nulls must not fall into the [0, 2) bin as zero
        let data = dataset(&[Value::from("0"), Value::Null, Value::from(0.5)]);
        let distribution =
            Distribution::from_dataset(&data, &DistributionSpec::new("t", vec![0.0, 2.0]));
        assert_eq!(counts(&distribution), [1]);
    }

    #[test]
    fn test_too_few_edges() {
        let data = dataset(&[Value::from(1.0)]);
        for edges in [vec![], vec![1.0]] {
            let distribution =
                Distribution::from_dataset(&data, &DistributionSpec::new("t", edges));
            assert!(distribution.bins.is_empty());
        }
    }

    #[test]
    fn test_fractional_labels() {
        let spec = DistributionSpec::new("t", vec![0.5, 1.25]);
        let distribution = Distribution::from_dataset(&Dataset::default(), &spec);
        assert_eq!(distribution.bins[0].range, "0.5-1.25");
        assert_eq!(distribution.bins[0].count, 0);
    }
}
