//! Numeric primitives for the tabstat analysis engine.
//!
//! This crate works on plain `f64` values that have already been filtered
//! down to valid numbers. It knows nothing about records, columns or
//! configuration; those live in `tabstat-analysis`.
//!
//! - **Descriptive statistics**: count, mean, upper-middle median, population variance,
//!   standard deviation, min and max
//! - **Histograms**: counts over caller-supplied, half-open bin edges
//! - **Correlation**: Pearson product-moment correlation over paired values
//!
//! # Modules
//!
//! - [`descriptive`]: Descriptive statistics for summarizing datasets
//! - [`histogram`]: Fixed-edge histogram construction
//! - [`correlation`]: Pearson correlation coefficient
//!
//! # Examples
//!
//! ## Computing descriptive statistics
//!
//! ```
//! use tabstat_stats::descriptive::DescriptiveStats;
//!
//! let values = [1.0, 2.0, 3.0, 4.0, 5.0];
//! let stats = DescriptiveStats::new(values).unwrap();
//! assert_eq!(stats.mean, 3.0);
//! ```
//!
//! ## Creating a histogram
//!
//! ```
//! use tabstat_stats::histogram::Histogram;
//!
//! let histogram = Histogram::with_edges([1.0, 3.0, 5.0, 2.0], &[0.0, 2.0, 4.0]);
//! let counts = histogram.bins.iter().map(|b| b.count).collect::<Vec<_>>();
//! assert_eq!(counts, [1, 2]);
//! ```
//!
//! ## Correlating two variables
//!
//! ```
//! use tabstat_stats::correlation::pearson;
//!
//! let r = pearson([(1.0, 2.0), (2.0, 4.0), (3.0, 6.0)]).unwrap();
//! assert!((r - 1.0).abs() < 1e-12);
//! ```

pub mod correlation;
pub mod descriptive;
pub mod histogram;
