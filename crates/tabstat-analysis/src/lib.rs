//! Tabular statistics engine
//!
//! This crate turns a flat collection of typed records into summary
//! statistics, binned distributions, grouped aggregates and pairwise
//! correlation coefficients.
//!
//! # Overview
//!
//! Every capability is a pure function of a [`dataset::Dataset`] snapshot and
//! an explicit configuration. Nothing is cached or mutated, so running the
//! same capability twice on the same input gives identical output, and the
//! capabilities can run in any order.
//!
//! ## Capabilities
//!
//! 1. **Summary Statistics** ([`summary::SummaryTable`]): count, mean, median,
//!    standard deviation, min and max per numeric column
//! 2. **Distribution Binning** ([`distribution::Distribution`]): record counts
//!    over fixed `[lower, upper)` bins
//! 3. **Grouped Aggregation** ([`grouping::GroupAggregate`]): group sizes and
//!    per-field averages for named groups such as age brackets
//! 4. **Correlation Analysis** ([`correlation::CorrelationResult`]): Pearson
//!    coefficients over pairwise-complete records
//!
//! Two supporting views round out a report:
//!
//! - **Category Counts** ([`frequency::CategoryCounts`]): records per text label
//! - **Overview** ([`overview::DatasetOverview`]): record/field counts and completeness
//!
//! [`report::AnalysisReport`] runs all of them from one
//! [`config::AnalysisConfig`].
//!
//! ## Edge-Case Policy
//!
//! No capability returns an error. Missing and non-numeric values are
//! excluded, never coerced to zero. Degenerate inputs resolve to defined
//! defaults:
//!
//! | Situation                          | Result                      |
//! |------------------------------------|-----------------------------|
//! | Column without numeric values      | omitted from the summary    |
//! | Fewer than two bin edges           | no bins                     |
//! | Empty group                        | count `0`, every average `0`|
//! | Group definition without predicate | no groups at all            |
//! | No paired values / zero variance   | coefficient `0`             |
//!
//! # Examples
//!
//! ```
//! use tabstat_analysis::{
//!     config::AnalysisConfig,
//!     dataset::Dataset,
//!     report::AnalysisReport,
//! };
//!
//! let dataset: Dataset = serde_json::from_str(
//!     r#"[
//!         {"Age": 19, "Daily_Screen_Time(hrs)": 6.5, "Happiness_Index(1-10)": 6},
//!         {"Age": 44, "Daily_Screen_Time(hrs)": 2.0, "Happiness_Index(1-10)": 9}
//!     ]"#,
//! )?;
//!
//! let report = AnalysisReport::from_dataset(&dataset, &AnalysisConfig::default());
//! let screen = report.summary.get("Daily_Screen_Time(hrs)").unwrap();
//! assert_eq!(screen.mean, 4.25);
//! assert_eq!(report.groups[0].count, 1);
//! # Ok::<(), serde_json::Error>(())
//! ```

pub mod column_map;
pub mod config;
pub mod correlation;
pub mod dataset;
pub mod distribution;
pub mod frequency;
pub mod grouping;
pub mod overview;
pub mod report;
mod round;
pub mod summary;
