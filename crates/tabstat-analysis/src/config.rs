//! Analysis configuration
//!
//! [`AnalysisConfig`] declares which columns are numeric and how every
//! capability is parameterized. The engine never infers column roles from the
//! data; everything it computes is driven by this configuration.
//!
//! # Defaults
//!
//! [`AnalysisConfig::default`] describes the social media and mental health
//! survey the engine was first written for: seven numeric columns, a screen
//! time distribution in two-hour bins, four age brackets and five correlation
//! pairs.
//!
//! # Serialization
//!
//! The configuration is read from JSON. Only `numeric_columns` is required:
//!
//! ```json
//! {
//!   "numeric_columns": ["Age", "Happiness_Index(1-10)"],
//!   "distributions": [
//!     { "column": "Age", "edges": [10, 20, 30, 40, 50], "unit": "y" }
//!   ],
//!   "correlations": [
//!     { "label": "Age vs Happiness", "x": "Age", "y": "Happiness_Index(1-10)" }
//!   ]
//! }
//! ```
//!
//! # Validation
//!
//! [`AnalysisConfig::validate`] reports configuration that the engine would
//! silently degrade (for example a distribution with a single edge). The
//! engine itself never requires a valid configuration.

use std::ops::Bound;

use serde::{Deserialize, Serialize};

use crate::{
    correlation::CorrelationPair,
    distribution::DistributionSpec,
    frequency::{CategoryOrder, CategorySpec},
    grouping::{GroupDefinition, GroupPredicate, GroupingSpec},
};

pub const AGE: &str = "Age";
pub const SCREEN_TIME: &str = "Daily_Screen_Time(hrs)";
pub const SLEEP_QUALITY: &str = "Sleep_Quality(1-10)";
pub const STRESS_LEVEL: &str = "Stress_Level(1-10)";
pub const DAYS_WITHOUT_SOCIAL_MEDIA: &str = "Days_Without_Social_Media";
pub const EXERCISE_FREQUENCY: &str = "Exercise_Frequency(week)";
pub const HAPPINESS_INDEX: &str = "Happiness_Index(1-10)";
pub const GENDER: &str = "Gender";
pub const PLATFORM: &str = "Social_Media_Platform";

/// A configuration problem that makes a capability produce empty or
/// meaningless output.
#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error)]
pub enum ConfigError {
    #[display("distribution of {column} needs at least two bin edges, got {edges}")]
    TooFewBinEdges { column: String, edges: usize },
    #[display("bin edges of {column} are not in ascending order")]
    UnsortedBinEdges { column: String },
    #[display("group {label} has no predicate")]
    MissingGroupPredicate { label: String },
    #[display("{column} is used as a numeric column but not declared in numeric_columns")]
    UndeclaredNumericColumn { column: String },
}

/// Complete configuration of an analysis pass.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AnalysisConfig {
    /// Columns to summarize; also the columns checked for missing cells
    pub numeric_columns: Vec<String>,
    /// Numeric column whose observed range is reported in the overview
    #[serde(default)]
    pub range_column: Option<String>,
    #[serde(default)]
    pub distributions: Vec<DistributionSpec>,
    #[serde(default)]
    pub grouping: GroupingSpec,
    #[serde(default)]
    pub correlations: Vec<CorrelationPair>,
    #[serde(default)]
    pub categories: Vec<CategorySpec>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        let age_bracket = |label: &str, lower: f64, upper: Bound<f64>| {
            GroupDefinition::new(
                label,
                GroupPredicate::range(AGE, Bound::Included(lower), upper),
            )
        };

        Self {
            numeric_columns: [
                AGE,
                SCREEN_TIME,
                SLEEP_QUALITY,
                STRESS_LEVEL,
                DAYS_WITHOUT_SOCIAL_MEDIA,
                EXERCISE_FREQUENCY,
                HAPPINESS_INDEX,
            ]
            .map(str::to_owned)
            .to_vec(),
            range_column: Some(AGE.to_owned()),
            distributions: vec![
                DistributionSpec::new(SCREEN_TIME, vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0])
                    .with_unit("h"),
            ],
            grouping: GroupingSpec {
                groups: vec![
                    age_bracket("16-20", 16.0, Bound::Excluded(21.0)),
                    age_bracket("21-30", 21.0, Bound::Excluded(31.0)),
                    age_bracket("31-40", 31.0, Bound::Excluded(41.0)),
                    age_bracket("41-50", 41.0, Bound::Included(50.0)),
                ],
                fields: [SCREEN_TIME, HAPPINESS_INDEX, STRESS_LEVEL]
                    .map(str::to_owned)
                    .to_vec(),
            },
            correlations: vec![
                CorrelationPair::new("Screen Time vs Sleep Quality", SCREEN_TIME, SLEEP_QUALITY),
                CorrelationPair::new("Screen Time vs Stress Level", SCREEN_TIME, STRESS_LEVEL),
                CorrelationPair::new("Stress vs Happiness", STRESS_LEVEL, HAPPINESS_INDEX),
                CorrelationPair::new("Exercise vs Happiness", EXERCISE_FREQUENCY, HAPPINESS_INDEX),
                CorrelationPair::new(
                    "Days Without SM vs Happiness",
                    DAYS_WITHOUT_SOCIAL_MEDIA,
                    HAPPINESS_INDEX,
                ),
            ],
            categories: vec![
                CategorySpec::new(GENDER, CategoryOrder::Appearance),
                CategorySpec::new(PLATFORM, CategoryOrder::CountDescending),
            ],
        }
    }
}

impl AnalysisConfig {
    /// Checks the configuration, returning the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let declared = |column: &str| self.numeric_columns.iter().any(|c| c == column);
        let require_declared = |column: &str| {
            if declared(column) {
                Ok(())
            } else {
                Err(ConfigError::UndeclaredNumericColumn {
                    column: column.to_owned(),
                })
            }
        };

        if let Some(column) = &self.range_column {
            require_declared(column)?;
        }

        for spec in &self.distributions {
            require_declared(&spec.column)?;
            if spec.edges.len() < 2 {
                return Err(ConfigError::TooFewBinEdges {
                    column: spec.column.clone(),
                    edges: spec.edges.len(),
                });
            }
            if !spec.edges.is_sorted() {
                return Err(ConfigError::UnsortedBinEdges {
                    column: spec.column.clone(),
                });
            }
        }

        for group in &self.grouping.groups {
            let Some(predicate) = &group.predicate else {
                return Err(ConfigError::MissingGroupPredicate {
                    label: group.label.clone(),
                });
            };
            if let GroupPredicate::Range { column, .. } = predicate {
                require_declared(column)?;
            }
        }
        for field in &self.grouping.fields {
            require_declared(field)?;
        }

        for pair in &self.correlations {
            require_declared(&pair.x)?;
            require_declared(&pair.y)?;
        }

        Ok(())
    }
}
