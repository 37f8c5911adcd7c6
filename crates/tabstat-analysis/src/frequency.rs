//! Category frequency counts
//!
//! Counts records per distinct text label of a categorical column. Records
//! whose value is missing, `null`, boolean or numeric are not counted.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::dataset::Dataset;

/// Output order of category counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryOrder {
    /// Order in which labels first appear in the dataset
    #[default]
    Appearance,
    /// Most frequent first; ties keep appearance order
    CountDescending,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CategorySpec {
    pub column: String,
    #[serde(default)]
    pub order: CategoryOrder,
}

impl CategorySpec {
    #[must_use]
    pub fn new(column: impl Into<String>, order: CategoryOrder) -> Self {
        Self {
            column: column.into(),
            order,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CategoryCount {
    pub label: String,
    pub count: usize,
}

/// Frequency counts of one categorical column.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CategoryCounts {
    pub column: String,
    pub counts: Vec<CategoryCount>,
}

impl CategoryCounts {
    /// Counts the labels of `spec.column`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tabstat_analysis::{
    ///     dataset::{Dataset, Record},
    ///     frequency::{CategoryCounts, CategoryOrder, CategorySpec},
    /// };
    ///
    /// let dataset = ["X", "Y", "Y"]
    ///     .into_iter()
    ///     .map(|p| Record::from_iter([("platform", p)]))
    ///     .collect::<Dataset>();
    /// let spec = CategorySpec::new("platform", CategoryOrder::CountDescending);
    ///
    /// let counts = CategoryCounts::from_dataset(&dataset, &spec);
    /// assert_eq!(counts.counts[0].label, "Y");
    /// assert_eq!(counts.counts[0].count, 2);
    /// ```
    #[must_use]
    pub fn from_dataset(dataset: &Dataset, spec: &CategorySpec) -> Self {
        let mut index = HashMap::<&str, usize>::new();
        let mut counts = Vec::<CategoryCount>::new();

        for label in dataset.records().iter().filter_map(|r| r.text(&spec.column)) {
            let idx = *index.entry(label).or_insert_with(|| {
                counts.push(CategoryCount {
                    label: label.to_owned(),
                    count: 0,
                });
                counts.len() - 1
            });
            counts[idx].count += 1;
        }

        if spec.order == CategoryOrder::CountDescending {
            // Stable sort keeps appearance order among ties
            counts.sort_by(|a, b| b.count.cmp(&a.count));
        }

        Self {
            column: spec.column.clone(),
            counts,
        }
    }

    /// Total number of counted records.
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.iter().map(|c| c.count).sum()
    }
}
