//! Combined analysis report

use serde::Serialize;

use crate::{
    config::AnalysisConfig,
    correlation::CorrelationResult,
    dataset::Dataset,
    distribution::Distribution,
    frequency::CategoryCounts,
    grouping::GroupAggregate,
    overview::DatasetOverview,
    summary::SummaryTable,
};

/// Every configured capability computed over one dataset snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub overview: DatasetOverview,
    pub summary: SummaryTable,
    pub distributions: Vec<Distribution>,
    pub groups: Vec<GroupAggregate>,
    pub correlations: Vec<CorrelationResult>,
    pub categories: Vec<CategoryCounts>,
}

impl AnalysisReport {
    /// Runs every capability configured in `config` over `dataset`.
    ///
    /// The capabilities are independent; a misconfigured one degrades to
    /// empty output without affecting the others.
    ///
    /// # Examples
    ///
    /// ```
    /// use tabstat_analysis::{config::AnalysisConfig, dataset::Dataset, report::AnalysisReport};
    ///
    /// let report = AnalysisReport::from_dataset(&Dataset::default(), &AnalysisConfig::default());
    /// assert_eq!(report.overview.record_count, 0);
    /// assert!(report.summary.is_empty());
    /// assert!(report.groups.iter().all(|g| g.count == 0));
    /// assert!(report.correlations.iter().all(|c| c.coefficient == 0.0));
    /// ```
    #[must_use]
    pub fn from_dataset(dataset: &Dataset, config: &AnalysisConfig) -> Self {
        Self {
            overview: DatasetOverview::from_dataset(
                dataset,
                &config.numeric_columns,
                config.range_column.as_deref(),
            ),
            summary: SummaryTable::from_dataset(dataset, &config.numeric_columns),
            distributions: config
                .distributions
                .iter()
                .map(|spec| Distribution::from_dataset(dataset, spec))
                .collect(),
            groups: GroupAggregate::collect_all(dataset, &config.grouping),
            correlations: CorrelationResult::collect_all(dataset, &config.correlations),
            categories: config
                .categories
                .iter()
                .map(|spec| CategoryCounts::from_dataset(dataset, spec))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::{
            AGE, DAYS_WITHOUT_SOCIAL_MEDIA, EXERCISE_FREQUENCY, GENDER, HAPPINESS_INDEX, PLATFORM,
            SCREEN_TIME, SLEEP_QUALITY, STRESS_LEVEL,
        },
        dataset::{Record, Value},
    };

    fn respondent(
        age: f64,
        gender: &str,
        screen: f64,
        sleep: f64,
        stress: f64,
        platform: &str,
        happiness: f64,
    ) -> Record {
        Record::from_iter([
            (AGE, Value::from(age)),
            (GENDER, Value::from(gender)),
            (SCREEN_TIME, Value::from(screen)),
            (SLEEP_QUALITY, Value::from(sleep)),
            (STRESS_LEVEL, Value::from(stress)),
            (DAYS_WITHOUT_SOCIAL_MEDIA, Value::from(3.0)),
            (EXERCISE_FREQUENCY, Value::from(2.0)),
            (PLATFORM, Value::from(platform)),
            (HAPPINESS_INDEX, Value::from(happiness)),
        ])
    }

    fn survey() -> Dataset {
        Dataset::from_iter([
            respondent(18.0, "Female", 7.5, 4.0, 8.0, "TikTok", 5.0),
            respondent(25.0, "Male", 3.0, 7.0, 5.0, "Instagram", 8.0),
            respondent(33.0, "Female", 5.0, 6.0, 6.0, "TikTok", 7.0),
            respondent(47.0, "Other", 1.5, 8.0, 3.0, "Facebook", 9.0),
            respondent(50.0, "Male", 10.0, 3.0, 9.0, "TikTok", 4.0),
        ])
    }

    #[test]
    fn test_survey_report() {
        let report = AnalysisReport::from_dataset(&survey(), &AnalysisConfig::default());

        assert_eq!(report.overview.record_count, 5);
        assert_eq!(report.overview.field_count, 9);
        assert_eq!(report.overview.missing_numeric_cells, 0);
        let range = report.overview.range.as_ref().unwrap();
        assert_eq!((range.min, range.max), (18.0, 50.0));

        assert_eq!(report.summary.len(), 7);
        let screen = report.summary.get(SCREEN_TIME).unwrap();
        assert_eq!(screen.count, 5);
        assert_eq!(screen.mean, 5.4);
        // sorted [1.5, 3, 5, 7.5, 10]
        assert_eq!(screen.median, 5.0);
        assert_eq!(screen.max, 10.0);

        // 10.0 sits on the last edge and is dropped
        let bins = &report.distributions[0].bins;
        let counts = bins.iter().map(|b| b.count).collect::<Vec<_>>();
        assert_eq!(counts, [1, 1, 1, 1, 0]);
        assert_eq!(bins[4].range, "8-10h");

        let group_counts = report.groups.iter().map(|g| g.count).collect::<Vec<_>>();
        assert_eq!(group_counts, [1, 1, 1, 2]);
        let oldest = &report.groups[3];
        assert_eq!(oldest.label, "41-50");
        assert_eq!(oldest.averages.get(SCREEN_TIME), Some(&5.8));
        assert_eq!(oldest.averages.get(HAPPINESS_INDEX), Some(&6.5));
        assert_eq!(oldest.averages.get(STRESS_LEVEL), Some(&6.0));

        // Constant exercise frequency has no variance
        let exercise = &report.correlations[3];
        assert_eq!(exercise.label, "Exercise vs Happiness");
        assert_eq!(exercise.coefficient, 0.0);
        assert!(report.correlations[2].coefficient < -0.9);

        let platforms = &report.categories[1];
        assert_eq!(platforms.column, PLATFORM);
        assert_eq!(platforms.counts[0].label, "TikTok");
        assert_eq!(platforms.counts[0].count, 3);
        let genders = report.categories[0]
            .counts
            .iter()
            .map(|c| c.label.as_str())
            .collect::<Vec<_>>();
        assert_eq!(genders, ["Female", "Male", "Other"]);
    }

    #[test]
    fn test_report_is_idempotent() {
        let dataset = survey();
        let config = AnalysisConfig::default();
        let first = AnalysisReport::from_dataset(&dataset, &config);
        let second = AnalysisReport::from_dataset(&dataset, &config);
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_misconfigured_capability_does_not_affect_others() {
        let mut config = AnalysisConfig::default();
        config.grouping.groups[0].predicate = None;
        config.distributions[0].edges.truncate(1);

        let report = AnalysisReport::from_dataset(&survey(), &config);
        assert!(report.groups.is_empty());
        assert!(report.distributions[0].bins.is_empty());
        assert_eq!(report.summary.len(), 7);
        assert_eq!(report.correlations.len(), 5);
    }
}
