use chrono::{DateTime, Utc};
use serde::Serialize;
use tabstat_analysis::{config::AnalysisConfig, report::AnalysisReport};

/// A saved analysis report with the metadata needed to reproduce it
#[derive(Debug, Clone, Serialize)]
pub struct ReportDocument<'a> {
    /// Timestamp when the report was generated (ISO 8601 format)
    pub generated_at: DateTime<Utc>,
    /// Path of the analyzed dataset file
    pub dataset: String,
    /// Configuration the report was computed with
    pub config: &'a AnalysisConfig,
    /// The computed analysis
    pub report: AnalysisReport,
}

impl<'a> ReportDocument<'a> {
    #[must_use]
    pub fn new(dataset: String, config: &'a AnalysisConfig, report: AnalysisReport) -> Self {
        Self {
            generated_at: Utc::now(),
            dataset,
            config,
            report,
        }
    }
}
