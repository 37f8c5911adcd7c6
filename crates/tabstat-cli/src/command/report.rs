use tabstat_analysis::{overview::DatasetOverview, report::AnalysisReport};

use super::{InputArg, analyze};
use crate::{schema::report::ReportDocument, util::Output};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct ReportArg {
    #[clap(flatten)]
    pub input: InputArg,
}

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct OverviewArg {
    #[clap(flatten)]
    pub input: InputArg,
}

pub(crate) fn run_report(arg: &ReportArg) -> anyhow::Result<()> {
    let ReportArg { input } = arg;
    let (dataset, config) = analyze::load(input)?;

    tracing::info!("Running analysis...");
    let report = AnalysisReport::from_dataset(&dataset, &config);
    tracing::info!(
        summarized = report.summary.len(),
        distributions = report.distributions.len(),
        groups = report.groups.len(),
        correlations = report.correlations.len(),
        "Analysis complete"
    );

    let document = ReportDocument::new(input.dataset.display().to_string(), &config, report);
    Output::save_json(&document, input.output.as_deref())
}

pub(crate) fn run_overview(arg: &OverviewArg) -> anyhow::Result<()> {
    let OverviewArg { input } = arg;
    let (dataset, config) = analyze::load(input)?;

    let overview = DatasetOverview::from_dataset(
        &dataset,
        &config.numeric_columns,
        config.range_column.as_deref(),
    );

    Output::save_json(&overview, input.output.as_deref())
}
