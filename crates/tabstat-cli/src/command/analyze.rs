use anyhow::bail;
use tabstat_analysis::{
    config::AnalysisConfig,
    correlation::CorrelationResult,
    dataset::Dataset,
    distribution::{Distribution, DistributionSpec},
    frequency::CategoryCounts,
    grouping::GroupAggregate,
    summary::SummaryTable,
};

use super::InputArg;
use crate::util::{self, Output};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct SummaryArg {
    #[clap(flatten)]
    pub input: InputArg,
    /// Columns to summarize, comma separated; defaults to the configured numeric columns
    #[arg(long, value_delimiter = ',')]
    pub columns: Vec<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct DistributionArg {
    #[clap(flatten)]
    pub input: InputArg,
    /// Column to bin instead of the configured distributions
    #[arg(long, requires = "edges")]
    pub column: Option<String>,
    /// Ascending bin edges for `--column`, comma separated
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
    pub edges: Vec<f64>,
    /// Unit suffix appended to bin labels
    #[arg(long, default_value = "")]
    pub unit: String,
}

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct GroupsArg {
    #[clap(flatten)]
    pub input: InputArg,
}

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct CorrelationsArg {
    #[clap(flatten)]
    pub input: InputArg,
}

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct CategoriesArg {
    #[clap(flatten)]
    pub input: InputArg,
}

pub(crate) fn load(input: &InputArg) -> anyhow::Result<(Dataset, AnalysisConfig)> {
    let config = util::read_config_file(input.config.as_deref(), input.strict)?;
    let dataset = util::read_dataset_file(&input.dataset)?;
    Ok((dataset, config))
}

pub(crate) fn run_summary(arg: &SummaryArg) -> anyhow::Result<()> {
    let SummaryArg { input, columns } = arg;
    let (dataset, config) = load(input)?;

    let columns = if columns.is_empty() {
        &config.numeric_columns
    } else {
        columns
    };
    let summary = SummaryTable::from_dataset(&dataset, columns);
    tracing::info!(
        "Summarized {} of {} columns",
        summary.len(),
        columns.len()
    );

    Output::save_json(&summary, input.output.as_deref())
}

pub(crate) fn run_distribution(arg: &DistributionArg) -> anyhow::Result<()> {
    let DistributionArg {
        input,
        column,
        edges,
        unit,
    } = arg;
    let (dataset, config) = load(input)?;

    let specs = match column {
        Some(column) => {
            if input.strict && edges.len() < 2 {
                bail!("distribution of {column} needs at least two bin edges");
            }
            vec![DistributionSpec::new(column.clone(), edges.clone()).with_unit(unit.clone())]
        }
        None => config.distributions,
    };

    let distributions = specs
        .iter()
        .map(|spec| Distribution::from_dataset(&dataset, spec))
        .collect::<Vec<_>>();

    Output::save_json(&distributions, input.output.as_deref())
}

pub(crate) fn run_groups(arg: &GroupsArg) -> anyhow::Result<()> {
    let GroupsArg { input } = arg;
    let (dataset, config) = load(input)?;

    let groups = GroupAggregate::collect_all(&dataset, &config.grouping);

    Output::save_json(&groups, input.output.as_deref())
}

pub(crate) fn run_correlations(arg: &CorrelationsArg) -> anyhow::Result<()> {
    let CorrelationsArg { input } = arg;
    let (dataset, config) = load(input)?;

    let correlations = CorrelationResult::collect_all(&dataset, &config.correlations);

    Output::save_json(&correlations, input.output.as_deref())
}

pub(crate) fn run_categories(arg: &CategoriesArg) -> anyhow::Result<()> {
    let CategoriesArg { input } = arg;
    let (dataset, config) = load(input)?;

    let categories = config
        .categories
        .iter()
        .map(|spec| CategoryCounts::from_dataset(&dataset, spec))
        .collect::<Vec<_>>();
    for counts in &categories {
        tracing::info!(
            "{}: {} categories over {} records",
            counts.column,
            counts.counts.len(),
            counts.total()
        );
    }

    Output::save_json(&categories, input.output.as_deref())
}

#[cfg(test)]
mod tests {
    use std::{env, fs, path::PathBuf, process};

    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        env::temp_dir().join(format!("tabstat-analyze-{}-{name}", process::id()))
    }

    fn input(dataset: PathBuf, output: PathBuf) -> InputArg {
        InputArg {
            dataset,
            config: None,
            strict: false,
            output: Some(output),
        }
    }

    #[test]
    fn test_run_distribution_override() {
        let dataset = temp_path("dataset.json");
        let output = temp_path("distribution.json");
        fs::write(&dataset, r#"[{"Age": 15}, {"Age": 20}, {"Age": 29}, {"Age": 30}]"#).unwrap();

        let arg = DistributionArg {
            input: input(dataset.clone(), output.clone()),
            column: Some("Age".to_owned()),
            edges: vec![10.0, 20.0, 30.0],
            unit: "y".to_owned(),
        };
        run_distribution(&arg).unwrap();
        let written: Vec<Distribution> =
            serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        fs::remove_file(&dataset).unwrap();
        fs::remove_file(&output).unwrap();

        assert_eq!(written.len(), 1);
        let counts = written[0].bins.iter().map(|b| b.count).collect::<Vec<_>>();
        assert_eq!(counts, [1, 2]);
        assert_eq!(written[0].bins[0].range, "10-20y");
    }

    #[test]
    fn test_run_distribution_strict_rejects_single_edge() {
        let dataset = temp_path("strict.json");
        let output = temp_path("strict-out.json");
        fs::write(&dataset, "[]").unwrap();

        let mut strict_input = input(dataset.clone(), output);
        strict_input.strict = true;
        let arg = DistributionArg {
            input: strict_input,
            column: Some("Age".to_owned()),
            edges: vec![10.0],
            unit: String::new(),
        };
        let err = run_distribution(&arg).unwrap_err();
        fs::remove_file(&dataset).unwrap();

        assert!(err.to_string().contains("at least two bin edges"));
    }
}
