use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use self::{
    analyze::{CategoriesArg, CorrelationsArg, DistributionArg, GroupsArg, SummaryArg},
    default_config::DefaultConfigArg,
    report::{OverviewArg, ReportArg},
};

mod analyze;
mod default_config;
mod report;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What analysis to run
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Run every configured analysis and write a combined report
    Report(#[clap(flatten)] ReportArg),
    /// Record count, field count and completeness of the dataset
    Overview(#[clap(flatten)] OverviewArg),
    /// Summary statistics per numeric column
    Summary(#[clap(flatten)] SummaryArg),
    /// Record counts over fixed bins
    Distribution(#[clap(flatten)] DistributionArg),
    /// Group sizes and per-group averages
    Groups(#[clap(flatten)] GroupsArg),
    /// Pearson correlation between configured column pairs
    Correlations(#[clap(flatten)] CorrelationsArg),
    /// Record counts per category label
    Categories(#[clap(flatten)] CategoriesArg),
    /// Print the built-in analysis configuration
    DefaultConfig(#[clap(flatten)] DefaultConfigArg),
}

/// Arguments shared by every command that analyzes a dataset.
#[derive(Debug, Clone, Args)]
pub(crate) struct InputArg {
    /// Path to the dataset JSON file (an array of records)
    pub dataset: PathBuf,

    /// Path to an analysis configuration JSON file; defaults to the built-in configuration
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Fail instead of warning when the configuration is invalid
    #[arg(long)]
    pub strict: bool,

    /// Output file path; defaults to stdout
    #[arg(long)]
    pub output: Option<PathBuf>,
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode {
        Mode::Report(arg) => report::run_report(&arg)?,
        Mode::Overview(arg) => report::run_overview(&arg)?,
        Mode::Summary(arg) => analyze::run_summary(&arg)?,
        Mode::Distribution(arg) => analyze::run_distribution(&arg)?,
        Mode::Groups(arg) => analyze::run_groups(&arg)?,
        Mode::Correlations(arg) => analyze::run_correlations(&arg)?,
        Mode::Categories(arg) => analyze::run_categories(&arg)?,
        Mode::DefaultConfig(arg) => default_config::run(&arg)?,
    }
    Ok(())
}
