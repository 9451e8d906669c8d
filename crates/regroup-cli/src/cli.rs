use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "John Edwards",
    version,
    about = "regroup - form balanced student groups that avoid repeat pairings, from a pairwise relationship grid.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Propose a grouping from a roster relationship grid.
    Optimize(OptimizeArgs),
    /// Accept a pending grouping: reinforce the grid scores and print the notification text.
    Confirm(ConfirmArgs),
}

/// Arguments for the `optimize` subcommand.
#[derive(Args, Debug)]
pub struct OptimizeArgs {
    /// Path to the roster relationship grid (CSV, upper-triangular).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub roster: PathBuf,

    /// Path for the pending-result file consumed by a later `confirm`.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub out: PathBuf,

    /// Path to an optional configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the number of groups to form.
    #[arg(short = 'g', long, value_name = "NUM")]
    pub num_groups: Option<usize>,

    /// Override the number of randomized trials to attempt.
    #[arg(short = 'd', long, value_name = "NUM")]
    pub depth: Option<usize>,

    /// Fix the random seed for a reproducible run.
    #[arg(long, value_name = "NUM")]
    pub seed: Option<u64>,
}

/// Arguments for the `confirm` subcommand.
#[derive(Args, Debug)]
pub struct ConfirmArgs {
    /// Path to the roster relationship grid (CSV) to update in place.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub roster: PathBuf,

    /// Path to the pending-result file written by `optimize`.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub pending: PathBuf,

    /// Class label used in the notification text.
    #[arg(short, long, default_value = "class", value_name = "NAME")]
    pub label: String,
}
