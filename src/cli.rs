use clap::{Args, Parser, Subcommand};
use mvn_dep_audit::application::dto::OutputFormat;
use std::path::PathBuf;

/// Audit Maven dependencies using `dependency:tree` and `dependency:analyze` output
#[derive(Parser, Debug)]
#[command(name = "mvn-dep-audit")]
#[command(version)]
#[command(
    about = "Audit Maven dependencies: find undeclared, unused and redundant declarations",
    long_about = None
)]
pub struct Cli {
    /// Show debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress progress messages and warnings
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Path to a config file (defaults to ./mvn-dep-audit.config.yml when present)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the dependency tree
    ShowTree(ShowTreeArgs),
    /// Print statistics, issues and redundancy findings for a module
    Analyze(AnalyzeArgs),
    /// Report declared dependencies that only exist to pull in a used child
    CheckRedundancy(CheckRedundancyArgs),
    /// Write the full audit report to a file
    ExportReport(ExportReportArgs),
}

/// Path to the `mvn dependency:tree -DoutputType=json` document
#[derive(Args, Debug)]
pub struct TreeInput {
    /// JSON output of `mvn dependency:tree -DoutputType=json`
    #[arg(short, long, value_name = "FILE")]
    pub tree: PathBuf,
}

/// Options shared by report-producing commands
#[derive(Args, Debug)]
pub struct ReportOutput {
    /// Output format: text, json or markdown
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

#[derive(Args, Debug)]
pub struct ShowTreeArgs {
    #[command(flatten)]
    pub input: TreeInput,

    /// Output of `mvn dependency:analyze`; dependencies it reports as used
    /// but undeclared are highlighted
    #[arg(short, long, value_name = "FILE")]
    pub analysis: Option<PathBuf>,

    /// Hide dependencies deeper than this
    #[arg(short = 'd', long)]
    pub max_depth: Option<usize>,

    /// Only show dependencies with this scope
    #[arg(short, long)]
    pub scope: Option<String>,

    /// Highlight a coordinate; can be given multiple times
    #[arg(long, value_name = "COORDINATE")]
    pub highlight: Vec<String>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub input: TreeInput,

    /// Output of `mvn dependency:analyze`
    #[arg(short, long, value_name = "FILE")]
    pub analysis: Option<PathBuf>,

    #[command(flatten)]
    pub report: ReportOutput,

    /// Include the full dependency table
    #[arg(long)]
    pub full: bool,

    /// Number of heaviest direct dependencies to list
    #[arg(long, value_name = "N")]
    pub top: Option<usize>,

    /// Declared coordinate never reported as redundant; can be given multiple times
    #[arg(long, value_name = "COORDINATE")]
    pub ignore: Vec<String>,
}

#[derive(Args, Debug)]
pub struct CheckRedundancyArgs {
    #[command(flatten)]
    pub input: TreeInput,

    /// Output of `mvn dependency:analyze`
    #[arg(short, long, value_name = "FILE")]
    pub analysis: PathBuf,

    #[command(flatten)]
    pub report: ReportOutput,

    /// Exit with code 1 when redundant dependencies are found
    #[arg(long)]
    pub fail_on_findings: bool,

    /// Declared coordinate never reported as redundant; can be given multiple times
    #[arg(long, value_name = "COORDINATE")]
    pub ignore: Vec<String>,
}

#[derive(Args, Debug)]
pub struct ExportReportArgs {
    #[command(flatten)]
    pub input: TreeInput,

    /// Output of `mvn dependency:analyze`
    #[arg(short, long, value_name = "FILE")]
    pub analysis: Option<PathBuf>,

    /// Report file to write
    #[arg(short, long, value_name = "FILE")]
    pub output: PathBuf,

    /// Output format: json or markdown (defaults to the output file extension, then markdown)
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Declared coordinate never reported as redundant; can be given multiple times
    #[arg(long, value_name = "COORDINATE")]
    pub ignore: Vec<String>,
}
