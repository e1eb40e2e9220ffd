mod cli;

use clap::Parser;
use cli::{AnalyzeArgs, CheckRedundancyArgs, Cli, Command, ExportReportArgs, ShowTreeArgs};
use mvn_dep_audit::adapters::outbound::console::{
    StderrProgressReporter, TreeRenderOptions, TreeRenderer,
};
use mvn_dep_audit::adapters::outbound::filesystem::FileSystemReader;
use mvn_dep_audit::application::dto::{
    AuditRequest, AuditResponse, InputSource, OutputFormat, ReportView,
};
use mvn_dep_audit::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use mvn_dep_audit::application::read_models::AuditReadModelBuilder;
use mvn_dep_audit::application::use_cases::AuditDependenciesUseCase;
use mvn_dep_audit::config::{self, ConfigFile};
use mvn_dep_audit::ports::outbound::ProgressReporter;
use mvn_dep_audit::shared::error::{AuditError, ExitCode};
use mvn_dep_audit::shared::Result;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process;
use tracing::debug;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version come through here too
            let code = if e.use_stderr() {
                ExitCode::InvalidArguments
            } else {
                ExitCode::Success
            };
            let _ = e.print();
            process::exit(code.as_i32());
        }
    };

    init_logging(cli.verbose, cli.quiet);

    match run(cli) {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            for cause in e.chain().skip(1) {
                eprintln!("\nCaused by: {}", cause);
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

fn init_logging(verbose: bool, quiet: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let default_level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<ExitCode> {
    let quiet = cli.quiet;
    let config = load_config(cli.config.as_deref(), quiet)?.unwrap_or_default();

    match cli.command {
        Command::ShowTree(args) => show_tree(args, &config, quiet),
        Command::Analyze(args) => analyze(args, &config, quiet),
        Command::CheckRedundancy(args) => check_redundancy(args, &config, quiet),
        Command::ExportReport(args) => export_report(args, &config, quiet),
    }
}

/// Explicit `--config` must exist; otherwise the working directory is searched.
fn load_config(explicit: Option<&Path>, quiet: bool) -> Result<Option<ConfigFile>> {
    match explicit {
        Some(path) => config::load_config_from_path(path).map(Some),
        None => {
            let cwd = std::env::current_dir()?;
            let discovered = config::discover_config(&cwd)?;
            if discovered.is_some() {
                StderrProgressReporter::with_quiet(quiet).report(&format!(
                    "📄 Auto-discovered config file: {}",
                    cwd.join(config::CONFIG_FILENAME).display()
                ));
            }
            Ok(discovered)
        }
    }
}

fn show_tree(args: ShowTreeArgs, config: &ConfigFile, quiet: bool) -> Result<ExitCode> {
    let request = AuditRequest::new(
        InputSource::Path(args.input.tree),
        args.analysis.map(InputSource::Path),
    )
    .with_ignored_coordinates(config.ignored_coordinates());
    let response = execute_audit(request, quiet)?;

    let mut highlight: Vec<String> = args.highlight;
    if let Some(analysis) = &response.analysis {
        highlight.extend(analysis.used_undeclared().iter().cloned());
    }
    for finding in &response.findings {
        highlight.extend(finding.actually_used().iter().cloned());
    }

    let options = TreeRenderOptions {
        max_depth: args.max_depth.or(config.max_depth),
        scope: args.scope.or_else(|| config.scope.clone()),
        highlight: highlight.into_iter().collect(),
        color: use_color(args.no_color, None),
    };
    debug!("Rendering tree with {:?}", options);

    let rendered = TreeRenderer::new(options).render(&response.tree);
    PresenterFactory::create(PresenterType::Stdout).present(&rendered)?;
    Ok(ExitCode::Success)
}

fn analyze(args: AnalyzeArgs, config: &ConfigFile, quiet: bool) -> Result<ExitCode> {
    let mut request = AuditRequest::new(
        InputSource::Path(args.input.tree),
        args.analysis.map(InputSource::Path),
    )
    .with_ignored_coordinates(ignored_coordinates(config, args.ignore));
    if let Some(top) = args.top {
        request.top_n = top;
    }
    let response = execute_audit(request, quiet)?;

    let view = if args.full {
        ReportView::Full
    } else {
        ReportView::Summary
    };
    let format = resolve_format(args.report.format, config, OutputFormat::Text)?;
    let color = use_color(args.report.no_color, args.report.output.as_deref());
    present_report(&response, view, format, color, args.report.output, quiet)?;
    Ok(ExitCode::Success)
}

fn check_redundancy(
    args: CheckRedundancyArgs,
    config: &ConfigFile,
    quiet: bool,
) -> Result<ExitCode> {
    let request = AuditRequest::new(
        InputSource::Path(args.input.tree),
        Some(InputSource::Path(args.analysis)),
    )
    .with_ignored_coordinates(ignored_coordinates(config, args.ignore));
    let response = execute_audit(request, quiet)?;

    let format = resolve_format(args.report.format, config, OutputFormat::Text)?;
    let color = use_color(args.report.no_color, args.report.output.as_deref());
    present_report(
        &response,
        ReportView::Redundancy,
        format,
        color,
        args.report.output,
        quiet,
    )?;

    let fail_on_findings = args.fail_on_findings || config.fail_on_findings.unwrap_or(false);
    if fail_on_findings && response.has_findings() {
        return Ok(ExitCode::RedundancyDetected);
    }
    Ok(ExitCode::Success)
}

fn export_report(args: ExportReportArgs, config: &ConfigFile, quiet: bool) -> Result<ExitCode> {
    let request = AuditRequest::new(
        InputSource::Path(args.input.tree),
        args.analysis.map(InputSource::Path),
    )
    .with_ignored_coordinates(ignored_coordinates(config, args.ignore));
    let response = execute_audit(request, quiet)?;

    let format = args
        .format
        .or_else(|| format_from_extension(&args.output))
        .unwrap_or(OutputFormat::Markdown);
    present_report(
        &response,
        ReportView::Full,
        format,
        false,
        Some(args.output),
        quiet,
    )?;
    Ok(ExitCode::Success)
}

fn execute_audit(request: AuditRequest, quiet: bool) -> Result<AuditResponse> {
    // Create adapters (Dependency Injection)
    let use_case = AuditDependenciesUseCase::new(
        FileSystemReader::new(),
        FileSystemReader::new(),
        StderrProgressReporter::with_quiet(quiet),
    );
    use_case.execute(request)
}

fn present_report(
    response: &AuditResponse,
    view: ReportView,
    format: OutputFormat,
    color: bool,
    output: Option<PathBuf>,
    quiet: bool,
) -> Result<()> {
    StderrProgressReporter::with_quiet(quiet).report(FormatterFactory::progress_message(format));

    let model = AuditReadModelBuilder::build(response, view);
    let formatted = FormatterFactory::create(format, color).format(&model)?;
    PresenterFactory::create(PresenterType::from(output)).present(&formatted)
}

/// Config entries first, then `--ignore` values
fn ignored_coordinates(config: &ConfigFile, cli_ignores: Vec<String>) -> Vec<String> {
    let mut coordinates = config.ignored_coordinates();
    coordinates.extend(cli_ignores);
    coordinates
}

/// `--format` wins over the config file, which wins over `default`
fn resolve_format(
    cli_format: Option<OutputFormat>,
    config: &ConfigFile,
    default: OutputFormat,
) -> Result<OutputFormat> {
    if let Some(format) = cli_format {
        return Ok(format);
    }
    match &config.format {
        Some(value) => value.parse::<OutputFormat>().map_err(|details| {
            anyhow::Error::from(AuditError::InvalidConfig {
                details,
                hint: "Set format to text, json or markdown.".to_string(),
            })
        }),
        None => Ok(default),
    }
}

fn format_from_extension(path: &Path) -> Option<OutputFormat> {
    let extension = path.extension()?.to_str()?;
    [OutputFormat::Json, OutputFormat::Markdown, OutputFormat::Text]
        .into_iter()
        .find(|format| format.extension().eq_ignore_ascii_case(extension))
}

/// Colors only go to an interactive stdout
fn use_color(no_color: bool, output: Option<&Path>) -> bool {
    !no_color && output.is_none() && std::io::stdout().is_terminal()
}
