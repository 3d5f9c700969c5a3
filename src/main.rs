mod catalog;
mod logging;
mod model;
mod pipeline;
mod report;
mod source;

use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};

use crate::catalog::fluorochrome_catalog;
use crate::model::Panel;
use crate::pipeline::stage1_fetch::run_stage1;
use crate::pipeline::stage2_annotate::run_stage2;
use crate::pipeline::stage3_assign::run_stage3;
use crate::pipeline::stage4_advisory::run_stage4;
use crate::pipeline::stage5_report::write_reports;
use crate::report::text::{render_catalog_text, render_report_text};
use crate::report::{NO_MARKERS_MESSAGE, ReportError, ReportInput};
use crate::source::cellmarker::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
use crate::source::{CellMarkerSource, MarkerSource, SourceError, TsvMarkerSource};

#[derive(Debug, Parser)]
#[command(name = "kira-flowpanel", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Design a staining panel for a human immune cell type.
    Design(DesignArgs),
    /// Print the fluorochrome catalog and the expression reference table.
    Catalog,
}

#[derive(Debug, Args)]
struct DesignArgs {
    /// Cell type to look up, e.g. "T cell".
    #[arg(long)]
    cell_type: String,
    /// Offline marker table (cell_type, marker, description; .gz allowed).
    #[arg(long)]
    markers: Option<PathBuf>,
    /// Directory for panel.csv, summary.json and report.txt.
    #[arg(long)]
    out: Option<PathBuf>,
    /// HTTP timeout in seconds for the CellMarker lookup.
    #[arg(long, default_value_t = DEFAULT_TIMEOUT.as_secs())]
    timeout: u64,
    #[arg(long, default_value = DEFAULT_BASE_URL, hide = true)]
    base_url: String,
}

#[derive(Debug, thiserror::Error)]
enum AppError {
    #[error("invalid arguments: {0}")]
    InvalidArgs(String),
    #[error("marker lookup failed: {0}")]
    Source(#[from] SourceError),
    #[error("report failed: {0}")]
    Report(#[from] ReportError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum SourceConfig {
    Remote { base_url: String, timeout: Duration },
    Tsv(PathBuf),
}

#[derive(Debug, Clone)]
struct RunConfig {
    cell_type: String,
    source: SourceConfig,
    out_dir: Option<PathBuf>,
}

#[derive(Debug)]
enum DesignOutcome {
    NoMarkers,
    Designed(Panel),
}

fn main() {
    logging::init_logging();
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    let mut stdout = std::io::stdout().lock();
    match cli.command {
        Command::Design(args) => {
            let config = build_config(args)?;
            let source = build_source(&config.source)?;
            match design(&config, &*source, &mut stdout)? {
                DesignOutcome::NoMarkers => {
                    tracing::warn!(cell_type = %config.cell_type, "no markers found");
                }
                DesignOutcome::Designed(panel) => {
                    tracing::info!(
                        n_markers = panel.len(),
                        n_unassigned = panel.n_unassigned(),
                        "panel designed"
                    );
                }
            }
        }
        Command::Catalog => {
            stdout.write_all(render_catalog_text().as_bytes())?;
        }
    }
    Ok(())
}

fn build_config(args: DesignArgs) -> Result<RunConfig, AppError> {
    let cell_type = args.cell_type.trim().to_string();
    if cell_type.is_empty() {
        return Err(AppError::InvalidArgs("--cell-type must not be empty".to_string()));
    }
    if args.timeout == 0 {
        return Err(AppError::InvalidArgs("--timeout must be positive".to_string()));
    }
    let source = match args.markers {
        Some(path) => SourceConfig::Tsv(path),
        None => SourceConfig::Remote {
            base_url: args.base_url,
            timeout: Duration::from_secs(args.timeout),
        },
    };
    Ok(RunConfig {
        cell_type,
        source,
        out_dir: args.out,
    })
}

fn build_source(config: &SourceConfig) -> Result<Box<dyn MarkerSource>, AppError> {
    match config {
        SourceConfig::Remote { base_url, timeout } => {
            Ok(Box::new(CellMarkerSource::new(base_url, *timeout)?))
        }
        SourceConfig::Tsv(path) => Ok(Box::new(TsvMarkerSource::new(path))),
    }
}

fn design<W: Write>(
    config: &RunConfig,
    source: &dyn MarkerSource,
    out: &mut W,
) -> Result<DesignOutcome, AppError> {
    let stage1 = run_stage1(source, &config.cell_type)?;
    if stage1.markers.is_empty() {
        writeln!(out, "{NO_MARKERS_MESSAGE}")?;
        return Ok(DesignOutcome::NoMarkers);
    }

    let annotated = run_stage2(stage1.markers);
    let panel = run_stage3(&annotated, fluorochrome_catalog());
    let advisory = run_stage4(&annotated);

    let input = ReportInput {
        tool_name: "kira-flowpanel".to_string(),
        tool_version: env!("CARGO_PKG_VERSION").to_string(),
        cell_type: &config.cell_type,
        source: &stage1.source,
        panel: &panel,
        advisory: &advisory,
    };
    out.write_all(render_report_text(&input).as_bytes())?;

    if let Some(out_dir) = &config.out_dir {
        write_reports(&input, out_dir)?;
    }

    Ok(DesignOutcome::Designed(panel))
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
