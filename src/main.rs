//! `healthlog-parse`: parse an extracted lab report text file and print the
//! import preview as JSON.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use healthlog_lib::pipeline::import::read_report_text;
use healthlog_lib::pipeline::lab_report::{LabReportParser, SynevoParser};
use healthlog_lib::review::{build_preview, ImportPreview};

#[derive(Debug, Parser)]
#[command(name = "healthlog-parse", version, about = "Parse lab report text into structured results")]
struct Cli {
    /// Text file holding the extracted report
    file: PathBuf,

    /// Indent the JSON output
    #[arg(long)]
    pretty: bool,

    /// Leave rejected lines out of the output
    #[arg(long)]
    no_rejected: bool,

    /// Print a one-line summary to stderr
    #[arg(long)]
    summary: bool,
}

fn main() -> ExitCode {
    healthlog_lib::init_tracing();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let text = read_report_text(&cli.file)?;
    let parser = SynevoParser;
    let mut preview = build_preview(parser.parse(&text));

    if cli.summary {
        eprintln!("{}", summary_line(parser.provider(), &preview));
    }
    if cli.no_rejected {
        preview.parsed.rejected_lines.clear();
    }

    let json = if cli.pretty {
        serde_json::to_string_pretty(&preview)?
    } else {
        serde_json::to_string(&preview)?
    };
    println!("{json}");
    Ok(())
}

fn summary_line(provider: &str, preview: &ImportPreview) -> String {
    format!(
        "{provider}: {} tests, {} rejected lines, status {} ({:.0}% accepted)",
        preview.parsed.tests.len(),
        preview.parsed.rejected_lines.len(),
        preview.status.as_str(),
        preview.acceptance_ratio * 100.0
    )
}
