mod logging;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use lotcopy::{BatchReport, BatchStatus, MergeConfig, run_batch_to};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "lotcopy",
    version,
    about = "Append the Date..Somme table of each reception workbook to one destination sheet"
)]
struct Cli {
    /// Reception workbooks, merged in the order given.
    sources: Vec<PathBuf>,

    /// Destination `.xlsx` workbook.
    #[arg(long, short = 'd')]
    dest: PathBuf,

    /// Save the merged workbook here instead of overwriting `--dest`.
    #[arg(long, short = 'o')]
    output: Option<PathBuf>,

    /// YAML file with token and sheet settings.
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Source sheet name (default: the active sheet, read as the first sheet).
    #[arg(long)]
    source_sheet: Option<String>,

    /// Destination sheet name (default: the active sheet).
    #[arg(long)]
    dest_sheet: Option<String>,

    #[arg(long)]
    header_token: Option<String>,

    #[arg(long)]
    footer_prefix: Option<String>,

    #[arg(long)]
    code_lot_label: Option<String>,

    /// Print the report as JSON.
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    /// Config file (or defaults) with command-line overrides applied.
    fn merge_config(&self) -> Result<MergeConfig> {
        let mut config = match &self.config {
            Some(path) => MergeConfig::from_path(path)?,
            None => MergeConfig::default(),
        };
        if let Some(token) = &self.header_token {
            config.header_token = token.clone();
        }
        if let Some(prefix) = &self.footer_prefix {
            config.footer_prefix = prefix.clone();
        }
        if let Some(label) = &self.code_lot_label {
            config.code_lot_label = label.clone();
        }
        if self.source_sheet.is_some() {
            config.source_sheet = self.source_sheet.clone();
        }
        if self.dest_sheet.is_some() {
            config.destination_sheet = self.dest_sheet.clone();
        }
        config.validate()?;
        Ok(config)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(&cli) {
        Ok(BatchStatus::Success) => ExitCode::SUCCESS,
        Ok(BatchStatus::Failed) => ExitCode::from(1),
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(2)
        }
    }
}

fn run(cli: &Cli) -> Result<BatchStatus> {
    let config = cli.merge_config()?;
    tracing::debug!(?config, "effective config");

    let report = run_batch_to(&cli.sources, &cli.dest, cli.output.as_deref(), &config)
        .with_context(|| format!("merging into {}", cli.dest.display()))?;
    print_report(&report, cli.json)?;
    Ok(report.status)
}

fn print_report(report: &BatchReport, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        println!("{report}");
    }
    Ok(())
}
