//! idfmt main entry point

use anyhow::Context;
use clap::{Parser, Subcommand};
use idfmt_config::{Config, ConfigError};
use idfmt_core::{
    ClipboardPort, CoreError, ErrorCode, FormatOptions, IdFormatter, Identifier, SnowflakeLayout,
    SnowflakeParts, SystemClipboard,
};
use serde::Serialize;
use std::io::{self, BufRead};
use std::path::PathBuf;
use std::process::ExitCode;
use tokio::runtime::Runtime;

const DEFAULT_CONFIG_PATH: &str = "config.yaml";

#[derive(Parser, Debug)]
#[command(name = "idfmt")]
#[command(author = "idfmt Contributors")]
#[command(version = "0.1.0")]
#[command(about = "Format, copy and inspect long Snowflake-style identifiers", long_about = None)]
struct Args {
    /// Configuration file path [default: config.yaml, if present]
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Emit JSON instead of plain text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Format identifiers for display (reads one per line from stdin when none are given)
    Format { ids: Vec<String> },
    /// Copy an identifier to the system clipboard, without separators
    Copy { id: String },
    /// Decode the timestamp, data center, worker and sequence of a Snowflake identifier
    Inspect { id: String },
    /// Print the default configuration file
    DefaultConfig,
}

#[derive(Debug, Serialize)]
struct FormatRow {
    input: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    formatted: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<ErrorCode>,
}

#[derive(Debug, Serialize)]
struct CopyReport {
    raw: String,
    formatted: String,
    copied: bool,
}

#[derive(Debug, Serialize)]
struct InspectReport {
    formatted: String,
    #[serde(flatten)]
    parts: SnowflakeParts,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let config = match load_config(args.config.clone()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e.to_details());
            return ExitCode::FAILURE;
        }
    };

    init_logging(&config);

    match run(args, config) {
        Ok(code) => code,
        Err(e) => {
            log::error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// An explicit `--config` must exist; the implicit default may be missing
fn load_config(path: Option<PathBuf>) -> Result<Config, ConfigError> {
    match path {
        Some(path) => Config::load(path),
        None => match Config::load(PathBuf::from(DEFAULT_CONFIG_PATH)) {
            Err(ConfigError::FileNotFound { .. }) => Ok(Config::default()),
            other => other,
        },
    }
}

/// `RUST_LOG` wins over `logging.level`
fn init_logging(config: &Config) {
    let level = config.logging.level.to_lowercase();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn run(args: Args, config: Config) -> anyhow::Result<ExitCode> {
    let formatter = IdFormatter::new(FormatOptions::from(&config.formatter));

    match args.command {
        Command::Format { ids } => {
            let inputs = if ids.is_empty() {
                read_stdin_lines()?
            } else {
                ids
            };
            format_ids(&formatter, inputs, args.json)
        }
        Command::Copy { id } => copy_id(&formatter, &SystemClipboard, &id, args.json),
        Command::Inspect { id } => {
            let layout = SnowflakeLayout::from(&config.snowflake);
            inspect_id(&formatter, &layout, &id, args.json)
        }
        Command::DefaultConfig => {
            print!("{}", Config::generate_default());
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn read_stdin_lines() -> anyhow::Result<Vec<String>> {
    let mut lines = Vec::new();
    for line in io::stdin().lock().lines() {
        let line = line.context("failed to read identifiers from stdin")?;
        if !line.trim().is_empty() {
            lines.push(line);
        }
    }
    Ok(lines)
}

fn format_row(formatter: &IdFormatter, input: String) -> FormatRow {
    match Identifier::parse(&input, &formatter.options().separator) {
        Ok(id) => FormatRow {
            formatted: Some(formatter.format(Some(&id))),
            input,
            error: None,
        },
        Err(CoreError::EmptyInput) => FormatRow {
            formatted: Some(String::new()),
            input,
            error: None,
        },
        Err(e) => {
            log::log!(e.severity().log_level(), "{}", e);
            FormatRow {
                formatted: None,
                input,
                error: Some(e.code()),
            }
        }
    }
}

fn format_ids(formatter: &IdFormatter, inputs: Vec<String>, json: bool) -> anyhow::Result<ExitCode> {
    let rows: Vec<FormatRow> = inputs
        .into_iter()
        .map(|input| format_row(formatter, input))
        .collect();
    let failed = rows.iter().any(|row| row.error.is_some());

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        for row in &rows {
            match (&row.formatted, row.error) {
                (Some(formatted), _) => println!("{}", formatted),
                (None, Some(code)) => eprintln!("[{}] {}", code, row.input),
                (None, None) => {}
            }
        }
    }

    Ok(if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS })
}

fn copy_id(
    formatter: &IdFormatter,
    clipboard: &dyn ClipboardPort,
    input: &str,
    json: bool,
) -> anyhow::Result<ExitCode> {
    let id = match Identifier::parse(input, &formatter.options().separator) {
        Ok(id) => id,
        Err(e) => {
            eprintln!("{}", e.to_details());
            return Ok(ExitCode::FAILURE);
        }
    };

    let rt = Runtime::new().context("failed to start async runtime")?;
    let result = rt.block_on(formatter.copy_to_clipboard(clipboard, Some(&id)));

    let report = CopyReport {
        raw: id.raw().into_owned(),
        formatted: formatter.format(Some(&id)),
        copied: result.is_ok(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if report.copied {
        println!("Copied {}", report.formatted);
    }

    match result {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e) => {
            if !json {
                eprintln!("{}", e.to_details());
            }
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Decode `input`. The display form comes from the parsed text, which is
/// never absent, so `0` stays visible.
fn inspect_report(
    formatter: &IdFormatter,
    layout: &SnowflakeLayout,
    input: &str,
) -> Result<InspectReport, CoreError> {
    let id = Identifier::parse(input, &formatter.options().separator)?;
    let parts = layout.decode(id.as_u64()?)?;
    let formatted = formatter.format(Some(&id));

    Ok(InspectReport { formatted, parts })
}

fn inspect_id(
    formatter: &IdFormatter,
    layout: &SnowflakeLayout,
    input: &str,
    json: bool,
) -> anyhow::Result<ExitCode> {
    let report = match inspect_report(formatter, layout, input) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("{}", e.to_details());
            return Ok(ExitCode::FAILURE);
        }
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("id:           {}", report.parts.id);
        println!("formatted:    {}", report.formatted);
        println!("timestamp:    {} ({} ms)", report.parts.datetime.to_rfc3339(), report.parts.timestamp_ms);
        println!("data center:  {}", report.parts.data_center_id);
        println!("worker:       {}", report.parts.worker_id);
        println!("sequence:     {}", report.parts.sequence);
    }

    Ok(ExitCode::SUCCESS)
}
