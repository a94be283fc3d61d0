use std::io::{BufRead, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use dharm::output::{write_conversions, write_pattern_table};
use dharm::{Config, OutputFormat};

#[derive(Parser)]
#[command(name = "dharm", about = "Date harmonizer — free-text date cells to YYYY-MM-DD")]
struct Cli {
    /// Write debug logs to stderr (RUST_LOG overrides the level).
    #[arg(long, global = true)]
    debug: bool,

    /// Read configuration from this file instead of ~/.config/dharm/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert dates given as arguments, or one per line on stdin.
    Convert {
        /// Value written to the end date of single dates.
        #[arg(long, value_name = "S")]
        no_date: Option<String>,
        /// Month used when the input has none.
        #[arg(long, value_name = "S")]
        month: Option<String>,
        /// Day used when the input has none.
        #[arg(long, value_name = "S")]
        day: Option<String>,
        /// Emit JSON lines instead of TSV.
        #[arg(long)]
        json: bool,
        /// Exit with status 1 if any input was not recognised.
        #[arg(long)]
        strict: bool,
        /// Date cells to convert; stdin is read when none are given.
        dates: Vec<String>,
    },
    /// List the pattern table with an example conversion per entry.
    Patterns,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
    }

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    tracing::debug!(?config, "configuration loaded");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Patterns => write_pattern_table(&mut out, &config.fillers)?,
        Command::Convert {
            no_date,
            month,
            day,
            json,
            strict,
            dates,
        } => {
            let mut fillers = config.fillers;
            if let Some(v) = no_date {
                fillers.no_date = v;
            }
            if let Some(v) = month {
                fillers.month = v;
            }
            if let Some(v) = day {
                fillers.day = v;
            }
            let format = if json { OutputFormat::Json } else { config.output.format };

            let summary = if dates.is_empty() {
                let lines = std::io::stdin()
                    .lock()
                    .lines()
                    .collect::<std::io::Result<Vec<String>>>()?;
                write_conversions(&mut out, &lines, &fillers, format)?
            } else {
                write_conversions(&mut out, &dates, &fillers, format)?
            };
            out.flush()?;

            tracing::debug!(total = summary.total, alerts = summary.alerts, "done");
            if strict && summary.alerts > 0 {
                eprintln!("{} of {} inputs not recognised", summary.alerts, summary.total);
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
