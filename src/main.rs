use clap::Parser;
use miette::{IntoDiagnostic, Result};
use paylang::application::engine::InstructionEngine;
use paylang::domain::calendar::CalendarDate;
use paylang::interfaces::json::request_reader::RequestReader;
use paylang::interfaces::json::response_writer::ResponseWriter;
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Transfer request JSON file. Reads stdin when omitted.
    request: Option<PathBuf>,

    /// Pin the scheduling date (YYYY-MM-DD) instead of reading the UTC calendar.
    #[arg(long, value_parser = parse_today)]
    today: Option<CalendarDate>,

    /// Pretty-print the response JSON.
    #[arg(long)]
    pretty: bool,
}

fn parse_today(raw: &str) -> Result<CalendarDate, String> {
    CalendarDate::parse(raw).ok_or_else(|| format!("not a valid YYYY-MM-DD date: {raw}"))
}

fn main() -> Result<()> {
    // Log to stderr so stdout stays pure response JSON.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "paylang=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    let request = match &cli.request {
        Some(path) => {
            let file = File::open(path).into_diagnostic()?;
            RequestReader::new(file).read().into_diagnostic()?
        }
        None => RequestReader::new(io::stdin().lock())
            .read()
            .into_diagnostic()?,
    };

    let engine = match cli.today {
        Some(today) => InstructionEngine::with_today(today),
        None => InstructionEngine::new(),
    };
    let response = engine.process(&request);

    let stdout = io::stdout();
    let writer = if cli.pretty {
        ResponseWriter::pretty(stdout.lock())
    } else {
        ResponseWriter::new(stdout.lock())
    };
    writer.write(&response).into_diagnostic()?;

    Ok(())
}
