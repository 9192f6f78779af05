// ABOUTME: CLI binary for the Bot API documentation scraper.
// ABOUTME: Fetches the reference page (or reads a saved copy), writes the JSON catalog and prints diagnostics.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use botapi_scrape::{ScrapeError, ScrapeReport, Scraper, DEFAULT_OUTPUT, DEFAULT_URL};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "botapi-scrape")]
#[command(about = "Scrape the Bot API reference page into a JSON catalog")]
struct Args {
    /// Documentation page to fetch
    #[arg(long, default_value = DEFAULT_URL)]
    url: String,

    /// Parse a saved HTML page instead of fetching
    #[arg(long)]
    html: Option<PathBuf>,

    /// Output file path
    #[arg(short = 'o', long = "output", default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Do not print diagnostics
    #[arg(short = 'q', long)]
    quiet: bool,

    /// Log progress to stderr
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "error" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: &Args) -> Result<ScrapeReport> {
    let scraper = Scraper::builder()
        .url(&args.url)
        .output(&args.output)
        .build();

    let report = match &args.html {
        Some(path) => {
            let html = fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            scraper.scrape_html(&html)?
        }
        None => scraper.scrape()?,
    };
    scraper.write(&report)?;
    Ok(report)
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let report = match run(&args) {
        Ok(report) => report,
        Err(err) => {
            eprintln!("error: {:#}", err);
            if err
                .downcast_ref::<ScrapeError>()
                .is_some_and(ScrapeError::is_fetch)
            {
                eprintln!("hint: pass --html <FILE> to scrape a saved copy of the page");
            }
            return ExitCode::from(1);
        }
    };

    if !args.quiet {
        for diagnostic in &report.diagnostics {
            println!("{}", diagnostic);
        }
        if !report.diagnostics.is_empty() {
            let unknown = report
                .diagnostics
                .iter()
                .filter(|d| d.is_unknown_type())
                .count();
            println!(
                "{} diagnostics ({} unknown types)",
                report.diagnostics.len(),
                unknown
            );
        }
    }
    println!(
        "wrote {} types and {} methods to {}",
        report.catalog.types.len(),
        report.catalog.methods.len(),
        args.output.display()
    );

    ExitCode::SUCCESS
}
