mod config;
mod error;
mod fetch;
mod limiter;
mod model;
mod output;
mod parser;
mod pipeline;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;

use config::{DEFAULT_OUTPUT, DETAIL_CONCURRENCY, INDEX_URL};
use fetch::HttpFetcher;

#[derive(Parser)]
#[command(
    name = "sheets_functions",
    about = "Scrape the Google Sheets function list into a JSON catalog"
)]
struct Cli {
    /// Where to write the catalog
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    let fetcher = Arc::new(HttpFetcher::new()?);
    let count = pipeline::export(fetcher, INDEX_URL, DETAIL_CONCURRENCY, &cli.output)
        .await
        .with_context(|| format!("Scrape failed; {} was not written", cli.output.display()))?;

    println!("Saved {} functions to {}", count, cli.output.display());

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("Done in {}", format_duration(elapsed));
    }
    Ok(())
}

fn format_duration(d: std::time::Duration) -> String {
    let secs = d.as_secs();
    if secs < 60 {
        format!("{:.1}s", d.as_secs_f64())
    } else if secs < 3600 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else {
        format!("{}h {}m {}s", secs / 3600, (secs % 3600) / 60, secs % 60)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn durations() {
        assert_eq!(format_duration(Duration::from_millis(12_340)), "12.3s");
        assert_eq!(format_duration(Duration::from_secs(125)), "2m 5s");
        assert_eq!(format_duration(Duration::from_secs(3723)), "1h 2m 3s");
    }

    #[test]
    fn cli_defaults_to_fixed_output() {
        let cli = Cli::parse_from(["sheets_functions"]);
        assert_eq!(cli.output, PathBuf::from("function-data.json"));
    }
}
