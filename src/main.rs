use clap::{Parser, ValueEnum};
use cricket_scorecard_scraper::cricinfo;
use cricket_scorecard_scraper::{to_tsv, HttpFetcher, Record, ScorecardConfig};
use serde::Serialize;
use std::fmt::Display;
use std::slice;
use tracing::info;
use tracing_error::ErrorLayer;
use tracing_subscriber::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Target {
    All,
    Batting,
    Bowling,
    Award,
    Winner,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Json,
    Tsv,
    Text,
}

/// Extract batting, bowling, award and winner data from a match scorecard.
#[derive(Debug, Parser)]
#[command(name = "cricket-scorecard", version)]
struct Cli {
    /// Series identifier, e.g. `ipl-2020-21-1210595`
    series_id: String,
    /// Match identifier, e.g. `delhi-capitals-vs-mumbai-indians-final-1237181`
    match_id: String,
    #[arg(short, long, value_enum, default_value_t = Target::All)]
    extract: Target,
    #[arg(short, long, value_enum, default_value_t = Format::Json)]
    format: Format,
    /// Site root; defaults to `SCORECARD_BASE_URL` or the public site
    #[arg(long)]
    base_url: Option<String>,
}

fn print_json<T: Serialize>(value: &T) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_table<R: Record + Display + Serialize>(
    format: Format,
    records: &[R],
) -> Result<(), serde_json::Error> {
    match format {
        Format::Json => print_json(&records)?,
        Format::Tsv => print!("{}", to_tsv(records)),
        Format::Text => records.iter().for_each(|r| println!("{}", r)),
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_env("LOG_LEVEL").unwrap_or_else(|_| {
                "info,html5ever=error,selectors=error,hyper=warn,reqwest=info".into()
            }),
        )
        .with(ErrorLayer::default())
        .init();

    let cli = Cli::parse();
    let config = cli
        .base_url
        .map(ScorecardConfig::new)
        .unwrap_or_else(ScorecardConfig::from_env);
    let fetcher = HttpFetcher::new(config);
    let (series_id, match_id) = (cli.series_id.as_str(), cli.match_id.as_str());
    info!(
        "Scorecard {}",
        fetcher.config().scorecard_url(series_id, match_id)
    );

    match cli.extract {
        Target::All => {
            let report = cricinfo::extract_report(&fetcher, series_id, match_id).await?;
            match cli.format {
                Format::Json => print_json(&report)?,
                Format::Tsv => {
                    println!("{}", to_tsv(&report.batting));
                    println!("{}", to_tsv(&report.bowling));
                    println!("{}", to_tsv(slice::from_ref(&report.award)));
                    print!("{}", to_tsv(slice::from_ref(&report.winner)));
                }
                Format::Text => {
                    print_table(Format::Text, &report.batting)?;
                    print_table(Format::Text, &report.bowling)?;
                    println!("Award  : {}", report.award);
                    println!("Winner : {}", report.winner);
                }
            }
        }
        Target::Batting => {
            let rows = cricinfo::extract_batting(&fetcher, series_id, match_id).await?;
            print_table(cli.format, &rows)?;
        }
        Target::Bowling => {
            let rows = cricinfo::extract_bowling(&fetcher, series_id, match_id).await?;
            print_table(cli.format, &rows)?;
        }
        Target::Award => {
            let award = cricinfo::extract_award(&fetcher, series_id, match_id).await?;
            match cli.format {
                Format::Json => print_json(&award)?,
                Format::Tsv => print!("{}", to_tsv(slice::from_ref(&award))),
                Format::Text => println!("{}", award),
            }
        }
        Target::Winner => {
            let winner = cricinfo::extract_winner(&fetcher, series_id, match_id).await?;
            match cli.format {
                Format::Json => print_json(&winner)?,
                Format::Tsv => print!("{}", to_tsv(slice::from_ref(&winner))),
                Format::Text => println!("{}", winner),
            }
        }
    }

    Ok(())
}
