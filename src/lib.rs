use scraper::Html;
use tracing::debug;

pub mod cricinfo;
pub mod fetch;

mod data;
mod error;
mod utils;

pub use data::{to_tsv, tsv_field, Record};
pub use error::{Mismatch, ScorecardError};
pub use fetch::{HttpFetcher, ScorecardConfig};

/// Pulls one typed result out of a parsed scorecard page.
pub trait Extractor {
    type Output;

    fn extract(&self, doc: &Html) -> Result<Self::Output, ScorecardError>;
}

/// Source of raw scorecard HTML for a `(series_id, match_id)` pair.
#[async_trait::async_trait]
pub trait PageFetcher {
    async fn fetch(&self, series_id: &str, match_id: &str) -> Result<String, ScorecardError>;
}

/// Fetch the page, parse it and apply `extractor`.
///
/// Every call fetches and parses from scratch; nothing is cached between calls.
pub async fn run_extractor<E, F>(
    extractor: &E,
    fetcher: &F,
    series_id: &str,
    match_id: &str,
) -> Result<E::Output, ScorecardError>
where
    E: Extractor + ?Sized,
    F: PageFetcher + ?Sized,
{
    let html = fetcher.fetch(series_id, match_id).await?;
    debug!("Fetched {} bytes for {}/{}", html.len(), series_id, match_id);

    let doc = Html::parse_document(&html);
    extractor.extract(&doc)
}
