use super::{page, BowlingRow};
use crate::{utils, Extractor, Mismatch, ScorecardError};
use scraper::{ElementRef, Html};
use tracing::{debug, info};

const REGION: &str = "bowling";
const COLUMNS: usize = 11;

#[derive(Debug)]
pub struct BowlingExtractor;

impl BowlingExtractor {
    fn extract_row(&self, row: ElementRef<'_>, team: u8) -> Result<Option<BowlingRow>, Mismatch> {
        let Some(href) = page::profile_links(row).first().copied() else {
            return Ok(None);
        };
        let player_id = utils::player_id(href);

        let cells = page::cells(row);
        if cells.len() != COLUMNS {
            return Err(Mismatch::MalformedRow {
                region: REGION,
                reason: format!("expected {} cells, found {}", COLUMNS, cells.len()),
            });
        }

        let mut cells = cells.into_iter();
        let mut next = || cells.next().unwrap_or_default();
        Ok(Some(BowlingRow {
            name: next(),
            overs: next(),
            maidens: next(),
            runs: next(),
            wickets: next(),
            economy: next(),
            dots: next(),
            fours: next(),
            sixes: next(),
            wides: next(),
            no_balls: next(),
            team,
            player_id,
        }))
    }
}

impl Extractor for BowlingExtractor {
    type Output = Vec<BowlingRow>;

    fn extract(&self, doc: &Html) -> Result<Self::Output, ScorecardError> {
        let tables = page::ScorecardPage::new(doc).bowling_tables()?;

        let mut bowling = vec![];
        let mut team = 0u8;
        for table in tables {
            if page::has_venue_marker(table) {
                debug!("Skip table with venue marker");
                continue;
            }
            team += 1;
            for row in page::rows(table) {
                if let Some(record) = self.extract_row(row, team)? {
                    bowling.push(record);
                }
            }
        }

        info!("Extracted {} bowling rows", bowling.len());
        Ok(bowling)
    }
}
