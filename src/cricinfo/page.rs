use crate::{utils, Mismatch};
use lazy_static::lazy_static;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

const E: &str = "Invalid selector";
lazy_static! {
    static ref TBODY: Selector = Selector::parse("tbody").expect(E);
    static ref BATTING_TBODY: Selector = Selector::parse("table.batsman tbody").expect(E);
    static ref BOWLING_TBODY: Selector = Selector::parse("table.bowler tbody").expect(E);
    static ref DETAILS_TBODY: Selector =
        Selector::parse("table.match-details-table tbody").expect(E);
    static ref VENUE: Selector = Selector::parse(".font-weight-bold.match-venue").expect(E);
    pub(crate) static ref AWARD: Selector = Selector::parse(".best-player-carousel").expect(E);
    pub(crate) static ref TEAM_NAME: Selector =
        Selector::parse(".match-info .team .name-detail .name").expect(E);
    static ref TR: Selector = Selector::parse("tr").expect(E);
    static ref TD: Selector = Selector::parse("td").expect(E);
    pub(crate) static ref LINK: Selector = Selector::parse("a[href]").expect(E);
}

const BATTING_POSITIONS: [usize; 2] = [0, 2];
const BOWLING_POSITIONS: [usize; 2] = [1, 3];
const DETAILS_POSITION: usize = 4;

/// Table-body regions of a scorecard page.
///
/// Regions are looked up by their marker class first. Pages without the
/// markers fall back to the conventional table-body order: batting, bowling,
/// batting, bowling, match details.
pub(crate) struct ScorecardPage<'a> {
    doc: &'a Html,
}

impl<'a> ScorecardPage<'a> {
    pub(crate) fn new(doc: &'a Html) -> Self {
        ScorecardPage { doc }
    }

    pub(crate) fn batting_tables(&self) -> Result<Vec<ElementRef<'a>>, Mismatch> {
        self.innings_tables(&BATTING_TBODY, BATTING_POSITIONS, "batting table")
    }

    pub(crate) fn bowling_tables(&self) -> Result<Vec<ElementRef<'a>>, Mismatch> {
        self.innings_tables(&BOWLING_TBODY, BOWLING_POSITIONS, "bowling table")
    }

    pub(crate) fn match_details(&self) -> Result<ElementRef<'a>, Mismatch> {
        if let Some(table) = self.doc.select(&DETAILS_TBODY).next() {
            return Ok(table);
        }
        debug!("No match details marker, using table body {}", DETAILS_POSITION);
        self.doc
            .select(&TBODY)
            .nth(DETAILS_POSITION)
            .ok_or(Mismatch::UnrecognizedPage("match details table"))
    }

    pub(crate) fn select(
        &self,
        selector: &'static Selector,
    ) -> impl Iterator<Item = ElementRef<'a>> + 'a {
        self.doc.select(selector)
    }

    fn innings_tables(
        &self,
        marker: &Selector,
        positions: [usize; 2],
        region: &'static str,
    ) -> Result<Vec<ElementRef<'a>>, Mismatch> {
        let tables: Vec<_> = self.doc.select(marker).take(positions.len()).collect();
        if !tables.is_empty() {
            return Ok(tables);
        }

        debug!("No {} marker, using table bodies {:?}", region, positions);
        let bodies: Vec<_> = self.doc.select(&TBODY).collect();
        if bodies.len() <= positions[0] {
            return Err(Mismatch::UnrecognizedPage(region));
        }
        Ok(positions
            .iter()
            .filter_map(|&i| bodies.get(i).copied())
            .collect())
    }
}

pub(crate) fn rows(table: ElementRef<'_>) -> impl Iterator<Item = ElementRef<'_>> {
    table.select(&TR)
}

pub(crate) fn cells(row: ElementRef<'_>) -> Vec<String> {
    row.select(&TD).map(utils::element_text).collect()
}

pub(crate) fn profile_links(row: ElementRef<'_>) -> Vec<&str> {
    row.select(&LINK)
        .filter_map(|a| a.value().attr("href"))
        .collect()
}

pub(crate) fn has_venue_marker(table: ElementRef<'_>) -> bool {
    table.select(&VENUE).next().is_some()
}

/// Cell `index` of a row, or a mismatch naming the region it came from.
pub(crate) fn cell<'c>(
    cells: &'c [String],
    index: usize,
    region: &'static str,
) -> Result<&'c str, Mismatch> {
    cells
        .get(index)
        .map(String::as_str)
        .ok_or(Mismatch::MissingCell { region, index })
}
