use super::{page, BattingRow};
use crate::{utils, Extractor, Mismatch, ScorecardError};
use scraper::{ElementRef, Html};
use tracing::info;

const REGION: &str = "batting";
const DNB: &str = "DNB";
const ABSENT_HURT: &str = "absent hurt";
const NOT_BAT: &str = "not bat";
const NOT_BAT_SEPARATOR: &str = "not bat: ";

/// What a linked row of a batting table holds.
#[derive(Debug, PartialEq, Eq)]
pub enum BattingRowKind {
    Normal,
    DidNotBat,
    AbsentHurt,
    Skipped,
}

impl BattingRowKind {
    pub fn classify(cells: &[String]) -> Result<Self, Mismatch> {
        let first = page::cell(cells, 0, REGION)?;
        let lowered = first.to_lowercase();

        if lowered == "extras" || lowered == "total" {
            Ok(BattingRowKind::Skipped)
        } else if first.contains(NOT_BAT) {
            Ok(BattingRowKind::DidNotBat)
        } else if page::cell(cells, 1, REGION)? == ABSENT_HURT {
            Ok(BattingRowKind::AbsentHurt)
        } else {
            Ok(BattingRowKind::Normal)
        }
    }
}

#[derive(Debug)]
pub struct BattingExtractor;

impl BattingExtractor {
    fn extract_row(
        &self,
        row: ElementRef<'_>,
        team: u8,
        out: &mut Vec<BattingRow>,
    ) -> Result<(), Mismatch> {
        let links = page::profile_links(row);
        let Some(first_link) = links.first() else {
            return Ok(());
        };
        let player_id = utils::player_id(first_link);
        let cells = page::cells(row);

        match BattingRowKind::classify(&cells)? {
            BattingRowKind::Skipped => {}
            BattingRowKind::DidNotBat => {
                let summary = page::cell(&cells, 0, REGION)?;
                let (_, names) =
                    summary
                        .split_once(NOT_BAT_SEPARATOR)
                        .ok_or_else(|| Mismatch::MalformedRow {
                            region: REGION,
                            reason: format!("no {:?} in {:?}", NOT_BAT_SEPARATOR, summary),
                        })?;

                for (j, name) in names.split(',').enumerate() {
                    let href = links.get(j).ok_or_else(|| Mismatch::MalformedRow {
                        region: REGION,
                        reason: format!("no profile link for did-not-bat player {}", j + 1),
                    })?;
                    out.push(BattingRow::zeroed(
                        utils::normalize_name(name),
                        DNB,
                        team,
                        utils::player_id(href),
                    ));
                }
            }
            BattingRowKind::AbsentHurt => {
                out.push(BattingRow::zeroed(
                    utils::normalize_name(page::cell(&cells, 0, REGION)?),
                    ABSENT_HURT,
                    team,
                    player_id,
                ));
            }
            BattingRowKind::Normal => {
                let cell = |i| page::cell(&cells, i, REGION).map(ToString::to_string);
                out.push(BattingRow {
                    name: utils::normalize_name(&cell(0)?),
                    desc: cell(1)?,
                    runs: cell(2)?,
                    balls: cell(3)?,
                    // cell 4 is minutes batted
                    fours: cell(5)?,
                    sixes: cell(6)?,
                    strike_rate: cell(7)?,
                    team,
                    player_id,
                });
            }
        }
        Ok(())
    }
}

impl Extractor for BattingExtractor {
    type Output = Vec<BattingRow>;

    fn extract(&self, doc: &Html) -> Result<Self::Output, ScorecardError> {
        let tables = page::ScorecardPage::new(doc).batting_tables()?;

        let mut batting = vec![];
        for (team, table) in (1u8..).zip(tables) {
            for row in page::rows(table) {
                self.extract_row(row, team, &mut batting)?;
            }
        }

        info!("Extracted {} batting rows", batting.len());
        Ok(batting)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn cells(raw: &[&str]) -> Vec<String> {
        raw.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn classifies_in_priority_order() {
        assert_eq!(
            BattingRowKind::classify(&cells(&["Extras", "(lb 1)", "1"])),
            Ok(BattingRowKind::Skipped)
        );
        assert_eq!(
            BattingRowKind::classify(&cells(&["TOTAL"])),
            Ok(BattingRowKind::Skipped)
        );
        assert_eq!(
            BattingRowKind::classify(&cells(&["Did not bat: A Smith"])),
            Ok(BattingRowKind::DidNotBat)
        );
        assert_eq!(
            BattingRowKind::classify(&cells(&["C Brown", "absent hurt", "", ""])),
            Ok(BattingRowKind::AbsentHurt)
        );
        assert_eq!(
            BattingRowKind::classify(&cells(&["C Brown", "b Malinga", "4", "5"])),
            Ok(BattingRowKind::Normal)
        );
    }

    #[test]
    fn absent_hurt_must_match_exactly() {
        assert_eq!(
            BattingRowKind::classify(&cells(&["C Brown", "retired hurt"])),
            Ok(BattingRowKind::Normal)
        );
        assert_eq!(
            BattingRowKind::classify(&cells(&["C Brown", "Absent hurt"])),
            Ok(BattingRowKind::Normal)
        );
    }

    #[test]
    fn classify_needs_cells() {
        assert_eq!(
            BattingRowKind::classify(&[]),
            Err(Mismatch::MissingCell {
                region: REGION,
                index: 0
            })
        );
        assert_eq!(
            BattingRowKind::classify(&cells(&["C Brown"])),
            Err(Mismatch::MissingCell {
                region: REGION,
                index: 1
            })
        );
    }
}
