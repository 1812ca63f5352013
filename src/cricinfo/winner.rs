use super::{page, MatchWinner};
use crate::{utils, Extractor, Mismatch, ScorecardError};
use scraper::Html;
use serde::Serialize;
use std::collections::HashMap;
use tracing::{debug, info};

const REGION: &str = "match details";
const POINTS_LABEL: &str = "Points";
const WINNING_POINTS: char = '2';

/// Result of reading the points row of the match details table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum WinnerOutcome {
    Winner { name: String, index: u8 },
    /// A points row exists but no team took the full two points.
    NoClearWinner { points: String },
    /// The last details row is not a points row.
    NotApplicable,
}

impl From<WinnerOutcome> for MatchWinner {
    fn from(outcome: WinnerOutcome) -> Self {
        match outcome {
            WinnerOutcome::Winner { name, index } => MatchWinner {
                team_name: Some(name),
                team_index: Some(index),
            },
            WinnerOutcome::NoClearWinner { .. } | WinnerOutcome::NotApplicable => {
                MatchWinner::default()
            }
        }
    }
}

/// Name of the team awarded two points.
///
/// Handles both `"Mumbai Indians 2, Chennai Super Kings 0"` and
/// `"2 - Mumbai Indians"`.
pub fn points_winner(points: &str) -> Option<String> {
    let (before, after) = points.split_once(WINNING_POINTS)?;

    let before = before.rsplit(',').next().unwrap_or(before).trim();
    if !before.is_empty() {
        return Some(before.to_string());
    }

    let after = after
        .split(',')
        .next()
        .unwrap_or(after)
        .trim_start_matches(|c: char| c == '-' || c.is_whitespace())
        .trim();
    (!after.is_empty()).then(|| after.to_string())
}

#[derive(Debug)]
pub struct WinnerExtractor;

impl WinnerExtractor {
    pub fn outcome(&self, doc: &Html) -> Result<WinnerOutcome, Mismatch> {
        let scorecard = page::ScorecardPage::new(doc);
        let details = scorecard.match_details()?;
        let last_row = page::rows(details)
            .last()
            .ok_or(Mismatch::EmptyRegion(REGION))?;

        let cells = page::cells(last_row);
        if page::cell(&cells, 0, REGION)? != POINTS_LABEL {
            debug!("Last match details row is not a points row");
            return Ok(WinnerOutcome::NotApplicable);
        }
        let points = page::cell(&cells, 1, REGION)?;

        let teams = team_indices(&scorecard)?;
        match points_winner(points) {
            Some(name) => {
                let index = *teams
                    .get(name.as_str())
                    .ok_or_else(|| Mismatch::UnknownTeam(name.clone()))?;
                info!("Winner {} (team {})", name, index);
                Ok(WinnerOutcome::Winner { name, index })
            }
            None => {
                info!("No clear winner from points {:?}", points);
                Ok(WinnerOutcome::NoClearWinner {
                    points: points.to_string(),
                })
            }
        }
    }
}

fn team_indices(scorecard: &page::ScorecardPage<'_>) -> Result<HashMap<String, u8>, Mismatch> {
    let names: Vec<String> = scorecard
        .select(&page::TEAM_NAME)
        .take(2)
        .map(utils::element_text)
        .collect();
    if names.len() < 2 {
        return Err(Mismatch::MissingTeams(names.len()));
    }
    Ok(names.into_iter().zip(1u8..).collect())
}

impl Extractor for WinnerExtractor {
    type Output = MatchWinner;

    fn extract(&self, doc: &Html) -> Result<Self::Output, ScorecardError> {
        Ok(self.outcome(doc)?.into())
    }
}
