mod award;
mod batting;
mod bowling;
mod page;
mod winner;

pub use award::AwardExtractor;
pub use batting::{BattingExtractor, BattingRowKind};
pub use bowling::BowlingExtractor;
pub use winner::{points_winner, WinnerExtractor, WinnerOutcome};

use crate::{run_extractor, PageFetcher, Record, ScorecardError};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BattingRow {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Desc")]
    pub desc: String,
    #[serde(rename = "Runs")]
    pub runs: String,
    #[serde(rename = "Balls")]
    pub balls: String,
    #[serde(rename = "4s")]
    pub fours: String,
    #[serde(rename = "6s")]
    pub sixes: String,
    #[serde(rename = "SR")]
    pub strike_rate: String,
    #[serde(rename = "Team")]
    pub team: u8,
    #[serde(rename = "PlayerId")]
    pub player_id: String,
}

impl BattingRow {
    /// Row for a player without a conventional dismissal.
    pub fn zeroed(name: String, desc: &str, team: u8, player_id: String) -> Self {
        let zero = || "0".to_string();
        BattingRow {
            name,
            desc: desc.to_string(),
            runs: zero(),
            balls: zero(),
            fours: zero(),
            sixes: zero(),
            strike_rate: zero(),
            team,
            player_id,
        }
    }
}

impl Record for BattingRow {
    const COLUMNS: &'static [&'static str] = &[
        "Name", "Desc", "Runs", "Balls", "4s", "6s", "SR", "Team", "PlayerId",
    ];

    fn values(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.desc.clone(),
            self.runs.clone(),
            self.balls.clone(),
            self.fours.clone(),
            self.sixes.clone(),
            self.strike_rate.clone(),
            self.team.to_string(),
            self.player_id.clone(),
        ]
    }
}

impl fmt::Display for BattingRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {:<24} {:<32} {:>4} ({}b, {}x4, {}x6, SR {})",
            self.team,
            self.name,
            self.desc,
            self.runs,
            self.balls,
            self.fours,
            self.sixes,
            self.strike_rate
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BowlingRow {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Overs")]
    pub overs: String,
    #[serde(rename = "Maidens")]
    pub maidens: String,
    #[serde(rename = "Runs")]
    pub runs: String,
    #[serde(rename = "Wickets")]
    pub wickets: String,
    #[serde(rename = "Econ")]
    pub economy: String,
    #[serde(rename = "Dots")]
    pub dots: String,
    #[serde(rename = "4s")]
    pub fours: String,
    #[serde(rename = "6s")]
    pub sixes: String,
    #[serde(rename = "Wd")]
    pub wides: String,
    #[serde(rename = "Nb")]
    pub no_balls: String,
    /// Position of the bowling table on the page (1 or 2), not the bowler's own side.
    #[serde(rename = "Team")]
    pub team: u8,
    #[serde(rename = "PlayerId")]
    pub player_id: String,
}

impl Record for BowlingRow {
    const COLUMNS: &'static [&'static str] = &[
        "Name", "Overs", "Maidens", "Runs", "Wickets", "Econ", "Dots", "4s", "6s", "Wd", "Nb",
        "Team", "PlayerId",
    ];

    fn values(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.overs.clone(),
            self.maidens.clone(),
            self.runs.clone(),
            self.wickets.clone(),
            self.economy.clone(),
            self.dots.clone(),
            self.fours.clone(),
            self.sixes.clone(),
            self.wides.clone(),
            self.no_balls.clone(),
            self.team.to_string(),
            self.player_id.clone(),
        ]
    }
}

impl fmt::Display for BowlingRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {:<24} {}-{}-{}-{} (econ {}, {} dots, {}wd, {}nb)",
            self.team,
            self.name,
            self.overs,
            self.maidens,
            self.runs,
            self.wickets,
            self.economy,
            self.dots,
            self.wides,
            self.no_balls
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MatchAward {
    pub player_name: Option<String>,
    pub player_id: Option<String>,
}

impl MatchAward {
    pub fn into_pair(self) -> (Option<String>, Option<String>) {
        (self.player_name, self.player_id)
    }
}

impl Record for MatchAward {
    const COLUMNS: &'static [&'static str] = &["Name", "PlayerId"];

    fn values(&self) -> Vec<String> {
        vec![
            self.player_name.clone().unwrap_or_default(),
            self.player_id.clone().unwrap_or_default(),
        ]
    }
}

impl fmt::Display for MatchAward {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.player_name, &self.player_id) {
            (Some(name), Some(id)) => write!(f, "{} ({})", name, id),
            (Some(name), None) => write!(f, "{}", name),
            _ => write!(f, "None"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MatchWinner {
    pub team_name: Option<String>,
    pub team_index: Option<u8>,
}

impl MatchWinner {
    pub fn into_pair(self) -> (Option<String>, Option<u8>) {
        (self.team_name, self.team_index)
    }
}

impl Record for MatchWinner {
    const COLUMNS: &'static [&'static str] = &["Team", "Index"];

    fn values(&self) -> Vec<String> {
        vec![
            self.team_name.clone().unwrap_or_default(),
            self.team_index.map(|i| i.to_string()).unwrap_or_default(),
        ]
    }
}

impl fmt::Display for MatchWinner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.team_name, self.team_index) {
            (Some(name), Some(index)) => write!(f, "{} (team {})", name, index),
            (Some(name), None) => write!(f, "{}", name),
            _ => write!(f, "None"),
        }
    }
}

/// Everything extracted from one scorecard page.
#[derive(Debug, Serialize)]
pub struct ScorecardReport {
    pub series_id: String,
    pub match_id: String,
    pub extracted_at: DateTime<Utc>,
    pub batting: Vec<BattingRow>,
    pub bowling: Vec<BowlingRow>,
    pub award: MatchAward,
    pub winner: MatchWinner,
}

pub async fn extract_batting<F: PageFetcher + ?Sized>(
    fetcher: &F,
    series_id: &str,
    match_id: &str,
) -> Result<Vec<BattingRow>, ScorecardError> {
    run_extractor(&BattingExtractor, fetcher, series_id, match_id).await
}

pub async fn extract_bowling<F: PageFetcher + ?Sized>(
    fetcher: &F,
    series_id: &str,
    match_id: &str,
) -> Result<Vec<BowlingRow>, ScorecardError> {
    run_extractor(&BowlingExtractor, fetcher, series_id, match_id).await
}

pub async fn extract_award<F: PageFetcher + ?Sized>(
    fetcher: &F,
    series_id: &str,
    match_id: &str,
) -> Result<MatchAward, ScorecardError> {
    run_extractor(&AwardExtractor, fetcher, series_id, match_id).await
}

pub async fn extract_winner<F: PageFetcher + ?Sized>(
    fetcher: &F,
    series_id: &str,
    match_id: &str,
) -> Result<MatchWinner, ScorecardError> {
    run_extractor(&WinnerExtractor, fetcher, series_id, match_id).await
}

/// Runs all four extractions. Each one fetches the page on its own.
pub async fn extract_report<F: PageFetcher + ?Sized>(
    fetcher: &F,
    series_id: &str,
    match_id: &str,
) -> Result<ScorecardReport, ScorecardError> {
    let (batting, bowling, award, winner) = futures::try_join!(
        extract_batting(fetcher, series_id, match_id),
        extract_bowling(fetcher, series_id, match_id),
        extract_award(fetcher, series_id, match_id),
        extract_winner(fetcher, series_id, match_id),
    )?;

    Ok(ScorecardReport {
        series_id: series_id.to_string(),
        match_id: match_id.to_string(),
        extracted_at: Utc::now(),
        batting,
        bowling,
        award,
        winner,
    })
}
