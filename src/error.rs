#[derive(Debug, thiserror::Error)]
pub enum ScorecardError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Page structure mismatch: {0}")]
    Mismatch(#[from] Mismatch),
}

impl ScorecardError {
    pub fn is_mismatch(&self) -> bool {
        matches!(self, ScorecardError::Mismatch(_))
    }
}

/// The page did not have the shape the extractors rely on.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum Mismatch {
    #[error("unrecognized page shape, no {0} found")]
    UnrecognizedPage(&'static str),
    #[error("{region} row has no cell {index}")]
    MissingCell { region: &'static str, index: usize },
    #[error("malformed {region} row: {reason}")]
    MalformedRow {
        region: &'static str,
        reason: String,
    },
    #[error("{0} region has no rows or links")]
    EmptyRegion(&'static str),
    #[error("expected two team names, found {0}")]
    MissingTeams(usize),
    #[error("points awarded to unknown team {0:?}")]
    UnknownTeam(String),
}
