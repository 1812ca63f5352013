use super::{page, MatchAward};
use crate::{utils, Extractor, Mismatch, ScorecardError};
use scraper::Html;
use tracing::debug;

#[derive(Debug)]
pub struct AwardExtractor;

impl Extractor for AwardExtractor {
    type Output = MatchAward;

    fn extract(&self, doc: &Html) -> Result<Self::Output, ScorecardError> {
        let scorecard = page::ScorecardPage::new(doc);
        let Some(carousel) = scorecard.select(&page::AWARD).next() else {
            debug!("No award carousel");
            return Ok(MatchAward::default());
        };

        let link = carousel
            .select(&page::LINK)
            .next()
            .ok_or(Mismatch::EmptyRegion("award carousel"))?;
        let player_id = link
            .value()
            .attr("href")
            .map(utils::player_id)
            .ok_or(Mismatch::EmptyRegion("award carousel"))?;

        Ok(MatchAward {
            player_name: Some(utils::element_text(link)),
            player_id: Some(player_id),
        })
    }
}
