pub mod schedule;
pub mod standings;

use crate::error::ScrapeError;
use crate::fetch::PageSource;
use crate::types::{ScheduleEntry, Standings};
use chrono::NaiveDate;

/// Fetch the standings page and parse it
pub async fn scrape_standings(
    source: &dyn PageSource,
    url: &str,
) -> Result<Standings, ScrapeError> {
    let html = source.fetch(url).await?;
    // Parsing is CPU-bound; keep it off the async workers
    tokio::task::spawn_blocking(move || standings::parse_standings(&html))
        .await
        .unwrap_or_else(|e| Err(ScrapeError::Join(e.to_string())))
}

/// Fetch the calendar page and parse games on or after `today`
pub async fn scrape_schedule(
    source: &dyn PageSource,
    url: &str,
    today: NaiveDate,
) -> Result<Vec<ScheduleEntry>, ScrapeError> {
    let html = source.fetch(url).await?;
    tokio::task::spawn_blocking(move || schedule::parse_schedule(&html, today))
        .await
        .unwrap_or_else(|e| Err(ScrapeError::Join(e.to_string())))
}
