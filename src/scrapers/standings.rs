use crate::config::{
    NO_STANDINGS_TEAM, RECORD_DELIMITER, STANDINGS_RECORD_COLUMN, STANDINGS_ROW_SELECTOR,
    STANDINGS_TEAM_COLUMN,
};
use crate::error::ScrapeError;
use crate::rows::{select_rows, Row};
use crate::types::{Record, Standings, StandingsEntry};
use scraper::Html;
use tracing::{debug, warn};

/// Parse a standings page into team -> record.
///
/// Never returns an empty map: a page with no usable rows yields the
/// "Data Not Found" placeholder.
pub fn parse_standings(html: &str) -> Result<Standings, ScrapeError> {
    let document = Html::parse_document(html);
    let rows = select_rows(&document, STANDINGS_ROW_SELECTOR)?;

    let standings = collect_standings(rows.iter().filter_map(parse_row));

    if standings.is_empty() {
        warn!(rows = rows.len(), "No standings rows parsed, serving placeholder");
        return Ok(placeholder_standings());
    }

    debug!(teams = standings.len(), rows = rows.len(), "Parsed standings");
    Ok(standings)
}

/// Fold entries into a map. A team seen twice keeps its last record.
pub fn collect_standings<I>(entries: I) -> Standings
where
    I: IntoIterator<Item = StandingsEntry>,
{
    let mut standings = Standings::new();
    for entry in entries {
        standings.insert(entry.team.clone(), entry.record());
    }
    standings
}

pub fn placeholder_standings() -> Standings {
    let mut standings = Standings::new();
    standings.insert(NO_STANDINGS_TEAM.to_string(), Record { wins: 0, losses: 0 });
    standings
}

fn parse_row(row: &Row) -> Option<StandingsEntry> {
    let team = row
        .cell(STANDINGS_TEAM_COLUMN)
        .map(|cell| cell.link_text().unwrap_or_else(|| cell.text()))
        .unwrap_or_default();
    let record = row.cell_text(STANDINGS_RECORD_COLUMN);

    let entry = standings_entry(&team, &record);
    if entry.is_none() {
        debug!(%team, %record, "Skipping standings row");
    }
    entry
}

/// Validate one team/record pair, e.g. ("Harvard", "5-10")
pub fn standings_entry(team: &str, record: &str) -> Option<StandingsEntry> {
    let team = team.trim();
    if team.is_empty() {
        return None;
    }

    let (wins, losses) = split_record(record)?;
    Some(StandingsEntry {
        team: team.to_string(),
        wins,
        losses,
    })
}

/// "5-10" -> (5, 10). Segments past the second ("5-10-1") are ignored.
pub fn split_record(record: &str) -> Option<(u64, u64)> {
    let mut parts = record.split(RECORD_DELIMITER);
    let wins = parse_leading_int(parts.next()?)?;
    let losses = parse_leading_int(parts.next()?)?;
    Some((wins, losses))
}

/// Lenient base-10 parse: skips leading whitespace, accepts a `+`, reads
/// leading digits and ignores whatever follows them.
fn parse_leading_int(s: &str) -> Option<u64> {
    let s = s.trim_start();
    let s = s.strip_prefix('+').unwrap_or(s);
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    if end == 0 {
        return None;
    }
    s[..end].parse().ok()
}
