use crate::config::{
    no_games_id, AWAY_PREFIX, NO_GAMES_AWAY, NO_GAMES_DATE, NO_GAMES_DISPLAY, NO_GAMES_HOME,
    SCHEDULE_DATE_CLASS, SCHEDULE_LOCATION_CLASS, SCHEDULE_OPPONENT_CLASS, SCHEDULE_ROW_SELECTOR,
};
use crate::dates::parse_event_date;
use crate::error::ScrapeError;
use crate::rows::{select_rows, Row};
use crate::types::ScheduleEntry;
use chrono::NaiveDate;
use scraper::Html;
use tracing::{debug, warn};

/// Raw text pulled from one calendar row
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawGame {
    pub date_text: String,
    pub opponent: String,
    pub location: String,
}

impl RawGame {
    fn from_row(row: &Row) -> Self {
        Self {
            date_text: row.class_text(SCHEDULE_DATE_CLASS),
            opponent: row.class_text(SCHEDULE_OPPONENT_CLASS),
            location: row.class_text(SCHEDULE_LOCATION_CLASS),
        }
    }
}

/// Parse a calendar page into games on or after `today`, in page order.
///
/// Never returns an empty list: no qualifying games yields the
/// "No games scheduled" placeholder.
pub fn parse_schedule(html: &str, today: NaiveDate) -> Result<Vec<ScheduleEntry>, ScrapeError> {
    let document = Html::parse_document(html);
    let rows = select_rows(&document, SCHEDULE_ROW_SELECTOR)?;

    let games: Vec<ScheduleEntry> = rows
        .iter()
        .map(RawGame::from_row)
        .filter_map(|raw| {
            let entry = schedule_entry(&raw, today);
            if entry.is_none() {
                debug!(date = %raw.date_text, opponent = %raw.opponent, "Skipping calendar row");
            }
            entry
        })
        .collect();

    if games.is_empty() {
        warn!(rows = rows.len(), "No upcoming games parsed, serving placeholder");
        return Ok(placeholder_schedule());
    }

    debug!(games = games.len(), rows = rows.len(), "Parsed schedule");
    Ok(games)
}

/// Home and away team for a game.
///
/// Opponent text starting with "at " is a road game: the location is home
/// and the opponent (prefix removed) is away. Otherwise the opponent field
/// is home and the location is away.
pub fn home_and_away(opponent: &str, location: &str) -> (String, String) {
    let opponent = opponent.trim();
    let location = location.trim();
    match opponent.strip_prefix(AWAY_PREFIX) {
        Some(away) => (location.to_string(), away.trim().to_string()),
        None => (opponent.to_string(), location.to_string()),
    }
}

/// Build the entry for one row, or `None` if the date is unusable, already
/// past, or either side is blank.
pub fn schedule_entry(raw: &RawGame, today: NaiveDate) -> Option<ScheduleEntry> {
    let date = parse_event_date(&raw.date_text)?;
    if date < today {
        return None;
    }

    let (home, away) = home_and_away(&raw.opponent, &raw.location);
    if home.is_empty() || away.is_empty() {
        return None;
    }

    let iso = date.format("%Y-%m-%d").to_string();
    Some(ScheduleEntry {
        id: format!("{}_vs_{}_{}", home, away, iso),
        display: format!("{} at {} ({})", away, home, raw.date_text.trim()),
        home,
        away,
        date: iso,
    })
}

pub fn placeholder_schedule() -> Vec<ScheduleEntry> {
    vec![ScheduleEntry {
        id: no_games_id(),
        home: NO_GAMES_HOME.to_string(),
        away: NO_GAMES_AWAY.to_string(),
        date: NO_GAMES_DATE.to_string(),
        display: NO_GAMES_DISPLAY.to_string(),
    }]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn raw(date: &str, opponent: &str, location: &str) -> RawGame {
        RawGame {
            date_text: date.to_string(),
            opponent: opponent.to_string(),
            location: location.to_string(),
        }
    }

    #[test]
    fn test_home_and_away_road_game() {
        assert_eq!(
            home_and_away("at Yale", "New Haven"),
            ("New Haven".to_string(), "Yale".to_string())
        );
        assert_eq!(
            home_and_away("at   Yale ", "New Haven"),
            ("New Haven".to_string(), "Yale".to_string())
        );
    }

    #[test]
    fn test_home_and_away_home_game() {
        assert_eq!(
            home_and_away("Dartmouth", "Cambridge"),
            ("Dartmouth".to_string(), "Cambridge".to_string())
        );
        // Prefix is case-sensitive and needs the space
        assert_eq!(
            home_and_away("Atlanta", "Home Field"),
            ("Atlanta".to_string(), "Home Field".to_string())
        );
        assert_eq!(
            home_and_away("At Yale", "New Haven"),
            ("At Yale".to_string(), "New Haven".to_string())
        );
    }

    #[test]
    fn test_schedule_entry_road_game() {
        let game = raw("05/03/2025", "at Yale", "New Haven");
        let entry = schedule_entry(&game, ymd(2025, 4, 1)).unwrap();
        assert_eq!(
            entry,
            ScheduleEntry {
                id: "New Haven_vs_Yale_2025-05-03".to_string(),
                home: "New Haven".to_string(),
                away: "Yale".to_string(),
                date: "2025-05-03".to_string(),
                display: "Yale at New Haven (05/03/2025)".to_string(),
            }
        );
    }

    #[test]
    fn test_schedule_entry_today_is_included() {
        let today = ymd(2025, 5, 3);
        assert!(schedule_entry(&raw("5/3/2025", "Brown", "Providence"), today).is_some());
        assert!(schedule_entry(&raw("5/2/2025", "Brown", "Providence"), today).is_none());
    }

    #[test]
    fn test_schedule_entry_rejects_bad_rows() {
        let today = ymd(2025, 4, 1);
        assert!(schedule_entry(&raw("TBA", "Brown", "Providence"), today).is_none());
        assert!(schedule_entry(&raw("5/3/2025", "Brown", ""), today).is_none());
        assert!(schedule_entry(&raw("5/3/2025", "at Brown", ""), today).is_none());
        assert!(schedule_entry(&raw("5/3/2025", "", "Providence"), today).is_none());
    }

    #[test]
    fn test_parse_schedule_keeps_page_order() {
        let html = r#"
            <table class="calendar-table"><tbody>
              <tr>
                <td class="calendar-date">5/10/2025</td>
                <td class="calendar-opponent">at Penn</td>
                <td class="calendar-location">Philadelphia</td>
              </tr>
              <tr>
                <td class="calendar-date">3/1/2025</td>
                <td class="calendar-opponent">Cornell</td>
                <td class="calendar-location">Ithaca</td>
              </tr>
              <tr>
                <td class="calendar-date">5/4/2025</td>
                <td class="calendar-opponent">Columbia</td>
                <td class="calendar-location">New York</td>
              </tr>
            </tbody></table>
        "#;
        let games = parse_schedule(html, ymd(2025, 4, 1)).unwrap();
        let ids: Vec<&str> = games.iter().map(|g| g.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["Philadelphia_vs_Penn_2025-05-10", "Columbia_vs_New York_2025-05-04"]
        );
    }

    #[test]
    fn test_parse_schedule_nothing_upcoming_gives_placeholder() {
        let html = r#"
            <table class="calendar-table"><tbody>
              <tr>
                <td class="calendar-date">3/1/2025</td>
                <td class="calendar-opponent">Cornell</td>
                <td class="calendar-location">Ithaca</td>
              </tr>
            </tbody></table>
        "#;
        let games = parse_schedule(html, ymd(2025, 4, 1)).unwrap();
        assert_eq!(games, placeholder_schedule());
        assert_eq!(games[0].id, "Sample_vs_Team");
        assert_eq!(games[0].date, "TBD");
    }
}
