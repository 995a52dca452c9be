//! Startup configuration, page layout constants and placeholder values.
//!
//! Everything here is resolved once in `main` and handed to the router;
//! nothing reads the environment after startup.
//!
//! Environment variables:
//! - PORT (default: 3000)
//! - BIND_HOST (default: 0.0.0.0)
//! - STATIC_DIR (default: public)
//! - STANDINGS_URL / SCHEDULE_URL (default: Ivy League softball pages)
//! - FETCH_TIMEOUT_SECS (default: 30)

use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// Conference standings page
pub const DEFAULT_STANDINGS_URL: &str = "https://ivyleague.com/standings.aspx?path=softball";

/// Conference calendar page
pub const DEFAULT_SCHEDULE_URL: &str = "https://ivyleague.com/calendar.aspx?path=softball";

/// User agent sent with every upstream request
pub const USER_AGENT: &str = "Mozilla/5.0 (compatible; ConferenceFeed/0.1)";

// === Standings page layout ===

pub const STANDINGS_ROW_SELECTOR: &str = "table tbody tr";
pub const STANDINGS_TEAM_COLUMN: usize = 0;
/// Conference record as a single "W-L" token
pub const STANDINGS_RECORD_COLUMN: usize = 2;
pub const RECORD_DELIMITER: char = '-';

// === Calendar page layout ===

pub const SCHEDULE_ROW_SELECTOR: &str = ".calendar-table tbody tr";
pub const SCHEDULE_DATE_CLASS: &str = "calendar-date";
pub const SCHEDULE_OPPONENT_CLASS: &str = "calendar-opponent";
pub const SCHEDULE_LOCATION_CLASS: &str = "calendar-location";
/// Opponent text prefix marking a road game
pub const AWAY_PREFIX: &str = "at ";

// === Placeholders served when a page yields nothing ===

pub const NO_STANDINGS_TEAM: &str = "Data Not Found";
pub const NO_GAMES_HOME: &str = "Sample";
pub const NO_GAMES_AWAY: &str = "Team";
pub const NO_GAMES_DATE: &str = "TBD";
pub const NO_GAMES_DISPLAY: &str = "No games scheduled";

/// Server configuration
#[derive(Parser, Debug, Clone)]
#[command(
    name = "conference_feed",
    version,
    about = "Serves scraped conference standings and schedule as JSON"
)]
pub struct Config {
    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Address to bind
    #[arg(long, env = "BIND_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Directory served at `/`
    #[arg(long, env = "STATIC_DIR", default_value = "public")]
    pub static_dir: PathBuf,

    #[arg(long, env = "STANDINGS_URL", default_value = DEFAULT_STANDINGS_URL)]
    pub standings_url: String,

    #[arg(long, env = "SCHEDULE_URL", default_value = DEFAULT_SCHEDULE_URL)]
    pub schedule_url: String,

    /// Upper bound on a single upstream fetch
    #[arg(long, env = "FETCH_TIMEOUT_SECS", default_value_t = 30)]
    pub fetch_timeout_secs: u64,
}

impl Config {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 3000,
            host: "0.0.0.0".to_string(),
            static_dir: PathBuf::from("public"),
            standings_url: DEFAULT_STANDINGS_URL.to_string(),
            schedule_url: DEFAULT_SCHEDULE_URL.to_string(),
            fetch_timeout_secs: 30,
        }
    }
}

/// Id of the placeholder schedule entry
pub fn no_games_id() -> String {
    format!("{}_vs_{}", NO_GAMES_HOME, NO_GAMES_AWAY)
}
