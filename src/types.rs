use serde::Serialize;
use std::collections::BTreeMap;

/// Conference win/loss record for one team
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Record {
    pub wins: u64,
    pub losses: u64,
}

/// One validated standings row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandingsEntry {
    pub team: String,
    pub wins: u64,
    pub losses: u64,
}

impl StandingsEntry {
    pub fn record(&self) -> Record {
        Record {
            wins: self.wins,
            losses: self.losses,
        }
    }
}

/// Team name -> record, as served by `/api/standings`
pub type Standings = BTreeMap<String, Record>;

/// An upcoming game, as served by `/api/schedule`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleEntry {
    pub id: String,
    pub home: String,
    pub away: String,
    /// `YYYY-MM-DD`, or a placeholder for the empty-schedule entry
    pub date: String,
    pub display: String,
}
