//! The assembled season plan.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::Serialize;
use stride_calendar::WeekRef;

/// One block of a session: its number and the exercises drawn for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Block {
    number: u8,
    activities: Vec<String>,
}

impl Block {
    pub(crate) fn new(number: u8, activities: Vec<String>) -> Self {
        Self { number, activities }
    }

    /// Block number, starting at 1.
    pub fn number(&self) -> u8 {
        self.number
    }

    /// Exercise names in draw order.
    pub fn activities(&self) -> &[String] {
        &self.activities
    }
}

/// A single training session on a concrete date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    week: WeekRef,
    date: NaiveDate,
    discipline: String,
    blocks: Vec<Block>,
}

impl Session {
    pub(crate) fn new(
        week: WeekRef,
        date: NaiveDate,
        discipline: String,
        blocks: Vec<Block>,
    ) -> Self {
        Self {
            week,
            date,
            discipline,
            blocks,
        }
    }

    /// The ISO week the session falls in.
    pub fn week(&self) -> WeekRef {
        self.week
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn weekday(&self) -> Weekday {
        self.date.weekday()
    }

    pub fn discipline(&self) -> &str {
        &self.discipline
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }
}

/// Chronologically ordered sessions for one age group.
///
/// A plan is a derived artifact: it is rebuilt on every generation and
/// carries fully resolved dates, so renderers never redo calendar math.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SeasonPlan {
    age_group: String,
    sessions: Vec<Session>,
}

impl SeasonPlan {
    pub(crate) fn new(age_group: String, sessions: Vec<Session>) -> Self {
        Self {
            age_group,
            sessions,
        }
    }

    pub fn age_group(&self) -> &str {
        &self.age_group
    }

    pub fn sessions(&self) -> &[Session] {
        &self.sessions
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Week of the first session, if any.
    pub fn first_week(&self) -> Option<WeekRef> {
        self.sessions.first().map(Session::week)
    }

    /// Week of the last session, if any.
    pub fn last_week(&self) -> Option<WeekRef> {
        self.sessions.last().map(Session::week)
    }

    pub fn into_sessions(self) -> Vec<Session> {
        self.sessions
    }
}
