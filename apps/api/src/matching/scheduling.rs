//! Interview scheduling gate. Pure date arithmetic, no calendar lookups.

use chrono::{Days, NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

use crate::matching::engine::{MatchStatus, SHORTLIST_THRESHOLD};

pub const INTERVIEW_DELAY_DAYS: u64 = 2;
pub const INTERVIEW_HOUR: u32 = 11;

const INTERVIEW_TIME: NaiveTime = match NaiveTime::from_hms_opt(INTERVIEW_HOUR, 0, 0) {
    Some(time) => time,
    None => panic!("interview hour out of range"),
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SchedulingDecision {
    Rejected,
    Shortlisted { interview_date: NaiveDateTime },
}

impl SchedulingDecision {
    pub fn status(&self) -> MatchStatus {
        match self {
            SchedulingDecision::Rejected => MatchStatus::Rejected,
            SchedulingDecision::Shortlisted { .. } => MatchStatus::Shortlisted,
        }
    }

    pub fn interview_date(&self) -> Option<NaiveDateTime> {
        match self {
            SchedulingDecision::Rejected => None,
            SchedulingDecision::Shortlisted { interview_date } => Some(*interview_date),
        }
    }
}

/// The interview day for a shortlist decided at `now`, or `None` when it falls
/// past the last representable date.
pub fn interview_day(now: NaiveDateTime) -> Option<NaiveDate> {
    now.date().checked_add_days(Days::new(INTERVIEW_DELAY_DAYS))
}

/// Below the shortlist threshold: rejected. Otherwise the interview lands two
/// days after `now` at 11:00:00.000, saturating at `NaiveDate::MAX`.
pub fn schedule_if_eligible(match_score: u32, now: NaiveDateTime) -> SchedulingDecision {
    if match_score < SHORTLIST_THRESHOLD {
        return SchedulingDecision::Rejected;
    }

    let day = interview_day(now).unwrap_or(NaiveDate::MAX);

    SchedulingDecision::Shortlisted {
        interview_date: day.and_time(INTERVIEW_TIME),
    }
}
