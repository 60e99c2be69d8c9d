use crate::app::ports::StatusDeriver;
use crate::constants::CANCELLED_KEYWORDS;
use crate::types::{MeetingRecord, MeetingStatus};
use chrono::{Local, NaiveDateTime};

/// Status rule used across the aggregation platform: cancellation wording wins,
/// then anything that already started is passed, everything else is tentative.
#[derive(Debug, Clone, Default)]
pub struct ConventionalStatus {
    now: Option<NaiveDateTime>,
}

impl ConventionalStatus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluate against a fixed instant instead of the local clock.
    pub fn at(now: NaiveDateTime) -> Self {
        Self { now: Some(now) }
    }

    fn now(&self) -> NaiveDateTime {
        self.now.unwrap_or_else(|| Local::now().naive_local())
    }
}

impl StatusDeriver for ConventionalStatus {
    fn derive_status(&self, record: &MeetingRecord) -> MeetingStatus {
        let meeting_text = format!(
            "{} {} {}",
            record.title, record.description, record.time_notes
        )
        .to_lowercase();

        if CANCELLED_KEYWORDS.iter().any(|word| meeting_text.contains(word)) {
            return MeetingStatus::Cancelled;
        }
        if record.start < self.now() {
            return MeetingStatus::Passed;
        }
        MeetingStatus::Tentative
    }
}
