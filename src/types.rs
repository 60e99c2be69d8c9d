use crate::constants::{LOCATION_ADDRESS, LOCATION_NAME};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Meeting category vocabulary shared with the aggregation platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Classification {
    #[serde(rename = "Advisory Committee")]
    AdvisoryCommittee,
    Board,
    #[serde(rename = "City Council")]
    CityCouncil,
    Commission,
    Committee,
    Forum,
    #[serde(rename = "Police Beat")]
    PoliceBeat,
    #[serde(rename = "Not classified")]
    NotClassified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeetingStatus {
    Passed,
    Tentative,
    Confirmed,
    Cancelled,
}

impl MeetingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MeetingStatus::Passed => "passed",
            MeetingStatus::Tentative => "tentative",
            MeetingStatus::Confirmed => "confirmed",
            MeetingStatus::Cancelled => "cancelled",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub address: String,
}

impl Location {
    /// The board's fixed meeting venue.
    pub fn thompson_center() -> Self {
        Self {
            name: LOCATION_NAME.to_string(),
            address: LOCATION_ADDRESS.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub title: String,
    pub href: String,
}

impl Link {
    pub fn new(title: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            href: href.into(),
        }
    }
}

/// One normalized meeting, ready for the external sink
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeetingRecord {
    pub id: String,
    pub title: String,
    pub description: String,
    pub classification: Classification,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub all_day: bool,
    pub time_notes: String,
    pub location: Location,
    pub links: Vec<Link>,
    pub source: String,
    pub status: MeetingStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serializes_lowercase() {
        let json = serde_json::to_string(&MeetingStatus::Cancelled).unwrap();
        assert_eq!(json, "\"cancelled\"");
        assert_eq!(MeetingStatus::Passed.as_str(), "passed");
    }

    #[test]
    fn test_classification_names() {
        assert_eq!(serde_json::to_string(&Classification::Board).unwrap(), "\"Board\"");
        assert_eq!(
            serde_json::to_string(&Classification::AdvisoryCommittee).unwrap(),
            "\"Advisory Committee\""
        );
    }

    #[test]
    fn test_thompson_center_is_in_chicago() {
        assert!(Location::thompson_center().address.contains("Chicago"));
    }
}
