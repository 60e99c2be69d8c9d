use crate::app::ports::IdDeriver;
use crate::constants::{ID_TIME_FORMAT, SCRAPER_NAME};
use crate::error::Result;
use crate::types::MeetingRecord;
use regex::Regex;

/// Builds ids shaped `<scraper>/<start %Y%m%d%H%M>/<title_slug>`.
pub struct SpiderId {
    scraper_name: String,
    non_word: Regex,
    whitespace: Regex,
}

impl SpiderId {
    pub fn new(scraper_name: impl Into<String>) -> Result<Self> {
        Ok(Self {
            scraper_name: scraper_name.into(),
            non_word: Regex::new(r"[^A-Za-z0-9\^]+")?,
            whitespace: Regex::new(r"\s+")?,
        })
    }

    pub fn for_board() -> Result<Self> {
        Self::new(SCRAPER_NAME)
    }

    pub fn title_slug(&self, title: &str) -> String {
        let spaced = self.non_word.replace_all(title, " ");
        let underscored = self.whitespace.replace_all(&spaced, "_");
        underscored.trim_matches('_').to_lowercase()
    }
}

impl IdDeriver for SpiderId {
    fn derive_id(&self, record: &MeetingRecord) -> String {
        format!(
            "{}/{}/{}",
            self.scraper_name,
            record.start.format(ID_TIME_FORMAT),
            self.title_slug(&record.title)
        )
    }
}
