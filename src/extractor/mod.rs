//! Meeting record extraction from the board-meetings table.
//!
//! Every `tbody > tr` row with a `td` becomes one [`MeetingRecord`]; header rows
//! made only of `th` cells are skipped. The first row that
//! fails (missing canary city, malformed time) ends the whole extraction:
//! the iterator yields that error and then nothing else.

pub mod dom;
pub mod fields;

use crate::app::ports::{IdDeriver, StatusDeriver};
use crate::config::{Config, ExtractorConfig};
use crate::constants::{
    AGENCY_NAME, BODY_CELL_SELECTOR, DATE_CELL_SELECTOR, LINK_SELECTOR, MEETING_TITLE,
    ROW_SELECTOR, TIMEZONE,
};
use crate::document::SourceDocument;
use crate::error::{Result, ScraperError};
use crate::infra::{ConventionalStatus, SpiderId};
use crate::observability::ExtractorMetrics;
use crate::types::{Classification, Location, MeetingRecord, MeetingStatus};
use scraper::{ElementRef, Selector};
use std::iter::FusedIterator;
use tracing::{debug, error, info};

pub use fields::{
    derive_description, derive_end, derive_links, derive_start, derive_time_notes,
    validate_location,
};

struct RowSelectors {
    row: Selector,
    body_cell: Selector,
    date_cell: Selector,
    link: Selector,
}

impl RowSelectors {
    fn new() -> Result<Self> {
        Ok(Self {
            row: parse_selector(ROW_SELECTOR)?,
            body_cell: parse_selector(BODY_CELL_SELECTOR)?,
            date_cell: parse_selector(DATE_CELL_SELECTOR)?,
            link: parse_selector(LINK_SELECTOR)?,
        })
    }
}

fn parse_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| ScraperError::Selector(format!("{selector}: {e}")))
}

pub struct MeetingExtractor {
    config: ExtractorConfig,
    selectors: RowSelectors,
    status: Box<dyn StatusDeriver>,
    ids: Box<dyn IdDeriver>,
}

impl MeetingExtractor {
    /// Extractor with the conventional status rule and board id scheme.
    pub fn new(config: ExtractorConfig) -> Result<Self> {
        Ok(Self {
            config,
            selectors: RowSelectors::new()?,
            status: Box::new(ConventionalStatus::new()),
            ids: Box::new(SpiderId::for_board()?),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(config.extractor.clone())?
            .with_id_deriver(SpiderId::new(config.scraper_name.clone())?))
    }

    pub fn with_status_deriver(mut self, deriver: impl StatusDeriver + 'static) -> Self {
        self.status = Box::new(deriver);
        self
    }

    pub fn with_id_deriver(mut self, deriver: impl IdDeriver + 'static) -> Self {
        self.ids = Box::new(deriver);
        self
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Lazily walks the document's rows. Each call starts a fresh pass.
    pub fn extract<'a>(&'a self, document: &'a SourceDocument) -> Meetings<'a> {
        info!(
            agency = AGENCY_NAME,
            timezone = TIMEZONE,
            source = %document.url(),
            "Starting meeting extraction"
        );
        Meetings {
            extractor: self,
            source: document.url(),
            rows: document.html().select(&self.selectors.row),
            index: 0,
            emitted: 0,
            done: false,
        }
    }

    /// Collects every record, stopping at the first failing row.
    pub fn extract_all(&self, document: &SourceDocument) -> Result<Vec<MeetingRecord>> {
        self.extract(document).collect()
    }

    /// Rows with no `td` at all are table headers, not meetings.
    pub fn is_meeting_row(&self, row: ElementRef<'_>) -> bool {
        row.select(&self.selectors.body_cell).next().is_some()
    }

    /// Builds the record for a single `tr`.
    pub fn extract_row(&self, row: ElementRef<'_>, source: &str) -> Result<MeetingRecord> {
        let body = dom::first_text_in(row, &self.selectors.body_cell)
            .ok_or_else(|| ScraperError::MissingField("body cell text".into()))?;
        validate_location(body, &self.config)?;

        let date = dom::first_text_in(row, &self.selectors.date_cell)
            .ok_or_else(|| ScraperError::MissingField("date cell text".into()))?;
        let time = dom::first_text_after_break_in(row, &self.selectors.date_cell).ok_or_else(
            || ScraperError::MalformedTimeFragment {
                input: date.trim().to_string(),
                reason: "no time fragment after line break".into(),
            },
        )?;

        let mut record = MeetingRecord {
            id: String::new(),
            title: MEETING_TITLE.to_string(),
            description: derive_description(body, &self.config),
            classification: Classification::Board,
            start: derive_start(date, time)?,
            end: derive_end(date)?,
            all_day: false,
            time_notes: derive_time_notes(body, &self.config),
            location: Location::thompson_center(),
            links: derive_links(row, &self.selectors.link),
            source: source.to_string(),
            status: MeetingStatus::Tentative,
        };

        record.status = self.status.derive_status(&record);
        record.id = self.ids.derive_id(&record);
        Ok(record)
    }
}

/// Single-pass iterator over a document's meetings.
pub struct Meetings<'a> {
    extractor: &'a MeetingExtractor,
    source: &'a str,
    rows: scraper::html::Select<'a, 'a>,
    index: usize,
    emitted: usize,
    done: bool,
}

impl<'a> Iterator for Meetings<'a> {
    type Item = Result<MeetingRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let (index, row) = loop {
            let Some(row) = self.rows.next() else {
                self.done = true;
                info!(
                    source = %self.source,
                    meetings = self.emitted,
                    "Meeting extraction finished"
                );
                ExtractorMetrics::record_extraction_complete();
                return None;
            };

            let index = self.index;
            self.index += 1;
            if self.extractor.is_meeting_row(row) {
                break (index, row);
            }
            debug!(row = index, "Skipping header row");
        };
        ExtractorMetrics::record_row_seen();

        match self.extractor.extract_row(row, self.source) {
            Ok(record) => {
                debug!(
                    row = index,
                    id = %record.id,
                    start = %record.start,
                    status = record.status.as_str(),
                    "Extracted meeting"
                );
                self.emitted += 1;
                ExtractorMetrics::record_meeting_emitted();
                Some(Ok(record))
            }
            Err(e) => {
                self.done = true;
                error!(row = index, kind = e.kind(), error = %e, "Aborting meeting extraction");
                ExtractorMetrics::record_extraction_error(e.kind());
                Some(Err(e))
            }
        }
    }
}

impl FusedIterator for Meetings<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    fn document(rows: &str) -> SourceDocument {
        SourceDocument::parse(
            "https://www2.illinois.gov/cdb/about/boardmeetings",
            &format!("<html><body><table><tbody>{rows}</tbody></table></body></html>"),
        )
    }

    fn row(date: &str, time: &str, body: &str) -> String {
        format!("<tr><th>{date}<br>{time}</th><td>{body}</td></tr>")
    }

    fn extractor() -> MeetingExtractor {
        let now = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
        MeetingExtractor::new(ExtractorConfig::default())
            .unwrap()
            .with_status_deriver(ConventionalStatus::at(now))
    }

    fn dt(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(h, 0, 0).unwrap()
    }

    #[test]
    fn test_rows_in_document_order() {
        let doc = document(&format!(
            "{}{}",
            row("March 2, 2023", "10:30 AM", "Chicago, IL"),
            row("May 4, 2023", "01:00 PM", "Chicago & Springfield")
        ));

        let records = extractor().extract_all(&doc).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].start, dt(2023, 3, 2, 10) + chrono::Duration::minutes(30));
        assert_eq!(records[1].start, dt(2023, 5, 4, 13));
        assert_eq!(records[1].description, "");
        assert!(records.iter().all(|r| r.status == MeetingStatus::Passed));
    }

    #[test]
    fn test_iterator_fuses_after_error() {
        let doc = document(&format!(
            "{}{}{}",
            row("March 2, 2023", "10:30 AM", "Chicago, IL"),
            row("April 6, 2023", "10:30 AM", "Springfield, IL"),
            row("May 4, 2023", "10:30 AM", "Chicago, IL")
        ));

        let extractor = extractor();
        let mut meetings = extractor.extract(&doc);
        assert!(meetings.next().unwrap().is_ok());
        assert!(matches!(
            meetings.next(),
            Some(Err(ScraperError::LocationMismatch { .. }))
        ));
        assert!(meetings.next().is_none());
        assert!(meetings.next().is_none());
    }

    #[test]
    fn test_missing_time_fragment_is_malformed() {
        let doc = document("<tr><th>June 1, 2023</th><td>Chicago, IL</td></tr>");
        let err = extractor().extract_all(&doc).unwrap_err();
        assert!(matches!(err, ScraperError::MalformedTimeFragment { .. }));
    }

    #[test]
    fn test_missing_body_is_missing_field() {
        let doc = document("<tr><th>June 1, 2023<br>10:00 AM</th><td><p>Chicago</p></td></tr>");
        let err = extractor().extract_all(&doc).unwrap_err();
        assert!(matches!(err, ScraperError::MissingField(_)));
    }

    #[test]
    fn test_header_row_without_tbody_is_skipped() {
        let doc = SourceDocument::parse(
            "https://www2.illinois.gov/cdb/about/boardmeetings",
            "<table>\
               <tr><th>Date</th><th>Location</th></tr>\
               <tr><th>June 1, 2023<br>10:00 AM</th><td>Chicago, IL</td></tr>\
             </table>",
        );
        let records = extractor().extract_all(&doc).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].start, dt(2023, 6, 1, 10));
    }

    #[test]
    fn test_table_without_rows_is_empty() {
        let doc = SourceDocument::parse("https://example.gov", "<p>No meetings scheduled</p>");
        assert!(extractor().extract_all(&doc).unwrap().is_empty());
    }

    #[test]
    fn test_from_config_uses_scraper_name() {
        let config = Config {
            scraper_name: "il_cdb_test".to_string(),
            ..Config::default()
        };
        let extractor = MeetingExtractor::from_config(&config).unwrap();
        let doc = document(&row("June 1, 2023", "10:00 AM", "Chicago, IL"));
        let records = extractor.extract_all(&doc).unwrap();
        assert_eq!(records[0].id, "il_cdb_test/202306011000/cdb_board_meeting");
    }
}
