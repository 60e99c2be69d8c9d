//! Extraction metrics
//!
//! Counters are emitted through the `metrics` facade; installing an exporter
//! is left to whoever embeds the extractor.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricName {
    RowsSeen,
    MeetingsEmitted,
    ExtractionErrors,
    ExtractionsCompleted,
}

impl fmt::Display for MetricName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl MetricName {
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricName::RowsSeen => "cdb_extractor_rows_seen_total",
            MetricName::MeetingsEmitted => "cdb_extractor_meetings_emitted_total",
            MetricName::ExtractionErrors => "cdb_extractor_errors_total",
            MetricName::ExtractionsCompleted => "cdb_extractor_extractions_completed_total",
        }
    }
}

/// Metrics recorded while walking a document's rows
pub struct ExtractorMetrics;

impl ExtractorMetrics {
    pub fn record_row_seen() {
        ::metrics::counter!(MetricName::RowsSeen.as_str()).increment(1);
    }

    pub fn record_meeting_emitted() {
        ::metrics::counter!(MetricName::MeetingsEmitted.as_str()).increment(1);
    }

    /// `kind` comes from `ScraperError::kind`.
    pub fn record_extraction_error(kind: &'static str) {
        ::metrics::counter!(MetricName::ExtractionErrors.as_str(), "kind" => kind).increment(1);
    }

    pub fn record_extraction_complete() {
        ::metrics::counter!(MetricName::ExtractionsCompleted.as_str()).increment(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_names_match_display() {
        for name in [
            MetricName::RowsSeen,
            MetricName::MeetingsEmitted,
            MetricName::ExtractionErrors,
            MetricName::ExtractionsCompleted,
        ] {
            assert_eq!(name.to_string(), name.as_str());
            assert!(name.as_str().starts_with("cdb_extractor_"));
        }
    }

    #[test]
    fn test_recording_without_recorder_is_noop() {
        ExtractorMetrics::record_row_seen();
        ExtractorMetrics::record_meeting_emitted();
        ExtractorMetrics::record_extraction_error("location_mismatch");
        ExtractorMetrics::record_extraction_complete();
    }
}
