use crate::document::SourceDocument;
use crate::error::Result;
use crate::extractor::MeetingExtractor;
use crate::types::MeetingRecord;
use std::io::Write;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One JSON record per line
    JsonLines,
    /// A single indented JSON array
    PrettyArray,
}

/// Runs the extractor over one already-fetched page and writes the records to a sink.
pub struct ExtractUseCase {
    extractor: MeetingExtractor,
}

impl ExtractUseCase {
    pub fn new(extractor: MeetingExtractor) -> Self {
        Self { extractor }
    }

    /// Nothing is written if any row fails; the error is returned instead.
    pub fn run<W: Write>(
        &self,
        source_url: &str,
        body: &str,
        format: OutputFormat,
        out: &mut W,
    ) -> Result<Vec<MeetingRecord>> {
        let document = SourceDocument::parse(source_url, body);
        let records = self.extractor.extract_all(&document)?;

        match format {
            OutputFormat::JsonLines => {
                for record in &records {
                    serde_json::to_writer(&mut *out, record)?;
                    writeln!(out)?;
                }
            }
            OutputFormat::PrettyArray => {
                serde_json::to_writer_pretty(&mut *out, &records)?;
                writeln!(out)?;
            }
        }
        out.flush()?;

        info!(source = %source_url, meetings = records.len(), "Wrote meeting records");
        Ok(records)
    }
}
