pub mod app;
pub mod config;
pub mod constants;
pub mod document;
pub mod error;
pub mod extractor;
pub mod infra;
pub mod observability;
pub mod types;

pub use document::SourceDocument;
pub use error::{Result, ScraperError};
pub use extractor::{MeetingExtractor, Meetings};
pub use types::{Classification, Link, Location, MeetingRecord, MeetingStatus};
