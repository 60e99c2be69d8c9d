/// Constants describing the single source this crate extracts from.
/// The literal lists are the defaults for `ExtractorConfig`; overriding them
/// happens through configuration, not here.

// Source identity
pub const SCRAPER_NAME: &str = "il_capital_development";
pub const AGENCY_NAME: &str = "Illinois Capital Development Board";
pub const TIMEZONE: &str = "America/Chicago";
pub const SOURCE_URL: &str = "https://www2.illinois.gov/cdb/about/boardmeetings";

// Fixed record fields
pub const MEETING_TITLE: &str = "CDB Board Meeting";
pub const LOCATION_NAME: &str = "James R. Thompson Center";
pub const LOCATION_ADDRESS: &str = "100 West Randolph Street, 14th Floor, Chicago, IL 60601";

/// Token every body cell must contain; its absence means the page changed shape.
pub const CANARY_TOKEN: &str = "Chicago";

/// Removed from the body text, in this order, to form the description.
pub const DESCRIPTION_STRIP: &[&str] = &["Chicago,", "Chicago", "Springfield", "&", "Collinsville"];

/// Lowercase keywords that flag a row's text as a timing note.
pub const TIME_NOTE_KEYWORDS: &[&str] = &["rescheduled", "cancelled", "changed"];

/// Lowercase keywords that mark a meeting as cancelled when deriving status.
pub const CANCELLED_KEYWORDS: &[&str] = &["cancel", "rescheduled", "postpone"];

// Parsing
pub const DATETIME_FORMAT: &str = "%B %d, %Y %I:%M %p";
pub const DEFAULT_END_TIME: &str = "12:00 AM";
pub const ID_TIME_FORMAT: &str = "%Y%m%d%H%M";

// Row selectors
pub const ROW_SELECTOR: &str = "tbody > tr";
pub const BODY_CELL_SELECTOR: &str = "td";
pub const DATE_CELL_SELECTOR: &str = "th";
pub const LINK_SELECTOR: &str = "ul > li > a";
