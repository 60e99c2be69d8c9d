use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScraperError {
    #[error("Meeting location has changed: body text {text:?} does not mention {token:?}")]
    LocationMismatch { token: String, text: String },

    #[error("Malformed time fragment {input:?}: {reason}")]
    MalformedTimeFragment { input: String, reason: String },

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid selector: {0}")]
    Selector(String),

    #[error("Invalid pattern: {0}")]
    Regex(#[from] regex::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Environment variable error: {0}")]
    Env(#[from] std::env::VarError),
}

impl ScraperError {
    /// Short label used for metrics and structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            ScraperError::LocationMismatch { .. } => "location_mismatch",
            ScraperError::MalformedTimeFragment { .. } => "malformed_time_fragment",
            ScraperError::MissingField(_) => "missing_field",
            ScraperError::Selector(_) => "selector",
            ScraperError::Regex(_) => "regex",
            ScraperError::Json(_) => "json",
            ScraperError::Toml(_) => "toml",
            ScraperError::Io(_) => "io",
            ScraperError::Config(_) => "config",
            ScraperError::Env(_) => "env",
        }
    }
}

pub type Result<T> = std::result::Result<T, ScraperError>;
