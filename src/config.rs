use crate::constants::{
    CANARY_TOKEN, DESCRIPTION_STRIP, SCRAPER_NAME, SOURCE_URL, TIME_NOTE_KEYWORDS,
};
use crate::error::{Result, ScraperError};
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub const CONFIG_PATH_ENV: &str = "CDB_CONFIG";
pub const SOURCE_URL_ENV: &str = "CDB_SOURCE_URL";

/// Literal lists that drive row extraction.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    pub canary_token: String,
    /// Removed in order, as plain substrings.
    pub description_strip: Vec<String>,
    pub time_note_keywords: Vec<String>,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            canary_token: CANARY_TOKEN.to_string(),
            description_strip: DESCRIPTION_STRIP.iter().map(|s| s.to_string()).collect(),
            time_note_keywords: TIME_NOTE_KEYWORDS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub scraper_name: String,
    pub source_url: String,
    pub extractor: ExtractorConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scraper_name: SCRAPER_NAME.to_string(),
            source_url: SOURCE_URL.to_string(),
            extractor: ExtractorConfig::default(),
        }
    }
}

impl Config {
    pub fn load(config_path: impl AsRef<Path>) -> Result<Self> {
        let config_path = config_path.as_ref();
        let config_content = fs::read_to_string(config_path).map_err(|e| {
            ScraperError::Config(format!(
                "Failed to read config file '{}': {}",
                config_path.display(),
                e
            ))
        })?;

        Self::from_toml(&config_content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads from `$CDB_CONFIG` when set, otherwise the defaults. `$CDB_SOURCE_URL` wins over both.
    pub fn from_env() -> Result<Self> {
        let mut config = match std::env::var(CONFIG_PATH_ENV) {
            Ok(path) => Self::load(path)?,
            Err(std::env::VarError::NotPresent) => Self::default(),
            Err(e) => return Err(e.into()),
        };

        match std::env::var(SOURCE_URL_ENV) {
            Ok(url) => config.source_url = url,
            Err(std::env::VarError::NotPresent) => {}
            Err(e) => return Err(e.into()),
        }

        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.extractor.canary_token.is_empty() {
            return Err(ScraperError::Config("extractor.canary_token must not be empty".into()));
        }
        if self.extractor.description_strip.iter().any(|s| s.is_empty()) {
            return Err(ScraperError::Config(
                "extractor.description_strip entries must not be empty".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_lists_keep_order() {
        let config = ExtractorConfig::default();
        assert_eq!(config.canary_token, "Chicago");
        assert_eq!(
            config.description_strip,
            vec!["Chicago,", "Chicago", "Springfield", "&", "Collinsville"]
        );
        assert_eq!(config.time_note_keywords, vec!["rescheduled", "cancelled", "changed"]);
    }

    #[test]
    fn test_partial_toml_falls_back_to_defaults() {
        let config = Config::from_toml(
            r#"
            [extractor]
            time_note_keywords = ["postponed"]
            "#,
        )
        .unwrap();

        assert_eq!(config.source_url, SOURCE_URL);
        assert_eq!(config.scraper_name, SCRAPER_NAME);
        assert_eq!(config.extractor.canary_token, "Chicago");
        assert_eq!(config.extractor.time_note_keywords, vec!["postponed"]);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "source_url = \"https://example.gov/meetings\"\n[extractor]\ncanary_token = \"Springfield\""
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.source_url, "https://example.gov/meetings");
        assert_eq!(config.extractor.canary_token, "Springfield");
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let err = Config::load("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, ScraperError::Config(_)));
    }

    #[test]
    fn test_empty_canary_rejected() {
        let err = Config::from_toml("[extractor]\ncanary_token = \"\"").unwrap_err();
        assert!(matches!(err, ScraperError::Config(_)));
    }
}
