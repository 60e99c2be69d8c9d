use crate::config::ExtractorConfig;
use crate::constants::{DATETIME_FORMAT, DEFAULT_END_TIME};
use crate::error::{Result, ScraperError};
use crate::extractor::dom::element_text;
use crate::types::Link;
use chrono::{Days, NaiveDateTime};
use scraper::{ElementRef, Selector};

/// Fails the whole extraction when the body text no longer names the canary city.
pub fn validate_location(body: &str, config: &ExtractorConfig) -> Result<()> {
    if body.contains(&config.canary_token) {
        Ok(())
    } else {
        Err(ScraperError::LocationMismatch {
            token: config.canary_token.clone(),
            text: body.to_string(),
        })
    }
}

/// Body text with each configured literal removed in order, then left-trimmed.
pub fn derive_description(body: &str, config: &ExtractorConfig) -> String {
    let mut description = body.to_string();
    for literal in &config.description_strip {
        if description.contains(literal.as_str()) {
            description = description.replace(literal.as_str(), "");
        }
    }
    description.trim_start().to_string()
}

pub fn derive_start(date: &str, time: &str) -> Result<NaiveDateTime> {
    let time = normalize_phrase(time);
    if time.is_empty() {
        return Err(ScraperError::MalformedTimeFragment {
            input: normalize_phrase(date),
            reason: "empty time fragment".into(),
        });
    }

    let input = format!("{} {}", normalize_phrase(date), time);
    NaiveDateTime::parse_from_str(&input, DATETIME_FORMAT).map_err(|e| {
        ScraperError::MalformedTimeFragment {
            input,
            reason: e.to_string(),
        }
    })
}

/// Midnight at the start of the day after `date`.
pub fn derive_end(date: &str) -> Result<NaiveDateTime> {
    let midnight = derive_start(date, DEFAULT_END_TIME)?;
    midnight
        .checked_add_days(Days::new(1))
        .ok_or_else(|| ScraperError::MalformedTimeFragment {
            input: normalize_phrase(date),
            reason: "date out of range".into(),
        })
}

pub fn derive_time_notes(body: &str, config: &ExtractorConfig) -> String {
    let lowered = body.to_lowercase();
    if config
        .time_note_keywords
        .iter()
        .any(|keyword| lowered.contains(&keyword.to_lowercase()))
    {
        body.to_string()
    } else {
        String::new()
    }
}

pub fn derive_links(row: ElementRef<'_>, anchors: &Selector) -> Vec<Link> {
    row.select(anchors)
        .map(|anchor| Link {
            title: element_text(anchor),
            href: anchor.value().attr("href").unwrap_or_default().to_string(),
        })
        .collect()
}

// Collapses runs of whitespace (including non-breaking spaces) into single spaces.
fn normalize_phrase(phrase: &str) -> String {
    phrase.split_whitespace().collect::<Vec<_>>().join(" ")
}
