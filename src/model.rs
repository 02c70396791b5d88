// Core structs: CareerRecord, PageFields, CareerData
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Placeholder for any field that could not be fetched or extracted.
pub const NOT_AVAILABLE: &str = "N/A";

/// One row of the input file.
#[derive(Debug, Clone, Deserialize)]
pub struct CareerRecord {
    #[serde(rename = "Career")]
    pub career: String,
    #[serde(rename = "URL")]
    pub url: String,
}

/// The three fields pulled out of one career page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageFields {
    pub description: String,
    pub video_url: String,
    pub transcript: String,
}

impl PageFields {
    /// The all-sentinel triple substituted when a fetch fails.
    pub fn unavailable() -> Self {
        Self {
            description: NOT_AVAILABLE.to_string(),
            video_url: NOT_AVAILABLE.to_string(),
            transcript: NOT_AVAILABLE.to_string(),
        }
    }
}

/// One row of the output file.
#[derive(Debug, Clone, Serialize)]
pub struct CareerData {
    pub career: String,
    pub cos_url: String,
    pub description: String,
    pub video_url: String,
    pub transcript: String,
}

#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("request failed: {0}")]
    Http(String),
    #[error("request timed out")]
    Timeout,
    #[error("unexpected status {0}")]
    Status(u16),
}

#[derive(Debug, Error)]
pub enum InputError {
    #[error("cannot read input file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed input file: {0}")]
    Csv(#[from] csv::Error),
    #[error("input file is missing required column '{0}'")]
    MissingColumn(&'static str),
}

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("cannot create output directory: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot write output file: {0}")]
    Csv(#[from] csv::Error),
}
