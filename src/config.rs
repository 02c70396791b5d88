use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Element id holding the career description text.
pub const DESCRIPTION_ID: &str = "ctl16_ctl00_videoDesc";
/// Element id holding the video transcript text.
pub const TRANSCRIPT_ID: &str = "ctl16_ctl00_videoScript";
/// Tag whose `src` attribute carries the video URL.
pub const VIDEO_TAG: &str = "video";

/// Literal markers stripped from extracted text by the normalizer.
pub const DESCRIPTION_MARKER: &str = "Description:";
pub const TRANSCRIPT_MARKER: &str = "Video Transcript ";

/// Required input columns.
pub const CAREER_COLUMN: &str = "Career";
pub const URL_COLUMN: &str = "URL";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub user_agent: String,
    pub request_timeout_secs: u64,
    pub per_item_delay_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("input/career_videos.csv"),
            output_path: PathBuf::from("output/career_data_output.csv"),
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                         (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36"
                .to_string(),
            request_timeout_secs: 10,
            per_item_delay_secs: 1,
        }
    }
}

/// Loads configuration from a JSON file. A missing file is not an error;
/// the built-in defaults apply.
pub fn load_config(path: &str) -> Result<AppConfig, Box<dyn std::error::Error>> {
    if !Path::new(path).exists() {
        return Ok(AppConfig::default());
    }
    let content = fs::read_to_string(path)?;
    let config: AppConfig = serde_json::from_str(&content)?;
    Ok(config)
}
