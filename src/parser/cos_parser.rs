// CareerOneStop-specific HTML extraction
use crate::config::{DESCRIPTION_ID, TRANSCRIPT_ID, VIDEO_TAG};
use crate::model::{NOT_AVAILABLE, PageFields};
use crate::normalizer::clean_text;
use scraper::{ElementRef, Html, Selector};

pub struct CareerOneStopParser {
    description: Selector,
    video: Selector,
    transcript: Selector,
}

impl CareerOneStopParser {
    pub fn new() -> Self {
        Self {
            description: Selector::parse(&format!("#{DESCRIPTION_ID}")).unwrap(),
            video: Selector::parse(VIDEO_TAG).unwrap(),
            transcript: Selector::parse(&format!("#{TRANSCRIPT_ID}")).unwrap(),
        }
    }

    /// Pulls the three fields out of a fetched page. Pure; an absent element
    /// degrades that one field to the sentinel, never the whole page.
    pub fn extract(&self, html: &str) -> PageFields {
        let document = Html::parse_document(html);

        let description = document
            .select(&self.description)
            .next()
            .map(|el| clean_text(&element_text(el, "")))
            .unwrap_or_else(|| NOT_AVAILABLE.to_string());

        let video_url = document
            .select(&self.video)
            .next()
            .and_then(|el| el.value().attr("src"))
            .map(str::to_string)
            .unwrap_or_else(|| NOT_AVAILABLE.to_string());

        let transcript = document
            .select(&self.transcript)
            .next()
            .map(|el| clean_text(&element_text(el, " ")))
            .unwrap_or_else(|| NOT_AVAILABLE.to_string());

        PageFields {
            description,
            video_url,
            transcript,
        }
    }
}

impl Default for CareerOneStopParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Visible text of an element: child text nodes trimmed, empties dropped,
/// remainder joined with `sep`.
fn element_text(el: ElementRef, sep: &str) -> String {
    el.text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(sep)
}
