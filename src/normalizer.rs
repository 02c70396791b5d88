use crate::config::{DESCRIPTION_MARKER, TRANSCRIPT_MARKER};

/// Strips the site's boilerplate markers and surrounding whitespace.
/// Applied to description and transcript text, never to URLs.
pub fn clean_text(text: &str) -> String {
    text.replace(DESCRIPTION_MARKER, "")
        .replace(TRANSCRIPT_MARKER, "")
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_description_marker() {
        assert_eq!(clean_text("Description: Foo "), "Foo");
    }

    #[test]
    fn strips_transcript_marker() {
        assert_eq!(clean_text("Video Transcript Bar"), "Bar");
    }

    #[test]
    fn strips_both_markers_anywhere() {
        assert_eq!(
            clean_text("Description: intro Video Transcript body"),
            "intro body"
        );
    }

    #[test]
    fn plain_text_passes_through_trimmed() {
        assert_eq!(clean_text("  Cares for patients  "), "Cares for patients");
        assert_eq!(clean_text(""), "");
    }

    #[test]
    fn idempotent() {
        for s in [
            "Description: Foo ",
            "Video Transcript  Hello world",
            "  plain  ",
            "",
        ] {
            let once = clean_text(s);
            assert_eq!(clean_text(&once), once);
        }
    }
}
