//! Chapter text cleanup before synthesis.

/// Clean an extracted chapter slice for TTS.
///
/// Strips `###` heading punctuation (the TTS engine would read it out),
/// collapses space/tab runs and blank-line runs, and trims the result.
/// Cleanup only ever removes characters, so the cleaned text stays a
/// subsequence of the source document.
pub fn clean_chapter_text(text: &str) -> String {
    let text = text.replace("###", "");
    normalize_whitespace(&text)
}

/// Collapse runs of spaces/tabs to their first character and runs of more
/// than two newlines down to two, then trim.
fn normalize_whitespace(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut prev_was_blank = false;
    let mut newline_count = 0;

    for c in text.chars() {
        if c == '\n' {
            newline_count += 1;
            prev_was_blank = false;
            if newline_count <= 2 {
                result.push('\n');
            }
        } else if c == ' ' || c == '\t' {
            newline_count = 0;
            if !prev_was_blank {
                result.push(c);
                prev_was_blank = true;
            }
        } else {
            newline_count = 0;
            prev_was_blank = false;
            result.push(c);
        }
    }

    result.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_heading_punctuation() {
        let text = "### פרק 1: למה ארגנטינה\nתוכן הפרק";
        let cleaned = clean_chapter_text(text);
        assert!(!cleaned.contains('#'));
        assert!(cleaned.starts_with("פרק 1"));
    }

    #[test]
    fn test_trims_and_collapses() {
        let text = "  intro text   with   gaps\n\n\n\nnext paragraph  ";
        let cleaned = clean_chapter_text(text);
        assert_eq!(cleaned, "intro text with gaps\n\nnext paragraph");
    }

    #[test]
    fn test_empty_after_cleanup() {
        assert_eq!(clean_chapter_text("### \n\n   "), "");
    }

    #[test]
    fn test_only_removes_characters() {
        let text = "### a  b\n\n\nc";
        let cleaned = clean_chapter_text(text);
        let mut source = text.chars();
        assert!(cleaned.chars().all(|c| source.any(|s| s == c)));
    }
}
