//! Script parsing: chapter boundaries, marker-based splitting, text cleanup.

mod cleaner;
mod splitter;

pub use splitter::{script_body, split_chapters};

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// A named slice of the script, destined for one synthesis call.
#[derive(Debug, Clone)]
pub struct Chapter {
    /// Chapter name, used in chunk file names (e.g. "00_intro")
    pub name: String,
    /// Cleaned chapter text
    pub text: String,
}

impl Chapter {
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }
}

/// Where a chapter starts and ends in the script document.
///
/// Markers are literal substrings that must appear verbatim. A chapter with
/// no end marker runs to the end of the document.
#[derive(Debug, Clone, Deserialize)]
pub struct ChapterBoundary {
    pub name: String,
    pub start: String,
    #[serde(default)]
    pub end: Option<String>,
}

impl ChapterBoundary {
    pub fn new(name: &str, start: &str, end: Option<&str>) -> Self {
        Self {
            name: name.to_string(),
            start: start.to_string(),
            end: end.map(str::to_string),
        }
    }
}

/// Chapter boundaries for the Argentina solar script.
///
/// The markers are the literal `### פרק N:` headings of that document; each
/// chapter's end marker is the next chapter's heading.
pub fn default_boundaries() -> Vec<ChapterBoundary> {
    vec![
        ChapterBoundary::new("00_intro", "שלום וברוכים הבאים", Some("### פרק 1:")),
        ChapterBoundary::new("01_resource", "### פרק 1: למה ארגנטינה", Some("### פרק 2: הרגולציה")),
        ChapterBoundary::new("02_regulation", "### פרק 2: הרגולציה", Some("### פרק 3: שוק החשמל")),
        ChapterBoundary::new("03_tariffs", "### פרק 3: שוק החשמל", Some("### פרק 4: מצב השוק")),
        ChapterBoundary::new("04_market", "### פרק 4: מצב השוק", Some("### פרק 5: עלויות ציוד")),
        ChapterBoundary::new("05_equipment", "### פרק 5: עלויות ציוד", Some("### פרק 6: מימון")),
        ChapterBoundary::new("06_financing", "### פרק 6: מימון", Some("### פרק 7: אתגרים")),
        ChapterBoundary::new("07_challenges", "### פרק 7: אתגרים", Some("### פרק 8: ההזדמנות")),
        ChapterBoundary::new("08_opportunity", "### פרק 8: ההזדמנות", Some("### סיכום")),
        ChapterBoundary::new("09_conclusion", "### סיכום", None),
    ]
}

/// Load an alternate boundary table from a TOML file with a `[[chapters]]`
/// array.
pub fn load_boundary_table(path: &Path) -> Result<Vec<ChapterBoundary>> {
    #[derive(Deserialize)]
    struct BoundaryTable {
        chapters: Vec<ChapterBoundary>,
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read boundary table {}", path.display()))?;
    let table: BoundaryTable = toml::from_str(&content)
        .with_context(|| format!("Failed to parse boundary table {}", path.display()))?;
    Ok(table.chapters)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chapter_counts() {
        let chapter = Chapter {
            name: "00_intro".to_string(),
            text: "hello solar world".to_string(),
        };
        assert_eq!(chapter.char_count(), 17);
        assert_eq!(chapter.word_count(), 3);
    }

    #[test]
    fn test_default_boundaries_ordered() {
        let boundaries = default_boundaries();
        assert_eq!(boundaries.len(), 10);
        assert_eq!(boundaries[0].name, "00_intro");
        assert_eq!(boundaries[9].name, "09_conclusion");
        // Only the final chapter runs to the end of the document
        assert!(boundaries[..9].iter().all(|b| b.end.is_some()));
        assert!(boundaries[9].end.is_none());
    }

    #[test]
    fn test_boundary_table_from_toml() {
        let toml_str = r####"
[[chapters]]
name = "00_intro"
start = "### Intro"
end = "### Chapter 1"

[[chapters]]
name = "01_main"
start = "### Chapter 1"
"####;
        #[derive(Deserialize)]
        struct Table {
            chapters: Vec<ChapterBoundary>,
        }
        let table: Table = toml::from_str(toml_str).unwrap();
        assert_eq!(table.chapters.len(), 2);
        assert_eq!(table.chapters[0].end.as_deref(), Some("### Chapter 1"));
        assert!(table.chapters[1].end.is_none());
    }
}
