//! Marker-based chapter splitting.

use super::cleaner::clean_chapter_text;
use super::{Chapter, ChapterBoundary};
use anyhow::Result;

/// Locate the script body inside the full markdown document.
///
/// Everything before (and including) the first occurrence of `marker` is
/// document preamble and is discarded. A document without the marker is not
/// a script at all, so that is fatal.
pub fn script_body<'a>(document: &'a str, marker: &str) -> Result<&'a str> {
    let Some(pos) = document.find(marker) else {
        anyhow::bail!("script marker {:?} not found in document", marker);
    };
    Ok(document[pos + marker.len()..].trim_start())
}

/// Split the script body into chapters using an ordered boundary table.
///
/// A search cursor advances to each chapter's end position, so a marker
/// string that also occurs inside an earlier chapter's body is not matched
/// twice. A boundary whose start marker cannot be found is skipped with a
/// warning and leaves the cursor untouched; later chapters are unaffected.
pub fn split_chapters(body: &str, boundaries: &[ChapterBoundary]) -> Vec<Chapter> {
    let mut chapters = Vec::with_capacity(boundaries.len());
    let mut cursor = 0;

    for boundary in boundaries {
        let Some(rel) = body[cursor..].find(&boundary.start) else {
            eprintln!(
                "warning: start marker not found for chapter '{}', skipping",
                boundary.name
            );
            continue;
        };
        let start = cursor + rel;
        let search_from = start + boundary.start.len();

        // The end marker is usually the next chapter's heading. When it is
        // absent the chapter text runs to the end of the document, but the
        // cursor only moves past this chapter's start marker: later chapters
        // may still begin inside the swallowed tail, and one missing marker
        // must not cascade into skipping them.
        let (end, next_cursor) = match &boundary.end {
            Some(marker) => match body[search_from..].find(marker) {
                Some(rel_end) => {
                    let end = search_from + rel_end;
                    (end, end)
                }
                None => (body.len(), search_from),
            },
            None => (body.len(), search_from),
        };

        cursor = next_cursor;

        let text = clean_chapter_text(&body[start..end]);
        if text.is_empty() {
            eprintln!(
                "warning: chapter '{}' is empty after cleanup, skipping",
                boundary.name
            );
            continue;
        }

        chapters.push(Chapter {
            name: boundary.name.clone(),
            text,
        });
    }

    chapters
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn boundaries_abc() -> Vec<ChapterBoundary> {
        vec![
            ChapterBoundary::new("a", "### A", Some("### B")),
            ChapterBoundary::new("b", "### B", Some("### C")),
            ChapterBoundary::new("c", "### C", None),
        ]
    }

    /// Every char of `sub` appears in `text` in order.
    fn is_subsequence(sub: &str, text: &str) -> bool {
        let mut chars = text.chars();
        sub.chars().all(|c| chars.any(|t| t == c))
    }

    #[test]
    fn test_script_body_after_marker() {
        let doc = "# Notes\n\nsome preamble\n\n## Script\n\nactual text";
        let body = script_body(doc, "## Script").unwrap();
        assert_eq!(body, "actual text");
    }

    #[test]
    fn test_script_body_missing_marker_is_fatal() {
        let doc = "no marker here";
        assert!(script_body(doc, "## Script").is_err());
    }

    #[test]
    fn test_split_three_chapters() {
        let body = "### A\nalpha text\n### B\nbeta text\n### C\ngamma text";
        let chapters = split_chapters(body, &boundaries_abc());

        assert_eq!(chapters.len(), 3);
        assert_eq!(chapters[0].name, "a");
        assert_eq!(chapters[0].text, "A\nalpha text");
        assert_eq!(chapters[1].text, "B\nbeta text");
        assert_eq!(chapters[2].text, "C\ngamma text");

        // Chapter texts are disjoint slices: joined back together (markers
        // stripped) they reconstruct the body minus its markers.
        let joined = chapters
            .iter()
            .map(|c| c.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        let stripped = body.replace("###", "");
        let expected: String = stripped.split_whitespace().collect::<Vec<_>>().join(" ");
        let got: String = joined.split_whitespace().collect::<Vec<_>>().join(" ");
        assert_eq!(got, expected);
    }

    #[test]
    fn test_missing_marker_does_not_cascade() {
        let names: Vec<String> = (0..10).map(|i| format!("{i:02}_ch")).collect();
        let mut body = String::new();
        for i in 0..10 {
            // Leave chapter 4's heading out of the document entirely
            if i != 4 {
                body.push_str(&format!("### Chapter {i}\nbody {i}\n"));
            }
        }
        let boundaries: Vec<ChapterBoundary> = (0..10)
            .map(|i| {
                let end = if i < 9 {
                    Some(format!("### Chapter {}", i + 1))
                } else {
                    None
                };
                ChapterBoundary {
                    name: names[i].clone(),
                    start: format!("### Chapter {i}"),
                    end,
                }
            })
            .collect();

        let chapters = split_chapters(&body, &boundaries);

        assert_eq!(chapters.len(), 9);
        assert!(chapters.iter().all(|c| c.name != "04_ch"));
        // Chapter 3 runs to the end of the document (its end marker is the
        // missing heading), but chapters 5-9 are still extracted on their own
        let ch3 = chapters.iter().find(|c| c.name == "03_ch").unwrap();
        assert!(ch3.text.contains("body 3"));
        assert!(ch3.text.contains("body 9"));
        let ch5 = chapters.iter().find(|c| c.name == "05_ch").unwrap();
        assert_eq!(ch5.text, "Chapter 5\nbody 5");
    }

    #[test]
    fn test_cursor_skips_earlier_occurrences() {
        // "### B" appears inside chapter A's body; the real chapter B heading
        // comes later and must be the one matched.
        let body = "### A\ntalks about ### B early\n### B\nreal beta\n### C\nend";
        let chapters = split_chapters(body, &boundaries_abc());
        assert_eq!(chapters.len(), 3);
        assert_eq!(chapters[0].text, "A\ntalks about");
        assert_eq!(chapters[1].text, "B early\n B\nreal beta");
    }

    #[test]
    fn test_end_marker_missing_runs_to_document_end() {
        let body = "### A\nalpha\n### C\nomega";
        let boundaries = vec![
            ChapterBoundary::new("a", "### A", Some("### B")),
            ChapterBoundary::new("c", "### C", None),
        ];
        let chapters = split_chapters(body, &boundaries);
        // Chapter A swallows the tail (its end marker is gone), but chapter
        // C is still found and extracted on its own.
        assert_eq!(chapters.len(), 2);
        assert!(chapters[0].text.contains("omega"));
        assert_eq!(chapters[1].text, "C\nomega");
    }

    proptest! {
        /// For well-formed documents with all markers present in order, the
        /// split produces one chapter per boundary, in order, and the
        /// concatenated output is a subsequence of the document.
        #[test]
        fn prop_split_reconstructs_subsequence(
            bodies in proptest::collection::vec("[a-z][a-z ]{0,40}", 1..6)
        ) {
            let mut document = String::new();
            for (i, body) in bodies.iter().enumerate() {
                document.push_str(&format!("### Part {i}\n{body}\n"));
            }

            let boundaries: Vec<ChapterBoundary> = (0..bodies.len())
                .map(|i| {
                    let end = if i + 1 < bodies.len() {
                        Some(format!("### Part {}", i + 1))
                    } else {
                        None
                    };
                    ChapterBoundary {
                        name: format!("{i:02}_part"),
                        start: format!("### Part {i}"),
                        end,
                    }
                })
                .collect();

            let chapters = split_chapters(&document, &boundaries);

            prop_assert_eq!(chapters.len(), bodies.len());
            for (i, chapter) in chapters.iter().enumerate() {
                prop_assert_eq!(&chapter.name, &format!("{i:02}_part"));
            }

            let joined: String = chapters
                .iter()
                .map(|c| c.text.as_str())
                .collect::<Vec<_>>()
                .join("\n");
            prop_assert!(is_subsequence(&joined, &document));
        }
    }
}
