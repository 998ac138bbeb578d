//! Lightweight structure tagging for cleaned page text.
//!
//! Runs after noise filtering, once per page. Known section headings are
//! promoted to second-level markers and a plausible document title near the
//! top of a page to a first-level marker; everything else passes through
//! untouched.

/// Section headings recognized in English academic prose.
const SECTION_HEADINGS: &[&str] = &[
    "Abstract",
    "Introduction",
    "Background",
    "Related Work",
    "Methodology",
    "Method",
    "Approach",
    "Implementation",
    "Results",
    "Experiments",
    "Evaluation",
    "Discussion",
    "Conclusion",
    "Future Work",
    "References",
    "Acknowledgments",
    "Acknowledgements",
    "Appendix",
];

/// Options for structure tagging.
#[derive(Debug, Clone)]
pub struct TagOptions {
    /// A line counts as a heading when it starts with a known heading and
    /// is at most this many characters longer (covers "Appendix A",
    /// "Results and Analysis")
    pub heading_slack: usize,

    /// Only lines within this many lines of the top are title candidates
    pub title_scan_lines: usize,

    /// Minimum character count for a title candidate
    pub title_min_chars: usize,

    /// Maximum character count for a title candidate
    pub title_max_chars: usize,
}

impl Default for TagOptions {
    fn default() -> Self {
        Self {
            heading_slack: 10,
            title_scan_lines: 3,
            title_min_chars: 30,
            title_max_chars: 200,
        }
    }
}

/// Tag section headings and a probable title in cleaned text.
///
/// Non-matching lines are emitted unchanged in their original order, so
/// tagging never reorders or drops content.
pub fn tag_structure(text: &str, options: &TagOptions) -> String {
    let mut out: Vec<String> = Vec::new();

    for (index, line) in text.lines().enumerate() {
        let stripped = line.trim();

        if let Some(heading) = match_heading(stripped, options.heading_slack) {
            out.push(format!("\n## {heading}\n"));
            continue;
        }

        let len = stripped.chars().count();
        if index < options.title_scan_lines
            && len > options.title_min_chars
            && len < options.title_max_chars
            && !stripped.ends_with(['.', '!', '?'])
        {
            out.push(format!("\n# {stripped}\n"));
            continue;
        }

        out.push(line.to_string());
    }

    out.join("\n")
}

/// Match a line against the known headings: exact, or the heading word
/// followed by at most `slack` extra characters.
fn match_heading(line: &str, slack: usize) -> Option<&str> {
    for heading in SECTION_HEADINGS {
        if line == *heading
            || (line.starts_with(heading)
                && line.chars().count() < heading.chars().count() + slack)
        {
            return Some(line);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_heading_tagged() {
        let tagged = tag_structure("Conclusion", &TagOptions::default());
        assert!(tagged.contains("\n## Conclusion\n"));
    }

    #[test]
    fn test_heading_with_suffix_tagged() {
        let tagged = tag_structure("Appendix A", &TagOptions::default());
        assert!(tagged.contains("\n## Appendix A\n"));
    }

    #[test]
    fn test_numbered_heading_passes_through() {
        // Only heading-first forms are promoted; a leading section number
        // leaves the line untouched.
        let tagged = tag_structure("1 Introduction", &TagOptions::default());
        assert_eq!(tagged, "1 Introduction");
    }

    #[test]
    fn test_long_line_with_heading_word_untouched() {
        let line = "The Introduction of noise into the channel degrades throughput.";
        let text = format!("Filler line one stays put here.\nFiller line two stays put here.\nFiller line three stays put here.\n{line}");
        let tagged = tag_structure(&text, &TagOptions::default());
        assert!(tagged.contains(line));
        assert!(!tagged.contains("## "));
    }

    #[test]
    fn test_title_detected_near_top() {
        let title = "A Study of Column Detection in Scholarly Documents";
        let tagged = tag_structure(title, &TagOptions::default());
        assert!(tagged.contains(&format!("\n# {title}\n")));
    }

    #[test]
    fn test_title_not_detected_past_scan_window() {
        let title = "A Study of Column Detection in Scholarly Documents";
        let text = format!("Abstract\nFirst body sentence of the page, long enough to read as prose.\nSecond body sentence of the page, also long enough to qualify.\n{title}");
        let tagged = tag_structure(&text, &TagOptions::default());
        assert!(!tagged.contains("# A Study"));
    }

    #[test]
    fn test_sentence_near_top_not_a_title() {
        let sentence = "This opening sentence is long enough but clearly terminated.";
        let tagged = tag_structure(sentence, &TagOptions::default());
        assert_eq!(tagged, sentence);
    }

    #[test]
    fn test_order_preserved() {
        let text = "Abstract\nBody paragraph one, which continues for a while to look like prose.\nConclusion\nBody paragraph two, also continuing for a while like prose does.";
        let tagged = tag_structure(text, &TagOptions::default());
        let abs = tagged.find("## Abstract").unwrap();
        let one = tagged.find("Body paragraph one").unwrap();
        let conc = tagged.find("## Conclusion").unwrap();
        let two = tagged.find("Body paragraph two").unwrap();
        assert!(abs < one && one < conc && conc < two);
    }
}
