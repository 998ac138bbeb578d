//! Noise-line classification and hyphenation repair.
//!
//! Raw per-column text arrives with page numbers, e-print stamps, sidebar
//! leakage and hyphen-broken words interleaved with real prose. The filter
//! walks the lines once, in order, dropping noise and closing words broken
//! across line boundaries.

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// Fixed noise patterns: artifacts that are never prose.
///
/// Tuned for English academic papers (e-print stamps, running heads,
/// contact lists); the mirrored entries (`voN`, `]cs.AI[`) catch rotated
/// sidebar text that extractors read backwards.
const NOISE_PATTERNS: &[&str] = &[
    r"^\d+\s*$",                           // bare page number
    r"^Page\s+\d+\s*$",                    // "Page 1"
    r"^\[[\w\.\s]+\]$",                    // [cs.AI]
    r"^\d{1,2}\s+[A-Z][a-z]{2}\s+\d{4}$",  // 10 Nov 2025
    r"^arXiv:\d+\.\d+v?\d*$",              // arXiv:2511.07587v1
    r"^v\d+$",                             // v1, v2
    r"^viXra$",
    r"^voN$",                              // "Nov" read backwards
    r"^][\w\.]+\[$",                       // "]cs.AI[" read backwards
    r"^\d+v\d+\.\d+$",                     // reversed e-print id
    r"^[A-Z]{2,4}$",                       // short acronym
    r"^Copyright\s*©",
    r"^www\.",                             // bare URL
    r"^\{[\w\s,@\.]+\}$",                  // {alice, bob}@example contact list
];

/// Options for noise filtering.
///
/// The thresholds are a known precision/recall trade-off for English
/// academic papers; they are configurable rather than baked in.
#[derive(Debug, Clone)]
pub struct FilterOptions {
    /// Lines this many characters or shorter (after trimming) are dropped
    pub min_line_chars: usize,

    /// Lines strictly shorter than this, without a section indicator or a
    /// terminal-punctuation ending, are treated as truncated fragments
    pub fragment_max_chars: usize,

    /// Substrings whose presence exempts a short line from the fragment
    /// heuristic
    pub section_indicators: Vec<String>,

    /// Punctuation that marks a line as a finished clause rather than a
    /// truncated fragment
    pub terminal_punctuation: Vec<char>,

    /// Apply Unicode NFC normalization before filtering
    pub normalize_unicode: bool,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            min_line_chars: 2,
            fragment_max_chars: 20,
            section_indicators: ["Abstract", "Introduction", "Method", "Result", "Conclusion"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            terminal_punctuation: vec!['.', '!', '?', ':', ';', ',', ')'],
            normalize_unicode: true,
        }
    }
}

/// Line-by-line noise filter with hyphenation repair.
pub struct NoiseFilter {
    options: FilterOptions,
    patterns: Vec<Regex>,
}

impl NoiseFilter {
    /// Create a filter with the given options.
    pub fn new(options: FilterOptions) -> Self {
        Self {
            options,
            patterns: NOISE_PATTERNS
                .iter()
                .map(|p| Regex::new(p).unwrap())
                .collect(),
        }
    }

    /// Classify a single trimmed line as noise.
    pub fn is_noise(&self, line: &str) -> bool {
        let line = line.trim();

        if line.chars().count() <= self.options.min_line_chars {
            return true;
        }

        if self.patterns.iter().any(|p| p.is_match(line)) {
            return true;
        }

        // Fragment heuristic: short lines with no section indicator and no
        // terminal punctuation are sidebar or margin leakage, not prose.
        if line.chars().count() < self.options.fragment_max_chars
            && !self
                .options
                .section_indicators
                .iter()
                .any(|k| line.contains(k.as_str()))
            && !line.ends_with(self.options.terminal_punctuation.as_slice())
        {
            return true;
        }

        false
    }

    /// Clean one column's raw text: drop noise lines, collapse whitespace
    /// runs, repair hyphen-broken words across line boundaries.
    ///
    /// Single forward pass in original order; each line is inspected once
    /// and at most one token is stolen from its successor. Repair peeks at
    /// the raw successor, so a noise line sitting between a hyphen-ended
    /// line and its lowercase continuation blocks the merge for that pass;
    /// the continuation becomes adjacent in the output and a further pass
    /// would merge it. Every line emitted still survives re-cleaning.
    pub fn clean(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }

        let text: String = if self.options.normalize_unicode {
            text.nfc().collect()
        } else {
            text.to_string()
        };

        let mut lines: Vec<String> = text.split('\n').map(str::to_string).collect();
        let mut cleaned: Vec<String> = Vec::new();
        let mut i = 0;

        while i < lines.len() {
            let stripped = lines[i].trim().to_string();

            if self.is_noise(&stripped) {
                i += 1;
                continue;
            }

            let mut line = collapse_whitespace(&stripped);

            // Hyphenation repair: a surviving line ending in '-' whose raw
            // successor starts lowercase is a broken word. The hyphen is
            // dropped, the successor's first token closes the word, and the
            // rest of the successor stays in its slot.
            if line.ends_with('-') && i + 1 < lines.len() {
                let next = lines[i + 1].trim().to_string();
                if next.chars().next().is_some_and(char::is_lowercase) {
                    let mut tokens = next.split_whitespace();
                    if let Some(first) = tokens.next() {
                        line.pop();
                        line.push_str(first);
                        let remaining = tokens.collect::<Vec<_>>().join(" ");
                        if remaining.is_empty() {
                            i += 1; // successor fully consumed
                        } else {
                            lines[i + 1] = remaining;
                        }
                    }
                }
            }

            if !line.is_empty() {
                cleaned.push(line);
            }
            i += 1;
        }

        cleaned.join("\n")
    }
}

impl Default for NoiseFilter {
    fn default() -> Self {
        Self::new(FilterOptions::default())
    }
}

/// Collapse internal whitespace runs to single spaces.
fn collapse_whitespace(line: &str) -> String {
    line.split_whitespace().collect::<Vec<_>>().join(" ")
}
