use regex::Regex;

use crate::TransformResult;

const KEYWORDS_PATTERN: &str = r"(?i)\b(help|problem|issue|users|error|fail|confusing|need)\b";

/// A sentence terminator only counts when followed by whitespace, so
/// trailing punctuation and decimals like "v1.2" stay in the summary.
const SENTENCE_END_PATTERN: &str = r"[.?!]\s";

const SUMMARY_MAX_CHARS: usize = 120;
const SUMMARY_TRUNCATE_AT: usize = 117;

const SUGGESTIONS: [&str; 3] = [
    "Run a 5-user usability test targeting the main flow causing confusion.",
    "Add in-product hints for the specific step where users drop off.",
    "Measure success with a short A/B experiment over 2 weeks.",
];

/// Whole-word keyword match plus more than 4 whitespace-separated tokens.
pub(crate) fn is_problem_statement(text: &str) -> bool {
    if text.split_whitespace().count() <= 4 {
        return false;
    }
    Regex::new(KEYWORDS_PATTERN)
        .ok()
        .is_some_and(|re| re.is_match(text))
}

/// First sentence of `text`, hard-capped at [`SUMMARY_MAX_CHARS`] chars
/// (truncated to [`SUMMARY_TRUNCATE_AT`] plus an ellipsis).
fn summary_of(text: &str) -> String {
    let first_sentence = Regex::new(SENTENCE_END_PATTERN)
        .ok()
        .and_then(|re| re.splitn(text, 2).next().map(ToOwned::to_owned))
        .unwrap_or_else(|| text.to_owned());

    if first_sentence.chars().count() > SUMMARY_MAX_CHARS {
        let head: String = first_sentence.chars().take(SUMMARY_TRUNCATE_AT).collect();
        format!("{head}...")
    } else {
        first_sentence
    }
}

/// Build the problem-statement rendering: summary line plus the fixed
/// suggestion list.
pub(crate) fn summarize(text: &str) -> TransformResult {
    let bullets = SUGGESTIONS.join("\n- ");
    TransformResult {
        output: format!(
            "Problem — {}\n\nSuggestions:\n- {bullets}",
            summary_of(text)
        ),
        note: super::SUGGESTIONS_NOTE.to_owned(),
    }
}
