use crate::TransformResult;

/// Reverse whitespace-separated tokens, rejoining with single spaces.
pub(crate) fn apply(text: &str) -> TransformResult {
    let words: Vec<&str> = text.split_whitespace().collect();
    let count = words.len();
    let output = words.into_iter().rev().collect::<Vec<_>>().join(" ");
    TransformResult {
        output,
        note: format!("Reversed {count} word(s)"),
    }
}
