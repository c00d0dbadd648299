use regex::Regex;

/// local-part@domain.tld, two-letter TLD minimum.
const EMAIL_PATTERN: &str = r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}";

/// Substring match anywhere in the input: one embedded address is enough
/// to trip the privacy gate.
pub(crate) fn contains_email(text: &str) -> bool {
    Regex::new(EMAIL_PATTERN)
        .ok()
        .is_some_and(|re| re.is_match(text))
}
