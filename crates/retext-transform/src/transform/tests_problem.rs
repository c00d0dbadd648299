use super::*;

// --- path selection ---

#[test]
fn keyword_with_enough_tokens_takes_problem_path() {
    let result = apply("our users keep hitting a login error daily");
    assert!(result.output.starts_with("Problem — "));
    assert_eq!(result.note, SUGGESTIONS_NOTE);
}

#[test]
fn exactly_four_tokens_falls_back_to_reversal() {
    // Keyword present, but the heuristic requires more than 4 tokens.
    let result = apply("users report an error");
    assert_eq!(result.output, "error an report users");
    assert_eq!(result.note, "Reversed 4 word(s)");
}

#[test]
fn five_tokens_without_keyword_falls_back_to_reversal() {
    let result = apply("the cat sat on mats");
    assert_eq!(result.output, "mats on sat cat the");
}

#[test]
fn keywords_match_case_insensitively() {
    let result = apply("URGENT: Users CONFUSING the checkout page daily");
    assert_eq!(result.note, SUGGESTIONS_NOTE);
}

#[test]
fn keyword_must_be_a_whole_word() {
    // "needless" and "helpful" contain keywords as substrings only.
    let result = apply("a needless yet helpful turn of phrase");
    assert_eq!(result.note, "Reversed 7 word(s)");
}

// --- worked example ---

#[test]
fn login_flow_example_produces_summary_and_suggestions() {
    let result = apply("I need help, users are confused about the login flow.");
    assert!(
        result
            .output
            .starts_with("Problem — I need help, users are confused about the login flow"),
        "unexpected output: {}",
        result.output
    );
    assert!(result.output.contains("\n\nSuggestions:\n- "));
    assert!(
        result
            .output
            .contains("Run a 5-user usability test targeting the main flow causing confusion.")
    );
    assert!(
        result
            .output
            .contains("Add in-product hints for the specific step where users drop off.")
    );
    assert!(
        result
            .output
            .contains("Measure success with a short A/B experiment over 2 weeks.")
    );
    assert_eq!(result.note, SUGGESTIONS_NOTE);
}

// --- summary extraction ---

#[test]
fn summary_stops_at_first_terminator_followed_by_whitespace() {
    let result = apply("The signup flow is confusing on step two. Everything after this is dropped.");
    assert!(
        result
            .output
            .starts_with("Problem — The signup flow is confusing on step two")
    );
    assert!(!result.output.contains("Everything after"));
}

#[test]
fn question_mark_terminates_the_summary() {
    let result = apply("Why do users fail here? The rest is ignored entirely.");
    assert!(result.output.starts_with("Problem — Why do users fail here"));
    assert!(!result.output.contains("rest is ignored"));
}

#[test]
fn trailing_terminator_without_whitespace_is_kept() {
    // No "[.?!]\s" match, so the whole string is the summary.
    let result = apply("I need help, users are confused about the login flow.");
    let first_line = result.output.lines().next().unwrap_or_default();
    assert!(first_line.ends_with("login flow."));
}

#[test]
fn long_summary_is_truncated_with_ellipsis() {
    let filler = "word ".repeat(40);
    let input = format!("users hit a problem {filler}end");
    let result = apply(&input);

    let first_line = result.output.lines().next().unwrap_or_default();
    let summary = first_line.trim_start_matches("Problem — ");
    assert!(summary.ends_with("..."), "summary not truncated: {summary}");
    assert_eq!(summary.chars().count(), 120);
}

#[test]
fn summary_at_exactly_120_chars_is_not_truncated() {
    // "users need help today " is 22 chars; 98 more lands exactly on 120.
    let body = "a".repeat(98);
    let input = format!("users need help today {body}");
    assert_eq!(input.chars().count(), 120);

    let result = apply(&input);
    let first_line = result.output.lines().next().unwrap_or_default();
    let summary = first_line.trim_start_matches("Problem — ");
    assert_eq!(summary.chars().count(), 120);
    assert!(!summary.ends_with("..."));
}
