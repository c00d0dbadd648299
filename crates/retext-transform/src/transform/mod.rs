mod email;
mod problem;
mod reverse;

use crate::TransformResult;

/// Note shown when the input is empty or whitespace-only.
pub const PROMPT_NOTE: &str = "Please enter something to transform.";

/// Note shown when the privacy gate refuses an email-like input.
pub const PRIVACY_NOTE: &str =
    "Privacy: detected an email-like string. This local-only tool won't transmit it.";

/// Note attached to problem-statement summaries.
pub const SUGGESTIONS_NOTE: &str = "Generated local suggestions";

/// Note rendered by callers when a transformer fails outright.
pub const ERROR_NOTE: &str = "Error processing input";

/// Seam between the rule engine and its callers.
///
/// [`apply`] itself is infallible, but call sites must tolerate a fallible
/// (or remote/asynchronous) transformer: map `Err` to [`ERROR_NOTE`] and
/// record nothing.
pub trait Transform {
    /// # Errors
    /// Implementations other than [`LocalTransform`] may fail; the local
    /// rule engine never does.
    fn transform(&self, input: &str) -> anyhow::Result<TransformResult>;
}

/// The built-in deterministic rule engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalTransform;

impl Transform for LocalTransform {
    fn transform(&self, input: &str) -> anyhow::Result<TransformResult> {
        Ok(apply(input))
    }
}

/// Apply the transform rules to `input`.
///
/// Rule order:
///
/// ```text
/// 1. empty / whitespace-only  — prompt note, no output
/// 2. email gate               — privacy refusal, wins over everything below
/// 3. problem statement        — keyword + length heuristic, summary + suggestions
/// 4. default                  — reverse whitespace-separated words
/// ```
///
/// Total over all string inputs: always returns a well-formed result and
/// never panics.
pub fn apply(input: &str) -> TransformResult {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return TransformResult {
            output: String::new(),
            note: PROMPT_NOTE.to_owned(),
        };
    }

    if email::contains_email(trimmed) {
        return TransformResult {
            output: String::new(),
            note: PRIVACY_NOTE.to_owned(),
        };
    }

    if problem::is_problem_statement(trimmed) {
        return problem::summarize(trimmed);
    }

    reverse::apply(trimmed)
}

#[cfg(test)]
mod tests_problem;
