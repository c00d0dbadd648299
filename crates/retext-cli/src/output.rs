use retext_transform::TransformResult;

/// Print a Serialize value as pretty JSON, logging errors to stderr.
pub fn print_json(value: &(impl serde::Serialize + ?Sized)) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("[retext] JSON serialization error: {e}"),
    }
}

/// Render a transform result: output on stdout, note as a `[retext]`
/// diagnostic on stderr. Empty output renders the note alone, so the
/// prompt/privacy paths never print a blank line.
pub fn render_result(result: &TransformResult) {
    if result.output.is_empty() {
        if result.note.is_empty() {
            eprintln!("[retext] no result");
        } else {
            eprintln!("[retext] {}", result.note);
        }
        return;
    }
    println!("{}", result.output);
    if !result.note.is_empty() {
        eprintln!("[retext] {}", result.note);
    }
}
