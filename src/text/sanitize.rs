/// Clean up a raw source excerpt before handing it to the markdown renderer.
///
/// Normalizes CRLF to `\n`, strips control characters that confuse the
/// renderer, collapses runs of three or more blank lines down to one blank
/// line, trims the ends, and runs `autocorrect` for CJK/latin spacing.
/// Total function: never fails, never panics on odd input.
pub fn sanitize_and_format(raw: &str) -> String {
    let normalized = raw.replace("\r\n", "\n").replace('\r', "\n");

    let cleaned: String = normalized
        .chars()
        .filter(|c| *c == '\n' || *c == '\t' || !c.is_control())
        .collect();

    autocorrect::format(collapse_blank_runs(cleaned.trim()).as_str())
}

/// Cap consecutive newlines at two (one blank line between paragraphs).
fn collapse_blank_runs(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut newline_run = 0usize;

    for c in text.chars() {
        if c == '\n' {
            newline_run += 1;
            if newline_run <= 2 {
                out.push(c);
            }
        } else {
            newline_run = 0;
            out.push(c);
        }
    }

    out
}
