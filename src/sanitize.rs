/// Lowercase `input` and delete every character outside `[a-z ]`
/// (or `[a-z0-9 ]` with `keep_numbers`). Nothing is replaced, so runs of
/// rejected characters simply vanish.
pub fn sanitize_input(input: &str, keep_numbers: bool) -> String {
    input
        .to_lowercase()
        .chars()
        .filter(|&c| is_allowed(c, keep_numbers))
        .collect()
}

fn is_allowed(c: char, keep_numbers: bool) -> bool {
    c.is_ascii_lowercase() || c == ' ' || (keep_numbers && c.is_ascii_digit())
}

/// Split sanitized text into its non-empty words.
pub fn words(clean: &str) -> Vec<&str> {
    clean.split_whitespace().collect()
}
