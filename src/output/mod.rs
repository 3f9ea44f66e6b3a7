// Output formatting for the command-line front end.

pub mod terminal;

/// Shorten a document for a one-line preview: keep the first `max_chars`
/// characters and mark the cut with "...". Counts chars, not bytes, so
/// accented capsule text and emoji are never split mid-character.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    let char_count = text.chars().count();
    if char_count <= max_chars {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_chars).collect();
        format!("{truncated}...")
    }
}
