//! Utility functions for text handling

/// Cap text length to keep diagnostics readable
pub fn cap_text_length(text: &str, max_len: usize) -> String {
    match text.char_indices().nth(max_len) {
        None => text.to_string(),
        Some((cut, _)) => format!("{}...", &text[..cut]),
    }
}

/// Trim and collapse runs of whitespace into single spaces
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// True when the text holds only whitespace (or nothing)
pub fn is_blank(text: &str) -> bool {
    text.chars().all(char::is_whitespace)
}
