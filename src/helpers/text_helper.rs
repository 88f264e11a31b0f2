pub struct TextHelper;

impl TextHelper {
    /// Cuts `text` to at most `max_chars` characters, marking the cut with an ellipsis.
    pub fn truncate_chars(text: &str, max_chars: usize) -> String {
        match text.char_indices().nth(max_chars) {
            Some((byte_index, _)) => format!("{}…", &text[..byte_index]),
            None => text.to_string(),
        }
    }
}
