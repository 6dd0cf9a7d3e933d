/// Maximum message length in characters, roughly 300-400 words.
pub const MAX_MESSAGE_CHARS: usize = 2000;

/// Clean and limit the free-text message.
///
/// Trims, truncates to `MAX_MESSAGE_CHARS` with a visible `...` marker, and
/// strips embedded NUL characters. Already-clean input passes through
/// unchanged.
pub fn sanitize_message(text: &str) -> String {
    let trimmed = text.trim();

    let mut cleaned = if trimmed.chars().count() > MAX_MESSAGE_CHARS {
        let mut truncated: String = trimmed.chars().take(MAX_MESSAGE_CHARS).collect();
        truncated.push_str("...");
        truncated
    } else {
        trimmed.to_string()
    };

    if cleaned.contains('\0') {
        cleaned = cleaned.replace('\0', "");
    }

    cleaned
}
