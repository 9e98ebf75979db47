//! Free-text sanitization applied to every provider-supplied field.

/// Upper bound for titles, descriptions and author names.
pub const MAX_TEXT_LENGTH: usize = 5000;

/// Strip angle brackets, trim surrounding whitespace, cap the length.
///
/// Defense in depth for metadata that may later be rendered as markup;
/// output-context escaping remains the consumer's job.
pub fn sanitize_text(text: &str) -> String {
    let stripped: String = text.chars().filter(|c| !matches!(c, '<' | '>')).collect();
    stripped.trim().chars().take(MAX_TEXT_LENGTH).collect()
}
