//! HTML to readable plain text.

use crate::model::WikiError;

/// Render width handed to the converter. Wide enough that it never wraps;
/// wrapping to the viewport happens later in [`crate::text::wrap`].
const RENDER_WIDTH: usize = 10_000;

/// Reduce article HTML to plain text.
///
/// # Errors
///
/// [`WikiError::Decode`] if the HTML cannot be converted or yields no text.
pub fn readable_text(html: &str) -> Result<String, WikiError> {
    let text = html2text::config::plain()
        .string_from_read(html.as_bytes(), RENDER_WIDTH)
        .map_err(|e| WikiError::Decode(e.to_string()))?;

    let text = text.trim();
    if text.is_empty() {
        return Err(WikiError::Decode("article has no readable text".to_string()));
    }
    Ok(text.to_string())
}
