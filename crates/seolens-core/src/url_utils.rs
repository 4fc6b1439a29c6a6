use url::Url;

use crate::error::{Result, SeoError};

/// Normalize user input into something `Url::parse` can accept.
///
/// Trims surrounding whitespace and prepends `https://` when no http(s)
/// scheme is present.
pub fn normalize_input_url(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    let lower = trimmed.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    }
}

/// Parse the page URL of an analysis request. Only http and https are accepted.
pub fn parse_page_url(input: &str) -> Result<Url> {
    let parsed = Url::parse(input).map_err(|source| SeoError::InvalidUrl {
        url: input.to_string(),
        source: Some(source),
    })?;

    match parsed.scheme() {
        "http" | "https" if parsed.has_host() => Ok(parsed),
        _ => Err(SeoError::invalid_url(input)),
    }
}

/// Cut `text` to at most `max_chars` characters, appending "..." when shortened.
pub fn truncate_for_display(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => format!("{}...", &text[..byte_idx]),
        None => text.to_string(),
    }
}
