//! Width-aware text shaping for the report columns.
//!
//! Widths are counted in characters; report text is expected to be
//! single-width.

pub const ELLIPSIS: &str = "...";
pub const DEFAULT_LEADER: char = '.';

/// Shorten `text` to exactly `width` characters, ending in an ellipsis.
///
/// Text that already fits is returned unchanged. Below a width of three
/// there is no room to give back, so the ellipsis is appended as is.
pub fn truncate(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len <= width {
        return text.to_string();
    }

    if width < ELLIPSIS.len() {
        return format!("{}{}", text, ELLIPSIS);
    }

    let kept: String = text.chars().take(width - ELLIPSIS.len()).collect();
    format!("{}{}", kept, ELLIPSIS)
}

/// Leader characters needed to stretch content of `content_len` to `target`.
pub fn pad_dots(content_len: usize, target: usize, leader: char) -> String {
    std::iter::repeat_n(leader, target.saturating_sub(content_len)).collect()
}

pub fn display_len(text: &str) -> usize {
    text.chars().count()
}
