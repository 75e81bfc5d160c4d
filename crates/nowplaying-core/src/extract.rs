//! Attribute lookup on single lines of loosely formed markup.
//!
//! A line is read as alternating bare and quoted segments split on `"`.
//! The value of `name` is the quoted segment that follows a bare segment
//! whose last whitespace-separated word is exactly `name=`.

/// Return the value of the first `name="..."` pair on `line`.
///
/// An unterminated quote runs to the end of the line.
pub fn extract<'a>(name: &str, line: &'a str) -> Option<&'a str> {
    let mut pos = 0;

    while let Some(offset) = line[pos..].find('"') {
        let open = pos + offset;
        let value_start = open + 1;
        let close = line[value_start..].find('"').map(|i| value_start + i);
        let value_end = close.unwrap_or(line.len());

        if attribute_key(&line[pos..open]) == Some(name) {
            return Some(&line[value_start..value_end]);
        }

        match close {
            Some(close) => pos = close + 1,
            None => return None,
        }
    }

    None
}

/// Like [`extract`], but an absent attribute reads as the empty string.
pub fn extract_or_empty<'a>(name: &str, line: &'a str) -> &'a str {
    extract(name, line).unwrap_or("")
}

fn attribute_key(bare: &str) -> Option<&str> {
    bare.rsplit(char::is_whitespace).next()?.strip_suffix('=')
}
