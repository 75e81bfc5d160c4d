/// Character reference servers use for an apostrophe inside attribute values.
const APOSTROPHE_REF: &str = "&#39;";

/// Replace every `&#39;` with a literal apostrophe.
///
/// Other references (`&amp;`, `&quot;`, ...) pass through untouched.
pub fn decode_apostrophe(text: &str) -> String {
    let mut decoded = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(idx) = rest.find(APOSTROPHE_REF) {
        decoded.push_str(&rest[..idx]);
        decoded.push('\'');
        rest = &rest[idx + APOSTROPHE_REF.len()..];
    }
    decoded.push_str(rest);

    decoded
}
