// crates/geodir-core/src/text.rs

/// Title-case free text typed by a user.
///
/// Each run of non-whitespace gets its first character upper-cased and the
/// rest lower-cased. Whitespace is copied through unchanged, so callers that
/// want a clean name should trim first.
///
/// # Examples
///
/// ```rust
/// use geodir_core::text::title_case;
///
/// assert_eq!(title_case("united states"), "United States");
/// assert_eq!(title_case("GUINEA-BISSAU"), "Guinea-bissau");
/// assert_eq!(title_case("côte d'ivoire"), "Côte D'ivoire");
/// ```
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;

    for ch in s.chars() {
        if ch.is_whitespace() {
            at_word_start = true;
            out.push(ch);
        } else if at_word_start {
            at_word_start = false;
            out.extend(ch.to_uppercase());
        } else {
            out.extend(ch.to_lowercase());
        }
    }
    out
}

/// Trimmed text, or `None` when nothing but whitespace is left.
pub fn non_blank(s: &str) -> Option<&str> {
    let t = s.trim();
    (!t.is_empty()).then_some(t)
}
