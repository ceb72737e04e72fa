//! Constant-name normalization.

/// Convert a resource name into a SCREAMING_SNAKE constant name.
///
/// A separator is inserted between an ASCII-lowercase letter immediately
/// followed by an ASCII-uppercase letter; existing `-` separators become
/// `_`; the result is uppercased. Only the single lower→upper boundary is
/// detected — consecutive uppercase runs stay fused, so `"myHTMLParser"`
/// normalizes to `"MY_HTMLPARSER"`, not `"MY_HTML_PARSER"`.
///
/// No escaping is performed; callers must supply clean resource names.
/// Idempotent: normalizing an already-normalized name is a no-op.
pub fn constant_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut prev_is_lower = false;

    for ch in name.chars() {
        if prev_is_lower && ch.is_ascii_uppercase() {
            out.push('_');
        }
        prev_is_lower = ch.is_ascii_lowercase();

        if ch == '-' {
            out.push('_');
        } else {
            out.extend(ch.to_uppercase());
        }
    }

    out
}
