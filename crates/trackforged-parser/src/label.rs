//! Filesystem-safe labels.

/// Characters that are not allowed in file names on common platforms.
const UNSAFE_CHARS: &[char] = &['\\', '/', ':', '*', '?', '"', '<', '>', '|'];

/// Make a label safe to embed in a file name.
///
/// The input is trimmed, an empty result becomes `part`, and each run of
/// reserved characters (`\ / : * ? " < > |`) is replaced by a single `_`.
///
/// ```
/// use trackforged_parser::safe_label;
///
/// assert_eq!(safe_label("  AC/DC: Live "), "AC_DC_ Live");
/// assert_eq!(safe_label("   "), "part");
/// ```
pub fn safe_label(s: &str) -> String {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return "part".to_string();
    }

    let mut out = String::with_capacity(trimmed.len());
    let mut in_run = false;
    for c in trimmed.chars() {
        if UNSAFE_CHARS.contains(&c) {
            if !in_run {
                out.push('_');
            }
            in_run = true;
        } else {
            out.push(c);
            in_run = false;
        }
    }
    out
}
