//! Whitespace normalization shared by the encode and decode paths.

use alloc::string::String;

/// Trim the input and collapse every internal run of whitespace to one space.
///
/// Always returns a new string; the input is only read. Idempotent.
#[must_use]
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for word in text.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}

/// Check if `text` is already in normalized form.
#[must_use]
pub fn is_normalized(text: &str) -> bool {
    let mut prev_space = true;
    for ch in text.chars() {
        if ch.is_whitespace() {
            if ch != ' ' || prev_space {
                return false;
            }
            prev_space = true;
        } else {
            prev_space = false;
        }
    }
    text.is_empty() || !prev_space
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_and_collapse() {
        assert_eq!(normalize("   e       e   "), "e e");
        assert_eq!(normalize("a\t\n b"), "a b");
        assert_eq!(normalize("abc"), "abc");
    }

    #[test]
    fn test_empty_and_blank() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("    "), "");
        assert_eq!(normalize("\t\r\n"), "");
    }

    #[test]
    fn test_idempotent() {
        let once = normalize("  the   quick \t brown ");
        assert_eq!(normalize(&once), once);
    }

    #[test]
    fn test_is_normalized() {
        assert!(is_normalized(""));
        assert!(is_normalized("a b c"));
        assert!(!is_normalized(" a"));
        assert!(!is_normalized("a "));
        assert!(!is_normalized("a  b"));
        assert!(!is_normalized("a\tb"));
        assert!(!is_normalized(" "));
    }
}
