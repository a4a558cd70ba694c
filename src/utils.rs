/// Trim the ASCII whitespace set from both ends of a line fragment.
///
/// Deliberately not Unicode-aware: the wire format only ever contains the
/// six ASCII whitespace characters, and `char::is_whitespace` would also
/// eat things like NBSP out of property values.
pub fn trim_ascii_edges(s: &str) -> &str {
    s.trim_matches(|c: char| {
        matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0b' | '\x0c')
    })
}

/// Cut a line at the first `//`, dropping the comment tail.
pub fn strip_line_comment(s: &str) -> &str {
    match s.find("//") {
        Some(idx) => &s[..idx],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_ascii_edges() {
        assert_eq!(trim_ascii_edges("  hello \t"), "hello");
        assert_eq!(trim_ascii_edges("\r\n value \x0b\x0c"), "value");
        assert_eq!(trim_ascii_edges("   "), "");
        assert_eq!(trim_ascii_edges("a b"), "a b");
    }

    #[test]
    fn test_strip_line_comment() {
        assert_eq!(strip_line_comment("key = 5 // note"), "key = 5 ");
        assert_eq!(strip_line_comment("// whole line"), "");
        assert_eq!(strip_line_comment("no comment"), "no comment");
        assert_eq!(strip_line_comment("a / b"), "a / b");
    }
}
