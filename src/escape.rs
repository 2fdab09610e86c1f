// src/escape.rs
//! LaTeX escaping for user-supplied text
//!
//! Every leaf field of the document model goes through one of these two
//! functions before interpolation. `latex` covers text that ends up in
//! normal paragraph context; `url` covers `\href` targets, where only the
//! characters hyperref cannot take verbatim are escaped so links stay
//! clickable.

/// Escape LaTeX special characters in free text.
pub fn latex(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '\\' => out.push_str("\\textbackslash{}"),
            '{' => out.push_str("\\{"),
            '}' => out.push_str("\\}"),
            '$' => out.push_str("\\$"),
            '&' => out.push_str("\\&"),
            '#' => out.push_str("\\#"),
            '%' => out.push_str("\\%"),
            '_' => out.push_str("\\_"),
            '~' => out.push_str("\\textasciitilde{}"),
            '^' => out.push_str("\\textasciicircum{}"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape a URL for use as an `\href` target.
pub fn url(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            // percent-encoded, with the % escaped for hyperref
            '\\' => out.push_str("\\%5C"),
            '%' => out.push_str("\\%"),
            '#' => out.push_str("\\#"),
            '{' => out.push_str("\\{"),
            '}' => out.push_str("\\}"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_passes_through() {
        assert_eq!(latex("Ada Lovelace"), "Ada Lovelace");
        assert_eq!(latex("C++ / Rust, 2020"), "C++ / Rust, 2020");
    }

    #[test]
    fn test_special_characters_are_escaped() {
        assert_eq!(latex("R&D"), "R\\&D");
        assert_eq!(latex("100%"), "100\\%");
        assert_eq!(latex("snake_case"), "snake\\_case");
        assert_eq!(latex("$5"), "\\$5");
        assert_eq!(latex("C# #1"), "C\\# \\#1");
        assert_eq!(latex("{x}"), "\\{x\\}");
        assert_eq!(latex("a\\b"), "a\\textbackslash{}b");
        assert_eq!(latex("~user"), "\\textasciitilde{}user");
        assert_eq!(latex("x^2"), "x\\textasciicircum{}2");
    }

    #[test]
    fn test_url_escapes_only_unsafe_subset() {
        assert_eq!(
            url("https://example.com/a_b?x=1&y=2"),
            "https://example.com/a_b?x=1&y=2"
        );
        assert_eq!(url("https://example.com/#top"), "https://example.com/\\#top");
        assert_eq!(url("https://example.com/100%"), "https://example.com/100\\%");
    }

    #[test]
    fn test_url_percent_encodes_backslash() {
        assert_eq!(url("https://example.com/a\\b"), "https://example.com/a\\%5Cb");
    }
}
