//! Related-links parsing.
//!
//! The analyzer returns the link list as one free-form string, with URLs
//! separated by whitespace and/or commas. Tokens are passed through without
//! URL validation; the report view renders them as-is.

/// Split on runs of whitespace or commas, trim, drop empties, keep order.
pub fn parse_related_links(source: &str) -> Vec<String> {
    source
        .split(|c: char| c.is_whitespace() || c == ',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mixed_separators_preserve_order() {
        let links = parse_related_links("http://a.com, http://b.com  http://c.com");
        assert_eq!(links, vec!["http://a.com", "http://b.com", "http://c.com"]);
    }

    #[test]
    fn test_separator_only_input_is_empty() {
        assert!(parse_related_links("").is_empty());
        assert!(parse_related_links("  ,, ,  ").is_empty());
    }

    #[test]
    fn test_malformed_tokens_pass_through() {
        let links = parse_related_links("not-a-url,http://ok.example");
        assert_eq!(links, vec!["not-a-url", "http://ok.example"]);
    }
}
