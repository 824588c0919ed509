//! Glob-to-regex compilation for hostname and pathname patterns.
//!
//! `*` matches any run of characters within a single segment (it stops at
//! the separator), `**` matches across segments. Everything else is literal.
//! Hostnames use `.` as the separator, pathnames use `/`.

use regex::Regex;

/// Compiles `pattern` into an anchored regex with the wildcard rules above.
pub(crate) fn compile(pattern: &str, separator: char) -> Result<Regex, regex::Error> {
    let sep = regex::escape(&separator.to_string());
    let mut re = String::with_capacity(pattern.len() + 8);
    re.push('^');
    let mut chars = pattern.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '*' {
            if chars.peek() == Some(&'*') {
                while chars.peek() == Some(&'*') {
                    chars.next();
                }
                re.push_str(".*");
            } else {
                re.push_str(&format!("[^{sep}]*"));
            }
        } else {
            re.push_str(&regex::escape(&c.to_string()));
        }
    }
    re.push('$');
    Regex::new(&re)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matches(pattern: &str, separator: char, input: &str) -> bool {
        compile(pattern, separator).unwrap().is_match(input)
    }

    #[test]
    fn literal_patterns() {
        assert!(matches("example.com", '.', "example.com"));
        assert!(!matches("example.com", '.', "sub.example.com"));
        assert!(matches("/logo.png", '/', "/logo.png"));
        assert!(!matches("/logo.png", '/', "/img/logo.png"));
    }

    #[test]
    fn single_star_stays_in_segment() {
        assert!(matches("*.example.com", '.', "cdn.example.com"));
        assert!(!matches("*.example.com", '.', "a.b.example.com"));
        assert!(!matches("*.example.com", '.', "example.com"));

        assert!(matches("/images/*", '/', "/images/cat.png"));
        assert!(!matches("/images/*", '/', "/images/2024/cat.png"));
    }

    #[test]
    fn double_star_crosses_segments() {
        assert!(matches("**.example.com", '.', "cdn.example.com"));
        assert!(matches("**.example.com", '.', "a.b.example.com"));
        assert!(!matches("**.example.com", '.', "example.com"));

        assert!(matches("/**", '/', "/"));
        assert!(matches("/**", '/', "/any/path.png"));
        assert!(matches("/assets/**", '/', "/assets/2024/cat.png"));
        assert!(!matches("/assets/**", '/', "/other/cat.png"));
    }

    #[test]
    fn regex_metacharacters_are_literal() {
        assert!(matches("/a+b (1).png", '/', "/a+b (1).png"));
        assert!(!matches("/a+b.png", '/', "/aab.png"));
    }
}
