//! Front-matter parsing

use indexmap::IndexMap;
use serde::Serialize;

/// Line opening and closing a front-matter block
const DELIMITER: &str = "---";

/// Separator between a key and its value
const SEPARATOR: &str = ": ";

/// Literal substituted into output for a missing value
pub const UNDEFINED: &str = "undefined";

/// Flat key-value metadata from the head of a content document
///
/// Values are plain strings with no type coercion. A key whose line carried
/// no `": "` separator is present with a `None` value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FrontMatter {
    fields: IndexMap<String, Option<String>>,
}

impl FrontMatter {
    /// Parse front-matter from content string
    /// Returns (front_matter, remaining_content)
    ///
    /// Without an opening `---` line, or without a closing one, the content is
    /// returned unchanged with an empty mapping.
    pub fn parse(content: &str) -> (Self, &str) {
        let Some(rest) = strip_delimiter_line(content) else {
            return (FrontMatter::default(), content);
        };

        let mut fields = IndexMap::new();
        let mut offset = 0;

        while offset < rest.len() {
            let line_end = rest[offset..]
                .find('\n')
                .map(|i| offset + i + 1)
                .unwrap_or(rest.len());
            let line = trim_line_ending(&rest[offset..line_end]);

            if line == DELIMITER {
                return (Self { fields }, &rest[line_end..]);
            }

            let (key, value) = split_line(line);
            fields.insert(key.to_string(), value.map(str::to_string));
            offset = line_end;
        }

        // No closing ---, treat as no front-matter
        (FrontMatter::default(), content)
    }

    /// Get a value; `None` for absent keys and keys without a value
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(|v| v.as_deref())
    }

    /// Get a value for substitution into output, `"undefined"` when missing
    pub fn field(&self, key: &str) -> &str {
        self.get(key).unwrap_or(UNDEFINED)
    }

    /// Whether the key was declared at all
    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over fields in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_deref()))
    }
}

/// Strip the opening `---` line, returning the text after it
fn strip_delimiter_line(content: &str) -> Option<&str> {
    let rest = content.strip_prefix(DELIMITER)?;
    rest.strip_prefix('\n')
        .or_else(|| rest.strip_prefix("\r\n"))
}

fn trim_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// Split `key: value`. Only the text between the first and second separator
/// is kept as the value, so `a: b: c` yields `("a", Some("b"))`.
fn split_line(line: &str) -> (&str, Option<&str>) {
    let mut parts = line.split(SEPARATOR);
    let key = parts.next().unwrap_or_default();
    (key, parts.next())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_frontmatter() {
        let (fm, body) = FrontMatter::parse("---\ntitle: A\ndate: B\n---\nBODY");
        assert_eq!(fm.len(), 2);
        assert_eq!(fm.get("title"), Some("A"));
        assert_eq!(fm.get("date"), Some("B"));
        assert_eq!(body, "BODY");
    }

    #[test]
    fn test_no_frontmatter_passthrough() {
        let content = "# Hello\n\nNo metadata here.\n";
        let (fm, body) = FrontMatter::parse(content);
        assert!(fm.is_empty());
        assert_eq!(body, content);
    }

    #[test]
    fn test_unclosed_block_is_content() {
        let content = "---\ntitle: A\nstill going\n";
        let (fm, body) = FrontMatter::parse(content);
        assert!(fm.is_empty());
        assert_eq!(body, content);
    }

    #[test]
    fn test_delimiter_must_lead() {
        let content = "\n---\ntitle: A\n---\nBODY";
        let (fm, body) = FrontMatter::parse(content);
        assert!(fm.is_empty());
        assert_eq!(body, content);
    }

    #[test]
    fn test_line_without_separator() {
        let (fm, body) = FrontMatter::parse("---\ntitle: A\ndraft\nkey:value\n---\nBODY");
        assert!(fm.contains_key("draft"));
        assert_eq!(fm.get("draft"), None);
        assert_eq!(fm.field("draft"), UNDEFINED);
        // A colon without a following space is not a separator
        assert!(fm.contains_key("key:value"));
        assert_eq!(body, "BODY");
    }

    #[test]
    fn test_value_with_separator_is_truncated() {
        let (fm, _) = FrontMatter::parse("---\ntitle: Rust: The Book\n---\n");
        assert_eq!(fm.get("title"), Some("Rust"));
    }

    #[test]
    fn test_missing_key_is_undefined() {
        let (fm, _) = FrontMatter::parse("---\ntitle: A\n---\n");
        assert_eq!(fm.get("excerpt"), None);
        assert_eq!(fm.field("excerpt"), UNDEFINED);
        assert_eq!(fm.field("title"), "A");
    }

    #[test]
    fn test_closing_delimiter_must_be_exact() {
        let (fm, body) = FrontMatter::parse("---\ntitle: A\n----\n---\nBODY\n");
        assert!(fm.contains_key("----"));
        assert_eq!(fm.get("title"), Some("A"));
        assert_eq!(body, "BODY\n");
    }

    #[test]
    fn test_crlf_line_endings() {
        let (fm, body) = FrontMatter::parse("---\r\ntitle: A\r\ndate: B\r\n---\r\nBODY");
        assert_eq!(fm.get("title"), Some("A"));
        assert_eq!(fm.get("date"), Some("B"));
        assert_eq!(body, "BODY");
    }

    #[test]
    fn test_empty_block_and_duplicates() {
        let (fm, body) = FrontMatter::parse("---\n---\nBODY");
        assert!(fm.is_empty());
        assert_eq!(body, "BODY");

        let (fm, _) = FrontMatter::parse("---\ntitle: A\ndate: B\ntitle: C\n---\n");
        assert_eq!(fm.get("title"), Some("C"));
        let keys: Vec<_> = fm.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["title", "date"]);
    }
}
