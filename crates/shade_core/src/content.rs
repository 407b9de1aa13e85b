//! Content section: ordered glob patterns naming the files to scan.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// `*` and `?` stay within one path segment; only `**` crosses `/`.
const MATCH_OPTIONS: glob::MatchOptions = glob::MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// A well-formed glob pattern. Construction fails on syntax the glob engine
/// rejects (e.g. an unclosed `[`), on unbalanced braces, and on empty input.
///
/// Brace groups expand into alternatives: `src/**/*.{rs,html}` matches a path
/// if either `src/**/*.rs` or `src/**/*.html` does.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GlobPattern {
    raw: String,
    alternatives: Vec<glob::Pattern>,
}

impl GlobPattern {
    pub fn new(pattern: &str) -> Result<Self, glob::PatternError> {
        if pattern.trim().is_empty() {
            return Err(glob::PatternError {
                pos: 0,
                msg: "pattern is empty",
            });
        }
        let alternatives = expand_braces(pattern)?
            .iter()
            .map(|alt| glob::Pattern::new(alt))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            raw: pattern.to_string(),
            alternatives,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn matches(&self, path: &str) -> bool {
        self.alternatives
            .iter()
            .any(|p| p.matches_with(path, MATCH_OPTIONS))
    }

    /// The expanded patterns, one per brace alternative.
    pub fn alternatives(&self) -> &[glob::Pattern] {
        &self.alternatives
    }

    /// Leading path components free of wildcards, e.g. `src` for `src/**/*.rs`.
    /// Lets a scanner start its walk there instead of at the root.
    /// A pattern without wildcards is its own prefix.
    pub fn literal_prefix(&self) -> &str {
        let raw = self.as_str();
        let Some(wildcard) = raw.find(WILDCARDS) else {
            return raw;
        };
        match raw[..wildcard].rfind('/') {
            Some(slash) => &raw[..slash],
            None => "",
        }
    }

    pub fn has_wildcards(&self) -> bool {
        self.as_str().contains(WILDCARDS)
    }
}

const WILDCARDS: [char; 4] = ['*', '?', '[', '{'];

fn brace_error(pos: usize, msg: &'static str) -> glob::PatternError {
    glob::PatternError { pos, msg }
}

/// Expand every `{a,b}` group, nested ones included, into plain patterns.
fn expand_braces(pattern: &str) -> Result<Vec<String>, glob::PatternError> {
    let Some(open) = pattern.find('{') else {
        if let Some(pos) = pattern.find('}') {
            return Err(brace_error(pos, "unmatched `}`"));
        }
        return Ok(vec![pattern.to_string()]);
    };
    if let Some(pos) = pattern[..open].find('}') {
        return Err(brace_error(pos, "unmatched `}`"));
    }

    let mut depth = 0usize;
    let mut close = None;
    let mut bounds = vec![open];
    for (offset, c) in pattern[open..].char_indices() {
        let i = open + offset;
        match c {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    close = Some(i);
                    break;
                }
            }
            ',' if depth == 1 => bounds.push(i),
            _ => {}
        }
    }
    let close = close.ok_or_else(|| brace_error(open, "unclosed `{`"))?;
    bounds.push(close);

    let prefix = &pattern[..open];
    let suffix = &pattern[close + 1..];
    let mut expanded = Vec::new();
    for pair in bounds.windows(2) {
        let alternative = &pattern[pair[0] + 1..pair[1]];
        expanded.extend(expand_braces(&format!("{prefix}{alternative}{suffix}"))?);
    }
    Ok(expanded)
}

impl FromStr for GlobPattern {
    type Err = glob::PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GlobPattern::new(s)
    }
}

impl fmt::Display for GlobPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for GlobPattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for GlobPattern {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        GlobPattern::new(&raw)
            .map_err(|e| de::Error::custom(format!("invalid glob pattern `{raw}`: {e}")))
    }
}

/// `content` section. Accepts either `{ files = [...] }` or a bare array of
/// globs; always serializes as the table form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContentConfig {
    pub files: Vec<GlobPattern>,
}

impl ContentConfig {
    pub fn new(files: Vec<GlobPattern>) -> Self {
        Self { files }
    }

    /// Parse every pattern, failing on the first bad one.
    pub fn from_patterns<I, S>(patterns: I) -> Result<Self, glob::PatternError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let files = patterns
            .into_iter()
            .map(|p| GlobPattern::new(p.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { files })
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// True if any pattern matches the given `/`-separated relative path.
    pub fn matches(&self, rel_path: &str) -> bool {
        self.files.iter().any(|p| p.matches(rel_path))
    }
}

impl<'de> Deserialize<'de> for ContentConfig {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ContentVisitor;

        impl<'de> Visitor<'de> for ContentVisitor {
            type Value = ContentConfig;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a list of glob patterns or a table with `files`")
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<ContentConfig, A::Error> {
                let mut files = Vec::new();
                while let Some(pattern) = seq.next_element::<GlobPattern>()? {
                    files.push(pattern);
                }
                Ok(ContentConfig { files })
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<ContentConfig, A::Error> {
                let mut files: Option<Vec<GlobPattern>> = None;
                while let Some(key) = map.next_key::<String>()? {
                    match key.as_str() {
                        "files" => {
                            if files.is_some() {
                                return Err(de::Error::duplicate_field("files"));
                            }
                            files = Some(map.next_value()?);
                        }
                        other => return Err(de::Error::unknown_field(other, &["files"])),
                    }
                }
                let files = files.ok_or_else(|| de::Error::missing_field("files"))?;
                Ok(ContentConfig { files })
            }
        }

        deserializer.deserialize_any(ContentVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_patterns() {
        assert!(GlobPattern::new("src/**/*.rs").is_ok());
        assert!(GlobPattern::new("index.html").is_ok());
        assert!(GlobPattern::new("templates/*.{html,hbs}").is_ok());
    }

    #[test]
    fn test_invalid_patterns() {
        assert!(GlobPattern::new("[invalid").is_err());
        assert!(GlobPattern::new("").is_err());
        assert!(GlobPattern::new("   ").is_err());
        assert!(GlobPattern::new("src/*.{rs,html").is_err());
        assert!(GlobPattern::new("src/*.rs}").is_err());
        assert!(GlobPattern::new("src/{[oops,lib}/*.rs").is_err());
    }

    #[test]
    fn test_star_stays_in_one_segment() {
        let top = GlobPattern::new("*.html").unwrap();
        assert!(top.matches("index.html"));
        assert!(!top.matches("docs/deep/page.html"));

        let src = GlobPattern::new("src/*.rs").unwrap();
        assert!(src.matches("src/lib.rs"));
        assert!(!src.matches("src/ui/panel.rs"));

        let deep = GlobPattern::new("**/*.html").unwrap();
        assert!(deep.matches("index.html"));
        assert!(deep.matches("docs/deep/page.html"));
    }

    #[test]
    fn test_brace_alternatives() {
        let pattern = GlobPattern::new("src/**/*.{rs,html}").unwrap();
        assert_eq!(pattern.alternatives().len(), 2);
        assert!(pattern.matches("src/lib.rs"));
        assert!(pattern.matches("src/app.html"));
        assert!(pattern.matches("src/ui/panel.rs"));
        assert!(!pattern.matches("src/style.css"));
        assert!(!pattern.matches("src/x.{rs,html}"));

        let nested = GlobPattern::new("{web,app/{pages,parts}}/*.html").unwrap();
        assert_eq!(nested.alternatives().len(), 3);
        assert!(nested.matches("app/parts/nav.html"));
        assert!(!nested.matches("app/nav.html"));
        assert_eq!(nested.as_str(), "{web,app/{pages,parts}}/*.html");
    }

    #[test]
    fn test_pattern_matching() {
        let pattern = GlobPattern::new("src/**/*.rs").unwrap();
        assert!(pattern.matches("src/lib.rs"));
        assert!(pattern.matches("src/ui/button.rs"));
        assert!(!pattern.matches("index.html"));
        let literal = GlobPattern::new("index.html").unwrap();
        assert!(literal.matches("index.html"));
    }

    #[test]
    fn test_literal_prefix() {
        assert_eq!(GlobPattern::new("src/**/*.rs").unwrap().literal_prefix(), "src");
        assert_eq!(GlobPattern::new("a/b/*.html").unwrap().literal_prefix(), "a/b");
        assert_eq!(GlobPattern::new("**/*.rs").unwrap().literal_prefix(), "");
        assert_eq!(GlobPattern::new("index.html").unwrap().literal_prefix(), "index.html");
        assert_eq!(GlobPattern::new("web/app.html").unwrap().literal_prefix(), "web/app.html");
        assert!(!GlobPattern::new("index.html").unwrap().has_wildcards());
        assert_eq!(GlobPattern::new("src/{a,b}/*.rs").unwrap().literal_prefix(), "src");
        assert!(GlobPattern::new("{a,b}.html").unwrap().has_wildcards());
    }

    #[test]
    fn test_content_table_form() {
        let content: ContentConfig =
            serde_json::from_str(r#"{ "files": ["src/**/*.rs", "index.html"] }"#).unwrap();
        assert_eq!(content.files.len(), 2);
        assert_eq!(content.files[1].as_str(), "index.html");
    }

    #[test]
    fn test_content_array_form_normalizes() {
        let content: ContentConfig = serde_json::from_str(r#"["src/**/*.rs"]"#).unwrap();
        let json = serde_json::to_value(&content).unwrap();
        assert_eq!(json, serde_json::json!({ "files": ["src/**/*.rs"] }));
    }

    #[test]
    fn test_content_rejects_unknown_key_and_bad_glob() {
        assert!(serde_json::from_str::<ContentConfig>(r#"{ "files": [], "relative": true }"#).is_err());
        let err = serde_json::from_str::<ContentConfig>(r#"{ "files": ["[oops"] }"#).unwrap_err();
        assert!(err.to_string().contains("invalid glob pattern `[oops`"));
    }

    #[test]
    fn test_content_matches_any() {
        let content = ContentConfig::from_patterns(["src/**/*.rs", "index.html"]).unwrap();
        assert!(content.matches("index.html"));
        assert!(content.matches("src/main.rs"));
        assert!(!content.matches("README.md"));
    }
}
