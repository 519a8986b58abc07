//! Path patterns.
//!
//! Segments are literals, `:name` parameters, or a trailing `*` that
//! captures the rest of the path under the `splat` key. Trailing slashes
//! are not significant; matching is case-sensitive.

use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Param(String),
    Splat,
}

#[derive(Clone, PartialEq, Eq)]
pub struct PathPattern {
    raw: String,
    segments: Vec<Segment>,
}

impl fmt::Debug for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PathPattern({})", self.raw)
    }
}

impl fmt::Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

fn split_path(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

impl PathPattern {
    pub fn new(pattern: &str) -> Self {
        let segments = split_path(pattern)
            .map(|s| {
                if s == "*" {
                    Segment::Splat
                } else if let Some(name) = s.strip_prefix(':') {
                    Segment::Param(name.to_string())
                } else {
                    Segment::Literal(s.to_string())
                }
            })
            .collect();
        Self {
            raw: pattern.to_string(),
            segments,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Match `path` (without query string). Returns the captured params.
    pub fn matches(&self, path: &str) -> Option<HashMap<String, String>> {
        let parts: Vec<&str> = split_path(path).collect();
        let mut params = HashMap::new();

        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                Segment::Splat => {
                    params.insert("splat".to_string(), parts[i.min(parts.len())..].join("/"));
                    return Some(params);
                }
                Segment::Literal(lit) => {
                    if parts.get(i) != Some(&lit.as_str()) {
                        return None;
                    }
                }
                Segment::Param(name) => {
                    let value = parts.get(i)?;
                    params.insert(name.clone(), (*value).to_string());
                }
            }
        }

        if parts.len() == self.segments.len() {
            Some(params)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_pattern() {
        let p = PathPattern::new("/");
        assert!(p.matches("/").is_some());
        assert!(p.matches("").is_some());
        assert!(p.matches("/contacts").is_none());
    }

    #[test]
    fn test_params() {
        let p = PathPattern::new("/contacts/:id");
        let params = p.matches("/contacts/42/").unwrap();
        assert_eq!(params.get("id").map(String::as_str), Some("42"));
        assert!(p.matches("/contacts").is_none());
        assert!(p.matches("/contacts/42/edit").is_none());
        assert!(p.matches("/Contacts/42").is_none());
    }

    #[test]
    fn test_splat() {
        let p = PathPattern::new("/docs/*");
        let params = p.matches("/docs/a/b").unwrap();
        assert_eq!(params.get("splat").map(String::as_str), Some("a/b"));
        let params = p.matches("/docs").unwrap();
        assert_eq!(params.get("splat").map(String::as_str), Some(""));
    }
}
