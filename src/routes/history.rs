//! In-memory navigation history with query parsing.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};
use std::collections::BTreeMap;

/// Characters escaped when a query key or value is written back out.
const QUERY_COMPONENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'=');

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub path: String,
    pub query: BTreeMap<String, String>,
}

impl Location {
    /// Parse `/path?a=1&b=2`. The path is normalized to start with `/`.
    pub fn parse(url: &str) -> Self {
        let url = url.trim();
        let url = url.split('#').next().unwrap_or("");
        let (path, query) = match url.split_once('?') {
            Some((p, q)) => (p, parse_query(q)),
            None => (url, BTreeMap::new()),
        };
        let path = if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{}", path)
        };
        Self { path, query }
    }

    pub fn href(&self) -> String {
        if self.query.is_empty() {
            return self.path.clone();
        }
        let query: Vec<String> = self
            .query
            .iter()
            .map(|(k, v)| {
                let k = utf8_percent_encode(k, QUERY_COMPONENT);
                if v.is_empty() {
                    k.to_string()
                } else {
                    format!("{}={}", k, utf8_percent_encode(v, QUERY_COMPONENT))
                }
            })
            .collect();
        format!("{}?{}", self.path, query.join("&"))
    }
}

/// Split a query string into percent-decoded key/value pairs. Later keys
/// overwrite earlier ones; a bare key maps to an empty value.
pub fn parse_query(query: &str) -> BTreeMap<String, String> {
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (k, v) = pair.split_once('=').unwrap_or((pair, ""));
            (decode(k), decode(v))
        })
        .collect()
}

fn decode(component: &str) -> String {
    percent_decode_str(component).decode_utf8_lossy().into_owned()
}

#[derive(Debug, Clone)]
pub struct MemoryHistory {
    entries: Vec<Location>,
    index: usize,
}

impl MemoryHistory {
    pub fn new(initial: &str) -> Self {
        Self {
            entries: vec![Location::parse(initial)],
            index: 0,
        }
    }

    pub fn current(&self) -> &Location {
        &self.entries[self.index]
    }

    /// Push a new entry, dropping any forward entries.
    pub fn push(&mut self, url: &str) -> &Location {
        self.entries.truncate(self.index + 1);
        self.entries.push(Location::parse(url));
        self.index = self.entries.len() - 1;
        self.current()
    }

    pub fn replace(&mut self, url: &str) -> &Location {
        self.entries[self.index] = Location::parse(url);
        self.current()
    }

    /// Step back. Returns `None` at the first entry.
    pub fn back(&mut self) -> Option<&Location> {
        if self.index == 0 {
            return None;
        }
        self.index -= 1;
        Some(self.current())
    }

    pub fn forward(&mut self) -> Option<&Location> {
        if self.index + 1 >= self.entries.len() {
            return None;
        }
        self.index += 1;
        Some(self.current())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_location() {
        let loc = Location::parse("contacts?page=2&sort");
        assert_eq!(loc.path, "/contacts");
        assert_eq!(loc.query.get("page").map(String::as_str), Some("2"));
        assert_eq!(loc.query.get("sort").map(String::as_str), Some(""));
        assert_eq!(loc.href(), "/contacts?page=2&sort");
    }

    #[test]
    fn test_query_is_percent_decoded() {
        let loc = Location::parse("/search?q=a%20b&tag=caf%C3%A9&amp=%26");
        assert_eq!(loc.query.get("q").map(String::as_str), Some("a b"));
        assert_eq!(loc.query.get("tag").map(String::as_str), Some("café"));
        assert_eq!(loc.query.get("amp").map(String::as_str), Some("&"));

        // Reserved characters are escaped again on the way out.
        assert_eq!(Location::parse(&loc.href()), loc);
        assert!(loc.href().contains("amp=%26"));
    }

    #[test]
    fn test_history_push_back_forward() {
        let mut h = MemoryHistory::new("/");
        h.push("/a");
        h.push("/b");
        assert_eq!(h.back().unwrap().path, "/a");
        assert_eq!(h.forward().unwrap().path, "/b");
        assert!(h.forward().is_none());

        h.back();
        h.back();
        assert!(h.back().is_none());
        assert_eq!(h.current().path, "/");

        // Pushing from the middle drops forward entries.
        h.push("/c");
        assert!(h.forward().is_none());
        assert_eq!(h.back().unwrap().path, "/");
        assert!(h.back().is_none());
    }

    #[test]
    fn test_replace() {
        let mut h = MemoryHistory::new("/");
        h.replace("/x?y=1");
        assert_eq!(h.current().href(), "/x?y=1");
        assert!(h.back().is_none());
    }
}
