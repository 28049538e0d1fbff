//! Path pattern matching.
//!
//! # Responsibilities
//! - Compile patterns such as `/hotels/:id` into segments
//! - Match a request path segment by segment
//! - Capture `:name` parameters, percent-decoded
//!
//! # Design Decisions
//! - Full-path matching only; no prefix or wildcard patterns
//! - A parameter matches exactly one non-empty segment
//! - Path matching is case-sensitive
//! - Literals match the raw path; only captured values are decoded
//! - No regex

use percent_encoding::percent_decode_str;

/// One compiled segment of a path pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Param(String),
}

/// A compiled path pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    raw: String,
    segments: Vec<Segment>,
}

/// Parameters captured by a successful match, in pattern order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(Vec<(String, String)>);

impl Params {
    /// Value of the named parameter.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

impl PathPattern {
    /// Compile a pattern. Segments starting with `:` are parameters.
    pub fn new(pattern: impl Into<String>) -> Self {
        let raw = pattern.into();
        let segments = split(&raw)
            .map(|seg| match seg.strip_prefix(':') {
                Some(name) => Segment::Param(name.to_string()),
                None => Segment::Literal(seg.to_string()),
            })
            .collect();
        Self { raw, segments }
    }

    /// The pattern as written.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Match a full path, returning captured parameters.
    pub fn matches(&self, path: &str) -> Option<Params> {
        let parts: Vec<&str> = split(path).collect();
        if parts.len() != self.segments.len() {
            return None;
        }

        let mut params = Params::default();
        for (segment, part) in self.segments.iter().zip(parts) {
            match segment {
                Segment::Literal(lit) if lit == part => {}
                Segment::Literal(_) => return None,
                Segment::Param(_) if part.is_empty() => return None,
                Segment::Param(name) => params.0.push((name.clone(), decode(part))),
            }
        }
        Some(params)
    }
}

/// Percent-decode a captured segment. Invalid UTF-8 is replaced, not rejected.
fn decode(segment: &str) -> String {
    percent_decode_str(segment).decode_utf8_lossy().into_owned()
}

/// Split a path into segments. The root path has none.
///
/// One trailing slash is ignored, so `/hotels/` splits like `/hotels`.
fn split(path: &str) -> impl Iterator<Item = &str> {
    let trimmed = path.strip_prefix('/').unwrap_or(path);
    let trimmed = trimmed.strip_suffix('/').unwrap_or(trimmed);
    trimmed.split('/').filter(move |_| !trimmed.is_empty())
}
