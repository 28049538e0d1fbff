//! Route table and lookup.
//!
//! # Responsibilities
//! - Hold the static page routes
//! - Resolve a path to a page target or a redirect
//! - Return an explicit no-match rather than a silent default

use crate::routing::matcher::PathPattern;

/// What a route entry points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    HotelList,
    HotelDetail,
    Redirect(&'static str),
}

/// Result of resolving a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteMatch {
    /// Show the hotel list.
    HotelList,
    /// Show one hotel; the decoded `:id` segment is passed through unparsed.
    HotelDetail { id: String },
    /// Send the client elsewhere.
    Redirect { to: &'static str },
}

#[derive(Debug)]
struct RouteEntry {
    pattern: PathPattern,
    target: Target,
}

/// Immutable table of page routes, checked in insertion order.
#[derive(Debug)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    /// The application's page routes.
    pub fn standard() -> Self {
        Self::new()
            .route("/hotels", Target::HotelList)
            .route("/hotels/:id", Target::HotelDetail)
            .route("/", Target::Redirect("/hotels"))
    }

    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn route(mut self, pattern: &str, target: Target) -> Self {
        self.entries.push(RouteEntry {
            pattern: PathPattern::new(pattern),
            target,
        });
        self
    }

    /// Resolve a request path. First match wins.
    pub fn resolve(&self, path: &str) -> Option<RouteMatch> {
        self.entries.iter().find_map(|entry| {
            let params = entry.pattern.matches(path)?;
            let matched = match entry.target {
                Target::HotelList => RouteMatch::HotelList,
                Target::HotelDetail => RouteMatch::HotelDetail {
                    id: params.get("id").unwrap_or_default().to_string(),
                },
                Target::Redirect(to) => RouteMatch::Redirect { to },
            };
            tracing::trace!(path = %path, pattern = entry.pattern.as_str(), "Route matched");
            Some(matched)
        })
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::standard()
    }
}
