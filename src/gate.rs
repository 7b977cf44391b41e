//! Route gating: decides whether a menu is shown for the current location.

use crate::routes::{route_href, route_path, ROUTE_PREFIX};

/// Path prefix under which a menu is visible.
///
/// The path is stored normalized: no route marker, query or trailing slash,
/// with the root kept as `/`.
///
/// Matching is segment-aligned: `/calls/123` is under `/calls`, `/callsX` is
/// not. ASCII case, trailing slashes and a `?query` suffix are ignored, and a
/// location given as an in-app href (`#/calls`) is accepted as well.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteGate {
    path: String,
}

impl RouteGate {
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into();
        let path = match normalize(path.trim()) {
            "" => "/".to_string(),
            trimmed => trimmed.to_string(),
        };
        Self { path }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// In-app href of the gate's own root, e.g. `#/calls`.
    pub fn root_href(&self) -> String {
        route_href(&self.path)
    }

    /// Whether `href` is an in-app link to the gate's own root, compared the
    /// same way locations are matched.
    pub fn is_root_href(&self, href: &str) -> bool {
        route_path(href)
            .is_some_and(|path| normalize(path).eq_ignore_ascii_case(normalize(&self.path)))
    }

    pub fn should_render(&self, location: &str) -> bool {
        matches_prefix(&self.path, location)
    }
}

/// Strip the route marker, any query string and trailing slashes.
fn normalize(path: &str) -> &str {
    let path = path.strip_prefix(ROUTE_PREFIX).unwrap_or(path);
    let path = match path.find('?') {
        Some(idx) => &path[..idx],
        None => path,
    };
    path.trim_end_matches('/')
}

/// Segment-aligned, case-insensitive prefix match.
pub fn matches_prefix(gate: &str, location: &str) -> bool {
    let gate = normalize(gate);
    let location = normalize(location);

    // Root gate: anything absolute.
    if gate.is_empty() {
        return location.is_empty() || location.starts_with('/');
    }

    let Some(head) = location.get(..gate.len()) else {
        return false;
    };
    if !head.eq_ignore_ascii_case(gate) {
        return false;
    }
    location.len() == gate.len() || location.as_bytes()[gate.len()] == b'/'
}
