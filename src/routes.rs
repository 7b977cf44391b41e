//! Application route paths and the in-app href format.
//!
//! Menu entries that point inside the console are written as `#` followed by
//! the route path, so the browser keeps them as fragment links.

/// Marks an href as an in-application route.
pub const ROUTE_PREFIX: char = '#';

pub const DEFAULT_PATH: &str = "/";
pub const CALLS_PATH: &str = "/calls";
pub const STREAM_AUDIO_PATH: &str = "/stream-audio";
pub const VIRTUAL_PARTICIPANT_PATH: &str = "/virtual-participant";

/// Build the in-app href for a route path.
pub fn route_href(path: &str) -> String {
    format!("{ROUTE_PREFIX}{path}")
}

/// Route path of an in-app href, `None` for anything else.
pub fn route_path(href: &str) -> Option<&str> {
    href.strip_prefix(ROUTE_PREFIX)
}

pub fn is_route_href(href: &str) -> bool {
    href.starts_with(ROUTE_PREFIX)
}
