//! Console Nav - route-gated side navigation for the meeting analytics console
//!
//! A menu is a declarative [`model::MenuModel`] behind a [`gate::RouteGate`]:
//! it renders only while the current location is at or under the gate path.
//! Rendering is a pure function of the location, the model, an optional
//! active-href override and a follow policy, producing a [`tree::VisualTree`]
//! that the Dioxus components in [`components`] draw.
//!
//! ## Example
//! ```rust
//! use console_nav::prelude::*;
//!
//! let menu = GatedMenu::calls();
//!
//! let tree = menu.render("/calls/meeting-42").unwrap();
//! assert_eq!(tree.header.text, "Meeting Analytics");
//! assert_eq!(tree.active().unwrap().href, "#/calls");
//!
//! // Not under the gate: nothing is rendered
//! assert!(menu.render("/stream-audio").is_none());
//! ```

pub mod active;
pub mod components;
pub mod config;
pub mod error;
pub mod follow;
pub mod gate;
pub mod menus;
pub mod model;
pub mod routes;
pub mod tree;

// Re-export common types
pub mod prelude {
    pub use crate::active::resolve_active;
    pub use crate::config::{GatedMenu, NavigationOptions};
    pub use crate::error::{ConfigError, ConfigResult};
    pub use crate::follow::{FollowDispatcher, FollowEvent, FollowOutcome, FollowPolicy};
    pub use crate::gate::RouteGate;
    pub use crate::menus::{calls_menu, extension_download_href, ASSET_VERSION};
    pub use crate::model::{LinkEntry, MenuEntry, MenuModel, NavHeader, SectionEntry};
    pub use crate::routes::{route_href, route_path};
    pub use crate::tree::{render, LinkNode, NavNode, VisualTree};
}
