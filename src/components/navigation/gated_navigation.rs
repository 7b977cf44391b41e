use dioxus::document::eval;
use dioxus::prelude::*;

use crate::components::navigation::SideNavigation;
use crate::config::GatedMenu;
use crate::follow::{FollowEvent, FollowPolicy};
use crate::routes::route_path;

/// Route-gated side menu.
///
/// `location` defaults to the router's current route. Nothing at all is
/// emitted when the location is outside the menu's gate.
#[component]
pub fn Navigation(#[props(default)] menu: GatedMenu, location: Option<String>) -> Element {
    let location = location.unwrap_or_else(|| router().full_route_string());

    match menu.render(&location) {
        Some(tree) => rsx! {
            SideNavigation { tree }
        },
        None => rsx! {},
    }
}

/// Follow policy that moves between in-app hrefs through the router instead
/// of reloading the page. Other hrefs are opened by the browser.
pub fn in_app_routing() -> FollowPolicy {
    FollowPolicy::route(|event: &FollowEvent| match route_path(&event.href) {
        Some(path) => {
            navigator().push(path.to_string());
        }
        None => {
            let target = serde_json::Value::from(event.href.as_str());
            eval(&format!("window.location.assign({target});"));
        }
    })
}
