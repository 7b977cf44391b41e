use dioxus::prelude::*;

use crate::follow::{FollowDispatcher, FollowOutcome};
use crate::tree::{LinkNode, NavNode, VisualTree};

/// Draws a rendered menu: header link, then the entries in order.
#[component]
pub fn SideNavigation(tree: VisualTree) -> Element {
    let header = tree.header_link();
    let follow = tree.follow.clone();

    rsx! {
        nav { class: "side-nav",
            div { class: "side-nav-header",
                NavLink { link: header, follow: follow.clone() }
            }
            ul { class: "side-nav-items",
                for (idx, node) in tree.items.iter().enumerate() {
                    NavItem { key: "{idx}", node: node.clone(), follow: follow.clone() }
                }
            }
        }
    }
}

#[component]
fn NavItem(node: NavNode, follow: FollowDispatcher) -> Element {
    match node {
        NavNode::Link(link) => rsx! {
            li { class: "side-nav-item",
                NavLink { link, follow }
            }
        },
        NavNode::Section { text, items } => rsx! {
            li { class: "side-nav-section",
                h3 { class: "side-nav-section-title", "{text}" }
                ul { class: "side-nav-section-items",
                    for (idx, child) in items.into_iter().enumerate() {
                        NavItem { key: "{idx}", node: child, follow: follow.clone() }
                    }
                }
            }
        },
    }
}

#[component]
fn NavLink(link: LinkNode, follow: FollowDispatcher) -> Element {
    let event = link.follow_event();
    let class = if link.active {
        "side-nav-link side-nav-link-active"
    } else {
        "side-nav-link"
    };

    rsx! {
        a {
            class,
            href: "{link.href}",
            "aria-current": if link.active { "page" } else { "false" },
            onclick: move |evt: MouseEvent| {
                if follow.dispatch(&event) == FollowOutcome::PreventDefault {
                    evt.prevent_default();
                }
            },
            "{link.text}"
        }
    }
}
