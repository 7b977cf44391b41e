//! Navigation rendering.
//!
//! [`render`] composes the gate, the active resolver and the menu model into
//! a [`VisualTree`]: the ordered, possibly nested entry structure with the
//! active marker and the follow dispatcher shared by every link.

use crate::active::resolve_active;
use crate::follow::{FollowDispatcher, FollowEvent, FollowOutcome};
use crate::gate::RouteGate;
use crate::model::{MenuEntry, MenuModel, NavHeader};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinkNode {
    pub text: String,
    pub href: String,
    pub external: bool,
    pub active: bool,
}

impl LinkNode {
    pub fn follow_event(&self) -> FollowEvent {
        FollowEvent {
            text: self.text.clone(),
            href: self.href.clone(),
            external: self.external,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavNode {
    Link(LinkNode),
    Section { text: String, items: Vec<NavNode> },
}

/// Output of a render pass.
#[derive(Clone, Debug, PartialEq)]
pub struct VisualTree {
    pub header: NavHeader,
    pub items: Vec<NavNode>,
    pub active_href: Option<String>,
    pub follow: FollowDispatcher,
}

impl VisualTree {
    /// Link nodes in display order.
    pub fn links(&self) -> Vec<&LinkNode> {
        fn collect<'a>(nodes: &'a [NavNode], out: &mut Vec<&'a LinkNode>) {
            for node in nodes {
                match node {
                    NavNode::Link(link) => out.push(link),
                    NavNode::Section { items, .. } => collect(items, out),
                }
            }
        }

        let mut out = Vec::new();
        collect(&self.items, &mut out);
        out
    }

    pub fn active(&self) -> Option<&LinkNode> {
        self.links().into_iter().find(|link| link.active)
    }

    /// The header as a followable link. It is never active.
    pub fn header_link(&self) -> LinkNode {
        LinkNode {
            text: self.header.text.clone(),
            href: self.header.href.clone(),
            external: false,
            active: false,
        }
    }

    /// Dispatch a selection of this node. The event carries the node's own
    /// text and href.
    pub fn follow_link(&self, link: &LinkNode) -> FollowOutcome {
        self.follow.dispatch(&link.follow_event())
    }

    /// Dispatch a selection of the link with this href, or of the header when
    /// no link has it.
    ///
    /// Returns `None` when nothing in the tree points at `href`.
    pub fn follow(&self, href: &str) -> Option<FollowOutcome> {
        let link = match self.links().into_iter().find(|link| link.href == href) {
            Some(link) => link.clone(),
            None if self.header.href == href => self.header_link(),
            None => return None,
        };
        Some(self.follow_link(&link))
    }
}

/// Render `model` for `location`, or `None` when the location is not under
/// the gate.
pub fn render(
    location: &str,
    gate: &RouteGate,
    model: &MenuModel,
    active_override: Option<&str>,
    follow: &FollowDispatcher,
) -> Option<VisualTree> {
    if !gate.should_render(location) {
        return None;
    }

    let active = resolve_active(location, gate, model, active_override);
    let items = model
        .items()
        .iter()
        .map(|entry| render_entry(entry, active))
        .collect();

    Some(VisualTree {
        header: model.header().clone(),
        items,
        active_href: active.map(str::to_string),
        follow: follow.clone(),
    })
}

fn render_entry(entry: &MenuEntry, active: Option<&str>) -> NavNode {
    match entry {
        MenuEntry::Link(link) => NavNode::Link(LinkNode {
            text: link.text.clone(),
            href: link.href.clone(),
            external: link.external,
            active: active == Some(link.href.as_str()),
        }),
        MenuEntry::Section(section) => NavNode::Section {
            text: section.text.clone(),
            items: section
                .items
                .iter()
                .map(|entry| render_entry(entry, active))
                .collect(),
        },
    }
}
