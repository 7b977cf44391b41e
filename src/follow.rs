//! Follow events: what happens when a user selects a menu link.

use std::fmt;
use std::rc::Rc;

use tracing::{debug, info};

/// Raised when a menu link (or the header link) is selected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FollowEvent {
    pub text: String,
    pub href: String,
    pub external: bool,
}

/// Whether the browser should go on to follow the link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FollowOutcome {
    Navigate,
    PreventDefault,
}

pub type FollowHandler = Rc<dyn Fn(&FollowEvent)>;

/// How follow events are handled.
#[derive(Clone, Default)]
pub enum FollowPolicy {
    /// Log the event and let the link navigate normally.
    #[default]
    Observe,
    /// Hand the event to the caller, who performs the transition.
    Route(FollowHandler),
    /// Swallow the event.
    Block,
}

impl FollowPolicy {
    pub fn route(handler: impl Fn(&FollowEvent) + 'static) -> Self {
        FollowPolicy::Route(Rc::new(handler))
    }
}

impl fmt::Debug for FollowPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FollowPolicy::Observe => f.write_str("Observe"),
            FollowPolicy::Route(_) => f.write_str("Route(..)"),
            FollowPolicy::Block => f.write_str("Block"),
        }
    }
}

impl PartialEq for FollowPolicy {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (FollowPolicy::Observe, FollowPolicy::Observe) => true,
            (FollowPolicy::Block, FollowPolicy::Block) => true,
            (FollowPolicy::Route(a), FollowPolicy::Route(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

/// Single handler shared by every link of a rendered menu.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FollowDispatcher {
    policy: FollowPolicy,
}

impl FollowDispatcher {
    pub fn new(policy: FollowPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &FollowPolicy {
        &self.policy
    }

    /// Handle one selection. Never touches menu state.
    pub fn dispatch(&self, event: &FollowEvent) -> FollowOutcome {
        match &self.policy {
            FollowPolicy::Observe => {
                info!(href = %event.href, text = %event.text, external = event.external, "menu link followed");
                FollowOutcome::Navigate
            }
            FollowPolicy::Route(handler) => {
                handler(event);
                FollowOutcome::PreventDefault
            }
            FollowPolicy::Block => {
                debug!(href = %event.href, "menu link blocked");
                FollowOutcome::PreventDefault
            }
        }
    }
}
