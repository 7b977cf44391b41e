//! Menu configuration: caller overrides merged over the built-in menu.

use serde::Deserialize;
use tracing::warn;

use crate::error::ConfigResult;
use crate::follow::{FollowDispatcher, FollowPolicy};
use crate::gate::RouteGate;
use crate::menus::{calls_header, calls_items, calls_menu};
use crate::model::{MenuEntry, MenuModel, NavHeader};
use crate::routes::CALLS_PATH;
use crate::tree::{render, VisualTree};

/// Overrides supplied by the embedding application.
///
/// Anything left unset falls back to the meeting analytics menu gated on
/// `/calls`.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct NavigationOptions {
    pub gate_path: Option<String>,
    pub header: Option<NavHeader>,
    pub items: Option<Vec<MenuEntry>>,
    pub active_href: Option<String>,
    #[serde(skip)]
    pub follow: FollowPolicy,
}

impl NavigationOptions {
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn gate_path(mut self, path: impl Into<String>) -> Self {
        self.gate_path = Some(path.into());
        self
    }

    pub fn header(mut self, header: NavHeader) -> Self {
        self.header = Some(header);
        self
    }

    pub fn items(mut self, items: Vec<MenuEntry>) -> Self {
        self.items = Some(items);
        self
    }

    pub fn active_href(mut self, href: impl Into<String>) -> Self {
        self.active_href = Some(href.into());
        self
    }

    pub fn follow(mut self, policy: FollowPolicy) -> Self {
        self.follow = policy;
        self
    }

    /// Assemble the menu, failing if the resulting model is invalid.
    pub fn build(self) -> ConfigResult<GatedMenu> {
        let model = MenuModel::new(
            self.header.unwrap_or_else(calls_header),
            self.items.unwrap_or_else(calls_items),
        )?;
        Ok(GatedMenu {
            gate: RouteGate::new(self.gate_path.unwrap_or_else(|| CALLS_PATH.to_string())),
            model,
            active_href: self.active_href.filter(|href| !href.is_empty()),
            follow: FollowDispatcher::new(self.follow),
        })
    }

    /// Like [`build`](Self::build), but an invalid model is replaced by the
    /// built-in one. Gate, active href and follow policy are kept.
    pub fn build_or_default(self) -> GatedMenu {
        let gate_path = self.gate_path.clone();
        let active_href = self.active_href.clone();
        let follow = self.follow.clone();

        match self.build() {
            Ok(menu) => menu,
            Err(e) => {
                warn!(error = %e, "invalid navigation menu, using default");
                GatedMenu {
                    gate: RouteGate::new(gate_path.unwrap_or_else(|| CALLS_PATH.to_string())),
                    model: calls_menu(),
                    active_href: active_href.filter(|href| !href.is_empty()),
                    follow: FollowDispatcher::new(follow),
                }
            }
        }
    }
}

/// A gate, a validated model and the render options; fixed once built.
#[derive(Clone, Debug, PartialEq)]
pub struct GatedMenu {
    gate: RouteGate,
    model: MenuModel,
    active_href: Option<String>,
    follow: FollowDispatcher,
}

impl GatedMenu {
    pub fn new(gate: RouteGate, model: MenuModel) -> Self {
        Self {
            gate,
            model,
            active_href: None,
            follow: FollowDispatcher::default(),
        }
    }

    /// Meeting analytics menu under `/calls`, observing follow events.
    pub fn calls() -> Self {
        Self::new(RouteGate::new(CALLS_PATH), calls_menu())
    }

    pub fn with_active_href(mut self, href: impl Into<String>) -> Self {
        let href = href.into();
        self.active_href = (!href.is_empty()).then_some(href);
        self
    }

    pub fn with_follow_policy(mut self, policy: FollowPolicy) -> Self {
        self.follow = FollowDispatcher::new(policy);
        self
    }

    pub fn gate(&self) -> &RouteGate {
        &self.gate
    }

    pub fn model(&self) -> &MenuModel {
        &self.model
    }

    pub fn active_href(&self) -> Option<&str> {
        self.active_href.as_deref()
    }

    pub fn follow(&self) -> &FollowDispatcher {
        &self.follow
    }

    pub fn render(&self, location: &str) -> Option<VisualTree> {
        render(
            location,
            &self.gate,
            &self.model,
            self.active_href.as_deref(),
            &self.follow,
        )
    }
}

impl Default for GatedMenu {
    fn default() -> Self {
        Self::calls()
    }
}
