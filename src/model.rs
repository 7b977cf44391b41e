//! Declarative menu description.
//!
//! A [`MenuModel`] is a header plus an ordered list of [`MenuEntry`] values.
//! Models are checked when they are built (or deserialized), so every
//! `MenuModel` in hand satisfies the uniqueness and non-empty rules.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// Label-link pair shown above the menu.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavHeader {
    pub text: String,
    pub href: String,
}

impl NavHeader {
    pub fn new(text: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            href: href.into(),
        }
    }
}

/// A leaf of the menu.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkEntry {
    pub text: String,
    pub href: String,
    /// Target lies outside the gated section. Such links are never active.
    #[serde(default)]
    pub external: bool,
}

/// A non-clickable grouping of entries.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionEntry {
    pub text: String,
    pub items: Vec<MenuEntry>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MenuEntry {
    Link(LinkEntry),
    Section(SectionEntry),
}

impl MenuEntry {
    pub fn link(text: impl Into<String>, href: impl Into<String>) -> Self {
        MenuEntry::Link(LinkEntry {
            text: text.into(),
            href: href.into(),
            external: false,
        })
    }

    pub fn external_link(text: impl Into<String>, href: impl Into<String>) -> Self {
        MenuEntry::Link(LinkEntry {
            text: text.into(),
            href: href.into(),
            external: true,
        })
    }

    pub fn section(text: impl Into<String>, items: Vec<MenuEntry>) -> Self {
        MenuEntry::Section(SectionEntry {
            text: text.into(),
            items,
        })
    }

    pub fn text(&self) -> &str {
        match self {
            MenuEntry::Link(link) => &link.text,
            MenuEntry::Section(section) => &section.text,
        }
    }
}

/// Unchecked shape of a menu, used for deserialization.
#[derive(Deserialize)]
struct MenuModelParts {
    header: NavHeader,
    items: Vec<MenuEntry>,
}

/// A validated navigation menu.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "MenuModelParts")]
pub struct MenuModel {
    header: NavHeader,
    items: Vec<MenuEntry>,
}

impl TryFrom<MenuModelParts> for MenuModel {
    type Error = ConfigError;

    fn try_from(parts: MenuModelParts) -> ConfigResult<Self> {
        MenuModel::new(parts.header, parts.items)
    }
}

impl MenuModel {
    /// Build a menu, rejecting empty item lists and duplicate link targets.
    pub fn new(header: NavHeader, items: Vec<MenuEntry>) -> ConfigResult<Self> {
        let model = Self { header, items };
        model.validate()?;
        Ok(model)
    }

    /// Built-in menus whose shape is fixed in code.
    pub(crate) fn new_unchecked(header: NavHeader, items: Vec<MenuEntry>) -> Self {
        Self { header, items }
    }

    /// Parse a menu from its JSON description.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.items.is_empty() {
            return Err(ConfigError::EmptyModel);
        }

        let mut seen = HashSet::new();
        for link in self.links() {
            if !seen.insert(link.href.as_str()) {
                return Err(ConfigError::DuplicateHref(link.href.clone()));
            }
        }
        Ok(())
    }

    pub fn header(&self) -> &NavHeader {
        &self.header
    }

    pub fn items(&self) -> &[MenuEntry] {
        &self.items
    }

    /// All leaves in display order, descending into sections.
    pub fn links(&self) -> Links<'_> {
        Links {
            stack: vec![self.items.iter()],
        }
    }

    /// Find the leaf with exactly this href.
    pub fn link(&self, href: &str) -> Option<&LinkEntry> {
        self.links().find(|link| link.href == href)
    }
}

/// Depth-first iterator over the leaves of a menu.
pub struct Links<'a> {
    stack: Vec<std::slice::Iter<'a, MenuEntry>>,
}

impl<'a> Iterator for Links<'a> {
    type Item = &'a LinkEntry;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.stack.last_mut()?.next() {
                Some(entry) => entry,
                None => {
                    self.stack.pop();
                    continue;
                }
            };
            match entry {
                MenuEntry::Link(link) => return Some(link),
                MenuEntry::Section(section) => self.stack.push(section.items.iter()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header() -> NavHeader {
        NavHeader::new("Meeting Analytics", "#/")
    }

    #[test]
    fn test_links_walk_sections_in_order() {
        let model = MenuModel::new(
            header(),
            vec![
                MenuEntry::link("Meetings", "#/calls"),
                MenuEntry::section(
                    "Sources",
                    vec![
                        MenuEntry::link("Download", "/ext.zip"),
                        MenuEntry::external_link("Stream", "#/stream-audio"),
                    ],
                ),
                MenuEntry::link("Settings", "#/calls/settings"),
            ],
        )
        .unwrap();

        let hrefs: Vec<&str> = model.links().map(|l| l.href.as_str()).collect();
        assert_eq!(
            hrefs,
            vec!["#/calls", "/ext.zip", "#/stream-audio", "#/calls/settings"]
        );
        assert!(model.link("#/stream-audio").unwrap().external);
    }

    #[test]
    fn test_duplicate_href_rejected() {
        let result = MenuModel::new(
            header(),
            vec![
                MenuEntry::link("Meetings", "#/calls"),
                MenuEntry::link("All meetings", "#/calls"),
            ],
        );
        assert!(matches!(result, Err(ConfigError::DuplicateHref(href)) if href == "#/calls"));
    }

    #[test]
    fn test_duplicate_href_inside_section_rejected() {
        let result = MenuModel::new(
            header(),
            vec![
                MenuEntry::link("Meetings", "#/calls"),
                MenuEntry::section("Sources", vec![MenuEntry::external_link("Again", "#/calls")]),
            ],
        );
        assert!(matches!(result, Err(ConfigError::DuplicateHref(_))));
    }

    #[test]
    fn test_empty_model_rejected() {
        let result = MenuModel::new(header(), vec![]);
        assert!(matches!(result, Err(ConfigError::EmptyModel)));
    }

    #[test]
    fn test_empty_section_is_allowed() {
        let model = MenuModel::new(header(), vec![MenuEntry::section("Sources", vec![])]).unwrap();
        assert_eq!(model.links().count(), 0);
        assert_eq!(model.items().len(), 1);
    }

    #[test]
    fn test_from_json() {
        let json = r##"{
            "header": {"text": "Meeting Analytics", "href": "#/"},
            "items": [
                {"type": "link", "text": "Meetings", "href": "#/calls"},
                {"type": "section", "text": "Sources", "items": [
                    {"type": "link", "text": "Stream", "href": "#/stream-audio", "external": true}
                ]}
            ]
        }"##;

        let model = MenuModel::from_json(json).unwrap();
        assert_eq!(model.header().text, "Meeting Analytics");
        assert_eq!(model.items()[1].text(), "Sources");
        assert!(!model.link("#/calls").unwrap().external);
    }

    #[test]
    fn test_from_json_validates() {
        let json = r##"{"header": {"text": "H", "href": "#/"}, "items": []}"##;
        let err = MenuModel::from_json(json).unwrap_err();
        assert!(err.to_string().contains("no items"));
    }

    #[test]
    fn test_from_json_unknown_entry_type_fails() {
        let json = r##"{
            "header": {"text": "H", "href": "#/"},
            "items": [{"type": "divider", "text": "—"}]
        }"##;
        assert!(matches!(
            MenuModel::from_json(json),
            Err(ConfigError::InvalidJson(_))
        ));
    }
}
