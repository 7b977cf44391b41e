//! Built-in menus.

use crate::model::{MenuEntry, MenuModel, NavHeader};
use crate::routes::{
    route_href, CALLS_PATH, DEFAULT_PATH, STREAM_AUDIO_PATH, VIRTUAL_PARTICIPANT_PATH,
};

/// Version of the packaged browser extension, fixed at build time.
pub const ASSET_VERSION: &str = env!("CONSOLE_ASSET_VERSION");

/// Download path of the packaged browser extension for `version`.
pub fn extension_download_href(version: &str) -> String {
    format!("/lma-chrome-extension-{version}.zip")
}

pub fn calls_header() -> NavHeader {
    NavHeader::new("Meeting Analytics", route_href(DEFAULT_PATH))
}

pub fn calls_items() -> Vec<MenuEntry> {
    vec![
        MenuEntry::link("Meetings", route_href(CALLS_PATH)),
        MenuEntry::section(
            "Sources",
            vec![
                MenuEntry::link(
                    "Download Chrome Extension",
                    extension_download_href(ASSET_VERSION),
                ),
                MenuEntry::external_link(
                    "Stream Audio (no extension)",
                    route_href(STREAM_AUDIO_PATH),
                ),
                MenuEntry::external_link(
                    "Virtual Participant (Preview)",
                    route_href(VIRTUAL_PARTICIPANT_PATH),
                ),
            ],
        ),
    ]
}

/// The meeting analytics menu shown under the calls section.
pub fn calls_menu() -> MenuModel {
    let model = MenuModel::new_unchecked(calls_header(), calls_items());
    debug_assert!(model.validate().is_ok());
    model
}
