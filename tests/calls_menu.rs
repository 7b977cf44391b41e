use std::cell::RefCell;
use std::rc::Rc;

use console_nav::prelude::*;

fn calls_menu_with(policy: FollowPolicy) -> GatedMenu {
    GatedMenu::calls().with_follow_policy(policy)
}

#[test]
fn renders_under_calls_with_default_active_entry() {
    let menu = GatedMenu::calls();
    let tree = menu.render("/calls/meeting-42").expect("menu should render");

    assert_eq!(tree.header, NavHeader::new("Meeting Analytics", "#/"));

    match &tree.items[0] {
        NavNode::Link(link) => {
            assert_eq!(link.text, "Meetings");
            assert_eq!(link.href, "#/calls");
            assert!(link.active);
        }
        other => panic!("expected the Meetings link first, got {other:?}"),
    }

    let active: Vec<&LinkNode> = tree.links().into_iter().filter(|l| l.active).collect();
    assert_eq!(active.len(), 1);
}

#[test]
fn hidden_on_own_external_targets() {
    let menu = GatedMenu::calls();
    assert!(menu.model().link("#/stream-audio").is_some());
    assert!(menu.render("/stream-audio").is_none());
    assert!(menu.render("/virtual-participant").is_none());
    assert!(menu.render("/").is_none());
}

#[test]
fn entry_count_and_order_match_model() {
    let menu = GatedMenu::calls();
    for location in ["/calls", "/calls/", "/calls/a/b"] {
        let tree = menu.render(location).unwrap();
        let texts: Vec<&str> = tree
            .items
            .iter()
            .map(|node| match node {
                NavNode::Link(link) => link.text.as_str(),
                NavNode::Section { text, .. } => text.as_str(),
            })
            .collect();
        let expected: Vec<&str> = menu.model().items().iter().map(|e| e.text()).collect();
        assert_eq!(texts, expected);
    }
}

#[test]
fn active_override_marks_only_that_leaf() {
    let download = extension_download_href(ASSET_VERSION);
    let menu = GatedMenu::calls().with_active_href(download.clone());
    let tree = menu.render("/calls").unwrap();

    for link in tree.links() {
        assert_eq!(link.active, link.href == download, "{}", link.href);
    }
}

#[test]
fn render_twice_gives_identical_trees() {
    let menu = calls_menu_with(FollowPolicy::route(|_| {}));
    assert_eq!(menu.render("/calls/9"), menu.render("/calls/9"));
}

#[test]
fn download_link_is_observed_not_intercepted() {
    let menu = GatedMenu::calls();
    let tree = menu.render("/calls").unwrap();
    let download = extension_download_href(ASSET_VERSION);

    assert_eq!(tree.follow(&download), Some(FollowOutcome::Navigate));
    // Following a link leaves the rendered state untouched.
    assert_eq!(menu.render("/calls"), Some(tree));
}

#[test]
fn download_link_event_reaches_handler() {
    let followed = Rc::new(RefCell::new(Vec::new()));
    let sink = followed.clone();
    let menu = calls_menu_with(FollowPolicy::route(move |event: &FollowEvent| {
        sink.borrow_mut().push(event.clone());
    }));
    let tree = menu.render("/calls").unwrap();
    let download = extension_download_href(ASSET_VERSION);

    assert_eq!(tree.follow(&download), Some(FollowOutcome::PreventDefault));
    assert_eq!(
        *followed.borrow(),
        vec![FollowEvent {
            text: "Download Chrome Extension".to_string(),
            href: download.clone(),
            external: false,
        }]
    );
    assert_eq!(menu.render("/calls"), Some(tree));
}

#[test]
fn one_handler_serves_every_link() {
    let followed = Rc::new(RefCell::new(Vec::new()));
    let sink = followed.clone();
    let menu = calls_menu_with(FollowPolicy::route(move |event: &FollowEvent| {
        sink.borrow_mut().push(event.href.clone());
    }));
    let tree = menu.render("/calls").unwrap();

    let hrefs: Vec<String> = tree.links().into_iter().map(|l| l.href.clone()).collect();
    for href in &hrefs {
        assert_eq!(tree.follow(href), Some(FollowOutcome::PreventDefault));
    }
    assert_eq!(*followed.borrow(), hrefs);
}

#[test]
fn invalid_models_fail_construction() {
    let duplicate = MenuModel::new(
        NavHeader::new("Meeting Analytics", "#/"),
        vec![
            MenuEntry::link("Meetings", "#/calls"),
            MenuEntry::link("Calls", "#/calls"),
        ],
    );
    assert!(matches!(duplicate, Err(ConfigError::DuplicateHref(_))));

    let empty = MenuModel::new(NavHeader::new("Meeting Analytics", "#/"), vec![]);
    assert!(matches!(empty, Err(ConfigError::EmptyModel)));
}

#[test]
fn one_gate_fronts_alternative_models() {
    let gate = RouteGate::new("/calls");
    let follow = FollowDispatcher::default();
    let compact = MenuModel::new(
        NavHeader::new("Meetings", "#/calls"),
        vec![MenuEntry::link("All meetings", "#/calls")],
    )
    .unwrap();

    let full = render("/calls/1", &gate, &calls_menu(), None, &follow).unwrap();
    let small = render("/calls/1", &gate, &compact, None, &follow).unwrap();

    assert_eq!(full.items.len(), 2);
    assert_eq!(small.items.len(), 1);
    assert_eq!(small.active_href.as_deref(), Some("#/calls"));
}
