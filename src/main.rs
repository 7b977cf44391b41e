use dioxus::prelude::*;

use console_nav::components::navigation::{in_app_routing, Navigation};
use console_nav::prelude::*;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(ConsoleLayout)]
        #[route("/")]
        Home {},
        #[route("/calls")]
        Calls {},
        #[route("/calls/:id")]
        Call { id: String },
        #[route("/stream-audio")]
        StreamAudio {},
        #[route("/virtual-participant")]
        VirtualParticipant {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}

#[component]
fn ConsoleLayout() -> Element {
    let route = use_route::<Route>();
    let menu = use_hook(|| {
        NavigationOptions::default()
            .follow(in_app_routing())
            .build_or_default()
    });

    rsx! {
        div { class: "console-container",
            aside { class: "console-sidebar",
                Navigation { menu, location: route.to_string() }
            }
            main { class: "console-content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Home() -> Element {
    rsx! {
        h2 { "Meeting Analytics" }
        Link { to: Route::Calls {}, "Go to meetings" }
    }
}

#[component]
fn Calls() -> Element {
    rsx! {
        h2 { "Meetings" }
        ul {
            for id in ["meeting-41", "meeting-42"] {
                li { key: "{id}",
                    Link { to: Route::Call { id: id.to_string() }, "{id}" }
                }
            }
        }
    }
}

#[component]
fn Call(id: String) -> Element {
    rsx! {
        h2 { "Meeting {id}" }
    }
}

#[component]
fn StreamAudio() -> Element {
    rsx! {
        h2 { "Stream Audio" }
        p { "The meetings menu is hidden on this page." }
    }
}

#[component]
fn VirtualParticipant() -> Element {
    rsx! {
        h2 { "Virtual Participant (Preview)" }
    }
}
