use dioxus::prelude::*;

use crate::components::layout::{Header, Sidebar};
use crate::Route;

/// Dashboard chrome: sidebar on the left, header on top, routed content in
/// the main area. Login and signup render outside this shell.
#[component]
pub fn AppShell() -> Element {
    rsx! {
        div { class: "app-shell",
            Sidebar {}
            div { class: "main-panel",
                Header {}
                main { class: "content-area",
                    Outlet::<Route> {}
                }
            }
        }
    }
}
