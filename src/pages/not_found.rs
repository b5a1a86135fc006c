use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        div { class: "auth-page",
            div { class: "auth-card",
                h2 { class: "auth-title", "Page not found" }
                p { class: "auth-subtitle", "No page exists at /{path}" }
                Link { class: "btn-primary", to: Route::RecentFilesPage {}, "Back to dashboard" }
            }
        }
    }
}
