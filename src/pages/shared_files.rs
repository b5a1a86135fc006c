use dioxus::prelude::*;

#[component]
pub fn SharedFilesPage() -> Element {
    rsx! {
        div { class: "page",
            h1 { class: "page-title", "Shared Files" }
            p { class: "page-subtitle", "Files other people shared with you." }
            div { class: "empty-state",
                span { class: "empty-glyph", "🤝" }
                p { "Nothing has been shared with you." }
                p { class: "empty-hint", "Shared documents will appear here automatically." }
            }
        }
    }
}
