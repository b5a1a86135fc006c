use dioxus::prelude::*;

#[component]
pub fn TagsPage() -> Element {
    rsx! {
        div { class: "page",
            h1 { class: "page-title", "Tags" }
            p { class: "page-subtitle", "Organize your files with tags." }
            div { class: "empty-state",
                span { class: "empty-glyph", "🏷" }
                p { "You haven't created any tags." }
                p { class: "empty-hint", "Tag a file from its context menu to get started." }
            }
        }
    }
}
