use dioxus::prelude::*;

/// Landing page of the dashboard. The file list has no backing data yet, so
/// this always renders the empty state.
#[component]
pub fn RecentFilesPage() -> Element {
    rsx! {
        div { class: "page",
            h1 { class: "page-title", "Recent Files" }
            p { class: "page-subtitle", "Documents and generations you touched recently." }
            div { class: "empty-state",
                span { class: "empty-glyph", "🗂" }
                p { "No recent files yet." }
                p { class: "empty-hint", "Run any tool and its output will show up here." }
            }
        }
    }
}
