use dioxus::prelude::*;

use crate::nav;

/// Placeholder rendered for every `/tools/:category/:tool` route. Labels come
/// from the navigation table when the path is known, otherwise from the slug.
#[component]
pub fn ToolPage(category: String, tool: String) -> Element {
    let path = format!("/tools/{category}/{tool}");
    let title = nav::tool_by_path(&path)
        .map(|t| t.label.to_string())
        .unwrap_or_else(|| nav::title_from_slug(&tool));

    rsx! {
        div { class: "page",
            h1 { class: "page-title", "{title}" }
            div { class: "empty-state",
                span { class: "empty-glyph", "🛠" }
                p { "{title} is coming soon." }
                p { class: "empty-hint", "This tool isn't wired up yet — check back shortly." }
            }
        }
    }
}
