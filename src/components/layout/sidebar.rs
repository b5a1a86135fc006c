use dioxus::prelude::*;

use crate::nav::{self, CATEGORIES, LIBRARY};
use crate::Route;

#[component]
pub fn Sidebar() -> Element {
    let route = use_route::<Route>();
    let current_path = route.to_string();

    rsx! {
        aside { class: "sidebar",
            div { class: "sidebar-brand",
                span { class: "brand-glyph", "◈" }
                span { "Toolframe" }
            }

            nav { class: "sidebar-nav",
                div { class: "nav-section",
                    p { class: "nav-section-title", "Library" }
                    for link in LIBRARY {
                        Link {
                            to: link.path,
                            class: if nav::is_link_active(&current_path, link.path) { "nav-link active" } else { "nav-link" },
                            span { class: "nav-glyph", "{link.glyph}" }
                            span { "{link.label}" }
                        }
                    }
                }

                div { class: "nav-section",
                    p { class: "nav-section-title", "AI Tools" }
                    for category in CATEGORIES {
                        // Category link targets its first tool; the sub-list
                        // only unfolds for the category owning the current path.
                        Link {
                            to: category.tools.first().map(|t| t.path).unwrap_or(category.prefix),
                            class: if current_path.starts_with(category.prefix) { "nav-link category active" } else { "nav-link category" },
                            span { "{category.label}" }
                        }
                        if nav::active_category(&current_path).is_some_and(|c| c.prefix == category.prefix) {
                            div { class: "nav-sublist",
                                for tool in category.tools {
                                    Link {
                                        to: tool.path,
                                        class: if nav::is_link_active(&current_path, tool.path) { "nav-link sub active" } else { "nav-link sub" },
                                        span { class: "nav-glyph", "{tool.glyph}" }
                                        span { "{tool.label}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
