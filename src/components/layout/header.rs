use dioxus::prelude::*;

use crate::components::navigation::AvatarDropdown;
use crate::nav;
use crate::Route;

#[component]
pub fn Header() -> Element {
    let route = use_route::<Route>();
    let current_path = route.to_string();

    let title = nav::active_category(&current_path)
        .map(|c| c.label)
        .unwrap_or("Dashboard");

    rsx! {
        header { class: "header",
            h2 { class: "header-title", "{title}" }
            div { class: "header-actions",
                AvatarDropdown {}
            }
        }
    }
}
