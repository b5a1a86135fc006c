use dioxus::prelude::*;

use crate::hooks::use_session;
use crate::session;
use crate::Route;

/// Account menu in the header. Shows the uppercased first character of the
/// username as the avatar glyph when a session exists, otherwise a generic
/// glyph and "Guest".
#[component]
pub fn AvatarDropdown() -> Element {
    let mut state = use_session();
    let nav = navigator();

    let logged_in = state.is_logged_in();
    let record = state.record();
    let record = record.read();
    let label = session::display_name(record.as_ref());
    let initial = record.as_ref().map(|r| r.initial());

    let on_logout = move |_| {
        state.logout();
        nav.push(Route::LoginPage {});
    };

    rsx! {
        div { class: "avatar-dropdown",
            button { class: "avatar-button",
                if let Some(glyph) = initial {
                    span { class: "avatar-glyph", "{glyph}" }
                } else {
                    span { class: "avatar-glyph placeholder", "👤" }
                }
            }
            div { class: "avatar-menu",
                p { class: "avatar-name", "{label}" }
                div { class: "menu-divider" }
                if logged_in {
                    a { class: "menu-item", onclick: on_logout, "Log out" }
                } else {
                    Link { class: "menu-item", to: Route::LoginPage {}, "Log in" }
                }
            }
        }
    }
}
