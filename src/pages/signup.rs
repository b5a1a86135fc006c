use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use crate::hooks::use_session;
use crate::Route;

const SIGNUP_DELAY_MS: u32 = 1000;

/// Stub signup, same contract as login: no account is created anywhere, the
/// submitted username just becomes the session record after a fake delay.
#[component]
pub fn SignupPage() -> Element {
    let mut state = use_session();
    let nav = navigator();

    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut submitting = use_signal(|| false);

    let on_submit = move |evt: Event<FormData>| {
        evt.stop_propagation();
        evt.prevent_default();

        if submitting() {
            return;
        }

        let username_val = username();
        let password_val = password();

        if username_val.is_empty() || password_val.is_empty() {
            return;
        }

        submitting.set(true);

        spawn(async move {
            TimeoutFuture::new(SIGNUP_DELAY_MS).await;
            state.login(username_val);
            nav.push(Route::RecentFilesPage {});
        });
    };

    rsx! {
        div { class: "auth-page",
            div { class: "auth-card",
                h2 { class: "auth-title", "Create your account" }
                p { class: "auth-subtitle", "One workspace for every AI tool" }

                form { class: "auth-form", onsubmit: on_submit,
                    label { class: "field-label", "Username"
                        input {
                            r#type: "text",
                            class: "field-input",
                            placeholder: "username",
                            required: true,
                            value: "{username}",
                            oninput: move |evt| username.set(evt.value()),
                            autocomplete: "username",
                        }
                    }
                    label { class: "field-label", "Password"
                        input {
                            r#type: "password",
                            class: "field-input",
                            placeholder: "password",
                            required: true,
                            value: "{password}",
                            oninput: move |evt| password.set(evt.value()),
                            autocomplete: "new-password",
                        }
                    }
                    button {
                        r#type: "submit",
                        class: "btn-primary",
                        disabled: submitting(),
                        if submitting() {
                            span { class: "spinner" }
                            span { "Creating account" }
                        } else {
                            span { "Sign up" }
                        }
                    }
                }

                p { class: "auth-switch",
                    "Already registered? "
                    Link { to: Route::LoginPage {}, "Sign in" }
                }
            }
        }
    }
}
