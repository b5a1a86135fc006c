use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use crate::hooks::use_session;
use crate::Route;

/// Simulated network latency before the session is written, in milliseconds.
const LOGIN_DELAY_MS: u32 = 1000;

/// Stub login: any username/password combination is accepted. Submitting
/// disables the button, waits [`LOGIN_DELAY_MS`], writes the session record
/// and navigates to the dashboard. There is no failure path.
#[component]
pub fn LoginPage() -> Element {
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

        // Backstop for the `required` attribute. Whitespace-only input
        // passes, exactly like the browser's own check.
        if username_val.is_empty() || password_val.is_empty() {
            return;
        }

        submitting.set(true);

        spawn(async move {
            TimeoutFuture::new(LOGIN_DELAY_MS).await;
            state.login(username_val);
            nav.push(Route::RecentFilesPage {});
        });
    };

    rsx! {
        div { class: "auth-page",
            div { class: "auth-card",
                h2 { class: "auth-title", "Sign in to Toolframe" }
                p { class: "auth-subtitle", "Your AI tools workspace" }

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
                            autocomplete: "current-password",
                        }
                    }
                    button {
                        r#type: "submit",
                        class: "btn-primary",
                        disabled: submitting(),
                        if submitting() {
                            span { class: "spinner" }
                            span { "Signing in" }
                        } else {
                            span { "Sign in" }
                        }
                    }
                }

                p { class: "auth-switch",
                    "No account yet? "
                    Link { to: Route::SignupPage {}, "Sign up" }
                }
            }
        }
    }
}
