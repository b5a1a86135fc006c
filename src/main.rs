use dioxus::prelude::*;

// Module Declarations
mod components;
mod guard;
mod hooks;
mod logging;
mod nav;
mod pages;
mod session;

use components::layout::AppShell;
use components::RouteGuard;
use pages::{
    LoginPage, NotFound, RecentFilesPage, SharedFilesPage, SignupPage, TagsPage, ToolPage,
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(RouteGuard)]
        #[route("/")]
        LoginPage {},
        #[route("/signup")]
        SignupPage {},
        #[layout(AppShell)]
            #[route("/dashboard")]
            RecentFilesPage {},
            #[route("/dashboard/shared")]
            SharedFilesPage {},
            #[route("/dashboard/tags")]
            TagsPage {},
            #[route("/tools/:category/:tool")]
            ToolPage { category: String, tool: String },
        #[end_layout]
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    logging::init();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    hooks::use_session_provider();

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}
