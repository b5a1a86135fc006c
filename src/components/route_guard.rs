use dioxus::prelude::*;

use crate::guard::{self, GuardDecision};
use crate::hooks::use_session;
use crate::Route;

/// Outermost router layout: every routed path passes through here before it
/// renders, the client-side stand-in for an edge interceptor.
///
/// The decision comes from [`guard::evaluate`], which today forwards
/// everything (see the notes there); the redirect arm is plumbed through so
/// turning enforcement on is a one-line change in the guard.
#[component]
pub fn RouteGuard() -> Element {
    let route = use_route::<Route>();
    let session = use_session();
    let nav = navigator();

    let path = route.to_string();
    let record = session.record();
    let decision = guard::evaluate(&path, record.read().as_ref());

    match decision {
        GuardDecision::Forward => {
            tracing::debug!("guard: forward {path}");
        }
        GuardDecision::Redirect(target) => {
            tracing::info!("guard: redirect {path} -> {target}");
            nav.replace(target);
            return rsx! {};
        }
    }

    rsx! {
        Outlet::<Route> {}
    }
}
