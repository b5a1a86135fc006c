//! Route gating, evaluated for every routed path before it renders.
//!
//! The decision logic lives here as plain functions so the contract is
//! testable without a browser. The [`RouteGuard`](crate::components::RouteGuard)
//! layout component applies the decision.

use crate::session::SessionRecord;

/// Where the guard would send unauthenticated traffic, if it enforced.
/// Referenced only by the enforcement arm, which is not wired up yet.
#[allow(dead_code)]
pub const REDIRECT_TARGET: &str = "/";

/// Paths under these prefixes never require a session.
const EXEMPT_PREFIXES: &[&str] = &["/login", "/signup"];

/// Static-asset prefix the guard skips entirely.
const ASSET_PREFIX: &str = "/assets/";

/// Image requests bypass the guard regardless of path.
const IMAGE_EXTENSIONS: &[&str] = &[".svg", ".png", ".jpg", ".jpeg", ".gif", ".webp", ".ico"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Let the request through unmodified.
    Forward,
    /// Send the browser to the given path instead. [`evaluate`] never
    /// constructs this today — it is the arm enforcement will take once
    /// wired up, and `RouteGuard` already handles it.
    #[allow(dead_code)]
    Redirect(&'static str),
}

/// Whether the guard looks at this path at all. Static assets, images and
/// the favicon are never gated.
pub fn is_gated(path: &str) -> bool {
    if path.starts_with(ASSET_PREFIX) || path == "/favicon.ico" {
        return false;
    }
    !IMAGE_EXTENSIONS.iter().any(|ext| path.ends_with(ext))
}

/// Root, `/login*` and `/signup*` always forward, session or not.
pub fn is_exempt(path: &str) -> bool {
    path == "/" || EXEMPT_PREFIXES.iter().any(|p| path.starts_with(p))
}

/// Decide what to do with a routed path.
///
/// Intended contract: protected paths forward only when a session record
/// exists, otherwise redirect to [`REDIRECT_TARGET`]. That enforcement was
/// never wired up — protected paths forward unconditionally today, and no
/// page-level check covers the gap either. The tests below pin the
/// always-forward behavior so changing it is a deliberate step, not a side
/// effect.
pub fn evaluate(path: &str, session: Option<&SessionRecord>) -> GuardDecision {
    if !is_gated(path) || is_exempt(path) {
        return GuardDecision::Forward;
    }

    // TODO: return Redirect(REDIRECT_TARGET) when `session` is None once
    // enforcement is turned on.
    let _ = session;
    GuardDecision::Forward
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::SessionRecord;

    fn session() -> SessionRecord {
        SessionRecord::new("alice".to_string())
    }

    #[test]
    fn exempt_paths_forward() {
        assert_eq!(evaluate("/", None), GuardDecision::Forward);
        assert_eq!(evaluate("/login", None), GuardDecision::Forward);
        assert_eq!(evaluate("/login/reset", None), GuardDecision::Forward);
        assert_eq!(evaluate("/signup", None), GuardDecision::Forward);
    }

    #[test]
    fn protected_paths_forward_without_a_session() {
        // Pins the current pass-through behavior: enforcement is not wired
        // up, so even unauthenticated traffic is forwarded everywhere.
        assert_eq!(evaluate("/dashboard", None), GuardDecision::Forward);
        assert_eq!(evaluate("/dashboard/shared", None), GuardDecision::Forward);
        assert_eq!(
            evaluate("/tools/marketing/ad-copy", None),
            GuardDecision::Forward
        );
    }

    #[test]
    fn protected_paths_forward_with_a_session() {
        let record = session();
        assert_eq!(
            evaluate("/dashboard", Some(&record)),
            GuardDecision::Forward
        );
        assert_eq!(
            evaluate("/tools/cloud-dev/code-review", Some(&record)),
            GuardDecision::Forward
        );
    }

    #[test]
    fn assets_and_images_are_not_gated() {
        assert!(!is_gated("/assets/main.css"));
        assert!(!is_gated("/favicon.ico"));
        assert!(!is_gated("/logo.svg"));
        assert!(!is_gated("/images/hero.webp"));
        assert!(!is_gated("/banner.jpeg"));
    }

    #[test]
    fn page_paths_are_gated() {
        assert!(is_gated("/dashboard"));
        assert!(is_gated("/tools/marketing/ad-copy"));
        assert!(is_gated("/"));
    }

    #[test]
    fn redirect_decision_carries_the_root_target() {
        // The decision enforcement will return for unauthenticated traffic
        // once it is turned on; evaluate() never produces it today.
        let decision = GuardDecision::Redirect(REDIRECT_TARGET);
        assert_eq!(decision, GuardDecision::Redirect("/"));
        assert_ne!(decision, evaluate("/dashboard", None));
    }

    #[test]
    fn exemption_is_prefix_based() {
        assert!(is_exempt("/"));
        assert!(is_exempt("/signup/confirm"));
        assert!(!is_exempt("/dashboard"));
        // Exact root only — other single-segment paths are not exempt.
        assert!(!is_exempt("/tools"));
    }
}
