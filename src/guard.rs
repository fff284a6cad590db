//! Route Guard
//!
//! Gates views on session presence and role. The decision is a synchronous
//! function over session state - the guard issues no network calls.

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::models::Capability;
use crate::session::{use_session, SessionPhase};

/// Outcome of the guard decision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    Render,
    RedirectLogin,
    RedirectHome,
}

/// Decide what a guarded route does for the given session state. An
/// unresolved session routes to login, same as an anonymous one; a signed-in
/// user lacking the required capability lands on the default route.
pub fn route_decision(phase: &SessionPhase, required: Option<Capability>) -> RouteDecision {
    match phase {
        SessionPhase::Unknown | SessionPhase::Loading | SessionPhase::Anonymous => {
            RouteDecision::RedirectLogin
        }
        SessionPhase::Authenticated(user) => match required {
            Some(capability) if !user.role.can(capability) => RouteDecision::RedirectHome,
            _ => RouteDecision::Render,
        },
    }
}

/// Wrap a route's content; renders it only when the guard allows
#[component]
pub fn RequireRole(
    /// Capability required beyond being signed in
    #[prop(strip_option)] capability: Option<Capability>,
    children: ChildrenFn,
) -> impl IntoView {
    let session = use_session();
    move || {
        let phase = session.phase();
        match route_decision(&phase, capability) {
            RouteDecision::Render => children(),
            RouteDecision::RedirectLogin => view! { <Redirect path="/login"/> }.into_any(),
            RouteDecision::RedirectHome => view! { <Redirect path="/"/> }.into_any(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AuthUser, Role};

    fn signed_in(role: Role) -> SessionPhase {
        SessionPhase::Authenticated(AuthUser { id: 1, username: "ana".to_string(), role })
    }

    #[test]
    fn test_unresolved_session_routes_to_login() {
        assert_eq!(route_decision(&SessionPhase::Unknown, None), RouteDecision::RedirectLogin);
        assert_eq!(route_decision(&SessionPhase::Loading, None), RouteDecision::RedirectLogin);
    }

    #[test]
    fn test_anonymous_routes_to_login() {
        assert_eq!(
            route_decision(&SessionPhase::Anonymous, Some(Capability::ManageCatalog)),
            RouteDecision::RedirectLogin
        );
    }

    #[test]
    fn test_signed_in_without_capability_routes_home() {
        assert_eq!(
            route_decision(&signed_in(Role::Creator), Some(Capability::ManageCatalog)),
            RouteDecision::RedirectHome
        );
        assert_eq!(
            route_decision(&signed_in(Role::Guest), Some(Capability::ManageOwnItems)),
            RouteDecision::RedirectHome
        );
    }

    #[test]
    fn test_signed_in_with_capability_renders() {
        assert_eq!(
            route_decision(&signed_in(Role::Admin), Some(Capability::ManageSettings)),
            RouteDecision::Render
        );
        assert_eq!(
            route_decision(&signed_in(Role::Creator), Some(Capability::ManageOwnItems)),
            RouteDecision::Render
        );
    }

    #[test]
    fn test_no_capability_requires_only_a_session() {
        assert_eq!(route_decision(&signed_in(Role::Guest), None), RouteDecision::Render);
    }
}
