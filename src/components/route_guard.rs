//! Route guard: the check run before rendering a protected view.
//!
//! The decision itself is a pure function over [`AuthView`] so it tests
//! natively; the [`RequireRole`] component re-evaluates it on every render
//! of the guarded route (no caching), which means a logout elsewhere in
//! the app revokes access the next time the route renders.

#[cfg(test)]
#[path = "route_guard_test.rs"]
mod route_guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::Role;
use crate::state::auth::{AuthContext, AuthView};

/// Terminal outcome of guarding one navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteDecision {
    Render,
    ToLogin,
    ToUnauthorized,
}

impl RouteDecision {
    /// Where to send the user, or `None` when the view may render.
    pub fn redirect_target(self) -> Option<&'static str> {
        match self {
            Self::Render => None,
            Self::ToLogin => Some("/login"),
            Self::ToUnauthorized => Some("/unauthorized"),
        }
    }
}

/// Evaluate the guard. Unauthenticated sessions go to the login view no
/// matter what role the route wants; authenticated sessions lacking the
/// required role go to the unauthorized view; everything else renders.
pub fn decide(view: &AuthView, required: Option<&Role>) -> RouteDecision {
    if !view.is_authenticated() {
        return RouteDecision::ToLogin;
    }
    if let Some(role) = required {
        if !view.has_role(role) {
            return RouteDecision::ToUnauthorized;
        }
    }
    RouteDecision::Render
}

/// Wrapper for protected routes. Children render only when the guard
/// passes; otherwise the history entry is replaced with the redirect
/// target so back-navigation cannot return to the protected page.
#[component]
pub fn RequireRole(
    #[prop(optional, into)] role: Option<Role>,
    children: ChildrenFn,
) -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let navigate = use_navigate();

    let decision = decide(&auth.snapshot(), role.as_ref());

    Effect::new(move || {
        if let Some(target) = decision.redirect_target() {
            navigate(
                target,
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        }
    });

    move || (decision == RouteDecision::Render).then(|| children())
}

/// View for `/`, unmatched paths, and the router fallback: replaces the
/// current history entry with the login view.
#[component]
pub fn RedirectToLogin() -> impl IntoView {
    let navigate = use_navigate();

    Effect::new(move || {
        navigate(
            "/login",
            NavigateOptions {
                replace: true,
                ..Default::default()
            },
        );
    });
}
