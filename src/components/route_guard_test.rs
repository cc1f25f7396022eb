use super::*;
use crate::net::types::UserProfile;
use crate::state::session::Session;

fn authed(roles: Vec<Role>) -> AuthView {
    AuthView::Authenticated {
        user: Some(UserProfile {
            username: "someone".to_owned(),
            full_name: None,
            roles,
        }),
    }
}

// =============================================================
// decide
// =============================================================

#[test]
fn unauthenticated_goes_to_login_regardless_of_required_role() {
    assert_eq!(decide(&AuthView::Anonymous, None), RouteDecision::ToLogin);
    assert_eq!(
        decide(&AuthView::Anonymous, Some(&Role::Vendor)),
        RouteDecision::ToLogin
    );
    assert_eq!(
        decide(&AuthView::Anonymous, Some(&Role::VendorManager)),
        RouteDecision::ToLogin
    );
}

#[test]
fn authenticated_with_no_required_role_renders() {
    assert_eq!(decide(&authed(vec![]), None), RouteDecision::Render);
    assert_eq!(
        decide(&AuthView::Authenticated { user: None }, None),
        RouteDecision::Render
    );
}

#[test]
fn wrong_role_goes_to_unauthorized_never_login() {
    let vendor_only = authed(vec![Role::Vendor]);
    assert_eq!(
        decide(&vendor_only, Some(&Role::VendorManager)),
        RouteDecision::ToUnauthorized
    );
}

#[test]
fn matching_role_renders() {
    let manager = authed(vec![Role::VendorManager]);
    assert_eq!(decide(&manager, Some(&Role::VendorManager)), RouteDecision::Render);
}

#[test]
fn token_without_profile_is_denied_role_gated_routes() {
    // Degraded session: authenticated, but every role check fails closed.
    let degraded = AuthView::Authenticated { user: None };
    assert_eq!(
        decide(&degraded, Some(&Role::Vendor)),
        RouteDecision::ToUnauthorized
    );
}

#[test]
fn logout_then_guarded_render_redirects_to_login() {
    let auth = AuthContext::new();
    auth.login(
        &UserProfile {
            username: "vendor1".to_owned(),
            full_name: None,
            roles: vec![Role::Vendor],
        },
        "tok-1",
    );
    assert_eq!(
        decide(&auth.snapshot(), Some(&Role::Vendor)),
        RouteDecision::Render
    );

    auth.logout();
    assert_eq!(
        decide(&auth.snapshot(), Some(&Role::Vendor)),
        RouteDecision::ToLogin
    );
}

#[test]
fn view_from_session_feeds_the_guard() {
    let session = Session {
        user: None,
        token: Some("tok".to_owned()),
    };
    assert_eq!(decide(&session.into(), None), RouteDecision::Render);
}

// =============================================================
// redirect targets
// =============================================================

#[test]
fn redirect_targets_match_routes() {
    assert_eq!(RouteDecision::Render.redirect_target(), None);
    assert_eq!(RouteDecision::ToLogin.redirect_target(), Some("/login"));
    assert_eq!(
        RouteDecision::ToUnauthorized.redirect_target(),
        Some("/unauthorized")
    );
}
