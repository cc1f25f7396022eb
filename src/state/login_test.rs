use super::*;

// =============================================================
// LoginState transitions
// =============================================================

#[test]
fn default_is_idle_without_error() {
    let state = LoginState::default();
    assert!(!state.submitting);
    assert!(state.error.is_none());
}

#[test]
fn begin_submit_clears_prior_error() {
    let mut state = LoginState {
        submitting: false,
        error: Some("old error".to_owned()),
    };
    state.begin_submit();
    assert!(state.submitting);
    assert!(state.error.is_none());
}

#[test]
fn fail_returns_to_idle_with_message() {
    let mut state = LoginState::default();
    state.begin_submit();
    state.fail("Bad credentials".to_owned());
    assert!(!state.submitting);
    assert_eq!(state.error.as_deref(), Some("Bad credentials"));
}

// =============================================================
// dashboard_route priority
// =============================================================

#[test]
fn vendor_routes_to_vendor_dashboard() {
    assert_eq!(dashboard_route(&[Role::Vendor]), "/vendor/dashboard");
}

#[test]
fn manager_routes_to_manager_dashboard() {
    assert_eq!(dashboard_route(&[Role::VendorManager]), "/manager/dashboard");
}

#[test]
fn admin_routes_to_admin_dashboard() {
    assert_eq!(dashboard_route(&[Role::Admin]), "/admin/dashboard");
}

#[test]
fn vendor_wins_over_admin() {
    // Priority order, not list order.
    assert_eq!(dashboard_route(&[Role::Admin, Role::Vendor]), "/vendor/dashboard");
    assert_eq!(dashboard_route(&[Role::Vendor, Role::Admin]), "/vendor/dashboard");
}

#[test]
fn manager_wins_over_admin() {
    assert_eq!(
        dashboard_route(&[Role::Admin, Role::VendorManager]),
        "/manager/dashboard"
    );
}

#[test]
fn unknown_or_no_roles_land_on_generic_dashboard() {
    assert_eq!(dashboard_route(&[]), "/dashboard");
    assert_eq!(
        dashboard_route(&[Role::Other("AUDITOR".to_owned())]),
        "/dashboard"
    );
}
