//! Login flow state and the role-priority landing route.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use crate::net::types::Role;

/// Shown when the server gives no message of its own.
pub const LOGIN_FALLBACK_ERROR: &str = "Login failed. Please check your credentials.";

/// Form state: `idle -> submitting -> {success, failed}`.
///
/// Success leaves this struct behind entirely (the page navigates away);
/// failure returns to idle with an error to display.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginState {
    pub submitting: bool,
    pub error: Option<String>,
}

impl LoginState {
    /// Enter `submitting`: clears any prior error and disables the form.
    pub fn begin_submit(&mut self) {
        self.error = None;
        self.submitting = true;
    }

    /// Back to idle with a visible error.
    pub fn fail(&mut self, message: String) {
        self.error = Some(message);
        self.submitting = false;
    }
}

/// Initial route after login, by fixed role priority:
/// VENDOR, then VENDOR_MANAGER, then ADMIN, else the generic dashboard.
/// The first match wins even when the user holds several roles.
pub fn dashboard_route(roles: &[Role]) -> &'static str {
    if roles.contains(&Role::Vendor) {
        "/vendor/dashboard"
    } else if roles.contains(&Role::VendorManager) {
        "/manager/dashboard"
    } else if roles.contains(&Role::Admin) {
        "/admin/dashboard"
    } else {
        "/dashboard"
    }
}
