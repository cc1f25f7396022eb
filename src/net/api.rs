//! Typed wrappers over the consumed REST endpoints.
//!
//! One function per endpoint; all of them go through [`ApiClient`] so the
//! base address and bearer handling live in one place. Callers decide how
//! to surface failures.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::http::{ApiClient, ApiError};
use super::types::{ApprovalRequest, LoginRequest, LoginResponse, VendorRecord};

/// `POST /auth/login`. The one call that never carries a bearer token.
///
/// # Errors
///
/// Returns [`ApiError`] on transport failure or a non-2xx response
/// (typically 401 with a server-provided message).
pub async fn login(
    client: &ApiClient,
    username: &str,
    password: &str,
) -> Result<LoginResponse, ApiError> {
    let body = LoginRequest {
        username: username.to_owned(),
        password: password.to_owned(),
    };
    client.post_json_unauthed("/auth/login", &body).await
}

/// Path for the vendor list, optionally filtered by status.
/// An empty filter means "all vendors".
pub fn vendors_path(status: &str) -> String {
    if status.is_empty() {
        "/vendors".to_owned()
    } else {
        format!("/vendors?status={status}")
    }
}

/// Path for the approval command on one vendor.
pub fn approve_path(id: u64) -> String {
    format!("/vendors/{id}/approve")
}

/// `GET /vendors` (or `/vendors?status=X`).
///
/// The server scopes the result to the caller: vendors see their own
/// records, managers see everything matching the filter.
///
/// # Errors
///
/// Returns [`ApiError`] on transport failure or a non-2xx response.
pub async fn fetch_vendors(client: &ApiClient, status: &str) -> Result<Vec<VendorRecord>, ApiError> {
    client.get_json(&vendors_path(status)).await
}

/// `PATCH /vendors/{id}/approve`.
///
/// The response body (the updated record) is deliberately discarded; the
/// caller applies an optimistic local rewrite after success instead.
///
/// # Errors
///
/// Returns [`ApiError`] on transport failure or a non-2xx response.
pub async fn approve_vendor(client: &ApiClient, id: u64, comments: &str) -> Result<(), ApiError> {
    let body = ApprovalRequest {
        comments: comments.to_owned(),
    };
    let _updated: serde_json::Value = client.patch_json(&approve_path(id), &body).await?;
    Ok(())
}
