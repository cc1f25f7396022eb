#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A capability tag carried by a user account.
///
/// The server sends roles as plain strings; the three roles this client
/// routes on get their own variants, anything else is preserved verbatim
/// in `Other` so a profile with unknown roles still round-trips.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "VENDOR")]
    Vendor,
    #[serde(rename = "VENDOR_MANAGER")]
    VendorManager,
    #[serde(rename = "ADMIN")]
    Admin,
    #[serde(untagged)]
    Other(String),
}

/// The authenticated identity returned by the login endpoint and persisted
/// in the session store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub username: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub roles: Vec<Role>,
}

impl UserProfile {
    /// Display name for dashboard headers: full name when present,
    /// otherwise the username.
    pub fn display_name(&self) -> &str {
        self.full_name.as_deref().unwrap_or(&self.username)
    }
}

/// Credentials payload for `POST /auth/login`.
#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Success body of `POST /auth/login`.
#[derive(Clone, Debug, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserProfile,
}

/// Body of `PATCH /vendors/{id}/approve`.
#[derive(Clone, Debug, Serialize)]
pub struct ApprovalRequest {
    pub comments: String,
}

/// Vendor lifecycle status as reported by the server.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum VendorStatus {
    Pending,
    Approved,
    Rejected,
}

impl VendorStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Approved => "APPROVED",
            Self::Rejected => "REJECTED",
        }
    }

    /// CSS modifier class for the status badge.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Pending => "status-pending",
            Self::Approved => "status-approved",
            Self::Rejected => "status-rejected",
        }
    }
}

/// A vendor row as returned by `GET /vendors`.
///
/// Read-only on this side; the only local mutation is the optimistic
/// status rewrite after a confirmed approval.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorRecord {
    pub id: u64,
    pub legal_name: String,
    pub email: String,
    pub status: VendorStatus,
    pub risk_score: u8,
    pub created_at: String,
}

impl VendorRecord {
    /// Date part of the ISO-8601 `created_at` timestamp, for display.
    pub fn created_date(&self) -> &str {
        self.created_at.split('T').next().unwrap_or(&self.created_at)
    }
}

/// Display-only risk banding over the 0–100 risk score.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Band a risk score: 0–20 low, 21–50 medium, 51+ high.
    pub fn for_score(score: u8) -> Self {
        if score <= 20 {
            Self::Low
        } else if score <= 50 {
            Self::Medium
        } else {
            Self::High
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}
