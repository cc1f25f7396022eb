//! Vendor list state shared by both dashboards.
//!
//! DESIGN
//! ======
//! Fetches are sequenced: `begin_fetch` hands out a monotonically
//! increasing token and `apply_fetch` ignores any response that does not
//! carry the latest one. A manager switching the status filter while an
//! older fetch is still in flight can therefore never have the stale
//! response overwrite the newer list, whatever order they arrive in.
//!
//! Approval is an optimistic rewrite applied only after the server
//! confirmed success; a failed approval leaves the list untouched.

#[cfg(test)]
#[path = "vendors_test.rs"]
mod vendors_test;

use crate::net::types::{VendorRecord, VendorStatus};

/// State behind a vendor table: rows, loading flag, inline error, and the
/// fetch sequence counter.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VendorsState {
    pub items: Vec<VendorRecord>,
    pub loading: bool,
    pub error: Option<String>,
    seq: u64,
}

impl VendorsState {
    /// Start a fetch: bumps the sequence, sets the loading flag, and
    /// returns the token the eventual response must present.
    pub fn begin_fetch(&mut self) -> u64 {
        self.seq += 1;
        self.loading = true;
        self.seq
    }

    /// Apply a fetch outcome. Returns `false` (and changes nothing) when
    /// a newer fetch has started since `seq` was issued.
    pub fn apply_fetch(&mut self, seq: u64, result: Result<Vec<VendorRecord>, String>) -> bool {
        if seq != self.seq {
            return false;
        }
        self.loading = false;
        match result {
            Ok(items) => {
                self.items = items;
                self.error = None;
            }
            Err(message) => self.error = Some(message),
        }
        true
    }

    /// Apply the outcome of an approval call. On success the matching
    /// PENDING record is optimistically rewritten; on failure nothing
    /// changes and the alert message to raise is returned.
    pub fn apply_approval(&mut self, id: u64, result: Result<(), String>) -> Option<String> {
        match result {
            Ok(()) => {
                self.approve_locally(id);
                None
            }
            Err(message) => Some(format!("Failed to approve vendor: {message}")),
        }
    }

    /// Optimistically mark one PENDING vendor APPROVED after the server
    /// confirmed the approval. Returns whether a record changed; all other
    /// rows are left as they were.
    pub fn approve_locally(&mut self, id: u64) -> bool {
        match self.items.iter_mut().find(|v| v.id == id) {
            Some(vendor) if vendor.status == VendorStatus::Pending => {
                vendor.status = VendorStatus::Approved;
                true
            }
            _ => false,
        }
    }
}
