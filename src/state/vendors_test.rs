use super::*;

fn vendor(id: u64, status: VendorStatus) -> VendorRecord {
    VendorRecord {
        id,
        legal_name: format!("Vendor {id}"),
        email: format!("vendor{id}@example.com"),
        status,
        risk_score: 30,
        created_at: "2026-02-01T00:00:00Z".to_owned(),
    }
}

// =============================================================
// Fetch sequencing
// =============================================================

#[test]
fn begin_fetch_sets_loading_and_bumps_seq() {
    let mut state = VendorsState::default();
    let first = state.begin_fetch();
    assert!(state.loading);
    let second = state.begin_fetch();
    assert!(second > first);
}

#[test]
fn apply_fetch_stores_items_and_clears_loading() {
    let mut state = VendorsState::default();
    let seq = state.begin_fetch();

    let applied = state.apply_fetch(seq, Ok(vec![vendor(1, VendorStatus::Pending)]));
    assert!(applied);
    assert!(!state.loading);
    assert!(state.error.is_none());
    assert_eq!(state.items.len(), 1);
}

#[test]
fn apply_fetch_failure_keeps_items_sets_error() {
    let mut state = VendorsState::default();
    let seq = state.begin_fetch();
    state.apply_fetch(seq, Ok(vec![vendor(1, VendorStatus::Approved)]));

    let seq = state.begin_fetch();
    let applied = state.apply_fetch(seq, Err("Failed to load vendors".to_owned()));
    assert!(applied);
    assert!(!state.loading);
    assert_eq!(state.error.as_deref(), Some("Failed to load vendors"));
    // The previous list stays on screen.
    assert_eq!(state.items.len(), 1);
}

#[test]
fn stale_response_is_discarded() {
    let mut state = VendorsState::default();
    let old_seq = state.begin_fetch();
    let new_seq = state.begin_fetch();

    // Newer fetch resolves first.
    assert!(state.apply_fetch(new_seq, Ok(vec![vendor(2, VendorStatus::Pending)])));

    // The older response arrives late and must not overwrite anything.
    let applied = state.apply_fetch(old_seq, Ok(vec![vendor(1, VendorStatus::Pending)]));
    assert!(!applied);
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].id, 2);
}

#[test]
fn stale_error_does_not_clobber_fresh_list() {
    let mut state = VendorsState::default();
    let old_seq = state.begin_fetch();
    let new_seq = state.begin_fetch();

    assert!(state.apply_fetch(new_seq, Ok(vec![vendor(2, VendorStatus::Pending)])));
    assert!(!state.apply_fetch(old_seq, Err("timeout".to_owned())));
    assert!(state.error.is_none());
}

#[test]
fn success_clears_previous_error() {
    let mut state = VendorsState::default();
    let seq = state.begin_fetch();
    state.apply_fetch(seq, Err("Failed to load vendors".to_owned()));

    let seq = state.begin_fetch();
    state.apply_fetch(seq, Ok(vec![]));
    assert!(state.error.is_none());
}

// =============================================================
// Optimistic approval
// =============================================================

#[test]
fn approve_rewrites_only_the_matching_pending_record() {
    let mut state = VendorsState::default();
    let seq = state.begin_fetch();
    state.apply_fetch(
        seq,
        Ok(vec![
            vendor(5, VendorStatus::Approved),
            vendor(7, VendorStatus::Pending),
            vendor(9, VendorStatus::Pending),
        ]),
    );

    assert!(state.approve_locally(7));
    assert_eq!(state.items[0].status, VendorStatus::Approved);
    assert_eq!(state.items[1].status, VendorStatus::Approved);
    assert_eq!(state.items[2].status, VendorStatus::Pending);
    // Everything else about the rewritten row is untouched.
    assert_eq!(state.items[1].legal_name, "Vendor 7");
    assert_eq!(state.items[1].risk_score, 30);
}

#[test]
fn approve_unknown_id_changes_nothing() {
    let mut state = VendorsState::default();
    let seq = state.begin_fetch();
    state.apply_fetch(seq, Ok(vec![vendor(7, VendorStatus::Pending)]));

    assert!(!state.approve_locally(8));
    assert_eq!(state.items[0].status, VendorStatus::Pending);
}

#[test]
fn confirmed_approval_rewrites_the_record_without_alert() {
    let mut state = VendorsState::default();
    let seq = state.begin_fetch();
    state.apply_fetch(seq, Ok(vec![vendor(7, VendorStatus::Pending)]));

    let alert = state.apply_approval(7, Ok(()));
    assert!(alert.is_none());
    assert_eq!(state.items[0].status, VendorStatus::Approved);
}

#[test]
fn failed_approval_leaves_every_record_untouched_and_alerts() {
    let mut state = VendorsState::default();
    let seq = state.begin_fetch();
    state.apply_fetch(
        seq,
        Ok(vec![
            vendor(5, VendorStatus::Approved),
            vendor(7, VendorStatus::Pending),
        ]),
    );
    let before = state.items.clone();

    let alert = state.apply_approval(7, Err("Vendor already approved".to_owned()));
    assert_eq!(
        alert.as_deref(),
        Some("Failed to approve vendor: Vendor already approved")
    );
    // The record stays PENDING and nothing else moved.
    assert_eq!(state.items, before);
    assert_eq!(state.items[1].status, VendorStatus::Pending);
}

#[test]
fn approve_non_pending_record_is_a_no_op() {
    let mut state = VendorsState::default();
    let seq = state.begin_fetch();
    state.apply_fetch(seq, Ok(vec![vendor(7, VendorStatus::Rejected)]));

    assert!(!state.approve_locally(7));
    assert_eq!(state.items[0].status, VendorStatus::Rejected);
}
