use super::*;

#[test]
fn vendors_path_without_filter() {
    assert_eq!(vendors_path(""), "/vendors");
}

#[test]
fn vendors_path_with_status_filter() {
    assert_eq!(vendors_path("PENDING"), "/vendors?status=PENDING");
    assert_eq!(vendors_path("REJECTED"), "/vendors?status=REJECTED");
}

#[test]
fn approve_path_embeds_vendor_id() {
    assert_eq!(approve_path(7), "/vendors/7/approve");
}
