//! Manager oversight dashboard: filterable vendor list with approval.
//!
//! Changing the status filter starts a new sequenced fetch; a response
//! from a superseded fetch is discarded by `VendorsState`, so late
//! arrivals never overwrite the list for the current filter. Approval
//! failures raise a blocking alert and leave the list untouched.

use leptos::prelude::*;

use crate::components::header::DashboardHeader;
use crate::components::vendor_table::VendorTable;
use crate::net::http::ApiClient;
use crate::state::vendors::VendorsState;

#[component]
pub fn ManagerDashboard() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let vendors = RwSignal::new(VendorsState::default());
    let filter = RwSignal::new(String::new());

    // Fetch on mount and again whenever the filter changes.
    Effect::new({
        let client = client.clone();
        move || {
            let status = filter.get();
            let mut seq = 0;
            vendors.update(|s| seq = s.begin_fetch());

            #[cfg(feature = "csr")]
            {
                let client = client.clone();
                leptos::task::spawn_local(async move {
                    let result =
                        crate::net::api::fetch_vendors(&client, &status).await.map_err(|err| {
                            leptos::logging::warn!("vendor list fetch failed: {err}");
                            "Failed to load vendors".to_owned()
                        });
                    vendors.update(|s| {
                        s.apply_fetch(seq, result);
                    });
                });
            }
            #[cfg(not(feature = "csr"))]
            {
                let _ = (&client, status, seq);
            }
        }
    });

    let on_approve = Callback::new({
        let client = client.clone();
        move |id: u64| {
            #[cfg(feature = "csr")]
            {
                let client = client.clone();
                leptos::task::spawn_local(async move {
                    let result = crate::net::api::approve_vendor(&client, id, "Approved by manager")
                        .await
                        .map_err(|err| err.message());
                    let mut alert_message = None;
                    vendors.update(|s| alert_message = s.apply_approval(id, result));
                    if let Some(message) = alert_message {
                        alert(&message);
                    }
                });
            }
            #[cfg(not(feature = "csr"))]
            {
                let _ = (&client, id);
            }
        }
    });

    view! {
        <div class="dashboard-container">
            <DashboardHeader title="Manager Dashboard"/>

            <main class="dashboard-content">
                <div class="controls">
                    <label for="status-filter">"Filter by Status:"</label>
                    <select
                        id="status-filter"
                        prop:value=move || filter.get()
                        on:change=move |ev| filter.set(event_target_value(&ev))
                    >
                        <option value="">"All"</option>
                        <option value="PENDING">"Pending"</option>
                        <option value="APPROVED">"Approved"</option>
                        <option value="REJECTED">"Rejected"</option>
                    </select>
                </div>

                {move || {
                    vendors.get().error.map(|message| {
                        view! { <div class="error-message">{message}</div> }
                    })
                }}

                {move || {
                    let state = vendors.get();
                    if state.loading {
                        view! { <div class="loading">"Loading vendors..."</div> }.into_any()
                    } else {
                        view! {
                            <div class="vendors-grid">
                                <h2>"Vendor Management"</h2>
                                {if state.items.is_empty() {
                                    view! { <p class="no-data">"No vendors found"</p> }.into_any()
                                } else {
                                    view! {
                                        <VendorTable vendors=state.items on_approve=on_approve/>
                                    }
                                        .into_any()
                                }}
                            </div>
                        }
                        .into_any()
                    }
                }}
            </main>
        </div>
    }
}

/// Blocking browser alert for approval failures.
#[cfg(feature = "csr")]
fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
