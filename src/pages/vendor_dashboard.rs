//! Vendor self-service dashboard: read-only table of the caller's vendors.

use leptos::prelude::*;

use crate::components::header::DashboardHeader;
use crate::components::vendor_table::VendorTable;
use crate::net::http::ApiClient;
use crate::state::vendors::VendorsState;

#[component]
pub fn VendorDashboard() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let vendors = RwSignal::new(VendorsState::default());

    // One fetch on mount; a failure shows inline and is not retried.
    Effect::new({
        let client = client.clone();
        move || {
            let mut seq = 0;
            vendors.update(|s| seq = s.begin_fetch());

            #[cfg(feature = "csr")]
            {
                let client = client.clone();
                leptos::task::spawn_local(async move {
                    let result = crate::net::api::fetch_vendors(&client, "").await.map_err(|err| {
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
                let _ = (&client, seq);
            }
        }
    });

    view! {
        <div class="dashboard-container">
            <DashboardHeader title="Vendor Dashboard"/>

            <main class="dashboard-content">
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
                                <h2>"Your Vendors"</h2>
                                {if state.items.is_empty() {
                                    view! { <p class="no-data">"No vendors found"</p> }.into_any()
                                } else {
                                    view! { <VendorTable vendors=state.items/> }.into_any()
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
