//! Vendor table shared by both dashboards.
//!
//! Read-only by default; the manager dashboard passes an approve callback,
//! which adds an Actions column with a button on PENDING rows.

use leptos::prelude::*;

use crate::net::types::{RiskLevel, VendorRecord, VendorStatus};

#[component]
pub fn VendorTable(
    vendors: Vec<VendorRecord>,
    #[prop(optional, into)] on_approve: Option<Callback<u64>>,
) -> impl IntoView {
    let with_actions = on_approve.is_some();

    view! {
        <table class="vendors-table">
            <thead>
                <tr>
                    <th>"ID"</th>
                    <th>"Legal Name"</th>
                    <th>"Email"</th>
                    <th>"Status"</th>
                    <th>"Risk Score"</th>
                    <th>"Created"</th>
                    {with_actions.then(|| view! { <th>"Actions"</th> })}
                </tr>
            </thead>
            <tbody>
                {vendors
                    .into_iter()
                    .map(|vendor| {
                        let status_class = format!("status-badge {}", vendor.status.css_class());
                        let risk_class = format!(
                            "risk-score risk-{}",
                            RiskLevel::for_score(vendor.risk_score).label()
                        );
                        let created = vendor.created_date().to_owned();
                        let pending = vendor.status == VendorStatus::Pending;
                        let id = vendor.id;
                        view! {
                            <tr>
                                <td>{vendor.id}</td>
                                <td>{vendor.legal_name.clone()}</td>
                                <td>{vendor.email.clone()}</td>
                                <td>
                                    <span class=status_class>{vendor.status.label()}</span>
                                </td>
                                <td>
                                    <span class=risk_class>
                                        {format!("{}/100", vendor.risk_score)}
                                    </span>
                                </td>
                                <td>{created}</td>
                                {on_approve
                                    .map(|approve| {
                                        view! {
                                            <td>
                                                {pending
                                                    .then(|| {
                                                        view! {
                                                            <button
                                                                class="action-btn approve-btn"
                                                                on:click=move |_| approve.run(id)
                                                            >
                                                                "Approve"
                                                            </button>
                                                        }
                                                    })}
                                            </td>
                                        }
                                    })}
                            </tr>
                        }
                    })
                    .collect::<Vec<_>>()}
            </tbody>
        </table>
    }
}
