//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::route_guard::{RedirectToLogin, RequireRole};
use crate::net::http::ApiClient;
use crate::net::types::Role;
use crate::pages::{
    login::LoginPage, manager_dashboard::ManagerDashboard, unauthorized::UnauthorizedPage,
    vendor_dashboard::VendorDashboard,
};
use crate::state::auth::AuthContext;

/// Root component: owns the session/auth context and the API client, and
/// wires up the route table. `/` and unmatched paths land on the login
/// view; both dashboards sit behind the role guard.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(AuthContext::new());
    provide_context(ApiClient::default());

    view! {
        <Title text="Vendor Compliance System"/>

        <Router>
            <Routes fallback=|| view! { <RedirectToLogin/> }>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route
                    path=(StaticSegment("vendor"), StaticSegment("dashboard"))
                    view=|| {
                        view! {
                            <RequireRole role=Role::Vendor>
                                <VendorDashboard/>
                            </RequireRole>
                        }
                    }
                />
                <Route
                    path=(StaticSegment("manager"), StaticSegment("dashboard"))
                    view=|| {
                        view! {
                            <RequireRole role=Role::VendorManager>
                                <ManagerDashboard/>
                            </RequireRole>
                        }
                    }
                />
                <Route path=StaticSegment("unauthorized") view=UnauthorizedPage/>
                <Route path=StaticSegment("") view=RedirectToLogin/>
            </Routes>
        </Router>
    }
}
