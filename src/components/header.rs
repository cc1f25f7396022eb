//! Dashboard header with the welcome line and logout button.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthContext;

#[component]
pub fn DashboardHeader(title: &'static str) -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let navigate = use_navigate();

    let welcome = auth
        .user()
        .map(|user| user.display_name().to_owned())
        .unwrap_or_default();

    let on_logout = move |_| {
        auth.logout();
        navigate("/login", NavigateOptions::default());
    };

    view! {
        <header class="dashboard-header">
            <div>
                <h1>{title}</h1>
                <p>"Welcome, " {welcome}</p>
            </div>
            <button class="logout-btn" on:click=on_logout>
                "Logout"
            </button>
        </header>
    }
}
