//! Access-denied page for authenticated users lacking the required role.

use leptos::prelude::*;

#[component]
pub fn UnauthorizedPage() -> impl IntoView {
    view! {
        <div class="error-page">
            <h1>"Access Denied"</h1>
            <p>"You do not have permission to access this resource."</p>
            <a href="/login">"Return to Login"</a>
        </div>
    }
}
