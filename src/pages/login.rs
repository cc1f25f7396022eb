//! Login page: credentials form, error display, role-based redirect.
//!
//! Submit walks `idle -> submitting`; a failure returns to idle with the
//! server's message (or the fixed fallback) shown inline, a success stores
//! the session and navigates to the dashboard for the user's highest
//! priority role.

use leptos::prelude::*;
#[cfg(feature = "csr")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::http::ApiClient;
use crate::state::auth::AuthContext;
#[cfg(feature = "csr")]
use crate::state::login::{LOGIN_FALLBACK_ERROR, dashboard_route};
use crate::state::login::LoginState;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let client = expect_context::<ApiClient>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let state = RwSignal::new(LoginState::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if state.get().submitting {
            return;
        }
        state.update(LoginState::begin_submit);

        #[cfg(feature = "csr")]
        {
            let client = client.clone();
            let navigate = navigate.clone();
            let username = username.get();
            let password = password.get();
            leptos::task::spawn_local(async move {
                match crate::net::api::login(&client, &username, &password).await {
                    Ok(resp) => {
                        auth.login(&resp.user, &resp.token);
                        navigate(dashboard_route(&resp.user.roles), NavigateOptions::default());
                    }
                    Err(err) => {
                        let message = err
                            .server_message()
                            .map_or_else(|| LOGIN_FALLBACK_ERROR.to_owned(), str::to_owned);
                        state.update(|s| s.fail(message));
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&auth, &client, &navigate);
        }
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Vendor Compliance System"</h1>
                <h2>"Login"</h2>

                {move || {
                    state.get().error.map(|message| {
                        view! { <div class="error-message">{message}</div> }
                    })
                }}

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="username">"Username"</label>
                        <input
                            id="username"
                            type="text"
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                            disabled=move || state.get().submitting
                            required
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <input
                            id="password"
                            type="password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                            disabled=move || state.get().submitting
                            required
                        />
                    </div>

                    <button type="submit" disabled=move || state.get().submitting>
                        {move || if state.get().submitting { "Logging in..." } else { "Login" }}
                    </button>
                </form>

                <div class="demo-credentials">
                    <p>"Demo Credentials:"</p>
                    <p>"Vendor: vendor1 / Password1!"</p>
                    <p>"Manager: manager1 / Password1!"</p>
                </div>
            </div>
        </div>
    }
}
