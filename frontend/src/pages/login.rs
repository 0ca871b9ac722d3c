//! Public login view.
//!
//! Consumes the one-shot notice a guard redirect may have left behind and
//! shows it once. On success the token and display record are stored and
//! the app moves to the dashboard.

use crate::api::{self, error_message};
use crate::{auth, Route};
use shared::{LoginRequest, StoredUser};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let email = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| None::<String>);
    let notice = use_state(auth::take_auth_notice);
    let busy = use_state(|| false);
    let navigator = use_navigator();

    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                email.set(input.value());
            }
        })
    };
    let on_password = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                password.set(input.value());
            }
        })
    };

    let onsubmit = {
        let email = email.clone();
        let password = password.clone();
        let error = error.clone();
        let busy = busy.clone();
        let navigator = navigator.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *busy {
                return;
            }
            let request = LoginRequest {
                email: (*email).clone(),
                password: (*password).clone(),
            };
            let error = error.clone();
            let busy = busy.clone();
            let navigator = navigator.clone();
            busy.set(true);
            spawn_local(async move {
                match api::login(&request).await {
                    Ok(resp) if resp.success && resp.token.is_some() => {
                        let user = StoredUser {
                            user_id: resp.user_id,
                            first_name: resp.first_name,
                            last_name: resp.last_name,
                            email: resp.email,
                        };
                        if let Some(token) = resp.token {
                            auth::store_session(&token, &user);
                        }
                        if let Some(navigator) = navigator.as_ref() {
                            navigator.push(&Route::Dashboard);
                        }
                    }
                    Ok(resp) => {
                        let code = resp.message.unwrap_or_default();
                        error.set(Some(error_message(&code).to_string()));
                        busy.set(false);
                    }
                    Err(err) => {
                        error.set(Some(err.user_message().to_string()));
                        busy.set(false);
                    }
                }
            });
        })
    };

    html! {
        <div class="auth-page">
            <div class="auth-card">
                <div class="auth-header">
                    <i class="bi bi-mortarboard-fill auth-logo"></i>
                    <h1>{ "Study Buddy" }</h1>
                    <p>{ "Sign in to keep your streak alive" }</p>
                </div>

                if let Some(notice) = (*notice).clone() {
                    <div class="alert alert-warning">
                        <i class="bi bi-exclamation-triangle"></i>
                        <span>{ notice }</span>
                    </div>
                }
                if let Some(error) = (*error).clone() {
                    <div class="alert alert-danger">
                        <i class="bi bi-exclamation-circle"></i>
                        <span>{ error }</span>
                    </div>
                }

                <form {onsubmit}>
                    <label class="form-label" for="email">{ "Email" }</label>
                    <input
                        id="email"
                        type="email"
                        class="form-input"
                        value={(*email).clone()}
                        oninput={on_email}
                        required=true
                    />
                    <label class="form-label" for="password">{ "Password" }</label>
                    <input
                        id="password"
                        type="password"
                        class="form-input"
                        value={(*password).clone()}
                        oninput={on_password}
                        required=true
                    />
                    <button type="submit" class="btn btn-primary auth-submit" disabled={*busy}>
                        { if *busy { "Signing in..." } else { "Sign in" } }
                    </button>
                </form>

                <p class="auth-switch">
                    { "New here? " }
                    <Link<Route> to={Route::Register}>{ "Create an account" }</Link<Route>>
                </p>
            </div>
        </div>
    }
}
