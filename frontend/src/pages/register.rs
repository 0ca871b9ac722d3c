//! Public registration view. Success routes back to login with a one-shot
//! notice, the same channel guard redirects use.

use crate::api::{self, error_message};
use crate::{storage, Route};
use shared::{keys, RegisterRequest};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(RegisterPage)]
pub fn register_page() -> Html {
    let first_name = use_state(String::new);
    let last_name = use_state(String::new);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| None::<String>);
    let busy = use_state(|| false);
    let navigator = use_navigator();

    let bind = |state: &UseStateHandle<String>| {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                state.set(input.value());
            }
        })
    };

    let on_first = bind(&first_name);
    let on_last = bind(&last_name);
    let on_email = bind(&email);
    let on_password = bind(&password);

    let onsubmit = {
        let first_name = first_name.clone();
        let last_name = last_name.clone();
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
            let request = RegisterRequest {
                first_name: (*first_name).clone(),
                last_name: (*last_name).clone(),
                email: (*email).clone(),
                password: (*password).clone(),
            };
            let error = error.clone();
            let busy = busy.clone();
            let navigator = navigator.clone();
            busy.set(true);
            spawn_local(async move {
                match api::register(&request).await {
                    Ok(resp) if resp.success => {
                        storage::set_notice(
                            keys::AUTH_NOTICE,
                            error_message("REGISTRATION_SUCCESS"),
                        );
                        if let Some(navigator) = navigator.as_ref() {
                            navigator.push(&Route::Login);
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
                    <h1>{ "Create your account" }</h1>
                    <p>{ "Study smarter, one session at a time" }</p>
                </div>

                if let Some(error) = (*error).clone() {
                    <div class="alert alert-danger">
                        <i class="bi bi-exclamation-circle"></i>
                        <span>{ error }</span>
                    </div>
                }

                <form {onsubmit}>
                    <div class="form-row">
                        <div>
                            <label class="form-label" for="first-name">{ "First name" }</label>
                            <input
                                id="first-name"
                                type="text"
                                class="form-input"
                                value={(*first_name).clone()}
                                oninput={on_first}
                                required=true
                            />
                        </div>
                        <div>
                            <label class="form-label" for="last-name">{ "Last name" }</label>
                            <input
                                id="last-name"
                                type="text"
                                class="form-input"
                                value={(*last_name).clone()}
                                oninput={on_last}
                                required=true
                            />
                        </div>
                    </div>
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
                        minlength="8"
                        required=true
                    />
                    <button type="submit" class="btn btn-primary auth-submit" disabled={*busy}>
                        { if *busy { "Creating account..." } else { "Create account" } }
                    </button>
                </form>

                <p class="auth-switch">
                    { "Already registered? " }
                    <Link<Route> to={Route::Login}>{ "Sign in" }</Link<Route>>
                </p>
            </div>
        </div>
    }
}
