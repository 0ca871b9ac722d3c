//! Blocking modal shown when the token expires mid-session.
//!
//! Deliberately not dismissible: the only way forward is back through the
//! login view. Shown instead of an immediate redirect so in-progress page
//! state is not yanked away without explanation.

use crate::auth;
use yew::prelude::*;

#[function_component(SessionExpiredModal)]
pub fn session_expired_modal() -> Html {
    let on_relogin = Callback::from(|_: MouseEvent| auth::logout());

    html! {
        <div class="modal-backdrop">
            <div class="modal-dialog">
                <i class="bi bi-clock-history modal-icon"></i>
                <h4>{ "Session expired" }</h4>
                <p class="modal-text">{ "Your session has expired for security reasons." }</p>
                <button class="btn btn-primary" onclick={on_relogin}>
                    <i class="bi bi-box-arrow-in-right"></i>
                    { " Sign in again" }
                </button>
            </div>
        </div>
    }
}
