//! Transient notification that dismisses itself after a few seconds.

use gloo::timers::callback::Timeout;
use yew::prelude::*;

const DISMISS_AFTER_MS: u32 = 5_000;

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub message: AttrValue,
    pub on_close: Callback<()>,
}

#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    {
        let on_close = props.on_close.clone();
        use_effect_with((), move |_| {
            let timeout = Timeout::new(DISMISS_AFTER_MS, move || on_close.emit(()));
            move || drop(timeout)
        });
    }

    let on_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class="toast-notification" onclick={on_click}>
            <i class="bi bi-check-circle"></i>
            <span>{ props.message.clone() }</span>
        </div>
    }
}
