//! Hook fetching the display stats once per layout mount.
//!
//! The sidebar level badge, the topbar chips and the dashboard cards all
//! share one response. A failed fetch is logged and the placeholders keep
//! their defaults; there is no retry.

use crate::api::{self, ApiError};
use shared::UserStatsResponse;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[hook]
pub fn use_stats(on_unauthorized: Callback<()>) -> Option<UserStatsResponse> {
    let stats = use_state(|| None::<UserStatsResponse>);

    {
        let stats = stats.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match api::fetch_stats().await {
                    Ok(data) => stats.set(Some(data)),
                    Err(ApiError::Unauthorized) => on_unauthorized.emit(()),
                    Err(err) => log::warn!("failed to fetch stats: {err}"),
                }
            });
            || ()
        });
    }

    (*stats).clone()
}
