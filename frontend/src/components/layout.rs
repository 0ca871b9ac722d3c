//! Page chrome shared by every protected view.
//!
//! Composition order: verify the session, then sidebar, then the optional
//! topbar, then the page content. The layout owns the session guard and the
//! single ticking focus hook for the document; pages reach the focus handle
//! through [`AppContext`].

use crate::components::{ExitDialog, FocusBanner, SessionExpiredModal, Sidebar, Toast, Topbar};
use crate::hooks::{use_focus_session, use_session_guard, use_stats, FocusHandle};
use crate::{auth, nav::NavPage};
use shared::UserStatsResponse;
use yew::prelude::*;

/// Context shared with every page under the layout.
#[derive(Clone, PartialEq)]
pub struct AppContext {
    pub focus: FocusHandle,
    pub stats: Option<UserStatsResponse>,
}

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub active: NavPage,
    #[prop_or_default]
    pub title: Option<AttrValue>,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    let guard = use_session_guard();
    let focus = use_focus_session();
    let stats = use_stats(guard.mark_expired.clone());

    // Page-load gate: protected views require a live token. Checked once at
    // mount; a token that goes stale later is the guard's business and gets
    // the modal, not a redirect out from under the page.
    let signed_in = *use_state(auth::session_is_valid);
    use_effect_with(signed_in, |&ok| {
        if !ok {
            auth::enforce_signed_in();
        }
        || ()
    });
    if !signed_in {
        return html! {};
    }

    let user = auth::current_user().unwrap_or_default();
    let banner_visible = focus.handle.in_session() && props.active != NavPage::Focus;

    let context = AppContext {
        focus: focus.handle.clone(),
        stats: stats.clone(),
    };

    html! {
        <ContextProvider<AppContext> context={context}>
            <div class={classes!("app-shell", banner_visible.then_some("focus-mode-active"))}>
                if banner_visible {
                    if let Some(state) = focus.handle.state.clone() {
                        <FocusBanner state={state} />
                    }
                }
                <Sidebar
                    active={props.active}
                    user={user}
                    stats={stats.clone()}
                    focus={focus.handle.clone()}
                />
                <main class="main-content">
                    if let Some(title) = props.title.clone() {
                        <Topbar {title} subtitle={props.subtitle.clone()} {stats} />
                    }
                    { props.children.clone() }
                </main>
                if focus.pending_exit.is_some() {
                    <ExitDialog
                        state={focus.handle.state.clone()}
                        on_confirm={focus.confirm_exit.clone()}
                        on_cancel={focus.cancel_exit.clone()}
                    />
                }
                if focus.completion_notice {
                    <Toast
                        message="Focus session complete! Great work."
                        on_close={focus.dismiss_notice.clone()}
                    />
                }
                if guard.expired {
                    <SessionExpiredModal />
                }
            </div>
        </ContextProvider<AppContext>>
    }
}
