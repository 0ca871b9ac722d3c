//! Sidebar navigation with focus-session-aware link handling.

use crate::hooks::{ExitRequest, FocusHandle};
use crate::nav::NavPage;
use crate::{auth, Route};
use shared::{StoredUser, UserStatsResponse};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SidebarProps {
    pub active: NavPage,
    pub user: StoredUser,
    pub stats: Option<UserStatsResponse>,
    pub focus: FocusHandle,
}

#[function_component(Sidebar)]
pub fn sidebar(props: &SidebarProps) -> Html {
    let open = use_state(|| false);
    let navigator = use_navigator();

    // Every nav link goes through here: during an active session a link off
    // the allow-list is cancelled and the confirmation dialog takes over.
    let nav_click = |page: NavPage| -> Callback<MouseEvent> {
        let focus = props.focus.clone();
        let navigator = navigator.clone();
        let open = open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            open.set(false);
            if focus.in_session() && !page.allowed_during_focus() {
                focus.request_exit.emit(ExitRequest {
                    target: Some(page.route()),
                    logout: false,
                });
            } else if let Some(navigator) = navigator.as_ref() {
                navigator.push(&page.route());
            }
        })
    };

    let render_item = |page: NavPage| -> Html {
        let class = classes!("nav-item", (page == props.active).then_some("active"));
        html! {
            <a href={page.route().to_path()} class={class} onclick={nav_click(page)}>
                <i class={classes!("bi", page.icon())}></i>
                <span>{ page.label() }</span>
            </a>
        }
    };

    let on_logout = {
        let focus = props.focus.clone();
        Callback::from(move |_: MouseEvent| {
            if focus.in_session() {
                focus.request_exit.emit(ExitRequest {
                    target: None,
                    logout: true,
                });
            } else {
                auth::logout();
            }
        })
    };

    let toggle_menu = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(!*open))
    };
    let close_menu = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(false))
    };

    let level = props.stats.as_ref().map(|s| s.level).unwrap_or(1);

    html! {
        <>
            <button class="mobile-menu-btn" onclick={toggle_menu}>
                <i class="bi bi-list"></i>
            </button>
            <div
                class={classes!("sidebar-overlay", open.then_some("active"))}
                onclick={close_menu}
            ></div>
            <aside class={classes!("sidebar", open.then_some("open"))}>
                <a href={Route::Dashboard.to_path()} class="sidebar-logo" onclick={nav_click(NavPage::Dashboard)}>
                    <i class="bi bi-mortarboard-fill"></i>
                    <h1>{ "Study Buddy" }</h1>
                </a>

                <nav class="sidebar-nav">
                    <div class="nav-section-title">{ "Study" }</div>
                    { for NavPage::STUDY.iter().map(|&page| render_item(page)) }

                    <div class="nav-section-title">{ "Account" }</div>
                    { for NavPage::ACCOUNT.iter().map(|&page| render_item(page)) }
                </nav>

                <div class="sidebar-footer">
                    <div class="user-info">
                        <div class="user-avatar">{ props.user.initials() }</div>
                        <div class="user-details">
                            <div class="user-name">{ props.user.display_name() }</div>
                            <div class="user-level">{ format!("Level {level}") }</div>
                        </div>
                    </div>
                    <button class="btn btn-outline logout-btn" onclick={on_logout}>
                        <i class="bi bi-box-arrow-right"></i>
                        { " Logout" }
                    </button>
                </div>
            </aside>
        </>
    }
}
