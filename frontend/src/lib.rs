mod api;
mod auth;
mod components;
mod hooks;
mod nav;
mod pages;
mod storage;
pub mod utils;

use pages::{
    dashboard::DashboardPage, explanation::ExplanationPage, flashcards::FlashcardsPage,
    focus::FocusPage, leaderboard::LeaderboardPage, login::LoginPage, profile::ProfilePage,
    quiz::QuizPage, register::RegisterPage,
};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[at("/dashboard")]
    Dashboard,
    #[at("/explanation")]
    Explanation,
    #[at("/quiz")]
    Quiz,
    #[at("/flashcards")]
    Flashcards,
    #[at("/focus")]
    Focus,
    #[at("/profile")]
    Profile,
    #[at("/leaderboard")]
    Leaderboard,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home | Route::Dashboard => html! { <DashboardPage /> },
        Route::Login => html! { <LoginPage /> },
        Route::Register => html! { <RegisterPage /> },
        Route::Explanation => html! { <ExplanationPage /> },
        Route::Quiz => html! { <QuizPage /> },
        Route::Flashcards => html! { <FlashcardsPage /> },
        Route::Focus => html! { <FocusPage /> },
        Route::Profile => html! { <ProfilePage /> },
        Route::Leaderboard => html! { <LeaderboardPage /> },
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<App>::new().render();
}
