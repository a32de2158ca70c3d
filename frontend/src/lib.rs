//! Bluebox login screen.
//!
//! The page itself is thin: session handling lives in [`shared::AuthGate`],
//! this crate supplies the Firebase bridge, the router and the markup.

use yew::prelude::*;
use yew_router::prelude::*;

pub mod components;
pub mod config;
pub mod firebase;
pub mod navigation;
pub mod pages;

#[derive(Clone, Debug, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Login,
    #[at("/chat")]
    Chat,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Login => html! { <pages::login::Login /> },
        Route::Chat => html! { <pages::chat::Chat /> },
        Route::NotFound => html! { <Redirect<Route> to={Route::Login} /> },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}
