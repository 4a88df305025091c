use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::{add_sponsor::AddSponsor, home::Home, not_found::NotFound};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/sponsors/new")]
    AddSponsor,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <Home /> },
        Route::AddSponsor => html! { <AddSponsor /> },
        Route::NotFound => html! { <NotFound /> },
    }
}
