mod adapter;
mod components;
mod context;
mod pages;
mod router;
mod services;

use yew::prelude::*;
use yew_router::BrowserRouter;

use crate::context::AppContext;
use crate::router::{switch, Route};

#[function_component(App)]
fn app() -> Html {
    // Configuration and the privilege flag are read once per page load
    let context = use_memo((), |_| AppContext::load());

    html! {
        <ContextProvider<AppContext> context={(*context).clone()}>
            <BrowserRouter>
                <div id="app">
                    <components::header::Header />
                    <yew_router::Switch<Route> render={switch} />
                </div>
            </BrowserRouter>
        </ContextProvider<AppContext>>
    }
}

fn main() {
    // Initialize tracing
    tracing_wasm::set_as_global_default();

    yew::Renderer::<App>::new().render();
}
