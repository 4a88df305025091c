use shared::api::CREATE_TEST_SPONSOR_PATH;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::context::use_app_context;
use crate::router::Route;
use crate::services::page;

#[function_component(Header)]
pub fn header() -> Html {
    let context = use_app_context();
    let test_sponsor_url = (context.capability.is_privileged() && context.config.test_sponsor_control)
        .then(|| format!("{}{}", context.config.api_base_url, CREATE_TEST_SPONSOR_PATH));

    html! {
        <header class="header">
            <div class="container">
                <h1>{ "Sponsor Calendar" }</h1>
                <nav>
                    <Link<Route> to={Route::Home}>{ "Calendar" }</Link<Route>>
                    { " | " }
                    <Link<Route> to={Route::AddSponsor}>{ "Add Sponsor" }</Link<Route>>
                    if let Some(url) = test_sponsor_url {
                        { " | " }
                        <button
                            type="button"
                            class="btn btn-secondary"
                            onclick={Callback::from(move |_: MouseEvent| page::navigate(&url))}
                        >
                            { "Create Test Sponsor" }
                        </button>
                    }
                </nav>
            </div>
        </header>
    }
}
